//! Platform-independent gesture input.
//!
//! Platform integrations adapt touch, pointer and mouse events into
//! [`GestureInput`] values; the controller never sees platform types.

use swipeable_geometry::{parse_matrix_translation, Point, Size, SwipeAxis};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputSource {
    Touch,
    Pointer,
    /// Mouse input is only honoured when the carousel enables it.
    Mouse,
}

/// Measurements of the carousel root sampled once when a gesture starts.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ViewportMetrics {
    pub size: Size,
    /// Root padding at the start edge along the swipe axis.
    pub padding_start: f32,
    /// Root padding at the end edge along the swipe axis.
    pub padding_end: f32,
    /// Translation of the slide container if a transition is still running.
    pub live_transform: Option<Point>,
}

impl ViewportMetrics {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    pub fn with_padding(mut self, start: f32, end: f32) -> Self {
        self.padding_start = start;
        self.padding_end = end;
        self
    }

    pub fn with_live_transform(mut self, translation: Point) -> Self {
        self.live_transform = Some(translation);
        self
    }

    /// Reads the live translation from a computed `transform` style value.
    /// `none` and unparsable values mean no transition is in flight.
    pub fn with_computed_transform(mut self, css: &str) -> Self {
        self.live_transform = parse_matrix_translation(css);
        self
    }

    /// Bounding length along the axis.
    pub fn length(&self, axis: SwipeAxis) -> f32 {
        axis.dimension().of(self.size.width, self.size.height)
    }

    /// Length available to slides once padding is removed.
    pub fn content_length(&self, axis: SwipeAxis) -> f32 {
        self.length(axis) - self.padding_start - self.padding_end
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GestureKind {
    /// Touch start, pointer down or mouse down.
    Start(ViewportMetrics),
    Move,
    /// Touch end, pointer up or mouse up.
    End,
    /// Touch cancel: aborts without committing.
    Cancel,
    /// The mouse left the carousel root while pressed.
    Leave,
}

/// One input event, in page coordinates.
///
/// `target` is the innermost element under the pointer; it is only needed on
/// moves, where it seeds the scroll claim walk.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureInput<N> {
    pub source: InputSource,
    pub kind: GestureKind,
    pub position: Point,
    pub target: Option<N>,
}

impl<N> GestureInput<N> {
    pub fn start(source: InputSource, position: Point, viewport: ViewportMetrics) -> Self {
        Self {
            source,
            kind: GestureKind::Start(viewport),
            position,
            target: None,
        }
    }

    pub fn move_to(source: InputSource, position: Point, target: Option<N>) -> Self {
        Self {
            source,
            kind: GestureKind::Move,
            position,
            target,
        }
    }

    pub fn end(source: InputSource, position: Point) -> Self {
        Self {
            source,
            kind: GestureKind::End,
            position,
            target: None,
        }
    }

    pub fn cancel(source: InputSource) -> Self {
        Self {
            source,
            kind: GestureKind::Cancel,
            position: Point::ZERO,
            target: None,
        }
    }

    pub fn leave(source: InputSource, position: Point) -> Self {
        Self {
            source,
            kind: GestureKind::Leave,
            position,
            target: None,
        }
    }
}

/// What the platform should do with the event that was just handled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct MoveResponse {
    /// Suppress the browser's default action (page scroll).
    pub prevent_default: bool,
    /// A nested scroller owns the gesture; let native scrolling proceed.
    pub claimed: bool,
}

impl MoveResponse {
    pub const IGNORED: MoveResponse = MoveResponse {
        prevent_default: false,
        claimed: false,
    };

    pub(crate) fn prevent(prevent_default: bool) -> Self {
        Self {
            prevent_default,
            claimed: false,
        }
    }

    pub(crate) fn claimed() -> Self {
        Self {
            prevent_default: false,
            claimed: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_length_follows_axis() {
        let viewport = ViewportMetrics::new(Size::new(300.0, 500.0)).with_padding(10.0, 20.0);
        assert_eq!(viewport.length(SwipeAxis::X), 300.0);
        assert_eq!(viewport.length(SwipeAxis::YReverse), 500.0);
        assert_eq!(viewport.content_length(SwipeAxis::X), 270.0);
    }

    #[test]
    fn computed_transform_is_parsed() {
        let viewport = ViewportMetrics::new(Size::new(300.0, 200.0))
            .with_computed_transform("matrix(1, 0, 0, 1, -150, 0)");
        assert_eq!(viewport.live_transform, Some(Point::new(-150.0, 0.0)));

        let viewport = viewport.with_computed_transform("none");
        assert_eq!(viewport.live_transform, None);
    }

    #[test]
    fn constructors_set_kind() {
        let input: GestureInput<u32> = GestureInput::move_to(InputSource::Touch, Point::ZERO, Some(4));
        assert_eq!(input.kind, GestureKind::Move);
        assert_eq!(input.target, Some(4));
        let input: GestureInput<u32> = GestureInput::cancel(InputSource::Mouse);
        assert_eq!(input.kind, GestureKind::Cancel);
    }
}
