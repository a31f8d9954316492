use crate::geometry::Point;
use std::fmt;

/// Direction in which slides are laid out and swiped.
///
/// The two horizontal senses share the `width` metrics, the two vertical
/// senses share the `height` metrics. Reversed axes lay slides out from the
/// far edge, so a forward swipe moves the pointer towards increasing page
/// coordinates instead of decreasing ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SwipeAxis {
    /// Left to right.
    #[default]
    X,
    /// Right to left.
    XReverse,
    /// Top to bottom.
    Y,
    /// Bottom to top.
    YReverse,
}

/// Flex layout direction for the slide container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlexDirection {
    Row,
    RowReverse,
    Column,
    ColumnReverse,
}

impl FlexDirection {
    pub fn as_css(self) -> &'static str {
        match self {
            FlexDirection::Row => "row",
            FlexDirection::RowReverse => "row-reverse",
            FlexDirection::Column => "column",
            FlexDirection::ColumnReverse => "column-reverse",
        }
    }
}

/// Layout dimension sampled from an element for a given axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Width,
    Height,
}

impl Dimension {
    /// Bounding-box length property (`width` / `height`).
    pub fn length_property(self) -> &'static str {
        match self {
            Dimension::Width => "width",
            Dimension::Height => "height",
        }
    }

    /// Scroll offset property (`scrollLeft` / `scrollTop`).
    pub fn scroll_position_property(self) -> &'static str {
        match self {
            Dimension::Width => "scrollLeft",
            Dimension::Height => "scrollTop",
        }
    }

    /// Scrollable content extent property (`scrollWidth` / `scrollHeight`).
    pub fn scroll_length_property(self) -> &'static str {
        match self {
            Dimension::Width => "scrollWidth",
            Dimension::Height => "scrollHeight",
        }
    }

    /// Visible extent property (`clientWidth` / `clientHeight`).
    pub fn client_length_property(self) -> &'static str {
        match self {
            Dimension::Width => "clientWidth",
            Dimension::Height => "clientHeight",
        }
    }

    /// Clip property used on the carousel root (`overflow-x` / `overflow-y`).
    pub fn overflow_property(self) -> &'static str {
        match self {
            Dimension::Width => "overflow-x",
            Dimension::Height => "overflow-y",
        }
    }

    #[inline]
    pub fn of(self, width: f32, height: f32) -> f32 {
        match self {
            Dimension::Width => width,
            Dimension::Height => height,
        }
    }
}

/// Pointer coordinate expressed in an axis-local frame.
///
/// `primary` runs along the swipe axis, `cross` is perpendicular to it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AxisPoint {
    pub primary: f32,
    pub cross: f32,
}

impl AxisPoint {
    pub const fn new(primary: f32, cross: f32) -> Self {
        Self { primary, cross }
    }
}

impl From<AxisPoint> for Point {
    fn from(point: AxisPoint) -> Self {
        Point::new(point.primary, point.cross)
    }
}

/// Direction of a drag in native scroll terms.
///
/// `Forward` grows the scroll offset of a scrollable element (content moves
/// towards the start edge), `Backward` shrinks it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScrollDirection {
    Forward,
    Backward,
}

/// Signed 2x2 matrix with entries in {-1, 0, 1}.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RotationMatrix {
    primary: [i8; 2],
    cross: [i8; 2],
}

impl RotationMatrix {
    #[inline]
    fn apply(self, point: Point) -> AxisPoint {
        AxisPoint {
            primary: f32::from(self.primary[0]) * point.x + f32::from(self.primary[1]) * point.y,
            cross: f32::from(self.cross[0]) * point.x + f32::from(self.cross[1]) * point.y,
        }
    }
}

const ROTATION_X: RotationMatrix = RotationMatrix {
    primary: [1, 0],
    cross: [0, 1],
};
const ROTATION_X_REVERSE: RotationMatrix = RotationMatrix {
    primary: [-1, 0],
    cross: [0, 1],
};
const ROTATION_Y: RotationMatrix = RotationMatrix {
    primary: [0, 1],
    cross: [1, 0],
};
const ROTATION_Y_REVERSE: RotationMatrix = RotationMatrix {
    primary: [0, -1],
    cross: [-1, 0],
};

impl SwipeAxis {
    pub const ALL: [SwipeAxis; 4] = [
        SwipeAxis::X,
        SwipeAxis::XReverse,
        SwipeAxis::Y,
        SwipeAxis::YReverse,
    ];

    /// Parses the conventional axis names `x`, `x-reverse`, `y`, `y-reverse`.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim() {
            "x" => Some(SwipeAxis::X),
            "x-reverse" => Some(SwipeAxis::XReverse),
            "y" => Some(SwipeAxis::Y),
            "y-reverse" => Some(SwipeAxis::YReverse),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SwipeAxis::X => "x",
            SwipeAxis::XReverse => "x-reverse",
            SwipeAxis::Y => "y",
            SwipeAxis::YReverse => "y-reverse",
        }
    }

    #[inline]
    pub fn is_horizontal(self) -> bool {
        matches!(self, SwipeAxis::X | SwipeAxis::XReverse)
    }

    #[inline]
    pub fn is_vertical(self) -> bool {
        !self.is_horizontal()
    }

    #[inline]
    pub fn is_reversed(self) -> bool {
        matches!(self, SwipeAxis::XReverse | SwipeAxis::YReverse)
    }

    pub fn flex_direction(self) -> FlexDirection {
        match self {
            SwipeAxis::X => FlexDirection::Row,
            SwipeAxis::XReverse => FlexDirection::RowReverse,
            SwipeAxis::Y => FlexDirection::Column,
            SwipeAxis::YReverse => FlexDirection::ColumnReverse,
        }
    }

    /// Dimension along which slides are measured and natively scrolled.
    pub fn dimension(self) -> Dimension {
        if self.is_horizontal() {
            Dimension::Width
        } else {
            Dimension::Height
        }
    }

    fn rotation_matrix(self) -> RotationMatrix {
        match self {
            SwipeAxis::X => ROTATION_X,
            SwipeAxis::XReverse => ROTATION_X_REVERSE,
            SwipeAxis::Y => ROTATION_Y,
            SwipeAxis::YReverse => ROTATION_Y_REVERSE,
        }
    }

    /// Maps a page coordinate into the axis-local frame.
    ///
    /// In that frame a decreasing `primary` always means "towards the next
    /// slide", whatever the axis.
    #[inline]
    pub fn rotate(self, point: Point) -> AxisPoint {
        self.rotation_matrix().apply(point)
    }

    /// Maps an axis-local coordinate back to the page. Every rotation used
    /// here is its own inverse.
    #[inline]
    pub fn to_page(self, point: AxisPoint) -> Point {
        self.rotate(point.into()).into()
    }

    /// Translation for the slide container when it shows `percent / 100`
    /// slides of offset.
    pub fn transform_for(self, percent: f32) -> String {
        let t = normalize_zero(percent);
        let neg = normalize_zero(-percent);
        match self {
            SwipeAxis::X => format!("translate({neg}%, 0)"),
            SwipeAxis::XReverse => format!("translate({t}%, 0)"),
            SwipeAxis::Y => format!("translate(0, {neg}%)"),
            SwipeAxis::YReverse => format!("translate(0, {t}%)"),
        }
    }

    pub fn length_property(self) -> &'static str {
        self.dimension().length_property()
    }

    pub fn scroll_property(self) -> &'static str {
        self.dimension().scroll_position_property()
    }

    pub fn scroll_length_property(self) -> &'static str {
        self.dimension().scroll_length_property()
    }

    pub fn client_property(self) -> &'static str {
        self.dimension().client_length_property()
    }

    pub fn overflow_property(self) -> &'static str {
        self.dimension().overflow_property()
    }

    /// Classifies a drag from `start_primary` to `current_primary` (both
    /// axis-local) in the scroll direction a native scroller would apply.
    pub fn native_scroll_direction(self, start_primary: f32, current_primary: f32) -> ScrollDirection {
        let towards_higher = current_primary >= start_primary;
        let forward = if self.is_reversed() {
            towards_higher
        } else {
            !towards_higher
        };
        if forward {
            ScrollDirection::Forward
        } else {
            ScrollDirection::Backward
        }
    }
}

impl fmt::Display for SwipeAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Keeps `-0` out of generated CSS.
#[inline]
fn normalize_zero(value: f32) -> f32 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}

#[cfg(test)]
#[path = "tests/axis_tests.rs"]
mod tests;
