//! The swipeable views component.
//!
//! [`SwipeableViews`] owns the gesture controller of one carousel, its slide
//! list and the sink its events go to, and derives everything a renderer
//! needs from that state: container and root styles, which slides to mount,
//! and an animated index for renderers without CSS transitions.

use crate::keyboard::navigation_for;
use crate::key_event::KeyEvent;
use crate::style::{ContainerStyle, RootStyle, SlideStyle};
use swipeable_animation::IndexTransition;
use swipeable_foundation::{
    keys_equal, ChangeReason, ElementTree, EventSink, GestureContext, GestureController,
    GestureInput, GestureKind, MoveResponse, ScrollClaim, SlideIdentity, SlideSet, SwipeConfig,
    SwipeEvent, SwipePhase,
};
use swipeable_geometry::AxisPoint;

/// Sink used until the host installs one.
fn discard(_: SwipeEvent) {}

pub struct SwipeableViews<K> {
    controller: GestureController,
    slides: SlideSet<K>,
    identity: Box<dyn SlideIdentity<K>>,
    sink: Box<dyn EventSink>,
    first_frame_rendered: bool,
    transition: Option<IndexTransition>,
}

impl<K: PartialEq + 'static> SwipeableViews<K> {
    /// Creates the views with slide identity by key equality.
    pub fn new(config: SwipeConfig, slides: SlideSet<K>, index: usize) -> Self {
        Self::with_identity(config, slides, index, keys_equal::<K>)
    }
}

impl<K> SwipeableViews<K> {
    pub fn with_identity(
        config: SwipeConfig,
        slides: SlideSet<K>,
        index: usize,
        identity: impl SlideIdentity<K> + 'static,
    ) -> Self {
        Self {
            controller: GestureController::new(config, slides.len(), index),
            slides,
            identity: Box::new(identity),
            sink: Box::new(discard),
            first_frame_rendered: false,
            transition: None,
        }
    }

    pub fn with_event_sink(mut self, sink: impl EventSink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    pub fn set_event_sink(&mut self, sink: impl EventSink + 'static) {
        self.sink = Box::new(sink);
    }

    pub fn config(&self) -> &SwipeConfig {
        self.controller.config()
    }

    pub fn controller(&self) -> &GestureController {
        &self.controller
    }

    pub fn slides(&self) -> &SlideSet<K> {
        &self.slides
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Fractional index the gesture engine is at.
    pub fn current_index(&self) -> f32 {
        self.controller.index_current()
    }

    pub fn index_latest(&self) -> usize {
        self.controller.index_latest()
    }

    /// Index to draw this frame: the animated value while a transition runs,
    /// otherwise the engine's current index.
    pub fn displayed_index(&self) -> f32 {
        self.transition
            .as_ref()
            .map(IndexTransition::value)
            .unwrap_or_else(|| self.controller.index_current())
    }

    pub fn is_transitioning(&self) -> bool {
        self.transition.is_some()
    }

    /// Forwards one input event to the gesture engine.
    pub fn handle_input<T: ElementTree>(
        &mut self,
        input: &GestureInput<T::Node>,
        ctx: &mut GestureContext<'_, T>,
    ) -> MoveResponse {
        let mut input = *input;
        if let GestureKind::Start(viewport) = &mut input.kind {
            // Grabbing the container mid-animation continues from where it is.
            if let (Some(transition), None) = (&self.transition, viewport.live_transform) {
                let axis = self.controller.config().axis;
                let offset = -transition.value() * viewport.content_length(axis);
                let translation = axis.to_page(AxisPoint::new(offset, 0.0));
                log::trace!("swipeable: grabbed mid-transition at {:.3}", transition.value());
                viewport.live_transform = Some(translation);
            }
        }

        let before = self.controller.index_current();
        let response = self.controller.handle(&input, ctx, self.sink.as_mut());
        match input.kind {
            GestureKind::Start(_) if self.controller.phase() != SwipePhase::Idle => {
                self.transition = None;
            }
            GestureKind::End | GestureKind::Leave => self.animate_from(before),
            _ => {}
        }
        response
    }

    /// Notifies that the renderer finished the container transition.
    pub fn on_transition_end(&mut self) {
        self.transition = None;
        self.controller.on_transition_end(self.sink.as_mut());
    }

    /// Advances the built-in index animation by `delta_millis` and returns
    /// the index to draw. Reports the transition end when it finishes.
    pub fn advance(&mut self, delta_millis: u64) -> f32 {
        let Some(transition) = self.transition.as_mut() else {
            return self.controller.index_current();
        };
        let value = transition.advance(delta_millis);
        if transition.is_finished() {
            self.on_transition_end();
        }
        value
    }

    /// Moves to `index` on behalf of the host. Out-of-range values are
    /// clamped with a warning.
    pub fn set_index(&mut self, index: isize) {
        let before = self.displayed_index();
        self.transition = None;
        self.controller.set_index_for_slides(
            index,
            &self.slides,
            &self.slides,
            self.identity.as_ref(),
        );
        self.animate_from(before);
    }

    /// Replaces the slide list and moves to `index`. When the slide on
    /// screen is the same one in both lists, the change is not animated.
    pub fn set_slides(&mut self, slides: SlideSet<K>, index: isize) {
        let before = self.displayed_index();
        self.transition = None;
        self.controller
            .set_index_for_slides(index, &self.slides, &slides, self.identity.as_ref());
        self.slides = slides;
        self.animate_from(before);
    }

    /// Handles a key press. Returns whether it changed the index.
    pub fn on_key_event(&mut self, event: &KeyEvent) -> bool {
        if self.controller.config().disabled {
            return false;
        }
        let Some(navigation) = navigation_for(self.controller.config().axis, event) else {
            return false;
        };

        let before = self.displayed_index();
        let target = navigation.target(self.controller.index_latest(), self.slides.len());
        let changed = self
            .controller
            .navigate_to(target, ChangeReason::Keyboard, self.sink.as_mut());
        if changed {
            self.transition = None;
            self.animate_from(before);
        }
        changed
    }

    fn animate_from(&mut self, from: f32) {
        let to = self.controller.index_current();
        if from == to || !self.animates() {
            return;
        }
        self.transition = Some(IndexTransition::new(
            from,
            to,
            self.controller.config().spring_config,
        ));
    }

    fn animates(&self) -> bool {
        self.controller.config().animate_transitions && !self.controller.transition_suppressed()
    }

    pub fn container_style(&self) -> ContainerStyle {
        let config = self.controller.config();
        ContainerStyle::compute(
            config.axis,
            self.controller.index_current(),
            self.animates(),
            &config.spring_config,
        )
    }

    pub fn root_style(&self) -> RootStyle {
        RootStyle::compute(self.controller.config().axis)
    }

    /// Called once the first frame is on screen; from then on every slide is
    /// mounted.
    pub fn on_first_frame(&mut self) {
        self.first_frame_rendered = true;
    }

    /// Before the first frame only the committed slide is rendered.
    pub fn slide_is_mounted(&self, index: usize) -> bool {
        if index >= self.slides.len() {
            return false;
        }
        self.first_frame_rendered
            || self.controller.config().disable_lazy_loading
            || index == self.controller.index_latest()
    }

    pub fn slide_is_hidden(&self, index: usize) -> bool {
        index != self.controller.index_latest()
    }

    pub fn slide_style(&self, index: usize) -> SlideStyle {
        SlideStyle {
            mounted: self.slide_is_mounted(index),
            hidden: self.slide_is_hidden(index),
        }
    }

    pub fn mounted_slides(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.slides.len()).filter(move |index| self.slide_is_mounted(*index))
    }

    /// Releases the gesture before the views go away. Emits nothing.
    pub fn teardown<N: Copy + Eq>(&mut self, claim: &mut ScrollClaim<N>) {
        self.transition = None;
        self.controller.teardown(claim);
    }
}

#[cfg(test)]
#[path = "tests/views_tests.rs"]
mod tests;
