//! Swipe gesture state machine.
//!
//! [`GestureController`] turns a stream of [`GestureInput`]s into a
//! fractional slide index, decides which slide a released drag settles on
//! and negotiates ownership of the gesture with nested native scrollers
//! through a shared [`ScrollClaim`].

use super::commit::{commit_target, Release};
use crate::claim::{find_claim, CarouselId, ClaimOwner, ElementTree, ScrollClaim};
use crate::config::SwipeConfig;
use crate::events::{ChangeReason, EventSink, SwipeEvent, SwitchReason};
use crate::index::{try_compute_index, IndexParams};
use crate::input::{GestureInput, GestureKind, InputSource, MoveResponse, ViewportMetrics};
use crate::slides::{clamp_index, display_same_slide, SlideIdentity, SlideSet};
use crate::velocity::VelocityFilter;
use swipeable_geometry::{AxisPoint, Point};

/// Where the current gesture stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwipePhase {
    /// No gesture in progress.
    Idle,
    /// Pressed, no move seen yet.
    Starting,
    /// Moving, but not yet classified.
    Deciding,
    /// The carousel follows the pointer.
    Swiping,
    /// A nested scroller owns the gesture.
    NativeClaimed,
    /// Classified as a cross-axis scroll; the rest of the gesture is ignored.
    Released,
}

/// Ephemeral state of one gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
struct DragSession {
    source: InputSource,
    phase: SwipePhase,
    start_index: f32,
    start: AxisPoint,
    last: AxisPoint,
    velocity: VelocityFilter,
    view_length: f32,
    /// The carousel applied at least one move.
    moved: bool,
}

/// Collaborators a move needs: the host's element tree, the carousel root
/// and the claim slot shared by every carousel taking part in the gesture.
pub struct GestureContext<'a, T: ElementTree> {
    pub tree: &'a T,
    pub root: T::Node,
    pub claim: &'a mut ScrollClaim<T::Node>,
}

impl<'a, T: ElementTree> GestureContext<'a, T> {
    pub fn new(tree: &'a T, root: T::Node, claim: &'a mut ScrollClaim<T::Node>) -> Self {
        Self { tree, root, claim }
    }
}

/// Gesture engine of one carousel.
#[derive(Debug, Clone)]
pub struct GestureController {
    id: CarouselId,
    config: SwipeConfig,
    slide_count: usize,
    index_current: f32,
    index_latest: usize,
    is_dragging: bool,
    display_same_slide: bool,
    session: Option<DragSession>,
}

impl GestureController {
    pub fn new(config: SwipeConfig, slide_count: usize, index: usize) -> Self {
        let index = if slide_count == 0 {
            0
        } else {
            clamp_index(index as isize, slide_count)
        };
        Self {
            id: CarouselId::next(),
            config: config.sanitized(),
            slide_count,
            index_current: index as f32,
            index_latest: index,
            is_dragging: false,
            display_same_slide: false,
            session: None,
        }
    }

    pub fn id(&self) -> CarouselId {
        self.id
    }

    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    /// Fractional index currently displayed.
    pub fn index_current(&self) -> f32 {
        self.index_current
    }

    /// Last committed integer index.
    pub fn index_latest(&self) -> usize {
        self.index_latest
    }

    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    pub fn display_same_slide(&self) -> bool {
        self.display_same_slide
    }

    /// Whether index changes should currently be shown without animation.
    pub fn transition_suppressed(&self) -> bool {
        self.is_dragging || self.display_same_slide
    }

    pub fn phase(&self) -> SwipePhase {
        self.session
            .map(|session| session.phase)
            .unwrap_or(SwipePhase::Idle)
    }

    /// Smoothed primary-axis velocity of the active gesture.
    pub fn velocity(&self) -> f32 {
        self.session
            .map(|session| session.velocity.value())
            .unwrap_or(0.0)
    }

    fn index_max(&self) -> usize {
        self.slide_count.saturating_sub(1)
    }

    /// Routes one input event to the matching gesture step.
    pub fn handle<T, S>(
        &mut self,
        input: &GestureInput<T::Node>,
        ctx: &mut GestureContext<'_, T>,
        sink: &mut S,
    ) -> MoveResponse
    where
        T: ElementTree,
        S: EventSink + ?Sized,
    {
        if input.source == InputSource::Mouse && !self.config.enable_mouse_events {
            return MoveResponse::IGNORED;
        }

        match input.kind {
            GestureKind::Start(viewport) => {
                if self.config.disabled {
                    return MoveResponse::IGNORED;
                }
                self.start(input.source, input.position, viewport, ctx.claim);
                MoveResponse::IGNORED
            }
            GestureKind::Move => {
                if self.config.disabled {
                    return MoveResponse::IGNORED;
                }
                self.drag(input.position, input.target, ctx, sink)
            }
            GestureKind::End => {
                self.end(ctx.claim, sink);
                MoveResponse::IGNORED
            }
            GestureKind::Leave => {
                let mouse_session = self
                    .session
                    .is_some_and(|session| session.source == InputSource::Mouse);
                if mouse_session {
                    self.end(ctx.claim, sink);
                }
                MoveResponse::IGNORED
            }
            GestureKind::Cancel => {
                self.cancel(ctx.claim);
                MoveResponse::IGNORED
            }
        }
    }

    /// Begins a gesture at `position` (page coordinates).
    pub fn start<N: Copy + Eq>(
        &mut self,
        source: InputSource,
        position: Point,
        viewport: ViewportMetrics,
        claim: &mut ScrollClaim<N>,
    ) {
        if self.session.is_some() {
            log::debug!("swipeable: gesture restarted before the previous one ended");
            claim.release(self.id);
        }

        let axis = self.config.axis;
        let point = axis.rotate(position);
        let view_length = viewport.length(axis);
        if !view_length.is_finite() || view_length <= 0.0 {
            log::warn!(
                "swipeable: viewport length {} along {}, the drag will not move slides",
                view_length,
                axis
            );
        }

        // A transition interrupted mid-flight resumes from where it is.
        let start_index = match viewport.live_transform {
            Some(translation) => {
                let index = -axis.rotate(translation).primary / viewport.content_length(axis);
                if index.is_finite() {
                    index
                } else {
                    0.0
                }
            }
            None => self.index_current,
        };

        self.session = Some(DragSession {
            source,
            phase: SwipePhase::Starting,
            start_index,
            start: point,
            last: point,
            velocity: VelocityFilter::new(),
            view_length,
            moved: false,
        });
    }

    /// Processes a pointer move. `target` is the innermost element under the
    /// pointer, used to look for nested scrollers.
    pub fn drag<T, S>(
        &mut self,
        position: Point,
        target: Option<T::Node>,
        ctx: &mut GestureContext<'_, T>,
        sink: &mut S,
    ) -> MoveResponse
    where
        T: ElementTree,
        S: EventSink + ?Sized,
    {
        let Some(mut session) = self.session.take() else {
            return MoveResponse::IGNORED;
        };

        // Another carousel already owns this gesture.
        let response = if ctx.claim.is_held_by_other(self.id) {
            MoveResponse::IGNORED
        } else {
            let point = self.config.axis.rotate(position);
            match session.phase {
                SwipePhase::Starting | SwipePhase::Deciding => {
                    self.decide(&mut session, point, target, ctx)
                }
                SwipePhase::Swiping => self.swipe(&mut session, point, target, ctx, sink),
                SwipePhase::NativeClaimed => self.follow_claim(&mut session, point, target, ctx),
                SwipePhase::Released | SwipePhase::Idle => MoveResponse::IGNORED,
            }
        };

        self.session = Some(session);
        response
    }

    fn decide<T: ElementTree>(
        &mut self,
        session: &mut DragSession,
        point: AxisPoint,
        target: Option<T::Node>,
        ctx: &mut GestureContext<'_, T>,
    ) -> MoveResponse {
        session.phase = SwipePhase::Deciding;
        let dx = (point.primary - session.start.primary).abs();
        let dy = (point.cross - session.start.cross).abs();

        // Hand vertical overdrag to the page so it can scroll.
        if !self.config.resistance && self.config.axis.is_vertical() {
            let index_max = self.index_max() as f32;
            let past_first = self.index_current <= 0.0 && session.start.primary < point.primary;
            let past_last =
                self.index_current >= index_max && session.start.primary > point.primary;
            if past_first || past_last {
                log::debug!("swipeable: vertical drag past the edge, releasing to the page");
                session.phase = SwipePhase::Released;
                return MoveResponse::IGNORED;
            }
        }

        let along_axis = dx > dy;
        let origin = session.start.primary;
        if along_axis && self.try_native_claim(session, origin, point, target, ctx) {
            session.last = point;
            return MoveResponse::claimed();
        }

        let threshold = self.config.uncertainty_threshold;
        if along_axis && dx > threshold {
            session.phase = SwipePhase::Swiping;
            session.start.primary = point.primary;
            session.last = point;
            log::trace!("swipeable: drag classified as swipe");
            return MoveResponse::prevent(true);
        }
        if dy > threshold {
            session.phase = SwipePhase::Released;
            log::trace!("swipeable: drag classified as scroll");
        }
        session.last = point;
        MoveResponse::prevent(along_axis)
    }

    fn swipe<T, S>(
        &mut self,
        session: &mut DragSession,
        point: AxisPoint,
        target: Option<T::Node>,
        ctx: &mut GestureContext<'_, T>,
        sink: &mut S,
    ) -> MoveResponse
    where
        T: ElementTree,
        S: EventSink + ?Sized,
    {
        session.velocity.add_delta(point.primary - session.last.primary);
        session.last = point;

        let origin = session.start.primary;
        if ctx.claim.is_free() && self.try_native_claim(session, origin, point, target, ctx) {
            return MoveResponse::claimed();
        }

        let params = IndexParams {
            start_index: session.start_index,
            start_primary: session.start.primary,
            current_primary: point.primary,
            view_length: session.view_length,
            index_max: self.index_max() as f32,
            resistance: self.config.resistance,
        };
        let result = match try_compute_index(params) {
            Ok(result) => result,
            Err(err) => {
                log::trace!("swipeable: move ignored: {}", err);
                return MoveResponse::prevent(true);
            }
        };

        match result.corrected_start {
            // Pinned at an edge: leave the slot to an enclosing carousel.
            Some(corrected) => session.start.primary = corrected,
            // Outer carousels stand down once this one moves.
            None => {
                ctx.claim.try_claim(self.id, ClaimOwner::Carousel(self.id));
            }
        }

        session.moved = true;
        self.index_current = result.index;
        self.is_dragging = true;
        self.display_same_slide = false;
        log::trace!(
            "swipeable: index {:.3}, velocity {:.2}",
            result.index,
            session.velocity.value()
        );
        sink.emit(SwipeEvent::Switching {
            index: result.index,
            reason: SwitchReason::Move,
        });
        MoveResponse::prevent(true)
    }

    /// Keeps a native claim alive while its owner can still scroll; once it
    /// reaches its edge the carousel resumes from the current position.
    fn follow_claim<T: ElementTree>(
        &mut self,
        session: &mut DragSession,
        point: AxisPoint,
        target: Option<T::Node>,
        ctx: &mut GestureContext<'_, T>,
    ) -> MoveResponse {
        // The scroller is asked about the latest direction of travel, so a
        // reversal is seen before the pointer crosses back over the start.
        let origin = session.last.primary;
        if point.primary == origin || self.try_native_claim(session, origin, point, target, ctx) {
            session.last = point;
            return MoveResponse::claimed();
        }

        ctx.claim.release(self.id);
        log::debug!("swipeable: nested scroller reached its edge, resuming swipe");
        session.phase = SwipePhase::Swiping;
        session.start.primary = point.primary;
        session.start_index = self.index_current;
        session.last = point;
        session.velocity.reset();
        MoveResponse::prevent(true)
    }

    fn try_native_claim<T: ElementTree>(
        &self,
        session: &mut DragSession,
        origin: f32,
        point: AxisPoint,
        target: Option<T::Node>,
        ctx: &mut GestureContext<'_, T>,
    ) -> bool {
        if self.config.ignore_native_scroll {
            return false;
        }
        let Some(target) = target else {
            return false;
        };

        let axis = self.config.axis;
        let direction = axis.native_scroll_direction(origin, point.primary);
        let Some(owner) = find_claim(ctx.tree, target, ctx.root, direction, axis) else {
            return false;
        };
        if !ctx.claim.try_claim(self.id, ClaimOwner::Element(owner)) {
            return false;
        }
        if session.phase != SwipePhase::NativeClaimed {
            log::debug!("swipeable: {:?} claimed the gesture", owner);
        }
        session.phase = SwipePhase::NativeClaimed;
        true
    }

    /// Ends the gesture and commits an index if the carousel moved.
    pub fn end<N, S>(&mut self, claim: &mut ScrollClaim<N>, sink: &mut S)
    where
        N: Copy + Eq,
        S: EventSink + ?Sized,
    {
        claim.release(self.id);
        let Some(session) = self.session.take() else {
            return;
        };

        let commits = match session.phase {
            SwipePhase::Swiping => true,
            SwipePhase::NativeClaimed => session.moved,
            _ => false,
        };
        if commits {
            self.commit(session.velocity.value(), sink);
        } else {
            log::trace!("swipeable: gesture ended in {:?}, nothing to commit", session.phase);
        }
    }

    fn commit<S: EventSink + ?Sized>(&mut self, velocity: f32, sink: &mut S) {
        let previous = self.index_latest;
        let current = self.index_current;
        let index = commit_target(
            Release {
                current,
                latest: previous,
                velocity,
                index_max: self.index_max(),
            },
            self.config.threshold,
            self.config.hysteresis,
        );

        self.index_current = index as f32;
        self.index_latest = index;
        self.is_dragging = false;
        log::debug!(
            "swipeable: released at {:.3} with velocity {:.2}, committing {}",
            current,
            velocity,
            index
        );

        sink.emit(SwipeEvent::Switching {
            index: index as f32,
            reason: SwitchReason::End,
        });
        if index != previous {
            sink.emit(SwipeEvent::ChangeIndex {
                index,
                previous,
                reason: ChangeReason::Swipe,
            });
        }

        // Already resting on the committed slide: nothing will animate, so no
        // transition end will arrive.
        if current == index as f32 {
            self.on_transition_end(sink);
        }
    }

    /// Aborts the gesture without committing or emitting anything.
    pub fn cancel<N: Copy + Eq>(&mut self, claim: &mut ScrollClaim<N>) {
        claim.release(self.id);
        if let Some(session) = self.session.take() {
            log::debug!("swipeable: gesture cancelled in {:?}", session.phase);
        }
        self.is_dragging = false;
        self.index_current = self.index_latest as f32;
    }

    /// Releases everything held by this carousel before it goes away.
    pub fn teardown<N: Copy + Eq>(&mut self, claim: &mut ScrollClaim<N>) {
        self.cancel(claim);
    }

    /// Reports that the slide container finished its transition.
    pub fn on_transition_end<S: EventSink + ?Sized>(&mut self, sink: &mut S) {
        if self.display_same_slide || self.is_dragging {
            return;
        }
        sink.emit(SwipeEvent::TransitionEnd);
    }

    /// Applies an index requested by the host. Out-of-range values are
    /// clamped with a warning. Emits nothing.
    pub fn set_index(&mut self, index: isize, same_slide: bool) {
        let index = clamp_index(index, self.slide_count);
        self.index_current = index as f32;
        self.index_latest = index;
        self.display_same_slide = same_slide;
    }

    /// Applies a host index change that may come with a new slide list.
    /// When the slide on screen stays the same one, the change is not
    /// animated.
    pub fn set_index_for_slides<K>(
        &mut self,
        index: isize,
        previous: &SlideSet<K>,
        next: &SlideSet<K>,
        identity: &dyn SlideIdentity<K>,
    ) {
        let previous_index = self.index_latest;
        self.slide_count = next.len();
        let clamped = clamp_index(index, self.slide_count);
        let same_slide = display_same_slide(previous, previous_index, next, clamped, identity);
        self.set_index(clamped as isize, same_slide);
    }

    /// Commits `index` on behalf of a discrete navigation (keyboard) and
    /// reports the change. Returns whether the index changed.
    pub fn navigate_to<S: EventSink + ?Sized>(
        &mut self,
        index: usize,
        reason: ChangeReason,
        sink: &mut S,
    ) -> bool {
        if self.session.is_some() {
            return false;
        }
        let index = index.min(self.index_max());
        let previous = self.index_latest;
        if index == previous {
            return false;
        }
        self.index_current = index as f32;
        self.index_latest = index;
        self.display_same_slide = false;
        sink.emit(SwipeEvent::ChangeIndex {
            index,
            previous,
            reason,
        });
        true
    }

    pub fn set_slide_count(&mut self, count: usize) {
        self.slide_count = count;
        if count > 0 && self.index_latest > self.index_max() {
            self.set_index(self.index_latest as isize, false);
        }
    }
}

#[cfg(test)]
#[path = "../tests/swipe_tests.rs"]
mod tests;
