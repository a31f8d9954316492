//! Robot-style driver for gesture tests.
//!
//! [`GestureRobot`] plays the platform: it turns presses, moves and releases
//! into [`GestureInput`]s, owns the element tree and the shared claim slot,
//! and records everything the carousel emits.
//!
//! ```
//! use swipeable_foundation::{GestureController, SwipeConfig, ViewportMetrics};
//! use swipeable_geometry::Size;
//! use swipeable_testing::GestureRobot;
//!
//! let controller = GestureController::new(SwipeConfig::default(), 3, 0);
//! let mut robot = GestureRobot::new(controller, ViewportMetrics::new(Size::new(300.0, 200.0)));
//! robot.swipe(250.0, 50.0, 100.0, 5);
//! assert_eq!(robot.target().index_latest(), 1);
//! ```

use crate::element_tree::{FakeElementTree, NodeId};
use crate::recorder::EventRecorder;
use swipeable_foundation::{
    GestureContext, GestureController, GestureInput, InputSource, MoveResponse, ScrollClaim,
    ViewportMetrics,
};
use swipeable_geometry::Point;
use swipeable_ui::SwipeableViews;

/// Anything that consumes gesture input the way a carousel does.
pub trait GestureTarget {
    fn dispatch(
        &mut self,
        input: &GestureInput<NodeId>,
        ctx: &mut GestureContext<'_, FakeElementTree>,
        recorder: &mut EventRecorder,
    ) -> MoveResponse;
}

impl GestureTarget for GestureController {
    fn dispatch(
        &mut self,
        input: &GestureInput<NodeId>,
        ctx: &mut GestureContext<'_, FakeElementTree>,
        recorder: &mut EventRecorder,
    ) -> MoveResponse {
        self.handle(input, ctx, recorder)
    }
}

/// Views report to their own sink; install a clone of the robot's recorder
/// with [`SwipeableViews::with_event_sink`] to observe them.
impl<K> GestureTarget for SwipeableViews<K> {
    fn dispatch(
        &mut self,
        input: &GestureInput<NodeId>,
        ctx: &mut GestureContext<'_, FakeElementTree>,
        _recorder: &mut EventRecorder,
    ) -> MoveResponse {
        self.handle_input(input, ctx)
    }
}

pub struct GestureRobot<G> {
    target: G,
    tree: FakeElementTree,
    claim: ScrollClaim<NodeId>,
    recorder: EventRecorder,
    viewport: ViewportMetrics,
    source: InputSource,
    pointer: Point,
    hit: Option<NodeId>,
    last_response: MoveResponse,
}

impl<G: GestureTarget> GestureRobot<G> {
    pub fn new(target: G, viewport: ViewportMetrics) -> Self {
        Self {
            target,
            tree: FakeElementTree::new(),
            claim: ScrollClaim::new(),
            recorder: EventRecorder::new(),
            viewport,
            source: InputSource::Touch,
            pointer: Point::ZERO,
            hit: None,
            last_response: MoveResponse::IGNORED,
        }
    }

    pub fn with_tree(mut self, tree: FakeElementTree) -> Self {
        self.tree = tree;
        self
    }

    pub fn with_source(mut self, source: InputSource) -> Self {
        self.source = source;
        self
    }

    pub fn with_recorder(mut self, recorder: EventRecorder) -> Self {
        self.recorder = recorder;
        self
    }

    pub fn target(&self) -> &G {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut G {
        &mut self.target
    }

    pub fn tree_mut(&mut self) -> &mut FakeElementTree {
        &mut self.tree
    }

    pub fn claim(&self) -> &ScrollClaim<NodeId> {
        &self.claim
    }

    pub fn claim_mut(&mut self) -> &mut ScrollClaim<NodeId> {
        &mut self.claim
    }

    pub fn recorder(&self) -> &EventRecorder {
        &self.recorder
    }

    pub fn set_viewport(&mut self, viewport: ViewportMetrics) {
        self.viewport = viewport;
    }

    /// Element reported under the pointer on subsequent moves.
    pub fn set_hit(&mut self, node: Option<NodeId>) {
        self.hit = node;
    }

    pub fn last_response(&self) -> MoveResponse {
        self.last_response
    }

    pub fn send(&mut self, input: GestureInput<NodeId>) -> MoveResponse {
        let mut ctx = GestureContext::new(&self.tree, self.tree.root(), &mut self.claim);
        self.last_response = self.target.dispatch(&input, &mut ctx, &mut self.recorder);
        self.last_response
    }

    pub fn press(&mut self, x: f32, y: f32) {
        self.pointer = Point::new(x, y);
        self.send(GestureInput::start(self.source, self.pointer, self.viewport));
    }

    pub fn move_to(&mut self, x: f32, y: f32) -> MoveResponse {
        self.pointer = Point::new(x, y);
        self.send(GestureInput::move_to(self.source, self.pointer, self.hit))
    }

    pub fn release(&mut self) {
        self.send(GestureInput::end(self.source, self.pointer));
    }

    pub fn cancel(&mut self) {
        self.send(GestureInput::cancel(self.source));
    }

    /// The pointer leaves the carousel root.
    pub fn leave(&mut self) {
        self.send(GestureInput::leave(self.source, self.pointer));
    }

    /// Press at `from`, move in `steps` equal increments to `to`, release.
    pub fn drag(&mut self, from: Point, to: Point, steps: usize) {
        self.press(from.x, from.y);
        let steps = steps.max(1);
        for i in 1..=steps {
            let t = i as f32 / steps as f32;
            let x = from.x + (to.x - from.x) * t;
            let y = from.y + (to.y - from.y) * t;
            self.move_to(x, y);
        }
        self.release();
    }

    /// Horizontal drag at height `y`.
    pub fn swipe(&mut self, from_x: f32, y: f32, to_x: f32, steps: usize) {
        self.drag(Point::new(from_x, y), Point::new(to_x, y), steps);
    }
}
