//! Scroll claim arbitration between a carousel and nested native scrollers.
//!
//! When a drag starts inside a scrollable region that can still scroll in the
//! drag direction, that region claims the gesture and the carousel stands
//! still. The claim is a single slot shared by every carousel and scroller
//! involved in one gesture; it is passed around explicitly instead of living
//! in global state, so independent carousels stay isolated.

use smallvec::SmallVec;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use swipeable_geometry::{Dimension, ScrollDirection, SwipeAxis};

/// Guards the ancestor walk against malformed (cyclic) trees.
const MAX_WALK_DEPTH: usize = 512;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Positioning {
    #[default]
    Static,
    Relative,
    Absolute,
    Fixed,
    Sticky,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Overflow {
    #[default]
    Visible,
    Hidden,
    Clip,
    Scroll,
    Auto,
}

/// Snapshot of the scroll-related layout of one element.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ElementGeometry {
    pub positioning: Positioning,
    pub overflow_x: Overflow,
    pub scroll_left: f32,
    pub scroll_top: f32,
    pub scroll_width: f32,
    pub scroll_height: f32,
    pub client_width: f32,
    pub client_height: f32,
}

impl ElementGeometry {
    pub fn scroll_position(&self, dimension: Dimension) -> f32 {
        dimension.of(self.scroll_left, self.scroll_top)
    }

    pub fn scroll_length(&self, dimension: Dimension) -> f32 {
        dimension.of(self.scroll_width, self.scroll_height)
    }

    pub fn client_length(&self, dimension: Dimension) -> f32 {
        dimension.of(self.client_width, self.client_height)
    }

    /// Absolutely positioned elements and elements clipping horizontally
    /// never take a gesture from the carousel.
    pub fn never_claims(&self) -> bool {
        self.positioning == Positioning::Absolute || self.overflow_x == Overflow::Hidden
    }

    /// Content overflows the visible box in either dimension.
    pub fn has_scrollable_overflow(&self) -> bool {
        [Dimension::Width, Dimension::Height].into_iter().any(|dimension| {
            let client = self.client_length(dimension);
            client > 0.0 && self.scroll_length(dimension) > client
        })
    }

    /// Whether a drag in `direction` would move this element's native
    /// scroll along `axis` away from the boundary it is resting on.
    pub fn can_scroll(&self, direction: ScrollDirection, axis: SwipeAxis) -> bool {
        let dimension = axis.dimension();
        // Scroll offsets are not always integers.
        let position = self.scroll_position(dimension).round();
        match direction {
            ScrollDirection::Forward => {
                position + self.client_length(dimension) < self.scroll_length(dimension)
            }
            ScrollDirection::Backward => position > 0.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GeometryError {
    /// The node was removed from the document while being queried.
    Detached,
    /// The host could not produce a layout snapshot.
    Unavailable(String),
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::Detached => write!(f, "element is detached from the document"),
            GeometryError::Unavailable(reason) => write!(f, "geometry unavailable: {reason}"),
        }
    }
}

impl std::error::Error for GeometryError {}

/// Read-only view of the host's element tree.
pub trait ElementTree {
    type Node: Copy + Eq + fmt::Debug;

    fn parent(&self, node: Self::Node) -> Option<Self::Node>;

    /// Slides and nested carousel roots: they own their own gestures, so the
    /// claim walk stops there.
    fn is_swipe_boundary(&self, node: Self::Node) -> bool;

    fn geometry(&self, node: Self::Node) -> Result<ElementGeometry, GeometryError>;
}

/// Tree for hosts without nested scrollers; nothing ever claims.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoNestedScroll;

impl ElementTree for NoNestedScroll {
    type Node = ();

    fn parent(&self, _node: ()) -> Option<()> {
        None
    }

    fn is_swipe_boundary(&self, _node: ()) -> bool {
        true
    }

    fn geometry(&self, _node: ()) -> Result<ElementGeometry, GeometryError> {
        Ok(ElementGeometry::default())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollCandidate<N> {
    pub node: N,
    pub geometry: ElementGeometry,
}

pub type ScrollCandidates<N> = SmallVec<[ScrollCandidate<N>; 4]>;

/// Collects the scrollable elements between `target` (inclusive) and `root`
/// (exclusive), nearest first.
pub fn collect_scroll_candidates<T: ElementTree>(
    tree: &T,
    target: T::Node,
    root: T::Node,
) -> Result<ScrollCandidates<T::Node>, GeometryError> {
    let mut candidates = ScrollCandidates::new();
    let mut current = Some(target);
    let mut depth = 0;

    while let Some(node) = current {
        if node == root || tree.is_swipe_boundary(node) {
            break;
        }
        depth += 1;
        if depth > MAX_WALK_DEPTH {
            log::warn!(
                "swipeable: element tree deeper than {} levels, stopping claim walk",
                MAX_WALK_DEPTH
            );
            break;
        }

        let geometry = tree.geometry(node)?;
        if !geometry.never_claims() && geometry.has_scrollable_overflow() {
            candidates.push(ScrollCandidate { node, geometry });
        }
        current = tree.parent(node);
    }

    Ok(candidates)
}

/// Finds the nested scroller that should own a drag, if any.
///
/// The nearest qualifying element wins. Geometry failures mean "no claim":
/// native scroll arbitration is best effort.
pub fn find_claim<T: ElementTree>(
    tree: &T,
    target: T::Node,
    root: T::Node,
    direction: ScrollDirection,
    axis: SwipeAxis,
) -> Option<T::Node> {
    let candidates = match collect_scroll_candidates(tree, target, root) {
        Ok(candidates) => candidates,
        Err(err) => {
            log::debug!("swipeable: claim walk aborted: {}", err);
            return None;
        }
    };

    candidates
        .into_iter()
        .find(|candidate| candidate.geometry.can_scroll(direction, axis))
        .map(|candidate| candidate.node)
}

static NEXT_CAROUSEL_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of one gesture controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CarouselId(u64);

impl CarouselId {
    pub fn next() -> Self {
        CarouselId(NEXT_CAROUSEL_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Who currently owns the gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClaimOwner<N> {
    /// A carousel is moving its slides.
    Carousel(CarouselId),
    /// A nested element is scrolling natively.
    Element(N),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct HeldClaim<N> {
    holder: CarouselId,
    owner: ClaimOwner<N>,
}

/// Single-writer slot recording who owns the current gesture.
///
/// Only the controller that wrote the claim (its *holder*) may replace or
/// release it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrollClaim<N> {
    held: Option<HeldClaim<N>>,
}

impl<N> Default for ScrollClaim<N> {
    fn default() -> Self {
        Self { held: None }
    }
}

impl<N: Copy + Eq> ScrollClaim<N> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_free(&self) -> bool {
        self.held.is_none()
    }

    pub fn owner(&self) -> Option<ClaimOwner<N>> {
        self.held.map(|held| held.owner)
    }

    pub fn holder(&self) -> Option<CarouselId> {
        self.held.map(|held| held.holder)
    }

    pub fn is_held_by(&self, holder: CarouselId) -> bool {
        self.holder() == Some(holder)
    }

    /// Held by a controller other than `holder`.
    pub fn is_held_by_other(&self, holder: CarouselId) -> bool {
        matches!(self.holder(), Some(current) if current != holder)
    }

    /// Writes the claim if it is free or already held by `holder`.
    pub fn try_claim(&mut self, holder: CarouselId, owner: ClaimOwner<N>) -> bool {
        if self.is_held_by_other(holder) {
            return false;
        }
        self.held = Some(HeldClaim { holder, owner });
        true
    }

    /// Clears the claim if `holder` wrote it.
    pub fn release(&mut self, holder: CarouselId) -> bool {
        if self.is_held_by(holder) {
            self.held = None;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
#[path = "tests/claim_tests.rs"]
mod tests;
