use super::*;

/// Minimal element tree: node `i` has parent `parents[i]`.
struct Tree {
    parents: Vec<Option<usize>>,
    geometry: Vec<Result<ElementGeometry, GeometryError>>,
    boundaries: Vec<usize>,
}

impl Tree {
    fn chain(len: usize) -> Self {
        Self {
            parents: (0..len).map(|i| i.checked_sub(1)).collect(),
            geometry: (0..len).map(|_| Ok(ElementGeometry::default())).collect(),
            boundaries: Vec::new(),
        }
    }

    fn set(&mut self, node: usize, geometry: ElementGeometry) {
        self.geometry[node] = Ok(geometry);
    }
}

impl ElementTree for Tree {
    type Node = usize;

    fn parent(&self, node: usize) -> Option<usize> {
        self.parents[node]
    }

    fn is_swipe_boundary(&self, node: usize) -> bool {
        self.boundaries.contains(&node)
    }

    fn geometry(&self, node: usize) -> Result<ElementGeometry, GeometryError> {
        self.geometry[node].clone()
    }
}

fn horizontal_scroller(scroll_left: f32) -> ElementGeometry {
    ElementGeometry {
        scroll_left,
        scroll_width: 600.0,
        client_width: 200.0,
        scroll_height: 100.0,
        client_height: 100.0,
        ..ElementGeometry::default()
    }
}

fn vertical_scroller(scroll_top: f32) -> ElementGeometry {
    ElementGeometry {
        scroll_top,
        scroll_width: 200.0,
        client_width: 200.0,
        scroll_height: 900.0,
        client_height: 300.0,
        ..ElementGeometry::default()
    }
}

// Node 0 is the carousel root, the highest index is the event target.

#[test]
fn nearest_scroller_wins() {
    let mut tree = Tree::chain(5);
    tree.set(1, horizontal_scroller(10.0));
    tree.set(3, horizontal_scroller(10.0));

    let owner = find_claim(&tree, 4, 0, ScrollDirection::Forward, SwipeAxis::X);
    assert_eq!(owner, Some(3));
}

#[test]
fn scroller_at_end_does_not_claim_forward_drag() {
    let mut tree = Tree::chain(4);
    tree.set(2, horizontal_scroller(400.0));

    assert_eq!(find_claim(&tree, 3, 0, ScrollDirection::Forward, SwipeAxis::X), None);
    assert_eq!(
        find_claim(&tree, 3, 0, ScrollDirection::Backward, SwipeAxis::X),
        Some(2)
    );
}

#[test]
fn scroller_at_start_does_not_claim_backward_drag() {
    let mut tree = Tree::chain(4);
    tree.set(2, horizontal_scroller(0.0));

    assert_eq!(find_claim(&tree, 3, 0, ScrollDirection::Backward, SwipeAxis::X), None);
    assert_eq!(
        find_claim(&tree, 3, 0, ScrollDirection::Forward, SwipeAxis::X),
        Some(2)
    );
}

#[test]
fn fractional_scroll_offset_is_rounded() {
    let mut tree = Tree::chain(3);
    tree.set(1, horizontal_scroller(399.6));
    assert_eq!(find_claim(&tree, 2, 0, ScrollDirection::Forward, SwipeAxis::X), None);

    tree.set(1, horizontal_scroller(0.4));
    assert_eq!(find_claim(&tree, 2, 0, ScrollDirection::Backward, SwipeAxis::X), None);
}

#[test]
fn first_qualifying_candidate_wins_even_if_farther_ones_exist() {
    let mut tree = Tree::chain(5);
    // Nearest scroller is at its end, so the next one up takes the drag.
    tree.set(3, horizontal_scroller(400.0));
    tree.set(2, horizontal_scroller(50.0));
    tree.set(1, horizontal_scroller(50.0));

    assert_eq!(
        find_claim(&tree, 4, 0, ScrollDirection::Forward, SwipeAxis::X),
        Some(2)
    );
}

#[test]
fn vertical_carousel_uses_vertical_metrics() {
    let mut tree = Tree::chain(3);
    tree.set(1, vertical_scroller(120.0));

    assert_eq!(find_claim(&tree, 2, 0, ScrollDirection::Forward, SwipeAxis::Y), Some(1));
    // The same element has no horizontal overflow to scroll.
    assert_eq!(find_claim(&tree, 2, 0, ScrollDirection::Forward, SwipeAxis::X), None);
}

#[test]
fn absolute_and_clipped_elements_are_skipped() {
    let mut tree = Tree::chain(4);
    tree.set(
        3,
        ElementGeometry {
            positioning: Positioning::Absolute,
            ..horizontal_scroller(10.0)
        },
    );
    tree.set(
        2,
        ElementGeometry {
            overflow_x: Overflow::Hidden,
            ..horizontal_scroller(10.0)
        },
    );
    assert_eq!(find_claim(&tree, 3, 0, ScrollDirection::Forward, SwipeAxis::X), None);

    tree.set(1, horizontal_scroller(10.0));
    assert_eq!(
        find_claim(&tree, 3, 0, ScrollDirection::Forward, SwipeAxis::X),
        Some(1)
    );
}

#[test]
fn walk_stops_at_nested_boundary() {
    let mut tree = Tree::chain(5);
    tree.set(1, horizontal_scroller(10.0));
    tree.boundaries.push(2);

    assert_eq!(find_claim(&tree, 4, 0, ScrollDirection::Forward, SwipeAxis::X), None);
}

#[test]
fn walk_excludes_root() {
    let mut tree = Tree::chain(3);
    tree.set(0, horizontal_scroller(10.0));
    assert_eq!(find_claim(&tree, 2, 0, ScrollDirection::Forward, SwipeAxis::X), None);
}

#[test]
fn geometry_failure_means_no_claim() {
    let mut tree = Tree::chain(4);
    tree.set(3, horizontal_scroller(10.0));
    tree.geometry[2] = Err(GeometryError::Detached);

    assert_eq!(find_claim(&tree, 3, 0, ScrollDirection::Forward, SwipeAxis::X), None);
    assert_eq!(
        collect_scroll_candidates(&tree, 3, 0),
        Err(GeometryError::Detached)
    );
}

#[test]
fn zero_client_length_is_not_overflow() {
    let geometry = ElementGeometry {
        scroll_width: 500.0,
        client_width: 0.0,
        ..ElementGeometry::default()
    };
    assert!(!geometry.has_scrollable_overflow());
}

#[test]
fn claim_slot_has_single_writer() {
    let first = CarouselId::next();
    let second = CarouselId::next();
    let mut claim: ScrollClaim<usize> = ScrollClaim::new();
    assert!(claim.is_free());

    assert!(claim.try_claim(first, ClaimOwner::Element(7)));
    assert!(!claim.try_claim(second, ClaimOwner::Carousel(second)));
    assert_eq!(claim.owner(), Some(ClaimOwner::Element(7)));
    assert!(claim.is_held_by_other(second));

    assert!(!claim.release(second));
    assert!(!claim.is_free());

    assert!(claim.try_claim(first, ClaimOwner::Carousel(first)));
    assert_eq!(claim.owner(), Some(ClaimOwner::Carousel(first)));
    assert!(claim.release(first));
    assert!(claim.is_free());
}

#[test]
fn carousel_ids_are_unique() {
    let a = CarouselId::next();
    let b = CarouselId::next();
    assert_ne!(a, b);
    assert!(b.raw() > a.raw());
}
