//! In-memory element tree standing in for a document.

use swipeable_foundation::{ElementGeometry, ElementTree, GeometryError};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

#[derive(Debug, Clone)]
struct FakeNode {
    parent: Option<NodeId>,
    boundary: bool,
    geometry: Result<ElementGeometry, GeometryError>,
}

/// Element tree with a carousel root at [`FakeElementTree::root`].
///
/// Nodes default to plain, non-scrolling boxes.
#[derive(Debug, Clone)]
pub struct FakeElementTree {
    nodes: Vec<FakeNode>,
}

impl Default for FakeElementTree {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeElementTree {
    pub fn new() -> Self {
        Self {
            nodes: vec![FakeNode {
                parent: None,
                boundary: false,
                geometry: Ok(ElementGeometry::default()),
            }],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn add_child(&mut self, parent: NodeId) -> NodeId {
        self.push(parent, false, ElementGeometry::default())
    }

    pub fn add_scroller(&mut self, parent: NodeId, geometry: ElementGeometry) -> NodeId {
        self.push(parent, false, geometry)
    }

    /// Adds a slide or nested carousel root, where claim walks stop.
    pub fn add_boundary(&mut self, parent: NodeId) -> NodeId {
        self.push(parent, true, ElementGeometry::default())
    }

    /// Adds a chain of `depth` plain nodes below `parent` and returns the
    /// deepest one.
    pub fn add_chain(&mut self, parent: NodeId, depth: usize) -> NodeId {
        (0..depth).fold(parent, |node, _| self.add_child(node))
    }

    fn push(&mut self, parent: NodeId, boundary: bool, geometry: ElementGeometry) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(FakeNode {
            parent: Some(parent),
            boundary,
            geometry: Ok(geometry),
        });
        id
    }

    pub fn set_geometry(&mut self, node: NodeId, geometry: ElementGeometry) {
        self.nodes[node.0].geometry = Ok(geometry);
    }

    /// Makes geometry reads of `node` fail.
    pub fn fail_geometry(&mut self, node: NodeId, error: GeometryError) {
        self.nodes[node.0].geometry = Err(error);
    }

    pub fn set_scroll_left(&mut self, node: NodeId, scroll_left: f32) {
        if let Ok(geometry) = &mut self.nodes[node.0].geometry {
            geometry.scroll_left = scroll_left;
        }
    }

    pub fn set_scroll_top(&mut self, node: NodeId, scroll_top: f32) {
        if let Ok(geometry) = &mut self.nodes[node.0].geometry {
            geometry.scroll_top = scroll_top;
        }
    }
}

impl ElementTree for FakeElementTree {
    type Node = NodeId;

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(node.0).and_then(|n| n.parent)
    }

    fn is_swipe_boundary(&self, node: NodeId) -> bool {
        self.nodes.get(node.0).is_some_and(|n| n.boundary)
    }

    fn geometry(&self, node: NodeId) -> Result<ElementGeometry, GeometryError> {
        self.nodes
            .get(node.0)
            .ok_or(GeometryError::Detached)
            .and_then(|n| n.geometry.clone())
    }
}

/// Element scrolling horizontally: `scroll_width` of content in a
/// `client_width` box, scrolled to `scroll_left`.
pub fn horizontal_scroller(scroll_left: f32, scroll_width: f32, client_width: f32) -> ElementGeometry {
    ElementGeometry {
        scroll_left,
        scroll_width,
        client_width,
        ..ElementGeometry::default()
    }
}

pub fn vertical_scroller(scroll_top: f32, scroll_height: f32, client_height: f32) -> ElementGeometry {
    ElementGeometry {
        scroll_top,
        scroll_height,
        client_height,
        ..ElementGeometry::default()
    }
}
