use std::fmt;

use indexmap::IndexMap;
use log::trace;

use crate::{
    draw::Shape,
    geometry::{Point, Size},
    scene::{Edge, EdgeEnd, Element, Highlight, Jump, Node, Url},
};

/// Position of a node in a graph's node arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeIndex(usize);

impl NodeIndex {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node#{}", self.0)
    }
}

/// Position of an edge in a graph's edge list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeIndex(usize);

impl EdgeIndex {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for EdgeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "edge#{}", self.0)
    }
}

/// Node arena with lookup by identifier.
///
/// Every registered node stays in the arena. The identifier lookup points at
/// the most recent registration, and only nodes that have shapes are listed
/// as visible.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeTable {
    nodes: Vec<Node>,
    by_id: IndexMap<String, NodeIndex>,
    visible: Vec<NodeIndex>,
}

impl NodeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node to the arena and points its identifier at it.
    pub fn register(&mut self, node: Node) -> NodeIndex {
        let index = NodeIndex::new(self.nodes.len());
        if !node.shapes().is_empty() {
            self.visible.push(index);
        }
        self.by_id.insert(node.id().to_string(), index);
        self.nodes.push(node);
        index
    }

    /// Resolves an identifier to the latest node registered under it.
    pub fn lookup(&self, id: &str) -> Option<NodeIndex> {
        self.by_id.get(id).copied()
    }

    pub fn get(&self, index: NodeIndex) -> Option<&Node> {
        self.nodes.get(index.index())
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// A fully built scene.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Graph {
    size: Size,
    shapes: Vec<Shape>,
    nodes: NodeTable,
    edges: Vec<Edge>,
}

impl Graph {
    /// Assembles a graph from its parts.
    ///
    /// Edge endpoints must index into `nodes`; edges that do not are dropped.
    pub fn new(size: Size, shapes: Vec<Shape>, nodes: NodeTable, edges: Vec<Edge>) -> Self {
        let edges = edges
            .into_iter()
            .filter(|edge| {
                nodes.get(edge.source()).is_some() && nodes.get(edge.destination()).is_some()
            })
            .collect();
        Self {
            size,
            shapes,
            nodes,
            edges,
        }
    }

    /// Size of the layout bounding box, zero when the graph had none.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Graph-level shapes such as the graph label and cluster outlines.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Visible nodes in registration order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeIndex, &Node)> + '_ {
        self.nodes
            .visible
            .iter()
            .filter_map(|&index| self.nodes.get(index).map(|node| (index, node)))
    }

    /// Number of visible nodes.
    pub fn visible_node_count(&self) -> usize {
        self.nodes.visible.len()
    }

    pub fn node(&self, index: NodeIndex) -> Option<&Node> {
        self.nodes.get(index)
    }

    /// Looks a node up by identifier, whether or not it is visible.
    pub fn node_by_id(&self, id: &str) -> Option<&Node> {
        self.nodes.lookup(id).and_then(|index| self.nodes.get(index))
    }

    pub fn node_index(&self, id: &str) -> Option<NodeIndex> {
        self.nodes.lookup(id)
    }

    pub fn edges(&self) -> impl Iterator<Item = (EdgeIndex, &Edge)> + '_ {
        self.edges
            .iter()
            .enumerate()
            .map(|(index, edge)| (EdgeIndex::new(index), edge))
    }

    pub fn edge(&self, index: EdgeIndex) -> Option<&Edge> {
        self.edges.get(index.index())
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the URL of the first visible node under `point`.
    pub fn url_at(&self, point: Point) -> Option<Url> {
        self.nodes().find_map(|(index, node)| {
            node.url_at(point)
                .map(|url| Url::new(Element::Node(index), url))
        })
    }

    /// Returns where a click at `point` should lead.
    ///
    /// Edge endpoints take precedence over nodes.
    pub fn jump_at(&self, point: Point) -> Option<Jump> {
        let edge_jump = self.edges().find_map(|(index, edge)| {
            let target = match edge.jump_at(point)? {
                EdgeEnd::Destination => edge.destination(),
                EdgeEnd::Source => edge.source(),
            };
            let node = self.node(target)?;
            let element = Element::Edge(index);
            trace!(edge = index.index(), target = target.index(); "Edge endpoint hit");
            Some(Jump::with_highlight(
                element,
                node.center(),
                Highlight::from([element, Element::Node(target)]),
            ))
        });

        edge_jump.or_else(|| {
            self.nodes().find_map(|(index, node)| {
                node.jump_at(point)
                    .map(|center| Jump::new(Element::Node(index), center))
            })
        })
    }
}
