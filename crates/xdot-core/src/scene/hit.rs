use indexmap::IndexSet;

use crate::{
    geometry::Point,
    scene::{EdgeIndex, NodeIndex},
};

/// A node or edge of a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Element {
    Node(NodeIndex),
    Edge(EdgeIndex),
}

/// Elements to paint with the highlighted pen, in insertion order.
pub type Highlight = IndexSet<Element>;

/// A URL found under a point.
#[derive(Debug, Clone, PartialEq)]
pub struct Url {
    element: Element,
    url: String,
    highlight: Highlight,
}

impl Url {
    /// Creates a URL hit that highlights only the element itself.
    pub fn new(element: Element, url: impl Into<String>) -> Self {
        Self {
            element,
            url: url.into(),
            highlight: Highlight::from([element]),
        }
    }

    pub fn element(&self) -> Element {
        self.element
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn highlight(&self) -> &Highlight {
        &self.highlight
    }
}

/// A navigation target found under a point.
#[derive(Debug, Clone, PartialEq)]
pub struct Jump {
    element: Element,
    point: Point,
    highlight: Highlight,
}

impl Jump {
    /// Creates a jump that highlights only the element itself.
    pub fn new(element: Element, point: Point) -> Self {
        Self::with_highlight(element, point, Highlight::from([element]))
    }

    pub fn with_highlight(element: Element, point: Point, highlight: Highlight) -> Self {
        Self {
            element,
            point,
            highlight,
        }
    }

    pub fn element(&self) -> Element {
        self.element
    }

    /// Where the view should move to.
    pub fn point(&self) -> Point {
        self.point
    }

    pub fn highlight(&self) -> &Highlight {
        &self.highlight
    }
}
