use crate::{
    draw::Shape,
    geometry::{Bounds, Point, Size},
};

/// A laid out node.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    id: String,
    center: Point,
    bounds: Bounds,
    shapes: Vec<Shape>,
    url: Option<String>,
}

impl Node {
    /// Creates a node centered at `center` whose bounding box spans `size`.
    pub fn new(
        id: impl Into<String>,
        center: Point,
        size: Size,
        shapes: Vec<Shape>,
        url: Option<String>,
    ) -> Self {
        Self {
            id: id.into(),
            center,
            bounds: Bounds::new_from_center(center, size),
            shapes,
            url,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// Returns true if the point lies inside the node's bounding box.
    pub fn contains(&self, point: Point) -> bool {
        self.bounds.contains(point)
    }

    /// Returns the node URL if the point hits this node.
    pub fn url_at(&self, point: Point) -> Option<&str> {
        self.url().filter(|_| self.contains(point))
    }

    /// Returns the jump target (the node center) if the point hits this node.
    pub fn jump_at(&self, point: Point) -> Option<Point> {
        self.contains(point).then_some(self.center)
    }
}
