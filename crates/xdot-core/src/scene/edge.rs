use crate::{draw::Shape, geometry::Point, scene::NodeIndex};

/// Distance from an edge endpoint within which a point counts as a hit.
pub const EDGE_JUMP_RADIUS: f32 = 10.0;

/// Which end of an edge a jump leads to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeEnd {
    Source,
    Destination,
}

/// A routed edge between two nodes of the same graph.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    source: NodeIndex,
    destination: NodeIndex,
    points: Vec<Point>,
    shapes: Vec<Shape>,
}

impl Edge {
    pub fn new(
        source: NodeIndex,
        destination: NodeIndex,
        points: Vec<Point>,
        shapes: Vec<Shape>,
    ) -> Self {
        Self {
            source,
            destination,
            points,
            shapes,
        }
    }

    pub fn source(&self) -> NodeIndex {
        self.source
    }

    pub fn destination(&self) -> NodeIndex {
        self.destination
    }

    /// Control points of the edge route, in layout order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Returns the end a click at `point` should jump to.
    ///
    /// A point within [`EDGE_JUMP_RADIUS`] of the first control point jumps to
    /// the destination; one near the last control point jumps to the source.
    /// The first control point wins when both are in range.
    pub fn jump_at(&self, point: Point) -> Option<EdgeEnd> {
        let radius_squared = EDGE_JUMP_RADIUS * EDGE_JUMP_RADIUS;
        let near = |end: Option<&Point>| {
            end.is_some_and(|end| point.distance_squared(*end) <= radius_squared)
        };

        if near(self.points.first()) {
            Some(EdgeEnd::Destination)
        } else if near(self.points.last()) {
            Some(EdgeEnd::Source)
        } else {
            None
        }
    }
}
