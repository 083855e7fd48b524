//! The geometric scene produced from an xdot description.
//!
//! A [`Graph`] owns everything: graph-level shapes, a node arena, and edges
//! that refer to nodes by [`NodeIndex`]. Scenes are built once and are
//! read-only afterwards; the hit-testing queries in this module are pure.
//!
//! # Hit-testing
//!
//! - [`Graph::url_at`] finds the first visible node with a URL whose bounding
//!   box contains the point.
//! - [`Graph::jump_at`] checks edge endpoints first, then visible nodes. A
//!   point near the start of an edge jumps to its destination and a point
//!   near the end jumps to its source.

mod edge;
mod graph;
mod hit;
mod node;

pub use edge::{EDGE_JUMP_RADIUS, Edge, EdgeEnd};
pub use graph::{EdgeIndex, Graph, NodeIndex, NodeTable};
pub use hit::{Element, Highlight, Jump, Url};
pub use node::Node;
