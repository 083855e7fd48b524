//! xdot Core Types and Definitions
//!
//! This crate provides the geometric scene model produced by parsing a graph
//! description annotated with xdot drawing instructions. It includes:
//!
//! - **Colors**: RGBA colors decoded from xdot and CSS strings ([`color::Color`])
//! - **Geometry**: Points, sizes, bounds and the layout transform ([`geometry`] module)
//! - **Draw**: Pens and primitive shapes ([`draw`] module)
//! - **Scene**: Nodes, edges, graphs and hit-testing ([`scene`] module)
//! - **Engine**: Names of the supported layout engines ([`engine::LayoutEngine`])

pub mod color;
pub mod draw;
pub mod engine;
pub mod geometry;
pub mod scene;
