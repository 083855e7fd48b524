//! Pens and primitive shapes.
//!
//! Drawing instructions mutate a [`Pen`] and emit [`Shape`] values. Each shape
//! owns a snapshot of the pen that was current when it was emitted, so later
//! pen changes never leak into shapes produced earlier.

mod pen;
mod shape;

pub use pen::{LineStyle, Pen};
pub use shape::{
    BezierShape, EllipseShape, Justification, LineShape, PolygonShape, Shape, TextShape,
};
