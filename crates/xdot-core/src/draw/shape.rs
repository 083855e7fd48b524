//! Primitive shapes emitted by drawing instructions.
//!
//! [`Shape`] is a closed set of variants; consumers such as painters match on
//! it directly. Every variant except [`Shape::Compound`] carries the [`Pen`]
//! it was drawn with.

use crate::{draw::Pen, geometry::Point};

/// Horizontal placement of a text run relative to its anchor point.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Justification {
    /// The anchor marks the start of the text
    Left,
    /// The anchor marks the middle of the text (default)
    #[default]
    Center,
    /// The anchor marks the end of the text
    Right,
}

impl Justification {
    /// Decodes the xdot justification code: `-1` left, `1` right, anything
    /// else centered.
    pub fn from_code(code: i32) -> Self {
        match code {
            -1 => Self::Left,
            1 => Self::Right,
            _ => Self::Center,
        }
    }

    /// Returns the SVG `text-anchor` value
    pub fn to_svg_value(self) -> &'static str {
        match self {
            Self::Left => "start",
            Self::Center => "middle",
            Self::Right => "end",
        }
    }
}

/// A run of text anchored at a point.
#[derive(Debug, Clone, PartialEq)]
pub struct TextShape {
    pen: Pen,
    anchor: Point,
    justification: Justification,
    width: f32,
    text: String,
}

impl TextShape {
    pub fn new(
        pen: Pen,
        anchor: Point,
        justification: Justification,
        width: f32,
        text: impl Into<String>,
    ) -> Self {
        Self {
            pen,
            anchor,
            justification,
            width,
            text: text.into(),
        }
    }

    pub fn pen(&self) -> &Pen {
        &self.pen
    }

    pub fn anchor(&self) -> Point {
        self.anchor
    }

    pub fn justification(&self) -> Justification {
        self.justification
    }

    /// Width of the text as advertised by the layout engine.
    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// An axis-aligned ellipse given by its center and radii.
#[derive(Debug, Clone, PartialEq)]
pub struct EllipseShape {
    pen: Pen,
    center: Point,
    x_radius: f32,
    y_radius: f32,
    filled: bool,
}

impl EllipseShape {
    pub fn new(pen: Pen, center: Point, x_radius: f32, y_radius: f32, filled: bool) -> Self {
        Self {
            pen,
            center,
            x_radius,
            y_radius,
            filled,
        }
    }

    pub fn pen(&self) -> &Pen {
        &self.pen
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn x_radius(&self) -> f32 {
        self.x_radius
    }

    pub fn y_radius(&self) -> f32 {
        self.y_radius
    }

    /// Filled shapes are painted with the fill color and no outline.
    pub fn filled(&self) -> bool {
        self.filled
    }
}

/// A closed polygon.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonShape {
    pen: Pen,
    points: Vec<Point>,
    filled: bool,
}

impl PolygonShape {
    pub fn new(pen: Pen, points: Vec<Point>, filled: bool) -> Self {
        Self {
            pen,
            points,
            filled,
        }
    }

    pub fn pen(&self) -> &Pen {
        &self.pen
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn filled(&self) -> bool {
        self.filled
    }
}

/// An open polyline.
#[derive(Debug, Clone, PartialEq)]
pub struct LineShape {
    pen: Pen,
    points: Vec<Point>,
}

impl LineShape {
    pub fn new(pen: Pen, points: Vec<Point>) -> Self {
        Self { pen, points }
    }

    pub fn pen(&self) -> &Pen {
        &self.pen
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

/// A piecewise cubic Bezier curve.
///
/// The first point is the start; every following group of three points is
/// two control points and an end point. Trailing points that do not form a
/// full group are ignored when painting.
#[derive(Debug, Clone, PartialEq)]
pub struct BezierShape {
    pen: Pen,
    points: Vec<Point>,
    filled: bool,
}

impl BezierShape {
    pub fn new(pen: Pen, points: Vec<Point>, filled: bool) -> Self {
        Self {
            pen,
            points,
            filled,
        }
    }

    pub fn pen(&self) -> &Pen {
        &self.pen
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn filled(&self) -> bool {
        self.filled
    }

    /// Returns the cubic segments as `(control1, control2, end)` triples.
    pub fn segments(&self) -> impl Iterator<Item = (Point, Point, Point)> + '_ {
        self.points
            .get(1..)
            .unwrap_or_default()
            .chunks_exact(3)
            .map(|chunk| (chunk[0], chunk[1], chunk[2]))
    }
}

/// A drawable primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Text(TextShape),
    Ellipse(EllipseShape),
    Polygon(PolygonShape),
    Line(LineShape),
    Bezier(BezierShape),
    /// An ordered group painted child by child.
    Compound(Vec<Shape>),
}

impl Shape {
    /// Returns the pen of a primitive shape, or None for compounds.
    pub fn pen(&self) -> Option<&Pen> {
        match self {
            Self::Text(text) => Some(text.pen()),
            Self::Ellipse(ellipse) => Some(ellipse.pen()),
            Self::Polygon(polygon) => Some(polygon.pen()),
            Self::Line(line) => Some(line.pen()),
            Self::Bezier(bezier) => Some(bezier.pen()),
            Self::Compound(_) => None,
        }
    }

    /// Returns true for filled ellipses, polygons and curves.
    pub fn is_filled(&self) -> bool {
        match self {
            Self::Ellipse(ellipse) => ellipse.filled(),
            Self::Polygon(polygon) => polygon.filled(),
            Self::Bezier(bezier) => bezier.filled(),
            Self::Text(_) | Self::Line(_) | Self::Compound(_) => false,
        }
    }

    /// Number of primitive shapes, descending into compounds.
    pub fn primitive_count(&self) -> usize {
        match self {
            Self::Compound(children) => children.iter().map(Self::primitive_count).sum(),
            _ => 1,
        }
    }
}
