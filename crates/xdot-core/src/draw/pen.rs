//! Pen state threaded through drawing instructions.
//!
//! # SVG Attribute Mapping
//!
//! | Rust Property | SVG Attribute | Example Values |
//! |--------------|---------------|----------------|
//! | `color` | `stroke`, `stroke-opacity` | `"#000000"`, `0.5` |
//! | `fill_color` | `fill`, `fill-opacity` | `"#ffc8c8"`, `1` |
//! | `line_width` | `stroke-width` | `1.5` |
//! | `line_style` | `stroke-dasharray` | `"5,5"`, `"2,3"` |
//! | `font_size` | `font-size` | `14` |
//! | `font_name` | `font-family` | `"Times-Roman"` |

use std::str::FromStr;

use crate::color::Color;

/// Font used when no `F` instruction has been seen.
pub const DEFAULT_FONT_NAME: &str = "Times-Roman";

/// Line pattern of a pen.
///
/// Only the three patterns that xdot style instructions can select are
/// representable; other style names are ignored by the interpreter.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    /// Solid continuous line (default)
    #[default]
    Solid,
    /// Dashed line (5px dash, 5px gap)
    Dashed,
    /// Dotted line (2px dot, 3px gap)
    Dotted,
}

impl LineStyle {
    /// Returns the SVG dasharray value for this style, or None for solid lines
    pub fn to_svg_value(self) -> Option<&'static str> {
        match self {
            Self::Solid => None,
            Self::Dashed => Some("5,5"),
            Self::Dotted => Some("2,3"),
        }
    }
}

impl FromStr for LineStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "solid" => Ok(Self::Solid),
            "dashed" => Ok(Self::Dashed),
            "dotted" => Ok(Self::Dotted),
            _ => Err(format!(
                "invalid line style `{s}`, valid values: solid, dashed, dotted"
            )),
        }
    }
}

/// Stroke, fill and font state used to draw a shape.
///
/// # Examples
///
/// ```
/// use xdot_core::color::Color;
/// use xdot_core::draw::{LineStyle, Pen};
///
/// let mut pen = Pen::default();
/// pen.set_line_width(2.0);
/// pen.set_line_style(LineStyle::Dashed);
/// pen.set_fill_color(Color::from_rgba8(0, 0, 255, 255));
///
/// assert_eq!(pen.line_width(), 2.0);
/// assert_eq!(pen.font_name(), "Times-Roman");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Pen {
    color: Color,
    fill_color: Color,
    line_width: f32,
    font_size: f32,
    font_name: String,
    line_style: LineStyle,
}

impl Pen {
    /// Returns the stroke color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the fill color.
    pub fn fill_color(&self) -> Color {
        self.fill_color
    }

    /// Returns the line width.
    pub fn line_width(&self) -> f32 {
        self.line_width
    }

    /// Returns the font size in points.
    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    /// Returns the font family name.
    pub fn font_name(&self) -> &str {
        &self.font_name
    }

    /// Returns the line style.
    pub fn line_style(&self) -> LineStyle {
        self.line_style
    }

    /// Sets the stroke color.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Sets the fill color.
    pub fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
    }

    /// Sets the line width.
    pub fn set_line_width(&mut self, width: f32) {
        self.line_width = width;
    }

    /// Sets the font size and family together, as the `F` instruction does.
    pub fn set_font(&mut self, size: f32, name: impl Into<String>) {
        self.font_size = size;
        self.font_name = name.into();
    }

    /// Sets the line style.
    pub fn set_line_style(&mut self, style: LineStyle) {
        self.line_style = style;
    }

    /// Returns a copy of this pen recolored for highlighted elements:
    /// red stroke and light red fill. Width, style and font are kept.
    pub fn highlighted(&self) -> Self {
        Self {
            color: Color::from_rgba8(255, 0, 0, 255),
            fill_color: Color::from_rgba8(255, 200, 200, 255),
            ..self.clone()
        }
    }
}

impl Default for Pen {
    fn default() -> Self {
        Self {
            color: Color::black(),
            fill_color: Color::black(),
            line_width: 1.5,
            font_size: 14.0,
            font_name: DEFAULT_FONT_NAME.to_string(),
            line_style: LineStyle::default(),
        }
    }
}

/// Apply the stroke attributes of a pen to an SVG element.
///
/// Sets color, opacity, width and the dash pattern (if not solid).
///
/// # Examples
///
/// ```
/// use xdot_core::draw::Pen;
/// use svg::node::element as svg_element;
///
/// let pen = Pen::default();
/// let line = svg_element::Line::new()
///     .set("x1", 0)
///     .set("y1", 0)
///     .set("x2", 10)
///     .set("y2", 10);
///
/// let line = xdot_core::apply_pen_stroke!(line, &pen);
/// ```
#[macro_export]
macro_rules! apply_pen_stroke {
    ($element:expr, $pen:expr) => {{
        let mut elem = $element
            .set("stroke", $pen.color().to_hex_rgb())
            .set("stroke-opacity", $pen.color().alpha())
            .set("stroke-width", $pen.line_width());

        if let Some(dasharray) = $pen.line_style().to_svg_value() {
            elem = elem.set("stroke-dasharray", dasharray);
        }

        elem
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pen_default() {
        let pen = Pen::default();
        assert_eq!(pen.color(), Color::black());
        assert_eq!(pen.fill_color(), Color::black());
        assert_eq!(pen.line_width(), 1.5);
        assert_eq!(pen.font_size(), 14.0);
        assert_eq!(pen.font_name(), DEFAULT_FONT_NAME);
        assert_eq!(pen.line_style(), LineStyle::Solid);
    }

    #[test]
    fn test_pen_setters() {
        let mut pen = Pen::default();

        pen.set_color(Color::from_rgba8(0, 255, 0, 255));
        pen.set_fill_color(Color::from_rgba8(0, 0, 255, 128));
        pen.set_line_width(3.0);
        pen.set_font(10.0, "Helvetica");
        pen.set_line_style(LineStyle::Dotted);

        assert_eq!(pen.color().to_hex_rgb(), "#00ff00");
        assert_eq!(pen.fill_color().to_hex_rgb(), "#0000ff");
        assert_eq!(pen.line_width(), 3.0);
        assert_eq!(pen.font_size(), 10.0);
        assert_eq!(pen.font_name(), "Helvetica");
        assert_eq!(pen.line_style(), LineStyle::Dotted);
    }

    #[test]
    fn test_pen_clone_is_a_snapshot() {
        let mut pen = Pen::default();
        let snapshot = pen.clone();
        pen.set_line_width(4.0);

        assert_eq!(snapshot.line_width(), 1.5);
        assert_eq!(pen.line_width(), 4.0);
    }

    #[test]
    fn test_pen_highlighted() {
        let mut pen = Pen::default();
        pen.set_line_width(2.0);
        pen.set_font(9.0, "Courier");

        let highlighted = pen.highlighted();
        assert_eq!(highlighted.color().to_hex_rgb(), "#ff0000");
        assert_eq!(highlighted.fill_color().to_hex_rgb(), "#ffc8c8");
        assert_eq!(highlighted.line_width(), 2.0);
        assert_eq!(highlighted.font_name(), "Courier");

        assert_eq!(pen.color(), Color::black());
    }

    #[test]
    fn test_line_style_from_str() {
        assert_eq!(LineStyle::from_str("solid").unwrap(), LineStyle::Solid);
        assert_eq!(LineStyle::from_str("dashed").unwrap(), LineStyle::Dashed);
        assert_eq!(LineStyle::from_str("dotted").unwrap(), LineStyle::Dotted);

        let result = LineStyle::from_str("bold");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("invalid line style"));
    }

    #[test]
    fn test_line_style_dasharray() {
        assert_eq!(LineStyle::Solid.to_svg_value(), None);
        assert_eq!(LineStyle::Dashed.to_svg_value(), Some("5,5"));
        assert_eq!(LineStyle::Dotted.to_svg_value(), Some("2,3"));
    }
}
