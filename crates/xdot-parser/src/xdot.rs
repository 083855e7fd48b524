//! Interpreter for xdot drawing instructions.
//!
//! The six drawing attributes (`_draw_`, `_ldraw_`, `_hdraw_`, `_tdraw_`,
//! `_hldraw_`, `_tldraw_`) hold a space separated stream of opcodes and
//! operands. Each attribute is interpreted with a fresh default [`Pen`]:
//! style opcodes mutate the pen and shape opcodes emit a [`Shape`] holding a
//! snapshot of it.
//!
//! | op | operands | effect |
//! |---|---|---|
//! | `c` / `C` | color | stroke / fill color |
//! | `S` | text | `setlinewidth(N)`, `solid`, `dashed` or `dotted` |
//! | `F` | float, text | font size and name |
//! | `T` | point, int, int, text | text run |
//! | `E` / `e` | point, int, int | filled + outlined / outlined ellipse |
//! | `L` | point list | polyline |
//! | `B` / `b` | point list | outlined / filled + outlined Bezier curve |
//! | `P` / `p` | point list | filled + outlined / outlined polygon |
//!
//! Text operands are written as `N -chars`: a byte count, a dash, and then
//! exactly that many bytes.
//!
//! An unknown opcode or a malformed operand stops the attribute; the shapes
//! emitted before it are kept. Colors that cannot be decoded are painted
//! black and do not stop the attribute.

use log::trace;
use thiserror::Error;
use xdot_core::{
    color::Color,
    draw::{
        BezierShape, EllipseShape, Justification, LineShape, LineStyle, Pen, PolygonShape, Shape,
        TextShape,
    },
    geometry::{Point, Transform},
};

use crate::error::ErrorCode;

/// A problem found while interpreting a drawing attribute.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DrawError {
    #[error("unknown drawing opcode `{0}`")]
    UnknownOpcode(String),

    #[error("missing drawing operand")]
    MissingOperand,

    #[error("expected a number, found `{0}`")]
    InvalidNumber(String),

    #[error("invalid count {0}")]
    InvalidCount(i64),

    #[error("text operand is missing its `-` delimiter")]
    MissingTextDelimiter,

    #[error("invalid line width in style `{0}`")]
    InvalidLineWidth(String),

    #[error("unsupported color `{0}`")]
    UnsupportedColor(String),
}

impl DrawError {
    /// The diagnostic code reported for this problem.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::UnknownOpcode(_) => ErrorCode::E200,
            Self::UnsupportedColor(_) => ErrorCode::E202,
            Self::MissingOperand
            | Self::InvalidNumber(_)
            | Self::InvalidCount(_)
            | Self::MissingTextDelimiter
            | Self::InvalidLineWidth(_) => ErrorCode::E201,
        }
    }

    /// Whether the rest of the attribute was skipped because of this problem.
    pub fn is_fatal_for_attribute(&self) -> bool {
        !matches!(self, Self::UnsupportedColor(_))
    }
}

/// Interprets one drawing attribute value.
///
/// Coordinates are mapped through `transform`. Returns the emitted shapes in
/// order together with every problem found.
///
/// # Examples
///
/// ```
/// use xdot_core::geometry::Transform;
/// use xdot_parser::xdot::interpret;
///
/// let (shapes, problems) = interpret("E 10 10 5 5 ", &Transform::default());
/// assert_eq!(shapes.len(), 2);
/// assert!(shapes[0].is_filled());
/// assert!(!shapes[1].is_filled());
/// assert!(problems.is_empty());
/// ```
pub fn interpret(code: &str, transform: &Transform) -> (Vec<Shape>, Vec<DrawError>) {
    DrawInterpreter::new(code, transform).run()
}

struct DrawInterpreter<'a> {
    buffer: &'a str,
    pos: usize,
    transform: &'a Transform,
    pen: Pen,
    shapes: Vec<Shape>,
    problems: Vec<DrawError>,
}

impl<'a> DrawInterpreter<'a> {
    fn new(buffer: &'a str, transform: &'a Transform) -> Self {
        Self {
            buffer,
            pos: 0,
            transform,
            pen: Pen::default(),
            shapes: Vec::new(),
            problems: Vec::new(),
        }
    }

    fn run(mut self) -> (Vec<Shape>, Vec<DrawError>) {
        self.skip_whitespace();
        while self.pos < self.buffer.len() {
            if let Err(err) = self.step() {
                self.problems.push(err);
                break;
            }
        }
        (self.shapes, self.problems)
    }

    fn step(&mut self) -> Result<(), DrawError> {
        let opcode = self.read_field();
        trace!(opcode; "Drawing instruction");

        match opcode {
            "c" => {
                let color = self.read_color()?;
                self.pen.set_color(color);
            }
            "C" => {
                let color = self.read_color()?;
                self.pen.set_fill_color(color);
            }
            "S" => {
                let style = self.read_text()?;
                self.apply_style(style)?;
            }
            "F" => {
                let size = self.read_float()?;
                let name = self.read_text()?;
                self.pen.set_font(size as f32, name);
            }
            "T" => {
                let anchor = self.read_point()?;
                let justification = self.read_int()?;
                let width = self.read_int()?;
                let text = self.read_text()?;
                self.shapes.push(Shape::Text(TextShape::new(
                    self.pen.clone(),
                    anchor,
                    Justification::from_code(justification.clamp(-1, 1) as i32),
                    width as f32,
                    text,
                )));
            }
            "E" | "e" => {
                let center = self.read_point()?;
                let x_radius = self.read_int()? as f32;
                let y_radius = self.read_int()? as f32;
                if opcode == "E" {
                    self.shapes.push(Shape::Ellipse(EllipseShape::new(
                        self.pen.clone(),
                        center,
                        x_radius,
                        y_radius,
                        true,
                    )));
                }
                self.shapes.push(Shape::Ellipse(EllipseShape::new(
                    self.pen.clone(),
                    center,
                    x_radius,
                    y_radius,
                    false,
                )));
            }
            "L" => {
                let points = self.read_points()?;
                let line = LineShape::new(self.pen.clone(), points);
                self.shapes.push(Shape::Line(line));
            }
            "B" | "b" => {
                let points = self.read_points()?;
                if opcode == "b" {
                    self.shapes.push(Shape::Bezier(BezierShape::new(
                        self.pen.clone(),
                        points.clone(),
                        true,
                    )));
                }
                self.shapes.push(Shape::Bezier(BezierShape::new(
                    self.pen.clone(),
                    points,
                    false,
                )));
            }
            "P" | "p" => {
                let points = self.read_points()?;
                if opcode == "P" {
                    self.shapes.push(Shape::Polygon(PolygonShape::new(
                        self.pen.clone(),
                        points.clone(),
                        true,
                    )));
                }
                self.shapes.push(Shape::Polygon(PolygonShape::new(
                    self.pen.clone(),
                    points,
                    false,
                )));
            }
            other => return Err(DrawError::UnknownOpcode(other.to_string())),
        }
        Ok(())
    }

    /// Applies an `S` operand. Styles other than line width and the three
    /// line patterns (`bold`, `filled`, `rounded`, ...) are ignored.
    fn apply_style(&mut self, style: &str) -> Result<(), DrawError> {
        if let Some(rest) = style.strip_prefix("setlinewidth(") {
            let width = rest.split(')').next().unwrap_or_default();
            let width = width
                .trim()
                .parse::<f32>()
                .map_err(|_| DrawError::InvalidLineWidth(style.to_string()))?;
            self.pen.set_line_width(width);
        } else if let Ok(line_style) = style.parse::<LineStyle>() {
            self.pen.set_line_style(line_style);
        }
        Ok(())
    }

    /// Reads up to the next space, then skips any whitespace. The last field
    /// may end at the end of the buffer.
    fn read_field(&mut self) -> &'a str {
        let rest = &self.buffer[self.pos..];
        let length = rest.find(' ').unwrap_or(rest.len());
        self.pos += length;
        if self.pos < self.buffer.len() {
            self.pos += 1;
        }
        self.skip_whitespace();
        &rest[..length]
    }

    fn read_float(&mut self) -> Result<f64, DrawError> {
        let field = self.read_field();
        if field.is_empty() {
            return Err(DrawError::MissingOperand);
        }
        field
            .parse::<f64>()
            .map_err(|_| DrawError::InvalidNumber(field.to_string()))
    }

    /// Reads a number and truncates it toward zero.
    fn read_int(&mut self) -> Result<i64, DrawError> {
        Ok(self.read_float()?.trunc() as i64)
    }

    fn read_point(&mut self) -> Result<Point, DrawError> {
        let x = self.read_int()?;
        let y = self.read_int()?;
        Ok(self.transform.apply(x as f32, y as f32))
    }

    fn read_points(&mut self) -> Result<Vec<Point>, DrawError> {
        let count = self.read_int()?;
        if count < 0 {
            return Err(DrawError::InvalidCount(count));
        }
        (0..count).map(|_| self.read_point()).collect()
    }

    /// Reads `N -chars`: takes exactly `N` bytes after the dash, extended to
    /// the next character boundary and clamped to the end of the buffer.
    /// The count may run straight into the dash (`1-x`).
    fn read_text(&mut self) -> Result<&'a str, DrawError> {
        let rest = &self.buffer[self.pos..];
        let count_end = rest.find([' ', '-']).unwrap_or(rest.len());
        let count_field = &rest[..count_end];
        if count_field.is_empty() {
            return Err(DrawError::MissingOperand);
        }
        let count = count_field
            .parse::<f64>()
            .map_err(|_| DrawError::InvalidNumber(count_field.to_string()))?
            .trunc() as i64;
        let length = usize::try_from(count).map_err(|_| DrawError::InvalidCount(count))?;
        self.pos += count_end;

        let dash = self.buffer[self.pos..]
            .find('-')
            .ok_or(DrawError::MissingTextDelimiter)?;
        let start = self.pos + dash + 1;
        let mut end = start.saturating_add(length).min(self.buffer.len());
        while !self.buffer.is_char_boundary(end) {
            end += 1;
        }

        self.pos = end;
        self.skip_whitespace();
        Ok(&self.buffer[start..end])
    }

    /// Decodes `#RRGGBB[AA]` or an HSV triple. Anything else is recorded as
    /// unsupported and painted black.
    fn read_color(&mut self) -> Result<Color, DrawError> {
        let text = self.read_text()?;
        let decoded = match text.chars().next() {
            Some('#') => Color::from_hex(text).ok(),
            Some(c) if c.is_ascii_digit() || c == '.' => Color::from_hsv_str(text).ok(),
            _ => None,
        };
        Ok(decoded.unwrap_or_else(|| {
            let problem = DrawError::UnsupportedColor(text.to_string());
            self.problems.push(problem);
            Color::black()
        }))
    }

    fn skip_whitespace(&mut self) {
        let rest = &self.buffer[self.pos..];
        self.pos += rest.len() - rest.trim_start().len();
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::approx_eq;

    use super::*;

    fn run(code: &str) -> (Vec<Shape>, Vec<DrawError>) {
        interpret(code, &Transform::default())
    }

    fn pen_of(shape: &Shape) -> &Pen {
        shape.pen().unwrap()
    }

    #[test]
    fn test_read_text_takes_counted_bytes() {
        let transform = Transform::default();
        let mut interpreter = DrawInterpreter::new("5 -hello next", &transform);

        assert_eq!(interpreter.read_text(), Ok("hello"));
        assert_eq!(interpreter.read_field(), "next");
        assert_eq!(interpreter.pos, interpreter.buffer.len());
    }

    #[test]
    fn test_read_text_keeps_spaces_and_dashes() {
        let transform = Transform::default();
        let mut interpreter = DrawInterpreter::new("7 -a - b c", &transform);

        assert_eq!(interpreter.read_text(), Ok("a - b c"));
    }

    #[test]
    fn test_read_text_rounds_to_char_boundary() {
        let transform = Transform::default();
        let mut interpreter = DrawInterpreter::new("1 -é!", &transform);

        assert_eq!(interpreter.read_text(), Ok("é"));
        assert_eq!(interpreter.read_field(), "!");
    }

    #[test]
    fn test_read_text_clamps_to_buffer_end() {
        let transform = Transform::default();
        let mut interpreter = DrawInterpreter::new("10 -ab", &transform);

        assert_eq!(interpreter.read_text(), Ok("ab"));
    }

    #[test]
    fn test_read_text_without_delimiter() {
        let transform = Transform::default();
        let mut interpreter = DrawInterpreter::new("2 ab", &transform);

        assert_eq!(interpreter.read_text(), Err(DrawError::MissingTextDelimiter));
    }

    #[test]
    fn test_read_int_truncates() {
        let transform = Transform::default();
        let mut interpreter = DrawInterpreter::new("3.9 -3.9", &transform);

        assert_eq!(interpreter.read_int(), Ok(3));
        assert_eq!(interpreter.read_int(), Ok(-3));
        assert_eq!(interpreter.read_int(), Err(DrawError::MissingOperand));
    }

    #[test]
    fn test_filled_ellipse_is_doubled() {
        let (shapes, problems) = run("E 10 10 5 5 ");

        assert!(problems.is_empty());
        assert_eq!(shapes.len(), 2);
        let (Shape::Ellipse(filled), Shape::Ellipse(outline)) = (&shapes[0], &shapes[1]) else {
            panic!("expected two ellipses, got {shapes:?}");
        };
        assert!(filled.filled());
        assert!(!outline.filled());
        assert_eq!(filled.center(), Point::new(10.0, 10.0));
        assert_eq!(outline.center(), Point::new(10.0, 10.0));
        assert_eq!((outline.x_radius(), outline.y_radius()), (5.0, 5.0));
    }

    #[test]
    fn test_unfilled_ellipse_is_single() {
        let (shapes, _) = run("e 1 2 3 4");
        assert_eq!(shapes.len(), 1);
        assert!(!shapes[0].is_filled());
    }

    #[test]
    fn test_bezier_and_polygon_fill_opcodes() {
        let (shapes, _) = run("b 4 0 0 1 1 2 2 3 3 B 4 0 0 1 1 2 2 3 3");
        let filled: Vec<_> = shapes.iter().map(Shape::is_filled).collect();
        assert_eq!(filled, vec![true, false, false]);

        let (shapes, _) = run("P 3 0 0 1 1 2 0 p 3 0 0 1 1 2 0");
        let filled: Vec<_> = shapes.iter().map(Shape::is_filled).collect();
        assert_eq!(filled, vec![true, false, false]);

        let Shape::Polygon(polygon) = &shapes[2] else {
            panic!("expected a polygon");
        };
        assert_eq!(polygon.points().len(), 3);
    }

    #[test]
    fn test_unknown_opcode_keeps_earlier_shapes() {
        let (shapes, problems) = run("T 0 0 0 1 1-x Z");

        assert_eq!(shapes.len(), 1);
        let Shape::Text(text) = &shapes[0] else {
            panic!("expected a text shape");
        };
        assert_eq!(text.text(), "x");
        assert_eq!(text.width(), 1.0);
        assert_eq!(text.justification(), Justification::Center);
        assert_eq!(problems, vec![DrawError::UnknownOpcode("Z".to_string())]);
    }

    #[test]
    fn test_malformed_operand_stops_attribute() {
        let (shapes, problems) = run("e 1 1 1 1 L 2 0 0 x 1 E 1 1 1 1");

        assert_eq!(shapes.len(), 1);
        assert_eq!(problems, vec![DrawError::InvalidNumber("x".to_string())]);
        assert_eq!(problems[0].code(), ErrorCode::E201);
    }

    #[test]
    fn test_truncated_operands() {
        let (shapes, problems) = run("e 1 1 1");
        assert!(shapes.is_empty());
        assert_eq!(problems, vec![DrawError::MissingOperand]);
    }

    #[test]
    fn test_negative_point_count() {
        let (_, problems) = run("L -1");
        assert_eq!(problems, vec![DrawError::InvalidCount(-1)]);
    }

    #[test]
    fn test_pen_is_snapshotted_per_shape() {
        let (shapes, problems) =
            run("c 7 -#ff0000 L 2 0 0 1 1 c 7 -#0000ff L 2 0 0 1 1 ");

        assert!(problems.is_empty());
        assert_eq!(pen_of(&shapes[0]).color().to_hex_rgb(), "#ff0000");
        assert_eq!(pen_of(&shapes[1]).color().to_hex_rgb(), "#0000ff");
    }

    #[test]
    fn test_each_attribute_starts_with_default_pen() {
        let (_, _) = run("S 17 -setlinewidth(4)");
        let (shapes, _) = run("L 2 0 0 1 1");
        assert_eq!(pen_of(&shapes[0]), &Pen::default());
    }

    #[test]
    fn test_hex_color_with_alpha() {
        let (shapes, problems) = run("c 9 -#FF000080 L 2 0 0 1 1");

        assert!(problems.is_empty());
        let color = pen_of(&shapes[0]).color();
        assert!(approx_eq!(f32, color.red(), 1.0, epsilon = 1e-6));
        assert!(approx_eq!(f32, color.alpha(), 128.0 / 255.0, epsilon = 1e-6));
    }

    #[test]
    fn test_hsv_fill_color() {
        let (shapes, problems) = run("C 7 -0.5,1,1 p 1 0 0");

        assert!(problems.is_empty());
        let fill = pen_of(&shapes[0]).fill_color();
        assert!(approx_eq!(f32, fill.red(), 0.0, epsilon = 1e-6));
        assert!(approx_eq!(f32, fill.green(), 1.0, epsilon = 1e-6));
        assert!(approx_eq!(f32, fill.blue(), 1.0, epsilon = 1e-6));
    }

    #[test]
    fn test_named_color_is_unsupported() {
        let (shapes, problems) = run("c 3 -red L 2 0 0 1 1");

        assert_eq!(shapes.len(), 1);
        assert_eq!(pen_of(&shapes[0]).color(), Color::black());
        assert_eq!(problems, vec![DrawError::UnsupportedColor("red".to_string())]);
        assert!(!problems[0].is_fatal_for_attribute());
        assert_eq!(problems[0].code(), ErrorCode::E202);
    }

    #[test]
    fn test_style_instructions() {
        let (shapes, problems) =
            run("S 15 -setlinewidth(3) S 6 -dashed S 4 -bold L 2 0 0 1 1");

        assert!(problems.is_empty());
        let pen = pen_of(&shapes[0]);
        assert_eq!(pen.line_width(), 3.0);
        assert_eq!(pen.line_style(), LineStyle::Dashed);
    }

    #[test]
    fn test_bad_line_width() {
        let (_, problems) = run("S 15 -setlinewidth(x)");
        assert_eq!(
            problems,
            vec![DrawError::InvalidLineWidth("setlinewidth(x)".to_string())]
        );
    }

    #[test]
    fn test_font_and_left_justified_text() {
        let (shapes, problems) = run("F 12.5 9 -Helvetica T 10 20 -1 30 3 -abc");

        assert!(problems.is_empty());
        let Shape::Text(text) = &shapes[0] else {
            panic!("expected a text shape");
        };
        assert_eq!(text.pen().font_size(), 12.5);
        assert_eq!(text.pen().font_name(), "Helvetica");
        assert_eq!(text.justification(), Justification::Left);
        assert_eq!(text.anchor(), Point::new(10.0, 20.0));
        assert_eq!(text.text(), "abc");
    }

    #[test]
    fn test_points_are_transformed() {
        let transform = Transform::from_bounding_box(0.0, 0.0, 100.0, 50.0);
        let (shapes, _) = interpret("e 0 0 5 5 L 2 100 50 10 40", &transform);

        let Shape::Ellipse(ellipse) = &shapes[0] else {
            panic!("expected an ellipse");
        };
        assert_eq!(ellipse.center(), Point::new(0.0, 50.0));

        let Shape::Line(line) = &shapes[1] else {
            panic!("expected a line");
        };
        assert_eq!(line.points(), &[Point::new(100.0, 0.0), Point::new(10.0, 10.0)]);
    }

    #[test]
    fn test_whitespace_only_and_leading_whitespace() {
        assert_eq!(run(""), (Vec::new(), Vec::new()));
        assert_eq!(run("   "), (Vec::new(), Vec::new()));

        let (shapes, problems) = run("  e 1 1 1 1");
        assert_eq!(shapes.len(), 1);
        assert!(problems.is_empty());
    }
}

#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    /// Interpretation terminates on any input and reports at most one
    /// problem that stops the attribute.
    fn check_interpret_is_total(code: &str) -> Result<(), TestCaseError> {
        let (_, problems) = interpret(code, &Transform::default());
        let stopping = problems
            .iter()
            .filter(|problem| problem.is_fatal_for_attribute())
            .count();
        prop_assert!(stopping <= 1);
        Ok(())
    }

    const OPCODE_SOUP: &str = "([cCSFTEeLBbPp] ?|-?[0-9]{1,3} ?|-[a-z#]{0,4} ?){0,16}";

    proptest! {
        #[test]
        fn interpret_is_total(code in "\\PC{0,48}") {
            check_interpret_is_total(&code)?;
        }

        #[test]
        fn interpret_is_total_on_opcode_soup(code in OPCODE_SOUP) {
            check_interpret_is_total(&code)?;
        }
    }
}
