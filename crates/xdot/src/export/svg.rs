//! SVG rendering of scenes.
//!
//! Shapes are painted in order: graph shapes first, then edges, then visible
//! nodes. Filled shapes are painted with the fill color and no outline; the
//! interpreter already emits an outline copy after each of them.

use std::io;

use log::debug;
use svg::{Document, node::element as svg_element};

use xdot_core::{
    apply_pen_stroke,
    color::Color,
    draw::{Pen, Shape},
    geometry::{Point, Size},
    scene::{Element, Graph, Highlight},
};

use super::{Error, Exporter};
use crate::config::StyleConfig;

/// Sets fill attributes for filled shapes, stroke attributes otherwise.
macro_rules! apply_paint {
    ($element:expr, $pen:expr, $filled:expr) => {{
        let element = $element;
        let pen: &Pen = $pen;
        if $filled {
            let fill = pen.fill_color();
            element
                .set("fill", &fill)
                .set("fill-opacity", fill.alpha())
                .set("stroke", "none")
        } else {
            apply_pen_stroke!(element.set("fill", "none"), pen)
        }
    }};
}

/// Builder for [`Svg`].
#[derive(Debug, Default)]
pub struct SvgBuilder<'a> {
    style: Option<&'a StyleConfig>,
}

impl<'a> SvgBuilder<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(mut self, style: &'a StyleConfig) -> Self {
        self.style = Some(style);
        self
    }

    /// # Errors
    ///
    /// Returns [`Error::Render`] if the configured background color is invalid.
    pub fn build(self) -> Result<Svg, Error> {
        let background = match self.style {
            Some(style) => style.background_color().map_err(Error::Render)?,
            None => None,
        };
        Ok(Svg { background })
    }
}

/// SVG painter for a [`Graph`].
#[derive(Debug, Clone, Default)]
pub struct Svg {
    background: Option<Color>,
}

impl Svg {
    /// Renders the scene to an SVG document sized to the graph.
    pub fn render(&self, graph: &Graph, highlight: &Highlight) -> Document {
        let size = scene_size(graph);
        debug!(width = size.width(), height = size.height(); "Rendering SVG");

        let mut doc = Document::new()
            .set("viewBox", format!("0 0 {} {}", size.width(), size.height()))
            .set("width", size.width())
            .set("height", size.height());

        if let Some(background) = &self.background {
            doc = doc.add(
                svg_element::Rectangle::new()
                    .set("width", "100%")
                    .set("height", "100%")
                    .set("fill", background)
                    .set("fill-opacity", background.alpha()),
            );
        }

        let mut scene = svg_element::Group::new().set("class", "graph");
        for shape in graph.shapes() {
            scene = scene.add(render_shape(shape, false));
        }

        for (index, edge) in graph.edges() {
            let highlighted = highlight.contains(&Element::Edge(index));
            let group = edge.shapes().iter().fold(
                svg_element::Group::new().set("class", "edge"),
                |group, shape| group.add(render_shape(shape, highlighted)),
            );
            scene = scene.add(group);
        }

        for (index, node) in graph.nodes() {
            let highlighted = highlight.contains(&Element::Node(index));
            let group = node.shapes().iter().fold(
                svg_element::Group::new()
                    .set("class", "node")
                    .set("id", node.id()),
                |group, shape| group.add(render_shape(shape, highlighted)),
            );
            scene = match node.url() {
                Some(url) => scene.add(svg_element::Anchor::new().set("href", url).add(group)),
                None => scene.add(group),
            };
        }

        doc.add(scene)
    }
}

impl Exporter for Svg {
    fn export_graph(
        &self,
        graph: &Graph,
        highlight: &Highlight,
        writer: &mut dyn io::Write,
    ) -> Result<(), Error> {
        svg::write(writer, &self.render(graph, highlight))?;
        Ok(())
    }
}

/// The bounding box size, or the extent of the nodes when the graph had no
/// bounding box.
fn scene_size(graph: &Graph) -> Size {
    let size = graph.size();
    if !size.is_zero() {
        return size;
    }
    let (width, height) = graph.nodes().fold((0.0f32, 0.0f32), |(w, h), (_, node)| {
        let bounds = node.bounds();
        (w.max(bounds.max_x()), h.max(bounds.max_y()))
    });
    Size::new(width, height)
}

fn render_shape(shape: &Shape, highlighted: bool) -> Box<dyn svg::Node> {
    match shape {
        Shape::Text(text) => {
            let pen = paint_pen(text.pen(), highlighted);
            let color = pen.color();
            svg_element::Text::new(text.text())
                .set("x", text.anchor().x())
                .set("y", text.anchor().y())
                .set("text-anchor", text.justification().to_svg_value())
                .set("font-family", pen.font_name())
                .set("font-size", pen.font_size())
                .set("fill", &color)
                .set("fill-opacity", color.alpha())
                .into()
        }
        Shape::Ellipse(ellipse) => apply_paint!(
            svg_element::Ellipse::new()
                .set("cx", ellipse.center().x())
                .set("cy", ellipse.center().y())
                .set("rx", ellipse.x_radius().abs())
                .set("ry", ellipse.y_radius().abs()),
            &paint_pen(ellipse.pen(), highlighted),
            ellipse.filled()
        )
        .into(),
        Shape::Polygon(polygon) => apply_paint!(
            svg_element::Path::new().set("d", polyline_data(polygon.points(), true)),
            &paint_pen(polygon.pen(), highlighted),
            polygon.filled()
        )
        .into(),
        Shape::Line(line) => apply_paint!(
            svg_element::Path::new().set("d", polyline_data(line.points(), false)),
            &paint_pen(line.pen(), highlighted),
            false
        )
        .into(),
        Shape::Bezier(bezier) => {
            let Some(start) = bezier.points().first() else {
                return svg_element::Group::new().into();
            };
            let mut data = format!("M {} {}", start.x(), start.y());
            for (first, second, end) in bezier.segments() {
                data.push_str(&format!(
                    " C {} {} {} {} {} {}",
                    first.x(),
                    first.y(),
                    second.x(),
                    second.y(),
                    end.x(),
                    end.y()
                ));
            }
            if bezier.filled() {
                data.push_str(" Z");
            }
            apply_paint!(
                svg_element::Path::new().set("d", data),
                &paint_pen(bezier.pen(), highlighted),
                bezier.filled()
            )
            .into()
        }
        Shape::Compound(children) => children
            .iter()
            .fold(svg_element::Group::new(), |group, child| {
                group.add(render_shape(child, highlighted))
            })
            .into(),
    }
}

fn paint_pen(pen: &Pen, highlighted: bool) -> Pen {
    if highlighted {
        pen.highlighted()
    } else {
        pen.clone()
    }
}

/// Path data through `points`, closed for polygons.
fn polyline_data(points: &[Point], close: bool) -> String {
    let mut data = points
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let command = if i == 0 { "M" } else { "L" };
            format!("{command} {} {}", point.x(), point.y())
        })
        .collect::<Vec<_>>()
        .join(" ");
    if close && !points.is_empty() {
        data.push_str(" Z");
    }
    data
}
