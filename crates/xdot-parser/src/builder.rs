//! Builds a [`Graph`] from the statements reported by the parser.
//!
//! Only the geometry vocabulary is interpreted: `bb` on the root graph,
//! `pos`, `width`, `height` and `URL` on nodes, `pos` on edges, and the six
//! drawing attributes everywhere. Everything else is ignored.

use log::{debug, info};
use xdot_core::{
    draw::Shape,
    geometry::{Point, Size, Transform},
    scene::{Edge, Graph, Node, NodeTable},
};

use crate::{
    attributes::{Attribute, Attributes},
    error::{Diagnostic, DiagnosticCollector, ErrorCode},
    parser::{GraphVisitor, Scope},
    xdot,
};

/// Drawing attributes in the order their shapes are painted.
const DRAW_ATTRIBUTES: [&str; 6] = [
    "_draw_", "_ldraw_", "_hdraw_", "_tdraw_", "_hldraw_", "_tldraw_",
];

/// Nodes only carry their body and label drawings.
const NODE_DRAW_ATTRIBUTES: [&str; 2] = ["_draw_", "_ldraw_"];

/// Node sizes are given in inches; the scene works in points.
const POINTS_PER_INCH: f32 = 72.0;

/// Visitor assembling the scene graph.
#[derive(Debug)]
pub(crate) struct GraphBuilder {
    transform: Option<Transform>,
    size: Size,
    shapes: Vec<Shape>,
    nodes: NodeTable,
    edges: Vec<Edge>,
    diagnostics: DiagnosticCollector,
}

impl GraphBuilder {
    pub(crate) fn new() -> Self {
        Self {
            transform: None,
            size: Size::default(),
            shapes: Vec::new(),
            nodes: NodeTable::new(),
            edges: Vec::new(),
            diagnostics: DiagnosticCollector::new(),
        }
    }

    /// Returns the finished graph with every warning raised while building it.
    pub(crate) fn finish(self) -> (Graph, Vec<Diagnostic>) {
        let graph = Graph::new(self.size, self.shapes, self.nodes, self.edges);
        (graph, self.diagnostics.finish())
    }

    /// Coordinates seen before a bounding box are left as they are.
    fn transform(&self) -> Transform {
        self.transform.unwrap_or_default()
    }

    fn read_bounding_box(&mut self, attribute: &Attribute) {
        let value = attribute.value().trim();
        if value.is_empty() {
            return;
        }

        let Some([x_min, y_min, x_max, y_max]) = parse_coordinates::<4>(value) else {
            self.diagnostics.emit(
                Diagnostic::warning(format!("malformed bounding box `{value}`"))
                    .with_code(ErrorCode::E300)
                    .with_label(attribute.span(), "expected `xmin,ymin,xmax,ymax`")
                    .with_help("coordinates are used as given"),
            );
            return;
        };

        self.transform = Some(Transform::from_bounding_box(x_min, y_min, x_max, y_max));
        self.size = Size::new(x_max - x_min, y_max - y_min);
        debug!(width = self.size.width(), height = self.size.height(); "Bounding box");
    }

    /// Interprets the listed drawing attributes in order.
    fn draw(&mut self, attributes: &Attributes, names: &[&str]) -> Vec<Shape> {
        let transform = self.transform();
        let mut shapes = Vec::new();

        for name in names {
            let Some(attribute) = attributes.get_attribute(name) else {
                continue;
            };
            let (drawn, problems) = xdot::interpret(attribute.value(), &transform);
            shapes.extend(drawn);

            for problem in problems {
                let mut diagnostic = Diagnostic::warning(problem.to_string())
                    .with_code(problem.code())
                    .with_label(attribute.span(), format!("in `{name}`"));
                if problem.is_fatal_for_attribute() {
                    diagnostic = diagnostic
                        .with_help("the remaining instructions of this attribute were ignored");
                }
                self.diagnostics.emit(diagnostic);
            }
        }
        shapes
    }

    fn node_position(&mut self, id: &str, attribute: &Attribute) -> Option<Point> {
        let value = attribute.value().trim();
        let coordinates = value.strip_suffix('!').unwrap_or(value);

        match parse_coordinates::<2>(coordinates) {
            Some([x, y]) => Some(self.transform().apply(x, y)),
            None => {
                self.diagnostics.emit(
                    Diagnostic::warning(format!("malformed position `{value}` for node `{id}`"))
                        .with_code(ErrorCode::E301)
                        .with_label(attribute.span(), "expected `x,y`")
                        .with_help("the node was skipped"),
                );
                None
            }
        }
    }

    fn node_size(
        &mut self,
        id: &str,
        attributes: &Attributes,
        position: &Attribute,
    ) -> Option<Size> {
        let width = self.node_dimension(id, "width", attributes, position)?;
        let height = self.node_dimension(id, "height", attributes, position)?;
        Some(Size::new(width * POINTS_PER_INCH, height * POINTS_PER_INCH))
    }

    fn node_dimension(
        &mut self,
        id: &str,
        name: &str,
        attributes: &Attributes,
        position: &Attribute,
    ) -> Option<f32> {
        let diagnostic = match attributes.get_attribute(name) {
            Some(attribute) => match attribute.value().trim().parse::<f32>() {
                Ok(value) => return Some(value),
                Err(_) => Diagnostic::warning(format!(
                    "malformed {name} `{}` for node `{id}`",
                    attribute.value()
                ))
                .with_label(attribute.span(), "expected a number of inches"),
            },
            None => Diagnostic::warning(format!("node `{id}` has no {name}"))
                .with_label(position.span(), "positioned here"),
        };

        self.diagnostics.emit(
            diagnostic
                .with_code(ErrorCode::E302)
                .with_help("the node was skipped"),
        );
        None
    }

    /// Reads the space separated `x,y` control points of an edge. Entries
    /// that are not a plain coordinate pair (arrow markers such as `e,x,y`)
    /// are skipped.
    fn edge_points(&self, value: &str) -> Vec<Point> {
        let transform = self.transform();
        value
            .split(' ')
            .filter_map(parse_coordinates::<2>)
            .map(|[x, y]| transform.apply(x, y))
            .collect()
    }
}

impl GraphVisitor for GraphBuilder {
    fn graph_attributes(&mut self, attributes: &Attributes, scope: &Scope) {
        if scope.is_root() && self.transform.is_none() {
            if let Some(attribute) = attributes.get_attribute("bb") {
                self.read_bounding_box(attribute);
            }
        }

        let shapes = self.draw(attributes, &DRAW_ATTRIBUTES);
        self.shapes.extend(shapes);
    }

    fn node(&mut self, id: &str, attributes: &Attributes) {
        let Some(position) = attributes.get_attribute("pos") else {
            return;
        };
        let Some(center) = self.node_position(id, position) else {
            return;
        };
        let Some(size) = self.node_size(id, attributes, position) else {
            return;
        };

        let shapes = self.draw(attributes, &NODE_DRAW_ATTRIBUTES);
        let url = attributes.get("URL").map(str::to_string);
        let node = Node::new(id, center, size, shapes, url);
        let index = self.nodes.register(node);
        debug!(id, index = index.index(); "Node");
    }

    fn edge(&mut self, source: &str, destination: &str, attributes: &Attributes) {
        let Some(position) = attributes.get("pos") else {
            return;
        };
        let points = self.edge_points(position);
        if points.is_empty() {
            debug!(source, destination; "Dropping edge without usable points");
            return;
        }

        let shapes = self.draw(attributes, &DRAW_ATTRIBUTES);
        if shapes.is_empty() {
            debug!(source, destination; "Dropping edge without shapes");
            return;
        }

        let (Some(source_index), Some(destination_index)) =
            (self.nodes.lookup(source), self.nodes.lookup(destination))
        else {
            debug!(source, destination; "Dropping edge with an unknown endpoint");
            return;
        };

        let edge = Edge::new(source_index, destination_index, points, shapes);
        self.edges.push(edge);
    }
}

/// Parses exactly `N` comma separated numbers.
fn parse_coordinates<const N: usize>(text: &str) -> Option<[f32; N]> {
    let mut values = [0.0; N];
    let mut fields = text.split(',');
    for value in &mut values {
        *value = fields.next()?.trim().parse().ok()?;
    }
    fields.next().is_none().then_some(values)
}

/// Logs a summary of a finished graph.
pub(crate) fn log_summary(graph: &Graph, warnings: usize) {
    info!(
        nodes = graph.visible_node_count(),
        edges = graph.edge_count(),
        shapes = graph.shapes().len(),
        warnings;
        "Graph built"
    );
}
