//! Subcommands of the `xdot` tool.
//!
//! [`run`] loads the graph named by the subcommand, reports the warnings
//! collected while building the scene, and then renders it to SVG, prints
//! hit-test results, or prints a summary.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, Command, SourceArgs};

use std::fs;

use log::{info, warn};

use xdot::{
    SceneBuilder, XdotError,
    config::AppConfig,
    geometry::Point,
    scene::{Element, Graph, Highlight},
};
use xdot_parser::error::Diagnostic;

use crate::error_adapter::{render, warning_reportables};

/// Runs the subcommand in `args`.
///
/// # Errors
///
/// Returns `XdotError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Layout errors
/// - Parsing errors
/// - Rendering errors
///
/// Warnings in the graph are reported but never fail the command.
pub fn run(args: &Args) -> Result<(), XdotError> {
    let config = config::load_config(args.config.as_ref())?;
    let scene = Scene::load(config, args.command.source())?;

    match &args.command {
        Command::Render {
            output, highlight, ..
        } => scene.render(output, highlight),
        Command::Probe { points, .. } => {
            for &point in points {
                println!("{}", describe_probe(&scene.graph, point));
            }
            Ok(())
        }
        Command::Check { source } => {
            println!("{}", scene.summary(&source.input));
            Ok(())
        }
    }
}

/// A parsed graph together with the builder that produced it.
struct Scene {
    builder: SceneBuilder,
    graph: Graph,
    warnings: usize,
}

impl Scene {
    /// Reads the input, lays it out when an engine is given and parses it.
    fn load(config: AppConfig, source: &SourceArgs) -> Result<Self, XdotError> {
        info!(input_path = source.input; "Loading graph");

        let config = match source.engine {
            Some(engine) => config.with_layout_engine(engine),
            None => config,
        };
        let builder = SceneBuilder::new(config);

        let input = fs::read_to_string(&source.input)?;
        let text = match source.engine {
            Some(_) => layout(&builder, &input)?,
            None => input,
        };

        let (graph, warnings) = builder.parse_named(&text, &source.input)?.into_parts();
        report_warnings(&warnings, &text);

        Ok(Self {
            builder,
            graph,
            warnings: warnings.len(),
        })
    }

    /// Writes the scene as SVG, highlighting what each point jumps to.
    fn render(&self, output: &str, points: &[Point]) -> Result<(), XdotError> {
        let mut highlight = Highlight::new();
        for &point in points {
            if let Some(jump) = self.graph.jump_at(point) {
                highlight.extend(jump.highlight().iter().copied());
            }
        }

        let svg = self.builder.render_svg(&self.graph, &highlight)?;
        fs::write(output, svg)?;

        info!(output_file = output, highlighted = highlight.len(); "SVG exported successfully");
        Ok(())
    }

    fn summary(&self, input: &str) -> String {
        format!(
            "{input}: {} nodes, {} edges, {} shapes, {} warnings",
            self.graph.visible_node_count(),
            self.graph.edge_count(),
            self.graph.shapes().len(),
            self.warnings
        )
    }
}

#[cfg(feature = "graphviz")]
fn layout(builder: &SceneBuilder, dot_source: &str) -> Result<String, XdotError> {
    builder.layout(dot_source)
}

#[cfg(not(feature = "graphviz"))]
fn layout(builder: &SceneBuilder, _dot_source: &str) -> Result<String, XdotError> {
    Err(xdot::LayoutError::Failed {
        engine: builder.config().layout().engine(),
        message: "built without the `graphviz` feature".to_string(),
    }
    .into())
}

/// Renders each warning with miette and logs it.
fn report_warnings(warnings: &[Diagnostic], source: &str) {
    for reportable in warning_reportables(warnings, source) {
        warn!("{}", render(&reportable));
    }
}

/// Describes what lies under `point` as a single line.
pub fn describe_probe(graph: &Graph, point: Point) -> String {
    let mut line = format!("probe {},{}:", point.x(), point.y());

    if let Some(url) = graph.url_at(point) {
        line.push_str(&format!(
            " url {} ({})",
            url.url(),
            describe_element(graph, url.element())
        ));
    }

    match graph.jump_at(point) {
        Some(jump) => line.push_str(&format!(
            " jump {},{} ({})",
            jump.point().x(),
            jump.point().y(),
            describe_element(graph, jump.element())
        )),
        None if graph.url_at(point).is_none() => line.push_str(" nothing"),
        None => {}
    }
    line
}

fn describe_element(graph: &Graph, element: Element) -> String {
    let node_id = |index| graph.node(index).map_or("?", |node| node.id());
    match element {
        Element::Node(index) => format!("node {}", node_id(index)),
        Element::Edge(index) => match graph.edge(index) {
            Some(edge) => format!(
                "edge {} -> {}",
                node_id(edge.source()),
                node_id(edge.destination())
            ),
            None => format!("edge {}", index.index()),
        },
    }
}

#[cfg(test)]
mod tests {
    use xdot::ParseConfig;

    use super::*;

    const SOURCE: &str = r#"digraph {
        graph [bb="0,0,100,100"];
        a [pos="50,80", width="0.5", height="0.5", URL="https://a.example",
           _draw_="c 7 -#000000 e 50 80 18 18 "];
        b [pos="50,20", width="0.5", height="0.5",
           _draw_="c 7 -#000000 e 50 20 18 18 "];
        a -> b [pos="e,50,38 50,62 50,55 50,45 50,38",
                _draw_="c 7 -#000000 B 4 50 62 50 55 50 45 50 38 "];
    }"#;

    fn graph() -> Graph {
        xdot_parser::parse(SOURCE, ParseConfig::new())
            .unwrap()
            .into_parts()
            .0
    }

    #[test]
    fn test_describe_node_with_url() {
        let line = describe_probe(&graph(), Point::new(50.0, 20.0));
        assert_eq!(
            line,
            "probe 50,20: url https://a.example (node a) jump 50,20 (node a)"
        );
    }

    #[test]
    fn test_describe_edge_end() {
        let line = describe_probe(&graph(), Point::new(50.0, 38.0));
        assert!(line.contains("(edge a -> b)"), "{line}");
        assert!(line.contains("jump 50,80"), "{line}");
    }

    #[test]
    fn test_scene_summary() {
        let (graph, warnings) = xdot_parser::parse(SOURCE, ParseConfig::new())
            .unwrap()
            .into_parts();
        let scene = Scene {
            builder: SceneBuilder::default(),
            graph,
            warnings: warnings.len(),
        };

        assert_eq!(
            scene.summary("g.xdot"),
            "g.xdot: 2 nodes, 1 edges, 0 shapes, 0 warnings"
        );
    }

    #[test]
    fn test_describe_empty_space() {
        let line = describe_probe(&graph(), Point::new(2.0, 2.0));
        assert_eq!(line, "probe 2,2: nothing");
    }
}
