//! xdot - Load Graphviz xdot output into an interactive scene.
//!
//! Graphviz can annotate a laid out graph with drawing instructions (the
//! "xdot" format). This crate parses that text into a geometric scene of
//! nodes, edges and shapes, answers hit-testing queries on it, and renders
//! it to SVG. Plain DOT can be laid out first through a [`LayoutRunner`].

pub mod config;

mod error;
mod export;
mod layout;

pub use xdot_core::{color, draw, engine, geometry, scene};
pub use xdot_parser::{ParseConfig, Parsed, error::ParseError};

pub use error::XdotError;
pub use export::{Error as ExportError, Exporter, svg::Svg, svg::SvgBuilder};
#[cfg(feature = "graphviz")]
pub use layout::GraphvizRunner;
pub use layout::{LayoutError, LayoutRunner};

use std::{fs, path::Path};

use log::{debug, info, trace};

use config::AppConfig;
use scene::{Graph, Highlight};

/// Builder for loading and rendering xdot scenes.
///
/// # Examples
///
/// ```rust
/// use xdot::{SceneBuilder, config::AppConfig, scene::Highlight};
///
/// let source = r#"digraph {
///     graph [bb="0,0,54,36"];
///     a [pos="27,18", width=0.75, height=0.5, _draw_="e 27 18 27 18 "];
/// }"#;
///
/// let builder = SceneBuilder::new(AppConfig::default());
/// let parsed = builder.parse(source).expect("Failed to parse");
///
/// let svg = builder
///     .render_svg(parsed.graph(), &Highlight::new())
///     .expect("Failed to render");
/// assert!(svg.contains("<ellipse"));
/// ```
#[derive(Debug, Default)]
pub struct SceneBuilder {
    config: AppConfig,
}

impl SceneBuilder {
    /// Create a new scene builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse xdot text into a scene.
    ///
    /// # Errors
    ///
    /// Returns [`XdotError::Parse`] if the text is not valid DOT.
    pub fn parse(&self, source: &str) -> Result<Parsed, XdotError> {
        self.parse_with(source, ParseConfig::new())
    }

    /// Read and parse an xdot file. Errors name the file.
    ///
    /// # Errors
    ///
    /// Returns [`XdotError::Io`] if the file cannot be read, or
    /// [`XdotError::Parse`] if it is not valid DOT.
    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<Parsed, XdotError> {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading xdot file");

        let source = fs::read_to_string(path)?;
        self.parse_named(&source, &path.display().to_string())
    }

    /// Parse xdot text, naming it `source_name` in errors.
    ///
    /// # Errors
    ///
    /// Returns [`XdotError::Parse`] if the text is not valid DOT.
    pub fn parse_named(&self, source: &str, source_name: &str) -> Result<Parsed, XdotError> {
        self.parse_with(source, ParseConfig::new().with_source_name(source_name))
    }

    /// Lay out plain DOT with `runner`, returning the xdot text.
    ///
    /// The engine comes from the layout configuration.
    ///
    /// # Errors
    ///
    /// Returns [`XdotError::Layout`] if the runner fails.
    pub fn layout_with<R>(&self, runner: &R, dot_source: &str) -> Result<String, XdotError>
    where
        R: LayoutRunner + ?Sized,
    {
        let engine = self.config.layout().engine();
        info!(engine = engine.as_str(); "Running layout");

        let xdot = runner.layout(dot_source, engine)?;
        trace!(bytes = xdot.len(); "Layout output");
        Ok(xdot)
    }

    /// Lay out plain DOT with `runner` and parse the result.
    ///
    /// # Errors
    ///
    /// Returns [`XdotError::Layout`] if the runner fails, or
    /// [`XdotError::Parse`] if its output cannot be parsed.
    pub fn load_dot_with<R>(&self, runner: &R, dot_source: &str) -> Result<Parsed, XdotError>
    where
        R: LayoutRunner + ?Sized,
    {
        let xdot = self.layout_with(runner, dot_source)?;
        let engine = self.config.layout().engine();
        self.parse_named(&xdot, engine.as_str())
    }

    /// Lay out plain DOT with Graphviz, returning the xdot text.
    ///
    /// # Errors
    ///
    /// See [`Self::layout_with`].
    #[cfg(feature = "graphviz")]
    pub fn layout(&self, dot_source: &str) -> Result<String, XdotError> {
        self.layout_with(&GraphvizRunner::new(), dot_source)
    }

    /// Lay out plain DOT with Graphviz and parse the result.
    ///
    /// # Errors
    ///
    /// See [`Self::load_dot_with`].
    #[cfg(feature = "graphviz")]
    pub fn load_dot(&self, dot_source: &str) -> Result<Parsed, XdotError> {
        self.load_dot_with(&GraphvizRunner::new(), dot_source)
    }

    /// Render a scene to an SVG string.
    ///
    /// Elements in `highlight` are painted with the highlighted pen.
    ///
    /// # Errors
    ///
    /// Returns [`XdotError::Export`] if the configured style is invalid.
    pub fn render_svg(&self, graph: &Graph, highlight: &Highlight) -> Result<String, XdotError> {
        info!(
            nodes = graph.visible_node_count(),
            edges = graph.edge_count(),
            highlighted = highlight.len();
            "Rendering SVG"
        );

        let svg = SvgBuilder::new().with_style(self.config.style()).build()?;
        let mut buffer = Vec::new();
        svg.export_graph(graph, highlight, &mut buffer)?;
        let output = String::from_utf8(buffer)
            .map_err(|err| ExportError::Render(err.to_string()))?;

        debug!(bytes = output.len(); "SVG rendered");
        Ok(output)
    }

    fn parse_with(&self, source: &str, config: ParseConfig) -> Result<Parsed, XdotError> {
        let parsed = xdot_parser::parse(source, config)
            .map_err(|err| XdotError::new_parse_error(err, source))?;
        debug!(warnings = parsed.warnings().len(); "Scene parsed");
        Ok(parsed)
    }
}
