//! # xdot Parser
//!
//! Parser for Graphviz DOT text annotated with xdot drawing instructions.
//! This crate turns laid out DOT source into an [`xdot_core::scene::Graph`].
//!
//! ## Usage
//!
//! ```
//! # use xdot_parser::{parse, ParseConfig, error::ParseError};
//!
//! fn main() -> Result<(), ParseError> {
//!     let source = r#"
//!         digraph {
//!             graph [bb="0,0,54,36"];
//!             a [pos="27,18", width="0.75", height="0.5",
//!                _draw_="c 7 -#000000 e 27 18 27 18 "];
//!         }
//!     "#;
//!
//!     let parsed = parse(source, ParseConfig::new())?;
//!     assert_eq!(parsed.graph().visible_node_count(), 1);
//!     assert!(parsed.warnings().is_empty());
//!     Ok(())
//! }
//! ```

pub mod attributes;
mod builder;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod scanner;
mod span;
mod tokens;
pub mod xdot;

pub use span::Span;
pub use tokens::{Token, TokenKind};

use log::info;
use xdot_core::scene::Graph;

use builder::GraphBuilder;
use error::{Diagnostic, ParseError};
use lexer::Lexer;
use parser::DotParser;

/// Options for a single parse.
#[derive(Debug, Clone, Default)]
pub struct ParseConfig {
    source_name: Option<String>,
}

impl ParseConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Names the input in error messages, usually a file path.
    pub fn with_source_name(mut self, source_name: impl Into<String>) -> Self {
        self.source_name = Some(source_name.into());
        self
    }

    pub fn source_name(&self) -> Option<&str> {
        self.source_name.as_deref()
    }
}

/// A built graph together with the warnings raised while building it.
#[derive(Debug, Clone)]
pub struct Parsed {
    graph: Graph,
    warnings: Vec<Diagnostic>,
}

impl Parsed {
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Problems in attribute values that did not stop the parse.
    pub fn warnings(&self) -> &[Diagnostic] {
        &self.warnings
    }

    pub fn into_parts(self) -> (Graph, Vec<Diagnostic>) {
        (self.graph, self.warnings)
    }
}

/// Parse xdot text into a scene graph.
///
/// The pipeline runs in one pass:
///
/// 1. **Lex** - The lexer feeds tokens on demand, tracking lines and columns
/// 2. **Parse** - The DOT grammar reports graph, node and edge statements
/// 3. **Build** - Geometry attributes become nodes, edges and shapes
///
/// # Errors
///
/// Returns a [`ParseError`] for an invalid character or a statement that
/// does not follow the DOT grammar. No partial graph is returned.
pub fn parse(source: &str, config: ParseConfig) -> Result<Parsed, ParseError> {
    info!(source_name:? = config.source_name(), bytes = source.len(); "Parsing xdot");

    let lexer = Lexer::new(source).with_source_name(config.source_name);
    let mut parser = DotParser::new(lexer, GraphBuilder::new())?;
    parser.parse()?;

    let (graph, warnings) = parser.into_visitor().finish();
    builder::log_summary(&graph, warnings.len());

    Ok(Parsed { graph, warnings })
}
