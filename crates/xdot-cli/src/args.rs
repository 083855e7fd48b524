//! Command-line interface of the `xdot` tool.
//!
//! Every subcommand reads one graph, either xdot text produced by Graphviz or
//! plain DOT laid out first with `--engine`:
//!
//! ```text
//! xdot render graph.xdot -o graph.svg --highlight 27,36
//! xdot probe graph.dot --engine neato 10,20 30,40
//! xdot check graph.xdot
//! ```

use clap::{Parser, Subcommand};
use log::LevelFilter;

use xdot::{engine::LayoutEngine, geometry::Point};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Path to configuration file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, global = true, default_value_t = LevelFilter::Info)]
    pub log_level: LevelFilter,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the graph to an SVG file
    Render {
        #[command(flatten)]
        source: SourceArgs,

        /// Path to the output SVG file
        #[arg(short, long, default_value = "out.svg")]
        output: String,

        /// Highlight whatever a click at `x,y` would jump to; may be repeated
        #[arg(long, value_parser = parse_point)]
        highlight: Vec<Point>,
    },

    /// Print the URL and jump target under each `x,y` scene point
    Probe {
        #[command(flatten)]
        source: SourceArgs,

        #[arg(required = true, allow_hyphen_values = true, value_parser = parse_point)]
        points: Vec<Point>,
    },

    /// Parse the graph and report its warnings without writing anything
    Check {
        #[command(flatten)]
        source: SourceArgs,
    },
}

impl Command {
    /// The graph every subcommand reads.
    pub fn source(&self) -> &SourceArgs {
        match self {
            Command::Render { source, .. }
            | Command::Probe { source, .. }
            | Command::Check { source } => source,
        }
    }
}

/// Where the graph comes from.
#[derive(clap::Args, Debug)]
pub struct SourceArgs {
    /// Path to the input file: xdot, or plain DOT when `--engine` is given
    pub input: String,

    /// Lay out the input with this Graphviz engine before parsing
    #[arg(short, long)]
    pub engine: Option<LayoutEngine>,
}

/// Parses `x,y` scene coordinates.
pub fn parse_point(value: &str) -> Result<Point, String> {
    let invalid = || format!("invalid point `{value}`, expected `x,y`");
    let (x, y) = value.split_once(',').ok_or_else(invalid)?;
    let x = x.trim().parse::<f32>().map_err(|_| invalid())?;
    let y = y.trim().parse::<f32>().map_err(|_| invalid())?;
    Ok(Point::new(x, y))
}
