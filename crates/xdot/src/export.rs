//! Export of parsed scenes.
//!
//! # Pipeline Position
//!
//! ```text
//! xdot text
//!     ↓ parse
//! Graph
//!     ↓ export (this module)
//! Output
//! ```
//!
//! # Available Backends
//!
//! - [`svg`] - SVG output via [`svg::SvgBuilder`] and [`svg::Svg`]

/// SVG export backend.
pub mod svg;

use std::io;

use thiserror::Error;

use xdot_core::scene::{Graph, Highlight};

/// Abstraction for scene export backends.
pub trait Exporter {
    /// Writes `graph` to `writer`, drawing the elements in `highlight` with
    /// the highlighted pen.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if writing the output fails.
    fn export_graph(
        &self,
        graph: &Graph,
        highlight: &Highlight,
        writer: &mut dyn io::Write,
    ) -> Result<(), Error>;
}

/// Errors that can occur during export.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Render error: {0}")]
    Render(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
