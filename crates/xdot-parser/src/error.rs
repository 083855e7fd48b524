//! Error and diagnostic system for the xdot parser.
//!
//! This module provides an error handling system with:
//! - Error codes for documentation and searchability
//! - Labeled spans for rich error context
//! - Severity levels
//! - Diagnostic collector for accumulating warnings
//!
//! # Overview
//!
//! Structural problems (an invalid character, an unexpected token) are fatal
//! and reported as a [`ParseError`] carrying the source name, line and column.
//! Problems inside attribute values (a malformed position, an unknown drawing
//! opcode) never stop the parse; they are returned next to the graph as
//! warning [`Diagnostic`]s.
//!
//! # Example
//!
//! ```
//! # use xdot_parser::error::{Diagnostic, ErrorCode};
//! # use xdot_parser::Span;
//!
//! let diag = Diagnostic::warning("unknown drawing opcode `Z`")
//!     .with_code(ErrorCode::E200)
//!     .with_label(Span::new(10..24), "in this attribute")
//!     .with_help("the remaining instructions of the attribute were ignored");
//! ```

mod collector;
mod diagnostic;
mod error_code;
mod parse_error;

pub(crate) use collector::DiagnosticCollector;
pub(crate) use parse_error::Result;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use error_code::ErrorCode;
pub use parse_error::ParseError;
