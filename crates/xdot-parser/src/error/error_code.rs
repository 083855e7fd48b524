//! Error codes for the xdot diagnostic system.
//!
//! Error codes are organized by phase:
//! - `E0xx` - Lexer errors
//! - `E1xx` - Parser errors
//! - `E2xx` - Drawing instruction warnings
//! - `E3xx` - Graph assembly warnings

use std::fmt;

/// Error codes for categorizing diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Lexer Errors (E0xx)
    // =========================================================================
    /// Unexpected character.
    ///
    /// A character was encountered that does not start any token.
    E001,

    // =========================================================================
    // Parser Errors (E1xx)
    // =========================================================================
    /// Unexpected token.
    ///
    /// The parser encountered a token it did not expect at this position.
    E100,

    /// Incomplete input.
    ///
    /// The input ended before the graph was closed.
    E101,

    // =========================================================================
    // Drawing Instruction Warnings (E2xx)
    // =========================================================================
    /// Unknown drawing opcode.
    ///
    /// The rest of the attribute is ignored.
    E200,

    /// Malformed drawing operand.
    ///
    /// An instruction operand is missing or is not a number of the expected
    /// kind. The rest of the attribute is ignored.
    E201,

    /// Unsupported color.
    ///
    /// Only `#RRGGBB[AA]` and HSV triples are decoded. Other colors are
    /// painted black.
    E202,

    // =========================================================================
    // Graph Assembly Warnings (E3xx)
    // =========================================================================
    /// Malformed bounding box.
    ///
    /// `bb` must be four comma separated numbers.
    E300,

    /// Malformed node position.
    ///
    /// A node `pos` must be `x,y` with an optional trailing `!`.
    E301,

    /// Missing or malformed node size.
    ///
    /// A positioned node needs numeric `width` and `height` attributes.
    E302,
}

impl ErrorCode {
    /// Returns the numeric code as a string (e.g., "E001").
    pub fn as_str(&self) -> &'static str {
        match self {
            // Lexer errors
            ErrorCode::E001 => "E001",
            // Parser errors
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            // Drawing instruction warnings
            ErrorCode::E200 => "E200",
            ErrorCode::E201 => "E201",
            ErrorCode::E202 => "E202",
            // Graph assembly warnings
            ErrorCode::E300 => "E300",
            ErrorCode::E301 => "E301",
            ErrorCode::E302 => "E302",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            // Lexer errors
            ErrorCode::E001 => "unexpected character",
            // Parser errors
            ErrorCode::E100 => "unexpected token",
            ErrorCode::E101 => "incomplete input",
            // Drawing instruction warnings
            ErrorCode::E200 => "unknown drawing opcode",
            ErrorCode::E201 => "malformed drawing operand",
            ErrorCode::E202 => "unsupported color",
            // Graph assembly warnings
            ErrorCode::E300 => "malformed bounding box",
            ErrorCode::E301 => "malformed node position",
            ErrorCode::E302 => "malformed node size",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
