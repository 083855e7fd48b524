//! The fatal error type of the parser.

use std::fmt;

use crate::error::Diagnostic;

/// A type alias for `Result<T, ParseError>`.
pub type Result<T> = std::result::Result<T, ParseError>;

/// A fatal lexer or parser error.
///
/// The [`Display`](fmt::Display) form joins the source name, line, column and
/// message with `:`, leaving out the parts that are not known or empty, e.g.
/// `graph.xdot:3:7:unexpected token `]``.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    diagnostic: Diagnostic,
    source_name: Option<String>,
    line: Option<usize>,
    col: Option<usize>,
}

impl ParseError {
    /// Create a parse error without position information.
    pub fn new(diagnostic: Diagnostic) -> Self {
        Self {
            diagnostic,
            source_name: None,
            line: None,
            col: None,
        }
    }

    /// Attach the name of the source the error came from.
    pub fn with_source_name(mut self, source_name: Option<String>) -> Self {
        self.source_name = source_name;
        self
    }

    /// Attach the 1-based line and column of the error.
    pub fn with_position(mut self, line: usize, col: usize) -> Self {
        self.line = Some(line);
        self.col = Some(col);
        self
    }

    /// The diagnostic describing the error.
    pub fn diagnostic(&self) -> &Diagnostic {
        &self.diagnostic
    }

    pub fn message(&self) -> &str {
        self.diagnostic.message()
    }

    pub fn source_name(&self) -> Option<&str> {
        self.source_name.as_deref()
    }

    pub fn line(&self) -> Option<usize> {
        self.line
    }

    pub fn col(&self) -> Option<usize> {
        self.col
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts = [
            self.source_name.clone(),
            self.line.map(|line| line.to_string()),
            self.col.map(|col| col.to_string()),
            Some(self.message().to_string()),
        ];
        let joined = parts
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(":");
        f.write_str(&joined)
    }
}

impl std::error::Error for ParseError {}

impl From<Diagnostic> for ParseError {
    fn from(diagnostic: Diagnostic) -> Self {
        Self::new(diagnostic)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_parse_error_from_diagnostic() {
        let diag = Diagnostic::error("test error").with_code(ErrorCode::E100);
        let err: ParseError = diag.into();

        assert_eq!(err.message(), "test error");
        assert_eq!(err.diagnostic().code(), Some(ErrorCode::E100));
        assert_eq!(err.line(), None);
    }

    #[test]
    fn test_parse_error_display_full() {
        let err = ParseError::new(Diagnostic::error("unexpected char '$'"))
            .with_source_name(Some("graph.xdot".to_string()))
            .with_position(3, 7);

        assert_eq!(err.to_string(), "graph.xdot:3:7:unexpected char '$'");
    }

    #[test]
    fn test_parse_error_display_without_source_name() {
        let err = ParseError::new(Diagnostic::error("unexpected end of input")).with_position(1, 9);

        assert_eq!(err.to_string(), "1:9:unexpected end of input");
    }

    #[test]
    fn test_parse_error_display_with_empty_source_name() {
        let err = ParseError::new(Diagnostic::error("unexpected char '$'"))
            .with_source_name(Some(String::new()))
            .with_position(1, 11);

        assert_eq!(err.to_string(), "1:11:unexpected char '$'");
    }

    #[test]
    fn test_parse_error_display_message_only() {
        let err = ParseError::new(Diagnostic::error("boom"));

        assert_eq!(err.to_string(), "boom");
    }
}
