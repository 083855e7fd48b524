//! Lexical analyzer for DOT source text.
//!
//! The lexer drives the [`scanner`](crate::scanner) over the source, tracks
//! the line and column of every token, drops whitespace and comments, and
//! filters quoted and HTML strings into plain identifiers.
//!
//! Columns are 1-based and count characters; a tab advances to the next tab
//! stop (every 8 columns). `\r\n`, `\r` and `\n` each end a line.

use log::trace;

use crate::{
    error::{Diagnostic, ErrorCode, ParseError, Result},
    scanner::scan,
    span::Span,
    tokens::{Token, TokenKind},
};

const TAB_SIZE: usize = 8;

/// Produces filtered tokens with positions.
///
/// # Examples
///
/// ```
/// use xdot_parser::lexer::Lexer;
/// use xdot_parser::TokenKind;
///
/// let mut lexer = Lexer::new("ab\tcd");
/// assert_eq!(lexer.next_token()?.col(), 1);
///
/// let token = lexer.next_token()?;
/// assert_eq!(token.text(), "cd");
/// assert_eq!(token.col(), 9);
///
/// assert_eq!(lexer.next_token()?.kind(), TokenKind::Eof);
/// # Ok::<(), xdot_parser::error::ParseError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    source: &'a str,
    offset: usize,
    line: usize,
    col: usize,
    source_name: Option<String>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            offset: 0,
            line: 1,
            col: 1,
            source_name: None,
        }
    }

    /// Names the source in error messages, typically a file name.
    pub fn with_source_name(mut self, source_name: Option<String>) -> Self {
        self.source_name = source_name;
        self
    }

    pub fn source_name(&self) -> Option<&str> {
        self.source_name.as_deref()
    }

    /// Returns the next significant token.
    ///
    /// Whitespace and comments are consumed transparently. Once the source is
    /// exhausted every call returns an [`TokenKind::Eof`] token.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] positioned at the offending character when the
    /// source contains a character that starts no token.
    pub fn next_token(&mut self) -> Result<Token> {
        loop {
            let (line, col, start) = (self.line, self.col, self.offset);

            let scanned = scan(self.source, self.offset);
            self.advance_position(scanned.text);
            self.offset = scanned.end;
            let span = Span::new(start..scanned.end);

            match scanned.kind {
                TokenKind::Skip => continue,
                TokenKind::Invalid => {
                    return Err(self.invalid_character(scanned.text, span, line, col));
                }
                kind => {
                    let (kind, text) = filter(kind, scanned.text);
                    trace!(kind:? = kind, line, col; "Token");
                    return Ok(Token::new(kind, text, line, col, span));
                }
            }
        }
    }

    /// Lexes the remaining source, ending with the [`TokenKind::Eof`] token.
    pub fn tokenize(mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let done = token.kind() == TokenKind::Eof;
            tokens.push(token);
            if done {
                return Ok(tokens);
            }
        }
    }

    fn advance_position(&mut self, text: &str) {
        let mut chars = text.chars().peekable();
        while let Some(c) = chars.next() {
            match c {
                '\r' | '\n' => {
                    if c == '\r' && chars.peek() == Some(&'\n') {
                        chars.next();
                    }
                    self.line += 1;
                    self.col = 1;
                }
                '\t' => self.col = ((self.col - 1) / TAB_SIZE + 1) * TAB_SIZE + 1,
                _ => self.col += 1,
            }
        }
    }

    fn invalid_character(&self, text: &str, span: Span, line: usize, col: usize) -> ParseError {
        let shown = match text.chars().next() {
            Some(c) if (' '..='~').contains(&c) => format!("'{c}'"),
            Some(c) => format!("0x{:X}", u32::from(c)),
            None => "<none>".to_string(),
        };
        let diagnostic = Diagnostic::error(format!("unexpected char {shown}"))
            .with_code(ErrorCode::E001)
            .with_label(span, "unexpected character");

        ParseError::new(diagnostic)
            .with_source_name(self.source_name.clone())
            .with_position(line, col)
    }
}

/// Turns quoted and HTML strings into identifiers.
fn filter(kind: TokenKind, text: &str) -> (TokenKind, String) {
    match kind {
        TokenKind::StrId => {
            let inner = strip_delimiters(text, '"', '"');
            (TokenKind::Id, unescape(inner))
        }
        TokenKind::HtmlId => (TokenKind::Id, strip_delimiters(text, '<', '>').to_string()),
        _ => (kind, text.to_string()),
    }
}

fn strip_delimiters(text: &str, open: char, close: char) -> &str {
    text.strip_prefix(open)
        .and_then(|inner| inner.strip_suffix(close))
        .unwrap_or(text)
}

/// Removes line continuations, decodes `\r`, `\n` and `\t`, then drops every
/// remaining backslash.
fn unescape(text: &str) -> String {
    text.replace("\\\r\n", "")
        .replace("\\\r", "")
        .replace("\\\n", "")
        .replace("\\r", "\r")
        .replace("\\n", "\n")
        .replace("\\t", "\t")
        .replace('\\', "")
}
