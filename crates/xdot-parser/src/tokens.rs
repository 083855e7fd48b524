//! Token definitions for the DOT grammar.

use std::fmt;

use crate::span::Span;

/// The kind of a scanned or lexed token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Identifier: alphanumeric, numeral, or a filtered quoted/HTML string.
    Id,
    /// Quoted string as scanned, before the lexer filters it into an [`TokenKind::Id`].
    StrId,
    /// HTML string as scanned, before the lexer filters it into an [`TokenKind::Id`].
    HtmlId,
    /// `->` or `--`
    EdgeOp,

    LSquare,
    RSquare,
    LCurly,
    RCurly,
    Comma,
    Colon,
    Semi,
    Equal,
    Plus,

    // Keywords (matched case-insensitively)
    Strict,
    Graph,
    Digraph,
    Node,
    Edge,
    Subgraph,

    /// Whitespace or a comment.
    Skip,
    /// A character that starts no token.
    Invalid,
    /// End of input.
    Eof,
}

impl TokenKind {
    /// Returns the keyword kind for `text`, ignoring ASCII case.
    pub fn keyword(text: &str) -> Option<Self> {
        const KEYWORDS: [(&str, TokenKind); 6] = [
            ("strict", TokenKind::Strict),
            ("graph", TokenKind::Graph),
            ("digraph", TokenKind::Digraph),
            ("node", TokenKind::Node),
            ("edge", TokenKind::Edge),
            ("subgraph", TokenKind::Subgraph),
        ];

        KEYWORDS
            .iter()
            .find(|(keyword, _)| keyword.eq_ignore_ascii_case(text))
            .map(|(_, kind)| *kind)
    }

    /// Returns the kind of a single-character symbol.
    pub fn symbol(c: char) -> Option<Self> {
        match c {
            '[' => Some(Self::LSquare),
            ']' => Some(Self::RSquare),
            '{' => Some(Self::LCurly),
            '}' => Some(Self::RCurly),
            ',' => Some(Self::Comma),
            ':' => Some(Self::Colon),
            ';' => Some(Self::Semi),
            '=' => Some(Self::Equal),
            '+' => Some(Self::Plus),
            _ => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Id => "identifier",
            Self::StrId => "quoted string",
            Self::HtmlId => "HTML string",
            Self::EdgeOp => "edge operator",
            Self::LSquare => "`[`",
            Self::RSquare => "`]`",
            Self::LCurly => "`{`",
            Self::RCurly => "`}`",
            Self::Comma => "`,`",
            Self::Colon => "`:`",
            Self::Semi => "`;`",
            Self::Equal => "`=`",
            Self::Plus => "`+`",
            Self::Strict => "`strict`",
            Self::Graph => "`graph`",
            Self::Digraph => "`digraph`",
            Self::Node => "`node`",
            Self::Edge => "`edge`",
            Self::Subgraph => "`subgraph`",
            Self::Skip => "whitespace",
            Self::Invalid => "invalid character",
            Self::Eof => "end of input",
        };
        f.write_str(name)
    }
}

/// A lexed token with its 1-based position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    kind: TokenKind,
    text: String,
    line: usize,
    col: usize,
    span: Span,
}

impl Token {
    pub fn new(
        kind: TokenKind,
        text: impl Into<String>,
        line: usize,
        col: usize,
        span: Span,
    ) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
            col,
            span,
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Token text after filtering. Quoted strings have lost their quotes and
    /// escapes.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn col(&self) -> usize {
        self.col
    }

    /// Byte range of the raw token in the source.
    pub fn span(&self) -> Span {
        self.span
    }
}
