//! Recursive descent parser for the DOT grammar.
//!
//! The parser reads tokens from a [`Lexer`] with one token of lookahead and
//! reports what it finds to a [`GraphVisitor`]. It holds no knowledge of what
//! the attributes mean; the visitor decides.
//!
//! ```text
//! graph      := ["strict"] ("graph" | "digraph") [ID] "{" stmt* "}" EOF
//! subgraph   := ["subgraph" [ID]] ["{" stmt* "}"]
//! stmt       := ("graph" attrs | "node" attrs | "edge" attrs
//!              | subgraph | edge_stmt | node_stmt | ID "=" ID) [";"]
//! edge_stmt  := node_id (edge_op node_id)+ attrs
//! node_stmt  := node_id attrs
//! node_id    := ID [":" ID [":" ID]]
//! attrs      := ("[" (ID ["=" ID] [","|";"])* "]")*
//! ```
//!
//! Ports and compass points are parsed and discarded. An edge chain
//! `a -> b -> c` is reported as one edge per consecutive pair, all sharing
//! the statement's attributes.

use std::mem;

use crate::{
    attributes::{Attribute, Attributes},
    error::{Diagnostic, ErrorCode, ParseError, Result},
    lexer::Lexer,
    tokens::{Token, TokenKind},
};

/// Where a `graph [...]` statement appeared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    /// Directly inside the top level graph.
    Root,
    /// Inside a subgraph, named or anonymous.
    Subgraph(Option<String>),
}

impl Scope {
    pub fn is_root(&self) -> bool {
        matches!(self, Scope::Root)
    }
}

/// Receives the statements recognised by a [`DotParser`].
///
/// Every callback defaults to doing nothing.
pub trait GraphVisitor {
    /// Called for each `graph [...]` statement with that statement's own
    /// attributes.
    fn graph_attributes(&mut self, _attributes: &Attributes, _scope: &Scope) {}

    /// Called for each node statement.
    fn node(&mut self, _id: &str, _attributes: &Attributes) {}

    /// Called for each edge of an edge statement.
    fn edge(&mut self, _source: &str, _destination: &str, _attributes: &Attributes) {}
}

/// DOT grammar parser driving a [`GraphVisitor`].
///
/// # Examples
///
/// ```
/// use xdot_parser::attributes::Attributes;
/// use xdot_parser::lexer::Lexer;
/// use xdot_parser::parser::{DotParser, GraphVisitor};
///
/// #[derive(Default)]
/// struct NodeNames(Vec<String>);
///
/// impl GraphVisitor for NodeNames {
///     fn node(&mut self, id: &str, _attributes: &Attributes) {
///         self.0.push(id.to_string());
///     }
/// }
///
/// let mut parser = DotParser::new(Lexer::new("graph { a; b }"), NodeNames::default())?;
/// parser.parse()?;
/// assert_eq!(parser.into_visitor().0, vec!["a", "b"]);
/// # Ok::<(), xdot_parser::error::ParseError>(())
/// ```
#[derive(Debug)]
pub struct DotParser<'a, V> {
    lexer: Lexer<'a>,
    lookahead: Token,
    visitor: V,
    scope: Scope,
    graph_attributes: Attributes,
    node_defaults: Attributes,
    edge_defaults: Attributes,
}

impl<'a, V: GraphVisitor> DotParser<'a, V> {
    /// Creates a parser and reads the first token.
    pub fn new(mut lexer: Lexer<'a>, visitor: V) -> Result<Self> {
        let lookahead = lexer.next_token()?;
        Ok(Self {
            lexer,
            lookahead,
            visitor,
            scope: Scope::Root,
            graph_attributes: Attributes::new(),
            node_defaults: Attributes::new(),
            edge_defaults: Attributes::new(),
        })
    }

    /// Parses one complete graph followed by the end of input.
    pub fn parse(&mut self) -> Result<()> {
        self.parse_graph()?;
        self.expect(TokenKind::Eof, "end of input")
    }

    /// Graph attributes accumulated from every `graph [...]` statement.
    pub fn graph_attributes(&self) -> &Attributes {
        &self.graph_attributes
    }

    /// Attributes accumulated from `node [...]` statements.
    pub fn node_defaults(&self) -> &Attributes {
        &self.node_defaults
    }

    /// Attributes accumulated from `edge [...]` statements.
    pub fn edge_defaults(&self) -> &Attributes {
        &self.edge_defaults
    }

    /// The current lookahead token.
    pub fn lookahead(&self) -> &Token {
        &self.lookahead
    }

    pub fn visitor(&self) -> &V {
        &self.visitor
    }

    pub fn into_visitor(self) -> V {
        self.visitor
    }

    /// Consumes tokens until the lookahead is of `kind` or the input ends.
    pub fn skip_to(&mut self, kind: TokenKind) -> Result<()> {
        while !self.at(kind) && !self.at(TokenKind::Eof) {
            self.consume()?;
        }
        Ok(())
    }

    fn parse_graph(&mut self) -> Result<()> {
        if self.at(TokenKind::Strict) {
            self.consume()?;
        }
        if !self.at(TokenKind::Graph) && !self.at(TokenKind::Digraph) {
            return Err(self.unexpected("`graph` or `digraph`"));
        }
        self.consume()?;
        if self.at(TokenKind::Id) {
            self.consume()?;
        }
        self.expect(TokenKind::LCurly, "`{`")?;
        self.consume()?;
        self.parse_statements()?;
        self.consume()?;
        Ok(())
    }

    /// Parses statements up to, but not including, the closing `}`.
    fn parse_statements(&mut self) -> Result<()> {
        while !self.at(TokenKind::RCurly) {
            self.parse_statement()?;
        }
        Ok(())
    }

    fn parse_subgraph(&mut self) -> Result<Option<String>> {
        let mut id = None;
        if self.at(TokenKind::Subgraph) {
            self.consume()?;
            if self.at(TokenKind::Id) {
                id = Some(self.consume()?.into_text());
            }
        }
        if self.at(TokenKind::LCurly) {
            self.consume()?;
            let outer = mem::replace(&mut self.scope, Scope::Subgraph(id.clone()));
            self.parse_statements()?;
            self.scope = outer;
            self.consume()?;
        }
        Ok(id)
    }

    fn parse_statement(&mut self) -> Result<()> {
        match self.lookahead.kind() {
            TokenKind::Graph => {
                self.consume()?;
                let attributes = self.parse_attributes()?;
                self.graph_attributes.merge(&attributes);
                self.visitor.graph_attributes(&attributes, &self.scope);
            }
            TokenKind::Node => {
                self.consume()?;
                let attributes = self.parse_attributes()?;
                self.node_defaults.merge(&attributes);
            }
            TokenKind::Edge => {
                self.consume()?;
                let attributes = self.parse_attributes()?;
                self.edge_defaults.merge(&attributes);
            }
            TokenKind::Subgraph | TokenKind::LCurly => {
                self.parse_subgraph()?;
            }
            _ => self.parse_node_or_edge()?,
        }
        if self.at(TokenKind::Semi) {
            self.consume()?;
        }
        Ok(())
    }

    fn parse_node_or_edge(&mut self) -> Result<()> {
        let id = self.parse_node_id()?;

        if self.at(TokenKind::EdgeOp) {
            let mut ids = vec![id];
            while self.at(TokenKind::EdgeOp) {
                self.consume()?;
                ids.push(self.parse_node_id()?);
            }
            let attributes = self.parse_attributes()?;
            for pair in ids.windows(2) {
                self.visitor.edge(&pair[0], &pair[1], &attributes);
            }
        } else if self.at(TokenKind::Equal) {
            self.consume()?;
            self.parse_id()?;
        } else {
            let attributes = self.parse_attributes()?;
            self.visitor.node(&id, &attributes);
        }
        Ok(())
    }

    fn parse_attributes(&mut self) -> Result<Attributes> {
        let mut attributes = Attributes::new();
        while self.at(TokenKind::LSquare) {
            self.consume()?;
            while !self.at(TokenKind::RSquare) {
                let name = self.parse_id()?;
                let attribute = if self.at(TokenKind::Equal) {
                    self.consume()?;
                    let value = self.parse_id()?;
                    Attribute::new(value.text(), value.span())
                } else {
                    Attribute::new("true", name.span())
                };
                attributes.insert(name.into_text(), attribute);

                if self.at(TokenKind::Comma) || self.at(TokenKind::Semi) {
                    self.consume()?;
                }
            }
            self.consume()?;
        }
        Ok(attributes)
    }

    fn parse_node_id(&mut self) -> Result<String> {
        let id = self.parse_id()?.into_text();
        if self.at(TokenKind::Colon) {
            self.consume()?;
            self.parse_id()?;
            if self.at(TokenKind::Colon) {
                self.consume()?;
                self.parse_id()?;
            }
        }
        Ok(id)
    }

    fn parse_id(&mut self) -> Result<Token> {
        self.expect(TokenKind::Id, "an identifier")?;
        self.consume()
    }

    fn at(&self, kind: TokenKind) -> bool {
        self.lookahead.kind() == kind
    }

    fn expect(&self, kind: TokenKind, expected: &str) -> Result<()> {
        if self.at(kind) {
            Ok(())
        } else {
            Err(self.unexpected(expected))
        }
    }

    /// Returns the lookahead and reads the next token.
    fn consume(&mut self) -> Result<Token> {
        let next = self.lexer.next_token()?;
        Ok(mem::replace(&mut self.lookahead, next))
    }

    fn unexpected(&self, expected: &str) -> ParseError {
        let token = &self.lookahead;
        let diagnostic = if token.kind() == TokenKind::Eof {
            Diagnostic::error("unexpected end of input")
                .with_code(ErrorCode::E101)
                .with_label(token.span(), "input ends here")
        } else {
            Diagnostic::error(format!("unexpected token `{}`", token.text()))
                .with_code(ErrorCode::E100)
                .with_label(token.span(), format!("unexpected {}", token.kind()))
        };

        ParseError::new(diagnostic.with_help(format!("expected {expected}")))
            .with_source_name(self.lexer.source_name().map(str::to_string))
            .with_position(token.line(), token.col())
    }
}
