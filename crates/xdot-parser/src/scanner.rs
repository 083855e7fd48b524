//! Stateless, table driven scanner for DOT source text.
//!
//! The scanner recognises one token at a given byte offset. It knows nothing
//! about lines, columns or token filtering; that is the job of the
//! [`Lexer`](crate::lexer::Lexer).
//!
//! Each [`Rule`] pairs a token kind with a winnow pattern. Every rule is
//! tried at the current offset and the longest match wins, with ties going to
//! the rule listed first. Matches of rules flagged as keyword candidates are
//! reclassified when their text is a DOT keyword. When no rule matches, the
//! single-character symbol table is consulted.

use winnow::{
    Parser as _,
    ascii::{digit0, digit1},
    combinator::{alt, opt, repeat},
    error::ModalResult,
    token::{any, none_of, one_of, take_till, take_until, take_while},
};

use crate::tokens::TokenKind;

/// The result of scanning one token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scan<'a> {
    /// Kind of the token. [`TokenKind::Skip`] for whitespace and comments,
    /// [`TokenKind::Invalid`] for a character that starts no token.
    pub kind: TokenKind,
    /// The raw matched text.
    pub text: &'a str,
    /// Byte offset just past the match.
    pub end: usize,
}

type Pattern = for<'a> fn(&mut &'a str) -> ModalResult<&'a str>;

struct Rule {
    kind: TokenKind,
    pattern: Pattern,
    keyword_candidate: bool,
}

const RULES: [Rule; 10] = [
    // Whitespace and comments
    Rule {
        kind: TokenKind::Skip,
        pattern: whitespace,
        keyword_candidate: false,
    },
    Rule {
        kind: TokenKind::Skip,
        pattern: line_comment,
        keyword_candidate: false,
    },
    Rule {
        kind: TokenKind::Skip,
        pattern: block_comment,
        keyword_candidate: false,
    },
    Rule {
        kind: TokenKind::Skip,
        pattern: hash_comment,
        keyword_candidate: false,
    },
    // Identifiers
    Rule {
        kind: TokenKind::Id,
        pattern: alphanumeric_id,
        keyword_candidate: true,
    },
    Rule {
        kind: TokenKind::Id,
        pattern: numeral,
        keyword_candidate: false,
    },
    Rule {
        kind: TokenKind::StrId,
        pattern: quoted_string,
        keyword_candidate: false,
    },
    Rule {
        kind: TokenKind::HtmlId,
        pattern: html_string,
        keyword_candidate: false,
    },
    // Edge operators
    Rule {
        kind: TokenKind::EdgeOp,
        pattern: edge_op,
        keyword_candidate: false,
    },
    Rule {
        kind: TokenKind::EdgeOp,
        pattern: undirected_edge_op,
        keyword_candidate: false,
    },
];

/// Scans the token starting at byte `offset` of `buffer`.
///
/// Returns [`TokenKind::Eof`] with empty text once `offset` reaches the end of
/// the buffer.
///
/// # Examples
///
/// ```
/// use xdot_parser::scanner::scan;
/// use xdot_parser::TokenKind;
///
/// let scan = scan("digraph G {}", 0);
/// assert_eq!(scan.kind, TokenKind::Digraph);
/// assert_eq!(scan.end, 7);
/// ```
pub fn scan(buffer: &str, offset: usize) -> Scan<'_> {
    let rest = buffer.get(offset..).unwrap_or_default();

    let Some(first) = rest.chars().next() else {
        return Scan {
            kind: TokenKind::Eof,
            text: "",
            end: buffer.len(),
        };
    };

    let mut best: Option<(&Rule, &str)> = None;
    for rule in &RULES {
        let mut input = rest;
        let Ok(text) = (rule.pattern)(&mut input) else {
            continue;
        };
        if best.is_none_or(|(_, best_text)| text.len() > best_text.len()) {
            best = Some((rule, text));
        }
    }

    if let Some((rule, text)) = best {
        let kind = if rule.keyword_candidate {
            TokenKind::keyword(text).unwrap_or(rule.kind)
        } else {
            rule.kind
        };
        return Scan {
            kind,
            text,
            end: offset + text.len(),
        };
    }

    let text = &rest[..first.len_utf8()];
    Scan {
        kind: TokenKind::symbol(first).unwrap_or(TokenKind::Invalid),
        text,
        end: offset + text.len(),
    }
}

fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\x0c' | '\r' | '\n' | '\x0b')
}

fn is_line_end(c: char) -> bool {
    c == '\r' || c == '\n'
}

fn is_id_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || !c.is_ascii()
}

fn is_id_continue(c: char) -> bool {
    is_id_start(c) || c.is_ascii_digit()
}

fn is_angle(c: char) -> bool {
    c == '<' || c == '>'
}

fn whitespace<'a>(input: &mut &'a str) -> ModalResult<&'a str> {
    take_while(1.., is_whitespace).parse_next(input)
}

/// `// ...` up to the end of the line.
fn line_comment<'a>(input: &mut &'a str) -> ModalResult<&'a str> {
    ("//", take_till(0.., is_line_end)).take().parse_next(input)
}

/// `/* ... */`, not nested.
fn block_comment<'a>(input: &mut &'a str) -> ModalResult<&'a str> {
    ("/*", take_until(0.., "*/"), "*/").take().parse_next(input)
}

/// `# ...` up to the end of the line, as emitted by preprocessors.
fn hash_comment<'a>(input: &mut &'a str) -> ModalResult<&'a str> {
    ('#', take_till(0.., is_line_end)).take().parse_next(input)
}

fn alphanumeric_id<'a>(input: &mut &'a str) -> ModalResult<&'a str> {
    (one_of(is_id_start), take_while(0.., is_id_continue))
        .take()
        .parse_next(input)
}

/// `-?(\.[0-9]+|[0-9]+(\.[0-9]*)?)`
fn numeral<'a>(input: &mut &'a str) -> ModalResult<&'a str> {
    (
        opt('-'),
        alt((('.', digit1).void(), (digit1, opt(('.', digit0))).void())),
    )
        .take()
        .parse_next(input)
}

/// A double quoted string. A backslash escapes any following character,
/// including a quote or a line break.
fn quoted_string<'a>(input: &mut &'a str) -> ModalResult<&'a str> {
    (
        '"',
        repeat::<_, _, (), _, _>(
            0..,
            alt((
                none_of(|c: char| c == '"' || c == '\\').void(),
                ('\\', any).void(),
            )),
        ),
        '"',
    )
        .take()
        .parse_next(input)
}

/// `<...>` allowing one level of nested angle brackets.
fn html_string<'a>(input: &mut &'a str) -> ModalResult<&'a str> {
    (
        '<',
        take_till(0.., is_angle),
        repeat::<_, _, (), _, _>(
            0..,
            ('<', take_till(0.., is_angle), '>', take_till(0.., is_angle)),
        ),
        '>',
    )
        .take()
        .parse_next(input)
}

fn edge_op<'a>(input: &mut &'a str) -> ModalResult<&'a str> {
    "->".parse_next(input)
}

fn undirected_edge_op<'a>(input: &mut &'a str) -> ModalResult<&'a str> {
    "--".parse_next(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<(TokenKind, &str)> {
        let mut offset = 0;
        let mut result = Vec::new();
        loop {
            let scan = scan(source, offset);
            if scan.kind == TokenKind::Eof {
                return result;
            }
            if scan.kind != TokenKind::Skip {
                result.push((scan.kind, scan.text));
            }
            offset = scan.end;
        }
    }

    #[test]
    fn test_scan_eof() {
        let scan = scan("", 0);
        assert_eq!(scan.kind, TokenKind::Eof);
        assert_eq!(scan.text, "");
        assert_eq!(scan.end, 0);

        assert_eq!(super::scan("ab", 2).kind, TokenKind::Eof);
    }

    #[test]
    fn test_scan_keywords_ignore_case() {
        assert_eq!(
            kinds("STRICT DiGraph node EDGE subgraph Graph"),
            vec![
                (TokenKind::Strict, "STRICT"),
                (TokenKind::Digraph, "DiGraph"),
                (TokenKind::Node, "node"),
                (TokenKind::Edge, "EDGE"),
                (TokenKind::Subgraph, "subgraph"),
                (TokenKind::Graph, "Graph"),
            ]
        );
    }

    #[test]
    fn test_scan_keyword_prefix_is_identifier() {
        assert_eq!(kinds("nodes"), vec![(TokenKind::Id, "nodes")]);
        assert_eq!(kinds("_graph"), vec![(TokenKind::Id, "_graph")]);
    }

    #[test]
    fn test_scan_numerals() {
        assert_eq!(
            kinds("1 -2 3.5 .5 -.25 7."),
            vec![
                (TokenKind::Id, "1"),
                (TokenKind::Id, "-2"),
                (TokenKind::Id, "3.5"),
                (TokenKind::Id, ".5"),
                (TokenKind::Id, "-.25"),
                (TokenKind::Id, "7."),
            ]
        );
    }

    #[test]
    fn test_scan_edge_operators() {
        assert_eq!(
            kinds("a->b--c"),
            vec![
                (TokenKind::Id, "a"),
                (TokenKind::EdgeOp, "->"),
                (TokenKind::Id, "b"),
                (TokenKind::EdgeOp, "--"),
                (TokenKind::Id, "c"),
            ]
        );
    }

    #[test]
    fn test_scan_non_ascii_identifier() {
        assert_eq!(kinds("été2"), vec![(TokenKind::Id, "été2")]);
    }

    #[test]
    fn test_scan_quoted_string_with_escapes() {
        let source = r#""say \"hi\"" x"#;
        assert_eq!(
            kinds(source),
            vec![
                (TokenKind::StrId, r#""say \"hi\"""#),
                (TokenKind::Id, "x"),
            ]
        );
    }

    #[test]
    fn test_scan_quoted_string_spans_lines() {
        assert_eq!(
            kinds("\"a\\\nb\""),
            vec![(TokenKind::StrId, "\"a\\\nb\"")]
        );
    }

    #[test]
    fn test_scan_unterminated_string_is_invalid() {
        let scan = scan("\"abc", 0);
        assert_eq!(scan.kind, TokenKind::Invalid);
        assert_eq!(scan.text, "\"");
        assert_eq!(scan.end, 1);
    }

    #[test]
    fn test_scan_html_string() {
        assert_eq!(
            kinds("<<b>bold</b> text>"),
            vec![(TokenKind::HtmlId, "<<b>bold</b> text>")]
        );
        assert_eq!(kinds("<plain>"), vec![(TokenKind::HtmlId, "<plain>")]);
    }

    #[test]
    fn test_scan_comments_are_skipped() {
        let source = "a // line\n/* block\n */ b # hash\nc";
        assert_eq!(
            kinds(source),
            vec![
                (TokenKind::Id, "a"),
                (TokenKind::Id, "b"),
                (TokenKind::Id, "c"),
            ]
        );
    }

    #[test]
    fn test_scan_symbols() {
        assert_eq!(
            kinds("[]{},:;=+"),
            vec![
                (TokenKind::LSquare, "["),
                (TokenKind::RSquare, "]"),
                (TokenKind::LCurly, "{"),
                (TokenKind::RCurly, "}"),
                (TokenKind::Comma, ","),
                (TokenKind::Colon, ":"),
                (TokenKind::Semi, ";"),
                (TokenKind::Equal, "="),
                (TokenKind::Plus, "+"),
            ]
        );
    }

    #[test]
    fn test_scan_invalid_character() {
        let scan = scan("$", 0);
        assert_eq!(scan.kind, TokenKind::Invalid);
        assert_eq!(scan.text, "$");
    }

    #[test]
    fn test_scan_longest_match_wins() {
        // The numeral `-1` is longer than nothing matched by the edge rules.
        assert_eq!(scan("-1", 0).kind, TokenKind::Id);
        // `-` alone matches no rule and is not a symbol.
        assert_eq!(scan("- ", 0).kind, TokenKind::Invalid);
        // A block comment beats the single `/`.
        assert_eq!(scan("/**/", 0).kind, TokenKind::Skip);
        assert_eq!(scan("/", 0).kind, TokenKind::Invalid);
    }

    #[test]
    fn test_scan_reports_absolute_end() {
        let scan = scan("ab  cd", 4);
        assert_eq!(scan.kind, TokenKind::Id);
        assert_eq!(scan.text, "cd");
        assert_eq!(scan.end, 6);
    }
}

#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;

    use super::*;

    /// Scanning always makes progress until the end of input and the matched
    /// text always sits at the scanned offset.
    fn check_scan_progresses(source: &str) -> Result<(), TestCaseError> {
        let mut offset = 0;
        loop {
            let scan = scan(source, offset);
            if scan.kind == TokenKind::Eof {
                prop_assert_eq!(offset, source.len());
                return Ok(());
            }
            prop_assert!(scan.end > offset);
            prop_assert_eq!(&source[offset..scan.end], scan.text);
            offset = scan.end;
        }
    }

    const DOT_LIKE: &str = "[a-z0-9 \"<>\\[\\]{};=,:\\-/*#.\\\\\n\t]{0,64}";

    proptest! {
        #[test]
        fn scan_progresses(source in "\\PC{0,64}") {
            check_scan_progresses(&source)?;
        }

        #[test]
        fn scan_progresses_on_dot_like_input(source in DOT_LIKE) {
            check_scan_progresses(&source)?;
        }
    }
}
