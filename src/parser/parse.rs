//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct, its [`Cursor`], the token
//! helpers shared by every production, and the `program` entry point.
//!
//! # Parser Architecture
//!
//! The Parser uses a recursive descent approach with one procedure per
//! grammar production:
//! - This module: Parser struct, cursor, helper methods, `program`
//! - `declarations`: translation unit, directives, functions, declarations
//! - `statements`: compound, selection, iteration, jump and expression statements
//! - `expressions`: balanced token runs (expressions, initializers, conditions)
//!
//! # Failure semantics
//!
//! Productions return `Option<Node>`: `None` means the leading token did not
//! match and nothing was consumed (or the cursor was restored). Missing pieces
//! inside a production that did match are simply left out of its children.
//! Only the translation-unit and compound-statement loops discard tokens.
//! Statements nested deeper than [`MAX_NESTING`] are not descended into;
//! they become one flat run so the recursion depth stays bounded.

use crate::parser::ast::Node;
use crate::parser::lexer::{Token, TokenKind};
use tracing::debug;

/// Keywords accepted by `type_specifier`.
pub const TYPE_SPECIFIERS: [&str; 9] = [
    "int", "float", "char", "double", "void", "long", "short", "unsigned", "signed",
];

/// Statement nesting beyond which statements are kept as flat token runs.
pub const MAX_NESTING: usize = 256;

/// Saved cursor position, see [`Cursor::snapshot`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot(usize);

/// Read position within the token sequence.
#[derive(Debug, Default)]
pub struct Cursor {
    position: usize,
}

impl Cursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn advance(&mut self) {
        self.position += 1;
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot(self.position)
    }

    pub fn restore(&mut self, snapshot: Snapshot) {
        self.position = snapshot.0;
    }
}

/// Recursive descent parser producing an annotated parse tree
pub struct Parser {
    pub(crate) tokens: Vec<Token>,
    pub(crate) cursor: Cursor,
    /// Statements currently being parsed, innermost included
    pub(crate) nesting: usize,
}

impl Parser {
    /// Comment tokens are dropped; the grammar has no place for them.
    pub fn new(tokens: Vec<Token>) -> Self {
        let tokens = tokens
            .into_iter()
            .filter(|token| !token.kind.is_comment())
            .collect();
        Self {
            tokens,
            cursor: Cursor::new(),
            nesting: 0,
        }
    }

    /// Parse the whole token sequence into a tree rooted at `program`.
    pub fn parse_program(&mut self) -> Node {
        let unit = self.parse_translation_unit();
        Node::non_terminal("program", "program → translation_unit", vec![unit])
    }

    // ===== Helper methods =====

    pub(crate) fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.cursor.position())
    }

    pub(crate) fn peek_ahead(&self, n: usize) -> Option<&Token> {
        self.tokens.get(self.cursor.position() + n)
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.cursor.position() >= self.tokens.len()
    }

    pub(crate) fn check(&self, kind: TokenKind, text: &str) -> bool {
        self.peek().is_some_and(|token| token.is(kind, text))
    }

    pub(crate) fn check_kind(&self, kind: TokenKind) -> bool {
        self.peek().is_some_and(|token| token.kind == kind)
    }

    pub(crate) fn check_delimiter(&self, text: &str) -> bool {
        self.check(TokenKind::Delimiter, text)
    }

    pub(crate) fn check_keyword(&self, text: &str) -> bool {
        self.check(TokenKind::Keyword, text)
    }

    pub(crate) fn is_type_keyword(&self) -> bool {
        self.is_type_keyword_at(0)
    }

    pub(crate) fn is_type_keyword_at(&self, offset: usize) -> bool {
        self.peek_ahead(offset).is_some_and(|token| {
            token.kind == TokenKind::Keyword && TYPE_SPECIFIERS.contains(&token.text.as_str())
        })
    }

    /// Whether `*`* identifier starts `offset` tokens ahead.
    pub(crate) fn starts_declarator_at(&self, offset: usize) -> bool {
        let mut ahead = offset;
        while self
            .peek_ahead(ahead)
            .is_some_and(|token| token.is(TokenKind::Operator, "*"))
        {
            ahead += 1;
        }
        self.peek_ahead(ahead)
            .is_some_and(|token| token.kind == TokenKind::Identifier)
    }

    /// Consume the current token as a terminal.
    pub(crate) fn take_terminal(&mut self) -> Option<Node> {
        let node = Node::terminal(self.peek()?.text.clone());
        self.cursor.advance();
        Some(node)
    }

    /// Consume the current token as a terminal if it has this kind and text.
    pub(crate) fn match_terminal(&mut self, kind: TokenKind, text: &str) -> Option<Node> {
        if self.check(kind, text) {
            self.take_terminal()
        } else {
            None
        }
    }

    pub(crate) fn match_kind(&mut self, kind: TokenKind) -> Option<Node> {
        if self.check_kind(kind) {
            self.take_terminal()
        } else {
            None
        }
    }

    pub(crate) fn match_delimiter(&mut self, text: &str) -> Option<Node> {
        self.match_terminal(TokenKind::Delimiter, text)
    }

    pub(crate) fn match_keyword(&mut self, text: &str) -> Option<Node> {
        self.match_terminal(TokenKind::Keyword, text)
    }

    /// Consume leading `*` marks of a declarator.
    pub(crate) fn take_pointer_marks(&mut self) -> Vec<Node> {
        let mut marks = Vec::new();
        while let Some(star) = self.match_terminal(TokenKind::Operator, "*") {
            marks.push(star);
        }
        marks
    }

    /// Discard the current token; used when no production applies.
    pub(crate) fn skip_token(&mut self, context: &str) {
        if let Some(token) = self.peek() {
            debug!(
                line = token.line(),
                column = token.column(),
                "skipping {} '{}' in {context}",
                token.kind,
                token.text
            );
            self.cursor.advance();
        }
    }
}

/// Parse `tokens` with a fresh [`Parser`].
pub fn parse(tokens: &[Token]) -> Node {
    Parser::new(tokens.to_vec()).parse_program()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::lexer::tokenize;

    fn parse_source(source: &str) -> Node {
        parse(&tokenize(source))
    }

    #[test]
    fn test_cursor_snapshot_restore() {
        let mut cursor = Cursor::new();
        cursor.advance();
        let snapshot = cursor.snapshot();
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.position(), 3);
        cursor.restore(snapshot);
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn test_declarator_lookahead_does_not_move_the_cursor() {
        let parser = Parser::new(tokenize("** p , * 1 , int q"));
        assert!(parser.starts_declarator_at(0));
        assert!(!parser.starts_declarator_at(4));
        assert!(parser.is_type_keyword_at(7));
        assert!(!parser.is_type_keyword_at(8));
        assert_eq!(parser.cursor.position(), 0);
    }

    #[test]
    fn test_parse_simple_function() {
        let program = parse_source("int main() { return 0; }");

        assert_eq!(program.label(), Some("program"));
        let unit = &program.children()[0];
        assert_eq!(unit.label(), Some("translation_unit"));
        assert_eq!(unit.children().len(), 1);

        let function = &unit.children()[0];
        assert_eq!(function.label(), Some("function_definition"));
        let labels: Vec<_> = function.children().iter().map(|c| c.label()).collect();
        assert_eq!(
            labels,
            [
                Some("type_specifier"),
                Some("declarator"),
                Some("compound_statement")
            ]
        );
        assert_eq!(
            function.terminal_values(),
            ["int", "main", "(", ")", "{", "return", "0", ";", "}"]
        );
    }

    #[test]
    fn test_comments_do_not_reach_the_tree() {
        let program = parse_source("/* header */ int x; // trailing");
        assert_eq!(program.terminal_values(), ["int", "x", ";"]);
    }

    #[test]
    fn test_empty_program() {
        let program = parse_source("");
        assert_eq!(program.children().len(), 1);
        assert!(program.children()[0].children().is_empty());
        assert_eq!(program.production_count(), 2);
    }

    #[test]
    fn test_parse_is_repeatable() {
        let tokens = tokenize("int a = 1; int f(int b) { if (b) return a; }");
        assert_eq!(parse(&tokens), parse(&tokens));
    }
}
