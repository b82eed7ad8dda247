//! Statement parsing implementation
//!
//! This module handles parsing of the C statement forms the grammar knows:
//!
//! - Compound statements: `{ ... }`
//! - Declarations inside blocks: `int x = 42;`
//! - Selection: `if (...) statement else statement`
//! - Iteration: `while (...)`, `for (...)`, `do ... while (...);`
//! - Jump statements: `return`, `break`, `continue`
//! - Expression statements: anything else up to `;`
//!
//! # Grammar
//!
//! ```text
//! statement ::= compound_statement | declaration | selection_statement
//!             | iteration_statement | jump_statement | expression_statement
//! ```
//!
//! `statement` only dispatches; the chosen production's node is returned
//! as is, without a wrapping `statement` node.
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::Node;
use crate::parser::lexer::TokenKind;
use crate::parser::parse::{Parser, MAX_NESTING};
use tracing::debug;

impl Parser {
    /// `{` statement* `}`; tokens no statement accepts are discarded.
    pub(crate) fn parse_compound_statement(&mut self) -> Option<Node> {
        let mut children = vec![self.match_delimiter("{")?];

        while !self.is_at_end() && !self.check_delimiter("}") {
            match self.parse_statement() {
                Some(statement) => children.push(statement),
                None => self.skip_token("compound statement"),
            }
        }

        children.extend(self.match_delimiter("}"));

        Some(Node::non_terminal(
            "compound_statement",
            "compound_statement → { statement* }",
            children,
        ))
    }

    /// Parse a statement
    pub(crate) fn parse_statement(&mut self) -> Option<Node> {
        if self.nesting >= MAX_NESTING {
            return self.parse_flat_statement();
        }

        self.nesting += 1;
        let statement = self.dispatch_statement();
        self.nesting -= 1;
        statement
    }

    fn dispatch_statement(&mut self) -> Option<Node> {
        if self.check_delimiter("{") {
            return self.parse_compound_statement();
        }

        if self.is_type_keyword() {
            return self.parse_declaration();
        }

        if self.check_kind(TokenKind::Keyword) {
            let keyword = self.peek()?.text.clone();
            match keyword.as_str() {
                "if" => return self.parse_selection_statement(),
                "while" | "for" | "do" => return self.parse_iteration_statement(),
                "return" | "break" | "continue" => return self.parse_jump_statement(),
                _ => {}
            }
        }

        self.parse_expression_statement()
    }

    fn parse_selection_statement(&mut self) -> Option<Node> {
        let mut children = vec![self.match_keyword("if")?];
        children.extend(self.parse_condition("expression → balanced-run-to-matching-paren"));
        children.extend(self.parse_statement());

        if let Some(otherwise) = self.match_keyword("else") {
            children.push(otherwise);
            children.extend(self.parse_statement());
        }

        Some(Node::non_terminal(
            "selection_statement",
            "selection_statement → if ( expression ) statement (else statement)?",
            children,
        ))
    }

    fn parse_iteration_statement(&mut self) -> Option<Node> {
        if let Some(keyword) = self.match_keyword("while") {
            let mut children = vec![keyword];
            children.extend(self.parse_condition("expression → balanced-run-to-matching-paren"));
            children.extend(self.parse_statement());
            return Some(Node::non_terminal(
                "iteration_statement",
                "iteration_statement → while ( expression ) statement",
                children,
            ));
        }

        if let Some(keyword) = self.match_keyword("for") {
            let mut children = vec![keyword];
            children.extend(
                self.parse_condition("expression → for-header balanced-run-to-matching-paren"),
            );
            children.extend(self.parse_statement());
            return Some(Node::non_terminal(
                "iteration_statement",
                "iteration_statement → for ( balanced-run ) statement",
                children,
            ));
        }

        let mut children = vec![self.match_keyword("do")?];
        children.extend(self.parse_statement());
        if let Some(keyword) = self.match_keyword("while") {
            children.push(keyword);
            children.extend(self.parse_condition("expression → balanced-run-to-matching-paren"));
            children.extend(self.match_delimiter(";"));
        }

        Some(Node::non_terminal(
            "iteration_statement",
            "iteration_statement → do statement while ( expression ) ;",
            children,
        ))
    }

    fn parse_jump_statement(&mut self) -> Option<Node> {
        if let Some(keyword) = self.match_keyword("return") {
            let mut children = vec![keyword];
            children.extend(self.parse_expression());
            children.extend(self.match_delimiter(";"));
            return Some(Node::non_terminal(
                "jump_statement",
                "jump_statement → return expression? ;",
                children,
            ));
        }

        let keyword = self
            .match_keyword("break")
            .or_else(|| self.match_keyword("continue"))?;
        let spelled = keyword.value().unwrap_or_default().to_string();
        let mut children = vec![keyword];
        children.extend(self.match_delimiter(";"));

        Some(Node::non_terminal(
            "jump_statement",
            format!("jump_statement → {spelled} ;"),
            children,
        ))
    }

    /// expression? `;`, absent when neither part is present.
    fn parse_expression_statement(&mut self) -> Option<Node> {
        let expression = self.parse_expression();
        let semicolon = self.match_delimiter(";");

        if expression.is_none() && semicolon.is_none() {
            return None;
        }

        Some(Node::non_terminal(
            "expression_statement",
            "expression_statement → expression? ;",
            expression.into_iter().chain(semicolon).collect(),
        ))
    }

    /// Too deeply nested: the whole statement as one token run and its `;`.
    fn parse_flat_statement(&mut self) -> Option<Node> {
        if let Some(token) = self.peek() {
            debug!(
                line = token.line(),
                column = token.column(),
                "statement nesting exceeds {MAX_NESTING}, keeping it as a flat run"
            );
        }

        let mut children = self.collect_run();
        children.extend(self.match_delimiter(";"));
        if children.is_empty() {
            return None;
        }

        Some(Node::non_terminal(
            "statement",
            "statement → token run (nesting limit)",
            children,
        ))
    }
}
