//! Declaration parsing implementation
//!
//! This module handles the top level of a C translation unit:
//!
//! - Preprocessor directives: `#include <stdio.h>`, `#define MAX 10`
//! - Function definitions: `int main(void) { ... }`
//! - Declarations: `int x = 5, *p, buf[16];`
//! - Type specifiers, declarators and parameter lists
//!
//! # Grammar
//!
//! ```text
//! translation_unit       ::= external_declaration*
//! external_declaration   ::= preprocessor_directive | function_definition | declaration
//! preprocessor_directive ::= "#" directive_name header_file?
//! function_definition    ::= type_specifier declarator compound_statement
//! declarator             ::= "*"* identifier "(" parameter_list? ")"
//! parameter_list         ::= parameter_declaration ("," parameter_declaration)*
//! parameter_declaration  ::= type_specifier "*"* identifier? array_suffix*
//! declaration            ::= type_specifier init_declarator_list ";"
//! init_declarator_list   ::= init_declarator ("," init_declarator)*
//! init_declarator        ::= "*"* identifier array_suffix* ("=" initializer)?
//! ```
//!
//! The function/declaration choice in `external_declaration` is the only
//! place that saves and restores the cursor; everything else decides with
//! `peek_ahead` before consuming.
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::Node;
use crate::parser::lexer::TokenKind;
use crate::parser::parse::Parser;
use tracing::debug;

impl Parser {
    /// Parse every external declaration, discarding tokens none of them accepts.
    pub(crate) fn parse_translation_unit(&mut self) -> Node {
        let mut declarations = Vec::new();

        while !self.is_at_end() {
            match self.parse_external_declaration() {
                Some(declaration) => declarations.push(declaration),
                None => self.skip_token("translation unit"),
            }
        }

        Node::non_terminal(
            "translation_unit",
            "translation_unit → external_declaration*",
            declarations,
        )
    }

    /// Dispatch to a directive, function definition or declaration.
    fn parse_external_declaration(&mut self) -> Option<Node> {
        if self.check(TokenKind::Preprocessor, "#") {
            return self.parse_preprocessor_directive();
        }

        if !self.is_type_keyword() {
            return None;
        }

        if self.starts_function_definition() {
            self.parse_function_definition()
        } else {
            self.parse_declaration()
        }
    }

    /// Look past the type specifier and name: a `(` means function definition.
    fn starts_function_definition(&mut self) -> bool {
        let snapshot = self.cursor.snapshot();

        self.parse_type_specifier();
        self.take_pointer_marks();
        let is_function =
            self.match_kind(TokenKind::Identifier).is_some() && self.check_delimiter("(");

        if let Some(token) = self.peek() {
            debug!(
                line = token.line(),
                "external declaration parsed as {}",
                if is_function {
                    "function definition"
                } else {
                    "declaration"
                }
            );
        }

        self.cursor.restore(snapshot);
        is_function
    }

    /// `#` and the directive name become one terminal (`#include`); the rest
    /// of the directive line follows as terminals.
    fn parse_preprocessor_directive(&mut self) -> Option<Node> {
        let line = self.peek()?.line();
        self.match_terminal(TokenKind::Preprocessor, "#")?;

        let mut directive = String::from("#");
        let has_name = self.peek().is_some_and(|t| {
            t.kind == TokenKind::Preprocessor && t.text != "#" && t.line() == line
        });
        if has_name {
            if let Some(Node::Terminal { value }) = self.take_terminal() {
                directive.push_str(&value);
            }
        }

        let mut children = vec![Node::terminal(directive)];
        while self
            .peek()
            .is_some_and(|t| t.line() == line && !t.is(TokenKind::Preprocessor, "#"))
        {
            children.extend(self.take_terminal());
        }

        Some(Node::non_terminal(
            "preprocessor_directive",
            "preprocessor_directive → # directive_name header_file?",
            children,
        ))
    }

    fn parse_function_definition(&mut self) -> Option<Node> {
        let mut children = vec![self.parse_type_specifier()?];
        children.extend(self.parse_declarator());
        children.extend(self.parse_compound_statement());

        Some(Node::non_terminal(
            "function_definition",
            "function_definition → type_specifier declarator compound_statement",
            children,
        ))
    }

    /// One or more consecutive type keywords (`unsigned long int`).
    pub(crate) fn parse_type_specifier(&mut self) -> Option<Node> {
        let mut keywords = Vec::new();
        while self.is_type_keyword() {
            keywords.extend(self.take_terminal());
        }
        if keywords.is_empty() {
            return None;
        }

        let spelled = keywords
            .iter()
            .filter_map(Node::value)
            .map(|word| format!("'{word}'"))
            .collect::<Vec<_>>()
            .join(" ");

        Some(Node::non_terminal(
            "type_specifier",
            format!("type_specifier → {spelled}"),
            keywords,
        ))
    }

    fn parse_declarator(&mut self) -> Option<Node> {
        if !self.starts_declarator_at(0) {
            return None;
        }
        let mut children = self.take_pointer_marks();
        children.extend(self.match_kind(TokenKind::Identifier));

        if let Some(open) = self.match_delimiter("(") {
            children.push(open);

            // `(void)` declares no parameters: keep the keyword, no parameter_list
            let void_only = self.check_keyword("void")
                && self
                    .peek_ahead(1)
                    .is_some_and(|t| t.is(TokenKind::Delimiter, ")"));
            if void_only {
                children.extend(self.take_terminal());
            } else {
                children.extend(self.parse_parameter_list());
            }

            children.extend(self.match_delimiter(")"));
        }

        Some(Node::non_terminal(
            "declarator",
            "declarator → identifier ( parameter_list? )",
            children,
        ))
    }

    fn parse_parameter_list(&mut self) -> Option<Node> {
        let mut children = vec![self.parse_parameter_declaration()?];

        while self.check_delimiter(",") && self.starts_parameter_at(1) {
            children.extend(self.take_terminal());
            children.extend(
                self.parse_variadic_marker()
                    .or_else(|| self.parse_parameter_declaration()),
            );
        }

        Some(Node::non_terminal(
            "parameter_list",
            "parameter_list → parameter_declaration (, parameter_declaration)*",
            children,
        ))
    }

    /// A type keyword or the `...` marker, `offset` tokens ahead.
    fn starts_parameter_at(&self, offset: usize) -> bool {
        self.is_type_keyword_at(offset) || self.is_ellipsis_at(offset)
    }

    fn is_ellipsis_at(&self, offset: usize) -> bool {
        (offset..offset + 3).all(|n| {
            self.peek_ahead(n)
                .is_some_and(|t| t.is(TokenKind::Delimiter, "."))
        })
    }

    fn parse_parameter_declaration(&mut self) -> Option<Node> {
        let mut children = vec![self.parse_type_specifier()?];
        children.extend(self.take_pointer_marks());
        children.extend(self.match_kind(TokenKind::Identifier));
        children.extend(self.parse_array_suffixes());

        Some(Node::non_terminal(
            "parameter_declaration",
            "parameter_declaration → type_specifier identifier?",
            children,
        ))
    }

    /// `...` at the end of a parameter list, kept as a single terminal.
    fn parse_variadic_marker(&mut self) -> Option<Node> {
        if !self.is_ellipsis_at(0) {
            return None;
        }
        for _ in 0..3 {
            self.cursor.advance();
        }

        Some(Node::non_terminal(
            "parameter_declaration",
            "parameter_declaration → ...",
            vec![Node::terminal("...")],
        ))
    }

    pub(crate) fn parse_declaration(&mut self) -> Option<Node> {
        let mut children = vec![self.parse_type_specifier()?];
        children.extend(self.parse_init_declarator_list());
        children.extend(self.match_delimiter(";"));

        Some(Node::non_terminal(
            "declaration",
            "declaration → type_specifier init_declarator_list ;",
            children,
        ))
    }

    fn parse_init_declarator_list(&mut self) -> Option<Node> {
        let mut children = vec![self.parse_init_declarator()?];

        while self.check_delimiter(",") && self.starts_declarator_at(1) {
            children.extend(self.take_terminal());
            children.extend(self.parse_init_declarator());
        }

        Some(Node::non_terminal(
            "init_declarator_list",
            "init_declarator_list → init_declarator (, init_declarator)*",
            children,
        ))
    }

    fn parse_init_declarator(&mut self) -> Option<Node> {
        if !self.starts_declarator_at(0) {
            return None;
        }
        let mut children = self.take_pointer_marks();
        children.extend(self.match_kind(TokenKind::Identifier));

        children.extend(self.parse_array_suffixes());

        if let Some(assign) = self.match_terminal(TokenKind::Operator, "=") {
            children.push(assign);
            children.extend(self.parse_initializer());
        }

        Some(Node::non_terminal(
            "init_declarator",
            "init_declarator → identifier (= initializer)?",
            children,
        ))
    }

    /// `[ ... ]` suffixes, flattened into the enclosing declarator.
    fn parse_array_suffixes(&mut self) -> Vec<Node> {
        let mut children = Vec::new();
        while self.check_delimiter("[") {
            if let Some(group) = self.parse_balanced("[", "]") {
                children.push(group.open);
                children.extend(group.inner);
                children.extend(group.close);
            }
        }
        children
    }

    fn parse_initializer(&mut self) -> Option<Node> {
        let run = self.collect_run();
        if run.is_empty() {
            return None;
        }

        Some(Node::non_terminal(
            "initializer",
            "initializer → assignment_expression",
            run,
        ))
    }
}
