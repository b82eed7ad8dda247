//! Expression parsing implementation
//!
//! Expressions are not given operator structure. An expression is a flat run
//! of terminals, bounded in one of two ways:
//!
//! - **Runs** ([`Parser::collect_run`]) stop at the first `)`, `,`, `}` or `;`
//!   that is not nested inside brackets opened by the run itself. Inside
//!   parentheses or square brackets a `;` still ends the run, while inside
//!   braces it does not. A `}` that closes the run's outermost brace ends the
//!   run after it is consumed. Call arguments, brace initializers and braced
//!   bodies such as `switch (x) { ... }` therefore stay in one run.
//! - **Balanced groups** ([`Parser::parse_balanced`]) start at an opening
//!   bracket and end at the bracket that brings the depth back to zero. They
//!   bound `if`/`while` conditions, `for` headers and array suffixes.
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::ast::Node;
use crate::parser::lexer::TokenKind;
use crate::parser::parse::Parser;

const EXPRESSION_RULE: &str = "expression → balanced token run up to ) ; , }";

/// An opening bracket, the tokens inside it and the matching close, if found.
pub(crate) struct BalancedGroup {
    pub(crate) open: Node,
    pub(crate) inner: Vec<Node>,
    pub(crate) close: Option<Node>,
}

impl Parser {
    /// An `expression` node over the next run, or `None` if the run is empty.
    pub(crate) fn parse_expression(&mut self) -> Option<Node> {
        let run = self.collect_run();
        if run.is_empty() {
            return None;
        }
        Some(Node::non_terminal("expression", EXPRESSION_RULE, run))
    }

    /// Consume terminals up to the next top-level `)`, `,`, `}` or `;`.
    pub(crate) fn collect_run(&mut self) -> Vec<Node> {
        let mut open: Vec<&'static str> = Vec::new();
        let mut run = Vec::new();

        while let Some(token) = self.peek() {
            if token.kind == TokenKind::Delimiter {
                match token.text.as_str() {
                    "," | ")" | "}" if open.is_empty() => break,
                    ";" if open.last() != Some(&"{") => break,
                    "(" => open.push(")"),
                    "[" => open.push("]"),
                    "{" => open.push("}"),
                    close @ (")" | "]" | "}") => {
                        // A closer the run did not open belongs to an enclosing construct
                        if open.last() != Some(&close) {
                            break;
                        }
                        open.pop();
                        if close == "}" && open.is_empty() {
                            run.extend(self.take_terminal());
                            break;
                        }
                    }
                    _ => {}
                }
            }
            run.extend(self.take_terminal());
        }

        run
    }

    /// Consume `open`, then tokens until the matching `close` brings the
    /// depth back to zero. `None` if the current token is not `open`.
    pub(crate) fn parse_balanced(&mut self, open: &str, close: &str) -> Option<BalancedGroup> {
        let open_node = self.match_delimiter(open)?;
        let mut depth = 1usize;
        let mut inner = Vec::new();

        while let Some(token) = self.peek() {
            if token.is(TokenKind::Delimiter, open) {
                depth += 1;
            } else if token.is(TokenKind::Delimiter, close) {
                depth -= 1;
                if depth == 0 {
                    let close_node = self.take_terminal();
                    return Some(BalancedGroup {
                        open: open_node,
                        inner,
                        close: close_node,
                    });
                }
            }
            inner.extend(self.take_terminal());
        }

        Some(BalancedGroup {
            open: open_node,
            inner,
            close: None,
        })
    }

    /// A parenthesized condition or header: `(`, one expression node over
    /// the contents (absent when empty), `)`.
    pub(crate) fn parse_condition(&mut self, rule: &str) -> Vec<Node> {
        let Some(group) = self.parse_balanced("(", ")") else {
            return Vec::new();
        };

        let mut children = vec![group.open];
        if !group.inner.is_empty() {
            children.push(Node::non_terminal("expression", rule, group.inner));
        }
        children.extend(group.close);
        children
    }
}
