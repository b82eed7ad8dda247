//! Plain-text reports over a token sequence and a parse tree
//!
//! - [`tokens`]: per-kind counts and a per-category token listing
//! - [`tree`]: box-drawn parse tree with summary statistics
//!
//! Both formatters are pure: the same input always renders the same text.

pub mod tokens;
pub mod tree;

pub use tokens::format_tokens;
pub use tree::format_tree;

use crate::parser::Token;

/// Source-level statistics shown in the tree report header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SourceStats {
    /// Number of `\n` in the source plus one
    pub lines: usize,
    pub tokens: usize,
}

impl SourceStats {
    pub fn new(source: &str, tokens: &[Token]) -> Self {
        Self {
            lines: source.matches('\n').count() + 1,
            tokens: tokens.len(),
        }
    }
}

pub(crate) const BANNER_WIDTH: usize = 50;
