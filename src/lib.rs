//! # Introduction
//!
//! cparse is a structural analyzer for a loose subset of C.  It splits source
//! text into classified tokens, recognizes the program's structure with a
//! recursive-descent parser, and renders both results as plain-text reports
//! or in a terminal viewer built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Analysis pipeline
//!
//! ```text
//! Source → Lexer → Tokens → Parser → Parse tree → Reports / TUI
//! ```
//!
//! 1. [`parser`]: tokenizes the source and builds a parse tree whose inner
//!    nodes carry the grammar rule that produced them.
//! 2. [`report`]: the token report (counts and per-category listing) and the
//!    tree report (box-drawn tree with summary statistics).
//! 3. [`analysis`]: runs the whole pipeline in one call, see [`analyze`].
//! 4. [`ui`]: ratatui-based viewer; not part of the stable library API.
//!
//! Nothing in the pipeline fails: unknown characters and unexpected tokens
//! are skipped, and malformed input yields a partial tree.
//!
//! ## Example
//!
//! ```
//! let analysis = cparse::analyze("int main() { return 0; }");
//! assert_eq!(analysis.tokens.len(), 9);
//! assert!(analysis.tree_report().contains("function_definition"));
//! ```

pub mod analysis;
pub mod parser;
pub mod report;
pub mod ui;

pub use analysis::{analyze, init_subscriber, Analysis};
