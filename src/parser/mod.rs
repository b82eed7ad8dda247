//! C source code parser
//!
//! This module turns C source text into an annotated parse tree:
//! - [`lexer`]: Tokenization (source text → tokens)
//! - [`parse`]: Parsing (tokens → parse tree), split across `declarations`,
//!   `statements` and `expressions`
//! - [`ast`]: Parse tree node definitions
//!
//! # Supported Grammar
//!
//! The parser is a structural recognizer for a loose C subset:
//! - Preprocessor directive lines
//! - Function definitions and declarations with the basic arithmetic types
//! - `if`/`else`, `while`, `for`, `do`-`while`, `return`, `break`, `continue`
//! - Expressions kept as flat token runs, without operator precedence
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent, one procedure per grammar production.
//! Neither stage fails: unknown characters and tokens are skipped and
//! malformed constructs produce partial trees.

pub mod ast;
pub mod lexer;
pub mod parse;

mod declarations;
mod expressions;
mod statements;

pub use ast::{Node, SourceLocation};
pub use lexer::{tokenize, Category, Lexer, Token, TokenKind};
pub use parse::{parse, Cursor, Parser, Snapshot};
