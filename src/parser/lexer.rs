//! Lexer (tokenizer) for C source code
//!
//! Converts raw source text into a flat [`Token`] stream. Classification is
//! driven by [`RULES`], an ordered table of anchored patterns: at every
//! position the first rule that matches wins, so the table order encodes the
//! priorities (`<<=` before `<<` before `<`, `/* */` before `/`, ...).
//!
//! Scanning never fails. Characters no rule accepts are skipped one at a time
//! and simply do not appear in the output. Comments are kept as tokens; the
//! parser filters them out.

use super::ast::SourceLocation;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use tracing::trace;

/// Classification of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TokenKind {
    Preprocessor,
    HeaderFile,
    StringLiteral,
    CharLiteral,
    FloatLiteral,
    IntegerLiteral,
    Identifier,
    Keyword,
    CommentLine,
    CommentBlock,
    Operator,
    Delimiter,
}

impl TokenKind {
    pub const ALL: [TokenKind; 12] = [
        TokenKind::Preprocessor,
        TokenKind::HeaderFile,
        TokenKind::StringLiteral,
        TokenKind::CharLiteral,
        TokenKind::FloatLiteral,
        TokenKind::IntegerLiteral,
        TokenKind::Identifier,
        TokenKind::Keyword,
        TokenKind::CommentLine,
        TokenKind::CommentBlock,
        TokenKind::Operator,
        TokenKind::Delimiter,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Preprocessor => "Preprocessor",
            TokenKind::HeaderFile => "HeaderFile",
            TokenKind::StringLiteral => "StringLiteral",
            TokenKind::CharLiteral => "CharLiteral",
            TokenKind::FloatLiteral => "FloatLiteral",
            TokenKind::IntegerLiteral => "IntegerLiteral",
            TokenKind::Identifier => "Identifier",
            TokenKind::Keyword => "Keyword",
            TokenKind::CommentLine => "CommentLine",
            TokenKind::CommentBlock => "CommentBlock",
            TokenKind::Operator => "Operator",
            TokenKind::Delimiter => "Delimiter",
        }
    }

    /// Report category this kind is listed under.
    pub fn category(self) -> Category {
        match self {
            TokenKind::Keyword => Category::Keywords,
            TokenKind::Identifier => Category::Identifiers,
            TokenKind::IntegerLiteral
            | TokenKind::FloatLiteral
            | TokenKind::StringLiteral
            | TokenKind::CharLiteral => Category::Literals,
            TokenKind::Operator => Category::Operators,
            TokenKind::Delimiter => Category::Delimiters,
            TokenKind::Preprocessor | TokenKind::HeaderFile => Category::Preprocessor,
            TokenKind::CommentLine | TokenKind::CommentBlock => Category::Comments,
        }
    }

    pub fn is_comment(self) -> bool {
        matches!(self, TokenKind::CommentLine | TokenKind::CommentBlock)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Groups of token kinds used by the token report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Keywords,
    Identifiers,
    Literals,
    Operators,
    Delimiters,
    Preprocessor,
    Comments,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Keywords,
        Category::Identifiers,
        Category::Literals,
        Category::Operators,
        Category::Delimiters,
        Category::Preprocessor,
        Category::Comments,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Category::Keywords => "Keywords",
            Category::Identifiers => "Identifiers",
            Category::Literals => "Literals",
            Category::Operators => "Operators",
            Category::Delimiters => "Delimiters",
            Category::Preprocessor => "Preprocessor",
            Category::Comments => "Comments",
        }
    }
}

/// A classified, positioned fragment of the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Exact matched text, escapes and quotes included.
    pub text: String,
    pub location: SourceLocation,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            kind,
            text: text.into(),
            location,
        }
    }

    pub fn line(&self) -> usize {
        self.location.line
    }

    pub fn column(&self) -> usize {
        self.location.column
    }

    pub fn offset(&self) -> usize {
        self.location.offset
    }

    /// Whether this token has the given kind and text.
    pub fn is(&self, kind: TokenKind, text: &str) -> bool {
        self.kind == kind && self.text == text
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} '{}' at {}:{}",
            self.kind, self.text, self.location.line, self.location.column
        )
    }
}

/// Reserved words, reclassified from Identifier to Keyword after matching.
pub const RESERVED_WORDS: [&str; 34] = [
    "auto", "break", "case", "char", "const", "continue", "default", "do", "double", "else",
    "enum", "extern", "float", "for", "goto", "if", "int", "long", "register", "return", "short",
    "signed", "sizeof", "static", "struct", "switch", "typedef", "union", "unsigned", "void",
    "volatile", "while", "include", "define",
];

pub fn is_reserved_word(text: &str) -> bool {
    RESERVED_WORDS.contains(&text)
}

/// When a rule is allowed to fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Context {
    Anywhere,
    /// Only directly after the `#` mark (whitespace in between is fine).
    AfterHash,
}

struct Rule {
    /// `None` for input that is consumed but never emitted (whitespace).
    kind: Option<TokenKind>,
    pattern: Regex,
    context: Context,
}

impl Rule {
    fn new(kind: Option<TokenKind>, pattern: &str, context: Context) -> Self {
        let anchored = format!("^(?:{pattern})");
        let pattern = Regex::new(&anchored)
            .unwrap_or_else(|e| panic!("invalid lexer pattern {anchored}: {e}"));
        Self {
            kind,
            pattern,
            context,
        }
    }

    fn emits(kind: TokenKind, pattern: &str) -> Self {
        Self::new(Some(kind), pattern, Context::Anywhere)
    }
}

/// The classification table, in priority order.
static RULES: Lazy<Vec<Rule>> = Lazy::new(|| {
    use TokenKind::*;
    vec![
        // Directive marker and the directive word right after it
        Rule::emits(Preprocessor, r"#"),
        Rule::new(
            Some(Preprocessor),
            r"(?:include|define|undef|ifdef|ifndef|endif|if|else|elif|pragma)\b",
            Context::AfterHash,
        ),
        Rule::emits(HeaderFile, r"<[A-Za-z_][A-Za-z0-9_./\-]*\.h>"),
        Rule::emits(StringLiteral, r#"(?s)"(?:[^"\\]|\\.)*""#),
        Rule::emits(CharLiteral, r"(?s)'(?:[^'\\]|\\.)*'"),
        Rule::emits(FloatLiteral, r"\d+\.\d*(?:[eE][+-]?\d+)?[fFlL]?"),
        Rule::emits(IntegerLiteral, r"0[xX][0-9a-fA-F]+[uUlL]*|\d+[uUlL]*"),
        // Reclassified to Keyword when reserved
        Rule::emits(Identifier, r"[A-Za-z_][A-Za-z0-9_]*"),
        Rule::emits(CommentBlock, r"(?s)/\*.*?\*/"),
        Rule::emits(CommentLine, r"//[^\n]*"),
        Rule::emits(
            Operator,
            r"<<=|>>=|\+\+|--|<<|>>|<=|>=|==|!=|&&|\|\||->|\+=|-=|\*=|/=|%=|&=|\|=|\^=",
        ),
        Rule::emits(Operator, r"[-+*/%=<>!&|^~?:]"),
        Rule::emits(Delimiter, r"[(){}\[\];,.]"),
        Rule::new(None, r"[ \t\r\n\x0B\x0C]+", Context::Anywhere),
    ]
});

/// Lexer for C source code
pub struct Lexer<'src> {
    source: &'src str,
    position: usize,
    line: usize,
    column: usize,
}

impl<'src> Lexer<'src> {
    /// Create a new lexer for the given source string.
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Tokenize the entire input
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens: Vec<Token> = Vec::new();
        let source = self.source;

        while !self.is_at_end() {
            let rest = &source[self.position..];
            let after_hash = tokens
                .last()
                .is_some_and(|t| t.is(TokenKind::Preprocessor, "#"));

            let matched = RULES
                .iter()
                .filter(|rule| rule.context == Context::Anywhere || after_hash)
                .find_map(|rule| {
                    rule.pattern
                        .find(rest)
                        .filter(|m| !m.as_str().is_empty())
                        .map(|m| (rule.kind, m.as_str()))
                });

            match matched {
                Some((kind, text)) => {
                    let location = self.current_location();
                    self.consume(text);
                    if let Some(kind) = kind {
                        tokens.push(Token::new(classify(kind, text), text, location));
                    }
                }
                None => {
                    // Best effort: drop the character and keep going
                    let len = rest.chars().next().map_or(1, char::len_utf8);
                    let skipped = &rest[..len];
                    trace!(
                        line = self.line,
                        column = self.column,
                        "skipping unclassifiable character {skipped:?}"
                    );
                    self.consume(skipped);
                }
            }
        }

        tokens
    }

    /// Advance past `text`, tracking line and column.
    fn consume(&mut self, text: &str) {
        for ch in text.chars() {
            if ch == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.position += text.len();
    }

    fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column, self.position)
    }
}

fn classify(kind: TokenKind, text: &str) -> TokenKind {
    if kind == TokenKind::Identifier && is_reserved_word(text) {
        TokenKind::Keyword
    } else {
        kind
    }
}

/// Tokenize `source` with a fresh [`Lexer`].
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source).tokenize()
}
