//! Token report: counts per kind, totals, then every token grouped by category.

use super::BANNER_WIDTH;
use crate::parser::{Category, Token, TokenKind};
use rustc_hash::FxHashMap;

/// Render the lexical analysis report for `tokens`.
pub fn format_tokens(tokens: &[Token]) -> String {
    let mut out = String::new();
    out.push_str("Lexical Analysis Results:\n");
    out.push_str(&"=".repeat(BANNER_WIDTH));
    out.push_str("\n\n");

    if tokens.is_empty() {
        out.push_str("No tokens found.\n");
        return out;
    }

    let mut counts: FxHashMap<TokenKind, usize> = FxHashMap::default();
    let mut by_category: FxHashMap<Category, Vec<&Token>> = FxHashMap::default();
    for token in tokens {
        *counts.entry(token.kind).or_default() += 1;
        by_category
            .entry(token.kind.category())
            .or_default()
            .push(token);
    }

    out.push_str("Token Summary:\n");
    out.push_str(&"-".repeat(20));
    out.push('\n');
    for kind in TokenKind::ALL {
        if let Some(count) = counts.get(&kind) {
            out.push_str(&format!("{kind}: {count}\n"));
        }
    }

    let lines_analyzed = tokens.iter().map(Token::line).max().unwrap_or(0);
    out.push_str(&format!("\nTotal tokens: {}\n", tokens.len()));
    out.push_str(&format!("Lines analyzed: {lines_analyzed}\n"));

    for category in Category::ALL {
        let Some(members) = by_category.get(&category) else {
            continue;
        };
        out.push_str(&format!("\n{} ({}):\n", category.name(), members.len()));
        out.push_str(&"-".repeat(30));
        out.push('\n');
        for token in members {
            out.push_str(&format!(
                "  {:<24} line {}, column {}\n",
                format!("'{}'", display_text(&token.text)),
                token.line(),
                token.column()
            ));
        }
    }

    out
}

/// Multi-line tokens (block comments, strings with escaped newlines) are
/// shown on one line.
fn display_text(text: &str) -> String {
    text.replace('\n', "\\n")
}
