//! One-call pipeline: source text to tokens, tree and both reports.

use crate::parser::{parse, tokenize, Node, Token};
use crate::report::{format_tokens, format_tree, SourceStats};
use tracing::subscriber::SetGlobalDefaultError;
use tracing::{info, Level};

/// Everything produced from one source text.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub tokens: Vec<Token>,
    pub tree: Node,
    pub stats: SourceStats,
}

impl Analysis {
    pub fn token_report(&self) -> String {
        format_tokens(&self.tokens)
    }

    pub fn tree_report(&self) -> String {
        format_tree(&self.tree, &self.stats)
    }

    pub fn production_count(&self) -> usize {
        self.tree.production_count()
    }
}

/// Tokenize and parse `source`. Never fails; see [`crate::parser`].
pub fn analyze(source: &str) -> Analysis {
    let tokens = tokenize(source);
    let tree = parse(&tokens);
    let stats = SourceStats::new(source, &tokens);

    info!(
        lines = stats.lines,
        tokens = stats.tokens,
        productions = tree.production_count(),
        "analysis complete"
    );

    Analysis {
        tokens,
        tree,
        stats,
    }
}

/// Install a compact stderr subscriber that lets through `level` and above.
pub fn init_subscriber(level: Level) -> Result<(), SetGlobalDefaultError> {
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
}
