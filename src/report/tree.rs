//! Tree report: one line per node, pre-order, drawn with box connectors.
//!
//! ```text
//! └── program [program → translation_unit]
//!     └── translation_unit [translation_unit → external_declaration*]
//!         └── declaration [declaration → type_specifier init_declarator_list ;]
//!             ├── type_specifier [type_specifier → 'int']
//!             │   └── 'int'
//!             ├── init_declarator_list [...]
//!             │   └── ...
//!             └── ';'
//! ```

use super::{SourceStats, BANNER_WIDTH};
use crate::parser::Node;

/// Render the parse tree report: summary block, then the tree.
pub fn format_tree(root: &Node, stats: &SourceStats) -> String {
    let mut out = String::new();
    out.push_str("Parse Tree:\n");
    out.push_str(&"=".repeat(BANNER_WIDTH));
    out.push('\n');
    out.push_str(&format!("Total lines: {}\n", stats.lines));
    out.push_str(&format!("Total tokens: {}\n", stats.tokens));
    out.push_str(&format!("Productions used: {}\n\n", root.production_count()));

    append_node(&mut out, root, "", true);
    out
}

fn append_node(out: &mut String, node: &Node, prefix: &str, is_last: bool) {
    let connector = if is_last { "└── " } else { "├── " };
    out.push_str(prefix);
    out.push_str(connector);
    out.push_str(&node_text(node));
    out.push('\n');

    let children = node.children();
    if children.is_empty() {
        return;
    }

    let child_prefix = format!("{prefix}{}", if is_last { "    " } else { "│   " });
    for (i, child) in children.iter().enumerate() {
        append_node(out, child, &child_prefix, i == children.len() - 1);
    }
}

fn node_text(node: &Node) -> String {
    match node {
        Node::Terminal { value } => format!("'{}'", value.replace('\n', "\\n")),
        Node::NonTerminal { label, rule, .. } => format!("{label} [{rule}]"),
    }
}
