// Parse tree definitions for the C analyzer

/// Source location of a token: 1-based line and column plus the byte offset
/// of its first character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
    pub offset: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize, offset: usize) -> Self {
        Self {
            line,
            column,
            offset,
        }
    }
}

/// A node of the parse tree.
///
/// Every token the parser attributes to a production shows up as a
/// [`Node::Terminal`] leaf, so reading the leaves left to right gives back the
/// consumed tokens in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Literal token text
    Terminal { value: String },

    /// An applied grammar production
    NonTerminal {
        label: String,
        /// Human-readable production, e.g. `jump_statement → return expression? ;`
        rule: String,
        children: Vec<Node>,
    },
}

impl Node {
    pub fn terminal(value: impl Into<String>) -> Self {
        Node::Terminal {
            value: value.into(),
        }
    }

    pub fn non_terminal(
        label: impl Into<String>,
        rule: impl Into<String>,
        children: Vec<Node>,
    ) -> Self {
        Node::NonTerminal {
            label: label.into(),
            rule: rule.into(),
            children,
        }
    }

    /// The production label, or `None` for terminals.
    pub fn label(&self) -> Option<&str> {
        match self {
            Node::Terminal { .. } => None,
            Node::NonTerminal { label, .. } => Some(label),
        }
    }

    pub fn rule(&self) -> Option<&str> {
        match self {
            Node::Terminal { .. } => None,
            Node::NonTerminal { rule, .. } => Some(rule),
        }
    }

    /// Terminal text, or `None` for non-terminals.
    pub fn value(&self) -> Option<&str> {
        match self {
            Node::Terminal { value } => Some(value),
            Node::NonTerminal { .. } => None,
        }
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Node::Terminal { .. } => &[],
            Node::NonTerminal { children, .. } => children,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Node::Terminal { .. })
    }

    /// Number of non-terminals with a non-empty rule, counted over the whole subtree.
    pub fn production_count(&self) -> usize {
        match self {
            Node::Terminal { .. } => 0,
            Node::NonTerminal { rule, children, .. } => {
                let own = usize::from(!rule.is_empty());
                own + children.iter().map(Node::production_count).sum::<usize>()
            }
        }
    }

    /// Leaf text in left-to-right order.
    pub fn terminal_values(&self) -> Vec<&str> {
        let mut values = Vec::new();
        self.collect_terminals(&mut values);
        values
    }

    fn collect_terminals<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Node::Terminal { value } => out.push(value),
            Node::NonTerminal { children, .. } => {
                for child in children {
                    child.collect_terminals(out);
                }
            }
        }
    }

    /// All non-terminals carrying `label`, in pre-order.
    pub fn find_all<'a>(&'a self, label: &str) -> Vec<&'a Node> {
        let mut found = Vec::new();
        self.collect_labeled(label, &mut found);
        found
    }

    fn collect_labeled<'a>(&'a self, wanted: &str, out: &mut Vec<&'a Node>) {
        if let Node::NonTerminal {
            label, children, ..
        } = self
        {
            if label == wanted {
                out.push(self);
            }
            for child in children {
                child.collect_labeled(wanted, out);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Node {
        Node::non_terminal(
            "jump_statement",
            "jump_statement → return expression? ;",
            vec![
                Node::terminal("return"),
                Node::non_terminal(
                    "expression",
                    "expression → balanced token run",
                    vec![Node::terminal("0")],
                ),
                Node::terminal(";"),
            ],
        )
    }

    #[test]
    fn test_accessors() {
        let node = sample();
        assert_eq!(node.label(), Some("jump_statement"));
        assert_eq!(node.children().len(), 3);
        assert!(node.children()[0].is_terminal());
        assert_eq!(node.children()[0].value(), Some("return"));
        assert_eq!(node.children()[0].label(), None);
        assert!(node.children()[0].children().is_empty());
    }

    #[test]
    fn test_production_count_skips_empty_rules() {
        let node = Node::non_terminal(
            "wrapper",
            "",
            vec![sample(), Node::terminal("x")],
        );
        assert_eq!(node.production_count(), 2);
        assert_eq!(sample().production_count(), 2);
        assert_eq!(Node::terminal("x").production_count(), 0);
    }

    #[test]
    fn test_terminal_values_and_find_all() {
        let node = sample();
        assert_eq!(node.terminal_values(), vec!["return", "0", ";"]);
        assert_eq!(node.find_all("expression").len(), 1);
        assert!(node.find_all("statement").is_empty());
    }
}
