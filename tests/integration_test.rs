// Integration tests for the analysis pipeline

use cparse::parser::{parse, tokenize, Node, TokenKind};
use cparse::{analyze, Analysis};

fn kinds(analysis: &Analysis) -> Vec<TokenKind> {
    analysis.tokens.iter().map(|t| t.kind).collect()
}

fn child_labels(node: &Node) -> Vec<Option<&str>> {
    node.children().iter().map(Node::label).collect()
}

#[test]
fn test_simple_function() {
    let analysis = analyze("int main() { return 0; }");

    use TokenKind::*;
    assert_eq!(
        kinds(&analysis),
        [
            Keyword,
            Identifier,
            Delimiter,
            Delimiter,
            Delimiter,
            Keyword,
            IntegerLiteral,
            Delimiter,
            Delimiter
        ]
    );

    let tree = &analysis.tree;
    assert_eq!(tree.label(), Some("program"));
    let unit = &tree.children()[0];
    assert_eq!(unit.label(), Some("translation_unit"));

    let function = &unit.children()[0];
    assert_eq!(function.label(), Some("function_definition"));
    assert_eq!(
        child_labels(function),
        [
            Some("type_specifier"),
            Some("declarator"),
            Some("compound_statement")
        ]
    );
    assert_eq!(function.children()[0].terminal_values(), ["int"]);
    assert_eq!(function.children()[1].terminal_values(), ["main", "(", ")"]);

    let jumps = function.find_all("jump_statement");
    assert_eq!(jumps.len(), 1);
    assert_eq!(
        child_labels(jumps[0]),
        [None, Some("expression"), None]
    );
    assert_eq!(jumps[0].terminal_values(), ["return", "0", ";"]);
}

#[test]
fn test_include_directive() {
    let analysis = analyze("#include <stdio.h>");

    assert_eq!(analysis.tokens.len(), 3);
    assert_eq!(
        kinds(&analysis),
        [
            TokenKind::Preprocessor,
            TokenKind::Preprocessor,
            TokenKind::HeaderFile
        ]
    );

    let directives = analysis.tree.find_all("preprocessor_directive");
    assert_eq!(directives.len(), 1);
    assert_eq!(directives[0].children().len(), 2);
    assert!(directives[0].children().iter().all(Node::is_terminal));
}

#[test]
fn test_simple_declaration() {
    let analysis = analyze("int x = 5;");

    let declaration = analysis.tree.find_all("declaration")[0];
    assert_eq!(
        child_labels(declaration),
        [Some("type_specifier"), Some("init_declarator_list"), None]
    );
    assert_eq!(declaration.children()[0].terminal_values(), ["int"]);

    let list = &declaration.children()[1];
    assert_eq!(list.children().len(), 1);
    let init = &list.children()[0];
    assert_eq!(init.label(), Some("init_declarator"));
    assert_eq!(
        child_labels(init),
        [None, None, Some("initializer")]
    );
    assert_eq!(init.terminal_values(), ["x", "=", "5"]);
}

#[test]
fn test_complete_program() {
    let source = r#"
        #include <stdio.h>
        #define MAX 10

        /* running total */
        int total = 0;

        int add(int a, int b) {
            return a + b;
        }

        int main(void) {
            int i;
            for (i = 0; i < MAX; i++) {
                if (i % 2 == 0) {
                    total = add(total, i);
                } else {
                    continue;
                }
            }
            while (total > 100) total--;
            printf("%d\n", total); // done
            return 0;
        }
    "#;
    let analysis = analyze(source);

    let unit = &analysis.tree.children()[0];
    assert_eq!(
        child_labels(unit),
        [
            Some("preprocessor_directive"),
            Some("preprocessor_directive"),
            Some("declaration"),
            Some("function_definition"),
            Some("function_definition")
        ]
    );

    assert_eq!(analysis.tree.find_all("iteration_statement").len(), 2);
    assert_eq!(analysis.tree.find_all("selection_statement").len(), 1);
    assert_eq!(analysis.tree.find_all("jump_statement").len(), 3);
    assert_eq!(analysis.tree.find_all("parameter_declaration").len(), 2);

    // Comments are tokens but never tree terminals
    let comments = analysis
        .tokens
        .iter()
        .filter(|t| t.kind.is_comment())
        .count();
    assert_eq!(comments, 2);
    assert!(!analysis
        .tree
        .terminal_values()
        .iter()
        .any(|v| v.starts_with("/*") || v.starts_with("//")));

    assert_eq!(analysis.stats.lines, source.matches('\n').count() + 1);
}

#[test]
fn test_token_coverage() {
    let source = "int  main() {\n\tchar *s = \"a b\"; @ x += 0x1F; $\n}\n";
    let tokens = tokenize(source);

    let mut rebuilt = String::new();
    let mut position = 0;
    for token in &tokens {
        let gap = &source[position..token.offset()];
        assert!(
            gap.chars().all(|c| c.is_whitespace() || c == '@' || c == '$'),
            "unexpected gap {gap:?}"
        );
        rebuilt.push_str(gap);
        assert_eq!(&source[token.offset()..token.offset() + token.text.len()], token.text);
        rebuilt.push_str(&token.text);
        position = token.offset() + token.text.len();
    }
    rebuilt.push_str(&source[position..]);

    assert_eq!(rebuilt, source);
}

#[test]
fn test_positions_are_monotonic_and_consistent() {
    let source = "int a;\n/* two\nlines */ float b = 1.5;\n  char c = 'c';";
    let tokens = tokenize(source);

    for pair in tokens.windows(2) {
        assert!(pair[0].offset() < pair[1].offset());
    }

    for token in &tokens {
        let before = &source[..token.offset()];
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        let column = source[line_start..token.offset()].chars().count() + 1;
        assert_eq!((token.line(), token.column()), (line, column), "{token}");
    }
}

#[test]
fn test_keyword_reclassification() {
    let tokens = tokenize("while whiles int integer return _return");
    let classified: Vec<_> = tokens.iter().map(|t| (t.text.as_str(), t.kind)).collect();
    assert_eq!(
        classified,
        [
            ("while", TokenKind::Keyword),
            ("whiles", TokenKind::Identifier),
            ("int", TokenKind::Keyword),
            ("integer", TokenKind::Identifier),
            ("return", TokenKind::Keyword),
            ("_return", TokenKind::Identifier)
        ]
    );
}

#[test]
fn test_two_character_operator_priority() {
    let tokens = tokenize("==");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Operator);
    assert_eq!(tokens[0].text, "==");
}

#[test]
fn test_balanced_condition_skipping() {
    let tree = parse(&tokenize("int main() { if ((a+b)>0) { } }"));
    let selection = tree.find_all("selection_statement")[0];

    let expressions: Vec<_> = selection
        .children()
        .iter()
        .filter(|c| c.label() == Some("expression"))
        .collect();
    assert_eq!(expressions.len(), 1);
    assert_eq!(
        expressions[0].terminal_values(),
        ["(", "a", "+", "b", ")", ">", "0"]
    );

    // `( expression )` then exactly one statement
    assert_eq!(
        child_labels(selection),
        [None, None, Some("expression"), None, Some("compound_statement")]
    );
}

#[test]
fn test_production_count_on_malformed_input() {
    let sources = [
        "",
        "int",
        "int main( { return",
        "}}}} ))) int x = ;",
        "if (x) { } else",
        "#include\nint f(int, , ...) { for (;;) }",
        "int a[3] = {1, 2, 3; float",
        "@@@ $$$ `",
    ];

    for source in sources {
        let analysis = analyze(source);
        let by_walk = count_productions(&analysis.tree);
        assert_eq!(analysis.production_count(), by_walk, "{source:?}");
        assert!(analysis
            .tree_report()
            .contains(&format!("Productions used: {by_walk}\n")));
    }
}

fn count_productions(node: &Node) -> usize {
    let own = match node {
        Node::NonTerminal { rule, .. } if !rule.is_empty() => 1,
        _ => 0,
    };
    own + node.children().iter().map(count_productions).sum::<usize>()
}

#[test]
fn test_formatting_is_idempotent() {
    let analysis = analyze("int f(int n) { do { n--; } while (n); return n; }");
    assert_eq!(analysis.tree_report(), analysis.tree_report());
    assert_eq!(analysis.token_report(), analysis.token_report());

    let again = analyze("int f(int n) { do { n--; } while (n); return n; }");
    assert_eq!(analysis, again);
}
