use cparse::analyze;
use indoc::indoc;

#[test]
fn test_token_report_layout() {
    let expected = indoc! {"
        Lexical Analysis Results:
        ==================================================

        Token Summary:
        --------------------
        IntegerLiteral: 1
        Identifier: 1
        Keyword: 1
        Operator: 1
        Delimiter: 1

        Total tokens: 5
        Lines analyzed: 1

        Keywords (1):
        ------------------------------
          'int'                    line 1, column 1

        Identifiers (1):
        ------------------------------
          'x'                      line 1, column 5

        Literals (1):
        ------------------------------
          '5'                      line 1, column 9

        Operators (1):
        ------------------------------
          '='                      line 1, column 7

        Delimiters (1):
        ------------------------------
          ';'                      line 1, column 10
    "};

    assert_eq!(analyze("int x = 5;").token_report(), expected);
}

#[test]
fn test_tree_report_for_directive() {
    let expected = indoc! {"
        Parse Tree:
        ==================================================
        Total lines: 2
        Total tokens: 3
        Productions used: 3

        └── program [program → translation_unit]
            └── translation_unit [translation_unit → external_declaration*]
                └── preprocessor_directive [preprocessor_directive → # directive_name header_file?]
                    ├── '#include'
                    └── '<stdio.h>'
    "};

    assert_eq!(analyze("#include <stdio.h>\n").tree_report(), expected);
}

#[test]
fn test_sibling_subtrees_align() {
    let report = analyze("int f() { if (a) b; c; }").tree_report();
    let lines: Vec<&str> = report.lines().collect();

    // The `if` statement is not the last child of the block, so every line
    // of its subtree keeps a `│` guide in the connector's column.
    let if_line = lines
        .iter()
        .position(|line| line.contains("selection_statement ["))
        .unwrap();
    let column = lines[if_line].find("├── ").unwrap();

    let subtree: Vec<&str> = lines[if_line + 1..]
        .iter()
        .take_while(|line| {
            !line[column..].starts_with("├── ") && !line[column..].starts_with("└── ")
        })
        .copied()
        .collect();
    assert_eq!(subtree.len(), 9);
    for line in subtree {
        assert!(line[column..].starts_with('│'), "{line}");
    }

    let sibling = lines[if_line + 10];
    assert!(sibling[column..].starts_with("├── expression_statement ["));
}
