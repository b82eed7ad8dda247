//! Source pane rendering with token-category highlighting
//!
//! Highlighting reuses the lexer's output: every byte covered by a token is
//! colored by the token's category, so the pane shows exactly what the
//! scanner recognized. Bytes no rule matched keep the plain foreground.

use super::{pane_block, ScrollState};
use crate::parser::{Category, Token};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split `source` into highlighted lines, one per `\n`-separated line.
pub fn highlight_source<'a>(source: &'a str, tokens: &[Token]) -> Vec<Line<'a>> {
    let mut categories: Vec<Option<Category>> = vec![None; source.len()];
    for token in tokens {
        let end = (token.offset() + token.text.len()).min(source.len());
        for slot in &mut categories[token.offset().min(end)..end] {
            *slot = Some(token.kind.category());
        }
    }

    let mut lines = Vec::new();
    let mut line_start = 0;
    for line in source.split('\n') {
        lines.push(highlight_line(line, &categories[line_start..line_start + line.len()]));
        line_start += line.len() + 1;
    }
    lines
}

/// Group runs of bytes with the same category into spans.
fn highlight_line<'a>(line: &'a str, categories: &[Option<Category>]) -> Line<'a> {
    let mut spans = Vec::new();
    let mut run_start = 0;

    for (index, _) in line.char_indices().skip(1) {
        if categories[index] != categories[run_start] {
            spans.push(styled(&line[run_start..index], categories[run_start]));
            run_start = index;
        }
    }
    if run_start < line.len() {
        spans.push(styled(&line[run_start..], categories[run_start]));
    }

    Line::from(spans)
}

fn styled(text: &str, category: Option<Category>) -> Span<'_> {
    match category {
        Some(Category::Keywords) => Span::styled(
            text,
            Style::default()
                .fg(DEFAULT_THEME.keyword)
                .add_modifier(Modifier::BOLD),
        ),
        Some(category) => Span::styled(
            text,
            Style::default().fg(DEFAULT_THEME.category_color(category)),
        ),
        None => Span::styled(text, Style::default().fg(DEFAULT_THEME.fg)),
    }
}

/// Render the source pane
pub fn render_source_pane(
    frame: &mut Frame,
    area: Rect,
    lines: &[Line<'_>],
    is_focused: bool,
    scroll: &mut ScrollState,
) {
    let block = pane_block(" Source ", is_focused);

    // Account for borders (2), min 1
    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    scroll.fit(visible_height, lines.len());

    let visible_lines: Vec<Line> = lines
        .iter()
        .enumerate()
        .skip(scroll.offset)
        .take(visible_height)
        .map(|(idx, line)| {
            let line_num = Span::styled(
                format!("{:4} ", idx + 1),
                Style::default().fg(DEFAULT_THEME.comment),
            );
            let mut spans = vec![line_num];
            spans.extend(line.spans.iter().cloned());
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(visible_lines).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::tokenize;

    fn span_texts<'a>(line: &'a Line<'a>) -> Vec<&'a str> {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn test_one_line_per_source_line() {
        let source = "int x;\n\nint y;";
        let lines = highlight_source(source, &tokenize(source));
        assert_eq!(lines.len(), 3);
        assert!(lines[1].spans.is_empty());
    }

    #[test]
    fn test_spans_follow_token_boundaries() {
        let source = "int x = 10;";
        let lines = highlight_source(source, &tokenize(source));
        assert_eq!(
            span_texts(&lines[0]),
            ["int", " ", "x", " ", "=", " ", "10", ";"]
        );
        assert_eq!(
            lines[0].spans[0].style.fg,
            Some(DEFAULT_THEME.keyword)
        );
        assert_eq!(lines[0].spans[6].style.fg, Some(DEFAULT_THEME.number));
    }

    #[test]
    fn test_block_comment_spans_lines() {
        let source = "/* a\nb */ int";
        let lines = highlight_source(source, &tokenize(source));
        assert_eq!(span_texts(&lines[0]), ["/* a"]);
        assert_eq!(span_texts(&lines[1]), ["b */", " ", "int"]);
        assert_eq!(lines[1].spans[0].style.fg, Some(DEFAULT_THEME.comment));
    }

    #[test]
    fn test_non_ascii_text_is_kept_whole() {
        let source = "x @é y";
        let lines = highlight_source(source, &tokenize(source));
        let joined: String = span_texts(&lines[0]).concat();
        assert_eq!(joined, source);
    }
}
