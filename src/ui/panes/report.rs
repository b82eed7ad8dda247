//! Report pane rendering
//!
//! Shows a report produced by [`crate::report`] line by line. Styling is
//! derived from the report text itself: section headers, banner rules,
//! tree labels with their rules, and quoted terminals.

use super::{pane_block, ScrollState};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const CONNECTORS: [&str; 2] = ["├── ", "└── "];

/// Style one line of a token or tree report.
pub fn style_report_line(line: &str) -> Line<'_> {
    let is_rule = !line.is_empty() && line.chars().all(|c| c == '=' || c == '-');
    if is_rule {
        return Line::from(Span::styled(line, Style::default().fg(DEFAULT_THEME.comment)));
    }

    // Section headers ("Token Summary:", "Keywords (3):")
    if !line.starts_with(' ') && line.ends_with(':') {
        return Line::from(Span::styled(
            line,
            Style::default()
                .fg(DEFAULT_THEME.primary)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let Some((prefix, node)) = split_tree_line(line) else {
        return Line::from(Span::styled(line, Style::default().fg(DEFAULT_THEME.fg)));
    };

    let guide = Span::styled(prefix, Style::default().fg(DEFAULT_THEME.comment));
    if node.starts_with('\'') {
        return Line::from(vec![
            guide,
            Span::styled(node, Style::default().fg(DEFAULT_THEME.string)),
        ]);
    }

    match node.split_once(" [") {
        Some((label, rule)) => Line::from(vec![
            guide,
            Span::styled(
                label,
                Style::default()
                    .fg(DEFAULT_THEME.type_name)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" [{rule}"),
                Style::default().fg(DEFAULT_THEME.comment),
            ),
        ]),
        None => Line::from(vec![guide, Span::raw(node)]),
    }
}

/// Split a tree line after its connector: (guides and connector, node text).
fn split_tree_line(line: &str) -> Option<(&str, &str)> {
    let end = CONNECTORS
        .iter()
        .filter_map(|connector| line.find(connector).map(|at| at + connector.len()))
        .min()?;
    Some(line.split_at(end))
}

/// Render one report in a scrollable pane
pub fn render_report_pane(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    report_lines: &[String],
    is_focused: bool,
    scroll: &mut ScrollState,
) {
    let block = pane_block(title, is_focused);

    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    scroll.fit(visible_height, report_lines.len());

    let visible_lines: Vec<Line> = report_lines
        .iter()
        .skip(scroll.offset)
        .take(visible_height)
        .map(|line| style_report_line(line))
        .collect();

    frame.render_widget(Paragraph::new(visible_lines).block(block), area);
}
