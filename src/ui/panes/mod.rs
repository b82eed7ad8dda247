//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`source`]: Source text with token-category highlighting and line numbers
//! - [`report`]: Token and parse tree reports, one report per pane
//! - [`status`]: Status bar with source statistics and keybindings
//!
//! # Architecture
//!
//! Each pane module exports a primary `render_*` function. Scrollable panes
//! take a [`ScrollState`], which they clamp to the content and update with
//! the visible height so page-wise scrolling knows the page size.

pub mod report;
pub mod source;
pub mod status;

pub use report::render_report_pane;
pub use source::{highlight_source, render_source_pane};
pub use status::render_status_bar;

use crate::ui::theme::DEFAULT_THEME;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders};

/// Scroll position of one pane
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollState {
    /// Index of the first visible line
    pub offset: usize,
    /// Visible rows at the last render
    pub page_height: usize,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self {
            offset: 0,
            page_height: 10,
        }
    }
}

impl ScrollState {
    pub fn up(&mut self, lines: usize) {
        self.offset = self.offset.saturating_sub(lines);
    }

    /// Scroll down, never past the last page of `total` lines.
    pub fn down(&mut self, lines: usize, total: usize) {
        self.offset = self.offset.saturating_add(lines).min(self.max_offset(total));
    }

    pub fn home(&mut self) {
        self.offset = 0;
    }

    pub fn end(&mut self, total: usize) {
        self.offset = self.max_offset(total);
    }

    /// Record the visible height and pull the offset back into range.
    pub fn fit(&mut self, visible_height: usize, total: usize) {
        self.page_height = visible_height.max(1);
        self.offset = self.offset.min(self.max_offset(total));
    }

    fn max_offset(&self, total: usize) -> usize {
        total.saturating_sub(self.page_height)
    }
}

/// Bordered block with the focus-dependent border style.
pub(crate) fn pane_block(title: &str, is_focused: bool) -> Block<'_> {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style)
}
