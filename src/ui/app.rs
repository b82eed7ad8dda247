//! Main TUI application state and logic

use crate::analysis::Analysis;
use crate::ui::panes::{self, ScrollState};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    text::Line,
    Frame, Terminal,
};
use std::io;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Source,
    Tokens,
    Tree,
}

impl FocusedPane {
    /// Move focus to the next pane (source -> tokens -> tree)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Tokens,
            FocusedPane::Tokens => FocusedPane::Tree,
            FocusedPane::Tree => FocusedPane::Source,
        }
    }

    /// Move focus to the previous pane
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Tree,
            FocusedPane::Tokens => FocusedPane::Source,
            FocusedPane::Tree => FocusedPane::Tokens,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            FocusedPane::Source => "Source",
            FocusedPane::Tokens => "Tokens",
            FocusedPane::Tree => "Parse Tree",
        }
    }
}

/// The main application state
pub struct App {
    /// Tokens, tree and statistics of the source
    pub analysis: Analysis,

    /// The source text being shown
    pub source_code: String,

    /// Report text, split into lines once
    pub token_lines: Vec<String>,
    pub tree_lines: Vec<String>,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll state
    pub source_scroll: ScrollState,
    pub tokens_scroll: ScrollState,
    pub tree_scroll: ScrollState,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    /// Create a new app over an analysis of `source_code`
    pub fn new(analysis: Analysis, source_code: String) -> Self {
        let token_lines = analysis.token_report().lines().map(String::from).collect();
        let tree_lines = analysis.tree_report().lines().map(String::from).collect();

        App {
            analysis,
            source_code,
            token_lines,
            tree_lines,
            focused_pane: FocusedPane::Source,
            source_scroll: ScrollState::default(),
            tokens_scroll: ScrollState::default(),
            tree_scroll: ScrollState::default(),
            should_quit: false,
            status_message: String::from("Ready!"),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        let source = self.source_code.clone();
        let highlighted = panes::highlight_source(&source, &self.analysis.tokens);

        loop {
            terminal.draw(|f| self.render(f, &highlighted))?;

            if self.should_quit {
                break;
            }

            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key_event(key);
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame, highlighted: &[Line<'_>]) {
        let size = frame.area();

        // Panes on top, status bar at bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        // Left column: Source | Right column: Tokens (top) and Parse Tree (bottom)
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(main_chunks[0]);

        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(columns[1]);

        panes::render_source_pane(
            frame,
            columns[0],
            highlighted,
            self.focused_pane == FocusedPane::Source,
            &mut self.source_scroll,
        );

        panes::render_report_pane(
            frame,
            right_rows[0],
            " Tokens ",
            &self.token_lines,
            self.focused_pane == FocusedPane::Tokens,
            &mut self.tokens_scroll,
        );

        panes::render_report_pane(
            frame,
            right_rows[1],
            " Parse Tree ",
            &self.tree_lines,
            self.focused_pane == FocusedPane::Tree,
            &mut self.tree_scroll,
        );

        panes::render_status_bar(
            frame,
            main_chunks[1],
            &self.status_message,
            &self.analysis.stats,
            self.analysis.production_count(),
        );
    }

    /// Line count and scroll state of the focused pane
    fn focused_scroll(&mut self) -> (usize, &mut ScrollState) {
        match self.focused_pane {
            FocusedPane::Source => (
                self.source_code.split('\n').count(),
                &mut self.source_scroll,
            ),
            FocusedPane::Tokens => (self.token_lines.len(), &mut self.tokens_scroll),
            FocusedPane::Tree => (self.tree_lines.len(), &mut self.tree_scroll),
        }
    }

    /// Handle keyboard events
    pub(crate) fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
                self.status_message = format!("Focused {}", self.focused_pane.title());
            }
            KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.prev();
                self.status_message = format!("Focused {}", self.focused_pane.title());
            }
            KeyCode::Up => self.focused_scroll().1.up(1),
            KeyCode::Down => {
                let (total, scroll) = self.focused_scroll();
                scroll.down(1, total);
            }
            KeyCode::PageUp => {
                let (_, scroll) = self.focused_scroll();
                let page = scroll.page_height;
                scroll.up(page);
            }
            KeyCode::PageDown => {
                let (total, scroll) = self.focused_scroll();
                let page = scroll.page_height;
                scroll.down(page, total);
            }
            KeyCode::Home => self.focused_scroll().1.home(),
            KeyCode::End => {
                let (total, scroll) = self.focused_scroll();
                scroll.end(total);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze;
    use crossterm::event::KeyModifiers;

    fn app(source: &str) -> App {
        App::new(analyze(source), source.to_string())
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_focus_cycles_both_ways() {
        let mut app = app("int x;");
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focused_pane, FocusedPane::Tokens);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focused_pane, FocusedPane::Source);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.focused_pane, FocusedPane::Tree);
        assert_eq!(app.status_message, "Focused Parse Tree");
    }

    #[test]
    fn test_scrolling_moves_only_the_focused_pane() {
        let mut app = app("int main() { int a; int b; int c; return 0; }");
        app.tree_scroll.page_height = 3;
        app.focused_pane = FocusedPane::Tree;

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.tree_scroll.offset, 2);
        assert_eq!(app.tokens_scroll.offset, 0);

        press(&mut app, KeyCode::End);
        assert_eq!(app.tree_scroll.offset, app.tree_lines.len() - 3);
        press(&mut app, KeyCode::PageUp);
        assert_eq!(app.tree_scroll.offset, app.tree_lines.len() - 6);
        press(&mut app, KeyCode::Home);
        assert_eq!(app.tree_scroll.offset, 0);
    }

    #[test]
    fn test_quit_keys() {
        for code in [KeyCode::Char('q'), KeyCode::Esc] {
            let mut app = app("");
            press(&mut app, code);
            assert!(app.should_quit);
        }
    }

    #[test]
    fn test_report_lines_match_reports() {
        let app = app("int x = 1;");
        assert_eq!(app.token_lines.join("\n") + "\n", app.analysis.token_report());
        assert_eq!(app.tree_lines.join("\n") + "\n", app.analysis.tree_report());
    }
}
