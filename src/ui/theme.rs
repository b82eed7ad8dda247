use ratatui::style::Color;

use crate::parser::Category;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub keyword: Color,
    pub string: Color,
    pub number: Color,
    pub preprocessor: Color,
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
    pub type_name: Color, // Cyan for grammar labels
}

impl Theme {
    /// Foreground color for tokens of `category`.
    pub fn category_color(&self, category: Category) -> Color {
        match category {
            Category::Keywords => self.keyword,
            Category::Identifiers => self.fg,
            Category::Literals => self.number,
            Category::Operators => self.secondary,
            Category::Delimiters => self.primary,
            Category::Preprocessor => self.preprocessor,
            Category::Comments => self.comment,
        }
    }
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    keyword: Color::Rgb(203, 166, 247),        // Mauve for keywords
    string: Color::Rgb(166, 227, 161),         // Green for quoted terminals
    number: Color::Rgb(250, 179, 135),         // Orange for literals
    preprocessor: Color::Rgb(245, 194, 231),   // Pink for directives
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    current_line_bg: Color::Rgb(50, 50, 70),   // Slightly lighter BG for status bar
    type_name: Color::Rgb(148, 226, 213),      // Cyan/teal for labels
};
