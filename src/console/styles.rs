use crossterm::style::{Color, StyledContent, Stylize};

/// Catppuccin Mocha accents for console output
/// https://github.com/catppuccin/catppuccin
pub struct Theme;

impl Theme {
    pub const MAUVE: Color = Color::Rgb { r: 203, g: 166, b: 247 }; // #cba6f7
    pub const RED: Color = Color::Rgb { r: 243, g: 139, b: 168 }; // #f38ba8
    pub const GREEN: Color = Color::Rgb { r: 166, g: 227, b: 161 }; // #a6e3a1
    pub const TEAL: Color = Color::Rgb { r: 148, g: 226, b: 213 }; // #94e2d5
    pub const OVERLAY: Color = Color::Rgb { r: 127, g: 132, b: 156 }; // #7f849c

    // Semantic aliases
    pub const TITLE: Color = Self::MAUVE;
    pub const PROMPT: Color = Self::TEAL;
    pub const ERROR: Color = Self::RED;
    pub const ROW: Color = Self::GREEN;
    pub const MUTED: Color = Self::OVERLAY;
}

pub const RULE_WIDTH: usize = 80;

pub fn title_style(text: &str) -> StyledContent<String> {
    text.to_string().with(Theme::TITLE).bold()
}

pub fn prompt_style(text: &str) -> StyledContent<String> {
    text.to_string().with(Theme::PROMPT)
}

pub fn error_style(text: &str) -> StyledContent<String> {
    text.to_string().with(Theme::ERROR)
}

pub fn row_style(text: &str) -> StyledContent<String> {
    text.to_string().with(Theme::ROW).bold()
}

pub fn muted_style(text: &str) -> StyledContent<String> {
    text.to_string().with(Theme::MUTED)
}

/// Horizontal separator line
pub fn rule() -> StyledContent<String> {
    muted_style(&"-".repeat(RULE_WIDTH))
}
