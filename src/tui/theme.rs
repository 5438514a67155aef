use ratatui::style::{Color, Modifier, Style};

use crate::model::UiConfig;

/// Named text styles the views draw with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Normal,
    Title,
    Button,
    Highlight,
    Input,
    Border,
    Dim,
}

/// Parsed color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub title: Color,
    pub button: Color,
    pub highlight_fg: Color,
    pub highlight_bg: Color,
    pub input_fg: Color,
    pub input_bg: Color,
    pub border: Color,
    pub dim: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Black,
            text: Color::Cyan,
            title: Color::Yellow,
            button: Color::White,
            highlight_fg: Color::Black,
            highlight_bg: Color::Cyan,
            input_fg: Color::Black,
            input_bg: Color::White,
            border: Color::White,
            dim: Color::DarkGray,
        }
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

impl Theme {
    /// Create a theme from UI config, falling back to defaults
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();

        for (key, value) in &ui.colors {
            if let Some(color) = parse_hex_color(value) {
                match key.as_str() {
                    "background" => theme.background = color,
                    "text" => theme.text = color,
                    "title" => theme.title = color,
                    "button" => theme.button = color,
                    "highlight_fg" => theme.highlight_fg = color,
                    "highlight_bg" => theme.highlight_bg = color,
                    "input_fg" => theme.input_fg = color,
                    "input_bg" => theme.input_bg = color,
                    "border" => theme.border = color,
                    "dim" => theme.dim = color,
                    _ => {}
                }
            }
        }

        theme
    }

    pub fn style(&self, emphasis: Emphasis) -> Style {
        let base = Style::default().fg(self.text).bg(self.background);
        match emphasis {
            Emphasis::Normal => base,
            Emphasis::Title => base.fg(self.title).add_modifier(Modifier::BOLD),
            Emphasis::Button => base.fg(self.button),
            Emphasis::Highlight => base.fg(self.highlight_fg).bg(self.highlight_bg),
            Emphasis::Input => base.fg(self.input_fg).bg(self.input_bg),
            Emphasis::Border => base.fg(self.border),
            Emphasis::Dim => base.fg(self.dim),
        }
    }
}
