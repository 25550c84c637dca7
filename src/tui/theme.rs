//! Theme configuration for the console TUI and CLI output
//!
//! Centralizes all color and style definitions. Provides both ratatui styles
//! (for the TUI) and ANSI escape codes (for plain CLI output).

use ratatui::style::{Color, Modifier, Style};

use crate::console::LineTag;

/// Theme configuration for the TUI.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Shell standard output
    pub text_primary: Color,
    /// Borders, hints and faded text
    pub text_secondary: Color,
    /// Command echoes, prompt and informational text
    pub accent: Color,
    /// Shell standard error and failures
    pub error: Color,
    pub warning: Color,
    pub success: Color,
    /// Background color (usually default/transparent)
    pub background: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::console()
    }
}

impl Theme {
    /// Light gray output with a cyan accent.
    /// Uses standard ANSI colors for consistent terminal rendering.
    pub fn console() -> Self {
        Self {
            text_primary: Color::Gray,
            text_secondary: Color::DarkGray,
            accent: Color::LightCyan,
            error: Color::LightRed,
            warning: Color::Yellow,
            success: Color::LightGreen,
            background: Color::Reset,
        }
    }

    /// Classic terminal theme - white text.
    pub fn classic() -> Self {
        Self {
            text_primary: Color::White,
            text_secondary: Color::DarkGray,
            accent: Color::Cyan,
            error: Color::Red,
            warning: Color::Yellow,
            success: Color::Green,
            background: Color::Reset,
        }
    }

    /// Style for a scrollback line of the given kind.
    pub fn line_style(&self, tag: LineTag) -> Style {
        let fg = match tag {
            LineTag::Output => self.text_primary,
            LineTag::Error | LineTag::Failure => self.error,
            LineTag::Echo | LineTag::Info => self.accent,
            LineTag::Success => self.success,
            LineTag::Warning => self.warning,
        };
        let style = Style::default().fg(fg).bg(self.background);
        if tag == LineTag::Echo {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }

    /// Style for secondary/dimmed text.
    pub fn text_secondary_style(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Style for the input prompt.
    pub fn prompt_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for selected text.
    pub fn selection_style(&self) -> Style {
        Style::default().fg(Color::Black).bg(self.accent)
    }

    /// Style for the copy toast at the given opacity.
    ///
    /// Terminals have no alpha, so the fade steps through dimmer colors.
    pub fn toast_style(&self, opacity: f32) -> Style {
        if opacity > 0.66 {
            Style::default()
                .fg(Color::Black)
                .bg(self.success)
                .add_modifier(Modifier::BOLD)
        } else if opacity > 0.33 {
            Style::default().fg(Color::Black).bg(self.text_primary)
        } else {
            Style::default().fg(self.text_primary).bg(self.text_secondary)
        }
    }

    // ANSI color helpers for CLI output

    /// Format text with the accent color (for CLI output).
    pub fn accent_text(&self, text: &str) -> String {
        format!("{}{}{}", color_to_ansi(self.accent), text, ANSI_RESET)
    }

    /// Format text with the primary color (for CLI output).
    pub fn primary_text(&self, text: &str) -> String {
        format!("{}{}{}", color_to_ansi(self.text_primary), text, ANSI_RESET)
    }

    /// Format text with the success color (for CLI output).
    pub fn success_text(&self, text: &str) -> String {
        format!("{}{}{}", color_to_ansi(self.success), text, ANSI_RESET)
    }
}

/// ANSI reset sequence
pub const ANSI_RESET: &str = "\x1b[0m";

/// Convert a ratatui Color to an ANSI escape code.
pub fn color_to_ansi(color: Color) -> &'static str {
    match color {
        Color::Black => "\x1b[30m",
        Color::Red => "\x1b[31m",
        Color::Green => "\x1b[32m",
        Color::Yellow => "\x1b[33m",
        Color::Blue => "\x1b[34m",
        Color::Magenta => "\x1b[35m",
        Color::Cyan => "\x1b[36m",
        Color::Gray => "\x1b[37m",
        Color::DarkGray => "\x1b[90m",
        Color::LightRed => "\x1b[91m",
        Color::LightGreen => "\x1b[92m",
        Color::LightYellow => "\x1b[93m",
        Color::LightBlue => "\x1b[94m",
        Color::LightMagenta => "\x1b[95m",
        Color::LightCyan => "\x1b[96m",
        Color::White => "\x1b[97m",
        Color::Reset => "\x1b[0m",
        // For RGB and indexed colors, fall back to reset (no color)
        _ => "",
    }
}

/// Global theme instance.
pub fn current_theme() -> Theme {
    Theme::default()
}
