//! Parrot/neon theme tokens for the Rangebrush TUI
//!
//! # Color Palette
//! - **Background**: Near-black / deep charcoal (base layer)
//! - **Accent**: Electric cyan (focus, committed selection)
//! - **Positive**: Neon green (committed / successful edits)
//! - **Negative**: Hot pink (validation errors)
//! - **Warning**: Neon orange (live drag, rejected edits)
//! - **Neutral**: Cool purple (histogram outside the selection)
//! - **Muted**: Steel blue (hints, secondary text)

use ratatui::style::{Color, Modifier, Style};

/// Parrot/neon theme for the Rangebrush TUI
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Near-black background (primary surface)
    pub background: Color,
    /// Electric cyan accent (focus, highlights)
    pub accent: Color,
    /// Neon green (successful commits)
    pub positive: Color,
    /// Hot pink (validation errors)
    pub negative: Color,
    /// Neon orange (warnings, live brush)
    pub warning: Color,
    /// Cool purple (neutral info, unselected bins)
    pub neutral: Color,
    /// Steel blue (muted text, disabled)
    pub muted: Color,
    /// White (primary text)
    pub text_primary: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::parrot_neon()
    }
}

impl Theme {
    /// Create the default Parrot/neon theme
    pub const fn parrot_neon() -> Self {
        Self {
            background: Color::Rgb(18, 18, 20),
            accent: Color::Rgb(0, 255, 255),
            positive: Color::Rgb(0, 255, 128),
            negative: Color::Rgb(255, 20, 147),
            warning: Color::Rgb(255, 140, 0),
            neutral: Color::Rgb(147, 112, 219),
            muted: Color::Rgb(100, 149, 237),
            text_primary: Color::White,
        }
    }

    /// Bar color for a histogram bin (inside the selection or not, brush live or not)
    pub fn bin_color(&self, selected: bool, dragging: bool) -> Color {
        match (selected, dragging) {
            (true, true) => self.warning,
            (true, false) => self.accent,
            (false, _) => self.neutral,
        }
    }
}

const THEME: Theme = Theme::parrot_neon();

pub fn accent() -> Style {
    Style::default().fg(THEME.accent)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

pub fn positive() -> Style {
    Style::default().fg(THEME.positive)
}

pub fn negative() -> Style {
    Style::default().fg(THEME.negative)
}

pub fn warning() -> Style {
    Style::default().fg(THEME.warning)
}

pub fn neutral() -> Style {
    Style::default().fg(THEME.neutral)
}

pub fn muted() -> Style {
    Style::default().fg(THEME.muted)
}

pub fn text() -> Style {
    Style::default().fg(THEME.text_primary)
}

pub fn bin(selected: bool, dragging: bool) -> Style {
    Style::default().fg(THEME.bin_color(selected, dragging))
}

pub fn panel_border(focused: bool) -> Style {
    if focused {
        accent()
    } else {
        muted()
    }
}

pub fn panel_title(focused: bool) -> Style {
    if focused {
        accent_bold()
    } else {
        neutral()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_creation() {
        let theme = Theme::default();
        assert_eq!(theme.background, Color::Rgb(18, 18, 20));
        assert_eq!(theme.accent, Color::Rgb(0, 255, 255));
    }

    #[test]
    fn test_bin_color() {
        let theme = Theme::default();
        assert_eq!(theme.bin_color(true, false), theme.accent);
        assert_eq!(theme.bin_color(true, true), theme.warning);
        assert_eq!(theme.bin_color(false, true), theme.neutral);
        assert_eq!(theme.bin_color(false, false), theme.neutral);
    }
}
