//! Centralized theme system for the TUI.
//!
//! The dark theme keeps the dashboard's neon palette (electric cyan and
//! magenta accents over slate); the light theme swaps in darker ink on a
//! plain background.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

/// Application theme with all UI colors.
#[derive(Debug, Clone, Copy)]
pub struct AppTheme {
    /// Primary accent (titles, active selections).
    pub primary: Color,
    /// Secondary accent (the humidity chart, highlights).
    pub accent: Color,

    // Status colors
    pub warning: Color,
    pub danger: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // Border colors
    pub border_active: Color,
    pub border_inactive: Color,

    // Background colors
    pub bg_header: Color,
}

impl Default for AppTheme {
    fn default() -> Self {
        Self::dark()
    }
}

impl AppTheme {
    /// Dark theme with the neon dashboard palette.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::Rgb(0, 243, 255),  // electric cyan
            accent: Color::Rgb(255, 0, 255),   // magenta
            warning: Color::Rgb(251, 191, 36), // amber-400
            danger: Color::Rgb(248, 113, 113), // red-400

            text_primary: Color::Rgb(248, 250, 252), // slate-50
            text_secondary: Color::Rgb(148, 163, 184), // slate-400
            text_muted: Color::Rgb(100, 116, 139),   // slate-500

            border_active: Color::Rgb(0, 243, 255),
            border_inactive: Color::Rgb(71, 85, 105), // slate-600

            bg_header: Color::Rgb(30, 41, 59), // slate-800
        }
    }

    /// Light theme with darker ink for readability.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::Rgb(6, 182, 212),  // cyan-500
            accent: Color::Rgb(192, 38, 211),  // fuchsia-600
            warning: Color::Rgb(217, 119, 6),  // amber-600
            danger: Color::Rgb(220, 38, 38),   // red-600

            text_primary: Color::Rgb(15, 23, 42),    // slate-900
            text_secondary: Color::Rgb(71, 85, 105), // slate-600
            text_muted: Color::Rgb(148, 163, 184),   // slate-400

            border_active: Color::Rgb(6, 182, 212),
            border_inactive: Color::Rgb(203, 213, 225), // slate-300

            bg_header: Color::Rgb(241, 245, 249), // slate-100
        }
    }

    // Style helpers

    /// Style for active/focused borders.
    #[inline]
    #[must_use]
    pub fn border_active_style(&self) -> Style {
        Style::default().fg(self.border_active)
    }

    /// Style for inactive borders.
    #[inline]
    #[must_use]
    pub fn border_inactive_style(&self) -> Style {
        Style::default().fg(self.border_inactive)
    }

    /// Style for titles.
    #[inline]
    #[must_use]
    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for header/app bar.
    #[inline]
    #[must_use]
    pub fn header_style(&self) -> Style {
        Style::default().bg(self.bg_header)
    }

    /// Style for muted hint text.
    #[inline]
    #[must_use]
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.text_muted)
    }
}

/// Default border type for all blocks.
pub const BORDER_TYPE: BorderType = BorderType::Rounded;
