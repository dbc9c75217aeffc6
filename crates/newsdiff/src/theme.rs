//! Color themes for the terminal UI

use clap::ValueEnum;
use newsdiff_core::MarkKind;
use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

/// Stand-in for the browser's media-query dark-mode detection: the terminal
/// cannot report a preference, so it is a persisted setting instead
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }
}

/// Resolved styles used by every view
#[derive(Debug, Clone)]
pub struct Theme {
    pub text_primary: Style,
    pub text_muted: Style,
    pub accent: Style,
    pub header: Style,
    pub selected: Style,
    /// Inserted words
    pub diff_add: Style,
    /// Deleted words, struck through
    pub diff_del: Style,
    /// Unchanged context
    pub context: Style,
    /// Title-changed indicator
    pub warning: Style,
    /// "Added" row label
    pub badge_add: Style,
    /// "Removed" row label, not struck through
    pub badge_del: Style,
}

impl Theme {
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    pub fn dark() -> Self {
        Self {
            text_primary: Style::default().fg(Color::Gray),
            text_muted: Style::default().fg(Color::DarkGray),
            accent: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            header: Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            selected: Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            diff_add: Style::default().fg(Color::Green),
            diff_del: Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::CROSSED_OUT),
            context: Style::default().fg(Color::DarkGray),
            warning: Style::default().fg(Color::Yellow),
            badge_add: Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            badge_del: Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        }
    }

    pub fn light() -> Self {
        Self {
            text_primary: Style::default().fg(Color::Black),
            text_muted: Style::default().fg(Color::DarkGray),
            accent: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            header: Style::default().fg(Color::Black).add_modifier(Modifier::BOLD),
            selected: Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            diff_add: Style::default().fg(Color::Green),
            diff_del: Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::CROSSED_OUT),
            context: Style::default().fg(Color::DarkGray),
            warning: Style::default().fg(Color::Yellow),
            badge_add: Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            badge_del: Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        }
    }

    /// Style for an in-place highlight mark
    pub fn mark_style(&self, kind: MarkKind) -> Style {
        match kind {
            MarkKind::Insert => self.diff_add.add_modifier(Modifier::BOLD),
            MarkKind::Delete => self.diff_del,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_styles_differ() {
        let theme = Theme::dark();
        assert_ne!(
            theme.mark_style(MarkKind::Insert),
            theme.mark_style(MarkKind::Delete)
        );
    }

    #[test]
    fn test_delete_marks_are_struck_through() {
        let theme = Theme::light();
        assert!(theme
            .mark_style(MarkKind::Delete)
            .add_modifier
            .contains(Modifier::CROSSED_OUT));
    }
}
