//! Statistics panel: words added/removed, net change, title changed

use newsdiff_core::DiffStats;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::Line,
    widgets::Paragraph,
    Frame,
};

use crate::i18n::Translations;
use crate::theme::Theme;

/// Net change with an explicit plus sign for growth
pub fn signed(n: i64) -> String {
    if n > 0 {
        format!("+{n}")
    } else {
        n.to_string()
    }
}

/// The four cells in display order: value, value style, label
pub fn cells<'a>(
    stats: &DiffStats,
    theme: &Theme,
    t: &'a Translations,
) -> [(String, Style, &'a str); 4] {
    let net_style = if stats.net_change > 0 {
        theme.badge_add
    } else if stats.net_change < 0 {
        theme.badge_del
    } else {
        theme.text_muted
    };
    let title_value = if stats.title_changed { "✓" } else { "✗" };
    let title_style = if stats.title_changed {
        theme.warning
    } else {
        theme.text_muted
    };
    [
        (
            format!("+{}", stats.words_added),
            theme.badge_add,
            t.words_added,
        ),
        (
            format!("-{}", stats.words_removed),
            theme.badge_del,
            t.words_removed,
        ),
        (signed(stats.net_change), net_style, t.net_change),
        (title_value.to_string(), title_style, t.title_changed),
    ]
}

pub fn render(frame: &mut Frame, area: Rect, stats: &DiffStats, theme: &Theme, t: &Translations) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(area);
    frame.render_widget(
        Paragraph::new(Line::styled(t.statistics, theme.header)),
        rows[0],
    );

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(rows[1]);

    for (cell, area) in cells(stats, theme, t).into_iter().zip(columns.iter()) {
        let (value, style, label) = cell;
        let lines = vec![
            Line::styled(value, style),
            Line::styled(label, theme.text_muted),
        ];
        frame.render_widget(Paragraph::new(lines), *area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::SV;

    #[test]
    fn test_signed_formatting() {
        assert_eq!(signed(3), "+3");
        assert_eq!(signed(0), "0");
        assert_eq!(signed(-2), "-2");
    }

    #[test]
    fn test_cells_cover_all_four_stats() {
        let theme = Theme::dark();
        let stats = DiffStats {
            words_added: 2,
            words_removed: 5,
            net_change: -3,
            title_changed: true,
        };
        let cells = cells(&stats, &theme, &SV);
        assert_eq!(cells[0].0, "+2");
        assert_eq!(cells[1].0, "-5");
        assert_eq!(cells[2].0, "-3");
        assert_eq!(cells[2].1, theme.badge_del);
        assert_eq!(cells[3].0, "✓");
        assert_eq!(cells[0].2, "Ord tillagda");
    }

    #[test]
    fn test_unchanged_title_shows_cross() {
        let theme = Theme::dark();
        let cells = cells(&DiffStats::default(), &theme, &SV);
        assert_eq!(cells[3].0, "✗");
        assert_eq!(cells[2].1, theme.text_muted);
    }
}
