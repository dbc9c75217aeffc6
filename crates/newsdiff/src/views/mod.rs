//! View rendering modules

mod article;
mod highlighted;
mod home;
mod inline;
mod side_by_side;
mod stats;

use chrono::{DateTime, Utc};
use newsdiff_core::MarkedText;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::app::{App, InputMode, Route};
use crate::i18n::Language;
use crate::theme::Theme;

/// Top-level render: header, active screen, key-hint footer
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_header(frame, chunks[0], app);
    match app.route {
        Route::Home => home::render(frame, chunks[1], app),
        Route::Article => article::render(frame, chunks[1], app),
    }
    render_footer(frame, chunks[2], app);
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let t = app.language().t();
    let title = Line::from(vec![
        Span::styled(t.app_title, app.theme.header),
        Span::styled(format!("  {}", t.app_subtitle), app.theme.text_muted),
    ]);
    frame.render_widget(Paragraph::new(vec![title, Line::default()]), area);
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let t = app.language().t();
    let hint = match (app.input_mode, app.route) {
        (InputMode::Normal, Route::Home) => t.hint_home,
        (InputMode::Normal, Route::Article) => t.hint_article,
        _ => t.hint_edit,
    };
    frame.render_widget(
        Paragraph::new(Line::styled(hint, app.theme.text_muted)),
        area,
    );
}

/// Maps highlight runs to styled spans; newlines inside runs start new lines
pub(crate) fn marked_lines(marked: &MarkedText, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = vec![Line::default()];
    for run in &marked.runs {
        let style = run
            .mark
            .map(|kind| theme.mark_style(kind))
            .unwrap_or(theme.text_primary);
        let mut parts = run.text.split('\n');
        if let Some(first) = parts.next() {
            if !first.is_empty() {
                push_span(&mut lines, Span::styled(first.to_string(), style));
            }
        }
        for part in parts {
            lines.push(Line::default());
            if !part.is_empty() {
                push_span(&mut lines, Span::styled(part.to_string(), style));
            }
        }
    }
    lines
}

fn push_span(lines: &mut Vec<Line<'static>>, span: Span<'static>) {
    if let Some(last) = lines.last_mut() {
        last.spans.push(span);
    }
}

/// Truncates to a display width, appending an ellipsis when something
/// was cut
pub(crate) fn fit_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for grapheme in text.graphemes(true) {
        let width = grapheme.width();
        if used + width + 1 > max_width {
            break;
        }
        out.push_str(grapheme);
        used += width;
    }
    out.push('…');
    out
}

pub(crate) fn format_time(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M").to_string()
}

/// "5 min sedan" style relative timestamps
pub(crate) fn relative_time(at: DateTime<Utc>, now: DateTime<Utc>, language: Language) -> String {
    let suffix = match language {
        Language::Sv => "sedan",
        Language::En => "ago",
    };
    let minutes = (now - at).num_minutes();
    if minutes < 1 {
        return match language {
            Language::Sv => "nyss".to_string(),
            Language::En => "just now".to_string(),
        };
    }
    if minutes < 60 {
        return format!("{minutes} min {suffix}");
    }
    let hours = minutes / 60;
    if hours < 24 {
        return format!("{hours} h {suffix}");
    }
    format!("{} d {suffix}", hours / 24)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use newsdiff_core::{MarkKind, TextRun};

    #[test]
    fn test_fit_width_keeps_short_text() {
        assert_eq!(fit_width("kort", 10), "kort");
    }

    #[test]
    fn test_fit_width_truncates_with_ellipsis() {
        let cut = fit_width("en ganska lång rubrik", 10);
        assert!(cut.ends_with('…'));
        assert!(cut.width() <= 10);
    }

    #[test]
    fn test_relative_time_buckets() {
        let now = Utc.with_ymd_and_hms(2026, 3, 2, 12, 0, 0).unwrap();
        let at = Utc.with_ymd_and_hms(2026, 3, 2, 11, 55, 0).unwrap();
        assert_eq!(relative_time(at, now, Language::Sv), "5 min sedan");
        let at = Utc.with_ymd_and_hms(2026, 3, 2, 9, 0, 0).unwrap();
        assert_eq!(relative_time(at, now, Language::En), "3 h ago");
        let at = Utc.with_ymd_and_hms(2026, 2, 27, 12, 0, 0).unwrap();
        assert_eq!(relative_time(at, now, Language::Sv), "3 d sedan");
    }

    #[test]
    fn test_marked_lines_split_on_newline() {
        let marked = MarkedText {
            runs: vec![
                TextRun {
                    text: "första raden\nandra ".into(),
                    mark: None,
                },
                TextRun {
                    text: "ordet".into(),
                    mark: Some(MarkKind::Insert),
                },
            ],
        };
        let lines = marked_lines(&marked, &Theme::dark());
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].spans.len(), 1);
        assert_eq!(lines[1].spans.len(), 2);
    }
}
