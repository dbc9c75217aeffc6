//! Full article text with in-place change marks
//!
//! The old side marks deletions, the new side insertions, located by the
//! core's substring search. Long content is shown as a character-count
//! preview until expanded; the cut is applied to the marked runs, so it
//! may land inside a mark.

use newsdiff_core::{highlight_text, ChangeOp, DiffSide, MarkedText, VersionSummary};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::i18n::Translations;
use crate::theme::Theme;
use crate::views::{format_time, marked_lines};

/// Preview length, in characters of marked-up content
pub const PREVIEW_CHARS: usize = 300;

#[allow(clippy::too_many_arguments)]
pub fn panel_lines(
    version: &VersionSummary,
    ops: &[ChangeOp],
    side: DiffSide,
    is_older: bool,
    show_highlights: bool,
    expanded: bool,
    theme: &Theme,
    t: &Translations,
) -> Vec<Line<'static>> {
    let marked = if show_highlights {
        highlight_text(&version.content, ops, side)
    } else {
        MarkedText::plain(version.content.clone())
    };

    let age_label = if is_older { t.older_version } else { t.newer_version };
    let age_style = if is_older { theme.badge_del } else { theme.badge_add };

    let mut lines = vec![
        Line::from(vec![
            Span::styled(format!("V{}", version.version_number), age_style),
            Span::styled(format!("  {age_label}"), age_style),
            Span::styled(
                format!(
                    "  {}  {} {}",
                    format_time(version.captured_at),
                    version.word_count,
                    t.words
                ),
                theme.text_muted,
            ),
        ]),
        Line::styled(version.title.clone(), theme.header),
        Line::default(),
    ];

    let needs_preview = !expanded && marked.char_len() > PREVIEW_CHARS;
    if needs_preview {
        let mut preview = marked.truncate_chars(PREVIEW_CHARS);
        preview.runs.push(newsdiff_core::TextRun {
            text: "...".into(),
            mark: None,
        });
        lines.extend(marked_lines(&preview, theme));
        lines.push(Line::default());
        lines.push(Line::styled(format!("e: {}", t.read_full), theme.accent));
    } else {
        lines.extend(marked_lines(&marked, theme));
        if expanded && marked.char_len() > PREVIEW_CHARS {
            lines.push(Line::default());
            lines.push(Line::styled(format!("e: {}", t.show_less), theme.accent));
        }
    }
    lines
}

#[allow(clippy::too_many_arguments)]
pub fn render(
    frame: &mut Frame,
    area: Rect,
    version: &VersionSummary,
    ops: &[ChangeOp],
    side: DiffSide,
    is_older: bool,
    app: &App,
) {
    let t = app.language().t();
    let lines = panel_lines(
        version,
        ops,
        side,
        is_older,
        app.show_highlights,
        app.expanded,
        &app.theme,
        t,
    );
    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::SV;
    use newsdiff_core::MarkKind;

    fn version(content: &str) -> VersionSummary {
        VersionSummary {
            id: 1,
            version_number: 2,
            title: "Rubrik".into(),
            content: content.into(),
            captured_at: "2026-03-01T10:30:00Z".parse().unwrap(),
            word_count: 5,
        }
    }

    fn mark_count(lines: &[Line<'_>], theme: &Theme, kind: MarkKind) -> usize {
        let style = theme.mark_style(kind);
        lines
            .iter()
            .flat_map(|l| l.spans.iter())
            .filter(|s| s.style == style)
            .count()
    }

    #[test]
    fn test_old_side_marks_deletions() {
        let theme = Theme::dark();
        let ops = vec![ChangeOp::delete(["regnar", "det"], 0)];
        let lines = panel_lines(
            &version("Idag regnar det i Stockholm"),
            &ops,
            DiffSide::Old,
            true,
            true,
            false,
            &theme,
            &SV,
        );
        assert_eq!(mark_count(&lines, &theme, MarkKind::Delete), 1);
    }

    #[test]
    fn test_highlights_can_be_toggled_off() {
        let theme = Theme::dark();
        let ops = vec![ChangeOp::delete(["regnar", "det"], 0)];
        let lines = panel_lines(
            &version("Idag regnar det"),
            &ops,
            DiffSide::Old,
            true,
            false,
            false,
            &theme,
            &SV,
        );
        assert_eq!(mark_count(&lines, &theme, MarkKind::Delete), 0);
    }

    #[test]
    fn test_long_content_gets_preview() {
        let theme = Theme::dark();
        let long = "ord ".repeat(200);
        let lines = panel_lines(
            &version(&long),
            &[],
            DiffSide::New,
            false,
            true,
            false,
            &theme,
            &SV,
        );
        let text: String = lines
            .iter()
            .flat_map(|l| l.spans.iter())
            .map(|s| s.content.clone().into_owned())
            .collect();
        assert!(text.contains("..."));
        assert!(text.contains("Läs hela artikeln"));
    }

    #[test]
    fn test_short_content_is_not_truncated() {
        let theme = Theme::dark();
        let lines = panel_lines(
            &version("kort text"),
            &[],
            DiffSide::New,
            false,
            true,
            false,
            &theme,
            &SV,
        );
        let text: String = lines
            .iter()
            .flat_map(|l| l.spans.iter())
            .map(|s| s.content.clone().into_owned())
            .collect();
        assert!(text.contains("kort text"));
        assert!(!text.contains("..."));
    }
}
