//! Inline diff view: one row per change, in edit-script order

use newsdiff_core::{ChangeKind, ChangeOp};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::i18n::Translations;
use crate::theme::Theme;

pub fn lines(ops: &[ChangeOp], theme: &Theme, t: &Translations) -> Vec<Line<'static>> {
    let mut out = Vec::new();
    for op in ops {
        match op.kind {
            ChangeKind::Equal => continue,
            ChangeKind::Delete => out.push(Line::from(vec![
                Span::styled(format!("[{}] ", t.removed), theme.badge_del),
                Span::styled(op.joined(), theme.diff_del),
            ])),
            ChangeKind::Insert => out.push(Line::from(vec![
                Span::styled(format!("[{}] ", t.added), theme.badge_add),
                Span::styled(op.joined(), theme.diff_add),
            ])),
        }
    }
    if out.is_empty() {
        out.push(Line::styled(t.no_difference, theme.text_muted));
    }
    out
}

pub fn render(frame: &mut Frame, area: Rect, ops: &[ChangeOp], app: &App) {
    let t = app.language().t();
    let paragraph = Paragraph::new(lines(ops, &app.theme, t))
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::SV;

    #[test]
    fn test_one_row_per_change_in_order() {
        let ops = vec![
            ChangeOp::equal(["Idag"], 0),
            ChangeOp::delete(["regnar", "det"], 1),
            ChangeOp::insert(["snöar", "det"], 2),
            ChangeOp::equal(["i", "Stockholm"], 3),
        ];
        let rows = lines(&ops, &Theme::dark(), &SV);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].spans[0].content, "[Borttaget] ");
        assert_eq!(rows[0].spans[1].content, "regnar det");
        assert_eq!(rows[1].spans[0].content, "[Tillagt] ");
        assert_eq!(rows[1].spans[1].content, "snöar det");
    }

    #[test]
    fn test_empty_script_shows_no_difference() {
        let rows = lines(&[], &Theme::dark(), &SV);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].spans[0].content, "Ingen skillnad upptäckt");
    }

    #[test]
    fn test_all_equal_script_shows_no_difference() {
        let ops = vec![ChangeOp::equal(["oförändrad"], 0)];
        let rows = lines(&ops, &Theme::dark(), &SV);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].spans[0].content, "Ingen skillnad upptäckt");
    }
}
