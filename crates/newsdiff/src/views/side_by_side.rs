//! Side-by-side diff view: two aligned columns built from segments

use newsdiff_core::{DiffSide, Segment, SegmentKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::Line,
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::theme::Theme;
use crate::views::fit_width;

/// One line per segment; both columns share row indices. Asymmetric
/// segment lengths are expected and not padded.
pub fn column_lines(segments: &[Segment], side: DiffSide, theme: &Theme) -> Vec<Line<'static>> {
    segments
        .iter()
        .map(|segment| match segment.kind {
            SegmentKind::Equal => Line::styled(segment.old_text(), theme.context),
            SegmentKind::Change => {
                let (text, style) = match side {
                    DiffSide::Old => (segment.old_text(), theme.diff_del),
                    DiffSide::New => (segment.new_text(), theme.diff_add),
                };
                if text.is_empty() {
                    Line::default()
                } else {
                    Line::styled(text, style)
                }
            }
        })
        .collect()
}

pub fn render(
    frame: &mut Frame,
    area: Rect,
    segments: &[Segment],
    old_title: &str,
    new_title: &str,
    app: &App,
) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_column(frame, columns[0], segments, DiffSide::Old, old_title, app);
    render_column(frame, columns[1], segments, DiffSide::New, new_title, app);
}

fn render_column(
    frame: &mut Frame,
    area: Rect,
    segments: &[Segment],
    side: DiffSide,
    title: &str,
    app: &App,
) {
    let theme = &app.theme;
    let header_style = match side {
        DiffSide::Old => theme.badge_del,
        DiffSide::New => theme.badge_add,
    };
    let mut lines = vec![
        Line::styled(
            fit_width(title, area.width.saturating_sub(1) as usize),
            header_style,
        ),
        Line::default(),
    ];
    lines.extend(column_lines(segments, side, theme));
    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use newsdiff_core::{reconstruct_segments, ChangeOp};

    fn segments() -> Vec<Segment> {
        reconstruct_segments(&[
            ChangeOp::equal(["Idag"], 0),
            ChangeOp::delete(["regnar", "det"], 1),
            ChangeOp::insert(["snöar", "det"], 2),
            ChangeOp::equal(["i", "Stockholm"], 3),
        ])
    }

    #[test]
    fn test_columns_share_row_indices() {
        let segments = segments();
        let theme = Theme::dark();
        let left = column_lines(&segments, DiffSide::Old, &theme);
        let right = column_lines(&segments, DiffSide::New, &theme);
        assert_eq!(left.len(), right.len());
        assert_eq!(left.len(), segments.len());
    }

    #[test]
    fn test_equal_rows_are_identical() {
        let segments = segments();
        let theme = Theme::dark();
        let left = column_lines(&segments, DiffSide::Old, &theme);
        let right = column_lines(&segments, DiffSide::New, &theme);
        assert_eq!(left[0].spans[0].content, "Idag");
        assert_eq!(right[0].spans[0].content, "Idag");
        assert_eq!(left[2].spans[0].content, "i Stockholm");
    }

    #[test]
    fn test_change_rows_show_their_side_only() {
        let segments = segments();
        let theme = Theme::dark();
        let left = column_lines(&segments, DiffSide::Old, &theme);
        let right = column_lines(&segments, DiffSide::New, &theme);
        assert_eq!(left[1].spans[0].content, "regnar det");
        assert_eq!(right[1].spans[0].content, "snöar det");
    }

    #[test]
    fn test_one_sided_change_leaves_blank_row() {
        let segments = reconstruct_segments(&[
            ChangeOp::insert(["bara", "nytt"], 0),
            ChangeOp::equal(["slut"], 1),
        ]);
        let theme = Theme::dark();
        let left = column_lines(&segments, DiffSide::Old, &theme);
        let right = column_lines(&segments, DiffSide::New, &theme);
        assert!(left[0].spans.is_empty());
        assert_eq!(right[0].spans[0].content, "bara nytt");
    }
}
