//! Article screen: header, version selector, statistics, title diff and
//! the active diff view

use chrono::Utc;
use newsdiff_core::{reconstruct_segments, ArticleDetail, ChangeOp, DiffSide};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::app::{App, LoadState, ViewMode};
use crate::views::{fit_width, format_time, highlighted, inline, relative_time, side_by_side, stats};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let t = app.language().t();
    match &app.article {
        LoadState::Idle => {}
        LoadState::Loading => {
            frame.render_widget(
                Paragraph::new(Line::styled(t.loading, app.theme.text_muted)),
                area,
            );
        }
        LoadState::Unavailable => {
            frame.render_widget(
                Paragraph::new(Line::styled(t.unavailable, app.theme.warning)),
                area,
            );
        }
        LoadState::Ready(article) => render_ready(frame, area, app, article),
    }
}

fn render_ready(frame: &mut Frame, area: Rect, app: &App, article: &ArticleDetail) {
    let title_diff = app.diff.ready().and_then(|d| d.title_diff.as_ref());
    let title_block_height = if title_diff.is_some() { 4 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(title_block_height),
            Constraint::Min(0),
        ])
        .split(area);

    render_header(frame, chunks[0], app, article);
    render_selector(frame, chunks[1], app);
    render_stats(frame, chunks[2], app);
    if let Some(diff) = title_diff {
        render_title_diff(frame, chunks[3], app, diff);
    }
    render_main(frame, chunks[4], app, article);
}

fn render_header(frame: &mut Frame, area: Rect, app: &App, article: &ArticleDetail) {
    let t = app.language().t();
    let theme = &app.theme;
    let now = Utc::now();

    let source_name = article
        .source
        .as_ref()
        .map(|s| s.name.clone())
        .unwrap_or_default();
    let meta = format!(
        "{source_name}  ·  {} {}  ·  {} {}",
        t.first_seen,
        relative_time(article.first_seen_at, now, app.language()),
        article.version_count,
        t.versions
    );
    let third = match article.last_modified_at {
        Some(at) => Line::styled(
            format!(
                "{} {} ({})",
                t.last_modified,
                relative_time(at, now, app.language()),
                format_time(at)
            ),
            theme.warning,
        ),
        None => Line::styled(article.url.clone(), theme.text_muted),
    };

    let lines = vec![
        Line::styled(
            fit_width(&article.title, area.width.saturating_sub(1) as usize),
            theme.header,
        ),
        Line::styled(meta, theme.text_muted),
        third,
        Line::default(),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_selector(frame: &mut Frame, area: Rect, app: &App) {
    let t = app.language().t();
    let theme = &app.theme;
    let mode_label = match app.view_mode {
        ViewMode::History => t.version_history,
        ViewMode::FullText => t.full_text_view,
        ViewMode::Inline => t.inline_view,
        ViewMode::SideBySide => t.side_by_side_view,
    };
    let pair = match (app.from_version, app.to_version) {
        (Some(from), Some(to)) => format!(
            "{}: V{from}  →  {}: V{to}",
            t.from_version, t.to_version
        ),
        _ => t.compare_versions.to_string(),
    };
    let mut spans = vec![
        Span::styled(pair, theme.text_primary),
        Span::styled(format!("   [{mode_label}]"), theme.accent),
    ];
    if app.view_mode == ViewMode::FullText {
        let toggle = if app.show_highlights {
            t.hide_changes
        } else {
            t.show_changes
        };
        spans.push(Span::styled(format!("   m: {toggle}"), theme.text_muted));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_stats(frame: &mut Frame, area: Rect, app: &App) {
    let t = app.language().t();
    match &app.diff {
        LoadState::Ready(diff) => stats::render(frame, area, &diff.stats, &app.theme, t),
        LoadState::Loading => {
            frame.render_widget(
                Paragraph::new(Line::styled(t.loading, app.theme.text_muted)),
                area,
            );
        }
        LoadState::Unavailable => {
            frame.render_widget(
                Paragraph::new(Line::styled(t.unavailable, app.theme.warning)),
                area,
            );
        }
        LoadState::Idle => {}
    }
}

fn render_title_diff(frame: &mut Frame, area: Rect, app: &App, diff: &newsdiff_core::TitleDiff) {
    let t = app.language().t();
    let theme = &app.theme;
    let lines = vec![
        Line::styled(t.title_change, theme.header),
        Line::styled(diff.old.clone(), theme.diff_del),
        Line::styled(diff.new.clone(), theme.diff_add),
        Line::default(),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_main(frame: &mut Frame, area: Rect, app: &App, article: &ArticleDetail) {
    let t = app.language().t();
    if article.version_count <= 1 {
        frame.render_widget(
            Paragraph::new(Line::styled(t.no_changes_yet, app.theme.text_muted))
                .wrap(Wrap { trim: false }),
            area,
        );
        return;
    }

    let empty: &[ChangeOp] = &[];
    let ops = app
        .diff
        .ready()
        .map(|d| d.content_diff.as_slice())
        .unwrap_or(empty);

    match app.view_mode {
        ViewMode::History => render_timeline(frame, area, app, article),
        ViewMode::FullText => render_full_text(frame, area, app, article, ops),
        ViewMode::Inline => inline::render(frame, area, ops, app),
        ViewMode::SideBySide => {
            let segments = reconstruct_segments(ops);
            let (old_title, new_title) = match app.diff.ready() {
                Some(diff) => (
                    format!(
                        "V{} ({})",
                        diff.from_version.version_number,
                        format_time(diff.from_version.captured_at)
                    ),
                    format!(
                        "V{} ({})",
                        diff.to_version.version_number,
                        format_time(diff.to_version.captured_at)
                    ),
                ),
                None => (t.from_version.to_string(), t.to_version.to_string()),
            };
            side_by_side::render(frame, area, &segments, &old_title, &new_title, app);
        }
    }
}

fn render_timeline(frame: &mut Frame, area: Rect, app: &App, article: &ArticleDetail) {
    let t = app.language().t();
    let theme = &app.theme;
    let now = Utc::now();

    let mut lines = vec![Line::styled(t.version_history, theme.header)];
    for (index, version) in article.versions.iter().enumerate() {
        let mut spans = vec![Span::styled(
            format!("V{}", version.version_number),
            if index == 0 { theme.accent } else { theme.text_primary },
        )];
        if index == 0 {
            spans.push(Span::styled(format!(" {}", t.latest), theme.accent));
        }
        if app.from_version == Some(version.version_number) {
            spans.push(Span::styled(
                format!("  ◄ {}", t.from_version),
                theme.badge_del,
            ));
        }
        if app.to_version == Some(version.version_number) {
            spans.push(Span::styled(
                format!("  ◄ {}", t.to_version),
                theme.badge_add,
            ));
        }
        lines.push(Line::from(spans));
        lines.push(Line::styled(
            format!("   {}", version.title),
            theme.text_primary,
        ));
        lines.push(Line::styled(
            format!(
                "   {}  ·  {}  ·  {} {}",
                format_time(version.captured_at),
                relative_time(version.captured_at, now, app.language()),
                version.word_count,
                t.words
            ),
            theme.text_muted,
        ));
    }

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0));
    frame.render_widget(paragraph, area);
}

fn render_full_text(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    article: &ArticleDetail,
    ops: &[ChangeOp],
) {
    let (Some(from), Some(to)) = (app.from_version, app.to_version) else {
        return;
    };
    let (Some(old_version), Some(new_version)) = (article.version(from), article.version(to))
    else {
        return;
    };

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    highlighted::render(
        frame,
        columns[0],
        old_version,
        ops,
        DiffSide::Old,
        from < to,
        app,
    );
    highlighted::render(
        frame,
        columns[1],
        new_version,
        ops,
        DiffSide::New,
        to < from,
        app,
    );
}
