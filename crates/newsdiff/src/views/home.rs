//! Home screen: the filterable article list

use chrono::Utc;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use unicode_width::UnicodeWidthStr;

use crate::app::{App, InputMode, LoadState};
use crate::views::{fit_width, relative_time};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    render_filters(frame, chunks[0], app);
    render_list(frame, chunks[1], app);
}

fn render_filters(frame: &mut Frame, area: Rect, app: &App) {
    let t = app.language().t();
    let theme = &app.theme;

    let field = |label: &str, value: String, editing: bool| -> Vec<Span<'static>> {
        let mut spans = vec![Span::styled(format!("{label}: "), theme.text_muted)];
        let style = if editing { theme.accent } else { theme.text_primary };
        spans.push(Span::styled(value, style));
        if editing {
            spans.push(Span::styled("▌", theme.accent));
        }
        spans.push(Span::raw("   "));
        spans
    };

    let date_value = |committed: Option<chrono::NaiveDate>, mode: InputMode| -> String {
        if app.input_mode == mode {
            app.date_input.clone()
        } else {
            committed.map(|d| d.to_string()).unwrap_or_default()
        }
    };

    let mut first = Vec::new();
    first.extend(field(
        t.search_articles,
        app.filters.search.clone(),
        app.input_mode == InputMode::Search,
    ));
    first.extend(field(
        t.from_date,
        date_value(app.filters.date_from, InputMode::DateFrom),
        app.input_mode == InputMode::DateFrom,
    ));
    first.extend(field(
        t.to_date,
        date_value(app.filters.date_to, InputMode::DateTo),
        app.input_mode == InputMode::DateTo,
    ));

    let source_label = app
        .filters
        .source
        .clone()
        .unwrap_or_else(|| t.all_sources.to_string());
    let changes_mark = if app.filters.only_changes { "x" } else { " " };
    let shown = app.filtered_items().len();
    let total = app
        .articles
        .ready()
        .map(|page| page.total)
        .unwrap_or_default();
    let second = vec![
        Span::styled(source_label, app.theme.accent),
        Span::styled(
            format!("   [{changes_mark}] {}", t.only_changes),
            theme.text_primary,
        ),
        Span::styled(
            format!("   {} {shown} {} {total} {}", t.showing, t.of, t.articles),
            theme.text_muted,
        ),
    ];

    let lines = vec![
        Line::from(first),
        Line::from(second),
        Line::styled(t.latest_changes, app.theme.header),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_list(frame: &mut Frame, area: Rect, app: &App) {
    let t = app.language().t();
    let theme = &app.theme;

    match &app.articles {
        LoadState::Idle | LoadState::Loading => {
            frame.render_widget(Paragraph::new(Line::styled(t.loading, theme.text_muted)), area);
            return;
        }
        LoadState::Unavailable => {
            frame.render_widget(
                Paragraph::new(Line::styled(t.unavailable, theme.warning)),
                area,
            );
            return;
        }
        LoadState::Ready(_) => {}
    }

    let items = app.filtered_items();
    if items.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::styled(t.no_articles_found, theme.text_muted)),
            area,
        );
        return;
    }

    let now = Utc::now();
    let height = area.height as usize;
    let start = (app.selected + 1).saturating_sub(height);
    let width = area.width as usize;

    let lines: Vec<Line<'static>> = items
        .iter()
        .enumerate()
        .skip(start)
        .take(height)
        .map(|(index, item)| {
            let source_name = app
                .sources
                .ready()
                .and_then(|sources| sources.iter().find(|s| s.id == item.source_id))
                .map(|s| s.name.clone())
                .unwrap_or_default();
            let seen = relative_time(item.first_seen_at, now, app.language());
            let modified = item
                .last_modified_at
                .map(|at| {
                    format!(
                        "  {} {}",
                        t.last_modified,
                        relative_time(at, now, app.language())
                    )
                })
                .unwrap_or_default();
            let meta = format!(
                "  {source_name}  V{}  {} {seen}{modified}",
                item.version_count, t.first_seen
            );
            let title_width = width.saturating_sub(meta.width() + 2).max(10);
            if index == app.selected {
                Line::styled(
                    format!("▶ {}{meta}", fit_width(&item.title, title_width)),
                    theme.selected,
                )
            } else {
                Line::from(vec![
                    Span::styled(
                        format!("  {}", fit_width(&item.title, title_width)),
                        theme.text_primary,
                    ),
                    Span::styled(meta, theme.text_muted),
                ])
            }
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}
