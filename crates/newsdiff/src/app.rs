//! Application state and event handling
//!
//! All fetched data lives in immutable snapshot slots that are replaced
//! wholesale when a response arrives. Every request carries a per-slot id;
//! a response whose id is no longer the latest issued for its slot is
//! discarded, so the newest request always wins regardless of arrival
//! order. A failed fetch degrades its slot to `Unavailable` and never
//! affects the others.

use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use newsdiff_core::{ArticleDetail, ArticleListItem, DiffResponse, NewsSource, PaginatedArticles};
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::api::{ApiClient, ApiError, ArticleQuery};
use crate::config::Settings;
use crate::i18n::Language;
use crate::theme::Theme;

/// Lifecycle of one fetch slot
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadState<T> {
    #[default]
    Idle,
    Loading,
    Ready(T),
    /// The fetch failed; the view shows a local "unavailable" state
    Unavailable,
}

impl<T> LoadState<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            LoadState::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, LoadState::Unavailable)
    }
}

/// Which screen is on display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Article,
}

/// How the article screen's main area is displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// Version-history timeline
    History,
    /// Both versions' full text with in-place marks
    FullText,
    /// One row per change, in script order
    Inline,
    /// Aligned columns built from reconstructed segments
    SideBySide,
}

impl ViewMode {
    pub fn next(self) -> Self {
        match self {
            ViewMode::History => ViewMode::FullText,
            ViewMode::FullText => ViewMode::Inline,
            ViewMode::Inline => ViewMode::SideBySide,
            ViewMode::SideBySide => ViewMode::History,
        }
    }
}

/// Text entry target on the home screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Search,
    DateFrom,
    DateTo,
}

/// Fetch results delivered to the event loop, tagged with the request id
/// they answer
#[derive(Debug)]
pub enum Fetched {
    Articles(u64, Result<PaginatedArticles, ApiError>),
    Sources(u64, Result<Vec<NewsSource>, ApiError>),
    Article(u64, Result<ArticleDetail, ApiError>),
    Diff(u64, Result<DiffResponse, ApiError>),
}

/// Filters over the article list. Source and the changed-only toggle are
/// query parameters; search text and the date range narrow the fetched
/// page client-side.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filters {
    pub search: String,
    pub source: Option<String>,
    pub only_changes: bool,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

impl Filters {
    pub fn matches(&self, item: &ArticleListItem) -> bool {
        if !self.search.is_empty()
            && !item
                .title
                .to_lowercase()
                .contains(&self.search.to_lowercase())
        {
            return false;
        }
        let seen = item.first_seen_at.date_naive();
        if let Some(from) = self.date_from {
            if seen < from {
                return false;
            }
        }
        if let Some(to) = self.date_to {
            if seen > to {
                return false;
            }
        }
        true
    }

    pub fn is_active(&self) -> bool {
        !self.search.is_empty()
            || self.source.is_some()
            || self.date_from.is_some()
            || self.date_to.is_some()
    }
}

pub struct App {
    api: ApiClient,
    tx: mpsc::UnboundedSender<Fetched>,
    pub settings: Settings,
    pub theme: Theme,
    pub route: Route,
    pub should_quit: bool,

    // Home screen
    pub filters: Filters,
    pub input_mode: InputMode,
    pub date_input: String,
    pub articles: LoadState<PaginatedArticles>,
    pub sources: LoadState<Vec<NewsSource>>,
    pub selected: usize,

    // Article screen
    pub article: LoadState<ArticleDetail>,
    pub diff: LoadState<DiffResponse>,
    pub from_version: Option<u32>,
    pub to_version: Option<u32>,
    pub view_mode: ViewMode,
    pub show_highlights: bool,
    pub expanded: bool,
    pub scroll: u16,

    // Request ids, bumped on every issue; stale responses are dropped
    articles_req: u64,
    sources_req: u64,
    article_req: u64,
    diff_req: u64,
}

impl App {
    pub fn new(api: ApiClient, tx: mpsc::UnboundedSender<Fetched>, settings: Settings) -> Self {
        Self {
            api,
            tx,
            theme: Theme::for_mode(settings.theme),
            settings,
            route: Route::Home,
            should_quit: false,
            filters: Filters {
                only_changes: true,
                ..Filters::default()
            },
            input_mode: InputMode::Normal,
            date_input: String::new(),
            articles: LoadState::Idle,
            sources: LoadState::Idle,
            selected: 0,
            article: LoadState::Idle,
            diff: LoadState::Idle,
            from_version: None,
            to_version: None,
            view_mode: ViewMode::FullText,
            show_highlights: true,
            expanded: false,
            scroll: 0,
            articles_req: 0,
            sources_req: 0,
            article_req: 0,
            diff_req: 0,
        }
    }

    pub fn language(&self) -> Language {
        self.settings.language
    }

    // ---- fetch issuance ------------------------------------------------

    pub fn fetch_articles(&mut self) {
        self.articles_req += 1;
        self.articles = LoadState::Loading;
        self.selected = 0;
        let id = self.articles_req;
        let api = self.api.clone();
        let tx = self.tx.clone();
        let query = ArticleQuery {
            source: self.filters.source.clone(),
            has_changes: self.filters.only_changes,
            ..ArticleQuery::default()
        };
        tokio::spawn(async move {
            let result = api.articles(&query).await;
            let _ = tx.send(Fetched::Articles(id, result));
        });
    }

    pub fn fetch_sources(&mut self) {
        self.sources_req += 1;
        self.sources = LoadState::Loading;
        let id = self.sources_req;
        let api = self.api.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = api.sources().await;
            let _ = tx.send(Fetched::Sources(id, result));
        });
    }

    pub fn open_article(&mut self, article_id: i64) {
        self.route = Route::Article;
        self.article_req += 1;
        self.article = LoadState::Loading;
        self.diff = LoadState::Idle;
        self.from_version = None;
        self.to_version = None;
        self.expanded = false;
        self.scroll = 0;
        let id = self.article_req;
        let api = self.api.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = api.article(article_id).await;
            let _ = tx.send(Fetched::Article(id, result));
        });
    }

    /// Issues a diff fetch for the currently selected version pair.
    /// Does nothing until both ends of the pair are resolved.
    pub fn fetch_diff(&mut self) {
        let Some(article_id) = self.article.ready().map(|article| article.id) else {
            return;
        };
        let (Some(from), Some(to)) = (self.from_version, self.to_version) else {
            return;
        };
        self.diff_req += 1;
        self.diff = LoadState::Loading;
        let id = self.diff_req;
        let api = self.api.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = api.diff(article_id, from, to).await;
            let _ = tx.send(Fetched::Diff(id, result));
        });
    }

    // ---- fetch completion ----------------------------------------------

    pub fn on_fetched(&mut self, msg: Fetched) {
        match msg {
            Fetched::Articles(id, result) => {
                if id != self.articles_req {
                    debug!(id, latest = self.articles_req, "dropping stale article list");
                    return;
                }
                self.articles = Self::settle("articles", result);
            }
            Fetched::Sources(id, result) => {
                if id != self.sources_req {
                    debug!(id, latest = self.sources_req, "dropping stale source list");
                    return;
                }
                self.sources = Self::settle("sources", result);
            }
            Fetched::Article(id, result) => {
                if id != self.article_req {
                    debug!(id, latest = self.article_req, "dropping stale article");
                    return;
                }
                self.article = Self::settle("article", result);
                if self.from_version.is_none() {
                    if let Some(pair) = self.article.ready().and_then(ArticleDetail::default_pair)
                    {
                        self.from_version = Some(pair.0);
                        self.to_version = Some(pair.1);
                        self.fetch_diff();
                    }
                }
            }
            Fetched::Diff(id, result) => {
                if id != self.diff_req {
                    debug!(id, latest = self.diff_req, "dropping stale diff");
                    return;
                }
                self.diff = Self::settle("diff", result);
            }
        }
    }

    fn settle<T>(slot: &str, result: Result<T, ApiError>) -> LoadState<T> {
        match result {
            Ok(value) => LoadState::Ready(value),
            Err(err) => {
                warn!(slot, %err, "fetch failed");
                LoadState::Unavailable
            }
        }
    }

    // ---- derived view data ---------------------------------------------

    /// Article rows surviving the client-side filters, in list order
    pub fn filtered_items(&self) -> Vec<&ArticleListItem> {
        self.articles
            .ready()
            .map(|page| {
                page.items
                    .iter()
                    .filter(|item| self.filters.matches(item))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn selected_item(&self) -> Option<&ArticleListItem> {
        self.filtered_items().get(self.selected).copied()
    }

    // ---- input ----------------------------------------------------------

    pub fn on_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }
        if self.input_mode != InputMode::Normal {
            self.on_edit_key(key);
            return;
        }
        match self.route {
            Route::Home => self.on_home_key(key),
            Route::Article => self.on_article_key(key),
        }
    }

    fn on_edit_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.date_input.clear();
                self.input_mode = InputMode::Normal;
            }
            KeyCode::Enter => {
                if self.input_mode != InputMode::Search {
                    self.commit_date_input();
                }
                self.input_mode = InputMode::Normal;
            }
            KeyCode::Backspace => {
                if self.input_mode == InputMode::Search {
                    self.filters.search.pop();
                    self.selected = 0;
                } else {
                    self.date_input.pop();
                }
            }
            KeyCode::Char(ch) => {
                if self.input_mode == InputMode::Search {
                    self.filters.search.push(ch);
                    self.selected = 0;
                } else {
                    self.date_input.push(ch);
                }
            }
            _ => {}
        }
    }

    fn commit_date_input(&mut self) {
        let parsed = match NaiveDate::parse_from_str(self.date_input.trim(), "%Y-%m-%d") {
            Ok(date) => Some(date),
            Err(_) => {
                debug!(input = %self.date_input, "ignoring unparseable date filter");
                None
            }
        };
        match self.input_mode {
            InputMode::DateFrom => self.filters.date_from = parsed,
            InputMode::DateTo => self.filters.date_to = parsed,
            _ => {}
        }
        self.date_input.clear();
        self.selected = 0;
    }

    fn on_home_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Down | KeyCode::Char('j') => {
                let count = self.filtered_items().len();
                if count > 0 {
                    self.selected = (self.selected + 1).min(count - 1);
                }
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Enter => {
                if let Some(item) = self.selected_item() {
                    let id = item.id;
                    self.open_article(id);
                }
            }
            KeyCode::Char('/') => self.input_mode = InputMode::Search,
            KeyCode::Char('f') => self.input_mode = InputMode::DateFrom,
            KeyCode::Char('t') => self.input_mode = InputMode::DateTo,
            KeyCode::Char('c') => {
                self.filters.only_changes = !self.filters.only_changes;
                self.fetch_articles();
            }
            KeyCode::Char('s') => {
                self.cycle_source();
                self.fetch_articles();
            }
            KeyCode::Char('x') => {
                let only_changes = self.filters.only_changes;
                let refetch = self.filters.source.is_some();
                self.filters = Filters {
                    only_changes,
                    ..Filters::default()
                };
                self.selected = 0;
                if refetch {
                    self.fetch_articles();
                }
            }
            KeyCode::Char('r') => {
                self.fetch_articles();
                self.fetch_sources();
            }
            KeyCode::Char('l') => self.toggle_language(),
            KeyCode::Char('d') => self.toggle_theme(),
            _ => {}
        }
    }

    fn on_article_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Esc | KeyCode::Backspace => {
                self.route = Route::Home;
            }
            KeyCode::Tab => {
                self.view_mode = self.view_mode.next();
                self.scroll = 0;
            }
            KeyCode::Down | KeyCode::Char('j') => self.scroll = self.scroll.saturating_add(1),
            KeyCode::Up | KeyCode::Char('k') => self.scroll = self.scroll.saturating_sub(1),
            KeyCode::PageDown => self.scroll = self.scroll.saturating_add(10),
            KeyCode::PageUp => self.scroll = self.scroll.saturating_sub(10),
            KeyCode::Char('f') => self.cycle_version(true),
            KeyCode::Char('t') => self.cycle_version(false),
            KeyCode::Char('m') => self.show_highlights = !self.show_highlights,
            KeyCode::Char('e') => self.expanded = !self.expanded,
            KeyCode::Char('r') => self.fetch_diff(),
            KeyCode::Char('l') => self.toggle_language(),
            KeyCode::Char('d') => self.toggle_theme(),
            _ => {}
        }
    }

    fn cycle_source(&mut self) {
        let Some(sources) = self.sources.ready() else {
            return;
        };
        if sources.is_empty() {
            return;
        }
        let names: Vec<&str> = sources.iter().map(|s| s.name.as_str()).collect();
        self.filters.source = match &self.filters.source {
            None => Some(names[0].to_string()),
            Some(current) => match names.iter().position(|&n| n == current.as_str()) {
                Some(index) if index + 1 < names.len() => Some(names[index + 1].to_string()),
                _ => None,
            },
        };
    }

    /// Advances one end of the comparison pair through the version list
    /// (newest first, wrapping) and refetches the diff.
    fn cycle_version(&mut self, from_side: bool) {
        let Some(article) = self.article.ready() else {
            return;
        };
        let numbers: Vec<u32> = article
            .versions
            .iter()
            .map(|v| v.version_number)
            .collect();
        if numbers.is_empty() {
            return;
        }
        let slot = if from_side {
            &mut self.from_version
        } else {
            &mut self.to_version
        };
        let next = match slot.and_then(|current| numbers.iter().position(|&n| n == current)) {
            Some(index) => numbers[(index + 1) % numbers.len()],
            None => numbers[0],
        };
        *slot = Some(next);
        self.fetch_diff();
    }

    fn toggle_language(&mut self) {
        self.settings.language = self.settings.language.toggled();
        self.persist_settings();
    }

    fn toggle_theme(&mut self) {
        self.settings.theme = self.settings.theme.toggled();
        self.theme = Theme::for_mode(self.settings.theme);
        self.persist_settings();
    }

    fn persist_settings(&self) {
        if let Err(err) = self.settings.save() {
            warn!(%err, "could not persist settings");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: &str, first_seen: &str) -> ArticleListItem {
        ArticleListItem {
            id: 1,
            source_id: 1,
            url: "https://example.se/nyhet".into(),
            title: title.into(),
            is_active: true,
            first_seen_at: first_seen.parse().unwrap(),
            last_modified_at: None,
            version_count: 2,
            latest_version: None,
        }
    }

    fn app() -> (App, mpsc::UnboundedReceiver<Fetched>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let app = App::new(ApiClient::new("http://localhost:8000"), tx, Settings::default());
        (app, rx)
    }

    #[test]
    fn test_search_filter_is_case_insensitive() {
        let filters = Filters {
            search: "regn".into(),
            ..Filters::default()
        };
        assert!(filters.matches(&item("Regn i morgon", "2026-03-01T08:00:00Z")));
        assert!(!filters.matches(&item("Snö i morgon", "2026-03-01T08:00:00Z")));
    }

    #[test]
    fn test_date_range_filter_is_inclusive() {
        let filters = Filters {
            date_from: Some(NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()),
            date_to: Some(NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()),
            ..Filters::default()
        };
        assert!(filters.matches(&item("a", "2026-03-01T00:10:00Z")));
        assert!(filters.matches(&item("a", "2026-03-02T23:50:00Z")));
        assert!(!filters.matches(&item("a", "2026-02-28T12:00:00Z")));
        assert!(!filters.matches(&item("a", "2026-03-03T00:10:00Z")));
    }

    #[tokio::test]
    async fn test_stale_response_is_discarded() {
        let (mut app, _rx) = app();
        app.articles_req = 2;
        let page = PaginatedArticles {
            total: 1,
            items: vec![item("gammal", "2026-03-01T08:00:00Z")],
            limit: 50,
            offset: 0,
        };
        app.on_fetched(Fetched::Articles(1, Ok(page)));
        assert_eq!(app.articles, LoadState::Idle);

        let page = PaginatedArticles {
            total: 0,
            items: vec![],
            limit: 50,
            offset: 0,
        };
        app.on_fetched(Fetched::Articles(2, Ok(page)));
        assert!(app.articles.ready().is_some());
    }

    #[tokio::test]
    async fn test_failed_fetch_degrades_to_unavailable() {
        let (mut app, _rx) = app();
        app.diff_req = 1;
        app.on_fetched(Fetched::Diff(
            1,
            Err(ApiError::Status(reqwest::StatusCode::INTERNAL_SERVER_ERROR)),
        ));
        assert!(app.diff.is_unavailable());
        assert!(!app.should_quit);
    }

    #[test]
    fn test_view_mode_cycles_through_all() {
        let mut mode = ViewMode::History;
        for _ in 0..4 {
            mode = mode.next();
        }
        assert_eq!(mode, ViewMode::History);
    }

    #[test]
    fn test_filters_default_inactive() {
        assert!(!Filters::default().is_active());
        let with_search = Filters {
            search: "x".into(),
            ..Filters::default()
        };
        assert!(with_search.is_active());
    }

    #[tokio::test]
    async fn test_ctrl_c_quits_from_any_mode() {
        let (mut app, _rx) = app();
        app.input_mode = InputMode::Search;
        app.on_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[tokio::test]
    async fn test_search_edits_live() {
        let (mut app, _rx) = app();
        app.on_key(KeyEvent::new(KeyCode::Char('/'), KeyModifiers::NONE));
        assert_eq!(app.input_mode, InputMode::Search);
        app.on_key(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE));
        app.on_key(KeyEvent::new(KeyCode::Char('e'), KeyModifiers::NONE));
        assert_eq!(app.filters.search, "re");
        app.on_key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.filters.search, "re");
    }

    #[tokio::test]
    async fn test_date_input_commits_on_enter() {
        let (mut app, _rx) = app();
        app.on_key(KeyEvent::new(KeyCode::Char('f'), KeyModifiers::NONE));
        for ch in "2026-03-01".chars() {
            app.on_key(KeyEvent::new(KeyCode::Char(ch), KeyModifiers::NONE));
        }
        app.on_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        assert_eq!(
            app.filters.date_from,
            Some(NaiveDate::from_ymd_opt(2026, 3, 1).unwrap())
        );
    }

    #[tokio::test]
    async fn test_bad_date_input_clears_filter() {
        let (mut app, _rx) = app();
        app.filters.date_to = Some(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
        app.on_key(KeyEvent::new(KeyCode::Char('t'), KeyModifiers::NONE));
        app.on_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE));
        app.on_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        assert_eq!(app.filters.date_to, None);
    }
}
