//! UI strings, Swedish first

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Interface language; Swedish is the default, matching the tracked sources
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Sv,
    En,
}

impl Language {
    pub fn toggled(self) -> Self {
        match self {
            Language::Sv => Language::En,
            Language::En => Language::Sv,
        }
    }

    pub fn t(self) -> &'static Translations {
        match self {
            Language::Sv => &SV,
            Language::En => &EN,
        }
    }
}

/// Every user-visible string in the client
pub struct Translations {
    pub app_title: &'static str,
    pub app_subtitle: &'static str,

    pub latest_changes: &'static str,
    pub search_articles: &'static str,
    pub all_sources: &'static str,
    pub only_changes: &'static str,
    pub from_date: &'static str,
    pub to_date: &'static str,
    pub showing: &'static str,
    pub of: &'static str,
    pub articles: &'static str,
    pub no_articles_found: &'static str,

    pub first_seen: &'static str,
    pub last_modified: &'static str,
    pub versions: &'static str,
    pub words: &'static str,

    pub version_history: &'static str,
    pub latest: &'static str,
    pub compare_versions: &'static str,
    pub from_version: &'static str,
    pub to_version: &'static str,
    pub article_text: &'static str,
    pub title_change: &'static str,
    pub content_changes: &'static str,
    pub no_changes_yet: &'static str,
    pub no_difference: &'static str,

    pub removed: &'static str,
    pub added: &'static str,
    pub older_version: &'static str,
    pub newer_version: &'static str,
    pub hide_changes: &'static str,
    pub show_changes: &'static str,
    pub read_full: &'static str,
    pub show_less: &'static str,

    pub statistics: &'static str,
    pub words_added: &'static str,
    pub words_removed: &'static str,
    pub net_change: &'static str,
    pub title_changed: &'static str,

    pub inline_view: &'static str,
    pub side_by_side_view: &'static str,
    pub full_text_view: &'static str,

    pub loading: &'static str,
    pub unavailable: &'static str,

    pub hint_home: &'static str,
    pub hint_article: &'static str,
    pub hint_edit: &'static str,
}

pub static SV: Translations = Translations {
    app_title: "NewsDiff",
    app_subtitle: "Spåra nyhetsändringar",

    latest_changes: "Senaste nyhetsändringar",
    search_articles: "Sök artiklar",
    all_sources: "Alla källor",
    only_changes: "Visa endast ändrade",
    from_date: "Från datum",
    to_date: "Till datum",
    showing: "Visar",
    of: "av",
    articles: "artiklar",
    no_articles_found: "Inga artiklar hittades",

    first_seen: "Först upptäckt",
    last_modified: "Senast ändrad",
    versions: "versioner",
    words: "ord",

    version_history: "Versionshistorik",
    latest: "Senaste",
    compare_versions: "Jämför versioner",
    from_version: "Från version",
    to_version: "Till version",
    article_text: "Artikeltext med ändringar markerade",
    title_change: "Titeländring",
    content_changes: "Innehållsändringar",
    no_changes_yet: "Denna artikel har ännu inte ändrats sedan den först upptäcktes.",
    no_difference: "Ingen skillnad upptäckt",

    removed: "Borttaget",
    added: "Tillagt",
    older_version: "Äldre version",
    newer_version: "Nyare version",
    hide_changes: "Dölj ändringar",
    show_changes: "Visa ändringar",
    read_full: "Läs hela artikeln",
    show_less: "Visa mindre",

    statistics: "Statistik",
    words_added: "Ord tillagda",
    words_removed: "Ord borttagna",
    net_change: "Nettoförändring",
    title_changed: "Titel ändrad",

    inline_view: "Inline",
    side_by_side_view: "Sida vid sida",
    full_text_view: "Hela texten",

    loading: "Laddar...",
    unavailable: "Kunde inte ladda",

    hint_home: "↑↓ välj  ⏎ öppna  / sök  f/t datum  c ändrade  s källa  x rensa  r uppdatera  l språk  d tema  q avsluta",
    hint_article: "Tab vy  f/t version  m markeringar  e expandera  j/k rulla  Esc tillbaka  q avsluta",
    hint_edit: "skriv  ⏎ klar  Esc avbryt",
};

pub static EN: Translations = Translations {
    app_title: "NewsDiff",
    app_subtitle: "Track news changes",

    latest_changes: "Latest news changes",
    search_articles: "Search articles",
    all_sources: "All sources",
    only_changes: "Only changed articles",
    from_date: "From date",
    to_date: "To date",
    showing: "Showing",
    of: "of",
    articles: "articles",
    no_articles_found: "No articles found",

    first_seen: "First seen",
    last_modified: "Last modified",
    versions: "versions",
    words: "words",

    version_history: "Version history",
    latest: "Latest",
    compare_versions: "Compare versions",
    from_version: "From version",
    to_version: "To version",
    article_text: "Article text with changes marked",
    title_change: "Title change",
    content_changes: "Content changes",
    no_changes_yet: "This article has not changed since it was first seen.",
    no_difference: "No difference detected",

    removed: "Removed",
    added: "Added",
    older_version: "Older version",
    newer_version: "Newer version",
    hide_changes: "Hide changes",
    show_changes: "Show changes",
    read_full: "Read full article",
    show_less: "Show less",

    statistics: "Statistics",
    words_added: "Words added",
    words_removed: "Words removed",
    net_change: "Net change",
    title_changed: "Title changed",

    inline_view: "Inline",
    side_by_side_view: "Side by side",
    full_text_view: "Full text",

    loading: "Loading...",
    unavailable: "Could not load",

    hint_home: "↑↓ select  ⏎ open  / search  f/t date  c changed  s source  x clear  r refresh  l language  d theme  q quit",
    hint_article: "Tab view  f/t version  m marks  e expand  j/k scroll  Esc back  q quit",
    hint_edit: "type  ⏎ done  Esc cancel",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_language_is_swedish() {
        assert_eq!(Language::default(), Language::Sv);
        assert_eq!(Language::default().t().no_difference, "Ingen skillnad upptäckt");
    }

    #[test]
    fn test_toggle_round_trips() {
        assert_eq!(Language::Sv.toggled(), Language::En);
        assert_eq!(Language::Sv.toggled().toggled(), Language::Sv);
    }

    #[test]
    fn test_serde_uses_lowercase() {
        let json = serde_json::to_string(&Language::En).unwrap();
        assert_eq!(json, r#""en""#);
    }
}
