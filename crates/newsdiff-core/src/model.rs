//! Wire data model for the article-tracker API

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::change::ChangeOp;
use crate::stats::DiffStats;

/// A tracked news source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsSource {
    pub id: i64,
    pub name: String,
    pub base_url: String,
    pub is_active: bool,
    #[serde(default)]
    pub article_count: i64,
    #[serde(default)]
    pub country: Option<String>,
}

/// One captured snapshot of an article's title and content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionSummary {
    pub id: i64,
    pub version_number: u32,
    pub title: String,
    pub content: String,
    pub captured_at: DateTime<Utc>,
    pub word_count: u32,
}

/// An article as it appears in the paginated list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleListItem {
    pub id: i64,
    pub source_id: i64,
    pub url: String,
    pub title: String,
    pub is_active: bool,
    pub first_seen_at: DateTime<Utc>,
    #[serde(default)]
    pub last_modified_at: Option<DateTime<Utc>>,
    pub version_count: u32,
    #[serde(default)]
    pub latest_version: Option<VersionSummary>,
}

/// Full article detail with its version history, newest first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleDetail {
    pub id: i64,
    pub source_id: i64,
    pub url: String,
    pub title: String,
    pub is_active: bool,
    pub first_seen_at: DateTime<Utc>,
    #[serde(default)]
    pub last_modified_at: Option<DateTime<Utc>>,
    pub version_count: u32,
    #[serde(default)]
    pub source: Option<NewsSource>,
    /// Ordered descending by version number
    pub versions: Vec<VersionSummary>,
}

impl ArticleDetail {
    pub fn newest(&self) -> Option<&VersionSummary> {
        self.versions.first()
    }

    pub fn oldest(&self) -> Option<&VersionSummary> {
        self.versions.last()
    }

    pub fn version(&self, number: u32) -> Option<&VersionSummary> {
        self.versions.iter().find(|v| v.version_number == number)
    }

    /// Default comparison pair when none is selected: oldest against newest.
    /// None for articles with fewer than two versions.
    pub fn default_pair(&self) -> Option<(u32, u32)> {
        if self.versions.len() < 2 {
            return None;
        }
        Some((
            self.oldest()?.version_number,
            self.newest()?.version_number,
        ))
    }
}

/// One page of the article list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginatedArticles {
    pub total: i64,
    pub items: Vec<ArticleListItem>,
    pub limit: i64,
    pub offset: i64,
}

/// Version identification attached to a diff response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionInfo {
    pub id: i64,
    pub version_number: u32,
    pub title: String,
    pub captured_at: DateTime<Utc>,
    pub word_count: u32,
}

/// Old and new title when the title changed between the two versions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleDiff {
    pub old: String,
    pub new: String,
}

/// The full comparison result between two versions of one article
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiffResponse {
    pub article_id: i64,
    pub from_version: VersionInfo,
    pub to_version: VersionInfo,
    /// Absent, `null` and `{}` on the wire all mean "title unchanged"
    #[serde(default, deserialize_with = "title_diff_or_empty")]
    pub title_diff: Option<TitleDiff>,
    pub content_diff: Vec<ChangeOp>,
    pub stats: DiffStats,
}

impl DiffResponse {
    /// Missing or empty diff data means "no changes", not an error
    pub fn has_changes(&self) -> bool {
        !self.content_diff.is_empty() || self.title_diff.is_some()
    }
}

// The server sends an empty object for an unchanged title where older
// builds sent null; a bare {old,new} struct would reject the former.
fn title_diff_or_empty<'de, D>(de: D) -> Result<Option<TitleDiff>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct Partial {
        #[serde(default)]
        old: Option<String>,
        #[serde(default)]
        new: Option<String>,
    }

    Ok(match Option::<Partial>::deserialize(de)? {
        Some(Partial {
            old: Some(old),
            new: Some(new),
        }) => Some(TitleDiff { old, new }),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::change::ChangeKind;
    use crate::stats::compute_stats;

    fn diff_fixture(title_diff: &str) -> String {
        format!(
            r#"{{
                "article_id": 42,
                "from_version": {{
                    "id": 1, "version_number": 1, "title": "Regn i morgon",
                    "captured_at": "2026-03-01T08:00:00Z", "word_count": 5
                }},
                "to_version": {{
                    "id": 2, "version_number": 2, "title": "Snö i morgon",
                    "captured_at": "2026-03-01T10:30:00Z", "word_count": 5
                }},
                "title_diff": {title_diff},
                "content_diff": [
                    {{"type": "equal", "content": ["Idag"], "position": 0}},
                    {{"type": "delete", "content": ["regnar", "det"], "position": 1}},
                    {{"type": "insert", "content": ["snöar", "det"], "position": 1}},
                    {{"type": "equal", "content": ["i", "Stockholm"], "position": 3}}
                ],
                "stats": {{
                    "words_added": 2, "words_removed": 2,
                    "net_change": 0, "title_changed": true
                }}
            }}"#
        )
    }

    #[test]
    fn test_parse_diff_response() {
        let json = diff_fixture(r#"{"old": "Regn i morgon", "new": "Snö i morgon"}"#);
        let diff: DiffResponse = serde_json::from_str(&json).unwrap();

        assert_eq!(diff.article_id, 42);
        assert_eq!(diff.from_version.version_number, 1);
        assert_eq!(diff.to_version.version_number, 2);
        assert_eq!(diff.content_diff.len(), 4);
        assert_eq!(diff.content_diff[1].kind, ChangeKind::Delete);
        assert_eq!(diff.title_diff.as_ref().unwrap().new, "Snö i morgon");
        assert!(diff.has_changes());
    }

    #[test]
    fn test_title_diff_empty_object_means_unchanged() {
        let diff: DiffResponse = serde_json::from_str(&diff_fixture("{}")).unwrap();
        assert!(diff.title_diff.is_none());
    }

    #[test]
    fn test_title_diff_null_means_unchanged() {
        let diff: DiffResponse = serde_json::from_str(&diff_fixture("null")).unwrap();
        assert!(diff.title_diff.is_none());
    }

    #[test]
    fn test_wire_stats_match_recomputed() {
        let json = diff_fixture(r#"{"old": "Regn i morgon", "new": "Snö i morgon"}"#);
        let diff: DiffResponse = serde_json::from_str(&json).unwrap();
        let recomputed = compute_stats(
            &diff.content_diff,
            &diff.from_version.title,
            &diff.to_version.title,
        );
        assert_eq!(recomputed, diff.stats);
    }

    fn version(number: u32) -> VersionSummary {
        VersionSummary {
            id: number as i64,
            version_number: number,
            title: format!("Version {number}"),
            content: String::new(),
            captured_at: "2026-03-01T08:00:00Z".parse().unwrap(),
            word_count: 0,
        }
    }

    fn article(versions: Vec<VersionSummary>) -> ArticleDetail {
        ArticleDetail {
            id: 1,
            source_id: 1,
            url: "https://example.se/nyhet".into(),
            title: "Rubrik".into(),
            is_active: true,
            first_seen_at: "2026-03-01T08:00:00Z".parse().unwrap(),
            last_modified_at: None,
            version_count: versions.len() as u32,
            source: None,
            versions,
        }
    }

    #[test]
    fn test_default_pair_is_oldest_to_newest() {
        let detail = article(vec![version(3), version(2), version(1)]);
        assert_eq!(detail.default_pair(), Some((1, 3)));
        assert_eq!(detail.newest().unwrap().version_number, 3);
        assert_eq!(detail.oldest().unwrap().version_number, 1);
    }

    #[test]
    fn test_default_pair_needs_two_versions() {
        assert_eq!(article(vec![version(1)]).default_pair(), None);
        assert_eq!(article(vec![]).default_pair(), None);
    }

    #[test]
    fn test_version_lookup() {
        let detail = article(vec![version(2), version(1)]);
        assert_eq!(detail.version(2).unwrap().id, 2);
        assert!(detail.version(9).is_none());
    }
}
