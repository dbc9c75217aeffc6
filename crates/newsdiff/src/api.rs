//! HTTP client for the article-tracker API
//!
//! Four read-only endpoints; the client owns no wire format beyond the
//! shapes in `newsdiff_core::model`.

use newsdiff_core::{ArticleDetail, DiffResponse, NewsSource, PaginatedArticles};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {0}")]
    Status(reqwest::StatusCode),
}

/// Server-side filters for the article list; search and date range are
/// applied client-side over the fetched page
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleQuery {
    pub source: Option<String>,
    pub has_changes: bool,
    pub limit: i64,
    pub offset: i64,
}

impl Default for ArticleQuery {
    fn default() -> Self {
        Self {
            source: None,
            has_changes: true,
            limit: 50,
            offset: 0,
        }
    }
}

#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub async fn articles(&self, query: &ArticleQuery) -> Result<PaginatedArticles, ApiError> {
        let mut request = self
            .http
            .get(format!("{}/articles", self.base_url))
            .query(&[("limit", query.limit), ("offset", query.offset)]);
        if let Some(source) = &query.source {
            request = request.query(&[("source", source.as_str())]);
        }
        if query.has_changes {
            request = request.query(&[("has_changes", "true")]);
        }
        self.fetch(request).await
    }

    pub async fn article(&self, id: i64) -> Result<ArticleDetail, ApiError> {
        self.fetch(self.http.get(format!("{}/articles/{id}", self.base_url)))
            .await
    }

    pub async fn diff(
        &self,
        article_id: i64,
        from_version: u32,
        to_version: u32,
    ) -> Result<DiffResponse, ApiError> {
        let request = self
            .http
            .get(format!("{}/articles/{article_id}/diff", self.base_url))
            .query(&[("from_version", from_version), ("to_version", to_version)]);
        self.fetch(request).await
    }

    pub async fn sources(&self) -> Result<Vec<NewsSource>, ApiError> {
        self.fetch(self.http.get(format!("{}/sources", self.base_url)))
            .await
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = request.send().await?;
        debug!(url = %response.url(), status = %response.status(), "api response");
        if !response.status().is_success() {
            return Err(ApiError::Status(response.status()));
        }
        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_query_shows_changed_articles() {
        let query = ArticleQuery::default();
        assert!(query.has_changes);
        assert_eq!(query.limit, 50);
        assert_eq!(query.offset, 0);
        assert!(query.source.is_none());
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = ApiClient::new("http://localhost:8000/api/v1/");
        assert_eq!(client.base_url, "http://localhost:8000/api/v1");
    }
}
