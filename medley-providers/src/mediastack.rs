//! MediaStack v1 news connector.

use std::time::Duration;

use async_trait::async_trait;
use medley_core::connector::{ConnectorKey, MedleyConnector, NewsProvider};
use medley_core::{
    CallContext, Capability, ContentDetails, ContentItem, ContentKind, ContentPage, Credentials,
    MedleyError, NewsDetails, NewsQuery, Outcome, fixtures, placeholder_image,
};
use serde::Deserialize;

use crate::http::{Endpoint, live_or_fixture, parse_timestamp, required_query, send_json};

const NAME: &str = "medley-mediastack";
const DEFAULT_BASE_URL: &str = "https://api.mediastack.com/v1";

#[derive(Debug, Deserialize)]
struct NewsResponse {
    #[serde(default)]
    pagination: Option<Pagination>,
    #[serde(default)]
    data: Option<Vec<RawArticle>>,
    #[serde(default)]
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct Pagination {
    total: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawArticle {
    #[serde(default)]
    author: Option<String>,
    title: String,
    #[serde(default)]
    description: Option<String>,
    url: String,
    #[serde(default)]
    source: Option<String>,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    published_at: Option<String>,
}

fn map_article(a: RawArticle) -> ContentItem {
    let description = a.description.filter(|d| !d.trim().is_empty());
    ContentItem {
        id: a.url.clone(),
        title: a.title,
        description: description.clone(),
        image: a
            .image
            .filter(|i| !i.is_empty())
            .unwrap_or_else(|| placeholder_image(ContentKind::News).to_string()),
        url: a.url,
        published_at: parse_timestamp(a.published_at.as_deref()),
        source: a.source.unwrap_or_else(|| "MediaStack".to_string()),
        is_favorite: false,
        details: ContentDetails::News(NewsDetails {
            author: a.author.filter(|s| !s.trim().is_empty()),
            category: a.category.unwrap_or_else(|| "general".to_string()),
            content: description,
        }),
    }
}

/// News connector backed by the MediaStack `/news` endpoint.
///
/// Without an access key every call serves the bundled sample headlines.
#[derive(Debug, Clone)]
pub struct MediastackConnector {
    access_key: Option<String>,
    endpoint: Endpoint,
}

impl MediastackConnector {
    /// Static connector key for orchestrator priority configuration.
    pub const KEY: ConnectorKey = ConnectorKey::new(NAME);

    /// Connector using `access_key` against the public MediaStack endpoint.
    #[must_use]
    pub fn new(access_key: Option<String>) -> Self {
        Self {
            access_key,
            endpoint: Endpoint::new(DEFAULT_BASE_URL),
        }
    }

    /// Connector configured from `MEDIASTACK_API_KEY`.
    #[must_use]
    pub fn from_credentials(creds: &Credentials) -> Self {
        Self::new(creds.mediastack_api_key.clone())
    }

    /// Point the connector at another API root.
    #[must_use]
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.endpoint.set_base_url(base_url);
        self
    }

    /// Use a preconfigured HTTP client.
    #[must_use]
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.endpoint.client = client;
        self
    }

    /// Per-call deadline.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.endpoint.timeout = timeout;
        self
    }

    async fn fetch(
        &self,
        mut params: Vec<(&'static str, String)>,
        query: &NewsQuery,
    ) -> Result<ContentPage, MedleyError> {
        let key = self
            .access_key
            .as_deref()
            .ok_or_else(|| MedleyError::missing_credentials(NAME))?;
        let limit = query.page_size.clamp(1, 100);
        let offset = query.page.max(1).saturating_sub(1).saturating_mul(limit);
        params.push(("access_key", key.to_string()));
        params.push(("limit", limit.to_string()));
        params.push(("offset", offset.to_string()));
        let url = self.endpoint.url(NAME, "news", &params)?;
        let raw: NewsResponse = send_json(NAME, self.endpoint.client.get(url), false).await?;
        // MediaStack reports key and quota problems as 200 with an `error` body.
        if let Some(err) = raw.error {
            let msg = match (err.code, err.message) {
                (Some(c), Some(m)) => format!("{c}: {m}"),
                (c, m) => c.or(m).unwrap_or_else(|| "unknown error".to_string()),
            };
            return Err(MedleyError::connector(NAME, msg));
        }
        let data = raw
            .data
            .ok_or_else(|| MedleyError::decode(NAME, "response has no `data` field"))?;
        let total = raw.pagination.and_then(|p| p.total);
        Ok(ContentPage::new(data.into_iter().map(map_article).collect()).with_total(total))
    }
}

#[async_trait]
impl NewsProvider for MediastackConnector {
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "medley_providers::mediastack::top_headlines", skip(self, ctx))
    )]
    async fn top_headlines(&self, query: &NewsQuery, ctx: &CallContext) -> Outcome<ContentPage> {
        let country = query
            .country
            .clone()
            .unwrap_or_else(|| "us".to_string())
            .to_ascii_lowercase();
        let category = query
            .category
            .clone()
            .unwrap_or_else(|| "general".to_string());
        let params = vec![
            ("countries", country),
            ("categories", category),
            ("sort", "published_desc".to_string()),
        ];
        live_or_fixture(
            NAME,
            Capability::TopHeadlines,
            ctx,
            self.endpoint.timeout,
            "news",
            fixtures::news::articles,
            self.fetch(params, query),
        )
        .await
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "medley_providers::mediastack::search_news", skip(self, ctx))
    )]
    async fn search_news(&self, query: &NewsQuery, ctx: &CallContext) -> Outcome<ContentPage> {
        let keywords = match required_query(query.keywords.as_deref(), "news search") {
            Ok(k) => k.to_string(),
            Err(e) => return Outcome::Failure(e),
        };
        let mut params = vec![
            ("keywords", keywords),
            ("languages", "en".to_string()),
            ("sort", "published_desc".to_string()),
        ];
        if let Some(c) = &query.category {
            params.push(("categories", c.clone()));
        }
        live_or_fixture(
            NAME,
            Capability::SearchNews,
            ctx,
            self.endpoint.timeout,
            "search",
            fixtures::news::articles,
            self.fetch(params, query),
        )
        .await
    }
}

impl MedleyConnector for MediastackConnector {
    fn name(&self) -> &'static str {
        NAME
    }

    fn vendor(&self) -> &'static str {
        "MediaStack"
    }

    fn as_news_provider(&self) -> Option<&dyn NewsProvider> {
        Some(self as &dyn NewsProvider)
    }
}
