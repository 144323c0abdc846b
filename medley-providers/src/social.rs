//! Connector for the dashboard's own social backend.
//!
//! Every call is user-scoped: without a session token the connector reports
//! `AuthRequired` instead of serving sample data, and a 401 from the backend
//! is reported the same way.

use std::time::Duration;

use async_trait::async_trait;
use medley_core::connector::{ConnectorKey, MedleyConnector, SocialProvider};
use medley_core::{
    CallContext, Capability, ContentDetails, ContentItem, ContentKind, ContentPage, Credentials,
    MedleyError, Outcome, SocialDetails, SocialQuery, fixtures, placeholder_image,
};
use serde::Deserialize;

use crate::http::{Endpoint, live_or_fixture, parse_timestamp, required_query, send_json, truncate};

const NAME: &str = "medley-social";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PostsResponse {
    #[serde(default)]
    data: Vec<RawPost>,
    #[serde(default)]
    total: Option<u64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPost {
    id: String,
    platform: String,
    username: String,
    content: String,
    #[serde(default)]
    image_url: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    likes: u64,
    #[serde(default)]
    comments: u64,
    #[serde(default)]
    hashtags: Vec<String>,
    #[serde(default)]
    created_at: Option<String>,
}

fn map_post(p: RawPost, base_url: &str) -> ContentItem {
    let url = p
        .url
        .unwrap_or_else(|| format!("{base_url}/posts/{}", p.id));
    ContentItem {
        title: format!("@{}", p.username),
        description: Some(p.content),
        image: p
            .image_url
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| placeholder_image(ContentKind::Social).to_string()),
        url,
        published_at: parse_timestamp(p.created_at.as_deref()),
        source: p.platform.clone(),
        is_favorite: false,
        id: p.id,
        details: ContentDetails::Social(SocialDetails {
            platform: p.platform,
            username: p.username,
            likes: p.likes,
            comments: p.comments,
            hashtags: p
                .hashtags
                .into_iter()
                .map(|h| h.trim_start_matches('#').to_string())
                .collect(),
        }),
    }
}

/// Social connector for the dashboard backend that proxies linked accounts.
#[derive(Debug, Clone)]
pub struct SocialPlatformConnector {
    endpoint: Option<Endpoint>,
    timeout: Duration,
}

impl SocialPlatformConnector {
    /// Static connector key for orchestrator priority configuration.
    pub const KEY: ConnectorKey = ConnectorKey::new(NAME);

    /// Connector for the backend at `base_url`; `None` serves sample posts.
    #[must_use]
    pub fn new(base_url: Option<&str>) -> Self {
        Self {
            endpoint: base_url.map(Endpoint::new),
            timeout: crate::http::DEFAULT_TIMEOUT,
        }
    }

    /// Connector configured from `SOCIAL_API_BASE_URL`.
    #[must_use]
    pub fn from_credentials(creds: &Credentials) -> Self {
        Self::new(creds.social_api_base_url.as_deref())
    }

    /// Point the connector at another backend.
    #[must_use]
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        match self.endpoint.as_mut() {
            Some(ep) => ep.set_base_url(base_url),
            None => self.endpoint = Some(Endpoint::new(base_url)),
        }
        self
    }

    /// Use a preconfigured HTTP client.
    #[must_use]
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        if let Some(ep) = self.endpoint.as_mut() {
            ep.client = client;
        }
        self
    }

    /// Per-call deadline.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    async fn fetch(
        &self,
        path: &str,
        mut params: Vec<(&'static str, String)>,
        limit: u32,
        session: &str,
    ) -> Result<ContentPage, MedleyError> {
        let ep = self
            .endpoint
            .as_ref()
            .ok_or_else(|| MedleyError::missing_credentials(NAME))?;
        params.push(("limit", limit.to_string()));
        let url = ep.url(NAME, path, &params)?;
        let raw: PostsResponse =
            send_json(NAME, ep.client.get(url).bearer_auth(session), true).await?;
        let items = raw
            .data
            .into_iter()
            .map(|p| map_post(p, &ep.base_url))
            .collect();
        Ok(ContentPage::new(truncate(items, Some(limit))).with_total(raw.total))
    }

    async fn serve(
        &self,
        capability: Capability,
        prefix: &str,
        path: &str,
        params: Vec<(&'static str, String)>,
        query: &SocialQuery,
        ctx: &CallContext,
    ) -> Outcome<ContentPage> {
        let Some(session) = ctx.session_token() else {
            return Outcome::Failure(MedleyError::auth_required(NAME));
        };
        live_or_fixture(
            NAME,
            capability,
            ctx,
            self.timeout,
            prefix,
            fixtures::social::posts,
            self.fetch(path, params, query.limit, session),
        )
        .await
    }
}

#[async_trait]
impl SocialProvider for SocialPlatformConnector {
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "medley_providers::social::feed_posts", skip(self, ctx))
    )]
    async fn feed_posts(&self, query: &SocialQuery, ctx: &CallContext) -> Outcome<ContentPage> {
        self.serve(Capability::FeedPosts, "social", "feed", Vec::new(), query, ctx)
            .await
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "medley_providers::social::trending_posts", skip(self, ctx))
    )]
    async fn trending_posts(
        &self,
        query: &SocialQuery,
        ctx: &CallContext,
    ) -> Outcome<ContentPage> {
        let mut params = Vec::new();
        if let Some(tag) = query.hashtag.as_deref() {
            params.push(("hashtag", tag.trim_start_matches('#').to_string()));
        }
        self.serve(Capability::TrendingPosts, "social", "trending", params, query, ctx)
            .await
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "medley_providers::social::search_posts", skip(self, ctx))
    )]
    async fn search_posts(&self, query: &SocialQuery, ctx: &CallContext) -> Outcome<ContentPage> {
        let q = match required_query(query.query.as_deref(), "post search") {
            Ok(q) => q.to_string(),
            Err(e) => return Outcome::Failure(e),
        };
        self.serve(Capability::SearchPosts, "search", "search", vec![("q", q)], query, ctx)
            .await
    }
}

impl MedleyConnector for SocialPlatformConnector {
    fn name(&self) -> &'static str {
        NAME
    }

    fn vendor(&self) -> &'static str {
        "Social platform"
    }

    fn as_social_provider(&self) -> Option<&dyn SocialProvider> {
        Some(self as &dyn SocialProvider)
    }
}
