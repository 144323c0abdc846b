//! Twitter API v2 connector.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use medley_core::connector::{ConnectorKey, MedleyConnector, SocialProvider};
use medley_core::{
    CallContext, Capability, ContentDetails, ContentItem, ContentKind, ContentPage, Credentials,
    MedleyError, Outcome, SocialDetails, SocialQuery, fixtures, placeholder_image,
};
use serde::Deserialize;

use crate::http::{Endpoint, live_or_fixture, parse_timestamp, required_query, send_json, truncate};

const NAME: &str = "medley-twitter";
const DEFAULT_BASE_URL: &str = "https://api.twitter.com/2";
const TWEET_FIELDS: &str = "created_at,public_metrics,entities,author_id";
const USER_FIELDS: &str = "username,name,profile_image_url";
const DEFAULT_HASHTAG: &str = "trending";

#[derive(Debug, Deserialize)]
struct TweetsResponse {
    #[serde(default)]
    data: Vec<RawTweet>,
    #[serde(default)]
    includes: Includes,
    #[serde(default)]
    meta: Option<Meta>,
}

#[derive(Debug, Default, Deserialize)]
struct Includes {
    #[serde(default)]
    users: Vec<RawUser>,
}

#[derive(Debug, Deserialize)]
struct Meta {
    result_count: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct RawTweet {
    id: String,
    text: String,
    #[serde(default)]
    author_id: Option<String>,
    #[serde(default)]
    created_at: Option<String>,
    #[serde(default)]
    public_metrics: Metrics,
    #[serde(default)]
    entities: Option<Entities>,
}

#[derive(Debug, Default, Deserialize)]
struct Metrics {
    #[serde(default)]
    like_count: u64,
    #[serde(default)]
    reply_count: u64,
}

#[derive(Debug, Deserialize)]
struct Entities {
    #[serde(default)]
    hashtags: Vec<Tag>,
}

#[derive(Debug, Deserialize)]
struct Tag {
    tag: String,
}

#[derive(Debug, Deserialize)]
struct RawUser {
    id: String,
    username: String,
    #[serde(default)]
    profile_image_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct MeResponse {
    data: RawUser,
}

fn map_tweets(raw: TweetsResponse) -> Vec<ContentItem> {
    let users: HashMap<&str, &RawUser> = raw
        .includes
        .users
        .iter()
        .map(|u| (u.id.as_str(), u))
        .collect();
    raw.data
        .iter()
        .map(|t| {
            let author = t.author_id.as_deref().and_then(|id| users.get(id));
            let username = author.map_or("unknown", |u| u.username.as_str());
            ContentItem {
                id: t.id.clone(),
                title: format!("@{username}"),
                description: Some(t.text.clone()),
                image: author
                    .and_then(|u| u.profile_image_url.clone())
                    .unwrap_or_else(|| placeholder_image(ContentKind::Social).to_string()),
                url: format!("https://twitter.com/{username}/status/{}", t.id),
                published_at: parse_timestamp(t.created_at.as_deref()),
                source: "twitter".to_string(),
                is_favorite: false,
                details: ContentDetails::Social(SocialDetails {
                    platform: "twitter".to_string(),
                    username: username.to_string(),
                    likes: t.public_metrics.like_count,
                    comments: t.public_metrics.reply_count,
                    hashtags: t
                        .entities
                        .as_ref()
                        .map(|e| e.hashtags.iter().map(|h| h.tag.clone()).collect())
                        .unwrap_or_default(),
                }),
            }
        })
        .collect()
}

/// Social connector backed by Twitter API v2.
///
/// Trending and search use the application bearer token; the home feed needs
/// the user's session token from the [`CallContext`].
#[derive(Debug, Clone)]
pub struct TwitterConnector {
    bearer_token: Option<String>,
    endpoint: Endpoint,
}

impl TwitterConnector {
    /// Static connector key for orchestrator priority configuration.
    pub const KEY: ConnectorKey = ConnectorKey::new(NAME);

    /// Connector using the application `bearer_token`.
    #[must_use]
    pub fn new(bearer_token: Option<String>) -> Self {
        Self {
            bearer_token,
            endpoint: Endpoint::new(DEFAULT_BASE_URL),
        }
    }

    /// Connector configured from `TWITTER_BEARER_TOKEN`.
    #[must_use]
    pub fn from_credentials(creds: &Credentials) -> Self {
        Self::new(creds.twitter_bearer_token.clone())
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

    async fn recent_search(&self, q: String, limit: u32) -> Result<ContentPage, MedleyError> {
        let bearer = self
            .bearer_token
            .as_deref()
            .ok_or_else(|| MedleyError::missing_credentials(NAME))?;
        let params = [
            ("query", q),
            // The endpoint only accepts 10..=100.
            ("max_results", limit.clamp(10, 100).to_string()),
            ("tweet.fields", TWEET_FIELDS.to_string()),
            ("expansions", "author_id".to_string()),
            ("user.fields", USER_FIELDS.to_string()),
        ];
        let url = self.endpoint.url(NAME, "tweets/search/recent", &params)?;
        let req = self.endpoint.client.get(url).bearer_auth(bearer);
        let raw: TweetsResponse = send_json(NAME, req, false).await?;
        let total = raw.meta.as_ref().and_then(|m| m.result_count);
        Ok(ContentPage::new(truncate(map_tweets(raw), Some(limit))).with_total(total))
    }

    async fn home_timeline(
        &self,
        user_token: &str,
        limit: u32,
    ) -> Result<ContentPage, MedleyError> {
        let me_url = self.endpoint.url(NAME, "users/me", &[])?;
        let me: MeResponse =
            send_json(NAME, self.endpoint.client.get(me_url).bearer_auth(user_token), true).await?;
        let params = [
            ("max_results", limit.clamp(1, 100).to_string()),
            ("tweet.fields", TWEET_FIELDS.to_string()),
            ("expansions", "author_id".to_string()),
            ("user.fields", USER_FIELDS.to_string()),
        ];
        let path = format!("users/{}/timelines/reverse_chronological", me.data.id);
        let url = self.endpoint.url(NAME, &path, &params)?;
        let req = self.endpoint.client.get(url).bearer_auth(user_token);
        let raw: TweetsResponse = send_json(NAME, req, true).await?;
        let total = raw.meta.as_ref().and_then(|m| m.result_count);
        Ok(ContentPage::new(truncate(map_tweets(raw), Some(limit))).with_total(total))
    }
}

#[async_trait]
impl SocialProvider for TwitterConnector {
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "medley_providers::twitter::feed_posts", skip(self, ctx))
    )]
    async fn feed_posts(&self, query: &SocialQuery, ctx: &CallContext) -> Outcome<ContentPage> {
        let Some(token) = ctx.session_token() else {
            return Outcome::Failure(MedleyError::auth_required(NAME));
        };
        live_or_fixture(
            NAME,
            Capability::FeedPosts,
            ctx,
            self.endpoint.timeout,
            "twitter",
            fixtures::social::tweets,
            self.home_timeline(token, query.limit),
        )
        .await
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "medley_providers::twitter::trending_posts", skip(self, ctx))
    )]
    async fn trending_posts(
        &self,
        query: &SocialQuery,
        ctx: &CallContext,
    ) -> Outcome<ContentPage> {
        let tag = query
            .hashtag
            .as_deref()
            .map(|h| h.trim().trim_start_matches('#'))
            .filter(|h| !h.is_empty())
            .unwrap_or(DEFAULT_HASHTAG);
        let q = format!("#{tag} -is:retweet lang:en");
        live_or_fixture(
            NAME,
            Capability::TrendingPosts,
            ctx,
            self.endpoint.timeout,
            "twitter",
            fixtures::social::tweets,
            self.recent_search(q, query.limit),
        )
        .await
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "medley_providers::twitter::search_posts", skip(self, ctx))
    )]
    async fn search_posts(&self, query: &SocialQuery, ctx: &CallContext) -> Outcome<ContentPage> {
        let q = match required_query(query.query.as_deref(), "tweet search") {
            Ok(q) => format!("{q} -is:retweet"),
            Err(e) => return Outcome::Failure(e),
        };
        live_or_fixture(
            NAME,
            Capability::SearchPosts,
            ctx,
            self.endpoint.timeout,
            "search",
            fixtures::social::tweets,
            self.recent_search(q, query.limit),
        )
        .await
    }
}

impl MedleyConnector for TwitterConnector {
    fn name(&self) -> &'static str {
        NAME
    }

    fn vendor(&self) -> &'static str {
        "Twitter"
    }

    fn as_social_provider(&self) -> Option<&dyn SocialProvider> {
        Some(self as &dyn SocialProvider)
    }
}
