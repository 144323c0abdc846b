//! Spotify Web API music connector and its client-credentials token cache.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::{DateTime, NaiveDate, TimeDelta, TimeZone, Utc};
use medley_core::connector::{ConnectorKey, MedleyConnector, MusicProvider};
use medley_core::{
    CallContext, Capability, Clock, ContentDetails, ContentItem, ContentKind, ContentPage,
    Credentials, MedleyError, MusicDetails, MusicQuery, Outcome, SystemClock, fixtures,
    placeholder_image,
};
use serde::Deserialize;
use tokio::sync::Mutex;

use crate::http::{Endpoint, live_or_fixture, required_query, send_json};

const NAME: &str = "medley-spotify";
const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
const DEFAULT_ACCOUNTS_URL: &str = "https://accounts.spotify.com";
/// Tokens are treated as expired this long before the provider says they are.
const EXPIRY_MARGIN_SECS: u64 = 60;
const MAX_LIFETIME_SECS: u64 = 86_400 * 365;

#[derive(Debug, Clone)]
struct CachedToken {
    access_token: String,
    expires_at: DateTime<Utc>,
}

/// Bearer token cache owned by one connector instance.
///
/// A token obtained with `expires_in` seconds of validity is reused until
/// `expires_in - 60` seconds have passed on the injected [`Clock`]. The async
/// mutex is held across a refresh so concurrent callers share it.
pub struct TokenCache {
    clock: Arc<dyn Clock>,
    slot: Mutex<Option<CachedToken>>,
}

impl std::fmt::Debug for TokenCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenCache").finish_non_exhaustive()
    }
}

impl TokenCache {
    /// Empty cache reading time from `clock`.
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            slot: Mutex::new(None),
        }
    }

    /// Cached token if still valid, otherwise the result of `refresh`.
    ///
    /// `refresh` yields `(access_token, expires_in_seconds)`.
    ///
    /// # Errors
    /// Propagates the refresh error; the cache stays empty in that case.
    pub async fn get_or_refresh<F, Fut>(&self, refresh: F) -> Result<String, MedleyError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<(String, u64), MedleyError>>,
    {
        let mut slot = self.slot.lock().await;
        if let Some(tok) = slot.as_ref()
            && self.clock.now() < tok.expires_at
        {
            return Ok(tok.access_token.clone());
        }
        let (access_token, expires_in) = refresh().await?;
        let expires_at = self.clock.now() + valid_for(expires_in);
        #[cfg(feature = "tracing")]
        tracing::debug!(connector = NAME, %expires_at, "refreshed access token");
        *slot = Some(CachedToken {
            access_token: access_token.clone(),
            expires_at,
        });
        Ok(access_token)
    }

    /// Drop the cached token so the next call refreshes.
    pub async fn invalidate(&self) {
        *self.slot.lock().await = None;
    }
}

fn valid_for(expires_in: u64) -> TimeDelta {
    let secs = expires_in
        .min(MAX_LIFETIME_SECS)
        .saturating_sub(EXPIRY_MARGIN_SECS);
    TimeDelta::seconds(i64::try_from(secs).unwrap_or(0))
}

/// Token issued to a user by the authorization-code flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserToken {
    /// Bearer token for user-scoped calls.
    pub access_token: String,
    /// Long-lived token for [`SpotifyConnector::refresh_user_token`].
    pub refresh_token: Option<String>,
    /// Granted scopes, space separated.
    pub scope: Option<String>,
    /// When the access token should be considered expired.
    pub expires_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default = "default_expires_in")]
    expires_in: u64,
    #[serde(default)]
    refresh_token: Option<String>,
    #[serde(default)]
    scope: Option<String>,
}

const fn default_expires_in() -> u64 {
    3600
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    tracks: TrackPage,
}

#[derive(Debug, Deserialize)]
struct TrackPage {
    #[serde(default)]
    items: Vec<RawTrack>,
    total: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct RawTrack {
    id: String,
    name: String,
    #[serde(default)]
    artists: Vec<Named>,
    album: RawAlbum,
    #[serde(default)]
    duration_ms: u64,
    #[serde(default)]
    preview_url: Option<String>,
    #[serde(default)]
    popularity: u8,
    #[serde(default)]
    explicit: bool,
    #[serde(default)]
    external_urls: ExternalUrls,
}

#[derive(Debug, Deserialize)]
struct Named {
    name: String,
}

#[derive(Debug, Deserialize)]
struct RawAlbum {
    name: String,
    #[serde(default)]
    images: Vec<Image>,
    #[serde(default)]
    release_date: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Image {
    url: String,
}

#[derive(Debug, Default, Deserialize)]
struct ExternalUrls {
    spotify: Option<String>,
}

/// Album release dates come at year, month or day precision.
fn parse_release_date(raw: &str) -> Option<NaiveDate> {
    match raw.len() {
        4 => NaiveDate::parse_from_str(&format!("{raw}-01-01"), "%Y-%m-%d").ok(),
        7 => NaiveDate::parse_from_str(&format!("{raw}-01"), "%Y-%m-%d").ok(),
        _ => NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok(),
    }
}

fn map_track(t: RawTrack) -> ContentItem {
    let artist = t
        .artists
        .iter()
        .map(|a| a.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let published_at = t
        .album
        .release_date
        .as_deref()
        .and_then(parse_release_date)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map_or_else(Utc::now, |dt| Utc.from_utc_datetime(&dt));
    let image = t.album.images.into_iter().next().map_or_else(
        || placeholder_image(ContentKind::Music).to_string(),
        |i| i.url,
    );
    let url = t
        .external_urls
        .spotify
        .unwrap_or_else(|| format!("https://open.spotify.com/track/{}", t.id));
    ContentItem {
        description: Some(format!("{artist} · {}", t.album.name)),
        id: t.id,
        title: t.name,
        image,
        url,
        published_at,
        source: "Spotify".to_string(),
        is_favorite: false,
        details: ContentDetails::Music(MusicDetails {
            artist,
            album: t.album.name,
            duration: t.duration_ms,
            preview_url: t.preview_url,
            is_playing: false,
            popularity: t.popularity.min(100),
            explicit: t.explicit,
        }),
    }
}

/// Music connector backed by the Spotify Web API.
///
/// Catalog calls use an application token from the client-credentials flow,
/// or the caller's session token when the [`CallContext`] carries one.
#[derive(Debug)]
pub struct SpotifyConnector {
    client_id: Option<String>,
    client_secret: Option<String>,
    api: Endpoint,
    accounts_url: String,
    tokens: TokenCache,
}

impl SpotifyConnector {
    /// Static connector key for orchestrator priority configuration.
    pub const KEY: ConnectorKey = ConnectorKey::new(NAME);

    /// Connector for the given application credentials.
    #[must_use]
    pub fn new(client_id: Option<String>, client_secret: Option<String>) -> Self {
        Self {
            client_id,
            client_secret,
            api: Endpoint::new(DEFAULT_API_URL),
            accounts_url: DEFAULT_ACCOUNTS_URL.to_string(),
            tokens: TokenCache::new(Arc::new(SystemClock)),
        }
    }

    /// Connector configured from `SPOTIFY_CLIENT_ID` / `SPOTIFY_CLIENT_SECRET`.
    #[must_use]
    pub fn from_credentials(creds: &Credentials) -> Self {
        Self::new(
            creds.spotify_client_id.clone(),
            creds.spotify_client_secret.clone(),
        )
    }

    /// Point catalog calls at another API root.
    #[must_use]
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.api.set_base_url(base_url);
        self
    }

    /// Point token requests at another accounts service root.
    #[must_use]
    pub fn with_accounts_url(mut self, accounts_url: &str) -> Self {
        self.accounts_url = accounts_url.trim_end_matches('/').to_string();
        self
    }

    /// Evaluate token expiry against `clock`. Resets the token cache.
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.tokens = TokenCache::new(clock);
        self
    }

    /// Use a preconfigured HTTP client.
    #[must_use]
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.api.client = client;
        self
    }

    /// Per-call deadline.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.api.timeout = timeout;
        self
    }

    fn app_credentials(&self) -> Result<(&str, &str), MedleyError> {
        match (self.client_id.as_deref(), self.client_secret.as_deref()) {
            (Some(id), Some(secret)) => Ok((id, secret)),
            _ => Err(MedleyError::missing_credentials(NAME)),
        }
    }

    async fn request_token(&self, form: &[(&str, &str)]) -> Result<TokenResponse, MedleyError> {
        let (id, secret) = self.app_credentials()?;
        let basic = BASE64.encode(format!("{id}:{secret}"));
        let url = format!("{}/api/token", self.accounts_url);
        let req = self
            .api
            .client
            .post(url)
            .header(reqwest::header::AUTHORIZATION, format!("Basic {basic}"))
            .form(form);
        send_json(NAME, req, false).await
    }

    async fn app_token(&self) -> Result<String, MedleyError> {
        self.tokens
            .get_or_refresh(move || async move {
                let tok = self
                    .request_token(&[("grant_type", "client_credentials")])
                    .await?;
                Ok((tok.access_token, tok.expires_in))
            })
            .await
    }

    /// Exchange an authorization code for a user token.
    ///
    /// # Errors
    /// `MissingCredentials` without application credentials; `Http`,
    /// `Connector` or `Decode` when the accounts service call fails.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "medley_providers::spotify::exchange_code", skip(self, code))
    )]
    pub async fn exchange_code(
        &self,
        code: &str,
        redirect_uri: &str,
    ) -> Result<UserToken, MedleyError> {
        let tok = self
            .request_token(&[
                ("grant_type", "authorization_code"),
                ("code", code),
                ("redirect_uri", redirect_uri),
            ])
            .await?;
        Ok(self.user_token(tok))
    }

    /// Obtain a fresh user token from a refresh token.
    ///
    /// # Errors
    /// Same as [`exchange_code`](Self::exchange_code).
    pub async fn refresh_user_token(&self, refresh_token: &str) -> Result<UserToken, MedleyError> {
        let tok = self
            .request_token(&[
                ("grant_type", "refresh_token"),
                ("refresh_token", refresh_token),
            ])
            .await?;
        let mut user = self.user_token(tok);
        // The accounts service may omit the refresh token on refresh.
        if user.refresh_token.is_none() {
            user.refresh_token = Some(refresh_token.to_string());
        }
        Ok(user)
    }

    fn user_token(&self, tok: TokenResponse) -> UserToken {
        UserToken {
            expires_at: self.tokens.clock.now() + valid_for(tok.expires_in),
            access_token: tok.access_token,
            refresh_token: tok.refresh_token,
            scope: tok.scope,
        }
    }

    async fn search(
        &self,
        q: String,
        query: &MusicQuery,
        ctx: &CallContext,
    ) -> Result<ContentPage, MedleyError> {
        let (bearer, user_scoped) = match ctx.session_token() {
            Some(t) => (t.to_string(), true),
            None => (self.app_token().await?, false),
        };
        let params = [
            ("q", q),
            ("type", "track".to_string()),
            ("limit", query.limit.clamp(1, 50).to_string()),
            ("offset", query.offset.to_string()),
            ("market", query.market.clone()),
        ];
        let url = self.api.url(NAME, "search", &params)?;
        let req = self.api.client.get(url).bearer_auth(bearer);
        let raw: SearchResponse = match send_json(NAME, req, user_scoped).await {
            Ok(r) => r,
            Err(e) => {
                if matches!(e, MedleyError::Http { status: 401, .. }) {
                    self.tokens.invalidate().await;
                }
                return Err(e);
            }
        };
        let items = raw.tracks.items.into_iter().map(map_track).collect();
        Ok(ContentPage::new(items).with_total(raw.tracks.total))
    }
}

#[async_trait]
impl MusicProvider for SpotifyConnector {
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "medley_providers::spotify::top_tracks", skip(self, ctx))
    )]
    async fn top_tracks(&self, query: &MusicQuery, ctx: &CallContext) -> Outcome<ContentPage> {
        let genre = query.genre.as_deref().map_or("pop", str::trim);
        let q = format!("genre:\"{genre}\"");
        live_or_fixture(
            NAME,
            Capability::TopTracks,
            ctx,
            self.api.timeout,
            "music",
            fixtures::music::tracks,
            self.search(q, query, ctx),
        )
        .await
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "medley_providers::spotify::search_tracks", skip(self, ctx))
    )]
    async fn search_tracks(&self, query: &MusicQuery, ctx: &CallContext) -> Outcome<ContentPage> {
        let q = match required_query(query.query.as_deref(), "track search") {
            Ok(q) => q.to_string(),
            Err(e) => return Outcome::Failure(e),
        };
        live_or_fixture(
            NAME,
            Capability::SearchTracks,
            ctx,
            self.api.timeout,
            "search",
            fixtures::music::tracks,
            self.search(q, query, ctx),
        )
        .await
    }
}

impl MedleyConnector for SpotifyConnector {
    fn name(&self) -> &'static str {
        NAME
    }

    fn vendor(&self) -> &'static str {
        "Spotify"
    }

    fn as_music_provider(&self) -> Option<&dyn MusicProvider> {
        Some(self as &dyn MusicProvider)
    }
}
