//! TMDB v3 movie connector.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{NaiveDate, TimeZone, Utc};
use medley_core::connector::{ConnectorKey, MedleyConnector, MovieProvider};
use medley_core::{
    CallContext, Capability, ContentDetails, ContentItem, ContentKind, ContentPage, Credentials,
    MedleyError, MovieDetails, MovieQuery, Outcome, fixtures, placeholder_image,
};
use serde::Deserialize;

use crate::http::{Endpoint, live_or_fixture, required_query, send_json, truncate};

const NAME: &str = "medley-tmdb";
const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";
const DEFAULT_IMAGE_BASE: &str = "https://image.tmdb.org/t/p/w500";

/// TMDB movie genre ids.
pub const GENRES: &[(u32, &str)] = &[
    (28, "Action"),
    (12, "Adventure"),
    (16, "Animation"),
    (35, "Comedy"),
    (80, "Crime"),
    (99, "Documentary"),
    (18, "Drama"),
    (10751, "Family"),
    (14, "Fantasy"),
    (36, "History"),
    (27, "Horror"),
    (10402, "Music"),
    (9648, "Mystery"),
    (10749, "Romance"),
    (878, "Science Fiction"),
    (10770, "TV Movie"),
    (53, "Thriller"),
    (10752, "War"),
    (37, "Western"),
];

/// Name for a TMDB genre id.
#[must_use]
pub fn genre_name(id: u32) -> Option<&'static str> {
    GENRES.iter().find(|(g, _)| *g == id).map(|(_, n)| *n)
}

/// TMDB genre id for a case-insensitive genre name. Accepts "sci-fi" for
/// science fiction.
#[must_use]
pub fn genre_id(name: &str) -> Option<u32> {
    let name = name.trim();
    if name.eq_ignore_ascii_case("sci-fi") || name.eq_ignore_ascii_case("scifi") {
        return Some(878);
    }
    GENRES
        .iter()
        .find(|(_, n)| n.eq_ignore_ascii_case(name))
        .map(|(g, _)| *g)
}

#[derive(Debug, Deserialize)]
struct MovieList {
    #[serde(default)]
    results: Vec<RawMovie>,
    total_results: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct RawMovie {
    id: u64,
    title: String,
    #[serde(default)]
    overview: Option<String>,
    #[serde(default)]
    poster_path: Option<String>,
    #[serde(default)]
    release_date: Option<String>,
    #[serde(default)]
    vote_average: f32,
    #[serde(default)]
    genre_ids: Vec<u32>,
}

/// Movie connector backed by the TMDB v3 REST API.
///
/// Without an API key every call serves the bundled sample movies.
#[derive(Debug, Clone)]
pub struct TmdbConnector {
    api_key: Option<String>,
    endpoint: Endpoint,
    image_base: String,
}

impl TmdbConnector {
    /// Static connector key for orchestrator priority configuration.
    pub const KEY: ConnectorKey = ConnectorKey::new(NAME);

    /// Connector using `api_key` against the public TMDB endpoint.
    #[must_use]
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            endpoint: Endpoint::new(DEFAULT_BASE_URL),
            image_base: DEFAULT_IMAGE_BASE.to_string(),
        }
    }

    /// Connector configured from `TMDB_API_KEY`.
    #[must_use]
    pub fn from_credentials(creds: &Credentials) -> Self {
        Self::new(creds.tmdb_api_key.clone())
    }

    /// Point the connector at another API root (tests, proxies).
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

    async fn list(
        &self,
        path: &str,
        mut params: Vec<(&'static str, String)>,
        query: &MovieQuery,
    ) -> Result<ContentPage, MedleyError> {
        let key = self
            .api_key
            .as_deref()
            .ok_or_else(|| MedleyError::missing_credentials(NAME))?;
        params.push(("api_key", key.to_string()));
        params.push(("page", query.page.max(1).to_string()));
        let url = self.endpoint.url(NAME, path, &params)?;
        let raw: MovieList = send_json(NAME, self.endpoint.client.get(url), false).await?;
        let items = raw.results.into_iter().map(|m| self.map_movie(m)).collect();
        Ok(ContentPage::new(truncate(items, query.limit)).with_total(raw.total_results))
    }

    fn map_movie(&self, m: RawMovie) -> ContentItem {
        let release_date = m
            .release_date
            .as_deref()
            .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok());
        let published_at = release_date
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map_or_else(Utc::now, |dt| Utc.from_utc_datetime(&dt));
        let image = m.poster_path.as_deref().map_or_else(
            || placeholder_image(ContentKind::Movie).to_string(),
            |p| format!("{}{p}", self.image_base),
        );
        ContentItem {
            id: m.id.to_string(),
            title: m.title,
            description: m.overview.filter(|o| !o.is_empty()),
            image,
            url: format!("https://www.themoviedb.org/movie/{}", m.id),
            published_at,
            source: "TMDB".to_string(),
            is_favorite: false,
            details: ContentDetails::Movie(MovieDetails {
                release_date,
                rating: m.vote_average,
                genre: m
                    .genre_ids
                    .iter()
                    .filter_map(|g| genre_name(*g))
                    .map(str::to_string)
                    .collect(),
                duration: None,
            }),
        }
    }

    async fn serve(
        &self,
        capability: Capability,
        prefix: &str,
        ctx: &CallContext,
        call: impl Future<Output = Result<ContentPage, MedleyError>> + Send,
    ) -> Outcome<ContentPage> {
        live_or_fixture(
            NAME,
            capability,
            ctx,
            self.endpoint.timeout,
            prefix,
            fixtures::movies::movies,
            call,
        )
        .await
    }
}

#[async_trait]
impl MovieProvider for TmdbConnector {
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "medley_providers::tmdb::popular_movies", skip(self, ctx))
    )]
    async fn popular_movies(&self, query: &MovieQuery, ctx: &CallContext) -> Outcome<ContentPage> {
        self.serve(
            Capability::PopularMovies,
            "popular",
            ctx,
            self.list("movie/popular", Vec::new(), query),
        )
        .await
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "medley_providers::tmdb::top_rated_movies", skip(self, ctx))
    )]
    async fn top_rated_movies(
        &self,
        query: &MovieQuery,
        ctx: &CallContext,
    ) -> Outcome<ContentPage> {
        self.serve(
            Capability::TopRatedMovies,
            "top-rated",
            ctx,
            self.list("movie/top_rated", Vec::new(), query),
        )
        .await
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "medley_providers::tmdb::now_playing_movies", skip(self, ctx))
    )]
    async fn now_playing_movies(
        &self,
        query: &MovieQuery,
        ctx: &CallContext,
    ) -> Outcome<ContentPage> {
        self.serve(
            Capability::NowPlayingMovies,
            "now-playing",
            ctx,
            self.list("movie/now_playing", Vec::new(), query),
        )
        .await
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "medley_providers::tmdb::movies_by_genre", skip(self, ctx))
    )]
    async fn movies_by_genre(&self, query: &MovieQuery, ctx: &CallContext) -> Outcome<ContentPage> {
        let genre = match query.genre.as_deref().map(|g| (g, genre_id(g))) {
            Some((_, Some(id))) => id,
            Some((g, None)) => {
                return Outcome::Failure(MedleyError::InvalidArg(format!("unknown genre: {g}")));
            }
            None => {
                return Outcome::Failure(MedleyError::InvalidArg(
                    "genre discovery requires a genre".into(),
                ));
            }
        };
        let params = vec![
            ("with_genres", genre.to_string()),
            ("sort_by", "popularity.desc".to_string()),
        ];
        self.serve(
            Capability::MoviesByGenre,
            "genre",
            ctx,
            self.list("discover/movie", params, query),
        )
        .await
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "medley_providers::tmdb::search_movies", skip(self, ctx))
    )]
    async fn search_movies(&self, query: &MovieQuery, ctx: &CallContext) -> Outcome<ContentPage> {
        let q = match required_query(query.query.as_deref(), "movie search") {
            Ok(q) => q.to_string(),
            Err(e) => return Outcome::Failure(e),
        };
        self.serve(
            Capability::SearchMovies,
            "search",
            ctx,
            self.list("search/movie", vec![("query", q)], query),
        )
        .await
    }
}

impl MedleyConnector for TmdbConnector {
    fn name(&self) -> &'static str {
        NAME
    }

    fn vendor(&self) -> &'static str {
        "TMDB"
    }

    fn as_movie_provider(&self) -> Option<&dyn MovieProvider> {
        Some(self as &dyn MovieProvider)
    }
}
