use async_trait::async_trait;

use crate::CallContext;
pub use medley_types::ConnectorKey;
use medley_types::{
    Capability, ContentKind, ContentPage, MedleyError, MovieQuery, MusicQuery, NewsQuery, Outcome,
    SocialQuery,
};

/// Focused role trait for connectors that provide movies.
///
/// Implementations never fail on expected transport problems: they return
/// `Outcome::Degraded` with fixture data instead. `Failure` is reserved for
/// cancellation and capabilities the provider does not offer.
#[async_trait]
pub trait MovieProvider: Send + Sync {
    /// Currently popular movies.
    async fn popular_movies(&self, query: &MovieQuery, ctx: &CallContext) -> Outcome<ContentPage>;

    /// Highest rated movies.
    async fn top_rated_movies(
        &self,
        query: &MovieQuery,
        ctx: &CallContext,
    ) -> Outcome<ContentPage>;

    /// Movies in theaters now.
    async fn now_playing_movies(
        &self,
        query: &MovieQuery,
        ctx: &CallContext,
    ) -> Outcome<ContentPage>;

    /// Movies matching `query.genre`. Default returns `unsupported`.
    async fn movies_by_genre(
        &self,
        _query: &MovieQuery,
        _ctx: &CallContext,
    ) -> Outcome<ContentPage> {
        Outcome::Failure(MedleyError::unsupported(Capability::MoviesByGenre.as_str()))
    }

    /// Movies matching `query.query`.
    async fn search_movies(&self, query: &MovieQuery, ctx: &CallContext) -> Outcome<ContentPage>;
}

/// Focused role trait for connectors that provide news articles.
#[async_trait]
pub trait NewsProvider: Send + Sync {
    /// Top headlines for a country and category.
    async fn top_headlines(&self, query: &NewsQuery, ctx: &CallContext) -> Outcome<ContentPage>;

    /// Articles matching `query.keywords`.
    async fn search_news(&self, query: &NewsQuery, ctx: &CallContext) -> Outcome<ContentPage>;
}

/// Focused role trait for connectors that provide music tracks.
#[async_trait]
pub trait MusicProvider: Send + Sync {
    /// New and popular tracks, optionally seeded by genre.
    async fn top_tracks(&self, query: &MusicQuery, ctx: &CallContext) -> Outcome<ContentPage>;

    /// Tracks matching `query.query`.
    async fn search_tracks(&self, query: &MusicQuery, ctx: &CallContext) -> Outcome<ContentPage>;
}

/// Focused role trait for connectors that provide social posts.
#[async_trait]
pub trait SocialProvider: Send + Sync {
    /// The signed-in user's feed. Uses `ctx.session_token()`; reports
    /// `AuthRequired` when it is absent.
    async fn feed_posts(&self, query: &SocialQuery, ctx: &CallContext) -> Outcome<ContentPage>;

    /// Posts trending on the platform.
    async fn trending_posts(&self, query: &SocialQuery, ctx: &CallContext)
    -> Outcome<ContentPage>;

    /// Posts matching `query.query`.
    async fn search_posts(&self, query: &SocialQuery, ctx: &CallContext) -> Outcome<ContentPage>;
}

/// Main connector trait implemented by provider crates. Exposes capability discovery.
pub trait MedleyConnector: Send + Sync {
    /// A stable identifier for priority lists (e.g., "medley-tmdb", "medley-spotify").
    fn name(&self) -> &'static str;

    /// Canonical connector key constructed from the static name.
    fn key(&self) -> ConnectorKey {
        ConnectorKey::new(self.name())
    }

    /// Human-friendly vendor string.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// Whether this connector serves a given content kind.
    ///
    /// Default: derived from the `as_*_provider` accessors.
    fn supports_kind(&self, kind: ContentKind) -> bool {
        match kind {
            ContentKind::Movie => self.as_movie_provider().is_some(),
            ContentKind::News => self.as_news_provider().is_some(),
            ContentKind::Music => self.as_music_provider().is_some(),
            ContentKind::Social => self.as_social_provider().is_some(),
        }
    }

    /// If implemented, returns a trait object for movies.
    fn as_movie_provider(&self) -> Option<&dyn MovieProvider> {
        None
    }
    /// If implemented, returns a trait object for news articles.
    fn as_news_provider(&self) -> Option<&dyn NewsProvider> {
        None
    }
    /// If implemented, returns a trait object for music tracks.
    fn as_music_provider(&self) -> Option<&dyn MusicProvider> {
        None
    }
    /// If implemented, returns a trait object for social posts.
    fn as_social_provider(&self) -> Option<&dyn SocialProvider> {
        None
    }
}
