#![allow(dead_code)]
#![allow(clippy::type_complexity)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use medley::{
    CallContext, Capability, ContentItem, ContentKind, ContentPage, MedleyConnector, MedleyError,
    MovieQuery, MusicQuery, NewsQuery, Outcome, SocialQuery,
};
use medley_core::connector::{MovieProvider, MusicProvider, NewsProvider, SocialProvider};
use tokio::time::{Duration, sleep};

/// The request a scripted handler was called with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Seen {
    Movie(MovieQuery),
    News(NewsQuery),
    Music(MusicQuery),
    Social(SocialQuery),
}

type Handler = Arc<dyn Fn(&Seen, &CallContext) -> Outcome<ContentPage> + Send + Sync>;

/// Simple in-memory connector used by integration tests.
///
/// Each capability is answered by a closure registered on the builder. A kind is
/// served as soon as one of its capabilities has a handler; other capabilities
/// of a served kind answer `Unsupported`.
pub struct MockConnector {
    pub name: &'static str,
    pub delay_ms: u64,
    handlers: HashMap<Capability, Handler>,
    calls: Mutex<Vec<(Capability, Seen)>>,
}

impl MockConnector {
    pub fn builder() -> MockConnectorBuilder {
        MockConnectorBuilder::new()
    }

    /// Capabilities invoked so far, in call order.
    pub fn calls(&self) -> Vec<(Capability, Seen)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self, capability: Capability) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(c, _)| *c == capability)
            .count()
    }

    fn serves(&self, kind: ContentKind) -> bool {
        self.handlers.keys().any(|c| c.kind() == Some(kind))
    }

    async fn answer(
        &self,
        capability: Capability,
        seen: Seen,
        ctx: &CallContext,
    ) -> Outcome<ContentPage> {
        self.calls.lock().unwrap().push((capability, seen.clone()));
        if self.delay_ms > 0 {
            sleep(Duration::from_millis(self.delay_ms)).await;
        }
        match self.handlers.get(&capability) {
            Some(f) => (f)(&seen, ctx),
            None => Outcome::Failure(MedleyError::unsupported(capability.as_str())),
        }
    }
}

#[async_trait]
impl MovieProvider for MockConnector {
    async fn popular_movies(&self, q: &MovieQuery, ctx: &CallContext) -> Outcome<ContentPage> {
        self.answer(Capability::PopularMovies, Seen::Movie(q.clone()), ctx)
            .await
    }

    async fn top_rated_movies(&self, q: &MovieQuery, ctx: &CallContext) -> Outcome<ContentPage> {
        self.answer(Capability::TopRatedMovies, Seen::Movie(q.clone()), ctx)
            .await
    }

    async fn now_playing_movies(&self, q: &MovieQuery, ctx: &CallContext) -> Outcome<ContentPage> {
        self.answer(Capability::NowPlayingMovies, Seen::Movie(q.clone()), ctx)
            .await
    }

    async fn movies_by_genre(&self, q: &MovieQuery, ctx: &CallContext) -> Outcome<ContentPage> {
        self.answer(Capability::MoviesByGenre, Seen::Movie(q.clone()), ctx)
            .await
    }

    async fn search_movies(&self, q: &MovieQuery, ctx: &CallContext) -> Outcome<ContentPage> {
        self.answer(Capability::SearchMovies, Seen::Movie(q.clone()), ctx)
            .await
    }
}

#[async_trait]
impl NewsProvider for MockConnector {
    async fn top_headlines(&self, q: &NewsQuery, ctx: &CallContext) -> Outcome<ContentPage> {
        self.answer(Capability::TopHeadlines, Seen::News(q.clone()), ctx)
            .await
    }

    async fn search_news(&self, q: &NewsQuery, ctx: &CallContext) -> Outcome<ContentPage> {
        self.answer(Capability::SearchNews, Seen::News(q.clone()), ctx)
            .await
    }
}

#[async_trait]
impl MusicProvider for MockConnector {
    async fn top_tracks(&self, q: &MusicQuery, ctx: &CallContext) -> Outcome<ContentPage> {
        self.answer(Capability::TopTracks, Seen::Music(q.clone()), ctx)
            .await
    }

    async fn search_tracks(&self, q: &MusicQuery, ctx: &CallContext) -> Outcome<ContentPage> {
        self.answer(Capability::SearchTracks, Seen::Music(q.clone()), ctx)
            .await
    }
}

#[async_trait]
impl SocialProvider for MockConnector {
    async fn feed_posts(&self, q: &SocialQuery, ctx: &CallContext) -> Outcome<ContentPage> {
        self.answer(Capability::FeedPosts, Seen::Social(q.clone()), ctx)
            .await
    }

    async fn trending_posts(&self, q: &SocialQuery, ctx: &CallContext) -> Outcome<ContentPage> {
        self.answer(Capability::TrendingPosts, Seen::Social(q.clone()), ctx)
            .await
    }

    async fn search_posts(&self, q: &SocialQuery, ctx: &CallContext) -> Outcome<ContentPage> {
        self.answer(Capability::SearchPosts, Seen::Social(q.clone()), ctx)
            .await
    }
}

impl MedleyConnector for MockConnector {
    fn name(&self) -> &'static str {
        self.name
    }

    fn as_movie_provider(&self) -> Option<&dyn MovieProvider> {
        if self.serves(ContentKind::Movie) {
            Some(self as &dyn MovieProvider)
        } else {
            None
        }
    }

    fn as_news_provider(&self) -> Option<&dyn NewsProvider> {
        if self.serves(ContentKind::News) {
            Some(self as &dyn NewsProvider)
        } else {
            None
        }
    }

    fn as_music_provider(&self) -> Option<&dyn MusicProvider> {
        if self.serves(ContentKind::Music) {
            Some(self as &dyn MusicProvider)
        } else {
            None
        }
    }

    fn as_social_provider(&self) -> Option<&dyn SocialProvider> {
        if self.serves(ContentKind::Social) {
            Some(self as &dyn SocialProvider)
        } else {
            None
        }
    }
}

/* ---------- Tiny builder helpers used by tests ---------- */

pub struct MockConnectorBuilder {
    name: &'static str,
    delay_ms: u64,
    handlers: HashMap<Capability, Handler>,
}

impl MockConnectorBuilder {
    pub fn new() -> Self {
        Self {
            name: "mock",
            delay_ms: 0,
            handlers: HashMap::new(),
        }
    }

    pub fn name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    pub fn delay(mut self, d: Duration) -> Self {
        self.delay_ms = d.as_millis() as u64;
        self
    }

    pub fn with_fn<F>(mut self, capability: Capability, f: F) -> Self
    where
        F: Fn(&Seen, &CallContext) -> Outcome<ContentPage> + Send + Sync + 'static,
    {
        self.handlers.insert(capability, Arc::new(f));
        self
    }

    pub fn returns_ok(self, capability: Capability, items: Vec<ContentItem>) -> Self {
        self.with_fn(capability, move |_, _| {
            Outcome::Success(ContentPage::new(items.clone()))
        })
    }

    pub fn falls_back(self, capability: Capability, items: Vec<ContentItem>) -> Self {
        let name = self.name;
        self.with_fn(capability, move |_, _| {
            Outcome::fallback(
                name,
                MedleyError::http(name, 503),
                ContentPage::new(items.clone()),
            )
        })
    }

    pub fn fails(self, capability: Capability, err: MedleyError) -> Self {
        self.with_fn(capability, move |_, _| Outcome::Failure(err.clone()))
    }

    pub fn build(self) -> Arc<MockConnector> {
        Arc::new(MockConnector {
            name: self.name,
            delay_ms: self.delay_ms,
            handlers: self.handlers,
            calls: Mutex::new(Vec::new()),
        })
    }
}
