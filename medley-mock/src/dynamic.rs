use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use medley_core::connector::{
    MedleyConnector, MovieProvider, MusicProvider, NewsProvider, SocialProvider,
};
use medley_core::{
    CallContext, Capability, ContentKind, ContentPage, MedleyError, MovieQuery, MusicQuery,
    NewsQuery, Outcome, SocialQuery,
};

/// Instruction for how a capability should behave.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Return the page as live data.
    Return(ContentPage),
    /// Return the page as a sample-data fallback.
    Fallback(ContentPage),
    /// Fail immediately with the provided error.
    Fail(MedleyError),
    /// Hang until the call is cancelled or times out.
    Hang,
}

#[derive(Default)]
struct InternalState {
    rules: HashMap<Capability, MockBehavior>,
    calls: Vec<Capability>,
}

/// Controller handle used by tests to drive the dynamic mock from the outside.
pub struct DynamicMockController {
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockController {
    /// Set the behavior for one capability.
    pub async fn set_behavior(&self, capability: Capability, behavior: MockBehavior) {
        let mut guard = self.state.lock().await;
        guard.rules.insert(capability, behavior);
    }

    /// Capabilities invoked so far, in call order.
    pub async fn calls(&self) -> Vec<Capability> {
        self.state.lock().await.calls.clone()
    }

    /// Clear all configured behaviors and the call log.
    pub async fn clear_all_behaviors(&self) {
        let mut guard = self.state.lock().await;
        guard.rules.clear();
        guard.calls.clear();
    }
}

/// A connector that defers all behavior to an external controller.
///
/// Capabilities without a configured behavior answer `Unsupported`.
pub struct DynamicMockConnector {
    name: &'static str,
    kinds: Vec<ContentKind>,
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockConnector {
    /// Create a connector serving `kinds` and the controller that scripts it.
    #[must_use]
    pub fn new_with_controller(
        name: &'static str,
        kinds: &[ContentKind],
    ) -> (Arc<dyn MedleyConnector>, DynamicMockController) {
        let state = Arc::new(Mutex::new(InternalState::default()));
        let controller = DynamicMockController {
            state: Arc::clone(&state),
        };
        let me = Arc::new(Self {
            name,
            kinds: kinds.to_vec(),
            state,
        });
        (me as Arc<dyn MedleyConnector>, controller)
    }

    async fn play(&self, capability: Capability, ctx: &CallContext) -> Outcome<ContentPage> {
        // Snapshot the behavior without holding the lock across await points
        let behavior = {
            let mut guard = self.state.lock().await;
            guard.calls.push(capability);
            guard.rules.get(&capability).cloned()
        };
        let work = async {
            match behavior {
                Some(MockBehavior::Return(page)) => Outcome::Success(page),
                Some(MockBehavior::Fallback(page)) => Outcome::fallback(
                    self.name,
                    MedleyError::connector(self.name, "scripted fallback"),
                    page,
                ),
                Some(MockBehavior::Fail(e)) => Outcome::Failure(e),
                Some(MockBehavior::Hang) => std::future::pending().await,
                None => Outcome::Failure(MedleyError::unsupported(capability.as_str())),
            }
        };
        ctx.run(work).await.unwrap_or_else(Outcome::Failure)
    }

    fn serves(&self, kind: ContentKind) -> bool {
        self.kinds.contains(&kind)
    }
}

impl MedleyConnector for DynamicMockConnector {
    fn name(&self) -> &'static str {
        self.name
    }

    fn vendor(&self) -> &'static str {
        "DynamicMock"
    }

    fn as_movie_provider(&self) -> Option<&dyn MovieProvider> {
        self.serves(ContentKind::Movie)
            .then_some(self as &dyn MovieProvider)
    }

    fn as_news_provider(&self) -> Option<&dyn NewsProvider> {
        self.serves(ContentKind::News)
            .then_some(self as &dyn NewsProvider)
    }

    fn as_music_provider(&self) -> Option<&dyn MusicProvider> {
        self.serves(ContentKind::Music)
            .then_some(self as &dyn MusicProvider)
    }

    fn as_social_provider(&self) -> Option<&dyn SocialProvider> {
        self.serves(ContentKind::Social)
            .then_some(self as &dyn SocialProvider)
    }
}

#[async_trait]
impl MovieProvider for DynamicMockConnector {
    async fn popular_movies(&self, _q: &MovieQuery, ctx: &CallContext) -> Outcome<ContentPage> {
        self.play(Capability::PopularMovies, ctx).await
    }

    async fn top_rated_movies(&self, _q: &MovieQuery, ctx: &CallContext) -> Outcome<ContentPage> {
        self.play(Capability::TopRatedMovies, ctx).await
    }

    async fn now_playing_movies(
        &self,
        _q: &MovieQuery,
        ctx: &CallContext,
    ) -> Outcome<ContentPage> {
        self.play(Capability::NowPlayingMovies, ctx).await
    }

    async fn movies_by_genre(&self, _q: &MovieQuery, ctx: &CallContext) -> Outcome<ContentPage> {
        self.play(Capability::MoviesByGenre, ctx).await
    }

    async fn search_movies(&self, _q: &MovieQuery, ctx: &CallContext) -> Outcome<ContentPage> {
        self.play(Capability::SearchMovies, ctx).await
    }
}

#[async_trait]
impl NewsProvider for DynamicMockConnector {
    async fn top_headlines(&self, _q: &NewsQuery, ctx: &CallContext) -> Outcome<ContentPage> {
        self.play(Capability::TopHeadlines, ctx).await
    }

    async fn search_news(&self, _q: &NewsQuery, ctx: &CallContext) -> Outcome<ContentPage> {
        self.play(Capability::SearchNews, ctx).await
    }
}

#[async_trait]
impl MusicProvider for DynamicMockConnector {
    async fn top_tracks(&self, _q: &MusicQuery, ctx: &CallContext) -> Outcome<ContentPage> {
        self.play(Capability::TopTracks, ctx).await
    }

    async fn search_tracks(&self, _q: &MusicQuery, ctx: &CallContext) -> Outcome<ContentPage> {
        self.play(Capability::SearchTracks, ctx).await
    }
}

#[async_trait]
impl SocialProvider for DynamicMockConnector {
    async fn feed_posts(&self, _q: &SocialQuery, ctx: &CallContext) -> Outcome<ContentPage> {
        self.play(Capability::FeedPosts, ctx).await
    }

    async fn trending_posts(&self, _q: &SocialQuery, ctx: &CallContext) -> Outcome<ContentPage> {
        self.play(Capability::TrendingPosts, ctx).await
    }

    async fn search_posts(&self, _q: &SocialQuery, ctx: &CallContext) -> Outcome<ContentPage> {
        self.play(Capability::SearchPosts, ctx).await
    }
}
