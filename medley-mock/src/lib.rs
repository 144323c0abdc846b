use std::time::Duration;

use async_trait::async_trait;
use medley_core::connector::{
    MedleyConnector, MovieProvider, MusicProvider, NewsProvider, SocialProvider,
};
use medley_core::{
    CallContext, ContentItem, ContentPage, MedleyError, MovieQuery, MusicQuery, NewsQuery,
    Outcome, SocialQuery, fixtures,
};

mod dynamic;

pub use dynamic::{DynamicMockConnector, DynamicMockController, MockBehavior};

const NAME: &str = "medley-mock";

/// Mock connector for CI-safe examples. Serves deterministic fixture data for
/// every content kind.
///
/// Free-text fields (search query, genre, category, hashtag) act as triggers:
/// `FAIL` fails the call, `FALLBACK` returns the data as a sample-data
/// fallback, `TIMEOUT` delays the answer by 200 ms.
pub struct MockConnector;

impl Default for MockConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConnector {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    async fn respond(
        trigger: Option<&str>,
        capability: &'static str,
        ctx: &CallContext,
        items: Vec<ContentItem>,
    ) -> Outcome<ContentPage> {
        let work = async {
            match trigger {
                Some("FAIL") => {
                    return Outcome::Failure(MedleyError::connector(
                        NAME,
                        format!("forced failure: {capability}"),
                    ));
                }
                // Short enough not to slow tests, long enough for tight deadlines.
                Some("TIMEOUT") => tokio::time::sleep(Duration::from_millis(200)).await,
                _ => {}
            }
            let total = items.len() as u64;
            let page = ContentPage::new(items).with_total(Some(total));
            if trigger == Some("FALLBACK") {
                Outcome::fallback(
                    NAME,
                    MedleyError::connector(NAME, format!("forced fallback: {capability}")),
                    page,
                )
            } else {
                Outcome::Success(page)
            }
        };
        ctx.run(work).await.unwrap_or_else(Outcome::Failure)
    }
}

fn matches_text(item: &ContentItem, needle: &str) -> bool {
    let needle = needle.to_lowercase();
    item.title.to_lowercase().contains(&needle)
        || item
            .description
            .as_deref()
            .is_some_and(|d| d.to_lowercase().contains(&needle))
}

fn limited(mut items: Vec<ContentItem>, limit: Option<u32>) -> Vec<ContentItem> {
    if let Some(n) = limit {
        items.truncate(n as usize);
    }
    items
}

fn search(items: Vec<ContentItem>, needle: Option<&str>, limit: Option<u32>) -> Vec<ContentItem> {
    let found = match needle {
        Some(n) => items.into_iter().filter(|i| matches_text(i, n)).collect(),
        None => items,
    };
    limited(found, limit)
}

#[async_trait]
impl MovieProvider for MockConnector {
    async fn popular_movies(&self, query: &MovieQuery, ctx: &CallContext) -> Outcome<ContentPage> {
        let items = limited(fixtures::movies::movies(), query.limit);
        Self::respond(query.query.as_deref(), "popular-movies", ctx, items).await
    }

    async fn top_rated_movies(
        &self,
        query: &MovieQuery,
        ctx: &CallContext,
    ) -> Outcome<ContentPage> {
        let mut items = fixtures::movies::movies();
        items.sort_by(|a, b| {
            let ra = a.as_movie().map_or(0.0, |m| m.rating);
            let rb = b.as_movie().map_or(0.0, |m| m.rating);
            rb.total_cmp(&ra)
        });
        Self::respond(
            query.query.as_deref(),
            "top-rated-movies",
            ctx,
            limited(items, query.limit),
        )
        .await
    }

    async fn now_playing_movies(
        &self,
        query: &MovieQuery,
        ctx: &CallContext,
    ) -> Outcome<ContentPage> {
        let mut items = fixtures::movies::movies();
        items.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        Self::respond(
            query.query.as_deref(),
            "now-playing-movies",
            ctx,
            limited(items, query.limit),
        )
        .await
    }

    async fn movies_by_genre(&self, query: &MovieQuery, ctx: &CallContext) -> Outcome<ContentPage> {
        let genre = query.genre.as_deref();
        let items = fixtures::movies::movies()
            .into_iter()
            .filter(|m| {
                genre.is_none_or(|g| {
                    m.as_movie()
                        .is_some_and(|d| d.genre.iter().any(|x| x.eq_ignore_ascii_case(g)))
                })
            })
            .collect();
        Self::respond(genre, "movies-by-genre", ctx, limited(items, query.limit)).await
    }

    async fn search_movies(&self, query: &MovieQuery, ctx: &CallContext) -> Outcome<ContentPage> {
        let q = query.query.as_deref();
        let items = search(fixtures::movies::movies(), q, query.limit);
        Self::respond(q, "search-movies", ctx, items).await
    }
}

#[async_trait]
impl NewsProvider for MockConnector {
    async fn top_headlines(&self, query: &NewsQuery, ctx: &CallContext) -> Outcome<ContentPage> {
        let category = query.category.as_deref();
        let items = fixtures::news::articles()
            .into_iter()
            .filter(|a| match category {
                None | Some("general") => true,
                Some(c) => a.as_news().is_some_and(|n| n.category.eq_ignore_ascii_case(c)),
            })
            .collect();
        let items = limited(items, Some(query.page_size));
        Self::respond(category, "top-headlines", ctx, items).await
    }

    async fn search_news(&self, query: &NewsQuery, ctx: &CallContext) -> Outcome<ContentPage> {
        let q = query.keywords.as_deref();
        let items = search(fixtures::news::articles(), q, Some(query.page_size));
        Self::respond(q, "search-news", ctx, items).await
    }
}

#[async_trait]
impl MusicProvider for MockConnector {
    async fn top_tracks(&self, query: &MusicQuery, ctx: &CallContext) -> Outcome<ContentPage> {
        let items = limited(fixtures::music::tracks(), Some(query.limit));
        Self::respond(query.genre.as_deref(), "top-tracks", ctx, items).await
    }

    async fn search_tracks(&self, query: &MusicQuery, ctx: &CallContext) -> Outcome<ContentPage> {
        let q = query.query.as_deref();
        let items = search(fixtures::music::tracks(), q, Some(query.limit));
        Self::respond(q, "search-tracks", ctx, items).await
    }
}

#[async_trait]
impl SocialProvider for MockConnector {
    async fn feed_posts(&self, query: &SocialQuery, ctx: &CallContext) -> Outcome<ContentPage> {
        if ctx.session_token().is_none() {
            return Outcome::Failure(MedleyError::auth_required(NAME));
        }
        let items = limited(fixtures::social::posts(), Some(query.limit));
        Self::respond(query.hashtag.as_deref(), "feed-posts", ctx, items).await
    }

    async fn trending_posts(
        &self,
        query: &SocialQuery,
        ctx: &CallContext,
    ) -> Outcome<ContentPage> {
        let items = limited(fixtures::social::tweets(), Some(query.limit));
        Self::respond(query.hashtag.as_deref(), "trending-posts", ctx, items).await
    }

    async fn search_posts(&self, query: &SocialQuery, ctx: &CallContext) -> Outcome<ContentPage> {
        let q = query.query.as_deref();
        let mut all = fixtures::social::tweets();
        all.extend(fixtures::social::posts());
        let items = search(all, q, Some(query.limit));
        Self::respond(q, "search-posts", ctx, items).await
    }
}

impl MedleyConnector for MockConnector {
    fn name(&self) -> &'static str {
        NAME
    }
    fn vendor(&self) -> &'static str {
        "Mock"
    }

    fn as_movie_provider(&self) -> Option<&dyn MovieProvider> {
        Some(self as &dyn MovieProvider)
    }
    fn as_news_provider(&self) -> Option<&dyn NewsProvider> {
        Some(self as &dyn NewsProvider)
    }
    fn as_music_provider(&self) -> Option<&dyn MusicProvider> {
        Some(self as &dyn MusicProvider)
    }
    fn as_social_provider(&self) -> Option<&dyn SocialProvider> {
        Some(self as &dyn SocialProvider)
    }
}
