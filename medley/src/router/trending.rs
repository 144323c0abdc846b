use medley_core::{
    CallContext, Capability, ContentPage, MovieQuery, MusicQuery, NewsQuery, Outcome, SocialQuery,
};

use crate::Medley;
use crate::router::util::SourceCall;

impl Medley {
    /// Trending content across every capable provider.
    ///
    /// Asks each source for a fixed `per_source_limit` items (popular movies, top
    /// headlines, top tracks, trending posts), merges them, shuffles unless
    /// disabled, and keeps at most `trending_limit` items. There is no ranking.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "medley::router", skip(self, ctx))
    )]
    pub async fn trending_content(&self, ctx: &CallContext) -> Outcome<ContentPage> {
        let n = self.cfg.per_source_limit;
        let movie_q = MovieQuery {
            limit: Some(n),
            ..MovieQuery::default()
        };
        let news_q = NewsQuery {
            page_size: n,
            ..NewsQuery::default()
        };
        let music_q = MusicQuery {
            limit: n,
            ..MusicQuery::default()
        };
        let social_q = SocialQuery {
            limit: n,
            ..SocialQuery::default()
        };

        let mut calls: Vec<SourceCall<'_>> = Vec::new();
        for c in &self.connectors {
            let name = c.name();
            if let Some(p) = c.as_movie_provider() {
                calls.push(SourceCall::new(
                    name,
                    Capability::PopularMovies,
                    "popular",
                    p.popular_movies(&movie_q, ctx),
                ));
            }
            if let Some(p) = c.as_news_provider() {
                calls.push(SourceCall::new(
                    name,
                    Capability::TopHeadlines,
                    "news",
                    p.top_headlines(&news_q, ctx),
                ));
            }
            if let Some(p) = c.as_music_provider() {
                calls.push(SourceCall::new(
                    name,
                    Capability::TopTracks,
                    "music",
                    p.top_tracks(&music_q, ctx),
                ));
            }
            if let Some(p) = c.as_social_provider() {
                calls.push(SourceCall::new(
                    name,
                    Capability::TrendingPosts,
                    "trending",
                    p.trending_posts(&social_q, ctx),
                ));
            }
        }

        self.fan_out(
            Capability::Trending,
            ctx,
            calls,
            self.cfg.shuffle,
            Some(self.cfg.trending_limit),
        )
        .await
    }
}
