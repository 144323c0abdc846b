use medley_core::{
    CallContext, Capability, ContentKind, ContentPage, FeedPreferences, MovieQuery, MusicQuery,
    NewsQuery, Outcome, SocialQuery,
};

use crate::Medley;
use crate::router::util::SourceCall;

impl Medley {
    /// Build a personalized feed from the kinds, categories and genres in `prefs`.
    ///
    /// Behavior:
    /// - News: one headline request per preferred category.
    /// - Movies: one genre request per preferred genre, or popular movies when none.
    /// - Music: one top-tracks request per preferred genre, or one unfiltered request.
    /// - Social: the user's feed, which needs a session token on `ctx`.
    /// - Every source is asked for `per_source_limit` items; all requests run
    ///   concurrently and a failed source contributes nothing.
    /// - The merged result is shuffled unless shuffling is disabled on the builder.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "medley::router",
            skip(self, prefs, ctx),
            fields(kinds = ?prefs.kinds),
        )
    )]
    pub async fn personalized_feed(
        &self,
        prefs: &FeedPreferences,
        ctx: &CallContext,
    ) -> Outcome<ContentPage> {
        let n = self.cfg.per_source_limit;

        let news_queries: Vec<NewsQuery> = if prefs.wants(ContentKind::News) {
            categories_or_any(&prefs.news_categories)
                .into_iter()
                .map(|category| NewsQuery {
                    country: prefs.country.clone(),
                    category,
                    page_size: n,
                    ..NewsQuery::default()
                })
                .collect()
        } else {
            Vec::new()
        };

        let movie_queries: Vec<MovieQuery> = if prefs.wants(ContentKind::Movie) {
            categories_or_any(&prefs.movie_genres)
                .into_iter()
                .map(|genre| MovieQuery {
                    genre,
                    limit: Some(n),
                    ..MovieQuery::default()
                })
                .collect()
        } else {
            Vec::new()
        };

        let music_queries: Vec<MusicQuery> = if prefs.wants(ContentKind::Music) {
            categories_or_any(&prefs.music_genres)
                .into_iter()
                .map(|genre| MusicQuery {
                    genre,
                    limit: n,
                    ..MusicQuery::default()
                })
                .collect()
        } else {
            Vec::new()
        };

        let social_query = SocialQuery {
            limit: n,
            ..SocialQuery::default()
        };

        let mut calls: Vec<SourceCall<'_>> = Vec::new();
        for c in &self.connectors {
            let name = c.name();
            if let Some(p) = c.as_news_provider() {
                for q in &news_queries {
                    calls.push(SourceCall::new(
                        name,
                        Capability::TopHeadlines,
                        "news",
                        p.top_headlines(q, ctx),
                    ));
                }
            }
            if let Some(p) = c.as_movie_provider() {
                for q in &movie_queries {
                    let call = if q.genre.is_some() {
                        SourceCall::new(
                            name,
                            Capability::MoviesByGenre,
                            "genre",
                            p.movies_by_genre(q, ctx),
                        )
                    } else {
                        SourceCall::new(
                            name,
                            Capability::PopularMovies,
                            "popular",
                            p.popular_movies(q, ctx),
                        )
                    };
                    calls.push(call);
                }
            }
            if let Some(p) = c.as_music_provider() {
                for q in &music_queries {
                    calls.push(SourceCall::new(
                        name,
                        Capability::TopTracks,
                        "music",
                        p.top_tracks(q, ctx),
                    ));
                }
            }
            if prefs.wants(ContentKind::Social)
                && let Some(p) = c.as_social_provider()
            {
                calls.push(SourceCall::new(
                    name,
                    Capability::FeedPosts,
                    "feed",
                    p.feed_posts(&social_query, ctx),
                ));
            }
        }

        self.fan_out(Capability::PersonalizedFeed, ctx, calls, self.cfg.shuffle, None)
            .await
    }
}

/// One `Some` per non-blank entry, or a single `None` ("no filter") when the list is empty.
fn categories_or_any(values: &[String]) -> Vec<Option<String>> {
    let picked: Vec<Option<String>> = values
        .iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(|v| Some(v.to_string()))
        .collect();
    if picked.is_empty() { vec![None] } else { picked }
}
