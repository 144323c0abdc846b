use medley_core::{
    CallContext, Capability, ContentKind, ContentPage, MovieQuery, MusicQuery, NewsQuery, Outcome,
    SearchRequest, SocialQuery,
};

use crate::Medley;
use crate::router::util::SourceCall;

impl Medley {
    /// Search every provider whose kind passes the request's filter.
    ///
    /// Behavior and trade-offs:
    /// - Providers are queried concurrently for `per_source_limit` items each.
    /// - Results keep group-then-item order and are never shuffled; ids are
    ///   prefixed with the kind they came from (`movies-550`, `news-…`).
    /// - If `limit` is set, truncates after merge to enforce the cap.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            target = "medley::router",
            skip(self, req, ctx),
            fields(kind = ?req.kind(), limit = ?req.limit()),
        )
    )]
    pub async fn search_all_content(
        &self,
        req: &SearchRequest,
        ctx: &CallContext,
    ) -> Outcome<ContentPage> {
        let n = self.cfg.per_source_limit;
        let text = Some(req.query().to_string());
        let movie_q = MovieQuery {
            query: text.clone(),
            limit: Some(n),
            ..MovieQuery::default()
        };
        let news_q = NewsQuery {
            keywords: text.clone(),
            page_size: n,
            ..NewsQuery::default()
        };
        let music_q = MusicQuery {
            query: text.clone(),
            limit: n,
            ..MusicQuery::default()
        };
        let social_q = SocialQuery {
            query: text,
            limit: n,
            ..SocialQuery::default()
        };

        let mut calls: Vec<SourceCall<'_>> = Vec::new();
        for c in &self.connectors {
            let name = c.name();
            if req.includes(ContentKind::Movie)
                && let Some(p) = c.as_movie_provider()
            {
                calls.push(SourceCall::new(
                    name,
                    Capability::SearchMovies,
                    "movies",
                    p.search_movies(&movie_q, ctx),
                ));
            }
            if req.includes(ContentKind::News)
                && let Some(p) = c.as_news_provider()
            {
                calls.push(SourceCall::new(
                    name,
                    Capability::SearchNews,
                    "news",
                    p.search_news(&news_q, ctx),
                ));
            }
            if req.includes(ContentKind::Music)
                && let Some(p) = c.as_music_provider()
            {
                calls.push(SourceCall::new(
                    name,
                    Capability::SearchTracks,
                    "music",
                    p.search_tracks(&music_q, ctx),
                ));
            }
            if req.includes(ContentKind::Social)
                && let Some(p) = c.as_social_provider()
            {
                calls.push(SourceCall::new(
                    name,
                    Capability::SearchPosts,
                    "social",
                    p.search_posts(&social_q, ctx),
                ));
            }
        }

        self.fan_out(Capability::Search, ctx, calls, false, req.limit())
            .await
    }
}
