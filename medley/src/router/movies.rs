use medley_core::{CallContext, Capability, ContentKind, ContentPage, MovieQuery, Outcome};

use crate::Medley;
use crate::medley_router_method;
use crate::router::util::SourceCall;

impl Medley {
    medley_router_method! {
        /// Currently popular movies from the first capable provider.
        method: popular_movies(query: &MovieQuery),
        kind: ContentKind::Movie,
        accessor: as_movie_provider,
        capability: Capability::PopularMovies,
        prefix: "popular",
        call: popular_movies
    }

    medley_router_method! {
        /// Highest rated movies.
        method: top_rated_movies(query: &MovieQuery),
        kind: ContentKind::Movie,
        accessor: as_movie_provider,
        capability: Capability::TopRatedMovies,
        prefix: "top-rated",
        call: top_rated_movies
    }

    medley_router_method! {
        /// Movies in theaters now.
        method: now_playing_movies(query: &MovieQuery),
        kind: ContentKind::Movie,
        accessor: as_movie_provider,
        capability: Capability::NowPlayingMovies,
        prefix: "now-playing",
        call: now_playing_movies
    }

    medley_router_method! {
        /// Movies for `query.genre`, a genre name such as `"Action"`.
        method: movies_by_genre(query: &MovieQuery),
        kind: ContentKind::Movie,
        accessor: as_movie_provider,
        capability: Capability::MoviesByGenre,
        prefix: "genre",
        call: movies_by_genre
    }

    medley_router_method! {
        /// Free-text movie search.
        method: search_movies(query: &MovieQuery),
        kind: ContentKind::Movie,
        accessor: as_movie_provider,
        capability: Capability::SearchMovies,
        prefix: "search",
        call: search_movies
    }

    /// Popular, top rated and now playing movies fetched in parallel from every
    /// movie provider and merged in that order.
    ///
    /// Ids carry the list they came from (`popular-550`, `top-rated-550`), so a
    /// title present in several lists appears once per list. Not shuffled.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(target = "medley::router", skip(self, query, ctx))
    )]
    pub async fn movie_showcase(
        &self,
        query: &MovieQuery,
        ctx: &CallContext,
    ) -> Outcome<ContentPage> {
        let mut calls: Vec<SourceCall<'_>> = Vec::new();
        for c in &self.connectors {
            let Some(p) = c.as_movie_provider() else {
                continue;
            };
            let name = c.name();
            calls.push(SourceCall::new(
                name,
                Capability::PopularMovies,
                "popular",
                p.popular_movies(query, ctx),
            ));
            calls.push(SourceCall::new(
                name,
                Capability::TopRatedMovies,
                "top-rated",
                p.top_rated_movies(query, ctx),
            ));
            calls.push(SourceCall::new(
                name,
                Capability::NowPlayingMovies,
                "now-playing",
                p.now_playing_movies(query, ctx),
            ));
        }
        self.fan_out(Capability::MovieShowcase, ctx, calls, false, None)
            .await
    }
}
