use core::fmt;
use serde::{Deserialize, Serialize};

use crate::ContentKind;

/// High-level capability labels for routing, errors, and telemetry.
///
/// These map one-to-one with router endpoints and allow consistent
/// Display formatting and match-exhaustive handling when adding
/// new capabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Capability {
    /// Movies: currently popular titles.
    PopularMovies,
    /// Movies: highest rated titles.
    TopRatedMovies,
    /// Movies: titles in theaters now.
    NowPlayingMovies,
    /// Movies: discovery by genre name.
    MoviesByGenre,
    /// Movies: free-text search.
    SearchMovies,

    /// News: top headlines by country and category.
    TopHeadlines,
    /// News: keyword search.
    SearchNews,

    /// Music: new and popular tracks.
    TopTracks,
    /// Music: free-text track search.
    SearchTracks,

    /// Social: the signed-in user's feed.
    FeedPosts,
    /// Social: posts trending on the platform.
    TrendingPosts,
    /// Social: free-text post search.
    SearchPosts,

    /// Aggregate: personalized multi-source feed.
    PersonalizedFeed,
    /// Aggregate: trending content across sources.
    Trending,
    /// Aggregate: search across sources.
    Search,
    /// Aggregate: popular, top rated and now playing movies combined.
    MovieShowcase,
}

impl Capability {
    /// Stable, kebab-case identifier for logs/errors.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PopularMovies => "popular-movies",
            Self::TopRatedMovies => "top-rated-movies",
            Self::NowPlayingMovies => "now-playing-movies",
            Self::MoviesByGenre => "movies-by-genre",
            Self::SearchMovies => "search-movies",
            Self::TopHeadlines => "top-headlines",
            Self::SearchNews => "search-news",
            Self::TopTracks => "top-tracks",
            Self::SearchTracks => "search-tracks",
            Self::FeedPosts => "feed-posts",
            Self::TrendingPosts => "trending-posts",
            Self::SearchPosts => "search-posts",
            Self::PersonalizedFeed => "personalized-feed",
            Self::Trending => "trending",
            Self::Search => "search",
            Self::MovieShowcase => "movie-showcase",
        }
    }

    /// Content kind served by a single-provider capability; `None` for aggregates.
    #[must_use]
    pub const fn kind(self) -> Option<ContentKind> {
        match self {
            Self::PopularMovies
            | Self::TopRatedMovies
            | Self::NowPlayingMovies
            | Self::MoviesByGenre
            | Self::SearchMovies
            | Self::MovieShowcase => Some(ContentKind::Movie),
            Self::TopHeadlines | Self::SearchNews => Some(ContentKind::News),
            Self::TopTracks | Self::SearchTracks => Some(ContentKind::Music),
            Self::FeedPosts | Self::TrendingPosts | Self::SearchPosts => {
                Some(ContentKind::Social)
            }
            Self::PersonalizedFeed | Self::Trending | Self::Search => None,
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
