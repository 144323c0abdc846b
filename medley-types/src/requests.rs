//! Request parameter objects accepted by connectors and the orchestrator.
//!
//! Every field has a default so callers only set what they care about.

use serde::{Deserialize, Serialize};

use crate::{ContentKind, MedleyError};

/// Parameters for movie listings and movie search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieQuery {
    /// 1-based page number.
    pub page: u32,
    /// Genre name (e.g. "action"); used by genre discovery.
    pub genre: Option<String>,
    /// Free-text query; used by search.
    pub query: Option<String>,
    /// Maximum number of items to keep from the page.
    pub limit: Option<u32>,
}

impl Default for MovieQuery {
    fn default() -> Self {
        Self {
            page: 1,
            genre: None,
            query: None,
            limit: None,
        }
    }
}

/// Parameters for news headlines and news search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsQuery {
    /// Two-letter country code; `us` when unset.
    pub country: Option<String>,
    /// Category, e.g. "technology"; `general` when unset.
    pub category: Option<String>,
    /// Keywords for search.
    pub keywords: Option<String>,
    /// Items per page.
    pub page_size: u32,
    /// 1-based page number.
    pub page: u32,
}

impl Default for NewsQuery {
    fn default() -> Self {
        Self {
            country: None,
            category: None,
            keywords: None,
            page_size: 20,
            page: 1,
        }
    }
}

/// Parameters for music listings and track search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MusicQuery {
    /// Maximum number of tracks.
    pub limit: u32,
    /// Offset into the result set.
    pub offset: u32,
    /// Genre name used to seed the listing.
    pub genre: Option<String>,
    /// Free-text query; used by search.
    pub query: Option<String>,
    /// Market (ISO country code) for availability filtering.
    pub market: String,
}

impl Default for MusicQuery {
    fn default() -> Self {
        Self {
            limit: 20,
            offset: 0,
            genre: None,
            query: None,
            market: "US".to_string(),
        }
    }
}

/// Parameters for social feeds and post search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialQuery {
    /// Maximum number of posts.
    pub limit: u32,
    /// Hashtag (without `#`) used for trending lookups.
    pub hashtag: Option<String>,
    /// Free-text query; used by search.
    pub query: Option<String>,
}

impl Default for SocialQuery {
    fn default() -> Self {
        Self {
            limit: 10,
            hashtag: None,
            query: None,
        }
    }
}

/// What a user wants in their personalized feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedPreferences {
    /// Content kinds to include; all kinds when empty.
    pub kinds: Vec<ContentKind>,
    /// News categories, one headline request per entry.
    pub news_categories: Vec<String>,
    /// Movie genres, one discovery request per entry; popular movies when empty.
    pub movie_genres: Vec<String>,
    /// Music genres, one listing request per entry.
    pub music_genres: Vec<String>,
    /// Country used for headlines.
    pub country: Option<String>,
}

impl Default for FeedPreferences {
    fn default() -> Self {
        Self {
            kinds: ContentKind::ALL.to_vec(),
            news_categories: vec!["general".to_string()],
            movie_genres: Vec::new(),
            music_genres: Vec::new(),
            country: None,
        }
    }
}

impl FeedPreferences {
    /// True if `kind` is wanted.
    #[must_use]
    pub fn wants(&self, kind: ContentKind) -> bool {
        self.kinds.is_empty() || self.kinds.contains(&kind)
    }
}

/// Cross-source search request with optional kind filter and result limit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    query: String,
    kind: Option<ContentKind>,
    limit: Option<usize>,
}

impl SearchRequest {
    /// Start building a search for `query`.
    pub fn builder(query: impl Into<String>) -> SearchRequestBuilder {
        SearchRequestBuilder {
            query: query.into(),
            kind: None,
            limit: None,
        }
    }

    /// Build a search for `query` with no filter or limit.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the query is blank.
    pub fn new(query: impl Into<String>) -> Result<Self, MedleyError> {
        Self::builder(query).build()
    }

    /// Trimmed query text.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Optional kind filter.
    #[must_use]
    pub const fn kind(&self) -> Option<ContentKind> {
        self.kind
    }

    /// Optional cap on merged results.
    #[must_use]
    pub const fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// True if results of `kind` should be requested.
    #[must_use]
    pub fn includes(&self, kind: ContentKind) -> bool {
        self.kind.is_none_or(|k| k == kind)
    }
}

/// Builder for [`SearchRequest`].
#[derive(Debug, Clone)]
pub struct SearchRequestBuilder {
    query: String,
    kind: Option<ContentKind>,
    limit: Option<usize>,
}

impl SearchRequestBuilder {
    /// Restrict results to one content kind.
    #[must_use]
    pub const fn kind(mut self, kind: ContentKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Cap the number of merged results.
    #[must_use]
    pub const fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Validate and build the request.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the query is blank or the limit is zero.
    pub fn build(self) -> Result<SearchRequest, MedleyError> {
        let query = self.query.trim().to_string();
        if query.is_empty() {
            return Err(MedleyError::InvalidArg(
                "search query must not be empty".to_string(),
            ));
        }
        if self.limit == Some(0) {
            return Err(MedleyError::InvalidArg(
                "search limit must be greater than zero".to_string(),
            ));
        }
        Ok(SearchRequest {
            query,
            kind: self.kind,
            limit: self.limit,
        })
    }
}
