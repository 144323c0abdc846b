//! Medley aggregates movies, news, music and social posts from several providers.
//!
//! Overview
//! - Routes requests to connectors that implement the `medley_core` contracts.
//! - Single-kind fetchers walk providers in priority order (registration order,
//!   adjusted per kind with `prefer_for_kind`) and return the first live answer.
//! - Aggregates (feed, trending, search, movie showcase) call every capable
//!   provider concurrently and tolerate individual failures.
//! - Every result is an [`Outcome`]: live data, substitute data with a reason, or
//!   an error. Convert to [`ApiResponse`] for the flat JSON envelope.
//!
//! Key behaviors and trade-offs
//! - Ids in merged results are rewritten by `combine_with_unique_ids`: each group
//!   is prefixed with its source (`popular-550`, `news-…`), so the same underlying
//!   item fetched twice shows up twice. Use `remove_duplicates_by_original_id` to
//!   collapse such entries.
//! - Feed and trending results are shuffled by default; search and the movie
//!   showcase keep group-then-item order.
//! - A provider that cannot produce live data answers with sample data; the
//!   aggregate then reports `DegradeReason::PartialFailure` naming it.
//! - Per-provider calls are bounded by `provider_timeout` (or the `CallContext`
//!   override); fan-outs additionally by the optional `request_timeout`.
//!
//! Examples
//! ```rust,ignore
//! use std::sync::Arc;
//! use medley::{CallContext, Credentials, FeedPreferences, Medley};
//!
//! let mut builder = Medley::builder().trending_limit(12);
//! for c in medley_providers::connectors_from_credentials(&Credentials::from_env()) {
//!     builder = builder.with_connector(c);
//! }
//! let medley = builder.build()?;
//!
//! let ctx = CallContext::new().with_session_token(user_token);
//! let feed = medley.personalized_feed(&FeedPreferences::default(), &ctx).await;
//! let envelope: medley::ApiResponse<Vec<medley::ContentItem>> = feed.into();
//! ```
//!
//! See `medley/examples/` for runnable end-to-end demonstrations.
#![warn(missing_docs)]

pub(crate) mod core;
mod router;

pub use core::{Medley, MedleyBuilder};
pub use router::util::{collapse_errors, join_with_deadline};

// Re-export core types for convenience
pub use medley_core::{
    ApiResponse, CallContext, Capability, ConnectorKey, ContentDetails, ContentItem, ContentKind,
    ContentPage, Credentials, DegradeReason, FeedPreferences, MedleyConfig, MedleyConnector,
    MedleyError, MovieQuery, MusicQuery, NewsQuery, Outcome, ResponseStatus, SearchRequest,
    SearchRequestBuilder, SocialQuery, SourceGroup, combine_with_unique_ids, ensure_unique_ids,
    original_id, remove_duplicates_by_original_id,
};
