//! Medley-specific data transfer objects and configuration primitives.
//!
//! Every provider connector maps its native payloads onto [`ContentItem`], and
//! every operation reports its result as an [`Outcome`], which can be lowered
//! into the legacy [`ApiResponse`] envelope for consumers that expect it.
#![warn(missing_docs)]

mod capability;
mod config;
mod connector;
mod content;
mod error;
mod requests;
mod response;

pub use capability::Capability;
pub use config::{Credentials, MedleyConfig};
pub use connector::ConnectorKey;
pub use content::{
    ContentDetails, ContentItem, ContentKind, MovieDetails, MusicDetails, NewsDetails,
    SocialDetails, placeholder_image,
};
pub use error::MedleyError;
pub use requests::{
    FeedPreferences, MovieQuery, MusicQuery, NewsQuery, SearchRequest, SearchRequestBuilder,
    SocialQuery,
};
pub use response::{ApiResponse, ContentPage, DegradeReason, Outcome, ResponseStatus};
