//! medley-providers
//!
//! HTTP connectors implementing `MedleyConnector` for the content providers
//! the aggregator understands:
//!
//! - [`TmdbConnector`]: movies from TMDB v3.
//! - [`MediastackConnector`]: news headlines and search from MediaStack.
//! - [`SpotifyConnector`]: tracks from the Spotify Web API, with an
//!   instance-owned token cache and the authorization-code exchange.
//! - [`TwitterConnector`]: trending, search and home-feed tweets.
//! - [`SocialPlatformConnector`]: the dashboard's own social backend.
//!
//! Connectors make a single attempt per call. When the attempt cannot produce
//! live data (missing credentials, non-2xx status, transport or decode error,
//! timeout) they return `Outcome::Degraded` with a small sample dataset and a
//! `MockFallback` reason. Cancellation and missing user sessions are reported
//! as `Outcome::Failure`.
#![warn(missing_docs)]

mod http;
/// MediaStack news connector.
pub mod mediastack;
/// Social backend connector.
pub mod social;
/// Spotify music connector and token cache.
pub mod spotify;
/// TMDB movie connector and genre table.
pub mod tmdb;
/// Twitter API v2 connector.
pub mod twitter;

use std::sync::Arc;

use medley_core::{Credentials, MedleyConnector};

pub use http::DEFAULT_TIMEOUT;
pub use mediastack::MediastackConnector;
pub use social::SocialPlatformConnector;
pub use spotify::{SpotifyConnector, TokenCache, UserToken};
pub use tmdb::TmdbConnector;
pub use twitter::TwitterConnector;

/// One connector per provider, configured from `creds`, in the default
/// priority order (movies, news, music, Twitter, social backend).
#[must_use]
pub fn connectors_from_credentials(creds: &Credentials) -> Vec<Arc<dyn MedleyConnector>> {
    vec![
        Arc::new(TmdbConnector::from_credentials(creds)),
        Arc::new(MediastackConnector::from_credentials(creds)),
        Arc::new(SpotifyConnector::from_credentials(creds)),
        Arc::new(TwitterConnector::from_credentials(creds)),
        Arc::new(SocialPlatformConnector::from_credentials(creds)),
    ]
}
