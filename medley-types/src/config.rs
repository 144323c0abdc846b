//! Configuration types shared across orchestrators and connectors.

use std::collections::HashMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Global configuration for the `Medley` orchestrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MedleyConfig {
    /// Timeout for individual provider requests.
    pub provider_timeout: Duration,
    /// Optional overall request timeout for fan-out aggregations (feed/trending/search).
    /// If set, operations that aggregate multiple provider calls are bounded by this deadline.
    pub request_timeout: Option<Duration>,
    /// Shuffle merged feed and trending results for presentational variety.
    pub shuffle: bool,
    /// Maximum number of items returned by the trending aggregate.
    pub trending_limit: usize,
    /// Number of items requested from each source in an aggregate.
    pub per_source_limit: u32,
}

impl Default for MedleyConfig {
    fn default() -> Self {
        Self {
            provider_timeout: Duration::from_secs(10),
            request_timeout: None,
            shuffle: true,
            trending_limit: 20,
            per_source_limit: 5,
        }
    }
}

/// Provider credentials and endpoints, read from environment-style key/value pairs.
///
/// Every field is optional: a connector without credentials serves its
/// fixture dataset instead of failing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// TMDB v3 API key.
    pub tmdb_api_key: Option<String>,
    /// MediaStack access key.
    pub mediastack_api_key: Option<String>,
    /// Spotify application client id.
    pub spotify_client_id: Option<String>,
    /// Spotify application client secret.
    pub spotify_client_secret: Option<String>,
    /// Twitter API v2 application bearer token.
    pub twitter_bearer_token: Option<String>,
    /// Base URL of the dashboard's social backend.
    pub social_api_base_url: Option<String>,
}

impl Credentials {
    /// Environment key for the TMDB API key.
    pub const TMDB_API_KEY: &'static str = "TMDB_API_KEY";
    /// Environment key for the MediaStack access key.
    pub const MEDIASTACK_API_KEY: &'static str = "MEDIASTACK_API_KEY";
    /// Environment key for the Spotify client id.
    pub const SPOTIFY_CLIENT_ID: &'static str = "SPOTIFY_CLIENT_ID";
    /// Environment key for the Spotify client secret.
    pub const SPOTIFY_CLIENT_SECRET: &'static str = "SPOTIFY_CLIENT_SECRET";
    /// Environment key for the Twitter bearer token.
    pub const TWITTER_BEARER_TOKEN: &'static str = "TWITTER_BEARER_TOKEN";
    /// Environment key for the social backend base URL.
    pub const SOCIAL_API_BASE_URL: &'static str = "SOCIAL_API_BASE_URL";

    /// Read credentials from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_pairs(std::env::vars())
    }

    /// Build credentials from key/value pairs (e.g. a parsed `.env` file).
    ///
    /// Unknown keys are ignored; blank values count as missing.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let map: HashMap<String, String> = pairs
            .into_iter()
            .map(|(k, v)| (k.as_ref().to_string(), v.into()))
            .filter(|(_, v)| !v.trim().is_empty())
            .collect();
        let get = |key: &str| map.get(key).cloned();
        Self {
            tmdb_api_key: get(Self::TMDB_API_KEY),
            mediastack_api_key: get(Self::MEDIASTACK_API_KEY),
            spotify_client_id: get(Self::SPOTIFY_CLIENT_ID),
            spotify_client_secret: get(Self::SPOTIFY_CLIENT_SECRET),
            twitter_bearer_token: get(Self::TWITTER_BEARER_TOKEN),
            social_api_base_url: get(Self::SOCIAL_API_BASE_URL),
        }
    }
}
