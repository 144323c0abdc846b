//! Normalized content items shared by every provider.

use core::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Discriminant of a [`ContentItem`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    /// News articles.
    News,
    /// Movies.
    Movie,
    /// Music tracks.
    Music,
    /// Social media posts.
    Social,
}

impl ContentKind {
    /// All kinds in canonical order.
    pub const ALL: [Self; 4] = [Self::News, Self::Movie, Self::Music, Self::Social];

    /// Stable lowercase identifier, identical to the serialized `type` tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::News => "news",
            Self::Movie => "movie",
            Self::Music => "music",
            Self::Social => "social",
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Image used when a provider supplies none.
#[must_use]
pub const fn placeholder_image(kind: ContentKind) -> &'static str {
    match kind {
        ContentKind::News => "https://via.placeholder.com/400x200?text=News",
        ContentKind::Movie => "https://via.placeholder.com/300x450?text=No+Poster",
        ContentKind::Music => "https://via.placeholder.com/300x300?text=No+Artwork",
        ContentKind::Social => "https://via.placeholder.com/400x400?text=Post",
    }
}

/// Canonical, provider-agnostic representation of one aggregated item.
///
/// Serializes to a flat camelCase object whose `type` field carries the
/// variant, e.g. `{"id": "...", "type": "movie", "rating": 7.9, ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    /// Identifier, unique within any result set handed to a consumer.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Optional short description or excerpt.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Image URL (a placeholder when the provider had none).
    pub image: String,
    /// Link to the item at its source.
    pub url: String,
    /// Publication or release timestamp.
    pub published_at: DateTime<Utc>,
    /// Provenance label, e.g. "TMDB" or a news outlet name.
    pub source: String,
    /// Owned by the presentation layer; connectors always emit `false`.
    #[serde(default)]
    pub is_favorite: bool,
    /// Variant-specific fields.
    #[serde(flatten)]
    pub details: ContentDetails,
}

impl ContentItem {
    /// Kind of this item, derived from its details.
    #[must_use]
    pub const fn kind(&self) -> ContentKind {
        self.details.kind()
    }

    /// News fields when this item is an article.
    #[must_use]
    pub const fn as_news(&self) -> Option<&NewsDetails> {
        match &self.details {
            ContentDetails::News(d) => Some(d),
            _ => None,
        }
    }

    /// Movie fields when this item is a movie.
    #[must_use]
    pub const fn as_movie(&self) -> Option<&MovieDetails> {
        match &self.details {
            ContentDetails::Movie(d) => Some(d),
            _ => None,
        }
    }

    /// Music fields when this item is a track.
    #[must_use]
    pub const fn as_music(&self) -> Option<&MusicDetails> {
        match &self.details {
            ContentDetails::Music(d) => Some(d),
            _ => None,
        }
    }

    /// Social fields when this item is a post.
    #[must_use]
    pub const fn as_social(&self) -> Option<&SocialDetails> {
        match &self.details {
            ContentDetails::Social(d) => Some(d),
            _ => None,
        }
    }
}

/// Variant payload of a [`ContentItem`], tagged by `type` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentDetails {
    /// News article fields.
    News(NewsDetails),
    /// Movie fields.
    Movie(MovieDetails),
    /// Music track fields.
    Music(MusicDetails),
    /// Social post fields.
    Social(SocialDetails),
}

impl ContentDetails {
    /// Discriminant of this payload.
    #[must_use]
    pub const fn kind(&self) -> ContentKind {
        match self {
            Self::News(_) => ContentKind::News,
            Self::Movie(_) => ContentKind::Movie,
            Self::Music(_) => ContentKind::Music,
            Self::Social(_) => ContentKind::Social,
        }
    }
}

/// Fields specific to news articles.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsDetails {
    /// Byline, when the outlet provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Section or category, e.g. "technology".
    pub category: String,
    /// Full or truncated body text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// Fields specific to movies.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieDetails {
    /// Theatrical release date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<NaiveDate>,
    /// Average rating on a 0–10 scale.
    pub rating: f32,
    /// Genre names.
    pub genre: Vec<String>,
    /// Runtime in minutes, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
}

/// Fields specific to music tracks.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MusicDetails {
    /// Primary artist names, comma-joined.
    pub artist: String,
    /// Album name.
    pub album: String,
    /// Track length in milliseconds.
    pub duration: u64,
    /// 30-second preview clip, when licensed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_url: Option<String>,
    /// Playback state; owned by the presentation layer.
    #[serde(default)]
    pub is_playing: bool,
    /// Provider popularity score, 0–100.
    pub popularity: u8,
    /// Explicit-lyrics flag.
    pub explicit: bool,
}

/// Fields specific to social posts.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialDetails {
    /// Platform name, e.g. "twitter".
    pub platform: String,
    /// Author handle without the leading `@`.
    pub username: String,
    /// Like count.
    pub likes: u64,
    /// Reply/comment count.
    pub comments: u64,
    /// Hashtags without the leading `#`.
    pub hashtags: Vec<String>,
}
