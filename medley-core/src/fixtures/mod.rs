//! Hand-authored datasets served in place of live provider data.
//!
//! Every dataset is small (2 to 6 items), has ids unique within the dataset,
//! and uses the per-kind placeholder image where no artwork is known.

use chrono::{DateTime, TimeZone, Utc};

/// Sample movies.
pub mod movies;
/// Sample tracks.
pub mod music;
/// Sample headlines.
pub mod news;
/// Sample social posts and tweets.
pub mod social;

pub(crate) fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, 0, 0)
        .single()
        .unwrap_or(DateTime::UNIX_EPOCH)
}
