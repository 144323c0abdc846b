use medley_core::{Capability, ContentKind};

use crate::Medley;
use crate::medley_router_method;

impl Medley {
    medley_router_method! {
        /// New and popular tracks, optionally narrowed to a genre.
        method: top_tracks(query: &medley_core::MusicQuery),
        kind: ContentKind::Music,
        accessor: as_music_provider,
        capability: Capability::TopTracks,
        prefix: "music",
        call: top_tracks
    }

    medley_router_method! {
        /// Free-text track search.
        method: search_tracks(query: &medley_core::MusicQuery),
        kind: ContentKind::Music,
        accessor: as_music_provider,
        capability: Capability::SearchTracks,
        prefix: "search",
        call: search_tracks
    }
}
