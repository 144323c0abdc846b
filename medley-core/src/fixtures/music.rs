use medley_types::{ContentDetails, ContentItem, ContentKind, MusicDetails, placeholder_image};

use super::at;

#[allow(clippy::too_many_arguments)]
fn track(
    id: &str,
    title: &str,
    artist: &str,
    album: &str,
    duration_ms: u64,
    popularity: u8,
    explicit: bool,
    released: (i32, u32, u32),
) -> ContentItem {
    let (y, m, d) = released;
    ContentItem {
        id: id.to_string(),
        title: title.to_string(),
        description: Some(format!("{artist} · {album}")),
        image: placeholder_image(ContentKind::Music).to_string(),
        url: format!("https://open.spotify.com/track/{id}"),
        published_at: at(y, m, d, 0),
        source: "Spotify".to_string(),
        is_favorite: false,
        details: ContentDetails::Music(MusicDetails {
            artist: artist.to_string(),
            album: album.to_string(),
            duration: duration_ms,
            preview_url: None,
            is_playing: false,
            popularity,
            explicit,
        }),
    }
}

/// Sample tracks.
pub fn tracks() -> Vec<ContentItem> {
    vec![
        track(
            "0VjIjW4GlUZAMYd2vXMi3b",
            "Blinding Lights",
            "The Weeknd",
            "After Hours",
            200_040,
            92,
            false,
            (2020, 3, 20),
        ),
        track(
            "7qiZfU4dY1lWllzX7mPBI3",
            "Shape of You",
            "Ed Sheeran",
            "÷ (Divide)",
            233_712,
            88,
            false,
            (2017, 3, 3),
        ),
        track(
            "3KkXRkHbMCARz0aVfEt68P",
            "Sunflower",
            "Post Malone, Swae Lee",
            "Spider-Man: Into the Spider-Verse",
            158_040,
            85,
            false,
            (2018, 12, 14),
        ),
        track(
            "6UelLqGlWMcVH1E5c4H7lY",
            "Watermelon Sugar",
            "Harry Styles",
            "Fine Line",
            174_000,
            84,
            false,
            (2019, 12, 13),
        ),
        track(
            "2Fxmhks0bxGSBdJ92vM42m",
            "bad guy",
            "Billie Eilish",
            "WHEN WE ALL FALL ASLEEP, WHERE DO WE GO?",
            194_088,
            86,
            false,
            (2019, 3, 29),
        ),
    ]
}
