use chrono::NaiveDate;
use medley_types::{ContentDetails, ContentItem, ContentKind, MovieDetails, placeholder_image};

use super::at;

fn movie(
    id: u32,
    title: &str,
    overview: &str,
    release: (i32, u32, u32),
    rating: f32,
    genre: &[&str],
    duration: u32,
) -> ContentItem {
    let (y, m, d) = release;
    ContentItem {
        id: id.to_string(),
        title: title.to_string(),
        description: Some(overview.to_string()),
        image: placeholder_image(ContentKind::Movie).to_string(),
        url: format!("https://www.themoviedb.org/movie/{id}"),
        published_at: at(y, m, d, 0),
        source: "TMDB".to_string(),
        is_favorite: false,
        details: ContentDetails::Movie(MovieDetails {
            release_date: NaiveDate::from_ymd_opt(y, m, d),
            rating,
            genre: genre.iter().map(|g| (*g).to_string()).collect(),
            duration: Some(duration),
        }),
    }
}

/// Sample movies.
pub fn movies() -> Vec<ContentItem> {
    vec![
        movie(
            550,
            "Fight Club",
            "An insomniac office worker and a soap maker form an underground fight club.",
            (1999, 10, 15),
            8.4,
            &["Drama", "Thriller"],
            139,
        ),
        movie(
            27205,
            "Inception",
            "A thief who steals corporate secrets through dream-sharing is given one last job.",
            (2010, 7, 16),
            8.4,
            &["Action", "Science Fiction", "Adventure"],
            148,
        ),
        movie(
            157_336,
            "Interstellar",
            "Explorers travel through a wormhole in search of a new home for humanity.",
            (2014, 11, 7),
            8.4,
            &["Adventure", "Drama", "Science Fiction"],
            169,
        ),
        movie(
            13,
            "Forrest Gump",
            "Decades of American history seen through the eyes of an Alabama man.",
            (1994, 7, 6),
            8.5,
            &["Comedy", "Drama", "Romance"],
            142,
        ),
    ]
}
