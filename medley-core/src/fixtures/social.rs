use medley_types::{ContentDetails, ContentItem, ContentKind, SocialDetails, placeholder_image};

use super::at;

#[allow(clippy::too_many_arguments)]
fn post(
    id: &str,
    platform: &str,
    username: &str,
    text: &str,
    likes: u64,
    comments: u64,
    hashtags: &[&str],
    posted: (i32, u32, u32, u32),
) -> ContentItem {
    let (y, m, d, h) = posted;
    let url = if platform == "twitter" {
        format!("https://twitter.com/{username}/status/{id}")
    } else {
        format!("https://social.example.com/{username}/posts/{id}")
    };
    ContentItem {
        id: id.to_string(),
        title: format!("@{username}"),
        description: Some(text.to_string()),
        image: placeholder_image(ContentKind::Social).to_string(),
        url,
        published_at: at(y, m, d, h),
        source: platform.to_string(),
        is_favorite: false,
        details: ContentDetails::Social(SocialDetails {
            platform: platform.to_string(),
            username: username.to_string(),
            likes,
            comments,
            hashtags: hashtags.iter().map(|h| (*h).to_string()).collect(),
        }),
    }
}

/// Sample posts from the third-party social platform.
pub fn posts() -> Vec<ContentItem> {
    vec![
        post(
            "post-1",
            "instagram",
            "travelwithmia",
            "Sunrise over the Dolomites this morning. Worth the 4am alarm.",
            1_204,
            87,
            &["travel", "mountains"],
            (2024, 5, 14, 6),
        ),
        post(
            "post-2",
            "linkedin",
            "devrel_sam",
            "Slides from today's talk on incremental compilation are up.",
            342,
            19,
            &["rust", "compilers"],
            (2024, 5, 13, 15),
        ),
        post(
            "post-3",
            "instagram",
            "kitchen.notes",
            "Three-ingredient focaccia. Recipe in the comments.",
            5_630,
            412,
            &["baking", "recipes"],
            (2024, 5, 12, 19),
        ),
    ]
}

/// Sample tweets.
pub fn tweets() -> Vec<ContentItem> {
    vec![
        post(
            "1790000000000000001",
            "twitter",
            "openweather",
            "Heat advisory in effect for the metro area until 8pm.",
            210,
            14,
            &["weather"],
            (2024, 5, 14, 11),
        ),
        post(
            "1790000000000000002",
            "twitter",
            "nasa",
            "Our rover just crossed 30 km on the Martian surface.",
            48_200,
            1_930,
            &["mars", "space"],
            (2024, 5, 13, 20),
        ),
        post(
            "1790000000000000003",
            "twitter",
            "rustlang",
            "A new stable release is out. Read the announcement on the blog.",
            9_870,
            402,
            &["rust"],
            (2024, 5, 12, 14),
        ),
        post(
            "1790000000000000004",
            "twitter",
            "indie_dev",
            "Shipped the save-system rewrite. No more corrupted slots.",
            156,
            23,
            &["gamedev"],
            (2024, 5, 11, 22),
        ),
    ]
}
