use medley_types::{ContentDetails, ContentItem, ContentKind, NewsDetails, placeholder_image};

use super::at;

fn article(
    url: &str,
    title: &str,
    description: &str,
    source: &str,
    author: Option<&str>,
    category: &str,
    published: (i32, u32, u32, u32),
) -> ContentItem {
    let (y, m, d, h) = published;
    ContentItem {
        id: url.to_string(),
        title: title.to_string(),
        description: Some(description.to_string()),
        image: placeholder_image(ContentKind::News).to_string(),
        url: url.to_string(),
        published_at: at(y, m, d, h),
        source: source.to_string(),
        is_favorite: false,
        details: ContentDetails::News(NewsDetails {
            author: author.map(str::to_string),
            category: category.to_string(),
            content: Some(description.to_string()),
        }),
    }
}

/// Sample headlines.
pub fn articles() -> Vec<ContentItem> {
    vec![
        article(
            "https://example.com/news/ai-breakthrough",
            "Researchers report new efficiency gains in language models",
            "A new training technique cuts compute costs by nearly half.",
            "Tech Daily",
            Some("Priya Raman"),
            "technology",
            (2024, 5, 14, 9),
        ),
        article(
            "https://example.com/news/climate-summit",
            "Climate summit closes with agreement on methane targets",
            "Delegates from 120 countries signed the accord on Friday.",
            "World Report",
            Some("Daniel Okafor"),
            "general",
            (2024, 5, 13, 18),
        ),
        article(
            "https://example.com/news/markets-rally",
            "Markets rally as inflation cools for a third month",
            "Major indices closed at record highs.",
            "Finance Wire",
            None,
            "business",
            (2024, 5, 13, 16),
        ),
        article(
            "https://example.com/news/cup-final",
            "Underdogs lift the cup after penalty shoot-out",
            "A late equaliser forced extra time before a dramatic finish.",
            "Sports Central",
            Some("Marta Silva"),
            "sports",
            (2024, 5, 12, 21),
        ),
        article(
            "https://example.com/news/vaccine-trial",
            "Phase III trial results published for malaria vaccine",
            "Efficacy held above 75 percent across all age groups.",
            "Health Today",
            None,
            "health",
            (2024, 5, 11, 8),
        ),
    ]
}
