use medley_core::{Capability, ContentKind};

use crate::Medley;
use crate::medley_router_method;

impl Medley {
    medley_router_method! {
        /// Top headlines for a country and category from the first capable provider.
        method: top_headlines(query: &medley_core::NewsQuery),
        kind: ContentKind::News,
        accessor: as_news_provider,
        capability: Capability::TopHeadlines,
        prefix: "news",
        call: top_headlines
    }

    medley_router_method! {
        /// Keyword search over news articles.
        method: search_news(query: &medley_core::NewsQuery),
        kind: ContentKind::News,
        accessor: as_news_provider,
        capability: Capability::SearchNews,
        prefix: "search",
        call: search_news
    }
}
