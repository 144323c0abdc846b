use medley_core::{Capability, ContentKind};

use crate::Medley;
use crate::medley_router_method;

impl Medley {
    medley_router_method! {
        /// The signed-in user's feed.
        ///
        /// Needs a session token on the `CallContext`; without one every social
        /// provider answers `AuthRequired` and so does this call.
        method: feed_posts(query: &medley_core::SocialQuery),
        kind: ContentKind::Social,
        accessor: as_social_provider,
        capability: Capability::FeedPosts,
        prefix: "feed",
        call: feed_posts
    }

    medley_router_method! {
        /// Posts trending on the platform, optionally for one hashtag.
        method: trending_posts(query: &medley_core::SocialQuery),
        kind: ContentKind::Social,
        accessor: as_social_provider,
        capability: Capability::TrendingPosts,
        prefix: "trending",
        call: trending_posts
    }

    medley_router_method! {
        /// Free-text post search.
        method: search_posts(query: &medley_core::SocialQuery),
        kind: ContentKind::Social,
        accessor: as_social_provider,
        capability: Capability::SearchPosts,
        prefix: "search",
        call: search_posts
    }
}
