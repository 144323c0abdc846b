//! Identifier uniquification for merged result sets.
//!
//! Raw provider ids collide across pages and across providers ("5" is both a
//! TMDB movie and a tweet). These functions are the single place where a
//! result set is made collision-free. Resolution is positional: the first
//! occurrence keeps the simplest id, later ones get `-<index>`, then a
//! millisecond timestamp, then a counter.

use std::collections::HashSet;

use chrono::Utc;
use medley_types::ContentItem;

/// Source prefixes the orchestrator attaches; stripped by [`original_id`].
pub const KNOWN_PREFIXES: &[&str] = &[
    "popular",
    "top-rated",
    "now-playing",
    "genre",
    "trending",
    "feed",
    "search",
    "news",
    "movies",
    "music",
    "social",
    "twitter",
];

/// A batch of items tagged with the prefix of the source that produced them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceGroup {
    /// Items in provider order.
    pub items: Vec<ContentItem>,
    /// Prefix applied to every id in the group.
    pub prefix: Option<String>,
}

impl SourceGroup {
    /// Group without a prefix.
    #[must_use]
    pub const fn new(items: Vec<ContentItem>) -> Self {
        Self {
            items,
            prefix: None,
        }
    }

    /// Group whose ids get `prefix-` prepended.
    pub fn prefixed(prefix: impl Into<String>, items: Vec<ContentItem>) -> Self {
        Self {
            items,
            prefix: Some(prefix.into()),
        }
    }
}

/// Rewrite colliding ids so every id in the result is distinct.
///
/// Items keep their order and content; only a repeated `id` is rewritten, to
/// `prefix-id-index` (or `id-index` without a prefix) where `index` is the
/// item's position in `items`.
#[must_use]
pub fn ensure_unique_ids(items: Vec<ContentItem>, prefix: Option<&str>) -> Vec<ContentItem> {
    let mut seen: HashSet<String> = HashSet::with_capacity(items.len());
    items
        .into_iter()
        .enumerate()
        .map(|(index, mut item)| {
            if seen.contains(&item.id) {
                let candidate = match prefix {
                    Some(p) if !p.is_empty() => format!("{p}-{}-{index}", item.id),
                    _ => format!("{}-{index}", item.id),
                };
                item.id = resolve(candidate, &seen);
            }
            seen.insert(item.id.clone());
            item
        })
        .collect()
}

/// Concatenate groups, prefixing every id with its group's prefix and
/// resolving collisions against one set shared across all groups.
///
/// A colliding id becomes `prefixed-index`, with `index` the item's position
/// inside its own group.
#[must_use]
pub fn combine_with_unique_ids<I>(groups: I) -> Vec<ContentItem>
where
    I: IntoIterator<Item = SourceGroup>,
{
    let mut seen: HashSet<String> = HashSet::new();
    let mut out: Vec<ContentItem> = Vec::new();
    for group in groups {
        out.reserve(group.items.len());
        for (index, mut item) in group.items.into_iter().enumerate() {
            let base = match group.prefix.as_deref() {
                Some(p) if !p.is_empty() => format!("{p}-{}", item.id),
                _ => std::mem::take(&mut item.id),
            };
            let id = if seen.contains(&base) {
                resolve(format!("{base}-{index}"), &seen)
            } else {
                base
            };
            seen.insert(id.clone());
            item.id = id;
            out.push(item);
        }
    }
    out
}

/// Strip one known source prefix from `id`.
#[must_use]
pub fn original_id(id: &str) -> &str {
    KNOWN_PREFIXES
        .iter()
        .find_map(|p| id.strip_prefix(p).and_then(|rest| rest.strip_prefix('-')))
        .filter(|rest| !rest.is_empty())
        .unwrap_or(id)
}

/// Collapse items that share an [`original_id`], keeping the first seen.
///
/// Lossy: later variants of the same underlying item are dropped.
#[must_use]
pub fn remove_duplicates_by_original_id(items: Vec<ContentItem>) -> Vec<ContentItem> {
    let mut seen: HashSet<String> = HashSet::with_capacity(items.len());
    items
        .into_iter()
        .filter(|item| seen.insert(original_id(&item.id).to_string()))
        .collect()
}

fn resolve(candidate: String, seen: &HashSet<String>) -> String {
    if !seen.contains(&candidate) {
        return candidate;
    }
    let stamped = format!("{candidate}-{}", Utc::now().timestamp_millis());
    if !seen.contains(&stamped) {
        return stamped;
    }
    let mut n: u64 = 1;
    loop {
        let next = format!("{stamped}-{n}");
        if !seen.contains(&next) {
            return next;
        }
        n += 1;
    }
}
