#![allow(dead_code)]

// Re-export helpers so tests can `use crate::helpers::*;`
pub mod mock_connector;

pub use mock_connector::{MockConnector, Seen};

use std::sync::Arc;

use medley::{ContentItem, ContentKind, MedleyConnector};
use medley_core::fixtures;

/// Items of `kind` with the given raw ids, built from the sample datasets.
pub fn items(kind: ContentKind, ids: &[&str]) -> Vec<ContentItem> {
    let template = match kind {
        ContentKind::Movie => fixtures::movies::movies().remove(0),
        ContentKind::News => fixtures::news::articles().remove(0),
        ContentKind::Music => fixtures::music::tracks().remove(0),
        ContentKind::Social => fixtures::social::tweets().remove(0),
    };
    ids.iter()
        .map(|id| ContentItem {
            id: (*id).to_string(),
            title: format!("{kind} {id}"),
            ..template.clone()
        })
        .collect()
}

pub fn ids(items: &[ContentItem]) -> Vec<&str> {
    items.iter().map(|i| i.id.as_str()).collect()
}

/// Upcast for `prefer_for_kind`, which takes trait objects.
pub fn dyn_conn(c: &Arc<MockConnector>) -> Arc<dyn MedleyConnector> {
    Arc::clone(c) as Arc<dyn MedleyConnector>
}
