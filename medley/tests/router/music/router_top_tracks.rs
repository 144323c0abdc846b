use medley::{CallContext, Capability, ContentKind, Medley, MusicQuery};

use crate::helpers::{MockConnector, Seen, ids, items};

#[tokio::test]
async fn top_tracks_passes_genre_and_market() {
    let c = MockConnector::builder()
        .returns_ok(Capability::TopTracks, items(ContentKind::Music, &["t1", "t2"]))
        .build();
    let medley = Medley::builder().with_connector(c.clone()).build().unwrap();

    let q = MusicQuery {
        genre: Some("indie".into()),
        market: "SE".into(),
        limit: 2,
        ..MusicQuery::default()
    };
    let out = medley.top_tracks(&q, &CallContext::new()).await;
    assert_eq!(ids(&out.data().unwrap().items), vec!["t1", "t2"]);
    assert_eq!(c.calls(), vec![(Capability::TopTracks, Seen::Music(q))]);
}

#[tokio::test]
async fn search_tracks_uses_search_prefix_for_repeats() {
    let c = MockConnector::builder()
        .returns_ok(Capability::SearchTracks, items(ContentKind::Music, &["x", "x"]))
        .build();
    let medley = Medley::builder().with_connector(c).build().unwrap();

    let q = MusicQuery {
        query: Some("daft punk".into()),
        ..MusicQuery::default()
    };
    let out = medley.search_tracks(&q, &CallContext::new()).await;
    assert_eq!(ids(&out.data().unwrap().items), vec!["x", "search-x-1"]);
}
