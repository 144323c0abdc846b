use medley::{CallContext, Capability, ContentKind, Medley, SearchRequest};

use crate::helpers::{MockConnector, ids, items};

#[tokio::test]
async fn limit_truncates_after_merge() {
    let a = MockConnector::builder()
        .name("a")
        .returns_ok(Capability::SearchMovies, items(ContentKind::Movie, &["1", "2", "3"]))
        .build();
    let b = MockConnector::builder()
        .name("b")
        .returns_ok(Capability::SearchTracks, items(ContentKind::Music, &["4", "5"]))
        .build();
    let medley = Medley::builder()
        .with_connector(a)
        .with_connector(b)
        .build()
        .unwrap();

    let req = SearchRequest::builder("q").limit(4).build().unwrap();
    let out = medley.search_all_content(&req, &CallContext::new()).await;
    let page = out.data().unwrap();
    assert_eq!(ids(&page.items), vec!["movies-1", "movies-2", "movies-3", "music-4"]);
    assert_eq!(page.total_results, Some(4));
}

#[tokio::test]
async fn limit_larger_than_results_keeps_everything() {
    let a = MockConnector::builder()
        .returns_ok(Capability::SearchNews, items(ContentKind::News, &["1", "2"]))
        .build();
    let medley = Medley::builder().with_connector(a).build().unwrap();

    let req = SearchRequest::builder("q").limit(50).build().unwrap();
    let page = medley
        .search_all_content(&req, &CallContext::new())
        .await
        .into_data()
        .unwrap();
    assert_eq!(page.len(), 2);
    assert_eq!(page.total_results, Some(2));
}
