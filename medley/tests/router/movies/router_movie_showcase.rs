use medley::{CallContext, Capability, ContentKind, Medley, MedleyError, MovieQuery, original_id};

use crate::helpers::{MockConnector, ids, items};

#[tokio::test]
async fn showcase_merges_three_lists_in_order() {
    let c = MockConnector::builder()
        .returns_ok(Capability::PopularMovies, items(ContentKind::Movie, &["550", "13"]))
        .returns_ok(Capability::TopRatedMovies, items(ContentKind::Movie, &["550"]))
        .returns_ok(Capability::NowPlayingMovies, items(ContentKind::Movie, &["27205"]))
        .build();
    let medley = Medley::builder().with_connector(c).build().unwrap();

    let out = medley
        .movie_showcase(&MovieQuery::default(), &CallContext::new())
        .await;
    assert!(out.is_success());
    let page = out.data().unwrap();
    assert_eq!(
        ids(&page.items),
        vec!["popular-550", "popular-13", "top-rated-550", "now-playing-27205"]
    );
    assert_eq!(page.total_results, Some(4));
    assert_eq!(original_id(&page.items[2].id), "550");
}

#[tokio::test]
async fn showcase_survives_one_failed_list() {
    let c = MockConnector::builder()
        .returns_ok(Capability::PopularMovies, items(ContentKind::Movie, &["1"]))
        .fails(Capability::TopRatedMovies, MedleyError::http("m", 500))
        .returns_ok(Capability::NowPlayingMovies, items(ContentKind::Movie, &["2"]))
        .build();
    let medley = Medley::builder().with_connector(c).build().unwrap();

    let out = medley
        .movie_showcase(&MovieQuery::default(), &CallContext::new())
        .await;
    assert!(out.is_degraded());
    assert_eq!(ids(&out.data().unwrap().items), vec!["popular-1", "now-playing-2"]);
}

#[tokio::test]
async fn showcase_without_movie_providers_is_unsupported() {
    let c = MockConnector::builder()
        .returns_ok(Capability::TopTracks, items(ContentKind::Music, &["t"]))
        .build();
    let medley = Medley::builder().with_connector(c).build().unwrap();
    let out = medley
        .movie_showcase(&MovieQuery::default(), &CallContext::new())
        .await;
    assert_eq!(out.error(), Some(&MedleyError::unsupported("movie-showcase")));
}
