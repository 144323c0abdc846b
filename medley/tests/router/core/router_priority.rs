use medley::{CallContext, Capability, ContentKind, Medley, MedleyError, MovieQuery, NewsQuery};

use crate::helpers::{MockConnector, dyn_conn, ids, items};

#[tokio::test]
async fn registration_order_decides_without_preferences() {
    let first = MockConnector::builder()
        .name("first")
        .returns_ok(Capability::PopularMovies, items(ContentKind::Movie, &["1"]))
        .build();
    let second = MockConnector::builder()
        .name("second")
        .returns_ok(Capability::PopularMovies, items(ContentKind::Movie, &["2"]))
        .build();

    let medley = Medley::builder()
        .with_connector(first.clone())
        .with_connector(second.clone())
        .build()
        .unwrap();

    let out = medley
        .popular_movies(&MovieQuery::default(), &CallContext::new())
        .await;
    assert!(out.is_success());
    assert_eq!(ids(&out.data().unwrap().items), vec!["1"]);
    assert_eq!(second.call_count(Capability::PopularMovies), 0);
}

#[tokio::test]
async fn per_kind_priority_is_applied() {
    let low = MockConnector::builder()
        .name("low")
        .returns_ok(Capability::PopularMovies, items(ContentKind::Movie, &["low"]))
        .returns_ok(Capability::TopHeadlines, items(ContentKind::News, &["low-news"]))
        .build();
    let high = MockConnector::builder()
        .name("high")
        .returns_ok(Capability::PopularMovies, items(ContentKind::Movie, &["high"]))
        .returns_ok(Capability::TopHeadlines, items(ContentKind::News, &["high-news"]))
        .build();

    let medley = Medley::builder()
        .with_connector(low.clone())
        .with_connector(high.clone())
        .prefer_for_kind(ContentKind::Movie, &[dyn_conn(&high), dyn_conn(&low)])
        .build()
        .unwrap();

    let ctx = CallContext::new();
    let movies = medley.popular_movies(&MovieQuery::default(), &ctx).await;
    assert_eq!(ids(&movies.data().unwrap().items), vec!["high"]);

    // News has no preference, so registration order still applies.
    let news = medley.top_headlines(&NewsQuery::default(), &ctx).await;
    assert_eq!(ids(&news.data().unwrap().items), vec!["low-news"]);
}

#[tokio::test]
async fn sample_data_is_kept_until_a_later_provider_succeeds() {
    let sampled = MockConnector::builder()
        .name("sampled")
        .falls_back(Capability::TopTracks, items(ContentKind::Music, &["sample"]))
        .build();
    let live = MockConnector::builder()
        .name("live")
        .returns_ok(Capability::TopTracks, items(ContentKind::Music, &["live"]))
        .build();

    let medley = Medley::builder()
        .with_connector(sampled.clone())
        .with_connector(live)
        .build()
        .unwrap();
    let out = medley
        .top_tracks(&Default::default(), &CallContext::new())
        .await;
    assert!(out.is_success());
    assert_eq!(ids(&out.data().unwrap().items), vec!["live"]);

    let medley = Medley::builder().with_connector(sampled).build().unwrap();
    let out = medley
        .top_tracks(&Default::default(), &CallContext::new())
        .await;
    assert!(out.is_degraded());
    assert_eq!(ids(&out.data().unwrap().items), vec!["sample"]);
}

#[tokio::test]
async fn failures_collapse_into_all_providers_failed() {
    let a = MockConnector::builder()
        .name("a")
        .fails(Capability::TopHeadlines, MedleyError::http("a", 500))
        .build();
    let b = MockConnector::builder()
        .name("b")
        .fails(Capability::TopHeadlines, MedleyError::connector("b", "boom"))
        .build();

    let medley = Medley::builder()
        .with_connector(a)
        .with_connector(b)
        .build()
        .unwrap();
    let out = medley
        .top_headlines(&NewsQuery::default(), &CallContext::new())
        .await;
    assert_eq!(
        out.error(),
        Some(&MedleyError::AllProvidersFailed(vec![
            MedleyError::http("a", 500),
            MedleyError::connector("b", "boom"),
        ]))
    );
}

#[tokio::test]
async fn missing_capability_is_unsupported() {
    let music_only = MockConnector::builder()
        .returns_ok(Capability::TopTracks, items(ContentKind::Music, &["t"]))
        .build();
    let medley = Medley::builder().with_connector(music_only).build().unwrap();

    let out = medley
        .popular_movies(&MovieQuery::default(), &CallContext::new())
        .await;
    assert_eq!(out.error(), Some(&MedleyError::unsupported("popular-movies")));

    // A served kind without a handler for the method is still unsupported.
    let out = medley
        .search_tracks(&Default::default(), &CallContext::new())
        .await;
    assert_eq!(out.error(), Some(&MedleyError::unsupported("search-tracks")));
}
