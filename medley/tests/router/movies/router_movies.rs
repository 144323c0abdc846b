use medley::{CallContext, Capability, ContentKind, Medley, MedleyError, MovieQuery};

use crate::helpers::{MockConnector, Seen, ids, items};

#[tokio::test]
async fn popular_movies_passes_query_and_keeps_raw_ids() {
    let c = MockConnector::builder()
        .returns_ok(Capability::PopularMovies, items(ContentKind::Movie, &["550", "13"]))
        .build();
    let medley = Medley::builder().with_connector(c.clone()).build().unwrap();

    let q = MovieQuery {
        page: 3,
        limit: Some(2),
        ..MovieQuery::default()
    };
    let out = medley.popular_movies(&q, &CallContext::new()).await;
    assert!(out.is_success());
    assert_eq!(ids(&out.data().unwrap().items), vec!["550", "13"]);
    assert_eq!(c.calls(), vec![(Capability::PopularMovies, Seen::Movie(q))]);
}

#[tokio::test]
async fn repeated_ids_in_one_page_get_the_list_prefix() {
    let c = MockConnector::builder()
        .returns_ok(Capability::TopRatedMovies, items(ContentKind::Movie, &["5", "5", "7"]))
        .returns_ok(Capability::NowPlayingMovies, items(ContentKind::Movie, &["9", "9"]))
        .build();
    let medley = Medley::builder().with_connector(c).build().unwrap();
    let ctx = CallContext::new();

    let top = medley.top_rated_movies(&MovieQuery::default(), &ctx).await;
    assert_eq!(ids(&top.data().unwrap().items), vec!["5", "top-rated-5-1", "7"]);

    let now = medley.now_playing_movies(&MovieQuery::default(), &ctx).await;
    assert_eq!(ids(&now.data().unwrap().items), vec!["9", "now-playing-9-1"]);
}

#[tokio::test]
async fn genre_and_search_route_to_their_methods() {
    let c = MockConnector::builder()
        .returns_ok(Capability::MoviesByGenre, items(ContentKind::Movie, &["g"]))
        .fails(
            Capability::SearchMovies,
            MedleyError::InvalidArg("query must not be empty".into()),
        )
        .build();
    let medley = Medley::builder().with_connector(c).build().unwrap();
    let ctx = CallContext::new();

    let q = MovieQuery {
        genre: Some("Drama".into()),
        ..MovieQuery::default()
    };
    let by_genre = medley.movies_by_genre(&q, &ctx).await;
    assert_eq!(ids(&by_genre.data().unwrap().items), vec!["g"]);

    // A rejected argument surfaces as itself, not as a provider outage.
    let search = medley.search_movies(&MovieQuery::default(), &ctx).await;
    assert!(matches!(search.error(), Some(MedleyError::InvalidArg(_))));
}
