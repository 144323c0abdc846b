use medley::{
    CallContext, Capability, ContentKind, FeedPreferences, Medley, MovieQuery, MusicQuery,
    NewsQuery,
};

use crate::helpers::{MockConnector, Seen, items};

fn everything() -> std::sync::Arc<MockConnector> {
    MockConnector::builder()
        .name("all")
        .returns_ok(Capability::TopHeadlines, items(ContentKind::News, &["n"]))
        .returns_ok(Capability::PopularMovies, items(ContentKind::Movie, &["m"]))
        .returns_ok(Capability::MoviesByGenre, items(ContentKind::Movie, &["g"]))
        .returns_ok(Capability::TopTracks, items(ContentKind::Music, &["t"]))
        .returns_ok(Capability::FeedPosts, items(ContentKind::Social, &["p"]))
        .build()
}

#[tokio::test]
async fn one_request_per_category_and_genre() {
    let c = everything();
    let medley = Medley::builder()
        .with_connector(c.clone())
        .per_source_limit(4)
        .build()
        .unwrap();

    let prefs = FeedPreferences {
        kinds: vec![ContentKind::News, ContentKind::Movie, ContentKind::Music],
        news_categories: vec!["sports".into(), "technology".into()],
        movie_genres: vec!["Action".into()],
        music_genres: vec!["jazz".into(), "rock".into()],
        country: Some("gb".into()),
    };
    let out = medley.personalized_feed(&prefs, &CallContext::new()).await;
    assert!(out.is_success());
    // 2 headline groups + 1 genre group + 2 track groups, one item each.
    assert_eq!(out.data().unwrap().len(), 5);

    assert_eq!(c.call_count(Capability::TopHeadlines), 2);
    assert_eq!(c.call_count(Capability::MoviesByGenre), 1);
    assert_eq!(c.call_count(Capability::PopularMovies), 0);
    assert_eq!(c.call_count(Capability::TopTracks), 2);
    assert_eq!(c.call_count(Capability::FeedPosts), 0);

    let calls = c.calls();
    assert!(calls.contains(&(
        Capability::TopHeadlines,
        Seen::News(NewsQuery {
            country: Some("gb".into()),
            category: Some("technology".into()),
            page_size: 4,
            ..NewsQuery::default()
        })
    )));
    assert!(calls.contains(&(
        Capability::MoviesByGenre,
        Seen::Movie(MovieQuery {
            genre: Some("Action".into()),
            limit: Some(4),
            ..MovieQuery::default()
        })
    )));
    assert!(calls.contains(&(
        Capability::TopTracks,
        Seen::Music(MusicQuery {
            genre: Some("rock".into()),
            limit: 4,
            ..MusicQuery::default()
        })
    )));
}

#[tokio::test]
async fn no_movie_genres_means_popular_movies() {
    let c = everything();
    let medley = Medley::builder().with_connector(c.clone()).build().unwrap();

    let prefs = FeedPreferences {
        kinds: vec![ContentKind::Movie],
        ..FeedPreferences::default()
    };
    let out = medley.personalized_feed(&prefs, &CallContext::new()).await;
    assert_eq!(out.data().unwrap().items[0].id, "popular-m");
    assert_eq!(c.call_count(Capability::PopularMovies), 1);
    assert_eq!(c.call_count(Capability::TopHeadlines), 0);
}

#[tokio::test]
async fn empty_kind_list_means_every_kind() {
    let c = everything();
    let medley = Medley::builder().with_connector(c.clone()).build().unwrap();

    let prefs = FeedPreferences {
        kinds: Vec::new(),
        ..FeedPreferences::default()
    };
    let ctx = CallContext::new().with_session_token("tok");
    let out = medley.personalized_feed(&prefs, &ctx).await;
    assert!(out.is_success());
    // general headlines, popular movies, unfiltered tracks, feed posts
    assert_eq!(out.data().unwrap().len(), 4);
}
