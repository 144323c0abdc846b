use std::collections::HashSet;

use medley::{CallContext, Capability, ContentKind, Medley, MedleyError};

use crate::helpers::{MockConnector, Seen, ids, items};

fn everything(name: &'static str) -> std::sync::Arc<MockConnector> {
    MockConnector::builder()
        .name(name)
        .returns_ok(Capability::PopularMovies, items(ContentKind::Movie, &["m1", "m2"]))
        .returns_ok(Capability::TopHeadlines, items(ContentKind::News, &["n1", "n2"]))
        .returns_ok(Capability::TopTracks, items(ContentKind::Music, &["t1", "t2"]))
        .returns_ok(Capability::TrendingPosts, items(ContentKind::Social, &["p1", "p2"]))
        .build()
}

#[tokio::test]
async fn trending_merges_every_kind_in_order_without_shuffle() {
    let medley = Medley::builder()
        .with_connector(everything("all"))
        .shuffle(false)
        .build()
        .unwrap();

    let out = medley.trending_content(&CallContext::new()).await;
    assert!(out.is_success());
    assert_eq!(
        ids(&out.data().unwrap().items),
        vec![
            "popular-m1",
            "popular-m2",
            "news-n1",
            "news-n2",
            "music-t1",
            "music-t2",
            "trending-p1",
            "trending-p2",
        ]
    );
}

#[tokio::test]
async fn trending_truncates_to_limit() {
    let medley = Medley::builder()
        .with_connector(everything("all"))
        .shuffle(false)
        .trending_limit(3)
        .build()
        .unwrap();

    let page = medley
        .trending_content(&CallContext::new())
        .await
        .into_data()
        .unwrap();
    assert_eq!(ids(&page.items), vec!["popular-m1", "popular-m2", "news-n1"]);
    assert_eq!(page.total_results, Some(3));
}

#[tokio::test]
async fn shuffled_trending_keeps_unique_ids() {
    let medley = Medley::builder()
        .with_connector(everything("a"))
        .with_connector(everything("b"))
        .trending_limit(100)
        .build()
        .unwrap();

    let page = medley
        .trending_content(&CallContext::new())
        .await
        .into_data()
        .unwrap();
    assert_eq!(page.len(), 16);
    let unique: HashSet<&str> = ids(&page.items).into_iter().collect();
    assert_eq!(unique.len(), 16);
}

#[tokio::test]
async fn every_source_is_asked_for_per_source_limit() {
    let c = everything("all");
    let medley = Medley::builder()
        .with_connector(c.clone())
        .per_source_limit(3)
        .build()
        .unwrap();

    let _ = medley.trending_content(&CallContext::new()).await;

    let seen = c.calls();
    assert_eq!(seen.len(), 4);
    for (_, s) in seen {
        match s {
            Seen::Movie(q) => assert_eq!(q.limit, Some(3)),
            Seen::News(q) => assert_eq!(q.page_size, 3),
            Seen::Music(q) => assert_eq!(q.limit, 3),
            Seen::Social(q) => assert_eq!(q.limit, 3),
        }
    }
}

#[tokio::test]
async fn all_sources_failing_is_an_error() {
    let c = MockConnector::builder()
        .name("down")
        .fails(Capability::PopularMovies, MedleyError::http("down", 500))
        .fails(Capability::TopHeadlines, MedleyError::http("down", 502))
        .build();
    let medley = Medley::builder().with_connector(c).build().unwrap();

    let out = medley.trending_content(&CallContext::new()).await;
    assert!(matches!(
        out.error(),
        Some(MedleyError::AllProvidersFailed(errs)) if errs.len() == 2
    ));
}

#[tokio::test]
async fn trending_without_capable_providers_is_unsupported() {
    let c = MockConnector::builder()
        .returns_ok(Capability::SearchNews, items(ContentKind::News, &["n"]))
        .build();
    let medley = Medley::builder().with_connector(c).build().unwrap();

    // The news provider is registered, but only answers search.
    let out = medley.trending_content(&CallContext::new()).await;
    assert_eq!(out.error(), Some(&MedleyError::unsupported("trending")));
}
