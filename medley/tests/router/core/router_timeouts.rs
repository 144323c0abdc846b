use std::time::Duration;

use medley::{CallContext, Capability, ContentKind, Medley, MedleyError, NewsQuery};

use crate::helpers::{MockConnector, ids, items};

#[tokio::test(start_paused = true)]
async fn slow_providers_collapse_to_all_timed_out() {
    let a = MockConnector::builder()
        .name("a")
        .delay(Duration::from_secs(2))
        .returns_ok(Capability::TopHeadlines, items(ContentKind::News, &["a"]))
        .build();
    let b = MockConnector::builder()
        .name("b")
        .delay(Duration::from_secs(2))
        .returns_ok(Capability::TopHeadlines, items(ContentKind::News, &["b"]))
        .build();
    let medley = Medley::builder()
        .with_connector(a)
        .with_connector(b)
        .provider_timeout(Duration::from_millis(100))
        .build()
        .unwrap();

    let out = medley
        .top_headlines(&NewsQuery::default(), &CallContext::new())
        .await;
    assert_eq!(
        out.error(),
        Some(&MedleyError::AllProvidersTimedOut {
            capability: "top-headlines".into()
        })
    );
}

#[tokio::test(start_paused = true)]
async fn timed_out_provider_falls_through_to_the_next() {
    let slow = MockConnector::builder()
        .name("slow")
        .delay(Duration::from_secs(2))
        .returns_ok(Capability::TopHeadlines, items(ContentKind::News, &["slow"]))
        .build();
    let fast = MockConnector::builder()
        .name("fast")
        .returns_ok(Capability::TopHeadlines, items(ContentKind::News, &["fast"]))
        .build();
    let medley = Medley::builder()
        .with_connector(slow)
        .with_connector(fast)
        .provider_timeout(Duration::from_millis(100))
        .build()
        .unwrap();

    let out = medley
        .top_headlines(&NewsQuery::default(), &CallContext::new())
        .await;
    assert_eq!(ids(&out.data().unwrap().items), vec!["fast"]);
}

#[tokio::test(start_paused = true)]
async fn context_timeout_overrides_provider_timeout() {
    let c = MockConnector::builder()
        .name("c")
        .delay(Duration::from_millis(500))
        .returns_ok(Capability::TopHeadlines, items(ContentKind::News, &["c"]))
        .build();
    let medley = Medley::builder()
        .with_connector(c)
        .provider_timeout(Duration::from_secs(10))
        .build()
        .unwrap();

    let ctx = CallContext::new().with_timeout(Duration::from_millis(50));
    let out = medley.top_headlines(&NewsQuery::default(), &ctx).await;
    assert!(matches!(
        out.error(),
        Some(MedleyError::AllProvidersTimedOut { .. })
    ));
}

#[tokio::test(start_paused = true)]
async fn request_timeout_bounds_the_whole_fan_out() {
    let c = MockConnector::builder()
        .name("c")
        .delay(Duration::from_secs(3))
        .returns_ok(Capability::TopTracks, items(ContentKind::Music, &["t"]))
        .build();
    let medley = Medley::builder()
        .with_connector(c)
        .provider_timeout(Duration::from_secs(10))
        .request_timeout(Duration::from_millis(200))
        .build()
        .unwrap();

    let out = medley.trending_content(&CallContext::new()).await;
    assert_eq!(out.error(), Some(&MedleyError::request_timeout("trending")));
}

#[tokio::test(start_paused = true)]
async fn one_slow_source_only_drops_itself_from_trending() {
    let slow = MockConnector::builder()
        .name("slow")
        .delay(Duration::from_secs(2))
        .returns_ok(Capability::TopHeadlines, items(ContentKind::News, &["n"]))
        .build();
    let fast = MockConnector::builder()
        .name("fast")
        .returns_ok(Capability::TopTracks, items(ContentKind::Music, &["t1", "t2"]))
        .build();
    let medley = Medley::builder()
        .with_connector(slow)
        .with_connector(fast)
        .provider_timeout(Duration::from_millis(100))
        .build()
        .unwrap();

    let out = medley.trending_content(&CallContext::new()).await;
    assert!(out.is_degraded());
    assert_eq!(out.data().unwrap().len(), 2);
}
