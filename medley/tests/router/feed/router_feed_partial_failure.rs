use medley::{
    ApiResponse, CallContext, Capability, ContentItem, ContentKind, DegradeReason, FeedPreferences,
    Medley, MedleyError, ResponseStatus,
};

use crate::helpers::{MockConnector, ids, items};

fn news_only() -> FeedPreferences {
    FeedPreferences {
        kinds: vec![ContentKind::News],
        ..FeedPreferences::default()
    }
}

#[tokio::test]
async fn failed_source_contributes_nothing() {
    let a = MockConnector::builder()
        .name("a")
        .fails(Capability::TopHeadlines, MedleyError::http("a", 502))
        .build();
    let b = MockConnector::builder()
        .name("b")
        .returns_ok(Capability::TopHeadlines, items(ContentKind::News, &["1", "2", "3"]))
        .build();

    let medley = Medley::builder()
        .with_connector(a)
        .with_connector(b)
        .shuffle(false)
        .build()
        .unwrap();

    let out = medley
        .personalized_feed(&news_only(), &CallContext::new())
        .await;
    assert!(out.is_degraded());
    assert_eq!(
        ids(&out.data().unwrap().items),
        vec!["news-1", "news-2", "news-3"]
    );
    match out.reason() {
        Some(DegradeReason::PartialFailure { failed, .. }) => {
            assert_eq!(failed, &vec![MedleyError::http("a", 502)]);
        }
        other => panic!("unexpected: {other:?}"),
    }

    // The envelope still reports success with the surviving items.
    let env: ApiResponse<Vec<ContentItem>> = out.into();
    assert_eq!(env.status, ResponseStatus::Success);
    assert_eq!(env.data.len(), 3);
    assert!(env.message.is_some());
}

#[tokio::test]
async fn every_source_failing_is_a_failure() {
    let a = MockConnector::builder()
        .name("a")
        .fails(Capability::TopHeadlines, MedleyError::http("a", 500))
        .build();
    let b = MockConnector::builder()
        .name("b")
        .fails(Capability::TopHeadlines, MedleyError::decode("b", "eof"))
        .build();
    let medley = Medley::builder()
        .with_connector(a)
        .with_connector(b)
        .build()
        .unwrap();

    let out = medley
        .personalized_feed(&news_only(), &CallContext::new())
        .await;
    assert!(matches!(
        out.error(),
        Some(MedleyError::AllProvidersFailed(errs)) if errs.len() == 2
    ));
}

#[tokio::test]
async fn sample_data_sources_are_named_in_the_reason() {
    let sampled = MockConnector::builder()
        .name("sampled")
        .falls_back(Capability::TopHeadlines, items(ContentKind::News, &["s"]))
        .build();
    let live = MockConnector::builder()
        .name("live")
        .returns_ok(Capability::TopHeadlines, items(ContentKind::News, &["l"]))
        .build();
    let medley = Medley::builder()
        .with_connector(sampled)
        .with_connector(live)
        .shuffle(false)
        .build()
        .unwrap();

    let out = medley
        .personalized_feed(&news_only(), &CallContext::new())
        .await;
    assert_eq!(ids(&out.data().unwrap().items), vec!["news-s", "news-l"]);
    match out.reason() {
        Some(DegradeReason::PartialFailure { failed, fallbacks }) => {
            assert!(failed.is_empty());
            assert_eq!(fallbacks, &vec!["sampled".to_string()]);
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[tokio::test]
async fn social_without_session_flags_requires_auth() {
    let c = MockConnector::builder()
        .name("c")
        .returns_ok(Capability::TopTracks, items(ContentKind::Music, &["t"]))
        .with_fn(Capability::FeedPosts, |_, ctx| {
            if ctx.session_token().is_some() {
                medley::Outcome::Success(medley::ContentPage::new(items(
                    ContentKind::Social,
                    &["p"],
                )))
            } else {
                medley::Outcome::Failure(MedleyError::auth_required("c"))
            }
        })
        .build();
    let medley = Medley::builder()
        .with_connector(c)
        .shuffle(false)
        .build()
        .unwrap();
    let prefs = FeedPreferences {
        kinds: vec![ContentKind::Music, ContentKind::Social],
        ..FeedPreferences::default()
    };

    let anonymous = medley.personalized_feed(&prefs, &CallContext::new()).await;
    assert!(anonymous.requires_auth());
    assert_eq!(ids(&anonymous.data().unwrap().items), vec!["music-t"]);

    let signed_in = CallContext::new().with_session_token("tok");
    let out = medley.personalized_feed(&prefs, &signed_in).await;
    assert!(out.is_success());
    assert_eq!(ids(&out.data().unwrap().items), vec!["music-t", "feed-p"]);
}
