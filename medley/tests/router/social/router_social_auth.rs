use std::sync::Arc;

use medley::{
    ApiResponse, CallContext, Capability, ContentItem, ContentKind, ContentPage, Medley,
    MedleyError, Outcome, ResponseStatus, SocialQuery,
};

use crate::helpers::{MockConnector, ids, items};

fn session_only(name: &'static str, id: &'static str) -> Arc<MockConnector> {
    MockConnector::builder()
        .name(name)
        .with_fn(Capability::FeedPosts, move |_, ctx| match ctx.session_token() {
            Some(_) => Outcome::Success(ContentPage::new(items(ContentKind::Social, &[id]))),
            None => Outcome::Failure(MedleyError::auth_required(name)),
        })
        .build()
}

#[tokio::test]
async fn feed_without_session_requires_auth() {
    let medley = Medley::builder()
        .with_connector(session_only("twitter", "t"))
        .with_connector(session_only("backend", "b"))
        .build()
        .unwrap();

    let out = medley
        .feed_posts(&SocialQuery::default(), &CallContext::new())
        .await;
    assert_eq!(out.error(), Some(&MedleyError::auth_required("twitter")));

    let env: ApiResponse<Vec<ContentItem>> = out.into();
    assert_eq!(env.status, ResponseStatus::Error);
    assert!(env.requires_auth);
    assert!(env.data.is_empty());
}

#[tokio::test]
async fn feed_with_session_uses_first_provider() {
    let medley = Medley::builder()
        .with_connector(session_only("twitter", "t"))
        .with_connector(session_only("backend", "b"))
        .build()
        .unwrap();

    let ctx = CallContext::new().with_session_token("user-token");
    let out = medley.feed_posts(&SocialQuery::default(), &ctx).await;
    assert!(out.is_success());
    assert_eq!(ids(&out.data().unwrap().items), vec!["t"]);
}

#[tokio::test]
async fn trending_posts_do_not_need_a_session() {
    let c = MockConnector::builder()
        .returns_ok(Capability::TrendingPosts, items(ContentKind::Social, &["1", "2"]))
        .build();
    let medley = Medley::builder().with_connector(c).build().unwrap();

    let q = SocialQuery {
        hashtag: Some("rust".into()),
        ..SocialQuery::default()
    };
    let out = medley.trending_posts(&q, &CallContext::new()).await;
    assert!(out.is_success());
    assert!(!out.requires_auth());
    assert_eq!(out.data().unwrap().len(), 2);
}
