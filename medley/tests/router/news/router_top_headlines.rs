use medley::{
    ApiResponse, CallContext, Capability, ContentItem, ContentKind, Medley, NewsQuery,
    ResponseStatus,
};

use crate::helpers::{MockConnector, Seen, items};

#[tokio::test]
async fn headlines_forward_country_and_page_size() {
    let c = MockConnector::builder()
        .with_fn(Capability::TopHeadlines, |seen, _| match seen {
            Seen::News(q) => {
                let ids: Vec<String> = (0..q.page_size).map(|i| format!("a{i}")).collect();
                let refs: Vec<&str> = ids.iter().map(String::as_str).collect();
                medley::Outcome::Success(
                    medley::ContentPage::new(items(ContentKind::News, &refs))
                        .with_total(Some(140)),
                )
            }
            other => panic!("unexpected request: {other:?}"),
        })
        .build();
    let medley = Medley::builder().with_connector(c).build().unwrap();

    let q = NewsQuery {
        country: Some("in".into()),
        page_size: 2,
        ..NewsQuery::default()
    };
    let out = medley.top_headlines(&q, &CallContext::new()).await;
    let env: ApiResponse<Vec<ContentItem>> = out.into();
    assert_eq!(env.status, ResponseStatus::Success);
    assert_eq!(env.data.len(), 2);
    assert!(env.data.iter().all(|i| i.kind() == ContentKind::News));
    assert_eq!(env.total_results, Some(140));
    assert!(env.message.is_none());
}

#[tokio::test]
async fn search_news_routes_to_search() {
    let c = MockConnector::builder()
        .returns_ok(Capability::SearchNews, items(ContentKind::News, &["s"]))
        .build();
    let medley = Medley::builder().with_connector(c.clone()).build().unwrap();

    let q = NewsQuery {
        keywords: Some("climate".into()),
        ..NewsQuery::default()
    };
    let out = medley.search_news(&q, &CallContext::new()).await;
    assert!(out.is_success());
    assert_eq!(c.call_count(Capability::SearchNews), 1);
    assert_eq!(c.call_count(Capability::TopHeadlines), 0);
}
