mod common;
use medley::{CallContext, MovieQuery, SearchRequest};
use tracing_subscriber::fmt::format::FmtSpan;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Suggested: RUST_LOG=info,medley=trace,medley_providers=debug
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
        .try_init();

    let medley = common::builder().build()?;
    let ctx = CallContext::new();

    let _ = medley.popular_movies(&MovieQuery::default(), &ctx).await;
    let _ = medley.trending_content(&ctx).await;
    let _ = medley
        .search_all_content(&SearchRequest::new("space")?, &ctx)
        .await;

    Ok(())
}
