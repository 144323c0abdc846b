mod common;
use medley::{ApiResponse, CallContext, ContentItem, ContentKind, FeedPreferences};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let medley = common::builder().per_source_limit(3).build()?;

    // A user who follows tech news, sci-fi movies and jazz.
    let prefs = FeedPreferences {
        kinds: vec![ContentKind::News, ContentKind::Movie, ContentKind::Music],
        news_categories: vec!["technology".into(), "science".into()],
        movie_genres: vec!["Science Fiction".into()],
        music_genres: vec!["jazz".into()],
        country: Some("us".into()),
    };

    // The social feed needs a signed-in user; pass a token if one is configured.
    let mut ctx = CallContext::new();
    if let Ok(token) = std::env::var("MEDLEY_SESSION_TOKEN") {
        ctx = ctx.with_session_token(token);
    }

    let outcome = medley.personalized_feed(&prefs, &ctx).await;
    if let Some(reason) = outcome.reason() {
        println!("note: {reason}");
    }

    // The envelope a web handler would return.
    let envelope: ApiResponse<Vec<ContentItem>> = outcome.into();
    println!("{}", serde_json::to_string_pretty(&envelope)?);

    Ok(())
}
