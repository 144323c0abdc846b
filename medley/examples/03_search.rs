mod common;
use medley::{
    CallContext, ContentKind, MovieQuery, SearchRequest, remove_duplicates_by_original_id,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let medley = common::builder().build()?;

    // 1. Search everything for "dune", capped at 10 results.
    let request = SearchRequest::builder("dune").limit(10).build()?;
    println!("Searching for 'dune' across all sources...");
    let outcome = medley
        .search_all_content(&request, &CallContext::new())
        .await;

    match outcome.into_result() {
        Ok(page) => {
            println!("\n## {} results", page.len());
            for item in &page.items {
                println!("[{}] {} ({})", item.kind(), item.title, item.id);
            }
        }
        Err(e) => eprintln!("search failed: {e}"),
    }

    // 2. Movies only, with the per-list duplicates collapsed.
    let request = SearchRequest::builder("dune")
        .kind(ContentKind::Movie)
        .build()?;
    let ctx = CallContext::new();
    let movie_query = MovieQuery::default();
    let (search, showcase) = tokio::join!(
        medley.search_all_content(&request, &ctx),
        medley.movie_showcase(&movie_query, &ctx),
    );
    if let Some(page) = search.data() {
        println!("\n## Movies matching 'dune': {}", page.len());
    }
    if let Some(page) = showcase.into_data() {
        let distinct = remove_duplicates_by_original_id(page.items.clone());
        println!(
            "## Showcase: {} entries, {} distinct titles",
            page.len(),
            distinct.len()
        );
    }

    Ok(())
}
