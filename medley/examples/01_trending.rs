mod common;
use medley::{CallContext, Outcome};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Connectors from the environment (mock in CI when MEDLEY_EXAMPLES_USE_MOCK is set).
    let medley = common::builder().trending_limit(12).build()?;

    // 2. Fetch trending content across every provider.
    let outcome = medley.trending_content(&CallContext::new()).await;

    // 3. Report how the data was obtained, then print it.
    match &outcome {
        Outcome::Success(_) => println!("All sources answered live."),
        Outcome::Degraded { reason, .. } => println!("Degraded: {reason}"),
        Outcome::Failure(e) => {
            eprintln!("Trending failed: {e}");
            return Ok(());
        }
    }

    println!("\n## Trending");
    println!("{:<8} | {:<28} | {:<44} | Source", "Kind", "Id", "Title");
    println!("{:-<9}|{:-<30}|{:-<46}|{:-<15}", "", "", "", "");
    if let Some(page) = outcome.data() {
        for item in &page.items {
            println!(
                "{:<8} | {:<28} | {:<44} | {}",
                item.kind().to_string(),
                item.id,
                truncate(&item.title, 44),
                item.source
            );
        }
    }

    Ok(())
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max - 1).collect();
        format!("{cut}…")
    }
}
