//! Lists recent lifelogs for the account tied to `LIMITLESS_API_KEY`.
//!
//! Usage: `LIMITLESS_API_KEY=... cargo run --example list_lifelogs`

use lifelog_core::{Direction, GetLifelogsParams, LifelogClient};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_key = std::env::var("LIMITLESS_API_KEY")
        .map_err(|_| "LIMITLESS_API_KEY environment variable is required")?;

    let client = LifelogClient::new(&api_key);
    let params = GetLifelogsParams {
        timezone: Some("America/New_York".to_string()),
        direction: Some(Direction::Desc),
        include_markdown: Some(false),
        limit: Some(10),
        ..Default::default()
    };

    let page = client.list_lifelogs(Some(&params))?;
    for lifelog in &page.data.lifelogs {
        println!("{} - {}", lifelog.id, lifelog.title);
    }
    if let Some(cursor) = &page.meta.lifelogs.next_cursor {
        println!("next page cursor: {cursor}");
    }
    Ok(())
}
