//! Result printing.

use anyhow::{Context, Result};

use episodic_core::FeedItem;

pub fn print_json(items: &[FeedItem]) -> Result<()> {
    let json = serde_json::to_string_pretty(items).context("Failed to serialize results")?;
    println!("{}", json);
    Ok(())
}

pub fn print_table(items: &[FeedItem]) {
    if items.is_empty() {
        println!("No results.");
        return;
    }

    for (i, item) in items.iter().enumerate() {
        println!("{:>3}. {}", i + 1, item.title);
        println!("     {}", details(item));
        let magnet = item.magnet_uri();
        if !magnet.is_empty() {
            println!("     {}", magnet);
        }
    }
}

/// Swarm summary, plus the publish date when the feed gave a parseable one.
fn details(item: &FeedItem) -> String {
    match item.published_at() {
        Some(date) => format!("{} | {}", item.summary(), date.format("%Y-%m-%d %H:%M UTC")),
        None => item.summary(),
    }
}
