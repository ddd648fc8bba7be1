//! `fauna fetch <NAME>` – fetch records and print them, no file output.

use anyhow::{Context, Result};
use fauna_core::fetch::AnimalsClient;

pub fn run_fetch(client: &AnimalsClient, name: &str, json: bool) -> Result<()> {
    // Diagnostic path: surface the failure kind instead of degrading to empty.
    let animals = client
        .fetch_raw(name)
        .with_context(|| format!("fetch for {name:?} failed"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&animals)?);
        return Ok(());
    }

    if animals.is_empty() {
        println!("No animals found for {name:?}.");
    } else {
        println!("{:<20} {:<12} {:<12} {}", "NAME", "DIET", "TYPE", "LOCATION");
        for a in &animals {
            println!(
                "{:<20} {:<12} {:<12} {}",
                a.name.as_deref().unwrap_or("-"),
                a.characteristic("diet").unwrap_or("-"),
                a.characteristic("type").unwrap_or("-"),
                a.first_location().unwrap_or("-"),
            );
        }
    }
    Ok(())
}
