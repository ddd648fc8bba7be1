//! `fauna generate [NAME]` – fetch, filter, and write the HTML page.

use anyhow::Result;
use fauna_core::config::FaunaConfig;
use fauna_core::fetch::AnimalsClient;
use fauna_core::model::Selections;
use fauna_core::pipeline;
use std::io;

use crate::cli::{parse_filter_arg, prompt};

pub fn run_generate(
    cfg: &FaunaConfig,
    client: &AnimalsClient,
    name: Option<String>,
    filters: &[String],
    no_prompt: bool,
) -> Result<()> {
    // Flag errors must surface before any network traffic.
    let mut preset = Selections::new();
    for raw in filters {
        let (field, value) = parse_filter_arg(raw)?;
        preset.set(&field, value);
    }
    // Any --filter flag makes the run non-interactive.
    let interactive = !no_prompt && filters.is_empty();

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut writer = io::stdout();

    let name = match name {
        Some(name) => name,
        None => prompt::prompt_animal_name(&mut reader, &mut writer)?,
    };

    let outcome = pipeline::generate(cfg, client, &name, |animals| {
        if interactive {
            prompt::prompt_filters(&mut reader, &mut writer, animals)
        } else {
            Ok(preset)
        }
    })?;

    println!("\n{}", outcome.status_line());
    Ok(())
}
