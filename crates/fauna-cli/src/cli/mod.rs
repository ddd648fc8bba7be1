//! CLI for the fauna site generator.

mod commands;
mod prompt;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use fauna_core::config;
use fauna_core::fetch::AnimalsClient;
use fauna_core::model::FilterValue;
use std::path::PathBuf;

use commands::{run_fetch, run_generate, run_values};

/// Filterable fields as (field name, display name), in menu order.
pub(crate) const FILTER_FIELDS: [(&str, &str); 4] = [
    ("skin_type", "Skin Type"),
    ("diet", "Diet"),
    ("type", "Type"),
    ("location", "Location"),
];

/// Top-level CLI for the fauna site generator.
#[derive(Debug, Parser)]
#[command(name = "fauna")]
#[command(about = "fauna: animal lookup and static page generator", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Fetch animals by name, filter them, and generate the HTML page.
    Generate {
        /// Animal name to search for. Prompted for when omitted.
        name: Option<String>,

        /// Preselect a filter as FIELD=VALUE (repeatable). Fields: skin_type,
        /// diet, type, location. VALUE `all` means no filtering on that field.
        #[arg(long, value_name = "FIELD=VALUE")]
        filter: Vec<String>,

        /// Skip the interactive filter menu (render whatever the fetch returned,
        /// narrowed only by --filter flags).
        #[arg(long)]
        no_prompt: bool,

        /// Template file to use instead of the configured one.
        #[arg(long, value_name = "PATH")]
        template: Option<PathBuf>,

        /// Output file to write instead of the configured one.
        #[arg(long, value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Fetch animals by name and print them (diagnostic; no file output).
    Fetch {
        /// Animal name to search for.
        name: String,

        /// Print the records as JSON instead of a summary table.
        #[arg(long)]
        json: bool,
    },

    /// Print the distinct values the filter menu would offer for a field.
    Values {
        /// Animal name to search for.
        name: String,

        /// Field to collect values for: skin_type, diet, type, or location.
        field: String,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        // Credential resolution happens once, up front: every subcommand
        // talks to the API, and a missing key must fail before any output.
        let api_key = config::api_key_from_env()?;
        let client = AnimalsClient::new(cfg.api_url.clone(), api_key);

        match cli.command {
            CliCommand::Generate {
                name,
                filter,
                no_prompt,
                template,
                output,
            } => {
                let mut cfg = cfg;
                if let Some(template) = template {
                    cfg.template_path = template;
                }
                if let Some(output) = output {
                    cfg.output_path = output;
                }
                run_generate(&cfg, &client, name, &filter, no_prompt)?;
            }
            CliCommand::Fetch { name, json } => run_fetch(&client, &name, json)?,
            CliCommand::Values { name, field } => run_values(&client, &name, &field)?,
        }

        Ok(())
    }
}

/// Parse a `--filter FIELD=VALUE` argument against the known fields.
pub(crate) fn parse_filter_arg(raw: &str) -> Result<(String, FilterValue)> {
    let Some((field, value)) = raw.split_once('=') else {
        bail!("invalid filter {raw:?}: expected FIELD=VALUE");
    };
    let field = field.trim();
    if !FILTER_FIELDS.iter().any(|(f, _)| *f == field) {
        bail!(
            "unknown filter field {field:?}: expected one of skin_type, diet, type, location"
        );
    }
    Ok((field.to_string(), FilterValue::parse(value.trim())))
}

#[cfg(test)]
mod tests;
