//! `fauna values <NAME> <FIELD>` – distinct values the filter menu would offer.

use anyhow::{bail, Context, Result};
use fauna_core::fetch::AnimalsClient;
use fauna_core::filter::unique_values;

use crate::cli::FILTER_FIELDS;

pub fn run_values(client: &AnimalsClient, name: &str, field: &str) -> Result<()> {
    if !FILTER_FIELDS.iter().any(|(f, _)| *f == field) {
        bail!("unknown field {field:?}: expected one of skin_type, diet, type, location");
    }

    let animals = client
        .fetch_raw(name)
        .with_context(|| format!("fetch for {name:?} failed"))?;
    let values = unique_values(&animals, field);

    if values.is_empty() {
        println!("No {field} values found for {name:?}.");
    } else {
        for value in values {
            println!("{value}");
        }
    }
    Ok(())
}
