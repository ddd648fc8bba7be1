//! End-to-end generation pipeline: fetch, filter, serialize, substitute, write.

use std::path::PathBuf;

use crate::config::FaunaConfig;
use crate::error::RunError;
use crate::fetch::AnimalsClient;
use crate::filter::filter_animals;
use crate::model::{Animal, Selections};
use crate::render;
use crate::render::template;

/// How a successful run ended. Each variant maps to exactly one status line.
#[derive(Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// Records survived and were rendered into the page.
    Generated { path: PathBuf, count: usize },
    /// The fetch returned nothing; the no-results block was rendered.
    NoResults { path: PathBuf },
    /// The fetch returned records but the filters removed them all.
    NoResultsAfterFilter { path: PathBuf },
}

impl RunOutcome {
    /// The single user-facing status line for this run.
    pub fn status_line(&self) -> String {
        match self {
            RunOutcome::Generated { path, count } => format!(
                "Website was successfully generated to the file {} ({} animal(s))",
                path.display(),
                count
            ),
            RunOutcome::NoResults { path } => format!(
                "Website was generated with no results message to the file {}",
                path.display()
            ),
            RunOutcome::NoResultsAfterFilter { path } => format!(
                "Website was generated with no results message (after filtering) to the file {}",
                path.display()
            ),
        }
    }
}

/// Fetch records for `name` and run the rest of the pipeline.
///
/// `select` supplies the finished selection mapping given the fetched records
/// (so an interactive menu can offer the observed values); it is only invoked
/// when the fetch returned something. The pipeline itself never touches the
/// console.
pub fn generate(
    cfg: &FaunaConfig,
    client: &AnimalsClient,
    name: &str,
    select: impl FnOnce(&[Animal]) -> anyhow::Result<Selections>,
) -> Result<RunOutcome, RunError> {
    let animals = client.fetch(name);
    generate_from_records(cfg, name, animals, select)
}

/// Pipeline stages after the fetch. Split out so tests can drive it without a
/// live endpoint.
pub fn generate_from_records(
    cfg: &FaunaConfig,
    name: &str,
    animals: Vec<Animal>,
    select: impl FnOnce(&[Animal]) -> anyhow::Result<Selections>,
) -> Result<RunOutcome, RunError> {
    let template_text = template::read_template(&cfg.template_path)?;

    if animals.is_empty() {
        let doc = template::render_document(&template_text, &render::no_results_fragment(name));
        template::write_output(&cfg.output_path, &doc)?;
        return Ok(RunOutcome::NoResults {
            path: cfg.output_path.clone(),
        });
    }

    let selections = select(&animals).map_err(RunError::Unexpected)?;
    let survivors = filter_animals(&animals, &selections);
    tracing::debug!(
        "filtered {} record(s) down to {} for {:?}",
        animals.len(),
        survivors.len(),
        name
    );

    if survivors.is_empty() {
        let doc = template::render_document(&template_text, &render::no_results_fragment(name));
        template::write_output(&cfg.output_path, &doc)?;
        return Ok(RunOutcome::NoResultsAfterFilter {
            path: cfg.output_path.clone(),
        });
    }

    let fragment = render::serialize_animals(&survivors);
    let doc = template::render_document(&template_text, &fragment);
    template::write_output(&cfg.output_path, &doc)?;
    Ok(RunOutcome::Generated {
        path: cfg.output_path.clone(),
        count: survivors.len(),
    })
}
