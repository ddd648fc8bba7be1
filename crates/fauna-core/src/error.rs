//! Run-level error taxonomy.
//!
//! Transport failures are NOT represented here: the fetcher reports them to
//! the log and degrades to an empty result set, which the pipeline renders as
//! a no-results page. Only conditions that abort the run appear below, so
//! callers and tests can discriminate kinds instead of matching strings.

use std::io;
use std::path::PathBuf;

/// Error that aborts a generation run.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    /// Missing or empty credential at process start. Fatal before any output.
    #[error("startup: {0}")]
    Startup(String),

    /// Template file could not be read.
    #[error("failed to read template {}: {source}", path.display())]
    Template {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Output file could not be written.
    #[error("failed to write output {}: {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Anything else that escaped the pipeline.
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}
