//! Batch pipeline.
//!
//! One run reads a query line, loads the catalog, builds the route index and
//! writes the two reports. Every failure collapses to one of two console
//! signals: [`FILE_ERROR_SIGNAL`] when the catalog does not exist, and
//! [`GENERIC_ERROR_SIGNAL`] for everything else.

use std::fs;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::catalog::{CatalogError, load_catalog};
use crate::config::RunConfig;
use crate::planner::{QueryError, RouteIndex, RouteQuery, resolve};
use crate::report::{render_connections, render_direct};

/// Printed when the catalog file is missing.
pub const FILE_ERROR_SIGNAL: &str = "DAT_GRESKA";

/// Printed for every other failure.
pub const GENERIC_ERROR_SIGNAL: &str = "GRESKA";

/// Error from a batch run.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    /// Could not read the query line
    #[error("failed to read query: {0}")]
    Input(#[source] io::Error),

    /// The query line was malformed
    #[error("invalid query: {0}")]
    Query(#[from] QueryError),

    /// The catalog was missing, unreadable or malformed
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// A report could not be written
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl RunError {
    /// The console token reporting this failure.
    pub fn signal(&self) -> &'static str {
        match self {
            RunError::Catalog(CatalogError::NotFound { .. }) => FILE_ERROR_SIGNAL,
            _ => GENERIC_ERROR_SIGNAL,
        }
    }
}

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Legs loaded from the catalog.
    pub legs: usize,

    /// Segments listed in the direct report.
    pub segments: usize,

    /// Transfer points in the connections report, if a query was given.
    pub transfer_points: Option<usize>,
}

/// Run the pipeline, taking the query from the first line of `input`.
///
/// The query is validated before the catalog is touched, and both reports
/// are rendered before either file is written. The connections report is
/// only written when the query line is not blank.
pub fn run<R: BufRead>(config: &RunConfig, mut input: R) -> Result<RunSummary, RunError> {
    let mut line = String::new();
    input.read_line(&mut line).map_err(RunError::Input)?;
    let query = RouteQuery::parse_line(&line)?;
    debug!(query = ?query.as_ref().map(ToString::to_string), "read query");

    let legs = load_catalog(&config.catalog_path)?;
    let leg_count = legs.len();
    let index = RouteIndex::build(legs);

    let direct = render_direct(&index);
    let connections = query.as_ref().map(|query| {
        let points = resolve(&index, query.origin(), query.destination());
        let report = render_connections(query.origin(), query.destination(), &points);
        (points.len(), report)
    });

    write_artifact(&config.direct_output_path, &direct)?;
    let transfer_points = match connections {
        Some((count, report)) => {
            write_artifact(&config.connections_output_path, &report)?;
            Some(count)
        }
        None => None,
    };

    let summary = RunSummary {
        legs: leg_count,
        segments: index.segment_count(),
        transfer_points,
    };
    info!(?summary, "run complete");

    Ok(summary)
}

/// Write one report, replacing any previous contents.
fn write_artifact(path: &Path, contents: &str) -> Result<(), RunError> {
    fs::write(path, contents).map_err(|source| RunError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = contents.len(), "wrote report");
    Ok(())
}
