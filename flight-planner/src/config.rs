//! Run configuration.

use std::path::{Path, PathBuf};

/// Default catalog file name.
pub const DEFAULT_CATALOG: &str = "flights.txt";

/// Default direct-flights artifact name.
pub const DEFAULT_DIRECT_OUTPUT: &str = "flights_direct.txt";

/// Default one-stop connections artifact name.
pub const DEFAULT_CONNECTIONS_OUTPUT: &str = "flights_indirect.txt";

/// File locations for one batch run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Flight catalog to read.
    pub catalog_path: PathBuf,

    /// Where the direct-flights report is written.
    pub direct_output_path: PathBuf,

    /// Where the one-stop connections report is written.
    /// Only written when a query is supplied.
    pub connections_output_path: PathBuf,
}

impl RunConfig {
    /// Create a new configuration with the given paths.
    pub fn new(
        catalog_path: impl Into<PathBuf>,
        direct_output_path: impl Into<PathBuf>,
        connections_output_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            catalog_path: catalog_path.into(),
            direct_output_path: direct_output_path.into(),
            connections_output_path: connections_output_path.into(),
        }
    }

    /// Default file names, resolved against `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(
            dir.join(DEFAULT_CATALOG),
            dir.join(DEFAULT_DIRECT_OUTPUT),
            dir.join(DEFAULT_CONNECTIONS_OUTPUT),
        )
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::new(
            DEFAULT_CATALOG,
            DEFAULT_DIRECT_OUTPUT,
            DEFAULT_CONNECTIONS_OUTPUT,
        )
    }
}
