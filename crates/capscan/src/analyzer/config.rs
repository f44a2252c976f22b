//! Analyzer options
//!
//! Options deserialize from camelCase JSON so they can be lifted straight
//! out of a tool configuration file.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Manifest file name used when no destination is configured.
pub const DEFAULT_DESTINATION: &str = "features.json";

/// Where the capability manifest ends up.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnalyzerOptions {
    /// Manifest path. Relative paths resolve against `base_dir`.
    pub output_destination: Option<PathBuf>,

    /// Directory relative destinations resolve against. When unset,
    /// relative destinations are used as given.
    pub base_dir: Option<PathBuf>,
}

impl AnalyzerOptions {
    /// Resolve the configured destination to the path that gets written.
    pub fn resolve_destination(&self) -> PathBuf {
        let destination = self
            .output_destination
            .as_deref()
            .unwrap_or(Path::new(DEFAULT_DESTINATION));
        if destination.is_absolute() {
            return destination.to_path_buf();
        }
        match &self.base_dir {
            Some(base) => base.join(destination),
            None => destination.to_path_buf(),
        }
    }
}
