//! Capability manifest output
//!
//! The surviving capability list is written as a four-space-indented JSON
//! array, one entry per line, in recording order.

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use thiserror::Error;

use crate::analyzer::recorder::CapabilitySet;

/// Errors from rendering or writing a manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Render the set as the manifest's JSON text.
pub fn render(set: &CapabilitySet) -> Result<String, ManifestError> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    set.entries().serialize(&mut serializer)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Render the set and write it to `path`.
pub fn write(set: &CapabilitySet, path: &Path) -> Result<(), ManifestError> {
    let rendered = render(set)?;
    fs::write(path, rendered)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_set_renders_an_empty_array() {
        let set = CapabilitySet::new();
        assert_eq!(render(&set).unwrap(), "[]");
    }

    #[test]
    fn test_entries_render_one_per_line() {
        let mut set = CapabilitySet::new();
        set.record("Symbol");
        set.record("Symbol.iterator");
        assert_eq!(
            render(&set).unwrap(),
            "[\n    \"Symbol\",\n    \"Symbol.iterator\"\n]"
        );
    }

    #[test]
    fn test_write_round_trips_through_the_filesystem() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("features.json");

        let mut set = CapabilitySet::new();
        set.record("Promise");
        write(&set, &path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, "[\n    \"Promise\"\n]");
    }
}
