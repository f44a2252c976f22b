//! Capability analysis
//!
//! Scans JavaScript sources for uses of ES2015+ built-ins and writes the
//! findings to a JSON manifest.
//!
//! # Architecture
//!
//! - Each matcher implements [`Matcher`] and recognizes one family of
//!   syntactic shapes (globals, member access, iteration, literals).
//! - The collector walks the AST once with scope tracking and dispatches
//!   every node to all matchers, recording capabilities in first-seen order.
//! - [`pruner::prune`] then drops method entries whose constructor never
//!   appeared, and [`manifest`] writes what survives.
//! - [`Analyzer`] is the public entry point: create one, then call
//!   [`analyze_source`](Analyzer::analyze_source) or
//!   [`analyze_module`](Analyzer::analyze_module).
//!
//! # Example
//!
//! ```ignore
//! use capscan::analyzer::{Analyzer, AnalyzerOptions};
//!
//! let analyzer = Analyzer::new();
//! let report = analyzer.analyze_source("for (const x of xs) {}")?;
//! for capability in &report.capabilities {
//!     println!("{}", capability);
//! }
//! ```

pub mod config;
pub mod definitions;
pub mod eval;
pub mod manifest;
pub mod matcher;
pub mod matchers;
pub mod pruner;
pub mod recorder;
pub mod scope;
mod collector;

pub use config::AnalyzerOptions;
pub use manifest::ManifestError;
pub use matcher::{MatchContext, Matcher, MatcherMeta};
pub use recorder::CapabilitySet;

use std::path::PathBuf;

use thiserror::Error;

use crate::parser::ast::Module;
use crate::parser::interner::Interner;
use crate::parser::lexer::LexError;
use crate::parser::parser::ParseError;
use crate::parser::Parser;
use collector::Collector;

/// Result of analyzing a source file.
#[derive(Debug)]
pub struct AnalysisReport {
    /// Surviving capabilities, in recording order.
    pub capabilities: Vec<&'static str>,
    /// Where the manifest was written.
    pub manifest_path: PathBuf,
}

/// Errors from the full source-to-manifest pipeline.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("{} lexical error(s) in source", .0.len())]
    Lex(Vec<LexError>),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Manifest(#[from] ManifestError),
}

/// The capability analyzer. Holds the matcher registry and output options.
pub struct Analyzer {
    matchers: Vec<Box<dyn Matcher>>,
    options: AnalyzerOptions,
}

impl Analyzer {
    /// Create an analyzer with all matchers and default options.
    pub fn new() -> Self {
        Self::with_options(AnalyzerOptions::default())
    }

    /// Create an analyzer with output options.
    pub fn with_options(options: AnalyzerOptions) -> Self {
        Self {
            matchers: matchers::all_matchers(),
            options,
        }
    }

    /// Run the matchers over a parsed module without pruning or output.
    pub fn collect(&self, module: &Module, interner: &Interner) -> CapabilitySet {
        Collector::new(&self.matchers, interner).run(module)
    }

    /// Prune a collected set and write the manifest.
    pub fn finalize(&self, mut set: CapabilitySet) -> Result<AnalysisReport, ManifestError> {
        pruner::prune(&mut set);
        let manifest_path = self.options.resolve_destination();
        manifest::write(&set, &manifest_path)?;
        Ok(AnalysisReport {
            capabilities: set.entries().to_vec(),
            manifest_path,
        })
    }

    /// Analyze a parsed AST module.
    pub fn analyze_module(
        &self,
        module: &Module,
        interner: &Interner,
    ) -> Result<AnalysisReport, ManifestError> {
        self.finalize(self.collect(module, interner))
    }

    /// Convenience: parse source code and analyze it.
    pub fn analyze_source(&self, source: &str) -> Result<AnalysisReport, AnalyzeError> {
        let parser = Parser::new(source).map_err(AnalyzeError::Lex)?;
        let (module, interner) = parser.parse()?;
        Ok(self.analyze_module(&module, &interner)?)
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_source_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let destination = dir.path().join("features.json");

        let analyzer = Analyzer::with_options(AnalyzerOptions {
            output_destination: Some(destination.clone()),
            base_dir: None,
        });
        let report = analyzer
            .analyze_source("var seed = []; xs.flat();")
            .unwrap();

        assert_eq!(report.capabilities, vec!["Array", "Array.prototype.flat"]);
        assert_eq!(report.manifest_path, destination);

        let written = std::fs::read_to_string(&destination).unwrap();
        assert_eq!(written, "[\n    \"Array\",\n    \"Array.prototype.flat\"\n]");
    }

    #[test]
    fn test_collect_leaves_the_filesystem_alone() {
        let (module, interner) = Parser::new("new Proxy(target, traps);")
            .unwrap()
            .parse()
            .unwrap();
        let set = Analyzer::new().collect(&module, &interner);
        assert_eq!(set.entries(), ["Proxy"]);
    }

    #[test]
    fn test_parse_errors_surface() {
        let err = Analyzer::new().analyze_source("function {{{").unwrap_err();
        assert!(matches!(err, AnalyzeError::Parse(_)));
    }

    #[test]
    fn test_lex_errors_surface() {
        let err = Analyzer::new().analyze_source("var x = #;").unwrap_err();
        assert!(matches!(err, AnalyzeError::Lex(_)));
    }
}
