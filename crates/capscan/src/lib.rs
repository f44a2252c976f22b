//! Capability Scanner
//!
//! This crate detects which ES2015+ built-in capabilities a JavaScript
//! source file relies on:
//! - **Parser**: Lexer, parser, and AST for the analyzed subset (`parser` module)
//! - **Analyzer**: Matchers, scope tracking, pruning, and manifest output (`analyzer` module)
//!
//! # Example
//!
//! ```rust,ignore
//! use capscan::Analyzer;
//!
//! let source = r#"
//!     const lookup = new Map(pairs);
//!     for (const [key, value] of lookup) {
//!         process(key, value);
//!     }
//! "#;
//!
//! let analyzer = Analyzer::new();
//! let report = analyzer.analyze_source(source).unwrap();
//! // report.capabilities lists what the source needs,
//! // and report.manifest_path is where the JSON landed.
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

// ============================================================================
// Core Modules
// ============================================================================

/// Parser module: Lexer, parser, AST, and interner
pub mod parser;

/// Analyzer module: Matchers, collection, pruning, and manifest output
pub mod analyzer;

// ============================================================================
// Re-exports from Parser
// ============================================================================

pub use parser::{
    // Lexer
    Lexer, LexError, Token, Span,
    // Parser
    Parser, ParseError,
    // Interner
    Interner, Symbol,
    // AST
    ast,
};

// ============================================================================
// Re-exports from Analyzer
// ============================================================================

pub use analyzer::{
    // Entry point
    Analyzer, AnalyzerOptions,
    // Results
    AnalysisReport, AnalyzeError, CapabilitySet,
    // Matcher interface
    MatchContext, Matcher, MatcherMeta,
};
