//! Abstract Syntax Tree (AST) for the analyzed JavaScript subset.
//!
//! This module defines the AST structure the analyzer walks, including:
//! - Module and program structure
//! - Statements (declarations, control flow, etc.)
//! - Expressions (literals, operators, function calls, etc.)
//! - Patterns (for destructuring)
//!
//! Every AST node includes a `Span` for precise source location tracking.

use crate::parser::token::Span;

// Re-export submodules
pub mod expression;
pub mod pattern;
pub mod statement;
pub mod visitor;

pub use expression::*;
pub use pattern::*;
pub use statement::*;
pub use visitor::*;

/// Root node: a JavaScript source file (module)
#[derive(Debug, Clone, PartialEq)]
pub struct Module {
    /// Top-level statements
    pub statements: Vec<Statement>,

    /// Span covering the entire module
    pub span: Span,
}

impl Module {
    /// Create a new module
    pub fn new(statements: Vec<Statement>, span: Span) -> Self {
        Self { statements, span }
    }

    /// Check if the module is empty
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Get the number of top-level statements
    pub fn len(&self) -> usize {
        self.statements.len()
    }
}

/// Identifier
///
/// Represents a name for a variable, function, property, etc.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier {
    pub name: crate::parser::interner::Symbol,
    pub span: Span,
}

impl Identifier {
    pub fn new(name: crate::parser::interner::Symbol, span: Span) -> Self {
        Self { name, span }
    }
}
