//! Pattern AST nodes
//!
//! Patterns are used in variable declarations, function parameters, and destructuring.

use super::*;
use crate::parser::token::Span;

/// Pattern (for destructuring and binding)
#[derive(Debug, Clone, PartialEq)]
pub enum Pattern {
    /// Simple identifier: x
    Identifier(Identifier),

    /// Array destructuring: [x, y]
    Array(ArrayPattern),

    /// Object destructuring: { x, y }
    Object(ObjectPattern),

    /// Rest parameter: ...args
    Rest(RestPattern),
}

impl Pattern {
    pub fn span(&self) -> &Span {
        match self {
            Pattern::Identifier(id) => &id.span,
            Pattern::Array(p) => &p.span,
            Pattern::Object(p) => &p.span,
            Pattern::Rest(p) => &p.span,
        }
    }
}

/// Array destructuring pattern: [a, b], [x, , z], [first, ...rest], [y = 10]
/// `None` elements are holes.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayPattern {
    pub elements: Vec<Option<PatternElement>>,
    pub rest: Option<Box<Pattern>>,
    pub span: Span,
}

/// A positioned element of an array pattern with an optional default
#[derive(Debug, Clone, PartialEq)]
pub struct PatternElement {
    pub pattern: Pattern,
    pub default: Option<Expression>,
    pub span: Span,
}

/// Object destructuring pattern: { x, y }, { x: newX, y = 0 }, { a, ...rest }
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectPattern {
    pub properties: Vec<ObjectPatternProperty>,
    pub rest: Option<Identifier>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ObjectPatternProperty {
    pub key: PatternKey,
    pub value: Pattern,
    pub default: Option<Expression>,
    pub span: Span,
}

/// Key of an object pattern property
#[derive(Debug, Clone, PartialEq)]
pub enum PatternKey {
    /// Plain key: { x } or { x: y }
    Identifier(Identifier),
    /// String key: { "a-b": x }
    StringLiteral(StringLiteral),
    /// Numeric key: { 0: first }
    NumberLiteral(NumberLiteral),
    /// Computed key: { [expr]: x }
    Computed(Expression),
}

/// Rest pattern: ...args (function parameters and nested patterns)
#[derive(Debug, Clone, PartialEq)]
pub struct RestPattern {
    pub argument: Box<Pattern>,
    pub span: Span,
}
