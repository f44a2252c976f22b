//! Statement AST nodes
//!
//! This module defines all statement types in the JavaScript subset, including:
//! - Variable declarations (var, let, const)
//! - Function declarations
//! - Control flow statements (if, while, for, for-of, for-in, switch, etc.)

use super::*;
use crate::parser::token::Span;

/// Top-level or block-level statement
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// Variable declaration: var/let/const
    VariableDecl(VariableDecl),

    /// Function declaration
    FunctionDecl(FunctionDecl),

    /// Expression statement (e.g., function call)
    Expression(ExpressionStatement),

    /// If statement
    If(IfStatement),

    /// Switch statement
    Switch(SwitchStatement),

    /// While loop
    While(WhileStatement),

    /// Do-while loop
    DoWhile(DoWhileStatement),

    /// For loop
    For(ForStatement),

    /// For-of loop
    ForOf(ForOfStatement),

    /// For-in loop
    ForIn(ForInStatement),

    /// Break statement
    Break(BreakStatement),

    /// Continue statement
    Continue(ContinueStatement),

    /// Return statement
    Return(ReturnStatement),

    /// Throw statement
    Throw(ThrowStatement),

    /// Try-catch-finally
    Try(TryStatement),

    /// Block statement: { ... }
    Block(BlockStatement),

    /// Empty statement (;)
    Empty(Span),
}

impl Statement {
    /// Get the span of this statement
    pub fn span(&self) -> &Span {
        match self {
            Statement::VariableDecl(s) => &s.span,
            Statement::FunctionDecl(s) => &s.span,
            Statement::Expression(s) => &s.span,
            Statement::If(s) => &s.span,
            Statement::Switch(s) => &s.span,
            Statement::While(s) => &s.span,
            Statement::DoWhile(s) => &s.span,
            Statement::For(s) => &s.span,
            Statement::ForOf(s) => &s.span,
            Statement::ForIn(s) => &s.span,
            Statement::Break(s) => &s.span,
            Statement::Continue(s) => &s.span,
            Statement::Return(s) => &s.span,
            Statement::Throw(s) => &s.span,
            Statement::Try(s) => &s.span,
            Statement::Block(s) => &s.span,
            Statement::Empty(span) => span,
        }
    }

    /// Check if this statement is a declaration
    pub fn is_declaration(&self) -> bool {
        matches!(self, Statement::VariableDecl(_) | Statement::FunctionDecl(_))
    }
}

// ============================================================================
// Variable Declaration
// ============================================================================

/// Variable declaration: var a = 1, b = 2; or const {x} = obj;
#[derive(Debug, Clone, PartialEq)]
pub struct VariableDecl {
    /// var, let or const
    pub kind: VariableKind,

    /// One or more declarators separated by commas
    pub declarators: Vec<Declarator>,

    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableKind {
    Var,
    Let,
    Const,
}

/// A single binding within a variable declaration
#[derive(Debug, Clone, PartialEq)]
pub struct Declarator {
    /// Pattern (identifier or destructuring)
    pub pattern: Pattern,

    /// Initializer expression (None in for-of/for-in heads)
    pub initializer: Option<Expression>,

    pub span: Span,
}

// ============================================================================
// Function Declaration
// ============================================================================

/// Function declaration
///
/// # Example
/// ```text
/// function* pairs(items) {
///     yield* items.entries();
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDecl {
    /// Function name
    pub name: Identifier,

    /// Parameters
    pub params: Vec<Parameter>,

    /// Function body
    pub body: BlockStatement,

    /// Is generator function? (function*)
    pub is_generator: bool,

    /// Is async function?
    pub is_async: bool,

    pub span: Span,
}

/// Function parameter
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub pattern: Pattern,
    /// Default value for the parameter (e.g., `x = 10`)
    pub default_value: Option<Expression>,
    pub span: Span,
}

// ============================================================================
// Control Flow Statements
// ============================================================================

/// If statement
#[derive(Debug, Clone, PartialEq)]
pub struct IfStatement {
    pub condition: Expression,
    pub then_branch: Box<Statement>,
    pub else_branch: Option<Box<Statement>>,
    pub span: Span,
}

/// Switch statement
#[derive(Debug, Clone, PartialEq)]
pub struct SwitchStatement {
    pub discriminant: Expression,
    pub cases: Vec<SwitchCase>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SwitchCase {
    /// None for default case
    pub test: Option<Expression>,
    pub consequent: Vec<Statement>,
    pub span: Span,
}

/// While loop
#[derive(Debug, Clone, PartialEq)]
pub struct WhileStatement {
    pub condition: Expression,
    pub body: Box<Statement>,
    pub span: Span,
}

/// Do-while loop
#[derive(Debug, Clone, PartialEq)]
pub struct DoWhileStatement {
    pub body: Box<Statement>,
    pub condition: Expression,
    pub span: Span,
}

/// For loop
#[derive(Debug, Clone, PartialEq)]
pub struct ForStatement {
    pub init: Option<ForInit>,
    pub test: Option<Expression>,
    pub update: Option<Expression>,
    pub body: Box<Statement>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ForInit {
    VariableDecl(VariableDecl),
    Expression(Expression),
}

/// For-of loop: for (const item of collection) { ... }
#[derive(Debug, Clone, PartialEq)]
pub struct ForOfStatement {
    /// Left side of the for-of (variable declaration or identifier pattern)
    pub left: ForOfLeft,
    /// Right side expression (the iterable)
    pub right: Expression,
    /// Loop body
    pub body: Box<Statement>,
    pub span: Span,
}

/// For-in loop: for (const key in object) { ... }
#[derive(Debug, Clone, PartialEq)]
pub struct ForInStatement {
    /// Left side of the for-in (same forms as for-of)
    pub left: ForOfLeft,
    /// Right side expression (the object)
    pub right: Expression,
    /// Loop body
    pub body: Box<Statement>,
    pub span: Span,
}

/// Left-hand side of a for-of or for-in statement
#[derive(Debug, Clone, PartialEq)]
pub enum ForOfLeft {
    /// var/let/const pattern
    VariableDecl(VariableDecl),
    /// Existing variable
    Pattern(Pattern),
}

/// Break statement
#[derive(Debug, Clone, PartialEq)]
pub struct BreakStatement {
    pub span: Span,
}

/// Continue statement
#[derive(Debug, Clone, PartialEq)]
pub struct ContinueStatement {
    pub span: Span,
}

/// Return statement
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStatement {
    pub value: Option<Expression>,
    pub span: Span,
}

/// Throw statement
#[derive(Debug, Clone, PartialEq)]
pub struct ThrowStatement {
    pub value: Expression,
    pub span: Span,
}

/// Try-catch-finally
#[derive(Debug, Clone, PartialEq)]
pub struct TryStatement {
    pub body: BlockStatement,
    pub catch_clause: Option<CatchClause>,
    pub finally_clause: Option<BlockStatement>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatchClause {
    pub param: Option<Pattern>,
    pub body: BlockStatement,
    pub span: Span,
}

/// Block statement: a sequence of statements wrapped in { }.
/// Used standalone, as function bodies and as control flow bodies.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockStatement {
    pub statements: Vec<Statement>,
    pub span: Span,
}

/// Expression statement
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStatement {
    pub expression: Expression,
    pub span: Span,
}
