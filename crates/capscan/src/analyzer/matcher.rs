//! Capability matcher trait and supporting types.
//!
//! Each matcher implements `Matcher` and provides metadata (`MatcherMeta`)
//! plus one or more `check_*` methods that inspect AST nodes and return the
//! capability identifiers those nodes imply.

use crate::parser::ast::{Expression, Statement, VariableDecl};
use crate::parser::interner::Interner;

use super::scope::ScopeStack;

/// Static metadata for a capability matcher.
pub struct MatcherMeta {
    /// Matcher name, e.g. "member-access".
    pub name: &'static str,
    /// Human-readable description.
    pub description: &'static str,
}

/// Context passed to each matcher during collection.
pub struct MatchContext<'a> {
    /// String interner (resolve Symbol → &str).
    pub interner: &'a Interner,
    /// Bindings in scope at the node being checked.
    pub scopes: &'a ScopeStack,
}

/// Trait that every capability matcher must implement.
///
/// Matchers receive individual AST nodes and return capability identifiers.
/// Default implementations return nothing, so matchers only need to
/// override the node kinds relevant to them. The collector records returned
/// identifiers in dispatch order, deduplicated, first occurrence winning.
pub trait Matcher: Send + Sync {
    /// Static metadata for this matcher.
    fn meta(&self) -> &MatcherMeta;

    /// Check a statement node, before its children are visited.
    fn check_statement(&self, _stmt: &Statement, _ctx: &MatchContext<'_>) -> Vec<&'static str> {
        vec![]
    }

    /// Check a variable declaration.
    ///
    /// Dispatched separately from statements because declarations also
    /// appear inside `for`, `for...of` and `for...in` heads.
    fn check_variable_decl(
        &self,
        _decl: &VariableDecl,
        _ctx: &MatchContext<'_>,
    ) -> Vec<&'static str> {
        vec![]
    }

    /// Check an expression node, before its children are visited.
    fn check_expression(&self, _expr: &Expression, _ctx: &MatchContext<'_>) -> Vec<&'static str> {
        vec![]
    }

    /// Check an expression node again after its children were visited.
    ///
    /// Lets a matcher record in two phases around a subtree: `Symbol.match`
    /// records the static method on enter and the `Symbol` global on exit.
    fn check_expression_exit(
        &self,
        _expr: &Expression,
        _ctx: &MatchContext<'_>,
    ) -> Vec<&'static str> {
        vec![]
    }
}
