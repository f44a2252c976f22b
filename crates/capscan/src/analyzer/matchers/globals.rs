//! Matcher: global-references
//!
//! A bare identifier that names an ES2015+ global records that global's
//! capabilities unless a binding shadows it. Identifiers in member object
//! or computed-key position never reach this matcher; the collector routes
//! whole member expressions to the member-access matcher instead.

use crate::analyzer::definitions;
use crate::analyzer::matcher::{MatchContext, Matcher, MatcherMeta};
use crate::parser::ast::Expression;

pub struct GlobalReferences;

static META: MatcherMeta = MatcherMeta {
    name: "global-references",
    description: "Referencing an ES2015+ global requires it at runtime",
};

impl Matcher for GlobalReferences {
    fn meta(&self) -> &MatcherMeta {
        &META
    }

    fn check_expression(&self, expr: &Expression, ctx: &MatchContext<'_>) -> Vec<&'static str> {
        let id = match expr {
            Expression::Identifier(id) => id,
            _ => return vec![],
        };
        let capabilities = match definitions::global_capabilities(ctx.interner.resolve(id.name)) {
            Some(capabilities) => capabilities,
            None => return vec![],
        };
        if ctx.scopes.is_bound(id.name) {
            return vec![];
        }
        capabilities.to_vec()
    }
}
