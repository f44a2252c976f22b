//! Matchers: iterator-key-call, iterator-key-test
//!
//! Recognizes the explicit `Symbol.iterator` key forms that reach the
//! iteration protocol without a `for...of` loop:
//!
//! - `coll[Symbol.iterator]()` with no arguments
//! - `Symbol.iterator in coll`
//!
//! Both record the protocol minus the leading bare `Symbol` entry; the
//! spelled-out key is itself a member expression, and the member-access
//! matcher records `Symbol` when it reaches it. The key matches purely by
//! shape; shadowing of `Symbol` is not consulted.

use crate::analyzer::definitions::ITERATION_PROTOCOL;
use crate::analyzer::matcher::{MatchContext, Matcher, MatcherMeta};
use crate::parser::ast::{BinaryOperator, Expression};

/// Matches `coll[Symbol.iterator]()`.
pub struct IteratorKeyCall;

/// Matches `Symbol.iterator in coll`.
pub struct IteratorKeyTest;

static CALL_META: MatcherMeta = MatcherMeta {
    name: "iterator-key-call",
    description: "Calling obj[Symbol.iterator]() invokes the iteration protocol",
};

static TEST_META: MatcherMeta = MatcherMeta {
    name: "iterator-key-test",
    description: "Probing with `Symbol.iterator in obj` implies the iteration protocol",
};

impl Matcher for IteratorKeyCall {
    fn meta(&self) -> &MatcherMeta {
        &CALL_META
    }

    fn check_expression(&self, expr: &Expression, ctx: &MatchContext<'_>) -> Vec<&'static str> {
        let call = match expr {
            Expression::Call(call) => call,
            _ => return vec![],
        };
        // A call with arguments is not the zero-argument protocol entry.
        if !call.arguments.is_empty() {
            return vec![];
        }
        let callee = match &*call.callee {
            Expression::Index(index) => index,
            _ => return vec![],
        };
        if !is_iterator_key(&callee.index, ctx) {
            return vec![];
        }
        ITERATION_PROTOCOL[1..].to_vec()
    }
}

impl Matcher for IteratorKeyTest {
    fn meta(&self) -> &MatcherMeta {
        &TEST_META
    }

    fn check_expression(&self, expr: &Expression, ctx: &MatchContext<'_>) -> Vec<&'static str> {
        let binary = match expr {
            Expression::Binary(binary) => binary,
            _ => return vec![],
        };
        if binary.operator != BinaryOperator::In {
            return vec![];
        }
        if !is_iterator_key(&binary.left, ctx) {
            return vec![];
        }
        ITERATION_PROTOCOL[1..].to_vec()
    }
}

/// True for the two source spellings of the well-known iterator key:
/// `Symbol.iterator` and `Symbol["iterator"]`.
fn is_iterator_key(expr: &Expression, ctx: &MatchContext<'_>) -> bool {
    match expr {
        Expression::Member(member) => {
            object_is_symbol(&member.object, ctx)
                && ctx.interner.resolve(member.property.name) == "iterator"
        }
        Expression::Index(index) => {
            object_is_symbol(&index.object, ctx)
                && matches!(
                    &*index.index,
                    Expression::StringLiteral(lit) if ctx.interner.resolve(lit.value) == "iterator"
                )
        }
        _ => false,
    }
}

fn object_is_symbol(expr: &Expression, ctx: &MatchContext<'_>) -> bool {
    matches!(expr, Expression::Identifier(id) if ctx.interner.resolve(id.name) == "Symbol")
}

#[cfg(test)]
mod tests {
    use crate::analyzer::Analyzer;
    use crate::parser::Parser;

    fn collect(source: &str) -> Vec<&'static str> {
        let (module, interner) = Parser::new(source).unwrap().parse().unwrap();
        Analyzer::new().collect(&module, &interner).entries().to_vec()
    }

    #[test]
    fn test_iterator_key_call_records_protocol_then_symbol() {
        let entries = collect("list[Symbol.iterator]();");

        // The call matcher fires before the key's own member expression is
        // visited, so the bare Symbol entry lands last.
        assert_eq!(entries[0], "Symbol.iterator");
        assert_eq!(entries.last(), Some(&"Symbol"));
        assert!(entries.contains(&"String.prototype[@@iterator]"));
        assert_eq!(entries.len(), 15);
    }

    #[test]
    fn test_call_with_arguments_skips_the_protocol() {
        let entries = collect("list[Symbol.iterator](extra);");

        assert_eq!(entries, vec!["Symbol.iterator", "Symbol"]);
    }

    #[test]
    fn test_dot_callee_is_not_the_key_form() {
        // `list.iterator()` has no Symbol key anywhere.
        let entries = collect("list.iterator();");
        assert!(entries.is_empty());
    }

    #[test]
    fn test_in_probe_records_protocol() {
        let entries = collect("if (Symbol.iterator in coll) {}");

        assert_eq!(entries[0], "Symbol.iterator");
        assert_eq!(entries.last(), Some(&"Symbol"));
        assert!(entries.contains(&"Map.prototype[@@iterator]"));
        assert_eq!(entries.len(), 15);
    }

    #[test]
    fn test_quoted_key_spelling_matches() {
        let entries = collect(r#"if (Symbol["iterator"] in coll) {}"#);

        assert_eq!(entries[0], "Symbol.iterator");
        assert_eq!(entries.last(), Some(&"Symbol"));
        // The quoted key is still a string literal in source.
        assert!(entries.contains(&"String"));
    }

    #[test]
    fn test_other_in_probes_record_nothing() {
        let entries = collect("if (key in coll) {}");
        assert!(entries.is_empty());
    }
}
