//! Matcher: delegated-yield
//!
//! `yield* source` drains `source` through its `@@iterator` method, so
//! delegation implies the iteration protocol without naming the key. The
//! bare `Symbol` entry is not recorded here: no `Symbol.iterator` member
//! appears in source, and whether the protocol survives pruning depends on
//! the rest of the module.

use crate::analyzer::definitions::ITERATION_PROTOCOL;
use crate::analyzer::matcher::{MatchContext, Matcher, MatcherMeta};
use crate::parser::ast::Expression;

pub struct DelegatedYield;

static META: MatcherMeta = MatcherMeta {
    name: "delegated-yield",
    description: "yield* delegation iterates its operand",
};

impl Matcher for DelegatedYield {
    fn meta(&self) -> &MatcherMeta {
        &META
    }

    fn check_expression(&self, expr: &Expression, _ctx: &MatchContext<'_>) -> Vec<&'static str> {
        match expr {
            Expression::Yield(yield_expr) if yield_expr.delegate => {
                ITERATION_PROTOCOL[1..].to_vec()
            }
            _ => vec![],
        }
    }
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
    fn test_delegation_records_protocol_without_bare_symbol() {
        let entries = collect("function* flatten(streams) { yield* streams; }");

        assert!(entries.contains(&"Symbol.iterator"));
        assert!(entries.contains(&"Set.prototype[@@iterator]"));
        assert!(!entries.contains(&"Symbol"));
        // Function comes from the generator declaration itself.
        assert_eq!(entries[0], "Function");
        assert_eq!(entries.len(), 15);
    }

    #[test]
    fn test_plain_yield_records_nothing() {
        let entries = collect("function* counter() { yield 1; yield; }");

        assert_eq!(entries, vec!["Function", "Number"]);
    }
}
