//! Matcher: for-of-iteration
//!
//! Any `for...of` loop drains its iterable through the iteration protocol,
//! so the statement records the well-known `Symbol` itself, the
//! `Symbol.iterator` key, and the `@@iterator` method of every built-in
//! iterable. Which owners survive is decided later by the pruner.
//!
//! `for...in` walks enumerable keys without the protocol and records
//! nothing here.

use crate::analyzer::definitions::ITERATION_PROTOCOL;
use crate::analyzer::matcher::{MatchContext, Matcher, MatcherMeta};
use crate::parser::ast::Statement;

pub struct ForOfIteration;

static META: MatcherMeta = MatcherMeta {
    name: "for-of-iteration",
    description: "for...of loops require Symbol.iterator support",
};

impl Matcher for ForOfIteration {
    fn meta(&self) -> &MatcherMeta {
        &META
    }

    fn check_statement(&self, stmt: &Statement, _ctx: &MatchContext<'_>) -> Vec<&'static str> {
        match stmt {
            Statement::ForOf(_) => ITERATION_PROTOCOL.to_vec(),
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
    fn test_for_of_records_the_full_protocol() {
        let entries = collect("for (const item of items) {}");

        assert_eq!(entries[0], "Symbol");
        assert_eq!(entries[1], "Symbol.iterator");
        assert!(entries.contains(&"Array.prototype[@@iterator]"));
        assert!(entries.contains(&"Map.prototype[@@iterator]"));
        assert_eq!(entries.len(), 15);
    }

    #[test]
    fn test_nested_for_of_records_once() {
        let entries = collect("for (const row of rows) { for (const cell of row) {} }");
        assert_eq!(entries.len(), 15);
    }

    #[test]
    fn test_for_in_is_not_iteration() {
        let entries = collect("for (const key in table) {}");
        assert!(entries.is_empty());
    }

    #[test]
    fn test_plain_loops_record_nothing() {
        let entries = collect("while (ready) {} do {} while (ready);");
        assert!(entries.is_empty());
    }
}
