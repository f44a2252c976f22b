//! Matcher: literal-forms
//!
//! Every literal implies its wrapper constructor, and function declarations
//! and expressions imply `Function`. The pruner later drops method entries
//! whose constructor never appears, so these records are what keep
//! `Number.isNaN(1)` alive while `Math.trunc` alone is discarded.

use crate::analyzer::matcher::{MatchContext, Matcher, MatcherMeta};
use crate::parser::ast::{Expression, Statement};

pub struct LiteralForms;

static META: MatcherMeta = MatcherMeta {
    name: "literal-forms",
    description: "Literals and function forms record their constructors",
};

impl Matcher for LiteralForms {
    fn meta(&self) -> &MatcherMeta {
        &META
    }

    fn check_statement(&self, stmt: &Statement, _ctx: &MatchContext<'_>) -> Vec<&'static str> {
        match stmt {
            Statement::FunctionDecl(_) => vec!["Function"],
            _ => vec![],
        }
    }

    fn check_expression(&self, expr: &Expression, _ctx: &MatchContext<'_>) -> Vec<&'static str> {
        match expr {
            Expression::Array(_) => vec!["Array"],
            Expression::Object(_) => vec!["Object"],
            Expression::Function(_) => vec!["Function"],
            Expression::NumberLiteral(_) => vec!["Number"],
            Expression::StringLiteral(_) => vec!["String"],
            Expression::BooleanLiteral(_) => vec!["Boolean"],
            Expression::RegexLiteral(_) => vec!["RegExp"],
            // BigInt, template and arrow forms record nothing.
            Expression::BigIntLiteral(_) | Expression::TemplateLiteral(_) | Expression::Arrow(_) => {
                vec![]
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
    fn test_each_literal_records_its_constructor() {
        assert_eq!(
            collect("var n = 1; var s = \"\"; var a = [];"),
            vec!["Number", "String", "Array"]
        );
        assert_eq!(collect("var o = {};"), vec!["Object"]);
        assert_eq!(collect("var f = true;"), vec!["Boolean"]);
        assert_eq!(collect("var r = /ab+c/g;"), vec!["RegExp"]);
    }

    #[test]
    fn test_function_forms() {
        assert_eq!(collect("function go() {}"), vec!["Function"]);
        assert_eq!(collect("var go = function () {};"), vec!["Function"]);
    }

    #[test]
    fn test_inert_forms_record_nothing() {
        assert!(collect("var go = () => done;").is_empty());
        assert!(collect("var big = 42n;").is_empty());
        assert!(collect("var t = `plain`;").is_empty());
        assert!(collect("var empty = null;").is_empty());
    }

    #[test]
    fn test_template_substitutions_still_traverse() {
        assert_eq!(collect("var t = `count: ${1}`;"), vec!["Number"]);
    }
}
