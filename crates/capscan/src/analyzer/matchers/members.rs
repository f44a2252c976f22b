//! Matcher: member-access
//!
//! Property access drives three lookups:
//!
//! - On enter, `Owner.member` checks the static method table when the object
//!   is a bare identifier. Shadowing is not consulted, so a local named
//!   `Array` still matches `Array.from`.
//! - On enter, the property name alone checks the instance method table,
//!   since the receiver's type is unknown. Computed keys participate when
//!   they are string literals or fold to a constant string.
//! - On exit, an identifier object that names an ES2015+ global records that
//!   global, after the static entry so `Symbol.match` lands before `Symbol`.

use crate::analyzer::definitions;
use crate::analyzer::eval::{self, FoldedValue};
use crate::analyzer::matcher::{MatchContext, Matcher, MatcherMeta};
use crate::parser::ast::Expression;

pub struct MemberAccess;

static META: MatcherMeta = MatcherMeta {
    name: "member-access",
    description: "Static and instance method access on built-ins",
};

impl Matcher for MemberAccess {
    fn meta(&self) -> &MatcherMeta {
        &META
    }

    fn check_expression(&self, expr: &Expression, ctx: &MatchContext<'_>) -> Vec<&'static str> {
        let mut capabilities = Vec::new();
        match expr {
            Expression::Member(member) => {
                let property = ctx.interner.resolve(member.property.name);
                if let Expression::Identifier(object) = &*member.object {
                    let owner = ctx.interner.resolve(object.name);
                    if let Some(found) = definitions::static_method(owner, property) {
                        capabilities.extend_from_slice(found);
                    }
                }
                if let Some(found) = definitions::instance_method(property) {
                    capabilities.extend_from_slice(found);
                }
            }
            Expression::Index(index) => {
                if let Expression::StringLiteral(literal) = &*index.index {
                    let property = ctx.interner.resolve(literal.value);
                    if let Expression::Identifier(object) = &*index.object {
                        let owner = ctx.interner.resolve(object.name);
                        if let Some(found) = definitions::static_method(owner, property) {
                            capabilities.extend_from_slice(found);
                        }
                    }
                    if let Some(found) = definitions::instance_method(property) {
                        capabilities.extend_from_slice(found);
                    }
                } else if let Some(FoldedValue::Str(property)) =
                    eval::fold(&index.index, ctx.interner)
                {
                    if let Some(found) = definitions::instance_method(&property) {
                        capabilities.extend_from_slice(found);
                    }
                }
            }
            _ => {}
        }
        capabilities
    }

    fn check_expression_exit(
        &self,
        expr: &Expression,
        ctx: &MatchContext<'_>,
    ) -> Vec<&'static str> {
        let object = match expr {
            Expression::Member(member) => &member.object,
            Expression::Index(index) => &index.object,
            _ => return vec![],
        };
        let id = match &**object {
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

#[cfg(test)]
mod tests {
    use crate::analyzer::Analyzer;
    use crate::parser::Parser;

    fn collect(source: &str) -> Vec<&'static str> {
        let (module, interner) = Parser::new(source).unwrap().parse().unwrap();
        Analyzer::new().collect(&module, &interner).entries().to_vec()
    }

    #[test]
    fn test_static_method_then_owner_global() {
        assert_eq!(collect("Symbol.match;"), vec!["Symbol.match", "Symbol"]);
    }

    #[test]
    fn test_static_method_on_pre_es6_owner() {
        assert_eq!(collect("Array.from(alike);"), vec!["Array.from"]);
        assert_eq!(collect("Math.trunc(n);"), vec!["Math.trunc"]);
    }

    #[test]
    fn test_instance_method_by_name() {
        assert_eq!(collect("s.repeat(count);"), vec!["String.prototype.repeat"]);
        assert_eq!(
            collect("xs.flatMap(expand);"),
            vec!["Array.prototype.flatMap"]
        );
    }

    #[test]
    fn test_ambiguous_instance_names_record_every_owner() {
        assert_eq!(
            collect("bag.entries();"),
            vec![
                "Array.prototype.entries",
                "Map.prototype.entries",
                "Set.prototype.entries",
            ]
        );
    }

    #[test]
    fn test_string_index_key() {
        assert_eq!(
            collect("arr[\"flat\"]();"),
            vec!["Array.prototype.flat", "String"]
        );
    }

    #[test]
    fn test_folded_index_key() {
        assert_eq!(
            collect("x[\"rep\" + \"eat\"]();"),
            vec!["String.prototype.repeat", "String"]
        );
    }

    #[test]
    fn test_shadowed_owner_still_matches_statics_but_not_the_global() {
        let entries = collect("function pick(Symbol) { return Symbol.match; }");
        assert!(entries.contains(&"Symbol.match"));
        assert!(!entries.contains(&"Symbol"));
        assert!(entries.contains(&"Function"));
    }

    #[test]
    fn test_assignment_target_member_is_not_a_read() {
        assert_eq!(collect("Symbol.x = 1;"), vec!["Number"]);
    }

    #[test]
    fn test_nested_member_in_write_target_is_still_a_read() {
        let entries = collect("Symbol.match.cached = 1;");
        assert_eq!(entries, vec!["Symbol.match", "Symbol", "Number"]);
    }

    #[test]
    fn test_static_and_instance_tables_can_both_fire() {
        assert_eq!(
            collect("Object.entries(config);"),
            vec![
                "Object.entries",
                "Array.prototype.entries",
                "Map.prototype.entries",
                "Set.prototype.entries",
            ]
        );
    }
}
