//! Matcher: global-destructuring
//!
//! `const { repeat } = String;` pulls a prototype method off a built-in, so
//! each identifier key in an object pattern whose initializer is an
//! unshadowed identifier checks the instance method table. Computed keys are
//! left to the expression traversal.

use crate::analyzer::definitions;
use crate::analyzer::matcher::{MatchContext, Matcher, MatcherMeta};
use crate::parser::ast::{Expression, Pattern, PatternKey, VariableDecl};

pub struct GlobalDestructuring;

static META: MatcherMeta = MatcherMeta {
    name: "global-destructuring",
    description: "Destructuring prototype methods from a built-in object",
};

impl Matcher for GlobalDestructuring {
    fn meta(&self) -> &MatcherMeta {
        &META
    }

    fn check_variable_decl(
        &self,
        decl: &VariableDecl,
        ctx: &MatchContext<'_>,
    ) -> Vec<&'static str> {
        let mut capabilities = Vec::new();
        for declarator in &decl.declarators {
            let pattern = match &declarator.pattern {
                Pattern::Object(pattern) => pattern,
                _ => continue,
            };
            let init = match &declarator.initializer {
                Some(Expression::Identifier(init)) => init,
                _ => continue,
            };
            if ctx.scopes.is_bound(init.name) {
                continue;
            }
            for property in &pattern.properties {
                if let PatternKey::Identifier(key) = &property.key {
                    if let Some(found) =
                        definitions::instance_method(ctx.interner.resolve(key.name))
                    {
                        capabilities.extend_from_slice(found);
                    }
                }
            }
        }
        capabilities
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
    fn test_object_pattern_keys_record_prototype_methods() {
        assert_eq!(
            collect("var { repeat, startsWith } = String;"),
            vec!["String.prototype.repeat", "String.prototype.startsWith"]
        );
    }

    #[test]
    fn test_renamed_key_still_counts() {
        assert_eq!(
            collect("var { repeat: rep } = String;"),
            vec!["String.prototype.repeat"]
        );
    }

    #[test]
    fn test_computed_key_is_traversed_not_matched() {
        assert_eq!(collect("var { [\"repeat\"]: rep } = String;"), vec!["String"]);
    }

    #[test]
    fn test_shadowed_initializer_records_nothing() {
        let entries = collect("function grab(String) { var { repeat } = String; }");
        assert_eq!(entries, vec!["Function"]);
    }

    #[test]
    fn test_array_pattern_records_nothing() {
        assert!(collect("var [repeat] = parts;").is_empty());
    }

    #[test]
    fn test_ambiguous_keys_record_every_owner() {
        assert_eq!(
            collect("const { entries } = Array;"),
            vec![
                "Array.prototype.entries",
                "Map.prototype.entries",
                "Set.prototype.entries",
            ]
        );
    }

    #[test]
    fn test_keys_check_the_instance_table_not_statics() {
        assert_eq!(
            collect("const { keys } = Object;"),
            vec![
                "Array.prototype.keys",
                "Map.prototype.keys",
                "Set.prototype.keys",
            ]
        );
    }
}
