//! Capability collection pass
//!
//! `Collector` owns the traversal: it walks a module, tracks lexical scope,
//! and routes every statement, declaration and expression through the
//! matcher registry, recording whatever the matchers return.
//!
//! Dispatch follows reference positions:
//!
//! - Member and index expressions are dispatched whole. A bare identifier in
//!   object or key position is never dispatched on its own, so `table[Map]`
//!   records nothing while `table[Map.groupBy]` still reads `Map`.
//! - Assignment targets are writes. An identifier target never dispatches,
//!   and a member target skips dispatch while identifiers nested deeper in
//!   its object remain reads.
//! - Binding positions (declarator patterns, parameters, function names,
//!   `for...of` and `for...in` heads) never dispatch, though computed keys
//!   and default values inside them do.
//!
//! Scope handling mirrors the language: `var` declarations and function
//! names are registered when the enclosing function or module scope opens,
//! `let`/`const` when their block opens, so a later declaration still
//! shadows an earlier use.

use crate::analyzer::matcher::{MatchContext, Matcher};
use crate::analyzer::recorder::CapabilitySet;
use crate::analyzer::scope::{self, ScopeStack};
use crate::parser::ast::{
    visitor, ArrowBody, BlockStatement, Expression, ForInit, ForOfLeft, FunctionDecl, Module,
    Parameter, Statement, VariableDecl, Visitor,
};
use crate::parser::interner::Interner;

/// Runs the matcher registry over one module.
pub struct Collector<'a> {
    matchers: &'a [Box<dyn Matcher>],
    interner: &'a Interner,
    scopes: ScopeStack,
    set: CapabilitySet,
}

impl<'a> Collector<'a> {
    pub fn new(matchers: &'a [Box<dyn Matcher>], interner: &'a Interner) -> Self {
        Self {
            matchers,
            interner,
            scopes: ScopeStack::new(),
            set: CapabilitySet::new(),
        }
    }

    /// Walk the module and return everything the matchers recorded.
    pub fn run(mut self, module: &Module) -> CapabilitySet {
        self.scopes.push();
        scope::hoist_vars(&mut self.scopes, &module.statements);
        scope::declare_lexicals(&mut self.scopes, &module.statements);
        self.visit_module(module);
        self.scopes.pop();
        self.set
    }

    fn dispatch_statement(&mut self, stmt: &Statement) {
        let matchers = self.matchers;
        let ctx = MatchContext {
            interner: self.interner,
            scopes: &self.scopes,
        };
        for matcher in matchers {
            for capability in matcher.check_statement(stmt, &ctx) {
                self.set.record(capability);
            }
        }
    }

    fn dispatch_variable_decl(&mut self, decl: &VariableDecl) {
        let matchers = self.matchers;
        let ctx = MatchContext {
            interner: self.interner,
            scopes: &self.scopes,
        };
        for matcher in matchers {
            for capability in matcher.check_variable_decl(decl, &ctx) {
                self.set.record(capability);
            }
        }
    }

    fn dispatch_expression(&mut self, expr: &Expression) {
        let matchers = self.matchers;
        let ctx = MatchContext {
            interner: self.interner,
            scopes: &self.scopes,
        };
        for matcher in matchers {
            for capability in matcher.check_expression(expr, &ctx) {
                self.set.record(capability);
            }
        }
    }

    fn dispatch_expression_exit(&mut self, expr: &Expression) {
        let matchers = self.matchers;
        let ctx = MatchContext {
            interner: self.interner,
            scopes: &self.scopes,
        };
        for matcher in matchers {
            for capability in matcher.check_expression_exit(expr, &ctx) {
                self.set.record(capability);
            }
        }
    }

    /// Visit an object or key operand unless it is a bare identifier.
    fn visit_member_operand(&mut self, expr: &Expression) {
        if !matches!(expr, Expression::Identifier(_)) {
            self.visit_expression(expr);
        }
    }

    /// Enter a function body: parameters first, then `var` hoisting and
    /// lexical declarations, then the statements themselves.
    fn walk_function_body(&mut self, params: &[Parameter], body: &BlockStatement) {
        for param in params {
            scope::declare_pattern(&mut self.scopes, &param.pattern);
        }
        scope::hoist_vars(&mut self.scopes, &body.statements);
        scope::declare_lexicals(&mut self.scopes, &body.statements);
        visitor::walk_parameters(self, params);
        for stmt in &body.statements {
            self.visit_statement(stmt);
        }
    }

    fn visit_for_head(&mut self, left: &ForOfLeft, right: &Expression) {
        match left {
            ForOfLeft::VariableDecl(decl) => {
                scope::declare_decl(&mut self.scopes, decl);
                self.visit_variable_decl(decl);
            }
            ForOfLeft::Pattern(pattern) => self.visit_pattern(pattern),
        }
        self.visit_expression(right);
    }
}

impl Visitor for Collector<'_> {
    fn visit_statement(&mut self, stmt: &Statement) {
        self.dispatch_statement(stmt);
        match stmt {
            Statement::For(stmt) => {
                self.scopes.push();
                match &stmt.init {
                    Some(ForInit::VariableDecl(decl)) => {
                        scope::declare_decl(&mut self.scopes, decl);
                        self.visit_variable_decl(decl);
                    }
                    Some(ForInit::Expression(expr)) => self.visit_expression(expr),
                    None => {}
                }
                if let Some(test) = &stmt.test {
                    self.visit_expression(test);
                }
                if let Some(update) = &stmt.update {
                    self.visit_expression(update);
                }
                self.visit_statement(&stmt.body);
                self.scopes.pop();
            }
            Statement::ForOf(stmt) => {
                self.scopes.push();
                self.visit_for_head(&stmt.left, &stmt.right);
                self.visit_statement(&stmt.body);
                self.scopes.pop();
            }
            Statement::ForIn(stmt) => {
                self.scopes.push();
                self.visit_for_head(&stmt.left, &stmt.right);
                self.visit_statement(&stmt.body);
                self.scopes.pop();
            }
            Statement::Switch(stmt) => {
                self.visit_expression(&stmt.discriminant);
                // All cases share one block scope.
                self.scopes.push();
                for case in &stmt.cases {
                    scope::declare_lexicals(&mut self.scopes, &case.consequent);
                }
                for case in &stmt.cases {
                    if let Some(test) = &case.test {
                        self.visit_expression(test);
                    }
                    for stmt in &case.consequent {
                        self.visit_statement(stmt);
                    }
                }
                self.scopes.pop();
            }
            Statement::Try(stmt) => {
                self.visit_block_statement(&stmt.body);
                if let Some(catch) = &stmt.catch_clause {
                    self.scopes.push();
                    if let Some(param) = &catch.param {
                        scope::declare_pattern(&mut self.scopes, param);
                        self.visit_pattern(param);
                    }
                    self.visit_block_statement(&catch.body);
                    self.scopes.pop();
                }
                if let Some(finally) = &stmt.finally_clause {
                    self.visit_block_statement(finally);
                }
            }
            other => visitor::walk_statement(self, other),
        }
    }

    fn visit_variable_decl(&mut self, decl: &VariableDecl) {
        self.dispatch_variable_decl(decl);
        visitor::walk_variable_decl(self, decl);
    }

    fn visit_function_decl(&mut self, decl: &FunctionDecl) {
        // The name was bound in the enclosing scope when it opened.
        self.scopes.push();
        self.walk_function_body(&decl.params, &decl.body);
        self.scopes.pop();
    }

    fn visit_block_statement(&mut self, block: &BlockStatement) {
        self.scopes.push();
        scope::declare_lexicals(&mut self.scopes, &block.statements);
        visitor::walk_block_statement(self, block);
        self.scopes.pop();
    }

    fn visit_expression(&mut self, expr: &Expression) {
        self.dispatch_expression(expr);
        match expr {
            Expression::Member(member) => self.visit_member_operand(&member.object),
            Expression::Index(index) => {
                self.visit_member_operand(&index.object);
                self.visit_member_operand(&index.index);
            }
            Expression::Assignment(assignment) => {
                match &*assignment.left {
                    // Write targets do not dispatch; identifiers nested in
                    // object position are still reads.
                    Expression::Identifier(_) => {}
                    Expression::Member(member) => self.visit_member_operand(&member.object),
                    Expression::Index(index) => {
                        self.visit_member_operand(&index.object);
                        self.visit_member_operand(&index.index);
                    }
                    other => self.visit_expression(other),
                }
                self.visit_expression(&assignment.right);
            }
            Expression::Function(function) => {
                self.scopes.push();
                if let Some(name) = &function.name {
                    self.scopes.declare(name.name);
                }
                self.walk_function_body(&function.params, &function.body);
                self.scopes.pop();
            }
            Expression::Arrow(arrow) => {
                self.scopes.push();
                match &arrow.body {
                    ArrowBody::Block(block) => self.walk_function_body(&arrow.params, block),
                    ArrowBody::Expression(value) => {
                        for param in &arrow.params {
                            scope::declare_pattern(&mut self.scopes, &param.pattern);
                        }
                        visitor::walk_parameters(self, &arrow.params);
                        self.visit_expression(value);
                    }
                }
                self.scopes.pop();
            }
            other => visitor::walk_expression(self, other),
        }
        self.dispatch_expression_exit(expr);
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

    // ==== Reference positions ====

    #[test]
    fn test_member_enter_then_owner_exit_order() {
        assert_eq!(collect("Symbol.iterator;"), vec!["Symbol.iterator", "Symbol"]);
    }

    #[test]
    fn test_bare_identifier_operands_are_not_reads() {
        assert!(collect("table[Symbol];").is_empty());
    }

    #[test]
    fn test_assignment_target_identifier_is_not_a_read() {
        assert_eq!(collect("Symbol = 1;"), vec!["Number"]);
        assert_eq!(collect("arr[Map] = 1;"), vec!["Number"]);
    }

    #[test]
    fn test_compound_assignment_target_is_still_a_write() {
        assert_eq!(collect("Symbol += 1;"), vec!["Number"]);
    }

    #[test]
    fn test_increment_operand_is_a_read() {
        assert_eq!(collect("Symbol++;"), vec!["Symbol"]);
    }

    // ==== Scope tracking ====

    #[test]
    fn test_var_hoisting_shadows_earlier_uses() {
        assert_eq!(collect("use(Symbol); var Symbol = 1;"), vec!["Number"]);
    }

    #[test]
    fn test_function_names_bind_before_their_declaration() {
        assert_eq!(collect("Map(); function Map() {}"), vec!["Function"]);
    }

    #[test]
    fn test_block_scoped_shadow_ends_with_the_block() {
        assert_eq!(
            collect("{ let Symbol = 1; Symbol(); } Symbol();"),
            vec!["Number", "Symbol"]
        );
    }

    #[test]
    fn test_catch_parameter_shadows_its_body_only() {
        let source = "try { risky(); } catch (Symbol) { Symbol(); } Symbol();";
        assert_eq!(collect(source), vec!["Symbol"]);
    }

    #[test]
    fn test_switch_cases_share_one_scope() {
        let source = "switch (tag) { case 1: let Symbol = stub; break; case 2: Symbol(); break; }";
        assert_eq!(collect(source), vec!["Number"]);
    }

    #[test]
    fn test_loop_head_declarations_stay_in_the_loop() {
        let source = "for (let Symbol = 0; Symbol < 3; Symbol++) {} Symbol();";
        assert_eq!(collect(source), vec!["Number", "Symbol"]);
    }

    #[test]
    fn test_named_function_expression_shadows_itself() {
        assert_eq!(
            collect("var f = function Symbol() { return Symbol; };"),
            vec!["Function"]
        );
    }

    #[test]
    fn test_arrow_parameters_shadow_the_body() {
        assert_eq!(
            collect("var f = (Symbol) => Symbol(); var g = () => Symbol;"),
            vec!["Symbol"]
        );
    }

    #[test]
    fn test_parameter_defaults_are_reads() {
        assert_eq!(collect("function f(a = Symbol) {}"), vec!["Function", "Symbol"]);
    }
}
