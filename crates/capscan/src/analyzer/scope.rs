//! Lexical scope tracking for the collector.
//!
//! Models JavaScript's two binding flavors: `var` declarations hoist to the
//! nearest function (or module) scope, `let`/`const` and function names bind
//! in the nearest block. The collector pushes a scope per function, block,
//! loop head and catch clause, and consults the stack to decide whether an
//! identifier refers to a binding or to a global.
//!
//! Temporal dead zones are not modeled: a `let` name counts as bound from
//! the top of its block, matching how binding tables (rather than execution
//! order) resolve names.

use rustc_hash::FxHashSet;

use crate::parser::ast::{ForInit, ForOfLeft, Pattern, Statement, VariableDecl, VariableKind};
use crate::parser::interner::Symbol;

/// Stack of nested binding scopes, innermost last.
#[derive(Debug, Default)]
pub struct ScopeStack {
    scopes: Vec<FxHashSet<Symbol>>,
}

impl ScopeStack {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a scope.
    pub fn push(&mut self) {
        self.scopes.push(FxHashSet::default());
    }

    /// Close the innermost scope, dropping its bindings.
    pub fn pop(&mut self) {
        self.scopes.pop();
    }

    /// Declare a name in the innermost scope.
    pub fn declare(&mut self, name: Symbol) {
        if let Some(scope) = self.scopes.last_mut() {
            scope.insert(name);
        }
    }

    /// True if any enclosing scope declares `name`.
    pub fn is_bound(&self, name: Symbol) -> bool {
        self.scopes.iter().rev().any(|scope| scope.contains(&name))
    }
}

/// Declare every binding a pattern introduces.
pub fn declare_pattern(scopes: &mut ScopeStack, pattern: &Pattern) {
    match pattern {
        Pattern::Identifier(id) => scopes.declare(id.name),
        Pattern::Array(array) => {
            for element in array.elements.iter().flatten() {
                declare_pattern(scopes, &element.pattern);
            }
            if let Some(rest) = &array.rest {
                declare_pattern(scopes, rest);
            }
        }
        Pattern::Object(object) => {
            for property in &object.properties {
                declare_pattern(scopes, &property.value);
            }
            if let Some(rest) = &object.rest {
                scopes.declare(rest.name);
            }
        }
        Pattern::Rest(rest) => declare_pattern(scopes, &rest.argument),
    }
}

/// Declare the names a declaration binds, regardless of kind.
pub fn declare_decl(scopes: &mut ScopeStack, decl: &VariableDecl) {
    for declarator in &decl.declarators {
        declare_pattern(scopes, &declarator.pattern);
    }
}

/// Declare `let`/`const` and function names bound directly in `statements`.
///
/// Runs when a block scope opens. Does not descend: nested blocks declare
/// their own lexicals when the collector enters them.
pub fn declare_lexicals(scopes: &mut ScopeStack, statements: &[Statement]) {
    for stmt in statements {
        match stmt {
            Statement::VariableDecl(decl) if decl.kind != VariableKind::Var => {
                declare_decl(scopes, decl);
            }
            Statement::FunctionDecl(decl) => scopes.declare(decl.name.name),
            _ => {}
        }
    }
}

/// Declare every `var` bound anywhere under `statements`, descending into
/// nested blocks and control flow but not into function bodies.
///
/// Runs when a function or module scope opens, so a `var` name shadows a
/// global from the top of the function regardless of where the declaration
/// sits.
pub fn hoist_vars(scopes: &mut ScopeStack, statements: &[Statement]) {
    for stmt in statements {
        hoist_vars_in_statement(scopes, stmt);
    }
}

fn hoist_vars_in_statement(scopes: &mut ScopeStack, stmt: &Statement) {
    match stmt {
        Statement::VariableDecl(decl) => {
            if decl.kind == VariableKind::Var {
                declare_decl(scopes, decl);
            }
        }
        Statement::If(if_stmt) => {
            hoist_vars_in_statement(scopes, &if_stmt.then_branch);
            if let Some(else_branch) = &if_stmt.else_branch {
                hoist_vars_in_statement(scopes, else_branch);
            }
        }
        Statement::Switch(switch_stmt) => {
            for case in &switch_stmt.cases {
                hoist_vars(scopes, &case.consequent);
            }
        }
        Statement::While(while_stmt) => hoist_vars_in_statement(scopes, &while_stmt.body),
        Statement::DoWhile(do_while) => hoist_vars_in_statement(scopes, &do_while.body),
        Statement::For(for_stmt) => {
            if let Some(ForInit::VariableDecl(decl)) = &for_stmt.init {
                if decl.kind == VariableKind::Var {
                    declare_decl(scopes, decl);
                }
            }
            hoist_vars_in_statement(scopes, &for_stmt.body);
        }
        Statement::ForOf(for_of) => {
            hoist_vars_in_for_left(scopes, &for_of.left);
            hoist_vars_in_statement(scopes, &for_of.body);
        }
        Statement::ForIn(for_in) => {
            hoist_vars_in_for_left(scopes, &for_in.left);
            hoist_vars_in_statement(scopes, &for_in.body);
        }
        Statement::Try(try_stmt) => {
            hoist_vars(scopes, &try_stmt.body.statements);
            if let Some(catch) = &try_stmt.catch_clause {
                hoist_vars(scopes, &catch.body.statements);
            }
            if let Some(finally) = &try_stmt.finally_clause {
                hoist_vars(scopes, &finally.statements);
            }
        }
        Statement::Block(block) => hoist_vars(scopes, &block.statements),
        // Function bodies hoist into their own scope when entered.
        _ => {}
    }
}

fn hoist_vars_in_for_left(scopes: &mut ScopeStack, left: &ForOfLeft) {
    if let ForOfLeft::VariableDecl(decl) = left {
        if decl.kind == VariableKind::Var {
            declare_decl(scopes, decl);
        }
    }
}
