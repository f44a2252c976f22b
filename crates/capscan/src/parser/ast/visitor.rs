//! AST visitor pattern for traversing the syntax tree
//!
//! This module provides a visitor trait for walking the AST. Visitors can be
//! used for analysis and other tree-walking operations.
//!
//! # Example
//!
//! ```rust
//! use capscan::parser::ast::*;
//!
//! struct CountIdentifiers {
//!     count: usize,
//! }
//!
//! impl Visitor for CountIdentifiers {
//!     fn visit_identifier(&mut self, _id: &Identifier) {
//!         self.count += 1;
//!         // Identifier is a leaf node - no further traversal needed
//!     }
//! }
//! ```

use super::*;

/// AST visitor trait
///
/// Implement this trait to traverse the AST. Each visit method has a default
/// implementation that calls the corresponding walk function.
pub trait Visitor: Sized {
    // Top-level
    fn visit_module(&mut self, module: &Module) {
        walk_module(self, module);
    }

    // Statements
    fn visit_statement(&mut self, stmt: &Statement) {
        walk_statement(self, stmt);
    }

    fn visit_variable_decl(&mut self, decl: &VariableDecl) {
        walk_variable_decl(self, decl);
    }

    fn visit_function_decl(&mut self, decl: &FunctionDecl) {
        walk_function_decl(self, decl);
    }

    fn visit_block_statement(&mut self, block: &BlockStatement) {
        walk_block_statement(self, block);
    }

    // Expressions
    fn visit_expression(&mut self, expr: &Expression) {
        walk_expression(self, expr);
    }

    // Common
    fn visit_identifier(&mut self, _id: &Identifier) {
        // Leaf node - no traversal needed
    }

    fn visit_pattern(&mut self, pattern: &Pattern) {
        walk_pattern(self, pattern);
    }
}

// ============================================================================
// Walk Functions - Default Traversal Implementations
// ============================================================================

pub fn walk_module<V: Visitor>(visitor: &mut V, module: &Module) {
    for stmt in &module.statements {
        visitor.visit_statement(stmt);
    }
}

pub fn walk_statement<V: Visitor>(visitor: &mut V, stmt: &Statement) {
    match stmt {
        Statement::VariableDecl(decl) => visitor.visit_variable_decl(decl),
        Statement::FunctionDecl(decl) => visitor.visit_function_decl(decl),
        Statement::Expression(stmt) => visitor.visit_expression(&stmt.expression),
        Statement::If(stmt) => {
            visitor.visit_expression(&stmt.condition);
            visitor.visit_statement(&stmt.then_branch);
            if let Some(else_branch) = &stmt.else_branch {
                visitor.visit_statement(else_branch);
            }
        }
        Statement::Switch(stmt) => {
            visitor.visit_expression(&stmt.discriminant);
            for case in &stmt.cases {
                if let Some(test) = &case.test {
                    visitor.visit_expression(test);
                }
                for stmt in &case.consequent {
                    visitor.visit_statement(stmt);
                }
            }
        }
        Statement::While(stmt) => {
            visitor.visit_expression(&stmt.condition);
            visitor.visit_statement(&stmt.body);
        }
        Statement::DoWhile(stmt) => {
            visitor.visit_statement(&stmt.body);
            visitor.visit_expression(&stmt.condition);
        }
        Statement::For(stmt) => {
            match &stmt.init {
                Some(ForInit::VariableDecl(decl)) => visitor.visit_variable_decl(decl),
                Some(ForInit::Expression(expr)) => visitor.visit_expression(expr),
                None => {}
            }
            if let Some(test) = &stmt.test {
                visitor.visit_expression(test);
            }
            if let Some(update) = &stmt.update {
                visitor.visit_expression(update);
            }
            visitor.visit_statement(&stmt.body);
        }
        Statement::ForOf(stmt) => {
            walk_for_left(visitor, &stmt.left);
            visitor.visit_expression(&stmt.right);
            visitor.visit_statement(&stmt.body);
        }
        Statement::ForIn(stmt) => {
            walk_for_left(visitor, &stmt.left);
            visitor.visit_expression(&stmt.right);
            visitor.visit_statement(&stmt.body);
        }
        Statement::Break(_) | Statement::Continue(_) => {}
        Statement::Return(stmt) => {
            if let Some(value) = &stmt.value {
                visitor.visit_expression(value);
            }
        }
        Statement::Throw(stmt) => visitor.visit_expression(&stmt.value),
        Statement::Try(stmt) => {
            visitor.visit_block_statement(&stmt.body);
            if let Some(catch) = &stmt.catch_clause {
                if let Some(param) = &catch.param {
                    visitor.visit_pattern(param);
                }
                visitor.visit_block_statement(&catch.body);
            }
            if let Some(finally) = &stmt.finally_clause {
                visitor.visit_block_statement(finally);
            }
        }
        Statement::Block(block) => visitor.visit_block_statement(block),
        Statement::Empty(_) => {}
    }
}

fn walk_for_left<V: Visitor>(visitor: &mut V, left: &ForOfLeft) {
    match left {
        ForOfLeft::VariableDecl(decl) => visitor.visit_variable_decl(decl),
        ForOfLeft::Pattern(pattern) => visitor.visit_pattern(pattern),
    }
}

pub fn walk_variable_decl<V: Visitor>(visitor: &mut V, decl: &VariableDecl) {
    for declarator in &decl.declarators {
        visitor.visit_pattern(&declarator.pattern);
        if let Some(init) = &declarator.initializer {
            visitor.visit_expression(init);
        }
    }
}

pub fn walk_function_decl<V: Visitor>(visitor: &mut V, decl: &FunctionDecl) {
    visitor.visit_identifier(&decl.name);
    walk_parameters(visitor, &decl.params);
    visitor.visit_block_statement(&decl.body);
}

pub fn walk_parameters<V: Visitor>(visitor: &mut V, params: &[Parameter]) {
    for param in params {
        visitor.visit_pattern(&param.pattern);
        if let Some(default) = &param.default_value {
            visitor.visit_expression(default);
        }
    }
}

pub fn walk_block_statement<V: Visitor>(visitor: &mut V, block: &BlockStatement) {
    for stmt in &block.statements {
        visitor.visit_statement(stmt);
    }
}

pub fn walk_expression<V: Visitor>(visitor: &mut V, expr: &Expression) {
    match expr {
        Expression::NumberLiteral(_)
        | Expression::BigIntLiteral(_)
        | Expression::StringLiteral(_)
        | Expression::BooleanLiteral(_)
        | Expression::NullLiteral(_)
        | Expression::RegexLiteral(_)
        | Expression::This(_) => {}
        Expression::TemplateLiteral(template) => {
            for part in &template.parts {
                if let TemplatePart::Expression(inner) = part {
                    visitor.visit_expression(inner);
                }
            }
        }
        Expression::Identifier(id) => visitor.visit_identifier(id),
        Expression::Array(array) => {
            for element in array.elements.iter().flatten() {
                match element {
                    ArrayElement::Expression(inner) | ArrayElement::Spread(inner) => {
                        visitor.visit_expression(inner);
                    }
                }
            }
        }
        Expression::Object(object) => {
            for property in &object.properties {
                match property {
                    ObjectProperty::Property(prop) => {
                        if let PropertyKey::Computed(key) = &prop.key {
                            visitor.visit_expression(key);
                        }
                        visitor.visit_expression(&prop.value);
                    }
                    ObjectProperty::Spread(spread) => visitor.visit_expression(&spread.argument),
                }
            }
        }
        Expression::Function(function) => {
            walk_parameters(visitor, &function.params);
            visitor.visit_block_statement(&function.body);
        }
        Expression::Arrow(arrow) => {
            walk_parameters(visitor, &arrow.params);
            match &arrow.body {
                ArrowBody::Expression(inner) => visitor.visit_expression(inner),
                ArrowBody::Block(block) => visitor.visit_block_statement(block),
            }
        }
        Expression::Unary(unary) => visitor.visit_expression(&unary.operand),
        Expression::Binary(binary) => {
            visitor.visit_expression(&binary.left);
            visitor.visit_expression(&binary.right);
        }
        Expression::Logical(logical) => {
            visitor.visit_expression(&logical.left);
            visitor.visit_expression(&logical.right);
        }
        Expression::Assignment(assignment) => {
            visitor.visit_expression(&assignment.left);
            visitor.visit_expression(&assignment.right);
        }
        Expression::Conditional(conditional) => {
            visitor.visit_expression(&conditional.test);
            visitor.visit_expression(&conditional.consequent);
            visitor.visit_expression(&conditional.alternate);
        }
        Expression::Call(call) => {
            visitor.visit_expression(&call.callee);
            walk_arguments(visitor, &call.arguments);
        }
        Expression::New(new) => {
            visitor.visit_expression(&new.callee);
            walk_arguments(visitor, &new.arguments);
        }
        Expression::Member(member) => {
            visitor.visit_expression(&member.object);
            visitor.visit_identifier(&member.property);
        }
        Expression::Index(index) => {
            visitor.visit_expression(&index.object);
            visitor.visit_expression(&index.index);
        }
        Expression::Yield(yield_expr) => {
            if let Some(argument) = &yield_expr.argument {
                visitor.visit_expression(argument);
            }
        }
        Expression::Await(await_expr) => visitor.visit_expression(&await_expr.argument),
    }
}

pub fn walk_arguments<V: Visitor>(visitor: &mut V, arguments: &[Argument]) {
    for argument in arguments {
        match argument {
            Argument::Expression(inner) | Argument::Spread(inner) => {
                visitor.visit_expression(inner);
            }
        }
    }
}

pub fn walk_pattern<V: Visitor>(visitor: &mut V, pattern: &Pattern) {
    match pattern {
        Pattern::Identifier(id) => visitor.visit_identifier(id),
        Pattern::Array(array) => {
            for element in array.elements.iter().flatten() {
                visitor.visit_pattern(&element.pattern);
                if let Some(default) = &element.default {
                    visitor.visit_expression(default);
                }
            }
            if let Some(rest) = &array.rest {
                visitor.visit_pattern(rest);
            }
        }
        Pattern::Object(object) => {
            for property in &object.properties {
                if let PatternKey::Computed(key) = &property.key {
                    visitor.visit_expression(key);
                }
                visitor.visit_pattern(&property.value);
                if let Some(default) = &property.default {
                    visitor.visit_expression(default);
                }
            }
            if let Some(rest) = &object.rest {
                visitor.visit_identifier(rest);
            }
        }
        Pattern::Rest(rest) => visitor.visit_pattern(&rest.argument),
    }
}
