//! Constant folding for computed property keys.
//!
//! `obj["rep" + "eat"]` names the same method as `obj.repeat`, so the
//! member-access matcher folds computed keys before the instance-method
//! lookup. Only side-effect-free forms fold: literals, template literals
//! whose substitutions fold, and `+` chains over folded operands. Anything
//! else reports non-constant.

use crate::parser::ast::{BinaryOperator, Expression, TemplatePart};
use crate::parser::interner::Interner;

/// A statically-known constant value.
#[derive(Debug, Clone, PartialEq)]
pub enum FoldedValue {
    /// String constant.
    Str(String),
    /// Numeric constant.
    Num(f64),
    /// Boolean constant.
    Bool(bool),
    /// The `null` literal.
    Null,
}

impl FoldedValue {
    /// JavaScript string coercion of this value.
    fn to_js_string(&self) -> String {
        match self {
            FoldedValue::Str(s) => s.clone(),
            // Rust's f64 Display matches JavaScript for integral values
            // ("1", not "1.0") and plain decimals.
            FoldedValue::Num(n) => format!("{}", n),
            FoldedValue::Bool(true) => "true".to_string(),
            FoldedValue::Bool(false) => "false".to_string(),
            FoldedValue::Null => "null".to_string(),
        }
    }
}

/// Fold `expr` to a constant, or `None` when it is not statically known.
pub fn fold(expr: &Expression, interner: &Interner) -> Option<FoldedValue> {
    match expr {
        Expression::StringLiteral(lit) => {
            Some(FoldedValue::Str(interner.resolve(lit.value).to_string()))
        }
        Expression::NumberLiteral(lit) => Some(FoldedValue::Num(lit.value)),
        Expression::BooleanLiteral(lit) => Some(FoldedValue::Bool(lit.value)),
        Expression::NullLiteral(_) => Some(FoldedValue::Null),
        Expression::TemplateLiteral(template) => {
            let mut out = String::new();
            for part in &template.parts {
                match part {
                    TemplatePart::String(text) => out.push_str(interner.resolve(*text)),
                    TemplatePart::Expression(inner) => {
                        out.push_str(&fold(inner, interner)?.to_js_string());
                    }
                }
            }
            Some(FoldedValue::Str(out))
        }
        Expression::Binary(binary) if binary.operator == BinaryOperator::Add => {
            let left = fold(&binary.left, interner)?;
            let right = fold(&binary.right, interner)?;
            match (&left, &right) {
                (FoldedValue::Num(a), FoldedValue::Num(b)) => Some(FoldedValue::Num(a + b)),
                // `+` concatenates when either operand is a string.
                (FoldedValue::Str(_), _) | (_, FoldedValue::Str(_)) => Some(FoldedValue::Str(
                    format!("{}{}", left.to_js_string(), right.to_js_string()),
                )),
                _ => None,
            }
        }
        _ => None,
    }
}
