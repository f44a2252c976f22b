//! Expression AST nodes
//!
//! This module defines all expression types in the JavaScript subset, including:
//! - Literal expressions (numbers, strings, regexes, arrays, objects)
//! - Unary and binary operations
//! - Function calls and member access
//! - Function, arrow, yield and await expressions

use super::*;
use crate::parser::token::Span;

/// Expression (produces a value)
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// Number literal: 42, 3.14, 0xFF
    NumberLiteral(NumberLiteral),

    /// BigInt literal: 42n
    BigIntLiteral(BigIntLiteral),

    /// String literal: "hello"
    StringLiteral(StringLiteral),

    /// Template literal: `Hello, ${name}!`
    TemplateLiteral(TemplateLiteral),

    /// Boolean literal: true, false
    BooleanLiteral(BooleanLiteral),

    /// Null literal
    NullLiteral(Span),

    /// Regular expression literal: /ab+c/gi
    RegexLiteral(RegexLiteral),

    /// Identifier
    Identifier(Identifier),

    /// This expression: this
    This(Span),

    /// Array literal: [1, 2, 3]
    Array(ArrayExpression),

    /// Object literal: { x: 1, y: 2 }
    Object(ObjectExpression),

    /// Function expression: function f() { ... }
    Function(FunctionExpression),

    /// Arrow function: (x) => x + 1
    Arrow(ArrowFunction),

    /// Unary expression: !x, -y, typeof z
    Unary(UnaryExpression),

    /// Binary expression: x + y, a in b
    Binary(BinaryExpression),

    /// Logical expression: x && y, a ?? b
    Logical(LogicalExpression),

    /// Assignment: x = 42, y += 1
    Assignment(AssignmentExpression),

    /// Ternary: x ? y : z
    Conditional(ConditionalExpression),

    /// Function call: foo(1, 2, 3)
    Call(CallExpression),

    /// New expression: new Map()
    New(NewExpression),

    /// Member access: obj.prop
    Member(MemberExpression),

    /// Index access: arr[0], obj[key]
    Index(IndexExpression),

    /// Yield expression: yield x, yield* iter
    Yield(YieldExpression),

    /// Await expression: await promise
    Await(AwaitExpression),
}

impl Expression {
    /// Get the span of this expression
    pub fn span(&self) -> &Span {
        match self {
            Expression::NumberLiteral(e) => &e.span,
            Expression::BigIntLiteral(e) => &e.span,
            Expression::StringLiteral(e) => &e.span,
            Expression::TemplateLiteral(e) => &e.span,
            Expression::BooleanLiteral(e) => &e.span,
            Expression::NullLiteral(span) => span,
            Expression::RegexLiteral(e) => &e.span,
            Expression::Identifier(e) => &e.span,
            Expression::This(span) => span,
            Expression::Array(e) => &e.span,
            Expression::Object(e) => &e.span,
            Expression::Function(e) => &e.span,
            Expression::Arrow(e) => &e.span,
            Expression::Unary(e) => &e.span,
            Expression::Binary(e) => &e.span,
            Expression::Logical(e) => &e.span,
            Expression::Assignment(e) => &e.span,
            Expression::Conditional(e) => &e.span,
            Expression::Call(e) => &e.span,
            Expression::New(e) => &e.span,
            Expression::Member(e) => &e.span,
            Expression::Index(e) => &e.span,
            Expression::Yield(e) => &e.span,
            Expression::Await(e) => &e.span,
        }
    }

    /// Check if this expression is a literal
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            Expression::NumberLiteral(_)
                | Expression::BigIntLiteral(_)
                | Expression::StringLiteral(_)
                | Expression::TemplateLiteral(_)
                | Expression::BooleanLiteral(_)
                | Expression::NullLiteral(_)
                | Expression::RegexLiteral(_)
                | Expression::Array(_)
                | Expression::Object(_)
        )
    }

    /// Check if this expression is a simple identifier
    pub fn is_identifier(&self) -> bool {
        matches!(self, Expression::Identifier(_))
    }
}

// ============================================================================
// Literal Expressions
// ============================================================================

/// Number literal: 42, 3.14, 0xFF, 0b1010
#[derive(Debug, Clone, PartialEq)]
pub struct NumberLiteral {
    pub value: f64,
    pub span: Span,
}

/// BigInt literal: 42n (digits stored without the `n` suffix)
#[derive(Debug, Clone, PartialEq)]
pub struct BigIntLiteral {
    pub digits: crate::parser::interner::Symbol,
    pub span: Span,
}

/// String literal: "hello"
#[derive(Debug, Clone, PartialEq)]
pub struct StringLiteral {
    pub value: crate::parser::interner::Symbol,
    pub span: Span,
}

/// Template literal: `Hello, ${name}!`
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateLiteral {
    pub parts: Vec<TemplatePart>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TemplatePart {
    String(crate::parser::interner::Symbol),
    Expression(Box<Expression>),
}

/// Boolean literal: true, false
#[derive(Debug, Clone, PartialEq)]
pub struct BooleanLiteral {
    pub value: bool,
    pub span: Span,
}

/// Regular expression literal: /ab+c/gi
#[derive(Debug, Clone, PartialEq)]
pub struct RegexLiteral {
    pub pattern: crate::parser::interner::Symbol,
    pub flags: crate::parser::interner::Symbol,
    pub span: Span,
}

// ============================================================================
// Array and Object Expressions
// ============================================================================

/// Array expression: [1, 2, 3], [...arr1, ...arr2]
/// `None` elements are holes: [1, , 3]
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayExpression {
    pub elements: Vec<Option<ArrayElement>>,
    pub span: Span,
}

/// Array element (expression or spread)
#[derive(Debug, Clone, PartialEq)]
pub enum ArrayElement {
    /// Regular expression: 42
    Expression(Expression),
    /// Spread element: ...arr
    Spread(Expression),
}

/// Object expression: { x: 1, y: 2 }
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectExpression {
    pub properties: Vec<ObjectProperty>,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ObjectProperty {
    Property(Property),
    Spread(SpreadProperty),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub key: PropertyKey,
    pub value: Expression,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PropertyKey {
    Identifier(Identifier),
    StringLiteral(StringLiteral),
    NumberLiteral(NumberLiteral),
    /// Computed property name: [expr]
    Computed(Expression),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SpreadProperty {
    pub argument: Expression,
    pub span: Span,
}

// ============================================================================
// Functions
// ============================================================================

/// Function expression: function f() { ... } or function () { ... }
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionExpression {
    /// Optional name (anonymous functions have none)
    pub name: Option<Identifier>,

    /// Parameters
    pub params: Vec<Parameter>,

    /// Function body
    pub body: BlockStatement,

    /// Is generator function? (function*)
    pub is_generator: bool,

    /// Is async function?
    pub is_async: bool,

    pub span: Span,
}

/// Arrow function: (x) => x + 1
#[derive(Debug, Clone, PartialEq)]
pub struct ArrowFunction {
    pub params: Vec<Parameter>,
    pub body: ArrowBody,
    pub is_async: bool,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ArrowBody {
    Expression(Box<Expression>),
    Block(BlockStatement),
}

// ============================================================================
// Unary & Binary Expressions
// ============================================================================

/// Unary expression: !x, -y, typeof z, x++
#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpression {
    pub operator: UnaryOperator,
    pub operand: Box<Expression>,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    Plus,             // +x
    Minus,            // -x
    Not,              // !x
    BitwiseNot,       // ~x
    Typeof,           // typeof x
    Void,             // void x
    Delete,           // delete x.y
    PrefixIncrement,  // ++x
    PrefixDecrement,  // --x
    PostfixIncrement, // x++
    PostfixDecrement, // x--
}

/// Binary expression: x + y, a * b, key in obj
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpression {
    pub operator: BinaryOperator,
    pub left: Box<Expression>,
    pub right: Box<Expression>,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    // Arithmetic
    Add,      // +
    Subtract, // -
    Multiply, // *
    Divide,   // /
    Modulo,   // %
    Exponent, // **

    // Comparison
    Equal,          // ==
    NotEqual,       // !=
    StrictEqual,    // ===
    StrictNotEqual, // !==
    LessThan,       // <
    LessEqual,      // <=
    GreaterThan,    // >
    GreaterEqual,   // >=

    // Bitwise
    BitwiseAnd,         // &
    BitwiseOr,          // |
    BitwiseXor,         // ^
    LeftShift,          // <<
    RightShift,         // >>
    UnsignedRightShift, // >>>

    // Relational keywords
    In,         // key in obj
    Instanceof, // x instanceof C
}

/// Logical expression: x && y, a || b, v ?? d
#[derive(Debug, Clone, PartialEq)]
pub struct LogicalExpression {
    pub operator: LogicalOperator,
    pub left: Box<Expression>,
    pub right: Box<Expression>,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOperator {
    And,               // &&
    Or,                // ||
    NullishCoalescing, // ??
}

/// Assignment expression: x = 42, y += 1
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentExpression {
    pub operator: AssignmentOperator,
    pub left: Box<Expression>,
    pub right: Box<Expression>,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignmentOperator {
    Assign,                   // =
    AddAssign,                // +=
    SubAssign,                // -=
    MulAssign,                // *=
    DivAssign,                // /=
    ModAssign,                // %=
    ExpAssign,                // **=
    AndAssign,                // &=
    OrAssign,                 // |=
    XorAssign,                // ^=
    LeftShiftAssign,          // <<=
    RightShiftAssign,         // >>=
    UnsignedRightShiftAssign, // >>>=
}

// ============================================================================
// Complex Expressions
// ============================================================================

/// Conditional (ternary): x ? y : z
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionalExpression {
    pub test: Box<Expression>,
    pub consequent: Box<Expression>,
    pub alternate: Box<Expression>,
    pub span: Span,
}

/// Function call: foo(1, 2, 3)
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpression {
    pub callee: Box<Expression>,
    pub arguments: Vec<Argument>,
    pub span: Span,
}

/// Call argument (expression or spread)
#[derive(Debug, Clone, PartialEq)]
pub enum Argument {
    /// Regular argument: f(x)
    Expression(Expression),
    /// Spread argument: f(...args)
    Spread(Expression),
}

/// New expression: new Map(entries)
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpression {
    pub callee: Box<Expression>,
    pub arguments: Vec<Argument>,
    pub span: Span,
}

/// Member access: obj.prop
#[derive(Debug, Clone, PartialEq)]
pub struct MemberExpression {
    pub object: Box<Expression>,
    pub property: Identifier,
    pub span: Span,
}

/// Index access: arr[0], obj["key"]
#[derive(Debug, Clone, PartialEq)]
pub struct IndexExpression {
    pub object: Box<Expression>,
    pub index: Box<Expression>,
    pub span: Span,
}

/// Yield expression: yield x, yield* iter
#[derive(Debug, Clone, PartialEq)]
pub struct YieldExpression {
    /// Yielded value (None for bare `yield`)
    pub argument: Option<Box<Expression>>,

    /// True for delegation: yield*
    pub delegate: bool,

    pub span: Span,
}

/// Await expression: await promise
#[derive(Debug, Clone, PartialEq)]
pub struct AwaitExpression {
    pub argument: Box<Expression>,
    pub span: Span,
}
