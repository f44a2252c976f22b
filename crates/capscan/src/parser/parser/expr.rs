//! Expression parsing

use super::precedence::{get_precedence, is_right_associative, Precedence};
use super::{ParseError, Parser};
use crate::parser::ast::*;
use crate::parser::interner::Symbol;
use crate::parser::token::Token;

/// Parse an expression.
pub fn parse_expression(parser: &mut Parser) -> Result<Expression, ParseError> {
    // Check depth before entering
    parser.depth += 1;
    if parser.depth > super::guards::MAX_PARSE_DEPTH {
        parser.depth -= 1;
        return Err(ParseError::parser_limit_exceeded(
            format!("Maximum nesting depth ({}) exceeded in expression", super::guards::MAX_PARSE_DEPTH),
            parser.current_span(),
        ));
    }

    // Use inner function so `?` can be used freely while ensuring depth is always decremented
    let result = parse_expression_inner(parser);

    parser.depth -= 1;
    result
}

fn parse_expression_inner(parser: &mut Parser) -> Result<Expression, ParseError> {
    if parser.check(&Token::Yield) {
        return parse_yield_expression(parser);
    }
    parse_assignment_expression(parser)
}

/// Parse an expression with the `in` operator re-enabled.
///
/// Bracketed contexts inside a for-loop head lift the no-in restriction:
/// `for (x = ("a" in t); x;)` is fine even though a top-level `in` is not.
fn parse_expression_allowing_in(parser: &mut Parser) -> Result<Expression, ParseError> {
    let saved = parser.no_in;
    parser.no_in = false;
    let result = parse_expression(parser);
    parser.no_in = saved;
    result
}

// ============================================================================
// Yield & Assignment
// ============================================================================

/// Parse yield expression: yield, yield value, yield* iterable
fn parse_yield_expression(parser: &mut Parser) -> Result<Expression, ParseError> {
    let start_span = parser.current_span();
    parser.expect(Token::Yield)?;

    // yield* delegates to another iterable
    let delegate = if parser.check(&Token::Star) {
        parser.advance();
        true
    } else {
        false
    };

    let argument = if yield_argument_follows(parser) {
        Some(Box::new(parse_assignment_expression(parser)?))
    } else {
        None
    };

    if delegate && argument.is_none() {
        return Err(ParseError::invalid_syntax(
            "yield* requires an argument",
            start_span,
        ));
    }

    let span = if let Some(ref arg) = argument {
        parser.combine_spans(&start_span, arg.span())
    } else {
        start_span
    };

    Ok(Expression::Yield(YieldExpression {
        argument,
        delegate,
        span,
    }))
}

/// A bare `yield` ends at any token that cannot start an expression.
fn yield_argument_follows(parser: &Parser) -> bool {
    !matches!(
        parser.current(),
        Token::Semicolon
            | Token::RightParen
            | Token::RightBracket
            | Token::RightBrace
            | Token::Comma
            | Token::Colon
            | Token::Eof
    )
}

/// Parse an assignment expression, the level below `yield`.
fn parse_assignment_expression(parser: &mut Parser) -> Result<Expression, ParseError> {
    // Arrow functions need a lookahead because `(a, b)` only becomes a
    // parameter list when `=>` follows the closing paren.
    if let Some(expr) = try_parse_arrow_function(parser)? {
        return Ok(expr);
    }

    let left = parse_conditional_expression(parser)?;

    let operator = match parser.current() {
        Token::Equal => Some(AssignmentOperator::Assign),
        Token::PlusEqual => Some(AssignmentOperator::AddAssign),
        Token::MinusEqual => Some(AssignmentOperator::SubAssign),
        Token::StarEqual => Some(AssignmentOperator::MulAssign),
        Token::StarStarEqual => Some(AssignmentOperator::ExpAssign),
        Token::SlashEqual => Some(AssignmentOperator::DivAssign),
        Token::PercentEqual => Some(AssignmentOperator::ModAssign),
        Token::AmpEqual => Some(AssignmentOperator::AndAssign),
        Token::PipeEqual => Some(AssignmentOperator::OrAssign),
        Token::CaretEqual => Some(AssignmentOperator::XorAssign),
        Token::LessLessEqual => Some(AssignmentOperator::LeftShiftAssign),
        Token::GreaterGreaterEqual => Some(AssignmentOperator::RightShiftAssign),
        Token::GreaterGreaterGreaterEqual => Some(AssignmentOperator::UnsignedRightShiftAssign),
        _ => None,
    };

    if let Some(operator) = operator {
        // Only identifiers, members and index expressions are assignable
        if !matches!(
            left,
            Expression::Identifier(_) | Expression::Member(_) | Expression::Index(_)
        ) {
            return Err(ParseError::invalid_syntax(
                "invalid assignment target",
                *left.span(),
            ));
        }

        parser.advance();

        // Assignment is right-associative
        let right = parse_assignment_expression(parser)?;
        let span = parser.combine_spans(left.span(), right.span());

        return Ok(Expression::Assignment(AssignmentExpression {
            operator,
            left: Box::new(left),
            right: Box::new(right),
            span,
        }));
    }

    Ok(left)
}

// ============================================================================
// Arrow Functions
// ============================================================================

/// Recognize an arrow function before committing to expression parsing.
///
/// Returns `Ok(None)` without consuming anything when the tokens cannot
/// begin an arrow function.
fn try_parse_arrow_function(parser: &mut Parser) -> Result<Option<Expression>, ParseError> {
    // x => body
    if matches!(parser.current(), Token::Identifier(_))
        && matches!(parser.peek(), Some(Token::Arrow))
    {
        return Ok(Some(parse_arrow_function(parser, false)?));
    }

    // async x => body
    if parser.check(&Token::Async)
        && matches!(parser.peek(), Some(Token::Identifier(_)))
        && matches!(parser.peek_at(2), Some(Token::Arrow))
    {
        parser.advance(); // consume 'async'
        return Ok(Some(parse_arrow_function(parser, true)?));
    }

    // (params) => body
    if parser.check(&Token::LeftParen) && arrow_follows_paren_group(parser, 0) {
        return Ok(Some(parse_arrow_function(parser, false)?));
    }

    // async (params) => body
    if parser.check(&Token::Async)
        && matches!(parser.peek(), Some(Token::LeftParen))
        && arrow_follows_paren_group(parser, 1)
    {
        parser.advance(); // consume 'async'
        return Ok(Some(parse_arrow_function(parser, true)?));
    }

    Ok(None)
}

/// Scan over the balanced paren group starting `offset` tokens ahead and
/// report whether `=>` follows it. Template substitutions are nested
/// inside single template tokens, so bracket counting cannot be fooled by
/// them.
fn arrow_follows_paren_group(parser: &Parser, offset: usize) -> bool {
    let mut depth = 0usize;
    let mut i = offset;
    loop {
        match parser.peek_at(i) {
            Some(Token::LeftParen) | Some(Token::LeftBracket) | Some(Token::LeftBrace) => {
                depth += 1;
            }
            Some(Token::RightParen) | Some(Token::RightBracket) | Some(Token::RightBrace) => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return matches!(parser.peek_at(i + 1), Some(Token::Arrow));
                }
            }
            Some(Token::Eof) | None => return false,
            _ => {}
        }
        i += 1;
    }
}

/// Parse an arrow function. The current token is either the single
/// identifier parameter or the `(` of a parameter list; a leading `async`
/// has already been consumed.
fn parse_arrow_function(parser: &mut Parser, is_async: bool) -> Result<Expression, ParseError> {
    let start_span = parser.current_span();

    let params = if let Token::Identifier(name) = parser.current() {
        let name = *name;
        let id_span = parser.current_span();
        parser.advance();
        vec![Parameter {
            pattern: Pattern::Identifier(Identifier::new(name, id_span)),
            default_value: None,
            span: id_span,
        }]
    } else {
        parser.expect(Token::LeftParen)?;
        let params = super::stmt::parse_parameter_list(parser)?;
        parser.expect(Token::RightParen)?;
        params
    };

    parser.expect(Token::Arrow)?;

    let body = if parser.check(&Token::LeftBrace) {
        parser.advance();
        ArrowBody::Block(super::stmt::parse_block_statement(parser)?)
    } else {
        ArrowBody::Expression(Box::new(parse_assignment_expression(parser)?))
    };

    let end_span = match &body {
        ArrowBody::Block(block) => block.span,
        ArrowBody::Expression(expr) => *expr.span(),
    };
    let span = parser.combine_spans(&start_span, &end_span);

    Ok(Expression::Arrow(ArrowFunction {
        params,
        body,
        is_async,
        span,
    }))
}

// ============================================================================
// Conditional & Binary Operators
// ============================================================================

/// Parse conditional (ternary) expression: test ? consequent : alternate
fn parse_conditional_expression(parser: &mut Parser) -> Result<Expression, ParseError> {
    let test = parse_binary_expression(parser, Precedence::NullCoalescing)?;

    if parser.check(&Token::Question) {
        parser.advance();
        let consequent = parse_assignment_expression(parser)?;
        parser.expect(Token::Colon)?;
        let alternate = parse_assignment_expression(parser)?;
        let span = parser.combine_spans(test.span(), alternate.span());

        return Ok(Expression::Conditional(ConditionalExpression {
            test: Box::new(test),
            consequent: Box::new(consequent),
            alternate: Box::new(alternate),
            span,
        }));
    }

    Ok(test)
}

/// Precedence-climbing loop over binary and logical operators.
fn parse_binary_expression(
    parser: &mut Parser,
    min_precedence: Precedence,
) -> Result<Expression, ParseError> {
    let mut left = parse_unary_expression(parser)?;
    let mut guard = super::guards::LoopGuard::new("binary_operators");

    loop {
        guard.check()?;

        if parser.no_in && matches!(parser.current(), Token::In) {
            break;
        }

        let token = parser.current().clone();
        let precedence = get_precedence(&token);
        if precedence < min_precedence || precedence < Precedence::NullCoalescing {
            break;
        }

        parser.advance();

        // Left-associative operators climb past their own level,
        // right-associative ones recurse at it.
        let next_min = if is_right_associative(&token) {
            precedence
        } else {
            precedence.next_tighter()
        };
        let right = parse_binary_expression(parser, next_min)?;

        let span = parser.combine_spans(left.span(), right.span());
        left = match token {
            Token::AmpAmp => Expression::Logical(LogicalExpression {
                operator: LogicalOperator::And,
                left: Box::new(left),
                right: Box::new(right),
                span,
            }),
            Token::PipePipe => Expression::Logical(LogicalExpression {
                operator: LogicalOperator::Or,
                left: Box::new(left),
                right: Box::new(right),
                span,
            }),
            Token::QuestionQuestion => Expression::Logical(LogicalExpression {
                operator: LogicalOperator::NullishCoalescing,
                left: Box::new(left),
                right: Box::new(right),
                span,
            }),
            _ => Expression::Binary(BinaryExpression {
                operator: binary_operator(&token),
                left: Box::new(left),
                right: Box::new(right),
                span,
            }),
        };
    }

    Ok(left)
}

fn binary_operator(token: &Token) -> BinaryOperator {
    match token {
        Token::Plus => BinaryOperator::Add,
        Token::Minus => BinaryOperator::Subtract,
        Token::Star => BinaryOperator::Multiply,
        Token::Slash => BinaryOperator::Divide,
        Token::Percent => BinaryOperator::Modulo,
        Token::StarStar => BinaryOperator::Exponent,
        Token::EqualEqual => BinaryOperator::Equal,
        Token::NotEqual => BinaryOperator::NotEqual,
        Token::EqualEqualEqual => BinaryOperator::StrictEqual,
        Token::NotEqualEqual => BinaryOperator::StrictNotEqual,
        Token::Less => BinaryOperator::LessThan,
        Token::LessEqual => BinaryOperator::LessEqual,
        Token::Greater => BinaryOperator::GreaterThan,
        Token::GreaterEqual => BinaryOperator::GreaterEqual,
        Token::Amp => BinaryOperator::BitwiseAnd,
        Token::Pipe => BinaryOperator::BitwiseOr,
        Token::Caret => BinaryOperator::BitwiseXor,
        Token::LessLess => BinaryOperator::LeftShift,
        Token::GreaterGreater => BinaryOperator::RightShift,
        Token::GreaterGreaterGreater => BinaryOperator::UnsignedRightShift,
        Token::In => BinaryOperator::In,
        Token::Instanceof => BinaryOperator::Instanceof,
        _ => unreachable!("not a binary operator token"),
    }
}

// ============================================================================
// Unary & Postfix
// ============================================================================

/// Parse prefix unary operators, which nest: `!!x`, `typeof -y`.
fn parse_unary_expression(parser: &mut Parser) -> Result<Expression, ParseError> {
    // Unary chains recurse directly, so they count against the same
    // depth limit as everything else
    parser.depth += 1;
    if parser.depth > super::guards::MAX_PARSE_DEPTH {
        parser.depth -= 1;
        return Err(ParseError::parser_limit_exceeded(
            format!("Maximum nesting depth ({}) exceeded in unary expression", super::guards::MAX_PARSE_DEPTH),
            parser.current_span(),
        ));
    }

    let result = parse_unary_expression_inner(parser);

    parser.depth -= 1;
    result
}

fn parse_unary_expression_inner(parser: &mut Parser) -> Result<Expression, ParseError> {
    let start_span = parser.current_span();

    let operator = match parser.current() {
        Token::Bang => Some(UnaryOperator::Not),
        Token::Tilde => Some(UnaryOperator::BitwiseNot),
        Token::Plus => Some(UnaryOperator::Plus),
        Token::Minus => Some(UnaryOperator::Minus),
        Token::Typeof => Some(UnaryOperator::Typeof),
        Token::Void => Some(UnaryOperator::Void),
        Token::Delete => Some(UnaryOperator::Delete),
        Token::PlusPlus => Some(UnaryOperator::PrefixIncrement),
        Token::MinusMinus => Some(UnaryOperator::PrefixDecrement),
        _ => None,
    };

    if let Some(operator) = operator {
        parser.advance();
        let operand = parse_unary_expression(parser)?;
        let span = parser.combine_spans(&start_span, operand.span());
        return Ok(Expression::Unary(UnaryExpression {
            operator,
            operand: Box::new(operand),
            span,
        }));
    }

    if parser.check(&Token::Await) {
        parser.advance();
        let argument = parse_unary_expression(parser)?;
        let span = parser.combine_spans(&start_span, argument.span());
        return Ok(Expression::Await(AwaitExpression {
            argument: Box::new(argument),
            span,
        }));
    }

    parse_postfix_expression(parser)
}

/// Parse postfix `++`/`--`, which bind to the completed call chain.
fn parse_postfix_expression(parser: &mut Parser) -> Result<Expression, ParseError> {
    let expr = parse_call_expression(parser)?;

    let operator = match parser.current() {
        Token::PlusPlus => Some(UnaryOperator::PostfixIncrement),
        Token::MinusMinus => Some(UnaryOperator::PostfixDecrement),
        _ => None,
    };

    if let Some(operator) = operator {
        let end_span = parser.current_span();
        parser.advance();
        let span = parser.combine_spans(expr.span(), &end_span);
        return Ok(Expression::Unary(UnaryExpression {
            operator,
            operand: Box::new(expr),
            span,
        }));
    }

    Ok(expr)
}

// ============================================================================
// Calls, Members & New
// ============================================================================

/// Parse a member/index/call chain: `a.b[c](d).e`
fn parse_call_expression(parser: &mut Parser) -> Result<Expression, ParseError> {
    let mut expr = if parser.check(&Token::New) {
        parse_new_expression(parser)?
    } else {
        parse_primary_expression(parser)?
    };

    let mut guard = super::guards::LoopGuard::new("call_chain");

    loop {
        guard.check()?;

        match parser.current() {
            Token::Dot => {
                parser.advance();
                let property = parse_property_name(parser)?;
                let span = parser.combine_spans(expr.span(), &property.span);
                expr = Expression::Member(MemberExpression {
                    object: Box::new(expr),
                    property,
                    span,
                });
            }
            Token::LeftBracket => {
                parser.advance();
                let index = parse_expression_allowing_in(parser)?;
                let end_span = parser.current_span();
                parser.expect(Token::RightBracket)?;
                let span = parser.combine_spans(expr.span(), &end_span);
                expr = Expression::Index(IndexExpression {
                    object: Box::new(expr),
                    index: Box::new(index),
                    span,
                });
            }
            Token::LeftParen => {
                parser.advance();
                let arguments = parse_arguments(parser)?;
                let end_span = parser.current_span();
                parser.expect(Token::RightParen)?;
                let span = parser.combine_spans(expr.span(), &end_span);
                expr = Expression::Call(CallExpression {
                    callee: Box::new(expr),
                    arguments,
                    span,
                });
            }
            Token::TemplateLiteral(_) => {
                return Err(ParseError::unsupported(
                    "tagged template literals",
                    parser.current_span(),
                ));
            }
            _ => break,
        }
    }

    Ok(expr)
}

/// Parse the name after `.`. Keywords are valid member names in
/// JavaScript (`promise.finally`, `results.in`), so any word token is
/// accepted and interned by its lexeme.
fn parse_property_name(parser: &mut Parser) -> Result<Identifier, ParseError> {
    let span = parser.current_span();

    if let Token::Identifier(name) = parser.current() {
        let name = *name;
        parser.advance();
        return Ok(Identifier::new(name, span));
    }

    if parser.current().is_keyword() {
        let text = parser.current().to_string();
        let symbol = parser.interner.intern(&text);
        parser.advance();
        return Ok(Identifier::new(symbol, span));
    }

    Err(parser.unexpected_token(&[Token::Identifier(Symbol::dummy())]))
}

/// Parse new expression: new Map(), new ns.Thing(1), new Date
fn parse_new_expression(parser: &mut Parser) -> Result<Expression, ParseError> {
    let start_span = parser.current_span();
    parser.expect(Token::New)?;

    if parser.check(&Token::Dot) {
        return Err(ParseError::unsupported(
            "new.target expressions",
            parser.current_span(),
        ));
    }

    // The callee binds member accesses but not call parens, so
    // `new a.b.C()` constructs `a.b.C`.
    let mut callee = if parser.check(&Token::New) {
        parse_new_expression(parser)?
    } else {
        parse_primary_expression(parser)?
    };

    let mut guard = super::guards::LoopGuard::new("new_callee_members");
    loop {
        guard.check()?;
        match parser.current() {
            Token::Dot => {
                parser.advance();
                let property = parse_property_name(parser)?;
                let span = parser.combine_spans(callee.span(), &property.span);
                callee = Expression::Member(MemberExpression {
                    object: Box::new(callee),
                    property,
                    span,
                });
            }
            Token::LeftBracket => {
                parser.advance();
                let index = parse_expression_allowing_in(parser)?;
                let end_span = parser.current_span();
                parser.expect(Token::RightBracket)?;
                let span = parser.combine_spans(callee.span(), &end_span);
                callee = Expression::Index(IndexExpression {
                    object: Box::new(callee),
                    index: Box::new(index),
                    span,
                });
            }
            _ => break,
        }
    }

    // Argument parens are optional: `new Date` constructs with none
    let (arguments, end_span) = if parser.check(&Token::LeftParen) {
        parser.advance();
        let arguments = parse_arguments(parser)?;
        let end_span = parser.current_span();
        parser.expect(Token::RightParen)?;
        (arguments, end_span)
    } else {
        (Vec::new(), *callee.span())
    };

    let span = parser.combine_spans(&start_span, &end_span);

    Ok(Expression::New(NewExpression {
        callee: Box::new(callee),
        arguments,
        span,
    }))
}

/// Parse call arguments up to the closing paren.
fn parse_arguments(parser: &mut Parser) -> Result<Vec<Argument>, ParseError> {
    let mut arguments = Vec::new();
    let mut guard = super::guards::LoopGuard::new("call_arguments");

    while !parser.check(&Token::RightParen) && !parser.at_eof() {
        guard.check()?;

        let argument = if parser.check(&Token::DotDotDot) {
            parser.advance();
            Argument::Spread(parse_expression_allowing_in(parser)?)
        } else {
            Argument::Expression(parse_expression_allowing_in(parser)?)
        };
        arguments.push(argument);

        if !parser.check(&Token::RightParen) {
            parser.expect(Token::Comma)?;
        }
    }

    Ok(arguments)
}

// ============================================================================
// Primary Expressions
// ============================================================================

fn parse_primary_expression(parser: &mut Parser) -> Result<Expression, ParseError> {
    let span = parser.current_span();

    match parser.current() {
        Token::Number(value) => {
            let value = *value;
            parser.advance();
            Ok(Expression::NumberLiteral(NumberLiteral { value, span }))
        }
        Token::BigInt(digits) => {
            let digits = *digits;
            parser.advance();
            Ok(Expression::BigIntLiteral(BigIntLiteral { digits, span }))
        }
        Token::String(value) => {
            let value = *value;
            parser.advance();
            Ok(Expression::StringLiteral(StringLiteral { value, span }))
        }
        Token::Regex { pattern, flags } => {
            let pattern = *pattern;
            let flags = *flags;
            parser.advance();
            Ok(Expression::RegexLiteral(RegexLiteral {
                pattern,
                flags,
                span,
            }))
        }
        Token::True => {
            parser.advance();
            Ok(Expression::BooleanLiteral(BooleanLiteral { value: true, span }))
        }
        Token::False => {
            parser.advance();
            Ok(Expression::BooleanLiteral(BooleanLiteral {
                value: false,
                span,
            }))
        }
        Token::Null => {
            parser.advance();
            Ok(Expression::NullLiteral(span))
        }
        Token::This => {
            parser.advance();
            Ok(Expression::This(span))
        }
        Token::Identifier(name) => {
            let name = *name;
            parser.advance();
            Ok(Expression::Identifier(Identifier::new(name, span)))
        }
        Token::TemplateLiteral(_) => parse_template_literal(parser),
        Token::LeftParen => {
            parser.advance();
            if parser.check(&Token::RightParen) {
                return Err(ParseError::invalid_syntax(
                    "parenthesized expression cannot be empty",
                    parser.current_span(),
                ));
            }
            let expr = parse_expression_allowing_in(parser)?;
            parser.expect(Token::RightParen)?;
            Ok(expr)
        }
        Token::LeftBracket => parse_array_literal(parser),
        Token::LeftBrace => parse_object_literal(parser),
        Token::Function => parse_function_expression(parser),
        Token::Async => {
            if let Some(Token::Function) = parser.peek() {
                parse_function_expression(parser)
            } else {
                Err(ParseError::invalid_syntax(
                    format!("expected an expression, found {}", parser.current()),
                    span,
                ))
            }
        }
        Token::Class => Err(ParseError::unsupported("class expressions", span)),
        Token::Super => Err(ParseError::unsupported("super expressions", span)),
        Token::Import => Err(ParseError::unsupported("dynamic import expressions", span)),
        _ => Err(ParseError::invalid_syntax(
            format!("expected an expression, found {}", parser.current()),
            span,
        )),
    }
}

/// Parse a template literal token into its AST form, sub-parsing each
/// substitution's token stream.
fn parse_template_literal(parser: &mut Parser) -> Result<Expression, ParseError> {
    let span = parser.current_span();
    let token = parser.advance();
    let token_parts = match token {
        Token::TemplateLiteral(parts) => parts,
        _ => unreachable!("caller checked for a template literal"),
    };

    let mut parts = Vec::with_capacity(token_parts.len());
    for part in token_parts {
        match part {
            crate::parser::token::TemplatePart::Chunk(text) => {
                parts.push(TemplatePart::String(text));
            }
            crate::parser::token::TemplatePart::Expression(tokens) => {
                // The interner travels into the fragment parser and back
                // so substitution identifiers share symbols with the
                // surrounding module.
                let interner = std::mem::take(&mut parser.interner);
                let mut sub = Parser::fragment(tokens, interner);
                sub.depth = parser.depth;

                let result = parse_expression(&mut sub);
                let done = sub.at_eof();
                let end_span = sub.current_span();
                parser.interner = sub.interner;

                let expr = result?;
                if !done {
                    return Err(ParseError::invalid_syntax(
                        "unexpected tokens after template substitution expression",
                        end_span,
                    ));
                }
                parts.push(TemplatePart::Expression(Box::new(expr)));
            }
        }
    }

    Ok(Expression::TemplateLiteral(TemplateLiteral { parts, span }))
}

/// Parse array literal: [1, 2], [a, ...rest], holes as in [1, , 3]
fn parse_array_literal(parser: &mut Parser) -> Result<Expression, ParseError> {
    let start_span = parser.current_span();
    parser.expect(Token::LeftBracket)?;

    let mut elements = Vec::new();
    let mut guard = super::guards::LoopGuard::new("array_elements");

    while !parser.check(&Token::RightBracket) && !parser.at_eof() {
        guard.check()?;

        // A comma with no element before it is a hole
        if parser.check(&Token::Comma) {
            parser.advance();
            elements.push(None);
            continue;
        }

        let element = if parser.check(&Token::DotDotDot) {
            parser.advance();
            ArrayElement::Spread(parse_expression_allowing_in(parser)?)
        } else {
            ArrayElement::Expression(parse_expression_allowing_in(parser)?)
        };
        elements.push(Some(element));

        if !parser.check(&Token::RightBracket) {
            parser.expect(Token::Comma)?;
        }
    }

    let end_span = parser.current_span();
    parser.expect(Token::RightBracket)?;
    let span = parser.combine_spans(&start_span, &end_span);

    Ok(Expression::Array(ArrayExpression { elements, span }))
}

/// Parse object literal: { x: 1, "y": 2, [k]: 3, shorthand, ...rest }
fn parse_object_literal(parser: &mut Parser) -> Result<Expression, ParseError> {
    let start_span = parser.current_span();
    parser.expect(Token::LeftBrace)?;

    let mut properties = Vec::new();
    let mut guard = super::guards::LoopGuard::new("object_properties");

    while !parser.check(&Token::RightBrace) && !parser.at_eof() {
        guard.check()?;

        if parser.check(&Token::DotDotDot) {
            let spread_start = parser.current_span();
            parser.advance();
            let argument = parse_expression_allowing_in(parser)?;
            let span = parser.combine_spans(&spread_start, argument.span());
            properties.push(ObjectProperty::Spread(SpreadProperty { argument, span }));
        } else {
            properties.push(ObjectProperty::Property(parse_object_property(parser)?));
        }

        if !parser.check(&Token::RightBrace) {
            parser.expect(Token::Comma)?;
        }
    }

    let end_span = parser.current_span();
    parser.expect(Token::RightBrace)?;
    let span = parser.combine_spans(&start_span, &end_span);

    Ok(Expression::Object(ObjectExpression { properties, span }))
}

/// Parse one data property of an object literal.
fn parse_object_property(parser: &mut Parser) -> Result<Property, ParseError> {
    let key_start = parser.current_span();
    let key = parse_property_key(parser)?;

    // `foo() {}` would start a method body here
    if parser.check(&Token::LeftParen) {
        return Err(ParseError::unsupported(
            "object literal methods",
            parser.current_span(),
        ));
    }

    // `get foo() {}` / `set foo(v) {}`
    if let PropertyKey::Identifier(ref id) = key {
        let text = parser.interner.resolve(id.name);
        if (text == "get" || text == "set")
            && !parser.check(&Token::Colon)
            && !parser.check(&Token::Comma)
            && !parser.check(&Token::RightBrace)
        {
            return Err(ParseError::unsupported(
                "object literal accessors",
                parser.current_span(),
            ));
        }
    }

    if parser.check(&Token::Colon) {
        parser.advance();
        let value = parse_expression_allowing_in(parser)?;
        let span = parser.combine_spans(&key_start, value.span());
        return Ok(Property { key, value, span });
    }

    // Shorthand { name } uses the identifier as both key and value
    if let PropertyKey::Identifier(ref id) = key {
        if parser.check(&Token::Comma) || parser.check(&Token::RightBrace) {
            let value = Expression::Identifier(id.clone());
            return Ok(Property {
                key,
                value,
                span: key_start,
            });
        }
    }

    Err(parser.unexpected_token(&[Token::Colon]))
}

/// Parse a property key: identifier, keyword, string, number or computed.
fn parse_property_key(parser: &mut Parser) -> Result<PropertyKey, ParseError> {
    let span = parser.current_span();

    match parser.current() {
        Token::Identifier(name) => {
            let name = *name;
            parser.advance();
            Ok(PropertyKey::Identifier(Identifier::new(name, span)))
        }
        Token::String(value) => {
            let value = *value;
            parser.advance();
            Ok(PropertyKey::StringLiteral(StringLiteral { value, span }))
        }
        Token::Number(value) => {
            let value = *value;
            parser.advance();
            Ok(PropertyKey::NumberLiteral(NumberLiteral { value, span }))
        }
        Token::LeftBracket => {
            parser.advance();
            let expr = parse_expression_allowing_in(parser)?;
            parser.expect(Token::RightBracket)?;
            Ok(PropertyKey::Computed(expr))
        }
        token if token.is_keyword() => {
            // Keywords are valid property names: { new: 1, for: 2 }
            let text = token.to_string();
            let symbol = parser.interner.intern(&text);
            parser.advance();
            Ok(PropertyKey::Identifier(Identifier::new(symbol, span)))
        }
        _ => Err(parser.unexpected_token(&[Token::Identifier(Symbol::dummy())])),
    }
}

/// Parse function expression: function f() { ... } or function () { ... }
fn parse_function_expression(parser: &mut Parser) -> Result<Expression, ParseError> {
    let start_span = parser.current_span();

    let is_async = if parser.check(&Token::Async) {
        parser.advance();
        true
    } else {
        false
    };

    parser.expect(Token::Function)?;

    let is_generator = if parser.check(&Token::Star) {
        parser.advance();
        true
    } else {
        false
    };

    // Optional name
    let name = if let Token::Identifier(name) = parser.current() {
        let name = *name;
        let name_span = parser.current_span();
        parser.advance();
        Some(Identifier::new(name, name_span))
    } else {
        None
    };

    parser.expect(Token::LeftParen)?;
    let params = super::stmt::parse_parameter_list(parser)?;
    parser.expect(Token::RightParen)?;

    parser.expect(Token::LeftBrace)?;
    let body = super::stmt::parse_block_statement(parser)?;

    let span = parser.combine_spans(&start_span, &body.span);

    Ok(Expression::Function(FunctionExpression {
        name,
        params,
        body,
        is_generator,
        is_async,
        span,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::interner::Interner;
    use crate::parser::parser::ParseErrorKind;

    fn parse_expr(source: &str) -> Expression {
        let (expr, _) = parse_expr_with_interner(source);
        expr
    }

    fn parse_expr_with_interner(source: &str) -> (Expression, Interner) {
        let parser = Parser::new(source).unwrap();
        let (module, interner) = parser.parse().unwrap();
        let mut statements = module.statements;
        assert_eq!(statements.len(), 1, "expected a single statement");
        match statements.pop() {
            Some(Statement::Expression(stmt)) => (stmt.expression, interner),
            other => panic!("expected expression statement, got {:?}", other),
        }
    }

    fn parse_err(source: &str) -> ParseError {
        let parser = Parser::new(source).unwrap();
        parser.parse().unwrap_err()
    }

    #[test]
    fn test_multiplication_binds_tighter_than_addition() {
        match parse_expr("1 + 2 * 3") {
            Expression::Binary(add) => {
                assert_eq!(add.operator, BinaryOperator::Add);
                match *add.right {
                    Expression::Binary(mul) => assert_eq!(mul.operator, BinaryOperator::Multiply),
                    other => panic!("expected multiplication on the right, got {:?}", other),
                }
            }
            other => panic!("expected binary expression, got {:?}", other),
        }
    }

    #[test]
    fn test_exponent_is_right_associative() {
        match parse_expr("2 ** 3 ** 2") {
            Expression::Binary(outer) => {
                assert_eq!(outer.operator, BinaryOperator::Exponent);
                assert!(matches!(*outer.left, Expression::NumberLiteral(_)));
                assert!(matches!(*outer.right, Expression::Binary(_)));
            }
            other => panic!("expected binary expression, got {:?}", other),
        }
    }

    #[test]
    fn test_logical_operators_layer() {
        match parse_expr("a && b || c") {
            Expression::Logical(or) => {
                assert_eq!(or.operator, LogicalOperator::Or);
                match *or.left {
                    Expression::Logical(and) => assert_eq!(and.operator, LogicalOperator::And),
                    other => panic!("expected && on the left, got {:?}", other),
                }
            }
            other => panic!("expected logical expression, got {:?}", other),
        }

        match parse_expr("value ?? fallback") {
            Expression::Logical(nullish) => {
                assert_eq!(nullish.operator, LogicalOperator::NullishCoalescing)
            }
            other => panic!("expected logical expression, got {:?}", other),
        }
    }

    #[test]
    fn test_conditional_nests_to_the_right() {
        match parse_expr("a ? b : c ? d : e") {
            Expression::Conditional(cond) => {
                assert!(matches!(*cond.alternate, Expression::Conditional(_)));
            }
            other => panic!("expected conditional, got {:?}", other),
        }
    }

    #[test]
    fn test_assignment_is_right_associative() {
        match parse_expr("a = b = 1") {
            Expression::Assignment(outer) => {
                assert_eq!(outer.operator, AssignmentOperator::Assign);
                assert!(matches!(*outer.right, Expression::Assignment(_)));
            }
            other => panic!("expected assignment, got {:?}", other),
        }
    }

    #[test]
    fn test_compound_assignment() {
        match parse_expr("x **= 2") {
            Expression::Assignment(assign) => {
                assert_eq!(assign.operator, AssignmentOperator::ExpAssign)
            }
            other => panic!("expected assignment, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_assignment_target() {
        let err = parse_err("1 = 2;");
        assert!(matches!(err.kind, ParseErrorKind::InvalidSyntax { .. }));
    }

    #[test]
    fn test_unary_and_postfix() {
        assert!(matches!(parse_expr("!ready"), Expression::Unary(_)));
        match parse_expr("typeof x") {
            Expression::Unary(unary) => assert_eq!(unary.operator, UnaryOperator::Typeof),
            other => panic!("expected unary expression, got {:?}", other),
        }
        match parse_expr("counter++") {
            Expression::Unary(unary) => {
                assert_eq!(unary.operator, UnaryOperator::PostfixIncrement)
            }
            other => panic!("expected unary expression, got {:?}", other),
        }
        match parse_expr("--counter") {
            Expression::Unary(unary) => {
                assert_eq!(unary.operator, UnaryOperator::PrefixDecrement)
            }
            other => panic!("expected unary expression, got {:?}", other),
        }
    }

    #[test]
    fn test_member_chain() {
        match parse_expr("a.b.c") {
            Expression::Member(outer) => {
                assert!(matches!(*outer.object, Expression::Member(_)));
            }
            other => panic!("expected member expression, got {:?}", other),
        }
    }

    #[test]
    fn test_keyword_member_names() {
        let (expr, interner) = parse_expr_with_interner("promise.finally");
        match expr {
            Expression::Member(member) => {
                assert_eq!(interner.resolve(member.property.name), "finally");
            }
            other => panic!("expected member expression, got {:?}", other),
        }
    }

    #[test]
    fn test_index_and_call_chain() {
        match parse_expr("table[0][\"key\"](x).done") {
            Expression::Member(member) => {
                assert!(matches!(*member.object, Expression::Call(_)));
            }
            other => panic!("expected member expression, got {:?}", other),
        }
    }

    #[test]
    fn test_symbol_iterator_call_shape() {
        let (expr, interner) = parse_expr_with_interner("obj[Symbol.iterator]()");
        match expr {
            Expression::Call(call) => {
                assert!(call.arguments.is_empty());
                match *call.callee {
                    Expression::Index(index) => {
                        assert!(matches!(*index.object, Expression::Identifier(_)));
                        match *index.index {
                            Expression::Member(member) => {
                                assert_eq!(interner.resolve(member.property.name), "iterator");
                            }
                            other => panic!("expected member index, got {:?}", other),
                        }
                    }
                    other => panic!("expected index callee, got {:?}", other),
                }
            }
            other => panic!("expected call expression, got {:?}", other),
        }
    }

    #[test]
    fn test_spread_arguments() {
        match parse_expr("f(...xs, 1)") {
            Expression::Call(call) => {
                assert_eq!(call.arguments.len(), 2);
                assert!(matches!(call.arguments[0], Argument::Spread(_)));
                assert!(matches!(call.arguments[1], Argument::Expression(_)));
            }
            other => panic!("expected call expression, got {:?}", other),
        }
    }

    #[test]
    fn test_new_expressions() {
        match parse_expr("new Map(entries)") {
            Expression::New(new) => assert_eq!(new.arguments.len(), 1),
            other => panic!("expected new expression, got {:?}", other),
        }

        // Parens are optional
        match parse_expr("new Date") {
            Expression::New(new) => assert!(new.arguments.is_empty()),
            other => panic!("expected new expression, got {:?}", other),
        }

        // Member chain belongs to the callee, trailing call to the result
        match parse_expr("new ns.Thing(1).run()") {
            Expression::Call(call) => match *call.callee {
                Expression::Member(member) => {
                    assert!(matches!(*member.object, Expression::New(_)))
                }
                other => panic!("expected member callee, got {:?}", other),
            },
            other => panic!("expected call expression, got {:?}", other),
        }
    }

    #[test]
    fn test_array_literal_holes_and_spread() {
        match parse_expr("[1, , 3, ...rest]") {
            Expression::Array(array) => {
                assert_eq!(array.elements.len(), 4);
                assert!(array.elements[0].is_some());
                assert!(array.elements[1].is_none());
                assert!(matches!(array.elements[3], Some(ArrayElement::Spread(_))));
            }
            other => panic!("expected array literal, got {:?}", other),
        }
    }

    #[test]
    fn test_object_literal_key_forms() {
        let source = "({ plain: 1, \"quoted\": 2, 3: three, [computed]: 4, shorthand, ...rest })";
        match parse_expr(source) {
            Expression::Object(object) => {
                assert_eq!(object.properties.len(), 6);
                match &object.properties[0] {
                    ObjectProperty::Property(p) => {
                        assert!(matches!(p.key, PropertyKey::Identifier(_)))
                    }
                    other => panic!("expected plain property, got {:?}", other),
                }
                match &object.properties[3] {
                    ObjectProperty::Property(p) => {
                        assert!(matches!(p.key, PropertyKey::Computed(_)))
                    }
                    other => panic!("expected computed property, got {:?}", other),
                }
                match &object.properties[4] {
                    ObjectProperty::Property(p) => {
                        assert!(matches!(p.value, Expression::Identifier(_)))
                    }
                    other => panic!("expected shorthand property, got {:?}", other),
                }
                assert!(matches!(object.properties[5], ObjectProperty::Spread(_)));
            }
            other => panic!("expected object literal, got {:?}", other),
        }
    }

    #[test]
    fn test_object_literal_method_rejected() {
        let err = parse_err("({ run() {} });");
        assert!(matches!(err.kind, ParseErrorKind::UnsupportedSyntax { .. }));
    }

    #[test]
    fn test_function_expressions() {
        match parse_expr("(function (a, b) { return a; })") {
            Expression::Function(func) => {
                assert!(func.name.is_none());
                assert_eq!(func.params.len(), 2);
            }
            other => panic!("expected function expression, got {:?}", other),
        }

        match parse_expr("(function* gen() { yield 1; })") {
            Expression::Function(func) => {
                assert!(func.is_generator);
                assert!(func.name.is_some());
            }
            other => panic!("expected function expression, got {:?}", other),
        }
    }

    #[test]
    fn test_arrow_functions() {
        match parse_expr("x => x + 1") {
            Expression::Arrow(arrow) => {
                assert_eq!(arrow.params.len(), 1);
                assert!(matches!(arrow.body, ArrowBody::Expression(_)));
            }
            other => panic!("expected arrow function, got {:?}", other),
        }

        match parse_expr("(a, b = 2, ...rest) => { return a; }") {
            Expression::Arrow(arrow) => {
                assert_eq!(arrow.params.len(), 3);
                assert!(arrow.params[1].default_value.is_some());
                assert!(matches!(arrow.body, ArrowBody::Block(_)));
            }
            other => panic!("expected arrow function, got {:?}", other),
        }

        match parse_expr("async x => x") {
            Expression::Arrow(arrow) => assert!(arrow.is_async),
            other => panic!("expected arrow function, got {:?}", other),
        }

        match parse_expr("() => 0") {
            Expression::Arrow(arrow) => assert!(arrow.params.is_empty()),
            other => panic!("expected arrow function, got {:?}", other),
        }
    }

    #[test]
    fn test_parenthesized_expression_is_transparent() {
        match parse_expr("(1 + 2) * 3") {
            Expression::Binary(mul) => {
                assert_eq!(mul.operator, BinaryOperator::Multiply);
                assert!(matches!(*mul.left, Expression::Binary(_)));
            }
            other => panic!("expected binary expression, got {:?}", other),
        }
    }

    #[test]
    fn test_template_literal_parts() {
        let (expr, interner) = parse_expr_with_interner("`sum: ${a + b}!`");
        match expr {
            Expression::TemplateLiteral(template) => {
                assert_eq!(template.parts.len(), 3);
                match &template.parts[0] {
                    TemplatePart::String(text) => assert_eq!(interner.resolve(*text), "sum: "),
                    other => panic!("expected string part, got {:?}", other),
                }
                match &template.parts[1] {
                    TemplatePart::Expression(inner) => {
                        assert!(matches!(**inner, Expression::Binary(_)))
                    }
                    other => panic!("expected expression part, got {:?}", other),
                }
            }
            other => panic!("expected template literal, got {:?}", other),
        }
    }

    #[test]
    fn test_nested_template_literal() {
        match parse_expr("`outer ${`inner ${x}`}`") {
            Expression::TemplateLiteral(template) => match &template.parts[1] {
                TemplatePart::Expression(inner) => {
                    assert!(matches!(**inner, Expression::TemplateLiteral(_)))
                }
                other => panic!("expected expression part, got {:?}", other),
            },
            other => panic!("expected template literal, got {:?}", other),
        }
    }

    #[test]
    fn test_yield_forms() {
        let parser = Parser::new("function* g() { yield; yield 1; yield* xs; }").unwrap();
        let (module, _) = parser.parse().unwrap();
        let body = match &module.statements[0] {
            Statement::FunctionDecl(decl) => &decl.body,
            other => panic!("expected function declaration, got {:?}", other),
        };

        let yields: Vec<&YieldExpression> = body
            .statements
            .iter()
            .map(|stmt| match stmt {
                Statement::Expression(stmt) => match &stmt.expression {
                    Expression::Yield(y) => y,
                    other => panic!("expected yield, got {:?}", other),
                },
                other => panic!("expected expression statement, got {:?}", other),
            })
            .collect();

        assert!(yields[0].argument.is_none() && !yields[0].delegate);
        assert!(yields[1].argument.is_some() && !yields[1].delegate);
        assert!(yields[2].argument.is_some() && yields[2].delegate);
    }

    #[test]
    fn test_await_expression() {
        let parser = Parser::new("async function f() { await p; }").unwrap();
        let (module, _) = parser.parse().unwrap();
        let body = match &module.statements[0] {
            Statement::FunctionDecl(decl) => &decl.body,
            other => panic!("expected function declaration, got {:?}", other),
        };
        match &body.statements[0] {
            Statement::Expression(stmt) => {
                assert!(matches!(stmt.expression, Expression::Await(_)))
            }
            other => panic!("expected expression statement, got {:?}", other),
        }
    }

    #[test]
    fn test_regex_literal_expression() {
        let (expr, interner) = parse_expr_with_interner("/ab+c/gi");
        match expr {
            Expression::RegexLiteral(regex) => {
                assert_eq!(interner.resolve(regex.pattern), "ab+c");
                assert_eq!(interner.resolve(regex.flags), "gi");
            }
            other => panic!("expected regex literal, got {:?}", other),
        }
    }

    #[test]
    fn test_tagged_template_rejected() {
        let err = parse_err("tag`text`;");
        assert!(matches!(err.kind, ParseErrorKind::UnsupportedSyntax { .. }));
    }

    #[test]
    fn test_empty_parens_rejected() {
        let err = parse_err("();");
        assert!(matches!(err.kind, ParseErrorKind::InvalidSyntax { .. }));
    }

    #[test]
    fn test_deep_nesting_is_bounded() {
        let mut source = String::new();
        for _ in 0..300 {
            source.push('(');
        }
        source.push('1');
        for _ in 0..300 {
            source.push(')');
        }
        let err = parse_err(&source);
        assert!(matches!(err.kind, ParseErrorKind::ParserLimitExceeded { .. }));
    }
}
