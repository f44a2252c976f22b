//! Statement parsing

use super::{ParseError, Parser};
use crate::parser::ast::*;
use crate::parser::interner::Symbol;
use crate::parser::token::{Span, Token};

/// Parse a statement.
pub fn parse_statement(parser: &mut Parser) -> Result<Statement, ParseError> {
    // Check depth before entering
    parser.depth += 1;
    if parser.depth > super::guards::MAX_PARSE_DEPTH {
        parser.depth -= 1;
        return Err(ParseError::parser_limit_exceeded(
            format!("Maximum nesting depth ({}) exceeded in statement", super::guards::MAX_PARSE_DEPTH),
            parser.current_span(),
        ));
    }

    // Use inner function so `?` can be used freely while ensuring depth is always decremented
    let result = parse_statement_inner(parser);

    parser.depth -= 1;
    result
}

/// Inner statement parsing logic - allows use of `?` operator
fn parse_statement_inner(parser: &mut Parser) -> Result<Statement, ParseError> {
    match parser.current() {
        Token::Var | Token::Let | Token::Const => parse_variable_declaration(parser),
        Token::Function => parse_function_declaration(parser),

        // Distinguish between async function declaration and async expressions
        Token::Async => {
            if let Some(Token::Function) = parser.peek() {
                parse_function_declaration(parser)
            } else {
                // async arrow or a plain reference to an `async` binding
                parse_expression_statement(parser)
            }
        }

        Token::Class => Err(ParseError::unsupported("class declarations", parser.current_span())),
        Token::Import => Err(ParseError::unsupported("import declarations", parser.current_span())),
        Token::Export => Err(ParseError::unsupported("export declarations", parser.current_span())),

        Token::If => parse_if_statement(parser),
        Token::While => parse_while_statement(parser),
        Token::Do => parse_do_while_statement(parser),
        Token::For => parse_for_statement(parser),
        Token::Switch => parse_switch_statement(parser),
        Token::Try => parse_try_statement(parser),
        Token::Return => parse_return_statement(parser),
        Token::Break => parse_break_statement(parser),
        Token::Continue => parse_continue_statement(parser),
        Token::Throw => parse_throw_statement(parser),

        // At statement level `{` always opens a block, never an object
        // literal. Object literals in statement position need parens.
        Token::LeftBrace => {
            parser.advance();
            let block = parse_block_statement(parser)?;
            Ok(Statement::Block(block))
        }

        Token::Semicolon => {
            let span = parser.current_span();
            parser.advance();
            Ok(Statement::Empty(span))
        }

        _ => parse_expression_statement(parser),
    }
}

/// Parse an expression statement, rejecting labeled statements.
fn parse_expression_statement(parser: &mut Parser) -> Result<Statement, ParseError> {
    let start_span = parser.current_span();
    let expression = super::expr::parse_expression(parser)?;

    // A bare identifier followed by `:` would start a labeled statement
    if expression.is_identifier() && parser.check(&Token::Colon) {
        return Err(ParseError::unsupported("labeled statements", parser.current_span()));
    }

    // Optional semicolon
    if parser.check(&Token::Semicolon) {
        parser.advance();
    }

    let span = parser.combine_spans(&start_span, expression.span());

    Ok(Statement::Expression(ExpressionStatement { expression, span }))
}

// ============================================================================
// Variable Declarations
// ============================================================================

/// Parse variable declaration: var x; let y = 1, z = 2; const c = 3;
fn parse_variable_declaration(parser: &mut Parser) -> Result<Statement, ParseError> {
    let start_span = parser.current_span();

    let kind = match parser.current() {
        Token::Var => VariableKind::Var,
        Token::Let => VariableKind::Let,
        Token::Const => VariableKind::Const,
        _ => unreachable!(),
    };
    parser.advance();

    let first = super::pattern::parse_pattern(parser)?;
    let declarators = parse_declarators(parser, kind, first)?;

    // Optional semicolon
    if parser.check(&Token::Semicolon) {
        parser.advance();
    }

    let span = if let Some(last) = declarators.last() {
        parser.combine_spans(&start_span, &last.span)
    } else {
        start_span
    };

    Ok(Statement::VariableDecl(VariableDecl {
        kind,
        declarators,
        span,
    }))
}

/// Parse the comma-separated declarator list after the first pattern.
///
/// Initializers are required for `const` and for destructuring patterns.
fn parse_declarators(
    parser: &mut Parser,
    kind: VariableKind,
    first: Pattern,
) -> Result<Vec<Declarator>, ParseError> {
    let mut declarators = Vec::new();
    let mut pattern = first;
    let mut guard = super::guards::LoopGuard::new("variable_declarators");

    loop {
        guard.check()?;

        let initializer = if parser.check(&Token::Equal) {
            parser.advance();
            Some(super::expr::parse_expression(parser)?)
        } else {
            if kind == VariableKind::Const {
                return Err(ParseError::invalid_syntax(
                    "const declarations must have an initializer",
                    *pattern.span(),
                )
                .with_suggestion("Add an initializer: const x = value;"));
            }
            if !matches!(pattern, Pattern::Identifier(_)) {
                return Err(ParseError::invalid_syntax(
                    "destructuring declarations must have an initializer",
                    *pattern.span(),
                ));
            }
            None
        };

        let span = if let Some(ref init) = initializer {
            parser.combine_spans(pattern.span(), init.span())
        } else {
            *pattern.span()
        };

        declarators.push(Declarator {
            pattern,
            initializer,
            span,
        });

        if parser.check(&Token::Comma) {
            parser.advance();
            pattern = super::pattern::parse_pattern(parser)?;
        } else {
            break;
        }
    }

    Ok(declarators)
}

// ============================================================================
// Function Declarations
// ============================================================================

/// Parse function declaration
fn parse_function_declaration(parser: &mut Parser) -> Result<Statement, ParseError> {
    let start_span = parser.current_span();

    // Parse 'async' modifier
    let is_async = if parser.check(&Token::Async) {
        parser.advance();
        true
    } else {
        false
    };

    // Parse 'function' keyword
    parser.expect(Token::Function)?;

    // Parse generator marker
    let is_generator = if parser.check(&Token::Star) {
        parser.advance();
        true
    } else {
        false
    };

    // Parse function name
    let name = if let Token::Identifier(name) = parser.current() {
        let name_sym = *name;
        let name_span = parser.current_span();
        parser.advance();
        Identifier::new(name_sym, name_span)
    } else {
        return Err(parser.unexpected_token(&[Token::Identifier(Symbol::dummy())]));
    };

    // Parse parameters
    parser.expect(Token::LeftParen)?;
    let params = parse_parameter_list(parser)?;
    parser.expect(Token::RightParen)?;

    // Parse body
    parser.expect(Token::LeftBrace)?;
    let body = parse_block_statement(parser)?;

    let span = parser.combine_spans(&start_span, &body.span);

    Ok(Statement::FunctionDecl(FunctionDecl {
        name,
        params,
        body,
        is_generator,
        is_async,
        span,
    }))
}

/// Parse function parameters up to the closing paren.
///
/// Shared by declarations, function expressions and arrow functions.
pub fn parse_parameter_list(parser: &mut Parser) -> Result<Vec<Parameter>, ParseError> {
    let mut params = Vec::new();
    let mut guard = super::guards::LoopGuard::new("function_parameters");

    while !parser.check(&Token::RightParen) && !parser.at_eof() {
        guard.check()?;
        let start_span = parser.current_span();

        // Parse parameter pattern
        let pattern = super::pattern::parse_pattern(parser)?;

        // Optional default value (e.g., `x = 10`)
        let default_value = if parser.check(&Token::Equal) {
            parser.advance();
            Some(super::expr::parse_expression(parser)?)
        } else {
            None
        };

        let span = if let Some(ref default) = default_value {
            parser.combine_spans(&start_span, default.span())
        } else {
            parser.combine_spans(&start_span, pattern.span())
        };

        if matches!(pattern, Pattern::Rest(_)) {
            if default_value.is_some() {
                return Err(ParseError::invalid_syntax(
                    "rest parameter cannot have a default value",
                    span,
                ));
            }
            if !parser.check(&Token::RightParen) && !parser.check(&Token::Comma) {
                return Err(ParseError::invalid_syntax(
                    "rest parameter must be the last parameter",
                    span,
                ));
            }
        }

        params.push(Parameter {
            pattern,
            default_value,
            span,
        });

        if !parser.check(&Token::RightParen) {
            parser.expect(Token::Comma)?;
            if let Some(last) = params.last() {
                if matches!(last.pattern, Pattern::Rest(_)) && !parser.check(&Token::RightParen) {
                    return Err(ParseError::invalid_syntax(
                        "rest parameter must be the last parameter",
                        last.span,
                    ));
                }
            }
        }
    }

    Ok(params)
}

// ============================================================================
// Blocks
// ============================================================================

/// Parse a block statement. The caller has already consumed the `{`; the
/// closing `}` is consumed here.
pub fn parse_block_statement(parser: &mut Parser) -> Result<BlockStatement, ParseError> {
    let start_span = parser.current_span();
    let mut statements = Vec::new();
    let mut guard = super::guards::LoopGuard::new("block_statements");

    while !parser.check(&Token::RightBrace) && !parser.at_eof() {
        guard.check()?;
        let stmt = parse_statement(parser)?;
        statements.push(stmt);
    }

    let end_span = parser.current_span();
    parser.expect(Token::RightBrace)?;
    let span = parser.combine_spans(&start_span, &end_span);

    Ok(BlockStatement { statements, span })
}

// ============================================================================
// Control Flow Statements
// ============================================================================

/// Parse a block or a single statement for use as a control flow body.
/// Supports both `if (x) { ... }` and `if (x) return y;` syntax.
fn parse_block_or_statement(parser: &mut Parser) -> Result<Box<Statement>, ParseError> {
    if parser.check(&Token::LeftBrace) {
        parser.advance(); // consume '{'
        let block = parse_block_statement(parser)?;
        Ok(Box::new(Statement::Block(block)))
    } else {
        Ok(Box::new(parse_statement(parser)?))
    }
}

/// Parse if statement
fn parse_if_statement(parser: &mut Parser) -> Result<Statement, ParseError> {
    let start_span = parser.current_span();
    parser.expect(Token::If)?;

    // Parse condition (with parens)
    parser.expect(Token::LeftParen)?;
    let condition = super::expr::parse_expression(parser)?;
    parser.expect(Token::RightParen)?;

    // Parse then branch (block or single statement)
    let then_branch = parse_block_or_statement(parser)?;

    // Optional else branch
    let else_branch = if parser.check(&Token::Else) {
        parser.advance();
        if parser.check(&Token::If) {
            // else if - parse as nested if statement
            Some(Box::new(parse_if_statement(parser)?))
        } else {
            // else block or single statement
            Some(parse_block_or_statement(parser)?)
        }
    } else {
        None
    };

    let span = if let Some(ref else_b) = else_branch {
        parser.combine_spans(&start_span, else_b.span())
    } else {
        parser.combine_spans(&start_span, then_branch.span())
    };

    Ok(Statement::If(IfStatement {
        condition,
        then_branch,
        else_branch,
        span,
    }))
}

/// Parse while statement
fn parse_while_statement(parser: &mut Parser) -> Result<Statement, ParseError> {
    let start_span = parser.current_span();
    parser.expect(Token::While)?;

    // Parse condition (with parens)
    parser.expect(Token::LeftParen)?;
    let condition = super::expr::parse_expression(parser)?;
    parser.expect(Token::RightParen)?;

    // Parse body (block or single statement)
    let body = parse_block_or_statement(parser)?;

    let span = parser.combine_spans(&start_span, body.span());

    Ok(Statement::While(WhileStatement {
        condition,
        body,
        span,
    }))
}

/// Parse do-while statement: do { ... } while (condition);
fn parse_do_while_statement(parser: &mut Parser) -> Result<Statement, ParseError> {
    let start_span = parser.current_span();
    parser.expect(Token::Do)?;

    // Parse body (block or single statement)
    let body = parse_block_or_statement(parser)?;

    // Parse while keyword and condition
    parser.expect(Token::While)?;
    parser.expect(Token::LeftParen)?;
    let condition = super::expr::parse_expression(parser)?;
    let end_span = parser.current_span();
    parser.expect(Token::RightParen)?;

    // Optional semicolon
    if parser.check(&Token::Semicolon) {
        parser.advance();
    }

    let span = parser.combine_spans(&start_span, &end_span);

    Ok(Statement::DoWhile(DoWhileStatement {
        body,
        condition,
        span,
    }))
}

/// Parse for statement (classic for, for-of and for-in share a head)
fn parse_for_statement(parser: &mut Parser) -> Result<Statement, ParseError> {
    let start_span = parser.current_span();
    parser.expect(Token::For)?;

    if parser.check(&Token::Await) {
        return Err(ParseError::unsupported("for await loops", parser.current_span()));
    }

    parser.expect(Token::LeftParen)?;

    // for (; ...) - classic for loop with no init
    if parser.check(&Token::Semicolon) {
        parser.advance();
        return parse_classic_for(parser, start_span, None);
    }

    if parser.check_any(&[Token::Var, Token::Let, Token::Const]) {
        // Could be for-of, for-in, or classic for with a declaration
        let decl_start = parser.current_span();
        let kind = match parser.current() {
            Token::Var => VariableKind::Var,
            Token::Let => VariableKind::Let,
            Token::Const => VariableKind::Const,
            _ => unreachable!(),
        };
        parser.advance();

        let pattern = super::pattern::parse_pattern(parser)?;

        if parser.check(&Token::Of) {
            parser.advance();
            let left = ForOfLeft::VariableDecl(loop_head_decl(parser, kind, decl_start, pattern));
            return parse_for_of(parser, start_span, left);
        }
        if parser.check(&Token::In) {
            parser.advance();
            let left = ForOfLeft::VariableDecl(loop_head_decl(parser, kind, decl_start, pattern));
            return parse_for_in(parser, start_span, left);
        }

        // Classic for with a declaration init. The `in` operator is
        // disabled while parsing initializers so it cannot swallow the
        // head of a mistyped for-in.
        parser.no_in = true;
        let result = parse_declarators(parser, kind, pattern);
        parser.no_in = false;
        let declarators = result?;

        let span = if let Some(last) = declarators.last() {
            parser.combine_spans(&decl_start, &last.span)
        } else {
            decl_start
        };
        let decl = VariableDecl {
            kind,
            declarators,
            span,
        };

        parser.expect(Token::Semicolon)?;
        return parse_classic_for(parser, start_span, Some(ForInit::VariableDecl(decl)));
    }

    // A bare identifier directly before `of`/`in` loops over an existing
    // binding.
    if let Token::Identifier(name) = parser.current() {
        let name = *name;
        if matches!(parser.peek(), Some(Token::Of)) {
            let id_span = parser.current_span();
            parser.advance(); // identifier
            parser.advance(); // of
            let left = ForOfLeft::Pattern(Pattern::Identifier(Identifier::new(name, id_span)));
            return parse_for_of(parser, start_span, left);
        }
        if matches!(parser.peek(), Some(Token::In)) {
            let id_span = parser.current_span();
            parser.advance(); // identifier
            parser.advance(); // in
            let left = ForOfLeft::Pattern(Pattern::Identifier(Identifier::new(name, id_span)));
            return parse_for_in(parser, start_span, left);
        }
    }

    // Classic for loop with an expression init
    parser.no_in = true;
    let result = super::expr::parse_expression(parser);
    parser.no_in = false;
    let expr = result?;

    parser.expect(Token::Semicolon)?;
    parse_classic_for(parser, start_span, Some(ForInit::Expression(expr)))
}

/// Build the single-declarator declaration of a for-of/for-in head.
fn loop_head_decl(
    parser: &Parser,
    kind: VariableKind,
    decl_start: Span,
    pattern: Pattern,
) -> VariableDecl {
    let span = parser.combine_spans(&decl_start, pattern.span());
    let declarator = Declarator {
        pattern,
        initializer: None,
        span,
    };
    VariableDecl {
        kind,
        declarators: vec![declarator],
        span,
    }
}

/// Parse the rest of a classic for loop after the init part
fn parse_classic_for(
    parser: &mut Parser,
    start_span: Span,
    init: Option<ForInit>,
) -> Result<Statement, ParseError> {
    // Parse test
    let test = if parser.check(&Token::Semicolon) {
        None
    } else {
        Some(super::expr::parse_expression(parser)?)
    };
    parser.expect(Token::Semicolon)?;

    // Parse update
    let update = if parser.check(&Token::RightParen) {
        None
    } else {
        Some(super::expr::parse_expression(parser)?)
    };
    parser.expect(Token::RightParen)?;

    // Parse body (block or single statement)
    let body = parse_block_or_statement(parser)?;

    let span = parser.combine_spans(&start_span, body.span());

    Ok(Statement::For(ForStatement {
        init,
        test,
        update,
        body,
        span,
    }))
}

/// Parse the rest of a for-of loop after the 'of' keyword
fn parse_for_of(
    parser: &mut Parser,
    start_span: Span,
    left: ForOfLeft,
) -> Result<Statement, ParseError> {
    // Parse the iterable expression
    let right = super::expr::parse_expression(parser)?;
    parser.expect(Token::RightParen)?;

    // Parse body (block or single statement)
    let body = parse_block_or_statement(parser)?;

    let span = parser.combine_spans(&start_span, body.span());

    Ok(Statement::ForOf(ForOfStatement {
        left,
        right,
        body,
        span,
    }))
}

/// Parse the rest of a for-in loop after the 'in' keyword
fn parse_for_in(
    parser: &mut Parser,
    start_span: Span,
    left: ForOfLeft,
) -> Result<Statement, ParseError> {
    // Parse the object expression
    let right = super::expr::parse_expression(parser)?;
    parser.expect(Token::RightParen)?;

    // Parse body (block or single statement)
    let body = parse_block_or_statement(parser)?;

    let span = parser.combine_spans(&start_span, body.span());

    Ok(Statement::ForIn(ForInStatement {
        left,
        right,
        body,
        span,
    }))
}

// ============================================================================
// Jump Statements
// ============================================================================

/// Parse return statement
fn parse_return_statement(parser: &mut Parser) -> Result<Statement, ParseError> {
    let start_span = parser.current_span();
    parser.expect(Token::Return)?;

    // Optional return value
    let value = if parser.check(&Token::Semicolon)
        || parser.check(&Token::RightBrace)
        || parser.at_eof()
    {
        None
    } else {
        Some(super::expr::parse_expression(parser)?)
    };

    // Optional semicolon
    if parser.check(&Token::Semicolon) {
        parser.advance();
    }

    let span = if let Some(ref val) = value {
        parser.combine_spans(&start_span, val.span())
    } else {
        start_span
    };

    Ok(Statement::Return(ReturnStatement { value, span }))
}

/// Parse break statement
fn parse_break_statement(parser: &mut Parser) -> Result<Statement, ParseError> {
    let start_span = parser.current_span();
    parser.expect(Token::Break)?;

    // Optional semicolon
    if parser.check(&Token::Semicolon) {
        parser.advance();
    }

    Ok(Statement::Break(BreakStatement { span: start_span }))
}

/// Parse continue statement
fn parse_continue_statement(parser: &mut Parser) -> Result<Statement, ParseError> {
    let start_span = parser.current_span();
    parser.expect(Token::Continue)?;

    // Optional semicolon
    if parser.check(&Token::Semicolon) {
        parser.advance();
    }

    Ok(Statement::Continue(ContinueStatement { span: start_span }))
}

/// Parse throw statement
fn parse_throw_statement(parser: &mut Parser) -> Result<Statement, ParseError> {
    let start_span = parser.current_span();
    parser.expect(Token::Throw)?;

    // Required expression
    let value = super::expr::parse_expression(parser)?;

    // Optional semicolon
    if parser.check(&Token::Semicolon) {
        parser.advance();
    }

    let span = parser.combine_spans(&start_span, value.span());

    Ok(Statement::Throw(ThrowStatement { value, span }))
}

// ============================================================================
// Switch Statement
// ============================================================================

/// Parse switch statement: switch (expr) { case value: ...; default: ...; }
fn parse_switch_statement(parser: &mut Parser) -> Result<Statement, ParseError> {
    let start_span = parser.current_span();
    parser.expect(Token::Switch)?;

    // Parse discriminant expression
    parser.expect(Token::LeftParen)?;
    let discriminant = super::expr::parse_expression(parser)?;
    parser.expect(Token::RightParen)?;

    // Parse cases
    parser.expect(Token::LeftBrace)?;

    let mut cases = Vec::new();
    let mut guard = super::guards::LoopGuard::new("switch_cases");

    while !parser.check(&Token::RightBrace) && !parser.at_eof() {
        guard.check()?;

        let case_start = parser.current_span();

        let test = if parser.check(&Token::Case) {
            parser.advance();
            let test_expr = super::expr::parse_expression(parser)?;
            parser.expect(Token::Colon)?;
            Some(test_expr)
        } else if parser.check(&Token::Default) {
            parser.advance();
            parser.expect(Token::Colon)?;
            None
        } else {
            return Err(parser.unexpected_token(&[Token::Case, Token::Default]));
        };

        // Parse consequent statements until next case/default/end
        let mut consequent = Vec::new();
        let mut consequent_guard = super::guards::LoopGuard::new("switch_case_consequent");

        while !parser.check(&Token::Case)
            && !parser.check(&Token::Default)
            && !parser.check(&Token::RightBrace)
            && !parser.at_eof()
        {
            consequent_guard.check()?;
            consequent.push(parse_statement(parser)?);
        }

        let case_end = if let Some(last) = consequent.last() {
            *last.span()
        } else {
            parser.current_span()
        };

        let case_span = parser.combine_spans(&case_start, &case_end);

        cases.push(SwitchCase {
            test,
            consequent,
            span: case_span,
        });
    }

    let end_span = parser.current_span();
    parser.expect(Token::RightBrace)?;

    let span = parser.combine_spans(&start_span, &end_span);

    Ok(Statement::Switch(SwitchStatement {
        discriminant,
        cases,
        span,
    }))
}

// ============================================================================
// Try Statement
// ============================================================================

/// Parse try-catch-finally statement
fn parse_try_statement(parser: &mut Parser) -> Result<Statement, ParseError> {
    let start_span = parser.current_span();
    parser.expect(Token::Try)?;

    // Parse try block
    parser.expect(Token::LeftBrace)?;
    let body = parse_block_statement(parser)?;

    // Parse optional catch clause
    let catch_clause = if parser.check(&Token::Catch) {
        let catch_start = parser.current_span();
        parser.advance();

        // Optional catch parameter
        let param = if parser.check(&Token::LeftParen) {
            parser.advance();
            let pattern = super::pattern::parse_pattern(parser)?;
            parser.expect(Token::RightParen)?;
            Some(pattern)
        } else {
            None
        };

        // Parse catch block
        parser.expect(Token::LeftBrace)?;
        let catch_body = parse_block_statement(parser)?;

        let catch_span = parser.combine_spans(&catch_start, &catch_body.span);

        Some(CatchClause {
            param,
            body: catch_body,
            span: catch_span,
        })
    } else {
        None
    };

    // Parse optional finally clause
    let finally_clause = if parser.check(&Token::Finally) {
        parser.advance();
        parser.expect(Token::LeftBrace)?;
        Some(parse_block_statement(parser)?)
    } else {
        None
    };

    // Must have at least catch or finally
    if catch_clause.is_none() && finally_clause.is_none() {
        return Err(ParseError::invalid_syntax(
            "try statement must have a catch or finally clause",
            start_span,
        )
        .with_suggestion("Add a catch or finally clause: try { } catch (e) { }"));
    }

    let end_span = if let Some(ref fin) = finally_clause {
        fin.span
    } else if let Some(ref catch) = catch_clause {
        catch.span
    } else {
        body.span
    };

    let span = parser.combine_spans(&start_span, &end_span);

    Ok(Statement::Try(TryStatement {
        body,
        catch_clause,
        finally_clause,
        span,
    }))
}
