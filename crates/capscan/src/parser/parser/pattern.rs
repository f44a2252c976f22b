//! Pattern parsing (for destructuring and parameter bindings)

use super::{ParseError, Parser};
use crate::parser::ast::{
    ArrayPattern, Identifier, NumberLiteral, ObjectPattern, ObjectPatternProperty, Pattern,
    PatternElement, PatternKey, RestPattern, StringLiteral,
};
use crate::parser::interner::Symbol;
use crate::parser::token::Token;

/// Parse a pattern (identifier or destructuring).
pub fn parse_pattern(parser: &mut Parser) -> Result<Pattern, ParseError> {
    // Check depth before entering
    parser.depth += 1;
    if parser.depth > super::guards::MAX_PARSE_DEPTH {
        parser.depth -= 1;
        return Err(ParseError::parser_limit_exceeded(
            format!("Maximum nesting depth ({}) exceeded in pattern", super::guards::MAX_PARSE_DEPTH),
            parser.current_span(),
        ));
    }

    let start_span = parser.current_span();

    let result = match parser.current() {
        // Rest pattern: ...args (for function parameters)
        Token::DotDotDot => {
            parser.advance();
            let argument = parse_pattern(parser)?;
            let span = parser.combine_spans(&start_span, argument.span());
            Ok(Pattern::Rest(RestPattern {
                argument: Box::new(argument),
                span,
            }))
        }

        // Array destructuring: [a, b, c], [x, ...rest], [y = 10]
        Token::LeftBracket => parse_array_pattern(parser),

        // Object destructuring: { x, y }, { x: newX, y = 0 }, { a, ...rest }
        Token::LeftBrace => parse_object_pattern(parser),

        // Simple identifier: x
        Token::Identifier(name) => {
            let name = *name;
            parser.advance();
            Ok(Pattern::Identifier(Identifier::new(name, start_span)))
        }

        _ => Err(parser.unexpected_token(&[
            Token::Identifier(Symbol::dummy()),
            Token::LeftBracket,
            Token::LeftBrace,
            Token::DotDotDot,
        ])),
    };

    parser.depth -= 1;
    result
}

/// Parse array destructuring pattern: [a, b], [x, , z], [first, ...rest], [y = 10]
fn parse_array_pattern(parser: &mut Parser) -> Result<Pattern, ParseError> {
    let start_span = parser.current_span();
    parser.expect(Token::LeftBracket)?;

    let mut elements = Vec::new();
    let mut rest = None;
    let mut guard = super::guards::LoopGuard::new("array_pattern_elements");

    while !parser.check(&Token::RightBracket) && !parser.at_eof() {
        guard.check()?;

        // Check for hole: [a, , c]
        if parser.check(&Token::Comma) {
            elements.push(None);
            parser.advance();
            continue;
        }

        // Check for rest element: ...rest
        if parser.check(&Token::DotDotDot) {
            parser.advance();
            rest = Some(Box::new(parse_pattern(parser)?));
            // Rest must be last element
            if parser.check(&Token::Comma) {
                parser.advance();
                if !parser.check(&Token::RightBracket) {
                    return Err(ParseError::invalid_syntax(
                        "Rest element must be last in array pattern",
                        parser.current_span(),
                    ));
                }
            }
            break;
        }

        // Parse pattern element
        let elem_start = parser.current_span();
        let pattern = parse_pattern(parser)?;

        // Check for default value: pattern = expr
        let default = if parser.check(&Token::Equal) {
            parser.advance();
            Some(super::expr::parse_expression(parser)?)
        } else {
            None
        };

        let elem_span = parser.combine_spans(&elem_start, &parser.current_span());
        elements.push(Some(PatternElement {
            pattern,
            default,
            span: elem_span,
        }));

        // Optional comma
        if parser.check(&Token::Comma) {
            parser.advance();
        } else if !parser.check(&Token::RightBracket) {
            return Err(parser.unexpected_token(&[Token::Comma, Token::RightBracket]));
        }
    }

    let end_span = parser.current_span();
    parser.expect(Token::RightBracket)?;
    let span = parser.combine_spans(&start_span, &end_span);

    Ok(Pattern::Array(ArrayPattern {
        elements,
        rest,
        span,
    }))
}

/// Parse object destructuring pattern: { x, y }, { x: newX, y = 0 }, { a, ...rest }
fn parse_object_pattern(parser: &mut Parser) -> Result<Pattern, ParseError> {
    let start_span = parser.current_span();
    parser.expect(Token::LeftBrace)?;

    let mut properties = Vec::new();
    let mut rest = None;
    let mut guard = super::guards::LoopGuard::new("object_pattern_properties");

    while !parser.check(&Token::RightBrace) && !parser.at_eof() {
        guard.check()?;

        let prop_start = parser.current_span();

        // Check for rest properties: ...rest
        if parser.check(&Token::DotDotDot) {
            parser.advance();
            if let Token::Identifier(name) = parser.current() {
                let name = *name;
                rest = Some(Identifier::new(name, parser.current_span()));
                parser.advance();

                // Rest must be last property
                if parser.check(&Token::Comma) {
                    parser.advance();
                    if !parser.check(&Token::RightBrace) {
                        return Err(ParseError::invalid_syntax(
                            "Rest element must be last in object pattern",
                            parser.current_span(),
                        ));
                    }
                }
                break;
            } else {
                return Err(parser.unexpected_token(&[Token::Identifier(Symbol::dummy())]));
            }
        }

        let key = parse_pattern_key(parser)?;

        // Check for renaming: { x: y }
        let value = if parser.check(&Token::Colon) {
            parser.advance();
            parse_pattern(parser)?
        } else if let PatternKey::Identifier(ref id) = key {
            // Shorthand: { x } is equivalent to { x: x }
            Pattern::Identifier(id.clone())
        } else {
            // String, number and computed keys must rename
            return Err(parser.unexpected_token(&[Token::Colon]));
        };

        // Check for default value: { x = 10 } or { x: y = 10 }
        let default = if parser.check(&Token::Equal) {
            parser.advance();
            Some(super::expr::parse_expression(parser)?)
        } else {
            None
        };

        let prop_span = parser.combine_spans(&prop_start, &parser.current_span());

        properties.push(ObjectPatternProperty {
            key,
            value,
            default,
            span: prop_span,
        });

        // Optional comma
        if parser.check(&Token::Comma) {
            parser.advance();
        } else if !parser.check(&Token::RightBrace) {
            return Err(parser.unexpected_token(&[Token::Comma, Token::RightBrace]));
        }
    }

    let end_span = parser.current_span();
    parser.expect(Token::RightBrace)?;
    let span = parser.combine_spans(&start_span, &end_span);

    Ok(Pattern::Object(ObjectPattern {
        properties,
        rest,
        span,
    }))
}

/// Parse the key of an object pattern property. Keywords work as keys
/// the same way they do in object literals: { default: d } = mod
fn parse_pattern_key(parser: &mut Parser) -> Result<PatternKey, ParseError> {
    let span = parser.current_span();

    match parser.current() {
        Token::Identifier(name) => {
            let name = *name;
            parser.advance();
            Ok(PatternKey::Identifier(Identifier::new(name, span)))
        }
        Token::String(value) => {
            let value = *value;
            parser.advance();
            Ok(PatternKey::StringLiteral(StringLiteral { value, span }))
        }
        Token::Number(value) => {
            let value = *value;
            parser.advance();
            Ok(PatternKey::NumberLiteral(NumberLiteral { value, span }))
        }
        Token::LeftBracket => {
            parser.advance();
            let expr = super::expr::parse_expression(parser)?;
            parser.expect(Token::RightBracket)?;
            Ok(PatternKey::Computed(expr))
        }
        token if token.is_keyword() => {
            let text = token.to_string();
            let symbol = parser.interner.intern(&text);
            parser.advance();
            Ok(PatternKey::Identifier(Identifier::new(symbol, span)))
        }
        _ => Err(parser.unexpected_token(&[Token::Identifier(Symbol::dummy())])),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ast::{Expression, Statement};
    use crate::parser::interner::Interner;
    use crate::parser::parser::ParseErrorKind;

    fn parse_first_pattern(source: &str) -> (Pattern, Interner) {
        let parser = Parser::new(source).unwrap();
        let (module, interner) = parser.parse().unwrap();
        match module.statements.into_iter().next() {
            Some(Statement::VariableDecl(decl)) => {
                (decl.declarators.into_iter().next().unwrap().pattern, interner)
            }
            other => panic!("expected variable declaration, got {:?}", other),
        }
    }

    fn parse_err(source: &str) -> ParseError {
        let parser = Parser::new(source).unwrap();
        parser.parse().unwrap_err()
    }

    #[test]
    fn test_identifier_pattern() {
        let (pattern, interner) = parse_first_pattern("let value = 1;");
        match pattern {
            Pattern::Identifier(id) => assert_eq!(interner.resolve(id.name), "value"),
            other => panic!("expected identifier pattern, got {:?}", other),
        }
    }

    #[test]
    fn test_array_pattern_holes_defaults_and_rest() {
        let (pattern, _) = parse_first_pattern("const [a, , c = 3, ...rest] = xs;");
        match pattern {
            Pattern::Array(array) => {
                assert_eq!(array.elements.len(), 3);
                assert!(array.elements[0].is_some());
                assert!(array.elements[1].is_none());
                let third = array.elements[2].as_ref().unwrap();
                assert!(matches!(third.default, Some(Expression::NumberLiteral(_))));
                assert!(matches!(array.rest.as_deref(), Some(Pattern::Identifier(_))));
            }
            other => panic!("expected array pattern, got {:?}", other),
        }
    }

    #[test]
    fn test_nested_array_pattern() {
        let (pattern, _) = parse_first_pattern("const [[a], [b]] = pairs;");
        match pattern {
            Pattern::Array(array) => {
                assert_eq!(array.elements.len(), 2);
                let first = array.elements[0].as_ref().unwrap();
                assert!(matches!(first.pattern, Pattern::Array(_)));
            }
            other => panic!("expected array pattern, got {:?}", other),
        }
    }

    #[test]
    fn test_object_pattern_shorthand_and_rename() {
        let (pattern, interner) = parse_first_pattern("const { x, y: renamed, z = 0 } = point;");
        match pattern {
            Pattern::Object(object) => {
                assert_eq!(object.properties.len(), 3);

                // Shorthand binds the key name itself
                match (&object.properties[0].key, &object.properties[0].value) {
                    (PatternKey::Identifier(key), Pattern::Identifier(value)) => {
                        assert_eq!(key.name, value.name);
                    }
                    other => panic!("expected shorthand property, got {:?}", other),
                }

                match &object.properties[1].value {
                    Pattern::Identifier(id) => assert_eq!(interner.resolve(id.name), "renamed"),
                    other => panic!("expected renamed binding, got {:?}", other),
                }

                assert!(object.properties[2].default.is_some());
            }
            other => panic!("expected object pattern, got {:?}", other),
        }
    }

    #[test]
    fn test_object_pattern_key_forms() {
        let (pattern, interner) =
            parse_first_pattern("const { \"a-b\": dashed, 0: first, [k]: keyed, default: d } = obj;");
        match pattern {
            Pattern::Object(object) => {
                assert_eq!(object.properties.len(), 4);
                assert!(matches!(object.properties[0].key, PatternKey::StringLiteral(_)));
                assert!(matches!(object.properties[1].key, PatternKey::NumberLiteral(_)));
                assert!(matches!(object.properties[2].key, PatternKey::Computed(_)));
                match &object.properties[3].key {
                    PatternKey::Identifier(id) => {
                        assert_eq!(interner.resolve(id.name), "default")
                    }
                    other => panic!("expected keyword key, got {:?}", other),
                }
            }
            other => panic!("expected object pattern, got {:?}", other),
        }
    }

    #[test]
    fn test_object_pattern_rest() {
        let (pattern, interner) = parse_first_pattern("const { first, ...others } = obj;");
        match pattern {
            Pattern::Object(object) => {
                assert_eq!(object.properties.len(), 1);
                assert_eq!(interner.resolve(object.rest.unwrap().name), "others");
            }
            other => panic!("expected object pattern, got {:?}", other),
        }
    }

    #[test]
    fn test_rest_must_be_last() {
        let err = parse_err("const [..., a] = xs;");
        assert!(matches!(err.kind, ParseErrorKind::UnexpectedToken { .. }));

        let err = parse_err("const [...rest, a] = xs;");
        assert!(matches!(err.kind, ParseErrorKind::InvalidSyntax { .. }));

        let err = parse_err("const { ...rest, a } = obj;");
        assert!(matches!(err.kind, ParseErrorKind::InvalidSyntax { .. }));
    }

    #[test]
    fn test_quoted_key_requires_rename() {
        let err = parse_err("const { \"a-b\" } = obj;");
        assert!(matches!(err.kind, ParseErrorKind::UnexpectedToken { .. }));
    }
}
