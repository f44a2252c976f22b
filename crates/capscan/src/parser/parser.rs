//! Recursive descent parser for the JavaScript subset.
//!
//! Transforms a token stream from the lexer into the AST in
//! [`crate::parser::ast`]. Statement, expression and pattern parsing live
//! in submodules as free functions taking `&mut Parser`, so each file
//! stays focused on one grammar family.

pub mod error;
pub mod expr;
pub mod guards;
pub mod pattern;
pub mod precedence;
pub mod stmt;

use crate::parser::ast::Module;
use crate::parser::interner::Interner;
use crate::parser::lexer::{LexError, Lexer};
use crate::parser::token::{Span, Token};

pub use error::{ParseError, ParseErrorKind};

/// Parser state for the JavaScript subset.
///
/// A recursive descent parser with small fixed lookahead. Two tokens are
/// enough for most constructs; arrow functions need a bounded scan over
/// the parenthesized parameter list, see [`expr`].
pub struct Parser {
    /// Pre-tokenized input, always terminated by `Token::Eof`
    tokens: Vec<(Token, Span)>,

    /// Current position in token stream
    pos: usize,

    /// Interner shared with the lexer, also used for member names that
    /// arrive as keyword tokens (`promise.finally`)
    interner: Interner,

    /// Current nesting depth, bounded by [`guards::MAX_PARSE_DEPTH`]
    depth: usize,

    /// When set, binary expression parsing stops at `in` so that
    /// `for (x in y)` heads are not swallowed by the `in` operator
    no_in: bool,
}

impl Parser {
    /// Create a new parser from source code.
    pub fn new(source: &str) -> Result<Self, Vec<LexError>> {
        // Tokenize the entire input first. The lexer always terminates
        // the stream with an Eof token.
        let (tokens, interner) = Lexer::new(source).tokenize()?;

        Ok(Self {
            tokens,
            pos: 0,
            interner,
            depth: 0,
            no_in: false,
        })
    }

    /// Create a parser over an already-lexed fragment, e.g. the tokens of
    /// one template literal substitution.
    pub(crate) fn fragment(mut tokens: Vec<(Token, Span)>, interner: Interner) -> Self {
        // Add EOF token if not present
        if tokens.is_empty() || !matches!(tokens.last().map(|(tok, _)| tok), Some(Token::Eof)) {
            let eof_span = if let Some((_, last_span)) = tokens.last() {
                Span::new(last_span.end, last_span.end, last_span.line, last_span.column)
            } else {
                Span::new(0, 0, 1, 1)
            };
            tokens.push((Token::Eof, eof_span));
        }

        Self {
            tokens,
            pos: 0,
            interner,
            depth: 0,
            no_in: false,
        }
    }

    /// Parse the entire source into a Module AST.
    ///
    /// Consumes the parser and returns the interner alongside the tree so
    /// callers can resolve identifier symbols back to text.
    pub fn parse(mut self) -> Result<(Module, Interner), ParseError> {
        let start_span = self.current_span();
        let mut statements = Vec::new();
        let mut guard = guards::LoopGuard::new("module_statements");

        // Parse top-level statements until EOF
        while !self.at_eof() {
            guard.check()?;
            statements.push(stmt::parse_statement(&mut self)?);
        }

        let span = if let Some(last) = statements.last() {
            self.combine_spans(&start_span, last.span())
        } else {
            start_span
        };

        Ok((Module::new(statements, span), self.interner))
    }

    // ========================================================================
    // Token Management
    // ========================================================================

    /// Get the current token.
    #[inline]
    pub fn current(&self) -> &Token {
        &self.tokens[self.pos].0
    }

    /// Get the current token's span.
    #[inline]
    pub fn current_span(&self) -> Span {
        self.tokens[self.pos].1
    }

    /// Peek at the next token (lookahead).
    #[inline]
    pub fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos + 1).map(|(tok, _)| tok)
    }

    /// Peek `offset` tokens ahead; `peek_at(1)` is the same as `peek`.
    #[inline]
    pub fn peek_at(&self, offset: usize) -> Option<&Token> {
        self.tokens.get(self.pos + offset).map(|(tok, _)| tok)
    }

    /// Advance to the next token, returning the previous current token.
    pub fn advance(&mut self) -> Token {
        let tok = self.tokens[self.pos].0.clone();
        if self.pos < self.tokens.len() - 1 {
            self.pos += 1;
        }
        tok
    }

    /// Check if the current token matches the given kind.
    ///
    /// Compares discriminants only, so `Identifier(Symbol::dummy())`
    /// matches any identifier.
    #[inline]
    pub fn check(&self, expected: &Token) -> bool {
        std::mem::discriminant(self.current()) == std::mem::discriminant(expected)
    }

    /// Check if the current token matches any of the given kinds.
    pub fn check_any(&self, expected: &[Token]) -> bool {
        expected.iter().any(|tok| self.check(tok))
    }

    /// Check if we've reached EOF.
    #[inline]
    pub fn at_eof(&self) -> bool {
        matches!(self.current(), Token::Eof)
    }

    /// Consume the current token if it matches the expected kind.
    ///
    /// Returns Ok(token) on match, or Err(ParseError) on mismatch.
    pub fn expect(&mut self, expected: Token) -> Result<Token, ParseError> {
        if self.check(&expected) {
            Ok(self.advance())
        } else {
            Err(self.unexpected_token(&[expected]))
        }
    }

    // ========================================================================
    // Error Handling
    // ========================================================================

    /// Create an "unexpected token" error at the current position.
    pub fn unexpected_token(&self, expected: &[Token]) -> ParseError {
        let span = self.current_span();
        if self.at_eof() {
            ParseError::unexpected_eof(expected.to_vec(), span)
        } else {
            ParseError::unexpected_token(expected.to_vec(), self.current().clone(), span)
        }
    }

    // ========================================================================
    // Utilities
    // ========================================================================

    /// Combine two spans into a single span.
    pub fn combine_spans(&self, start: &Span, end: &Span) -> Span {
        Span {
            start: start.start,
            end: end.end,
            line: start.line,
            column: start.column,
        }
    }
}
