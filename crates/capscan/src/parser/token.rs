//! Token definitions for the JavaScript subset.

use crate::parser::interner::Symbol;
use std::fmt;

/// Source location of a token or AST node.
///
/// Byte offsets into the source text plus a 1-based line/column for
/// the start position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    /// Byte offset of the first character.
    pub start: usize,
    /// Byte offset one past the last character.
    pub end: usize,
    /// 1-based line of the start position.
    pub line: u32,
    /// 1-based column of the start position.
    pub column: u32,
}

impl Span {
    /// Create a span from raw positions.
    pub fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self { start, end, line, column }
    }

    /// Combine two spans into one covering both.
    ///
    /// Keeps the line/column of whichever span starts first.
    pub fn merge(self, other: Span) -> Span {
        let (line, column) = if self.start <= other.start {
            (self.line, self.column)
        } else {
            (other.line, other.column)
        };
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
            line,
            column,
        }
    }

    /// Length of the span in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// True for zero-width spans (e.g. end of input).
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// One piece of a template literal.
///
/// Expression parts carry their own sub-lexed token stream; the parser
/// turns each stream into an expression node.
#[derive(Debug, Clone, PartialEq)]
pub enum TemplatePart {
    /// Literal text between substitutions, with escapes processed.
    Chunk(Symbol),
    /// A `${ ... }` substitution, already lexed.
    Expression(Vec<(Token, Span)>),
}

/// Token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // Keywords
    Var,
    Let,
    Const,
    Function,
    Return,
    If,
    Else,
    For,
    While,
    Do,
    Break,
    Continue,
    New,
    Delete,
    Typeof,
    Void,
    Instanceof,
    In,
    Of,
    Yield,
    Async,
    Await,
    This,
    Null,
    True,
    False,
    Throw,
    Try,
    Catch,
    Finally,
    Switch,
    Case,
    Default,
    // Reserved words the parser rejects with a dedicated message
    Class,
    Extends,
    Super,
    Import,
    Export,

    // Literals
    Number(f64),
    BigInt(Symbol),
    String(Symbol),
    TemplateLiteral(Vec<TemplatePart>),
    Regex { pattern: Symbol, flags: Symbol },

    // Identifiers
    Identifier(Symbol),

    // Operators
    Plus,
    Minus,
    Star,
    StarStar,
    Slash,
    Percent,
    PlusPlus,
    MinusMinus,
    Equal,
    PlusEqual,
    MinusEqual,
    StarEqual,
    StarStarEqual,
    SlashEqual,
    PercentEqual,
    AmpEqual,
    PipeEqual,
    CaretEqual,
    LessLessEqual,
    GreaterGreaterEqual,
    GreaterGreaterGreaterEqual,
    EqualEqual,
    NotEqual,
    EqualEqualEqual,
    NotEqualEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    AmpAmp,
    PipePipe,
    QuestionQuestion,
    Bang,
    Amp,
    Pipe,
    Caret,
    Tilde,
    LessLess,
    GreaterGreater,
    GreaterGreaterGreater,
    Question,
    Colon,
    Semicolon,
    Comma,
    Dot,
    DotDotDot,
    Arrow,

    // Delimiters
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    LeftBracket,
    RightBracket,

    /// End of input.
    Eof,
}

impl Token {
    /// True for reserved words, including the ones the parser rejects.
    pub fn is_keyword(&self) -> bool {
        matches!(
            self,
            Token::Var
                | Token::Let
                | Token::Const
                | Token::Function
                | Token::Return
                | Token::If
                | Token::Else
                | Token::For
                | Token::While
                | Token::Do
                | Token::Break
                | Token::Continue
                | Token::New
                | Token::Delete
                | Token::Typeof
                | Token::Void
                | Token::Instanceof
                | Token::In
                | Token::Of
                | Token::Yield
                | Token::Async
                | Token::Await
                | Token::This
                | Token::Null
                | Token::True
                | Token::False
                | Token::Throw
                | Token::Try
                | Token::Catch
                | Token::Finally
                | Token::Switch
                | Token::Case
                | Token::Default
                | Token::Class
                | Token::Extends
                | Token::Super
                | Token::Import
                | Token::Export
        )
    }

    /// True for literal-carrying tokens.
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            Token::Number(_)
                | Token::BigInt(_)
                | Token::String(_)
                | Token::TemplateLiteral(_)
                | Token::Regex { .. }
                | Token::Null
                | Token::True
                | Token::False
        )
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Token::Var => "var",
            Token::Let => "let",
            Token::Const => "const",
            Token::Function => "function",
            Token::Return => "return",
            Token::If => "if",
            Token::Else => "else",
            Token::For => "for",
            Token::While => "while",
            Token::Do => "do",
            Token::Break => "break",
            Token::Continue => "continue",
            Token::New => "new",
            Token::Delete => "delete",
            Token::Typeof => "typeof",
            Token::Void => "void",
            Token::Instanceof => "instanceof",
            Token::In => "in",
            Token::Of => "of",
            Token::Yield => "yield",
            Token::Async => "async",
            Token::Await => "await",
            Token::This => "this",
            Token::Null => "null",
            Token::True => "true",
            Token::False => "false",
            Token::Throw => "throw",
            Token::Try => "try",
            Token::Catch => "catch",
            Token::Finally => "finally",
            Token::Switch => "switch",
            Token::Case => "case",
            Token::Default => "default",
            Token::Class => "class",
            Token::Extends => "extends",
            Token::Super => "super",
            Token::Import => "import",
            Token::Export => "export",
            Token::Number(value) => return write!(f, "{}", value),
            Token::BigInt(_) => "bigint literal",
            Token::String(_) => "string literal",
            Token::TemplateLiteral(_) => "template literal",
            Token::Regex { .. } => "regex literal",
            Token::Identifier(_) => "identifier",
            Token::Plus => "+",
            Token::Minus => "-",
            Token::Star => "*",
            Token::StarStar => "**",
            Token::Slash => "/",
            Token::Percent => "%",
            Token::PlusPlus => "++",
            Token::MinusMinus => "--",
            Token::Equal => "=",
            Token::PlusEqual => "+=",
            Token::MinusEqual => "-=",
            Token::StarEqual => "*=",
            Token::StarStarEqual => "**=",
            Token::SlashEqual => "/=",
            Token::PercentEqual => "%=",
            Token::AmpEqual => "&=",
            Token::PipeEqual => "|=",
            Token::CaretEqual => "^=",
            Token::LessLessEqual => "<<=",
            Token::GreaterGreaterEqual => ">>=",
            Token::GreaterGreaterGreaterEqual => ">>>=",
            Token::EqualEqual => "==",
            Token::NotEqual => "!=",
            Token::EqualEqualEqual => "===",
            Token::NotEqualEqual => "!==",
            Token::Less => "<",
            Token::LessEqual => "<=",
            Token::Greater => ">",
            Token::GreaterEqual => ">=",
            Token::AmpAmp => "&&",
            Token::PipePipe => "||",
            Token::QuestionQuestion => "??",
            Token::Bang => "!",
            Token::Amp => "&",
            Token::Pipe => "|",
            Token::Caret => "^",
            Token::Tilde => "~",
            Token::LessLess => "<<",
            Token::GreaterGreater => ">>",
            Token::GreaterGreaterGreater => ">>>",
            Token::Question => "?",
            Token::Colon => ":",
            Token::Semicolon => ";",
            Token::Comma => ",",
            Token::Dot => ".",
            Token::DotDotDot => "...",
            Token::Arrow => "=>",
            Token::LeftParen => "(",
            Token::RightParen => ")",
            Token::LeftBrace => "{",
            Token::RightBrace => "}",
            Token::LeftBracket => "[",
            Token::RightBracket => "]",
            Token::Eof => "end of input",
        };
        f.write_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_merge_covers_both() {
        let a = Span::new(4, 10, 1, 5);
        let b = Span::new(12, 20, 2, 3);
        let merged = a.merge(b);
        assert_eq!(merged.start, 4);
        assert_eq!(merged.end, 20);
        assert_eq!(merged.line, 1);
        assert_eq!(merged.column, 5);
    }

    #[test]
    fn test_span_merge_is_order_insensitive() {
        let a = Span::new(4, 10, 1, 5);
        let b = Span::new(12, 20, 2, 3);
        assert_eq!(a.merge(b), b.merge(a));
    }

    #[test]
    fn test_span_len() {
        let span = Span::new(3, 8, 1, 4);
        assert_eq!(span.len(), 5);
        assert!(!span.is_empty());
        assert!(Span::new(8, 8, 1, 9).is_empty());
    }

    #[test]
    fn test_token_classification() {
        assert!(Token::Of.is_keyword());
        assert!(Token::Class.is_keyword());
        assert!(!Token::Arrow.is_keyword());
        assert!(Token::Number(1.0).is_literal());
        assert!(Token::Null.is_literal());
        assert!(!Token::Identifier(crate::parser::interner::Symbol::dummy()).is_literal());
    }

    #[test]
    fn test_token_display() {
        assert_eq!(Token::Instanceof.to_string(), "instanceof");
        assert_eq!(Token::GreaterGreaterGreaterEqual.to_string(), ">>>=");
        assert_eq!(Token::Eof.to_string(), "end of input");
    }
}
