//! Lexer for the JavaScript subset.
//!
//! A hand-rolled driver loop around a logos-derived token definition.
//! Three things cannot be expressed as plain logos rules and are scanned
//! manually before the derived rules run:
//!
//! - template literals (nested substitutions carry their own sub-lexed
//!   token streams),
//! - regular-expression literals (only valid in expression position, so
//!   the decision depends on the previous significant token),
//! - identifiers with non-ASCII characters (XID rules via `unicode-xid`).
//!
//! Whitespace and comments are skipped by the driver so line numbers can
//! be tracked and unterminated block comments reported.

use logos::Logos;
use unicode_xid::UnicodeXID;

use crate::parser::interner::{Interner, Symbol};
use crate::parser::token::{Span, TemplatePart, Token};

// ============================================================================
// Logos token definition
// ============================================================================

#[derive(Logos, Debug, PartialEq)]
enum LogosToken {
    // Keywords
    #[token("var")]
    Var,
    #[token("let")]
    Let,
    #[token("const")]
    Const,
    #[token("function")]
    Function,
    #[token("return")]
    Return,
    #[token("if")]
    If,
    #[token("else")]
    Else,
    #[token("for")]
    For,
    #[token("while")]
    While,
    #[token("do")]
    Do,
    #[token("break")]
    Break,
    #[token("continue")]
    Continue,
    #[token("new")]
    New,
    #[token("delete")]
    Delete,
    #[token("typeof")]
    Typeof,
    #[token("void")]
    Void,
    #[token("instanceof")]
    Instanceof,
    #[token("in")]
    In,
    #[token("of")]
    Of,
    #[token("yield")]
    Yield,
    #[token("async")]
    Async,
    #[token("await")]
    Await,
    #[token("this")]
    This,
    #[token("null")]
    Null,
    #[token("true")]
    True,
    #[token("false")]
    False,
    #[token("throw")]
    Throw,
    #[token("try")]
    Try,
    #[token("catch")]
    Catch,
    #[token("finally")]
    Finally,
    #[token("switch")]
    Switch,
    #[token("case")]
    Case,
    #[token("default")]
    Default,
    #[token("class")]
    Class,
    #[token("extends")]
    Extends,
    #[token("super")]
    Super,
    #[token("import")]
    Import,
    #[token("export")]
    Export,

    // Literals
    #[regex(r"([0-9]+(\.[0-9]*)?|\.[0-9]+)([eE][+-]?[0-9]+)?", parse_decimal)]
    Number(f64),
    #[regex(r"0[xX][0-9a-fA-F]+", parse_hex)]
    HexNumber(f64),
    #[regex(r"0[oO][0-7]+", parse_octal)]
    OctalNumber(f64),
    #[regex(r"0[bB][01]+", parse_binary)]
    BinaryNumber(f64),
    #[regex(r"[0-9]+n")]
    BigInt,
    #[regex(r#""([^"\\\n]|\\[^\n])*""#, parse_double_string)]
    DoubleString(String),
    #[regex(r"'([^'\\\n]|\\[^\n])*'", parse_single_string)]
    SingleString(String),

    // Identifiers (ASCII fast path; non-ASCII handled by the driver)
    #[regex(r"[A-Za-z_$][A-Za-z0-9_$]*")]
    Identifier,

    // Operators
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("**")]
    StarStar,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("++")]
    PlusPlus,
    #[token("--")]
    MinusMinus,
    #[token("=")]
    Equal,
    #[token("+=")]
    PlusEqual,
    #[token("-=")]
    MinusEqual,
    #[token("*=")]
    StarEqual,
    #[token("**=")]
    StarStarEqual,
    #[token("/=")]
    SlashEqual,
    #[token("%=")]
    PercentEqual,
    #[token("&=")]
    AmpEqual,
    #[token("|=")]
    PipeEqual,
    #[token("^=")]
    CaretEqual,
    #[token("<<=")]
    LessLessEqual,
    #[token(">>=")]
    GreaterGreaterEqual,
    #[token(">>>=")]
    GreaterGreaterGreaterEqual,
    #[token("==")]
    EqualEqual,
    #[token("!=")]
    NotEqual,
    #[token("===")]
    EqualEqualEqual,
    #[token("!==")]
    NotEqualEqual,
    #[token("<")]
    Less,
    #[token("<=")]
    LessEqual,
    #[token(">")]
    Greater,
    #[token(">=")]
    GreaterEqual,
    #[token("&&")]
    AmpAmp,
    #[token("||")]
    PipePipe,
    #[token("??")]
    QuestionQuestion,
    #[token("!")]
    Bang,
    #[token("&")]
    Amp,
    #[token("|")]
    Pipe,
    #[token("^")]
    Caret,
    #[token("~")]
    Tilde,
    #[token("<<")]
    LessLess,
    #[token(">>")]
    GreaterGreater,
    #[token(">>>")]
    GreaterGreaterGreater,
    #[token("?")]
    Question,
    #[token(":")]
    Colon,
    #[token(";")]
    Semicolon,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token("...")]
    DotDotDot,
    #[token("=>")]
    Arrow,

    // Delimiters
    #[token("(")]
    LeftParen,
    #[token(")")]
    RightParen,
    #[token("{")]
    LeftBrace,
    #[token("}")]
    RightBrace,
    #[token("[")]
    LeftBracket,
    #[token("]")]
    RightBracket,
}

fn parse_decimal(lex: &mut logos::Lexer<'_, LogosToken>) -> Option<f64> {
    lex.slice().parse().ok()
}

fn parse_hex(lex: &mut logos::Lexer<'_, LogosToken>) -> f64 {
    radix_value(&lex.slice()[2..], 16)
}

fn parse_octal(lex: &mut logos::Lexer<'_, LogosToken>) -> f64 {
    radix_value(&lex.slice()[2..], 8)
}

fn parse_binary(lex: &mut logos::Lexer<'_, LogosToken>) -> f64 {
    radix_value(&lex.slice()[2..], 2)
}

/// Accumulating digit-by-digit matches the precision loss JavaScript
/// itself has for literals beyond 2^53.
fn radix_value(digits: &str, radix: u32) -> f64 {
    digits
        .chars()
        .filter_map(|c| c.to_digit(radix))
        .fold(0.0, |acc, d| acc * radix as f64 + d as f64)
}

fn parse_double_string(lex: &mut logos::Lexer<'_, LogosToken>) -> String {
    let slice = lex.slice();
    unescape_string(&slice[1..slice.len() - 1])
}

fn parse_single_string(lex: &mut logos::Lexer<'_, LogosToken>) -> String {
    let slice = lex.slice();
    unescape_string(&slice[1..slice.len() - 1])
}

/// Process string escapes the way JavaScript does: recognized escapes are
/// replaced, unknown escapes stand for the escaped character itself, and
/// malformed hex/unicode escapes fall back to their literal spelling.
fn unescape_string(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some('b') => out.push('\u{0008}'),
            Some('f') => out.push('\u{000C}'),
            Some('v') => out.push('\u{000B}'),
            Some('0') => out.push('\0'),
            Some('x') => {
                let rest = chars.as_str();
                match hex_escape(rest, 2) {
                    Some(value) => {
                        out.push(value);
                        advance_chars(&mut chars, 2);
                    }
                    None => out.push('x'),
                }
            }
            Some('u') => {
                let rest = chars.as_str();
                if let Some(stripped) = rest.strip_prefix('{') {
                    match stripped.split_once('}').and_then(|(digits, _)| {
                        u32::from_str_radix(digits, 16).ok().and_then(char::from_u32)
                    }) {
                        Some(value) => {
                            let digits = rest.find('}').unwrap_or(0);
                            out.push(value);
                            advance_chars(&mut chars, digits + 1);
                        }
                        None => out.push('u'),
                    }
                } else {
                    match hex_escape(rest, 4) {
                        Some(value) => {
                            out.push(value);
                            advance_chars(&mut chars, 4);
                        }
                        None => out.push('u'),
                    }
                }
            }
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}

fn hex_escape(text: &str, len: usize) -> Option<char> {
    if text.len() < len || !text.is_char_boundary(len) {
        return None;
    }
    u32::from_str_radix(&text[..len], 16).ok().and_then(char::from_u32)
}

fn advance_chars(chars: &mut std::str::Chars<'_>, count: usize) {
    for _ in 0..count {
        chars.next();
    }
}

// ============================================================================
// Lex errors
// ============================================================================

/// Error produced while tokenizing.
#[derive(Debug, Clone, PartialEq)]
pub enum LexError {
    /// A character no rule matched.
    UnexpectedCharacter {
        /// The offending character.
        ch: char,
        /// Where it was found.
        span: Span,
    },
    /// A string literal with no closing quote on the same line.
    UnterminatedString {
        /// From the opening quote to the end of the line.
        span: Span,
    },
    /// A template literal with no closing backtick.
    UnterminatedTemplate {
        /// From the opening backtick to the end of input.
        span: Span,
    },
    /// A regular-expression literal with no closing slash.
    UnterminatedRegex {
        /// From the opening slash to the end of the line.
        span: Span,
    },
    /// A block comment with no closing `*/`.
    UnterminatedComment {
        /// From the opening `/*` to the end of input.
        span: Span,
    },
}

impl LexError {
    /// Location of the error.
    pub fn span(&self) -> Span {
        match self {
            LexError::UnexpectedCharacter { span, .. }
            | LexError::UnterminatedString { span }
            | LexError::UnterminatedTemplate { span }
            | LexError::UnterminatedRegex { span }
            | LexError::UnterminatedComment { span } => *span,
        }
    }

    /// Human-readable description of what went wrong.
    pub fn description(&self) -> String {
        match self {
            LexError::UnexpectedCharacter { ch, .. } => {
                format!("Unexpected character '{}'", ch)
            }
            LexError::UnterminatedString { .. } => "Unterminated string literal".to_string(),
            LexError::UnterminatedTemplate { .. } => "Unterminated template literal".to_string(),
            LexError::UnterminatedRegex { .. } => {
                "Unterminated regular expression literal".to_string()
            }
            LexError::UnterminatedComment { .. } => "Unterminated block comment".to_string(),
        }
    }

    /// A short suggestion for fixing the error, when one applies.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            LexError::UnexpectedCharacter { .. } => None,
            LexError::UnterminatedString { .. } => Some("Add a closing quote"),
            LexError::UnterminatedTemplate { .. } => Some("Add a closing backtick"),
            LexError::UnterminatedRegex { .. } => Some("Add a closing slash"),
            LexError::UnterminatedComment { .. } => Some("Add a closing */"),
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let span = self.span();
        write!(f, "{} at line {}, column {}", self.description(), span.line, span.column)
    }
}

impl std::error::Error for LexError {}

// ============================================================================
// Lexer driver
// ============================================================================

/// Tokenizer producing spanned [`Token`]s and the interner that owns
/// their identifier/string payloads.
pub struct Lexer<'a> {
    source: &'a str,
    tokens: Vec<(Token, Span)>,
    errors: Vec<LexError>,
    interner: Interner,
    /// Added to every span; non-zero for template-substitution sub-lexers
    /// so spans stay absolute in the outer source.
    base_offset: usize,
    line: u32,
    line_start: usize,
}

impl<'a> Lexer<'a> {
    /// Create a lexer over a complete source text.
    pub fn new(source: &'a str) -> Self {
        Self::with_context(source, Interner::new(), 0, 1)
    }

    fn with_context(source: &'a str, interner: Interner, base_offset: usize, line: u32) -> Self {
        Self {
            source,
            tokens: Vec::new(),
            errors: Vec::new(),
            interner,
            base_offset,
            line,
            line_start: 0,
        }
    }

    /// Tokenize the whole input.
    ///
    /// On success returns the token stream (terminated by [`Token::Eof`])
    /// and the interner. All errors found are collected rather than
    /// stopping at the first.
    pub fn tokenize(self) -> Result<(Vec<(Token, Span)>, Interner), Vec<LexError>> {
        let (tokens, interner, errors) = self.run();
        if errors.is_empty() {
            Ok((tokens, interner))
        } else {
            Err(errors)
        }
    }

    fn run(mut self) -> (Vec<(Token, Span)>, Interner, Vec<LexError>) {
        let mut pos = 0;

        loop {
            self.skip_trivia(&mut pos);
            if pos >= self.source.len() {
                break;
            }

            let rest = &self.source[pos..];
            let next = match rest.chars().next() {
                Some(c) => c,
                None => break,
            };

            // Template literals are scanned by hand: substitutions nest
            // arbitrarily and carry their own token streams.
            if next == '`' {
                self.lex_template(&mut pos);
                continue;
            }

            // A slash in expression position starts a regex literal, not
            // a division. Comments were already skipped above.
            if next == '/' && self.regex_allowed() {
                self.lex_regex(&mut pos);
                continue;
            }

            // Identifiers beginning with a non-ASCII XID character.
            if !next.is_ascii() && UnicodeXID::is_xid_start(next) {
                self.lex_unicode_identifier(&mut pos);
                continue;
            }

            let mut logos_lexer = LogosToken::lexer(rest);
            match logos_lexer.next() {
                None => break,
                Some(Err(())) => {
                    self.lex_failure(&mut pos, next);
                }
                Some(Ok(logos_token)) => {
                    let matched = logos_lexer.span();
                    let mut end = pos + matched.end;
                    let slice = &self.source[pos..end];

                    // A word token followed by a non-ASCII continuation
                    // character is one long identifier (`café`), not a
                    // word plus a stray character.
                    if is_word_slice(slice) && self.continues_identifier(end) {
                        end = self.scan_identifier_tail(end);
                        let text = &self.source[pos..end];
                        let symbol = self.interner.intern(text);
                        let span = self.span_at(pos, end);
                        self.tokens.push((Token::Identifier(symbol), span));
                        pos = end;
                        continue;
                    }

                    let token = self.convert_token(logos_token, slice);
                    let span = self.span_at(pos, end);
                    self.tokens.push((token, span));
                    pos = end;
                }
            }
        }

        let eof_span = self.span_at(self.source.len(), self.source.len());
        self.tokens.push((Token::Eof, eof_span));

        (self.tokens, self.interner, self.errors)
    }

    // ------------------------------------------------------------------
    // Trivia
    // ------------------------------------------------------------------

    fn skip_trivia(&mut self, pos: &mut usize) {
        loop {
            let rest = &self.source[*pos..];
            let c = match rest.chars().next() {
                Some(c) => c,
                None => return,
            };

            if c == '\n' {
                *pos += 1;
                self.line += 1;
                self.line_start = *pos;
                continue;
            }
            if c.is_whitespace() {
                *pos += c.len_utf8();
                continue;
            }
            if rest.starts_with("//") {
                match rest.find('\n') {
                    Some(offset) => *pos += offset,
                    None => *pos = self.source.len(),
                }
                continue;
            }
            if rest.starts_with("/*") {
                let start = *pos;
                match rest[2..].find("*/") {
                    Some(offset) => {
                        let end = *pos + 2 + offset + 2;
                        self.bump_lines(*pos, end);
                        *pos = end;
                    }
                    None => {
                        let span = self.span_at(start, self.source.len());
                        self.errors.push(LexError::UnterminatedComment { span });
                        *pos = self.source.len();
                    }
                }
                continue;
            }
            return;
        }
    }

    fn bump_lines(&mut self, from: usize, to: usize) {
        for (offset, byte) in self.source[from..to].bytes().enumerate() {
            if byte == b'\n' {
                self.line += 1;
                self.line_start = from + offset + 1;
            }
        }
    }

    fn span_at(&self, start: usize, end: usize) -> Span {
        let column = (start - self.line_start) as u32 + 1;
        Span::new(self.base_offset + start, self.base_offset + end, self.line, column)
    }

    // ------------------------------------------------------------------
    // Manual scanners
    // ------------------------------------------------------------------

    /// True if a `/` at the current position would start a regex literal.
    ///
    /// Decided from the previous significant token: after a value
    /// (identifier, literal, `)` or `]`, postfix `++`/`--`), a slash is
    /// division; everywhere else it begins a regex. A `}` is treated as a
    /// block end, so a regex may follow it.
    fn regex_allowed(&self) -> bool {
        match self.tokens.last() {
            None => true,
            Some((token, _)) => !matches!(
                token,
                Token::Identifier(_)
                    | Token::Number(_)
                    | Token::BigInt(_)
                    | Token::String(_)
                    | Token::TemplateLiteral(_)
                    | Token::Regex { .. }
                    | Token::This
                    | Token::Super
                    | Token::True
                    | Token::False
                    | Token::Null
                    | Token::RightParen
                    | Token::RightBracket
                    | Token::PlusPlus
                    | Token::MinusMinus
            ),
        }
    }

    fn lex_regex(&mut self, pos: &mut usize) {
        let start = *pos;
        let bytes = self.source.as_bytes();
        let mut i = start + 1;
        let mut in_class = false;

        let body_end = loop {
            if i >= bytes.len() || bytes[i] == b'\n' {
                let line_end = i.min(self.source.len());
                let span = self.span_at(start, line_end);
                self.errors.push(LexError::UnterminatedRegex { span });
                *pos = line_end;
                return;
            }
            match bytes[i] {
                b'\\' => i += 2,
                b'[' => {
                    in_class = true;
                    i += 1;
                }
                b']' => {
                    in_class = false;
                    i += 1;
                }
                b'/' if !in_class => break i,
                _ => i += 1,
            }
        };

        let mut flags_end = body_end + 1;
        while flags_end < bytes.len() && bytes[flags_end].is_ascii_alphabetic() {
            flags_end += 1;
        }

        let pattern = self.interner.intern(&self.source[start + 1..body_end]);
        let flags = self.interner.intern(&self.source[body_end + 1..flags_end]);
        let span = self.span_at(start, flags_end);
        self.tokens.push((Token::Regex { pattern, flags }, span));
        *pos = flags_end;
    }

    fn lex_template(&mut self, pos: &mut usize) {
        let start = *pos;
        // The span is anchored where the template opened, before any
        // line bumps inside it.
        let entry = self.span_at(start, start);
        let mut parts = Vec::new();
        let mut chunk = String::new();
        let mut i = start + 1;

        loop {
            let c = match self.source[i..].chars().next() {
                Some(c) => c,
                None => {
                    let span =
                        Span::new(entry.start, self.base_offset + self.source.len(), entry.line, entry.column);
                    self.errors.push(LexError::UnterminatedTemplate { span });
                    *pos = self.source.len();
                    return;
                }
            };

            match c {
                '`' => {
                    parts.push(TemplatePart::Chunk(self.interner.intern(&chunk)));
                    let end = i + 1;
                    let span = Span::new(entry.start, self.base_offset + end, entry.line, entry.column);
                    self.tokens.push((Token::TemplateLiteral(parts), span));
                    *pos = end;
                    return;
                }
                '\\' => match self.source[i + 1..].chars().next() {
                    Some(escaped) => {
                        push_template_escape(&mut chunk, escaped);
                        if escaped == '\n' {
                            self.line += 1;
                            self.line_start = i + 2;
                        }
                        i += 1 + escaped.len_utf8();
                    }
                    None => {
                        let span = Span::new(
                            entry.start,
                            self.base_offset + self.source.len(),
                            entry.line,
                            entry.column,
                        );
                        self.errors.push(LexError::UnterminatedTemplate { span });
                        *pos = self.source.len();
                        return;
                    }
                },
                '$' if self.source[i..].starts_with("${") => {
                    parts.push(TemplatePart::Chunk(self.interner.intern(&chunk)));
                    chunk = String::new();

                    let inner_start = i + 2;
                    let inner_end = match self.scan_substitution(inner_start) {
                        Some(end) => end,
                        None => {
                            let span = Span::new(
                                entry.start,
                                self.base_offset + self.source.len(),
                                entry.line,
                                entry.column,
                            );
                            self.errors.push(LexError::UnterminatedTemplate { span });
                            *pos = self.source.len();
                            return;
                        }
                    };

                    let inner = &self.source[inner_start..inner_end];
                    let interner = std::mem::take(&mut self.interner);
                    let sub = Lexer::with_context(
                        inner,
                        interner,
                        self.base_offset + inner_start,
                        self.line,
                    );
                    let (tokens, interner, errors) = sub.run();
                    self.interner = interner;
                    self.errors.extend(errors);
                    parts.push(TemplatePart::Expression(tokens));

                    self.bump_lines(inner_start, inner_end);
                    i = inner_end + 1;
                }
                '\n' => {
                    chunk.push(c);
                    self.line += 1;
                    self.line_start = i + 1;
                    i += 1;
                }
                _ => {
                    chunk.push(c);
                    i += c.len_utf8();
                }
            }
        }
    }

    /// Find the `}` closing a `${` substitution, skipping strings and
    /// nested templates. Returns the byte offset of the closing brace.
    fn scan_substitution(&self, from: usize) -> Option<usize> {
        let bytes = self.source.as_bytes();
        let mut i = from;
        let mut depth = 1usize;

        while i < bytes.len() {
            match bytes[i] {
                b'{' => {
                    depth += 1;
                    i += 1;
                }
                b'}' => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(i);
                    }
                    i += 1;
                }
                quote @ (b'"' | b'\'') => {
                    i += 1;
                    while i < bytes.len() && bytes[i] != quote {
                        i += if bytes[i] == b'\\' { 2 } else { 1 };
                    }
                    i += 1;
                }
                b'`' => {
                    i = self.scan_nested_template(i + 1)?;
                }
                b'\\' => i += 2,
                _ => i += 1,
            }
        }
        None
    }

    /// Skip over a nested template starting just after its backtick.
    /// Returns the offset just past the closing backtick.
    fn scan_nested_template(&self, from: usize) -> Option<usize> {
        let bytes = self.source.as_bytes();
        let mut i = from;
        while i < bytes.len() {
            match bytes[i] {
                b'\\' => i += 2,
                b'`' => return Some(i + 1),
                b'$' if bytes.get(i + 1) == Some(&b'{') => {
                    i = self.scan_substitution(i + 2)? + 1;
                }
                _ => i += 1,
            }
        }
        None
    }

    fn lex_unicode_identifier(&mut self, pos: &mut usize) {
        let start = *pos;
        let first = match self.source[start..].chars().next() {
            Some(c) => c,
            None => return,
        };
        let end = self.scan_identifier_tail(start + first.len_utf8());
        let symbol = self.interner.intern(&self.source[start..end]);
        let span = self.span_at(start, end);
        self.tokens.push((Token::Identifier(symbol), span));
        *pos = end;
    }

    fn continues_identifier(&self, at: usize) -> bool {
        match self.source[at..].chars().next() {
            Some(c) => !c.is_ascii() && UnicodeXID::is_xid_continue(c),
            None => false,
        }
    }

    fn scan_identifier_tail(&self, mut end: usize) -> usize {
        while let Some(c) = self.source[end..].chars().next() {
            let continues = if c.is_ascii() {
                c.is_ascii_alphanumeric() || c == '_' || c == '$'
            } else {
                UnicodeXID::is_xid_continue(c)
            };
            if !continues {
                break;
            }
            end += c.len_utf8();
        }
        end
    }

    fn lex_failure(&mut self, pos: &mut usize, next: char) {
        let start = *pos;
        // An unmatched quote means the string never closed; report it as
        // such rather than as a stray character.
        if next == '"' || next == '\'' {
            let line_end = self.source[start..]
                .find('\n')
                .map(|offset| start + offset)
                .unwrap_or(self.source.len());
            let span = self.span_at(start, line_end);
            self.errors.push(LexError::UnterminatedString { span });
            *pos = line_end;
            return;
        }
        let end = start + next.len_utf8();
        let span = self.span_at(start, end);
        self.errors.push(LexError::UnexpectedCharacter { ch: next, span });
        *pos = end;
    }

    // ------------------------------------------------------------------
    // Token conversion
    // ------------------------------------------------------------------

    fn convert_token(&mut self, logos_token: LogosToken, slice: &str) -> Token {
        match logos_token {
            LogosToken::Var => Token::Var,
            LogosToken::Let => Token::Let,
            LogosToken::Const => Token::Const,
            LogosToken::Function => Token::Function,
            LogosToken::Return => Token::Return,
            LogosToken::If => Token::If,
            LogosToken::Else => Token::Else,
            LogosToken::For => Token::For,
            LogosToken::While => Token::While,
            LogosToken::Do => Token::Do,
            LogosToken::Break => Token::Break,
            LogosToken::Continue => Token::Continue,
            LogosToken::New => Token::New,
            LogosToken::Delete => Token::Delete,
            LogosToken::Typeof => Token::Typeof,
            LogosToken::Void => Token::Void,
            LogosToken::Instanceof => Token::Instanceof,
            LogosToken::In => Token::In,
            LogosToken::Of => Token::Of,
            LogosToken::Yield => Token::Yield,
            LogosToken::Async => Token::Async,
            LogosToken::Await => Token::Await,
            LogosToken::This => Token::This,
            LogosToken::Null => Token::Null,
            LogosToken::True => Token::True,
            LogosToken::False => Token::False,
            LogosToken::Throw => Token::Throw,
            LogosToken::Try => Token::Try,
            LogosToken::Catch => Token::Catch,
            LogosToken::Finally => Token::Finally,
            LogosToken::Switch => Token::Switch,
            LogosToken::Case => Token::Case,
            LogosToken::Default => Token::Default,
            LogosToken::Class => Token::Class,
            LogosToken::Extends => Token::Extends,
            LogosToken::Super => Token::Super,
            LogosToken::Import => Token::Import,
            LogosToken::Export => Token::Export,
            LogosToken::Number(value)
            | LogosToken::HexNumber(value)
            | LogosToken::OctalNumber(value)
            | LogosToken::BinaryNumber(value) => Token::Number(value),
            LogosToken::BigInt => {
                let digits = self.interner.intern(&slice[..slice.len() - 1]);
                Token::BigInt(digits)
            }
            LogosToken::DoubleString(value) | LogosToken::SingleString(value) => {
                Token::String(self.interner.intern(&value))
            }
            LogosToken::Identifier => Token::Identifier(self.interner.intern(slice)),
            LogosToken::Plus => Token::Plus,
            LogosToken::Minus => Token::Minus,
            LogosToken::Star => Token::Star,
            LogosToken::StarStar => Token::StarStar,
            LogosToken::Slash => Token::Slash,
            LogosToken::Percent => Token::Percent,
            LogosToken::PlusPlus => Token::PlusPlus,
            LogosToken::MinusMinus => Token::MinusMinus,
            LogosToken::Equal => Token::Equal,
            LogosToken::PlusEqual => Token::PlusEqual,
            LogosToken::MinusEqual => Token::MinusEqual,
            LogosToken::StarEqual => Token::StarEqual,
            LogosToken::StarStarEqual => Token::StarStarEqual,
            LogosToken::SlashEqual => Token::SlashEqual,
            LogosToken::PercentEqual => Token::PercentEqual,
            LogosToken::AmpEqual => Token::AmpEqual,
            LogosToken::PipeEqual => Token::PipeEqual,
            LogosToken::CaretEqual => Token::CaretEqual,
            LogosToken::LessLessEqual => Token::LessLessEqual,
            LogosToken::GreaterGreaterEqual => Token::GreaterGreaterEqual,
            LogosToken::GreaterGreaterGreaterEqual => Token::GreaterGreaterGreaterEqual,
            LogosToken::EqualEqual => Token::EqualEqual,
            LogosToken::NotEqual => Token::NotEqual,
            LogosToken::EqualEqualEqual => Token::EqualEqualEqual,
            LogosToken::NotEqualEqual => Token::NotEqualEqual,
            LogosToken::Less => Token::Less,
            LogosToken::LessEqual => Token::LessEqual,
            LogosToken::Greater => Token::Greater,
            LogosToken::GreaterEqual => Token::GreaterEqual,
            LogosToken::AmpAmp => Token::AmpAmp,
            LogosToken::PipePipe => Token::PipePipe,
            LogosToken::QuestionQuestion => Token::QuestionQuestion,
            LogosToken::Bang => Token::Bang,
            LogosToken::Amp => Token::Amp,
            LogosToken::Pipe => Token::Pipe,
            LogosToken::Caret => Token::Caret,
            LogosToken::Tilde => Token::Tilde,
            LogosToken::LessLess => Token::LessLess,
            LogosToken::GreaterGreater => Token::GreaterGreater,
            LogosToken::GreaterGreaterGreater => Token::GreaterGreaterGreater,
            LogosToken::Question => Token::Question,
            LogosToken::Colon => Token::Colon,
            LogosToken::Semicolon => Token::Semicolon,
            LogosToken::Comma => Token::Comma,
            LogosToken::Dot => Token::Dot,
            LogosToken::DotDotDot => Token::DotDotDot,
            LogosToken::Arrow => Token::Arrow,
            LogosToken::LeftParen => Token::LeftParen,
            LogosToken::RightParen => Token::RightParen,
            LogosToken::LeftBrace => Token::LeftBrace,
            LogosToken::RightBrace => Token::RightBrace,
            LogosToken::LeftBracket => Token::LeftBracket,
            LogosToken::RightBracket => Token::RightBracket,
        }
    }
}

fn is_word_slice(slice: &str) -> bool {
    slice
        .chars()
        .next()
        .map(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        .unwrap_or(false)
}

fn push_template_escape(chunk: &mut String, escaped: char) {
    match escaped {
        'n' => chunk.push('\n'),
        't' => chunk.push('\t'),
        'r' => chunk.push('\r'),
        'b' => chunk.push('\u{0008}'),
        'f' => chunk.push('\u{000C}'),
        'v' => chunk.push('\u{000B}'),
        '0' => chunk.push('\0'),
        '\n' => {}
        other => chunk.push(other),
    }
}
