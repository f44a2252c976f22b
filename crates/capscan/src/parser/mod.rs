//! Lexer and parser for the analyzed JavaScript subset.
//!
//! This module provides lexical analysis (tokenization) and syntactic
//! analysis (parsing) for the JavaScript sources the capability scanner
//! inspects.
//!
//! # Example
//!
//! ```ignore
//! use capscan::parser::Parser;
//!
//! let source = r#"
//!     for (const item of items) {
//!         console.log(item);
//!     }
//! "#;
//!
//! match Parser::new(source) {
//!     Ok(parser) => match parser.parse() {
//!         Ok((module, _interner)) => println!("{} statements", module.len()),
//!         Err(err) => eprintln!("{}", err),
//!     },
//!     Err(errors) => {
//!         for err in errors {
//!             eprintln!("{}", err);
//!         }
//!     }
//! }
//! ```

pub mod token;
pub mod lexer;
pub mod ast;
pub mod parser;
pub mod interner;

// Re-exports for convenience
pub use token::{Token, Span, TemplatePart};
pub use lexer::{Lexer, LexError};
pub use parser::{Parser, ParseError};
pub use interner::{Interner, Symbol};
