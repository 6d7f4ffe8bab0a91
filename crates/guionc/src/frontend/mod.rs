//! Guion front-end: lexing and parsing
//!
//! Turns source text into a [`Program`] AST. Everything past this module
//! (semantic analysis, IR, emission) never touches raw characters or tokens.

pub mod ast;
pub mod lexer;
pub mod parser;
pub mod token;

pub use ast::{DialogueLine, Program, Scene};
pub use lexer::Lexer;
pub use parser::Parser;
pub use token::{Token, TokenKind};

use crate::common::CompileResult;

/// Parse source text into a program AST
pub fn parse(source: &str) -> CompileResult<Program> {
    Parser::new(source)?.parse()
}
