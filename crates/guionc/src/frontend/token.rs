//! Token definitions for the Guion lexer

use crate::common::Span;
use logos::Logos;

/// Token with source location
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// All token kinds in Guion
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\n\r\f]+")] // Skip whitespace
#[logos(skip r"//[^\n]*")] // Skip line comments
pub enum TokenKind {
    // === Keywords ===
    #[token("escena")]
    Escena,
    #[token("decir")]
    Decir,
    #[token("opcion")]
    Opcion,

    // === Punctuation ===
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("->")]
    Arrow,

    // === Identifiers ===
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),

    // === Literals ===
    // String literal, raw slice including the delimiting quotes
    #[regex(r#""([^"\\]|\\.)*""#, |lex| lex.slice().to_string())]
    Str(String),

    // End of input (synthesized by the lexer wrapper, never matched)
    Eof,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Escena => write!(f, "'escena'"),
            TokenKind::Decir => write!(f, "'decir'"),
            TokenKind::Opcion => write!(f, "'opcion'"),
            TokenKind::LBrace => write!(f, "'{{'"),
            TokenKind::RBrace => write!(f, "'}}'"),
            TokenKind::Arrow => write!(f, "'->'"),
            TokenKind::Identifier(name) => write!(f, "identifier '{name}'"),
            TokenKind::Str(s) => write!(f, "string {s}"),
            TokenKind::Eof => write!(f, "end of input"),
        }
    }
}
