//! Lexer implementation using logos

use super::token::{Token, TokenKind};
use crate::common::{CompileError, CompileResult, Span};
use logos::Logos;

/// Lexer for Guion source code
pub struct Lexer<'a> {
    inner: logos::Lexer<'a, TokenKind>,
    /// Byte offset of the start of each line, for 1-based line lookup
    line_starts: Vec<usize>,
    at_eof: bool,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source code
    pub fn new(source: &'a str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(
            source
                .bytes()
                .enumerate()
                .filter(|&(_, b)| b == b'\n')
                .map(|(i, _)| i + 1),
        );
        Self {
            inner: TokenKind::lexer(source),
            line_starts,
            at_eof: false,
        }
    }

    /// 1-based line containing the given byte offset
    fn line_at(&self, offset: usize) -> u32 {
        self.line_starts.partition_point(|&start| start <= offset) as u32
    }

    fn span_at(&self, range: std::ops::Range<usize>) -> Span {
        let line = self.line_at(range.start);
        Span::new(range.start, range.end, line)
    }

    /// Get the next token
    pub fn next_token(&mut self) -> CompileResult<Token> {
        if self.at_eof {
            let len = self.inner.source().len();
            return Ok(Token::new(TokenKind::Eof, self.span_at(len..len)));
        }

        match self.inner.next() {
            Some(Ok(kind)) => {
                let span = self.span_at(self.inner.span());
                Ok(Token::new(kind, span))
            }
            Some(Err(())) => {
                let span = self.span_at(self.inner.span());
                Err(CompileError::lexer(
                    format!("unexpected character '{}'", self.inner.slice()),
                    span,
                ))
            }
            None => {
                self.at_eof = true;
                let len = self.inner.source().len();
                Ok(Token::new(TokenKind::Eof, self.span_at(len..len)))
            }
        }
    }

    /// Tokenize the entire source and return all tokens
    pub fn tokenize_all(mut self) -> CompileResult<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let is_eof = matches!(token.kind, TokenKind::Eof);
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        Ok(tokens)
    }

    /// Get the source being lexed
    pub fn source(&self) -> &'a str {
        self.inner.source()
    }
}
