//! Recursive descent parser for Guion

use super::ast::{DialogueLine, Program, Scene};
use super::lexer::Lexer;
use super::token::{Token, TokenKind};
use crate::common::{CompileError, CompileResult, Span};

/// Recursive descent parser with one token of lookahead
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
}

impl<'a> Parser<'a> {
    /// Create a new parser for the given source
    pub fn new(source: &'a str) -> CompileResult<Self> {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token()?;
        Ok(Self { lexer, current })
    }

    /// Parse a complete program (one or more scenes until end of input)
    pub fn parse(&mut self) -> CompileResult<Program> {
        let mut scenes = Vec::new();
        while !self.at_end() {
            scenes.push(self.parse_scene()?);
        }
        Ok(Program::new(scenes))
    }

    // =========================================================================
    // Helper methods
    // =========================================================================

    fn at_end(&self) -> bool {
        matches!(self.current.kind, TokenKind::Eof)
    }

    fn advance(&mut self) -> CompileResult<Token> {
        let prev = std::mem::replace(&mut self.current, self.lexer.next_token()?);
        Ok(prev)
    }

    fn check(&self, kind: &TokenKind) -> bool {
        std::mem::discriminant(&self.current.kind) == std::mem::discriminant(kind)
    }

    fn expect(&mut self, kind: TokenKind) -> CompileResult<Token> {
        if self.check(&kind) {
            self.advance()
        } else {
            Err(CompileError::parser(
                format!("expected {}, found {}", kind, self.current.kind),
                self.current.span,
            ))
        }
    }

    fn expect_identifier(&mut self) -> CompileResult<(String, Span)> {
        let token = self.expect(TokenKind::Identifier(String::new()))?;
        match token.kind {
            TokenKind::Identifier(name) => Ok((name, token.span)),
            _ => unreachable!(),
        }
    }

    fn expect_string(&mut self) -> CompileResult<(String, Span)> {
        let token = self.expect(TokenKind::Str(String::new()))?;
        match token.kind {
            TokenKind::Str(raw) => Ok((strip_quotes(&raw), token.span)),
            _ => unreachable!(),
        }
    }

    // =========================================================================
    // Grammar rules
    // =========================================================================

    /// `scene := "escena" IDENT "{" dialogueLine* "}"`
    fn parse_scene(&mut self) -> CompileResult<Scene> {
        let keyword = self.expect(TokenKind::Escena)?;
        let (name, name_span) = self.expect_identifier()?;
        self.expect(TokenKind::LBrace)?;

        let mut lines = Vec::new();
        while !self.check(&TokenKind::RBrace) && !self.at_end() {
            lines.push(self.parse_dialogue_line()?);
        }
        self.expect(TokenKind::RBrace)?;

        Ok(Scene::new(name, lines, keyword.span.merge(name_span)))
    }

    /// `dialogueLine := sayStmt | optionStmt`
    fn parse_dialogue_line(&mut self) -> CompileResult<DialogueLine> {
        match &self.current.kind {
            TokenKind::Decir => self.parse_say(),
            TokenKind::Opcion => self.parse_option(),
            other => Err(CompileError::parser(
                format!("expected 'decir' or 'opcion', found {other}"),
                self.current.span,
            )),
        }
    }

    /// `sayStmt := "decir" STRING`
    fn parse_say(&mut self) -> CompileResult<DialogueLine> {
        let keyword = self.expect(TokenKind::Decir)?;
        let (text, text_span) = self.expect_string()?;
        Ok(DialogueLine::Say {
            text,
            span: keyword.span.merge(text_span),
        })
    }

    /// `optionStmt := "opcion" STRING "->" IDENT`
    fn parse_option(&mut self) -> CompileResult<DialogueLine> {
        let keyword = self.expect(TokenKind::Opcion)?;
        let (text, _) = self.expect_string()?;
        self.expect(TokenKind::Arrow)?;
        let (target, target_span) = self.expect_identifier()?;
        Ok(DialogueLine::Option {
            text,
            target,
            span: keyword.span.merge(target_span),
        })
    }
}

/// Strip the delimiting quotes from a string literal's raw slice
fn strip_quotes(raw: &str) -> String {
    raw[1..raw.len() - 1].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(source: &str) -> Program {
        Parser::new(source).unwrap().parse().unwrap()
    }

    #[test]
    fn test_parse_say_and_option() {
        let program = parse(
            r#"escena inicio {
                decir "Hola"
                opcion "seguir" -> final
            }
            escena final {
                decir "Fin"
            }"#,
        );

        assert_eq!(program.scenes.len(), 2);
        assert_eq!(program.scenes[0].name, "inicio");
        assert_eq!(program.scenes[1].name, "final");

        let lines = &program.scenes[0].lines;
        assert_eq!(lines.len(), 2);
        assert!(matches!(&lines[0], DialogueLine::Say { text, .. } if text == "Hola"));
        assert!(matches!(
            &lines[1],
            DialogueLine::Option { text, target, .. } if text == "seguir" && target == "final"
        ));
    }

    #[test]
    fn test_string_quotes_stripped() {
        let program = parse(r#"escena a { decir "Texto con espacios" }"#);
        assert!(matches!(
            &program.scenes[0].lines[0],
            DialogueLine::Say { text, .. } if text == "Texto con espacios"
        ));
    }

    #[test]
    fn test_empty_scene() {
        let program = parse("escena vacia { }");
        assert_eq!(program.scenes[0].name, "vacia");
        assert!(program.scenes[0].lines.is_empty());
    }

    #[test]
    fn test_scene_line_recorded() {
        let program = parse("escena uno { }\nescena dos { }\nescena tres { }");
        assert_eq!(program.scenes[0].span.line, 1);
        assert_eq!(program.scenes[1].span.line, 2);
        assert_eq!(program.scenes[2].span.line, 3);
    }

    #[test]
    fn test_missing_brace_is_error() {
        let result = Parser::new("escena inicio decir \"Hola\" }")
            .unwrap()
            .parse();
        assert!(matches!(result, Err(CompileError::Parser { .. })));
    }

    #[test]
    fn test_option_missing_arrow_is_error() {
        let result = Parser::new(r#"escena a { opcion "ir" b }"#).unwrap().parse();
        assert!(matches!(result, Err(CompileError::Parser { .. })));
    }

    #[test]
    fn test_stray_statement_is_error() {
        let result = Parser::new(r#"escena a { final }"#).unwrap().parse();
        assert!(matches!(result, Err(CompileError::Parser { .. })));
    }
}
