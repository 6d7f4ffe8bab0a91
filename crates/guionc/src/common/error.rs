//! Error types and diagnostic reporting

use codespan_reporting::diagnostic::{Diagnostic, Label};
use codespan_reporting::files::SimpleFiles;
use codespan_reporting::term;
use codespan_reporting::term::termcolor::{ColorChoice, StandardStream};
use thiserror::Error;

use super::Span;

/// A semantic error detected while validating a parsed script.
///
/// These are accumulated, never raised one at a time: the analyzer visits the
/// whole program and hands the full list back to the caller. The `Display`
/// form is the user-facing diagnostic line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SemanticError {
    /// A scene identifier declared more than once; `line` is the line of the
    /// second declaration
    #[error("[Línea {line}] Error: Escena '{name}' duplicada")]
    DuplicateScene { name: String, line: u32, span: Span },

    /// An option statement whose target names no scene anywhere in the
    /// program; `line` is the option statement's own line
    #[error("[Línea {line}] Error: Escena '{name}' no existe")]
    UndefinedScene { name: String, line: u32, span: Span },
}

impl SemanticError {
    pub fn span(&self) -> Span {
        match self {
            Self::DuplicateScene { span, .. } | Self::UndefinedScene { span, .. } => *span,
        }
    }

    /// The bare message, without the `[Línea N] Error:` prefix
    pub fn message(&self) -> String {
        match self {
            Self::DuplicateScene { name, .. } => format!("Escena '{name}' duplicada"),
            Self::UndefinedScene { name, .. } => format!("Escena '{name}' no existe"),
        }
    }
}

/// Compile error with source location
#[derive(Error, Debug)]
pub enum CompileError {
    #[error("Lexer error at {span:?}: {message}")]
    Lexer { message: String, span: Span },

    #[error("Parser error at {span:?}: {message}")]
    Parser { message: String, span: Span },

    #[error("{}", .0.iter().map(ToString::to_string).collect::<Vec<_>>().join("\n"))]
    Semantic(Vec<SemanticError>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CompileError {
    pub fn lexer(message: impl Into<String>, span: Span) -> Self {
        Self::Lexer {
            message: message.into(),
            span,
        }
    }

    pub fn parser(message: impl Into<String>, span: Span) -> Self {
        Self::Parser {
            message: message.into(),
            span,
        }
    }
}

pub type CompileResult<T> = Result<T, CompileError>;

/// Diagnostic reporter for pretty error output
pub struct DiagnosticReporter {
    files: SimpleFiles<String, String>,
    writer: StandardStream,
    config: term::Config,
}

impl DiagnosticReporter {
    pub fn new() -> Self {
        Self {
            files: SimpleFiles::new(),
            writer: StandardStream::stderr(ColorChoice::Auto),
            config: term::Config::default(),
        }
    }

    pub fn add_file(&mut self, name: impl Into<String>, source: impl Into<String>) -> usize {
        self.files.add(name.into(), source.into())
    }

    pub fn report_error(&self, file_id: usize, error: &CompileError) {
        match error {
            CompileError::Lexer { message, span } => self.emit(
                Diagnostic::error()
                    .with_message("Error léxico")
                    .with_labels(vec![
                        Label::primary(file_id, span.start..span.end).with_message(message),
                    ]),
            ),

            CompileError::Parser { message, span } => self.emit(
                Diagnostic::error()
                    .with_message("Error de sintaxis")
                    .with_labels(vec![
                        Label::primary(file_id, span.start..span.end).with_message(message),
                    ]),
            ),

            CompileError::Semantic(errors) => {
                for err in errors {
                    self.report_semantic(file_id, err);
                }
            }

            CompileError::Io(err) => {
                self.emit(Diagnostic::error().with_message(format!("IO error: {err}")));
            }
        }
    }

    /// Report one semantic error; the headline keeps the canonical
    /// `[Línea N] Error: ...` form
    pub fn report_semantic(&self, file_id: usize, error: &SemanticError) {
        let span = error.span();
        self.emit(
            Diagnostic::error()
                .with_message(error.to_string())
                .with_labels(vec![
                    Label::primary(file_id, span.start..span.end).with_message(error.message()),
                ]),
        );
    }

    fn emit(&self, diagnostic: Diagnostic<usize>) {
        let _ = term::emit(&mut self.writer.lock(), &self.config, &self.files, &diagnostic);
    }
}

impl Default for DiagnosticReporter {
    fn default() -> Self {
        Self::new()
    }
}
