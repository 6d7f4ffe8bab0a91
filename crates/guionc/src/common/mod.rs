//! Common infrastructure shared across the compiler pipeline

mod error;
mod span;

pub use error::{CompileError, CompileResult, DiagnosticReporter, SemanticError};
pub use span::Span;
