//! Guion Compiler - branching-dialogue scripts to runnable Python
//!
//! Guion is a small scripting language for interactive fiction: a script is a
//! sequence of named scenes, each a list of `decir` (say) lines and `opcion`
//! (option) branch points. The compiler turns a script into a Python program
//! with one callable function per scene.
//!
//! ## Architecture
//!
//! - **Frontend** (`frontend/`): logos lexer and recursive descent parser
//! - **Sema** (`sema/`): scene symbol table and two-pass reference validation
//! - **IR** (`ir/`): per-scene instruction lists plus the entry-scene marker
//! - **Backend** (`backend/`): Python source emission
//! - **Driver** (`driver/`): pipeline orchestration
//! - **Common** (`common/`): errors, spans, diagnostics

pub mod backend;
pub mod common;
pub mod driver;
pub mod frontend;
pub mod ir;
pub mod sema;

// Re-exports for convenience
pub use backend::emit;
pub use common::{CompileError, CompileResult, DiagnosticReporter, SemanticError, Span};
pub use driver::compile;
pub use frontend::parse;
pub use ir::lower;
pub use sema::analyze;
