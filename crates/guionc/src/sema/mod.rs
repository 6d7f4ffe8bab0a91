//! Semantic analysis
//!
//! Validates a parsed program: scene names must be unique and every option
//! target must name a declared scene (forward references allowed). All
//! problems are collected into one list; an empty list is the green light
//! for lowering.

mod analyzer;
mod symbol_table;

pub use analyzer::{analyze, SceneReference, SemanticAnalyzer};
pub use symbol_table::{Symbol, SymbolKind, SymbolTable};
