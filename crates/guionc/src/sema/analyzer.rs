//! Semantic analyzer - scene declaration and reference validation

use super::symbol_table::SymbolTable;
use crate::common::{SemanticError, Span};
use crate::frontend::ast::{DialogueLine, Program};

/// An option target recorded during the body pass and validated only after
/// every scene declaration is known. This two-phase shape is what makes
/// forward references legal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneReference {
    /// Scene containing the option statement
    pub scene: String,
    /// Target named by the option statement
    pub target: String,
    /// Line of the option statement itself
    pub line: u32,
    pub span: Span,
}

/// Two-pass validator over a parsed program.
///
/// Errors accumulate; analysis never stops at the first problem, so one run
/// reports every duplicate and every dangling reference.
pub struct SemanticAnalyzer {
    table: SymbolTable,
    references: Vec<SceneReference>,
    errors: Vec<SemanticError>,
}

impl SemanticAnalyzer {
    pub fn new() -> Self {
        Self {
            table: SymbolTable::new(),
            references: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Validate a whole program: declare all scenes, collect option targets,
    /// then resolve them against the finished table.
    pub fn analyze(&mut self, program: &Program) {
        self.declare_scenes(program);
        self.collect_references(program);
        self.resolve_references();
    }

    /// Declaration pass: register every scene in order. A duplicate is
    /// recorded against the later declaration and registration continues.
    fn declare_scenes(&mut self, program: &Program) {
        for scene in &program.scenes {
            if !self.table.add_scene(&scene.name) {
                self.errors.push(SemanticError::DuplicateScene {
                    name: scene.name.clone(),
                    line: scene.span.line,
                    span: scene.span,
                });
            }
        }
    }

    /// Body pass: record every option target, unvalidated
    fn collect_references(&mut self, program: &Program) {
        for scene in &program.scenes {
            for line in &scene.lines {
                if let DialogueLine::Option { target, span, .. } = line {
                    self.references.push(SceneReference {
                        scene: scene.name.clone(),
                        target: target.clone(),
                        line: span.line,
                        span: *span,
                    });
                }
            }
        }
    }

    /// Resolution pass: every recorded target must name a declared scene
    fn resolve_references(&mut self) {
        for reference in &self.references {
            if !self.table.scene_exists(&reference.target) {
                self.errors.push(SemanticError::UndefinedScene {
                    name: reference.target.clone(),
                    line: reference.line,
                    span: reference.span,
                });
            }
        }
    }

    pub fn errors(&self) -> &[SemanticError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<SemanticError> {
        self.errors
    }

    /// All deferred references collected during the body pass
    pub fn references(&self) -> &[SceneReference] {
        &self.references
    }
}

impl Default for SemanticAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate a program and return the accumulated error list; empty means the
/// program is semantically sound.
pub fn analyze(program: &Program) -> Vec<SemanticError> {
    let mut analyzer = SemanticAnalyzer::new();
    analyzer.analyze(program);
    analyzer.into_errors()
}
