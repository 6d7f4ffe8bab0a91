//! AST node definitions for Guion scripts

use crate::common::Span;

/// A complete script: the ordered list of declared scenes.
///
/// Declaration order is semantically meaningful: it fixes the entry scene and
/// the order of emitted procedures.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub scenes: Vec<Scene>,
}

impl Program {
    pub fn new(scenes: Vec<Scene>) -> Self {
        Self { scenes }
    }
}

/// A named block of dialogue lines
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub name: String,
    pub lines: Vec<DialogueLine>,
    /// Span of the scene header (`escena <name>`)
    pub span: Span,
}

impl Scene {
    pub fn new(name: impl Into<String>, lines: Vec<DialogueLine>, span: Span) -> Self {
        Self {
            name: name.into(),
            lines,
            span,
        }
    }
}

/// One line of dialogue inside a scene.
///
/// `text` holds the string literal's content with the delimiting quotes
/// already stripped.
#[derive(Debug, Clone, PartialEq)]
pub enum DialogueLine {
    /// `decir "<text>"` — narration printed verbatim
    Say { text: String, span: Span },
    /// `opcion "<text>" -> <target>` — a branch point offering the user a
    /// choice; `target` is unresolved until semantic analysis
    Option {
        text: String,
        target: String,
        span: Span,
    },
}

impl DialogueLine {
    pub fn span(&self) -> Span {
        match self {
            DialogueLine::Say { span, .. } | DialogueLine::Option { span, .. } => *span,
        }
    }
}
