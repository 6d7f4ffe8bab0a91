//! IR instruction definitions

/// One lowered dialogue instruction.
///
/// Instruction order within a scene equals dialogue order in the source and
/// is load-bearing: anything after a `Jump` runs only when the option was not
/// taken, which the emitter encodes as control flow rather than reordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IrInstruction {
    /// Write `text` to standard output, with a trailing newline
    Print { text: String },
    /// Show `prompt`, read one line, and invoke `target` on non-blank input
    Jump { prompt: String, target: String },
}

impl std::fmt::Display for IrInstruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IrInstruction::Print { text } => write!(f, "PRINT \"{text}\""),
            IrInstruction::Jump { prompt, target } => {
                write!(f, "JUMP \"{prompt}\" -> {target}")
            }
        }
    }
}

/// The lowered instruction list of one scene
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneIr {
    pub name: String,
    pub instructions: Vec<IrInstruction>,
}

impl SceneIr {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            instructions: Vec::new(),
        }
    }
}

/// A lowered program: scenes in declaration order plus the entry marker.
///
/// `entry` is the first declared scene; it is `None` only for a program with
/// no scenes at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IrProgram {
    pub scenes: Vec<SceneIr>,
    pub entry: Option<String>,
}

impl IrProgram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a scene's instruction list by name
    pub fn scene(&self, name: &str) -> Option<&SceneIr> {
        self.scenes.iter().find(|scene| scene.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }
}

impl std::fmt::Display for IrProgram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for scene in &self.scenes {
            writeln!(f, "scene {}:", scene.name)?;
            for inst in &scene.instructions {
                writeln!(f, "  {inst}")?;
            }
        }
        if let Some(entry) = &self.entry {
            writeln!(f, "entry: {entry}")?;
        }
        Ok(())
    }
}
