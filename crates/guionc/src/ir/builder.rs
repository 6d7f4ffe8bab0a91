//! IR builder - lowers a validated AST into per-scene instruction lists

use super::inst::{IrInstruction, IrProgram, SceneIr};
use crate::frontend::ast::{DialogueLine, Program, Scene};

/// Builds an [`IrProgram`] from a validated AST.
///
/// Callers must only invoke this after a clean semantic pass; lowering itself
/// performs no validation.
pub struct IrBuilder {
    program: IrProgram,
}

impl IrBuilder {
    pub fn new() -> Self {
        Self {
            program: IrProgram::new(),
        }
    }

    /// Lower all scenes, in declaration order
    pub fn build(&mut self, ast: &Program) -> IrProgram {
        for scene in &ast.scenes {
            if self.program.entry.is_none() {
                self.program.entry = Some(scene.name.clone());
            }
            let lowered = self.build_scene(scene);
            self.program.scenes.push(lowered);
        }
        std::mem::take(&mut self.program)
    }

    fn build_scene(&mut self, scene: &Scene) -> SceneIr {
        let mut lowered = SceneIr::new(&scene.name);
        for line in &scene.lines {
            lowered.instructions.push(match line {
                DialogueLine::Say { text, .. } => IrInstruction::Print { text: text.clone() },
                DialogueLine::Option { text, target, .. } => IrInstruction::Jump {
                    prompt: text.clone(),
                    target: target.clone(),
                },
            });
        }
        lowered
    }
}

impl Default for IrBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Lower a validated program to IR
pub fn lower(program: &Program) -> IrProgram {
    IrBuilder::new().build(program)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend;

    fn lower_source(source: &str) -> IrProgram {
        lower(&frontend::parse(source).unwrap())
    }

    #[test]
    fn test_say_and_option_lowering() {
        let ir = lower_source(
            r#"escena inicio { decir "Hola" opcion "seguir" -> final }
               escena final { decir "Fin" }"#,
        );

        assert_eq!(ir.entry.as_deref(), Some("inicio"));
        assert_eq!(ir.scenes.len(), 2);
        assert_eq!(
            ir.scene("inicio").unwrap().instructions,
            vec![
                IrInstruction::Print {
                    text: "Hola".to_string()
                },
                IrInstruction::Jump {
                    prompt: "seguir".to_string(),
                    target: "final".to_string()
                },
            ]
        );
        assert_eq!(
            ir.scene("final").unwrap().instructions,
            vec![IrInstruction::Print {
                text: "Fin".to_string()
            }]
        );
    }

    #[test]
    fn test_scene_order_is_declaration_order() {
        let ir = lower_source("escena tres { }\nescena uno { }\nescena dos { }");
        let names: Vec<&str> = ir.scenes.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["tres", "uno", "dos"]);
        assert_eq!(ir.entry.as_deref(), Some("tres"));
    }

    #[test]
    fn test_instruction_order_is_dialogue_order() {
        // A Say after an Option stays after it; the emitter handles the
        // not-taken path, lowering must not reorder
        let ir = lower_source(
            r#"escena a {
                opcion "salir" -> fin
                decir "Te quedaste"
            }
            escena fin { }"#,
        );
        let insts = &ir.scene("a").unwrap().instructions;
        assert!(matches!(insts[0], IrInstruction::Jump { .. }));
        assert!(matches!(insts[1], IrInstruction::Print { .. }));
    }

    #[test]
    fn test_empty_scene_keeps_entry() {
        let ir = lower_source("escena sola { }");
        assert_eq!(ir.entry.as_deref(), Some("sola"));
        assert!(ir.scene("sola").unwrap().instructions.is_empty());
    }

    #[test]
    fn test_empty_program() {
        let ir = lower_source("");
        assert!(ir.is_empty());
        assert_eq!(ir.entry, None);
    }

    #[test]
    fn test_ir_display() {
        let ir = lower_source(r#"escena a { decir "x" opcion "y" -> a }"#);
        let dump = ir.to_string();
        assert!(dump.contains("scene a:"));
        assert!(dump.contains("PRINT \"x\""));
        assert!(dump.contains("JUMP \"y\" -> a"));
        assert!(dump.contains("entry: a"));
    }
}
