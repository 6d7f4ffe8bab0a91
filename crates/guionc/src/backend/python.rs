//! Python code emitter
//!
//! Renders an [`IrProgram`] as a runnable Python script: one function per
//! scene, in declaration order, plus a `__main__` trailer that starts the
//! entry scene. The generated file is importable without side effects.

use crate::ir::{IrInstruction, IrProgram, SceneIr};

const INDENT: &str = "    ";

fn indent(depth: usize) -> String {
    INDENT.repeat(depth)
}

/// Stateless emitter; the indent depth travels as an explicit parameter
/// through each emission call.
pub struct PythonEmitter;

impl PythonEmitter {
    pub fn new() -> Self {
        Self
    }

    /// Render the whole program as Python source text
    pub fn emit(&self, ir: &IrProgram) -> String {
        let mut lines = vec!["# Guión interactivo generado".to_string(), String::new()];

        for scene in &ir.scenes {
            lines.extend(self.emit_scene(scene, 1));
            lines.push(String::new());
        }

        if let Some(entry) = &ir.entry {
            lines.push("if __name__ == '__main__':".to_string());
            lines.push(format!("{INDENT}{entry}()"));
        }

        lines.join("\n")
    }

    /// Emit one scene as a function whose body sits at `depth`
    fn emit_scene(&self, scene: &SceneIr, depth: usize) -> Vec<String> {
        let mut lines = vec![format!("def {}():", scene.name)];

        if scene.instructions.is_empty() {
            // The function must still exist and be callable
            lines.push(format!("{}pass", indent(depth)));
            return lines;
        }

        for inst in &scene.instructions {
            lines.extend(self.emit_instruction(inst, depth));
        }
        lines
    }

    /// Emit one instruction at the given indent depth.
    ///
    /// A `Jump` whose input is blank falls through to whatever follows it in
    /// the same scene, so the taken branch is the only indented part.
    fn emit_instruction(&self, inst: &IrInstruction, depth: usize) -> Vec<String> {
        match inst {
            IrInstruction::Print { text } => {
                vec![format!("{}print(\"{}\")", indent(depth), text)]
            }
            IrInstruction::Jump { prompt, target } => vec![
                format!("{}opcion = input(\"{} -> \")", indent(depth), prompt),
                format!("{}if opcion.strip():", indent(depth)),
                format!("{}{}()", indent(depth + 1), target),
            ],
        }
    }
}

impl Default for PythonEmitter {
    fn default() -> Self {
        Self::new()
    }
}

/// Render an IR program as Python source text
pub fn emit(ir: &IrProgram) -> String {
    PythonEmitter::new().emit(ir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{frontend, ir};
    use pretty_assertions::assert_eq;

    fn emit_source(source: &str) -> String {
        emit(&ir::lower(&frontend::parse(source).unwrap()))
    }

    #[test]
    fn test_full_script() {
        let output = emit_source(
            r#"escena inicio { decir "Hola" opcion "seguir" -> final }
               escena final { decir "Fin" }"#,
        );
        assert_eq!(
            output,
            "# Guión interactivo generado\n\
             \n\
             def inicio():\n\
             \x20   print(\"Hola\")\n\
             \x20   opcion = input(\"seguir -> \")\n\
             \x20   if opcion.strip():\n\
             \x20       final()\n\
             \n\
             def final():\n\
             \x20   print(\"Fin\")\n\
             \n\
             if __name__ == '__main__':\n\
             \x20   inicio()"
        );
    }

    #[test]
    fn test_empty_scene_emits_pass() {
        let output = emit_source("escena vacia { }");
        assert!(output.contains("def vacia():\n    pass"));
    }

    #[test]
    fn test_say_after_option_runs_on_fallthrough() {
        let output = emit_source(
            r#"escena a {
                opcion "salir" -> fin
                decir "Te quedaste"
            }
            escena fin { }"#,
        );
        // The trailing print sits after the if block, at function depth, so
        // blank input reaches it
        assert_eq!(
            output
                .lines()
                .skip(2)
                .take(5)
                .collect::<Vec<_>>()
                .join("\n"),
            "def a():\n\
             \x20   opcion = input(\"salir -> \")\n\
             \x20   if opcion.strip():\n\
             \x20       fin()\n\
             \x20   print(\"Te quedaste\")"
        );
    }

    #[test]
    fn test_functions_in_declaration_order() {
        let output = emit_source("escena tres { }\nescena uno { }\nescena dos { }");
        let pos = |name: &str| output.find(&format!("def {name}():")).unwrap();
        assert!(pos("tres") < pos("uno"));
        assert!(pos("uno") < pos("dos"));
        // Entry trailer names the first declared scene
        assert!(output.ends_with("if __name__ == '__main__':\n    tres()"));
    }

    #[test]
    fn test_empty_program_has_no_trailer() {
        let output = emit_source("");
        assert_eq!(output, "# Guión interactivo generado\n");
        assert!(!output.contains("__main__"));
    }
}
