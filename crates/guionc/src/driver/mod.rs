//! Compilation driver and pipeline orchestration

use crate::common::{CompileError, CompileResult};
use crate::{backend, frontend, ir, sema};

/// Run the whole pipeline over one source text: parse, validate, lower, emit.
///
/// Semantic problems surface as a single [`CompileError::Semantic`] carrying
/// the full accumulated list; lowering and emission never run in that case,
/// so no partial output is ever produced.
pub fn compile(source: &str) -> CompileResult<String> {
    let program = frontend::parse(source)?;

    let errors = sema::analyze(&program);
    if !errors.is_empty() {
        return Err(CompileError::Semantic(errors));
    }

    let lowered = ir::lower(&program);
    Ok(backend::emit(&lowered))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::SemanticError;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_compile_end_to_end() {
        let output = compile(
            r#"escena inicio { decir "Hola" opcion "seguir" -> final }
               escena final { decir "Fin" }"#,
        )
        .unwrap();
        assert!(output.starts_with("# Guión interactivo generado"));
        assert!(output.contains("def inicio():"));
        assert!(output.contains("def final():"));
        assert!(output.ends_with("if __name__ == '__main__':\n    inicio()"));
    }

    #[test]
    fn test_semantic_failure_produces_no_output() {
        let err = compile("escena a { opcion \"ir\" -> b }\nescena a { }").unwrap_err();
        let CompileError::Semantic(errors) = err else {
            panic!("expected semantic failure");
        };
        assert_eq!(errors.len(), 2);
        assert!(matches!(&errors[0], SemanticError::DuplicateScene { .. }));
        assert!(matches!(&errors[1], SemanticError::UndefinedScene { .. }));
    }

    #[test]
    fn test_syntax_failure_stops_before_analysis() {
        let err = compile("escena { decir }").unwrap_err();
        assert!(matches!(err, CompileError::Parser { .. }));
    }

    #[test]
    fn test_empty_source_compiles_to_bare_header() {
        assert_eq!(compile("").unwrap(), "# Guión interactivo generado\n");
    }
}
