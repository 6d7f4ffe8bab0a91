//! Guion compiler CLI
//!
//! Usage: guionc <input> [-o <output>]

use anyhow::Context;
use clap::Parser as ClapParser;
use guion_compiler::common::{CompileError, DiagnosticReporter};
use guion_compiler::frontend::Lexer;
use guion_compiler::{backend, frontend, ir, sema};
use std::fs;
use std::path::PathBuf;
use std::process;

#[derive(ClapParser, Debug)]
#[command(name = "guionc")]
#[command(version)]
#[command(about = "Compiler for the Guion branching-dialogue scripting language", long_about = None)]
struct Args {
    /// Input script file
    #[arg(required = true)]
    input: PathBuf,

    /// Output Python file (defaults to the input path with a .py extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Dump tokens (for debugging)
    #[arg(long)]
    dump_tokens: bool,

    /// Dump AST (for debugging)
    #[arg(long)]
    dump_ast: bool,

    /// Dump IR (for debugging)
    #[arg(long)]
    dump_ir: bool,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let source = fs::read_to_string(&args.input)
        .with_context(|| format!("cannot read {}", args.input.display()))?;
    let filename = args.input.display().to_string();

    let mut reporter = DiagnosticReporter::new();
    let file_id = reporter.add_file(&filename, &source);

    let output_path = args.output.clone().unwrap_or_else(|| {
        let mut path = args.input.clone();
        path.set_extension("py");
        path
    });

    if args.verbose {
        eprintln!("Compilando {} -> {}", args.input.display(), output_path.display());
    }

    if args.dump_tokens {
        let tokens = Lexer::new(&source)
            .tokenize_all()
            .unwrap_or_else(|e| fail(&reporter, file_id, &e));
        eprintln!("=== Tokens ===");
        for token in &tokens {
            eprintln!("{:?} @ line {}", token.kind, token.span.line);
        }
        eprintln!("=== End Tokens ===\n");
    }

    let program = frontend::parse(&source).unwrap_or_else(|e| fail(&reporter, file_id, &e));

    if args.dump_ast {
        eprintln!("=== AST ===");
        eprintln!("{program:#?}");
        eprintln!("=== End AST ===\n");
    }

    let errors = sema::analyze(&program);
    if !errors.is_empty() {
        eprintln!("Errores semánticos:");
        for error in &errors {
            reporter.report_semantic(file_id, error);
        }
        process::exit(1);
    }

    if args.verbose {
        eprintln!("Sin errores semánticos");
    }

    let lowered = ir::lower(&program);

    if args.dump_ir {
        eprintln!("=== IR ===");
        eprintln!("{lowered}");
        eprintln!("=== End IR ===\n");
    }

    let code = backend::emit(&lowered);
    fs::write(&output_path, code)
        .with_context(|| format!("cannot write {}", output_path.display()))?;

    if args.verbose {
        eprintln!("Generado: {}", output_path.display());
    }

    Ok(())
}

fn fail(reporter: &DiagnosticReporter, file_id: usize, error: &CompileError) -> ! {
    reporter.report_error(file_id, error);
    process::exit(1);
}
