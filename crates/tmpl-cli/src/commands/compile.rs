//! `tmplc compile`: lower an IR document to a render-function module.

use anyhow::Context;
use std::path::PathBuf;
use tmpl_compiler::ir::TemplateDocument;
use tmpl_compiler::Compiler;

use crate::config::CompilerConfig;
use crate::Emit;

pub struct CompileArgs {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub config: PathBuf,
    pub emit: Emit,
}

pub fn execute(args: CompileArgs) -> anyhow::Result<()> {
    let config = CompilerConfig::load_optional(&args.config)?;
    let source = std::fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;

    let rendered = compile_document(&source, &config, args.emit)
        .with_context(|| format!("Failed to compile {}", args.input.display()))?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            log::info!("wrote {}", path.display());
        }
        None => print!("{}", rendered),
    }
    Ok(())
}

/// Parse, compile and render one IR document
pub fn compile_document(source: &str, config: &CompilerConfig, emit: Emit) -> anyhow::Result<String> {
    let doc: TemplateDocument =
        serde_json::from_str(source).context("Malformed IR document")?;
    let output = Compiler::new(config.runtime.clone()).compile(&doc.root, &doc.metadata)?;

    match emit {
        Emit::Js => Ok(output.code),
        Emit::Ast => {
            let mut json = serde_json::to_string_pretty(&output.program)?;
            json.push('\n');
            Ok(json)
        }
    }
}
