//! Template Compiler - IR to render-function code generation
//!
//! This crate lowers a validated template IR into the AST of a render function
//! that rebuilds the UI tree through a runtime library on every render:
//! - **IR**: template nodes, directives and metadata (`ir` module)
//! - **Lowering**: tree walk, directives, data bags, slots (`lower` module)
//! - **Assembly**: render-function wrapper and imports (`assemble` module)
//! - **AST**: target syntax tree and printer (`ast` module)
//!
//! # Example
//!
//! ```rust,ignore
//! use tmpl_compiler::{Compiler, ir::TemplateDocument};
//!
//! let doc: TemplateDocument = serde_json::from_str(source)?;
//! let output = Compiler::default().compile(&doc.root, &doc.metadata)?;
//! println!("{}", output.code);
//! ```

#![warn(rust_2018_idioms)]

pub mod assemble;
pub mod ast;
pub mod bind;
pub mod config;
pub mod error;
pub mod ir;
pub mod lower;
pub mod runtime;

pub use ast::{Expression, PrettyPrint, Program};
pub use bind::{ComponentBinder, ExpressionBinder};
pub use config::RuntimeApi;
pub use error::{CompileError, CompileResult};
pub use lower::{Lowerer, MemoContext};

use assemble::DependencyNames;
use ir::{IrNode, Metadata};

/// Result of compiling one template
#[derive(Debug, Clone, PartialEq)]
pub struct CompilationOutput {
    /// Program AST
    pub program: Program,
    /// Printed source text
    pub code: String,
    /// Component dependencies imported by the program, in order
    pub dependencies: Vec<String>,
}

/// Main compiler entry point
pub struct Compiler {
    api: RuntimeApi,
    binder: Box<dyn ExpressionBinder>,
}

impl Default for Compiler {
    fn default() -> Self {
        Self::new(RuntimeApi::default())
    }
}

impl Compiler {
    /// Compiler with the default component binder
    pub fn new(api: RuntimeApi) -> Self {
        let binder = Box::new(ComponentBinder::new(api.component_param.clone()));
        Self { api, binder }
    }

    /// Replace the expression binder
    pub fn with_binder(mut self, binder: Box<dyn ExpressionBinder>) -> Self {
        self.binder = binder;
        self
    }

    /// Compile a template.
    ///
    /// Each call starts a fresh handler memo context and dependency name
    /// table, so independent compiles never share slot numbering.
    pub fn compile(&self, root: &IrNode, metadata: &Metadata) -> CompileResult<CompilationOutput> {
        let mut names = DependencyNames::from_metadata(metadata);
        log::debug!(
            "compiling template with {} component dependencies",
            names.len()
        );

        let mut memo = MemoContext::new();
        let root_expr =
            Lowerer::new(&self.api, self.binder.as_ref(), &mut memo, &mut names).transform(root)?;
        log::debug!("lowered template using {} handler slots", memo.slots_used());

        let program = assemble::assemble(root_expr, &names, &self.api);
        let dependencies = names.specifiers();
        let code = program.pretty_print();
        Ok(CompilationOutput {
            program,
            code,
            dependencies,
        })
    }
}
