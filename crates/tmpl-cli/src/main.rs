//! Template compiler CLI
//!
//! Reads a serialized template IR document, compiles it to a render-function
//! module and writes the result.

mod commands;
mod config;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use output::ColorMode;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tmplc")]
#[command(about = "Template compiler: lowers template IR to a render function", long_about = None)]
#[command(version)]
struct Cli {
    /// Colored diagnostics
    #[arg(long, global = true, value_enum, default_value_t = ColorMode::Auto)]
    color: ColorMode,

    #[command(subcommand)]
    command: Commands,
}

/// What `compile` writes
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Emit {
    /// Printed module source
    Js,
    /// Program AST as JSON
    Ast,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile an IR document (JSON) into a render-function module
    Compile {
        /// Input IR document
        input: PathBuf,
        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Configuration file with a [runtime] table
        #[arg(short, long, default_value = "tmplc.toml")]
        config: PathBuf,
        /// Output kind
        #[arg(long, value_enum, default_value = "js")]
        emit: Emit,
    },

    /// Print the effective runtime configuration
    Config {
        /// Configuration file with a [runtime] table
        #[arg(short, long, default_value = "tmplc.toml")]
        config: PathBuf,
    },
}

fn main() {
    env_logger::Builder::from_default_env()
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();
    let choice = output::resolve_color_choice(cli.color);

    let result = match cli.command {
        Commands::Compile {
            input,
            output,
            config,
            emit,
        } => commands::compile::execute(commands::compile::CompileArgs {
            input,
            output,
            config,
            emit,
        }),
        Commands::Config { config } => commands::config::execute(&config),
    };

    if let Err(err) = result {
        let mut out = output::StyledOutput::new(choice);
        out.error_report(&err);
        std::process::exit(1);
    }
}
