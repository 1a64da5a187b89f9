//! CLI Adapter.

use std::io::{self, IsTerminal};

use clap::Parser;

use crate::adapters::{FilesystemArtifactStore, LinePrompter, StdoutConsole, TerminalPrompter};
use crate::app::AppContext;
use crate::app::commands::generate::{self, GenerateOutcome};
use crate::domain::{AppError, CredentialSchema};
use crate::ports::Prompter;

#[derive(Parser)]
#[command(name = "deployenv")]
#[command(version)]
#[command(
    about = "Generate per-service env files and a docker-compose deploy script",
    long_about = None
)]
struct Cli {
    /// Use the PostgreSQL credential layout instead of MySQL
    #[arg(short = 'p')]
    postgres: bool,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    let schema = CredentialSchema::from_postgres_flag(cli.postgres);

    match run_generate(schema) {
        Ok(_) => {}
        Err(AppError::Interrupted) => {
            println!("\n{}", AppError::Interrupted);
            std::process::exit(AppError::Interrupted.exit_code());
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}

fn run_generate(schema: CredentialSchema) -> Result<GenerateOutcome, AppError> {
    if io::stdin().is_terminal() {
        generate_with(TerminalPrompter::new(), schema)
    } else {
        generate_with(LinePrompter::new(io::stdin().lock(), io::stdout()), schema)
    }
}

fn generate_with<P: Prompter>(
    prompter: P,
    schema: CredentialSchema,
) -> Result<GenerateOutcome, AppError> {
    let store = FilesystemArtifactStore::current()?;
    let mut ctx = AppContext::new(prompter, StdoutConsole, store);
    generate::execute(&mut ctx, schema)
}
