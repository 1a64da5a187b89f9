//! deployenv: interactive generator for per-service env files and a
//! docker-compose deploy script.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;


use std::path::Path;

use adapters::FilesystemArtifactStore;
use app::{AppContext, commands::generate};
use ports::{Console, Prompter};

pub use app::commands::generate::{EnvFileOutcome, EnvFileReport, GenerateOutcome};
pub use domain::{AppError, CredentialSchema, EnvSet, GlobalInputs, ServiceTargets};
pub use ports::EnvFileStatus;

/// Run the generate workflow with artifacts rooted at `root`.
///
/// Env files land under `<root>/<service>/env/.env` and the deploy script
/// at `<root>/deploy_services.sh`.
pub fn generate_at<P, C>(
    root: &Path,
    schema: CredentialSchema,
    prompter: P,
    console: C,
) -> Result<GenerateOutcome, AppError>
where
    P: Prompter,
    C: Console,
{
    let store = FilesystemArtifactStore::new(root.to_path_buf());
    let mut ctx = AppContext::new(prompter, console, store);
    generate::execute(&mut ctx, schema)
}
