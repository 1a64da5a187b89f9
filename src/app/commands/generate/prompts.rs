//! Prompt texts and the global input step.

use crate::domain::settings::BOT_TOKEN_FIELD;
use crate::domain::{AppError, CredentialSchema, GlobalInputs};
use crate::ports::Prompter;

pub(super) const SERVICE_LIST: &str = "Enter path names separated by commas";
pub(super) const SUPERUSER_ID: &str = "Enter superuser id";
pub(super) const DB_HOST: &str = "Enter database host";
pub(super) const DB_PORT: &str = "Enter database port";
pub(super) const REVIEW_HEADER: &str = "Please review the entered variables:";
pub(super) const REVIEW_QUESTION: &str = "Are these variables correct? (yes/no)";
pub(super) const REENTER: &str = "Please re-enter the variables.";
pub(super) const SCRIPT_QUESTION: &str = "Do you want to generate the deployment script? (yes/no)";
pub(super) const NO_SCRIPT: &str = "No deployment script generated.";

pub(super) fn password_prompt(schema: CredentialSchema) -> String {
    format!("Enter {} password", schema.label())
}

pub(super) fn bot_token_prompt(raw_service: &str) -> String {
    format!("Enter {BOT_TOKEN_FIELD} for {raw_service}")
}

/// Superuser id is kept verbatim; the other answers are trimmed.
pub(super) fn collect_global_inputs<P: Prompter>(
    prompter: &mut P,
    schema: CredentialSchema,
) -> Result<GlobalInputs, AppError> {
    let superuser_id = prompter.input(SUPERUSER_ID)?;
    let password = prompter.secret(&password_prompt(schema))?.trim().to_string();
    let host = prompter.input(DB_HOST)?.trim().to_string();
    let port = prompter.input(DB_PORT)?.trim().to_string();

    Ok(GlobalInputs { superuser_id, password, host, port })
}
