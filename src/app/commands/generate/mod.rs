//! Generate command: collect deployment parameters, confirm them per service,
//! write env files and optionally the deploy script.

mod outcome;
mod prompts;

pub use outcome::{EnvFileOutcome, EnvFileReport, GenerateOutcome};

use tracing::{debug, info, warn};

use crate::app::AppContext;
use crate::domain::settings::{BOT_TOKEN_FIELD, DEPLOY_SCRIPT_FILE};
use crate::domain::{
    AppError, Confirmation, CredentialSchema, EnvSet, ServiceTarget, ServiceTargets,
    deploy_script,
};
use crate::ports::{ArtifactStore, Console, EnvFileStatus, Prompter};

/// Execute the generate command.
///
/// Services are handled strictly in input order: token, review, confirmation,
/// then write. A rejected review stops the run; env files written for earlier
/// services are kept.
pub fn execute<P, C, S>(
    ctx: &mut AppContext<P, C, S>,
    schema: CredentialSchema,
) -> Result<GenerateOutcome, AppError>
where
    P: Prompter,
    C: Console,
    S: ArtifactStore,
{
    info!(%schema, "collecting deployment parameters");

    let targets = ServiceTargets::parse(&ctx.prompter_mut().input(prompts::SERVICE_LIST)?);
    let inputs = prompts::collect_global_inputs(ctx.prompter_mut(), schema)?;
    let global = schema.assemble(&inputs);
    debug!(services = targets.len(), fields = global.len(), "global fields assembled");

    let mut env_files = Vec::with_capacity(targets.len());
    for target in targets.iter() {
        let token = ctx.prompter_mut().input(&prompts::bot_token_prompt(target.raw()))?;
        ctx.console_mut().blank();
        let env = global.with_field(BOT_TOKEN_FIELD, token.trim());

        if !review(ctx, &env)?.is_accepted() {
            info!(service = target.dir(), "review rejected, stopping");
            ctx.console_mut().line(prompts::REENTER);
            return Ok(GenerateOutcome::Rejected { service: target.dir().to_string(), env_files });
        }

        env_files.push(write_env_file(ctx, target, &env));
    }

    let answer = ctx.prompter_mut().input(prompts::SCRIPT_QUESTION)?;
    let deploy_script = if Confirmation::parse(&answer).is_accepted() {
        let script = deploy_script::render(targets.raw())?;
        let path = ctx.store().write_deploy_script(&script)?;
        ctx.console_mut().line(&format!("Deployment script generated: {DEPLOY_SCRIPT_FILE}"));
        Some(path)
    } else {
        ctx.console_mut().line(prompts::NO_SCRIPT);
        None
    };

    Ok(GenerateOutcome::Completed { env_files, deploy_script })
}

/// Show the set with secrets masked and ask for confirmation.
fn review<P, C, S>(ctx: &mut AppContext<P, C, S>, env: &EnvSet) -> Result<Confirmation, AppError>
where
    P: Prompter,
    C: Console,
    S: ArtifactStore,
{
    let console = ctx.console_mut();
    console.line(prompts::REVIEW_HEADER);
    for line in env.review_lines() {
        console.line(&line);
    }

    let answer = ctx.prompter_mut().input(prompts::REVIEW_QUESTION)?;
    Ok(Confirmation::parse(&answer))
}

/// Write failures are reported and recorded; they never abort the run.
fn write_env_file<P, C, S>(
    ctx: &mut AppContext<P, C, S>,
    target: ServiceTarget<'_>,
    env: &EnvSet,
) -> EnvFileReport
where
    P: Prompter,
    C: Console,
    S: ArtifactStore,
{
    let outcome = match ctx.store().write_env_file(target.dir(), env) {
        Ok(status) => {
            let path = status.path().display();
            match &status {
                EnvFileStatus::Created(_) => {
                    ctx.console_mut().line(&format!("Created {path}"));
                    ctx.console_mut().blank();
                }
                EnvFileStatus::AlreadyExists(_) => {
                    ctx.console_mut().line(&format!("Env file already exists at {path}"));
                }
            }
            EnvFileOutcome::Written(status)
        }
        Err(err) => {
            warn!(service = target.dir(), error = %err, "env file write failed");
            ctx.console_mut().line(&format!("Error: {err}"));
            EnvFileOutcome::Failed(err.to_string())
        }
    };

    EnvFileReport { service: target.dir().to_string(), outcome }
}
