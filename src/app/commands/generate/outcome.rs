use std::path::PathBuf;

use crate::ports::EnvFileStatus;

/// What happened to one service's env file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvFileOutcome {
    Written(EnvFileStatus),
    /// The write failed; the run continued with the next service.
    Failed(String),
}

/// Per-service record of the writer step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvFileReport {
    /// Trimmed service directory.
    pub service: String,
    pub outcome: EnvFileOutcome,
}

impl EnvFileReport {
    pub fn is_created(&self) -> bool {
        matches!(self.outcome, EnvFileOutcome::Written(EnvFileStatus::Created(_)))
    }
}

/// Result of a generate run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateOutcome {
    /// Every service was confirmed. `deploy_script` is set when the script was written.
    Completed { env_files: Vec<EnvFileReport>, deploy_script: Option<PathBuf> },
    /// The operator rejected the review for `service`; later services were skipped.
    ///
    /// Env files written earlier in the same run stay on disk.
    Rejected { service: String, env_files: Vec<EnvFileReport> },
}

impl GenerateOutcome {
    pub fn env_files(&self) -> &[EnvFileReport] {
        match self {
            GenerateOutcome::Completed { env_files, .. }
            | GenerateOutcome::Rejected { env_files, .. } => env_files,
        }
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, GenerateOutcome::Rejected { .. })
    }
}
