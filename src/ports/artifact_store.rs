use std::path::{Path, PathBuf};

use crate::domain::{AppError, EnvSet};

/// Result of persisting one service's env file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvFileStatus {
    /// A new file was written.
    Created(PathBuf),
    /// A file was already present and left untouched.
    AlreadyExists(PathBuf),
}

impl EnvFileStatus {
    pub fn path(&self) -> &Path {
        match self {
            EnvFileStatus::Created(path) | EnvFileStatus::AlreadyExists(path) => path,
        }
    }
}

/// Port for persisting generated artifacts.
pub trait ArtifactStore {
    /// Write `<service_dir>/env/.env` unless it already exists.
    fn write_env_file(&self, service_dir: &str, env: &EnvSet) -> Result<EnvFileStatus, AppError>;

    /// Write the deploy script, replacing any previous one.
    fn write_deploy_script(&self, content: &str) -> Result<PathBuf, AppError>;
}
