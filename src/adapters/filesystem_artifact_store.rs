use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::domain::settings::{DEPLOY_SCRIPT_FILE, ENV_DIR, ENV_FILE};
use crate::domain::{AppError, EnvSet};
use crate::ports::{ArtifactStore, EnvFileStatus};

/// Filesystem-based artifact store rooted at the invocation directory.
#[derive(Debug, Clone)]
pub struct FilesystemArtifactStore {
    root: PathBuf,
}

impl FilesystemArtifactStore {
    /// Create an artifact store for the given root directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Create an artifact store for the current directory.
    pub fn current() -> Result<Self, AppError> {
        let cwd = std::env::current_dir()?;
        Ok(Self::new(cwd))
    }

    /// Path reported to the operator, relative to the root.
    fn env_file_display_path(service_dir: &str) -> PathBuf {
        Path::new(service_dir).join(ENV_DIR).join(ENV_FILE)
    }
}

impl ArtifactStore for FilesystemArtifactStore {
    fn write_env_file(&self, service_dir: &str, env: &EnvSet) -> Result<EnvFileStatus, AppError> {
        let display_path = Self::env_file_display_path(service_dir);
        let env_dir = self.root.join(service_dir).join(ENV_DIR);
        fs::create_dir_all(&env_dir)?;

        // create_new: an existing env file is never reopened for writing.
        let file = OpenOptions::new().write(true).create_new(true).open(env_dir.join(ENV_FILE));
        let mut file = match file {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
                debug!(path = %display_path.display(), "env file already present, skipping");
                return Ok(EnvFileStatus::AlreadyExists(display_path));
            }
            Err(err) => return Err(err.into()),
        };

        file.write_all(env.to_env_file_contents().as_bytes())?;
        file.flush()?;
        info!(path = %display_path.display(), fields = env.len(), "env file created");
        Ok(EnvFileStatus::Created(display_path))
    }

    fn write_deploy_script(&self, content: &str) -> Result<PathBuf, AppError> {
        let script_path = self.root.join(DEPLOY_SCRIPT_FILE);
        fs::write(&script_path, content)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(&script_path)?.permissions();
            perms.set_mode(0o755);
            fs::set_permissions(&script_path, perms)?;
        }

        info!(path = %script_path.display(), "deploy script written");
        Ok(PathBuf::from(DEPLOY_SCRIPT_FILE))
    }
}
