//! Fixed values baked into every generated artifact.

/// Timezone written to every env file.
pub const DEFAULT_TIMEZONE: &str = "Europe/Moscow";

/// DEVMODE value written to every env file.
pub const DEFAULT_DEVMODE: &str = "false";

/// Directory inside each service that holds the env file.
pub const ENV_DIR: &str = "env";

/// Env file name inside [`ENV_DIR`].
pub const ENV_FILE: &str = ".env";

/// Deploy script file name, written to the invocation directory.
pub const DEPLOY_SCRIPT_FILE: &str = "deploy_services.sh";

/// Per-service field collected once for every service target.
pub const BOT_TOKEN_FIELD: &str = "TELEGRAM_BOT_TOKEN";
