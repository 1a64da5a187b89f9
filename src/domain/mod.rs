pub mod deploy_script;
pub mod env_set;
pub mod error;
pub mod review;
pub mod schema;
pub mod service;
pub mod settings;

pub use env_set::EnvSet;
pub use error::AppError;
pub use review::Confirmation;
pub use schema::{CredentialSchema, FieldSource, GlobalInputs};
pub use service::{ServiceTarget, ServiceTargets};
