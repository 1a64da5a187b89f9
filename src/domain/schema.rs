//! Credential schemas for the two supported database backends.

use std::fmt;

use super::env_set::EnvSet;
use super::settings::{DEFAULT_DEVMODE, DEFAULT_TIMEZONE};

/// Which backend credential layout is active for a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialSchema {
    Mysql,
    Postgresql,
}

/// Where the value of a schema field comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldSource {
    SuperuserId,
    Password,
    Host,
    Port,
    Constant(&'static str),
}

/// Values the operator enters once per run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlobalInputs {
    pub superuser_id: String,
    pub password: String,
    pub host: String,
    pub port: String,
}

const MYSQL_FIELDS: &[(&str, FieldSource)] = &[
    ("SUPERUSER_ID", FieldSource::SuperuserId),
    ("DEVMODE", FieldSource::Constant(DEFAULT_DEVMODE)),
    ("TZ", FieldSource::Constant(DEFAULT_TIMEZONE)),
    ("MYSQL_USER", FieldSource::SuperuserId),
    ("MYSQL_PASSWORD", FieldSource::Password),
    ("MYSQL_ROOT_PASSWORD", FieldSource::Password),
    ("DB_HOST", FieldSource::Host),
    ("DB_PORT", FieldSource::Port),
    ("MYSQL_DATABASE", FieldSource::SuperuserId),
];

const POSTGRESQL_FIELDS: &[(&str, FieldSource)] = &[
    ("SUPERUSER_ID", FieldSource::SuperuserId),
    ("DEVMODE", FieldSource::Constant(DEFAULT_DEVMODE)),
    ("TZ", FieldSource::Constant(DEFAULT_TIMEZONE)),
    ("POSTGRES_USER", FieldSource::SuperuserId),
    ("POSTGRES_PASSWORD", FieldSource::Password),
    ("POSTGRES_DB", FieldSource::SuperuserId),
    ("DB_HOST", FieldSource::Host),
    ("DB_PORT", FieldSource::Port),
];

impl CredentialSchema {
    /// Select the schema from the presence of the `-p` flag.
    pub fn from_postgres_flag(postgres: bool) -> Self {
        if postgres { CredentialSchema::Postgresql } else { CredentialSchema::Mysql }
    }

    pub fn name(self) -> &'static str {
        match self {
            CredentialSchema::Mysql => "mysql",
            CredentialSchema::Postgresql => "postgresql",
        }
    }

    /// Human-facing label used in the password prompt.
    pub fn label(self) -> &'static str {
        match self {
            CredentialSchema::Mysql => "MySQL",
            CredentialSchema::Postgresql => "PostgreSQL",
        }
    }

    /// Ordered field table for this schema.
    pub fn fields(self) -> &'static [(&'static str, FieldSource)] {
        match self {
            CredentialSchema::Mysql => MYSQL_FIELDS,
            CredentialSchema::Postgresql => POSTGRESQL_FIELDS,
        }
    }

    /// Build the global field set in the schema's declared order.
    pub fn assemble(self, inputs: &GlobalInputs) -> EnvSet {
        let mut set = EnvSet::new();
        for (key, source) in self.fields() {
            let value = match source {
                FieldSource::SuperuserId => inputs.superuser_id.as_str(),
                FieldSource::Password => inputs.password.as_str(),
                FieldSource::Host => inputs.host.as_str(),
                FieldSource::Port => inputs.port.as_str(),
                FieldSource::Constant(value) => *value,
            };
            set.insert(*key, value);
        }
        set
    }
}

impl fmt::Display for CredentialSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
