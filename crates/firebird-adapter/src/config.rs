//! Adapter configuration: connection settings and the boolean-domain value.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;

fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    3050
}

fn default_encoding() -> String {
    // Firebird's name for the Windows-1252 code page.
    "WIN1252".to_string()
}

/// Adapter configuration.
///
/// Loaded from YAML or constructed directly. The boolean-domain value rides
/// along here so every call site reads one explicit configuration instead of
/// process-global state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdapterConfig {
    /// Database host.
    #[serde(default = "default_host")]
    pub host: String,

    /// Database port (default: 3050).
    #[serde(default = "default_port")]
    pub port: u16,

    /// Database path or alias, e.g. `/var/lib/firebird/data/app.fdb`.
    pub database: String,

    /// Username.
    pub user: String,

    /// Password. Never serialized back out.
    #[serde(default, skip_serializing)]
    pub password: String,

    /// Connection character set, under its Firebird name (default: WIN1252).
    #[serde(default = "default_encoding")]
    pub encoding: String,

    /// The domain that marks smallint columns as logical booleans.
    #[serde(default)]
    pub boolean_domain: BooleanDomain,
}

impl AdapterConfig {
    /// Load configuration from a YAML file and validate it.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_yaml(&text)?;
        info!(
            host = %config.host,
            port = config.port,
            database = %config.database,
            "loaded adapter configuration"
        );
        Ok(config)
    }

    /// Parse configuration from a YAML string and validate it.
    pub fn from_yaml(text: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate required fields.
    pub fn validate(&self) -> Result<()> {
        if self.database.trim().is_empty() {
            return Err(crate::error::AdapterError::config(
                "database must not be empty",
            ));
        }
        if self.user.trim().is_empty() {
            return Err(crate::error::AdapterError::config("user must not be empty"));
        }
        if self.encoding.trim().is_empty() {
            return Err(crate::error::AdapterError::config(
                "encoding must not be empty",
            ));
        }
        Ok(())
    }
}

/// Firebird has no native boolean type before version 3; booleans are
/// smallint columns constrained by a named domain and mapped through
/// `{true: 1, false: 0}` literals. Overriding this value switches the
/// backing representation without code changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BooleanDomain {
    /// Domain name to match against `rdb$field_source` of introspected
    /// columns, and the type name emitted for the abstract boolean kind.
    pub name: String,

    /// Backing SQL type.
    pub sql_type: String,

    /// Declared limit of the backing type.
    pub limit: Option<u32>,

    /// Literal stored for `true`.
    pub true_value: i16,

    /// Literal stored for `false`.
    pub false_value: i16,
}

impl Default for BooleanDomain {
    fn default() -> Self {
        Self {
            name: "smallint".to_string(),
            sql_type: "smallint".to_string(),
            limit: Some(1),
            true_value: 1,
            false_value: 0,
        }
    }
}
