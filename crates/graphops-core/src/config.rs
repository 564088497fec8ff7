//! Configuration management for graphops utilities.
//!
//! Configuration is loaded from (in priority order):
//! 1. Command-line flags (applied with [`Settings::with_overrides`])
//! 2. Environment variables (GRAPHOPS__ prefix, `__` separator)
//! 3. Config file (graphops.toml, `[neo4j]` and `[rotation]` sections)
//! 4. Defaults
//!
//! Passwords have no default.

use serde::Deserialize;

use crate::error::CoreError;

/// Top-level settings shared by both utilities.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub neo4j: Neo4jSettings,

    #[serde(default)]
    pub rotation: RotationSettings,
}

/// Connection settings for the Neo4j server.
#[derive(Clone, Deserialize)]
pub struct Neo4jSettings {
    /// Bolt URI (default: bolt://localhost:7687).
    #[serde(default = "default_uri")]
    pub uri: String,

    /// Account name (default: neo4j).
    #[serde(default = "default_user")]
    pub user: String,

    /// Current password for the account.
    #[serde(default)]
    pub password: Option<String>,

    /// Data database; the server default when unset.
    #[serde(default)]
    pub database: Option<String>,

    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    #[serde(default = "default_fetch_size")]
    pub fetch_size: usize,
}

/// Settings used only by credential rotation.
#[derive(Clone, Default, Deserialize)]
pub struct RotationSettings {
    /// Password to rotate to.
    #[serde(default)]
    pub new_password: Option<String>,
}

/// Values supplied on the command line; `None` leaves the loaded value alone.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub uri: Option<String>,
    pub user: Option<String>,
    pub password: Option<String>,
    pub database: Option<String>,
    pub new_password: Option<String>,
}

fn default_uri() -> String {
    "bolt://localhost:7687".to_string()
}

fn default_user() -> String {
    "neo4j".to_string()
}

fn default_max_connections() -> u32 {
    4
}

fn default_fetch_size() -> usize {
    200
}

impl Default for Neo4jSettings {
    fn default() -> Self {
        Self {
            uri: default_uri(),
            user: default_user(),
            password: None,
            database: None,
            max_connections: default_max_connections(),
            fetch_size: default_fetch_size(),
        }
    }
}

impl std::fmt::Debug for Neo4jSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Neo4jSettings")
            .field("uri", &self.uri)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("database", &self.database)
            .field("max_connections", &self.max_connections)
            .field("fetch_size", &self.fetch_size)
            .finish()
    }
}

impl std::fmt::Debug for RotationSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotationSettings")
            .field(
                "new_password",
                &self.new_password.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}

impl Settings {
    /// Load settings from `<file_prefix>.toml` (optional) and GRAPHOPS__ variables.
    pub fn load(file_prefix: &str) -> Result<Self, CoreError> {
        let cfg = config::Config::builder()
            .add_source(config::File::with_name(file_prefix).required(false))
            .add_source(
                config::Environment::with_prefix("GRAPHOPS")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings: Settings = cfg.try_deserialize()?;
        tracing::debug!(uri = %settings.neo4j.uri, user = %settings.neo4j.user, "Loaded settings");
        Ok(settings)
    }

    /// Apply command-line values on top of the loaded ones.
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        if let Some(uri) = overrides.uri {
            self.neo4j.uri = uri;
        }
        if let Some(user) = overrides.user {
            self.neo4j.user = user;
        }
        if let Some(password) = overrides.password {
            self.neo4j.password = Some(password);
        }
        if let Some(database) = overrides.database {
            self.neo4j.database = Some(database);
        }
        if let Some(new_password) = overrides.new_password {
            self.rotation.new_password = Some(new_password);
        }
        self
    }
}

impl Neo4jSettings {
    /// The configured password; empty counts as unset.
    pub fn password(&self) -> Result<&str, CoreError> {
        non_empty(&self.password).ok_or(CoreError::MissingSetting {
            key: "neo4j.password",
            env: "GRAPHOPS__NEO4J__PASSWORD",
        })
    }

    /// The data database, treating an empty name as the server default.
    pub fn database(&self) -> Option<&str> {
        non_empty(&self.database)
    }
}

impl RotationSettings {
    pub fn new_password(&self) -> Result<&str, CoreError> {
        non_empty(&self.new_password).ok_or(CoreError::MissingSetting {
            key: "rotation.new_password",
            env: "GRAPHOPS__ROTATION__NEW_PASSWORD",
        })
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
