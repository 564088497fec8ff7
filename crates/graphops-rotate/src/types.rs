//! Request and report types for credential rotation.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use graphops_core::Settings;
use graphops_graph::GraphConfig;

use crate::error::{Result, RotateError};

/// Administrative database where account statements run.
pub const SYSTEM_DATABASE: &str = "system";

/// What to rotate: the current login and the password to move to.
#[derive(Clone)]
pub struct RotationRequest {
    /// Server, account, current password, and the data database used for
    /// verification.
    pub login: GraphConfig,
    pub new_password: String,
}

impl RotationRequest {
    /// Build a request, refusing empty or unchanged passwords.
    pub fn new(login: GraphConfig, new_password: impl Into<String>) -> Result<Self> {
        let new_password = new_password.into();
        if new_password.is_empty() {
            return Err(RotateError::EmptyPassword);
        }
        if new_password == login.password {
            return Err(RotateError::UnchangedPassword);
        }
        Ok(Self {
            login,
            new_password,
        })
    }

    /// Build a request from loaded settings: login from `[neo4j]`, target
    /// password from `[rotation]`.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let login = GraphConfig::from_settings(&settings.neo4j)?;
        Self::new(login, settings.rotation.new_password()?)
    }

    /// Current credentials against the `system` database.
    pub fn admin_config(&self) -> GraphConfig {
        self.login.on_database(Some(SYSTEM_DATABASE))
    }

    /// New credentials against the data database.
    pub fn verify_config(&self) -> GraphConfig {
        self.login.with_password(&self.new_password)
    }
}

impl fmt::Debug for RotationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RotationRequest")
            .field("login", &self.login)
            .field("new_password", &"<redacted>")
            .finish()
    }
}

/// Outcome of one rotation phase. Errors are kept as text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PhaseOutcome {
    Succeeded { detail: String },
    Failed { error: String },
}

impl PhaseOutcome {
    pub fn succeeded(detail: impl Into<String>) -> Self {
        Self::Succeeded {
            detail: detail.into(),
        }
    }

    pub fn failed(error: &RotateError) -> Self {
        Self::Failed {
            error: error.to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Succeeded { .. })
    }
}

/// Result of a rotation run: both phases, always.
#[derive(Debug, Clone, Serialize)]
pub struct RotationReport {
    pub run_id: Uuid,
    pub uri: String,
    pub user: String,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    /// Password change against the `system` database.
    pub change: PhaseOutcome,
    /// Login with the new password.
    pub verify: PhaseOutcome,
}

impl RotationReport {
    /// True only when both phases succeeded.
    pub fn succeeded(&self) -> bool {
        self.change.is_success() && self.verify.is_success()
    }
}

impl fmt::Display for RotationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.change {
            PhaseOutcome::Succeeded { .. } => {
                writeln!(f, "Password change query executed successfully.")?
            }
            PhaseOutcome::Failed { error } => {
                writeln!(f, "An error occurred during password change: {error}")?
            }
        }

        writeln!(f)?;
        writeln!(f, "--- Testing new connection with the new password ---")?;

        match &self.verify {
            PhaseOutcome::Succeeded { detail } => write!(f, "Server response: {detail}"),
            PhaseOutcome::Failed { error } => {
                write!(f, "An error occurred during connection test: {error}")
            }
        }
    }
}
