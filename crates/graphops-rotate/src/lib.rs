//! graphops-rotate: Neo4j account password rotation.
//!
//! Changes the password with the current credentials against the `system`
//! database, then logs in with the new password and round-trips a
//! greeting. Both phases always run and report independently.

pub mod error;
pub mod types;

pub use error::RotateError;
pub use types::{PhaseOutcome, RotationReport, RotationRequest, SYSTEM_DATABASE};

use chrono::Utc;
use graphops_graph::queries::VERIFICATION_GREETING;
use graphops_graph::{Connector, GraphSession};
use uuid::Uuid;

/// Run both rotation phases and report each one.
pub async fn rotate_credentials<C: Connector>(
    connector: &C,
    request: &RotationRequest,
) -> RotationReport {
    let run_id = Uuid::new_v4();
    let started_at = Utc::now();
    tracing::info!(
        %run_id,
        uri = %request.login.uri,
        user = %request.login.user,
        "Starting credential rotation"
    );

    let change = match change_password(connector, request).await {
        Ok(()) => {
            tracing::info!(%run_id, "Password changed");
            PhaseOutcome::succeeded("password changed")
        }
        Err(e) => {
            tracing::error!(%run_id, error = %e, "Password change failed");
            PhaseOutcome::failed(&e)
        }
    };

    let verify = match verify_new_password(connector, request).await {
        Ok(greeting) => {
            tracing::info!(%run_id, "New password verified");
            PhaseOutcome::succeeded(greeting)
        }
        Err(e) => {
            tracing::error!(%run_id, error = %e, "New password verification failed");
            PhaseOutcome::failed(&e)
        }
    };

    RotationReport {
        run_id,
        uri: request.login.uri.clone(),
        user: request.login.user.clone(),
        started_at,
        finished_at: Utc::now(),
        change,
        verify,
    }
}

/// Phase one: `ALTER CURRENT USER` with the current credentials.
pub async fn change_password<C: Connector>(
    connector: &C,
    request: &RotationRequest,
) -> error::Result<()> {
    let session = connector.connect(&request.admin_config()).await?;
    let outcome = session
        .change_password(&request.login.password, &request.new_password)
        .await;
    session.close();
    Ok(outcome?)
}

/// Phase two: log in with the new password and return the server's greeting.
pub async fn verify_new_password<C: Connector>(
    connector: &C,
    request: &RotationRequest,
) -> error::Result<String> {
    let session = connector.connect(&request.verify_config()).await?;
    let outcome = session.greeting().await;
    session.close();

    let greeting = outcome?;
    if greeting != VERIFICATION_GREETING {
        return Err(RotateError::UnexpectedGreeting { got: greeting });
    }
    Ok(greeting)
}
