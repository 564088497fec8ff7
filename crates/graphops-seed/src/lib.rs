//! graphops-seed: Wipe-and-reload of the movie sample graph.
//!
//! A run validates the dataset, wipes the database, checks the wipe, loads
//! the dataset in one write transaction, and reads back the schema summary.
//! The first failure ends the run; the connection is closed either way.

pub mod error;
pub mod report;

pub use error::{SeedError, SeedStage};
pub use report::SeedReport;

use chrono::Utc;
use graphops_core::{Dataset, SchemaSummary};
use graphops_graph::{Connector, GraphConfig, GraphSession};
use uuid::Uuid;

use crate::error::{at, Result};

/// Run a full seeding pass against the server in `config`.
pub async fn seed_graph<C: Connector>(
    connector: &C,
    config: &GraphConfig,
    dataset: &Dataset,
) -> Result<SeedReport> {
    dataset.validate()?;

    let run_id = Uuid::new_v4();
    let started_at = Utc::now();
    tracing::info!(
        %run_id,
        uri = %config.uri,
        database = config.database_name(),
        "Starting seed run"
    );

    let session = connector
        .connect(config)
        .await
        .map_err(at(SeedStage::Connect))?;
    let outcome = seed_with(&session, dataset).await;
    session.close();

    let (movies_created, schema) = outcome.map_err(|e| {
        let cause = std::error::Error::source(&e).map(ToString::to_string);
        tracing::error!(%run_id, error = %e, cause = ?cause, "Seed run failed");
        e
    })?;

    Ok(SeedReport {
        run_id,
        uri: config.uri.clone(),
        started_at,
        finished_at: Utc::now(),
        movies_created,
        schema,
    })
}

/// The steps that run on an open session.
async fn seed_with<S: GraphSession>(
    session: &S,
    dataset: &Dataset,
) -> Result<(i64, SchemaSummary)> {
    session.wipe().await.map_err(at(SeedStage::Wipe))?;

    let remaining = session
        .count_all_nodes()
        .await
        .map_err(at(SeedStage::WipeCheck))?;
    if remaining != 0 {
        return Err(SeedError::WipeIncomplete { remaining });
    }

    let movies_created = session.seed(dataset).await.map_err(at(SeedStage::Seed))?;
    let expected = dataset.movies.len();
    if usize::try_from(movies_created).ok() != Some(expected) {
        return Err(SeedError::ChecksumMismatch {
            expected,
            actual: movies_created,
        });
    }
    tracing::info!(movies_created, "Dataset loaded");

    let schema = session
        .schema_summary()
        .await
        .map_err(at(SeedStage::SchemaRead))?;
    if !schema.same_as(&SchemaSummary::expected_for_movies()) {
        tracing::warn!(
            labels = %schema.labels_line(),
            relationship_types = %schema.relationship_types_line(),
            "Schema differs from the movie sample"
        );
    }

    Ok((movies_created, schema))
}
