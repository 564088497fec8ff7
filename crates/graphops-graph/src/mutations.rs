//! Write operations: wipe, dataset load, and password change.

use graphops_core::statement::MOVIES_CREATED;
use graphops_core::{Dataset, SeedParam, SeedStatement};
use neo4rs::{query, Query};

use crate::client::{GraphClient, GraphError};
use crate::queries::{abandon, txn_single_row};

impl GraphClient {
    // ── Wipe ─────────────────────────────────────────────────────

    /// Delete every node and relationship in the database.
    ///
    /// Runs as its own auto-commit statement so it is durable before any
    /// later transaction starts.
    pub async fn wipe_graph(&self) -> Result<(), GraphError> {
        self.run(query("MATCH (n) DETACH DELETE n")).await?;
        tracing::info!("Cleared existing graph data");
        Ok(())
    }

    // ── Seeding ──────────────────────────────────────────────────

    /// Load a dataset in one write transaction.
    /// Returns the `movies_created` count reported by the statement.
    pub async fn seed_dataset(&self, dataset: &Dataset) -> Result<i64, GraphError> {
        let statement = SeedStatement::build(dataset);
        let q = seed_query(&statement);

        let mut txn = self.start_txn().await?;
        let created = match txn_single_row(&mut txn, q, "seed dataset").await {
            Ok(row) => row
                .get::<i64>(MOVIES_CREATED)
                .map_err(|e| GraphError::Deserialization(format!("{MOVIES_CREATED}: {e}"))),
            Err(e) => Err(e),
        };

        match created {
            Ok(count) => {
                txn.commit().await?;
                tracing::info!(
                    movies_created = count,
                    people = dataset.people.len(),
                    credits = dataset.credit_count(),
                    "Seed transaction committed"
                );
                Ok(count)
            }
            Err(e) => Err(abandon(txn, e).await),
        }
    }

    // ── Account ──────────────────────────────────────────────────

    /// Change the password of the authenticated account.
    ///
    /// Must be issued against the `system` database. The server rejects the
    /// statement when `current` is wrong.
    pub async fn change_password(&self, current: &str, new: &str) -> Result<(), GraphError> {
        let q = query("ALTER CURRENT USER SET PASSWORD FROM $current TO $new")
            .param("current", current)
            .param("new", new);

        self.run(q).await?;
        tracing::info!("Password change statement executed");
        Ok(())
    }
}

/// Bind a generated seed statement into a neo4rs query.
fn seed_query(statement: &SeedStatement) -> Query {
    statement
        .params
        .iter()
        .fold(query(&statement.cypher), |q, (key, value)| match value {
            SeedParam::Text(text) => q.param(key, text.clone()),
            SeedParam::Integer(number) => q.param(key, *number),
        })
}

