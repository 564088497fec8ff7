//! Read operations: schema summary, counts, and the login check.

use graphops_core::SchemaSummary;
use neo4rs::{query, Query, Row, Txn};

use crate::client::{GraphClient, GraphError};

/// Constant returned by [`GraphClient::greeting`].
pub const VERIFICATION_GREETING: &str = "Connection Successful!";

impl GraphClient {
    // ── Schema ───────────────────────────────────────────────────

    /// Read the distinct node labels and relationship types in one transaction.
    pub async fn schema_summary(&self) -> Result<SchemaSummary, GraphError> {
        let mut txn = self.start_txn().await?;

        let labels = match read_string_list(
            &mut txn,
            query("CALL db.labels() YIELD label RETURN collect(label) AS labels"),
            "labels",
        )
        .await
        {
            Ok(labels) => labels,
            Err(e) => return Err(abandon(txn, e).await),
        };

        let rels = match read_string_list(
            &mut txn,
            query(
                "CALL db.relationshipTypes() YIELD relationshipType
                 RETURN collect(relationshipType) AS rels",
            ),
            "rels",
        )
        .await
        {
            Ok(rels) => rels,
            Err(e) => return Err(abandon(txn, e).await),
        };

        txn.commit().await?;
        Ok(SchemaSummary::new(labels, rels))
    }

    // ── Counts ───────────────────────────────────────────────────

    /// Count every node in the database.
    pub async fn count_all_nodes(&self) -> Result<i64, GraphError> {
        self.count(query("MATCH (n) RETURN count(n) AS cnt")).await
    }

    /// Count nodes carrying a label.
    pub async fn count_nodes(&self, label: &str) -> Result<i64, GraphError> {
        let cypher = format!("MATCH (n:{label}) RETURN count(n) AS cnt");
        self.count(query(&cypher)).await
    }

    /// Count relationships of a type.
    pub async fn count_relationships(&self, rel_type: &str) -> Result<i64, GraphError> {
        let cypher = format!("MATCH ()-[r:{rel_type}]->() RETURN count(r) AS cnt");
        self.count(query(&cypher)).await
    }

    async fn count(&self, q: Query) -> Result<i64, GraphError> {
        match self.query_one(q).await? {
            Some(row) => row
                .get::<i64>("cnt")
                .map_err(|e| GraphError::Deserialization(format!("cnt: {e}"))),
            None => Ok(0),
        }
    }

    // ── Login check ──────────────────────────────────────────────

    /// Round-trip a constant string through the server.
    pub async fn greeting(&self) -> Result<String, GraphError> {
        let row = self
            .query_one(query("RETURN 'Connection Successful!' AS message"))
            .await?
            .ok_or(GraphError::EmptyResult { query: "greeting" })?;
        row.get::<String>("message")
            .map_err(|e| GraphError::Deserialization(format!("message: {e}")))
    }
}

/// Run a query inside a transaction and return its first row.
/// Remaining rows are drained.
pub(crate) async fn txn_single_row(
    txn: &mut Txn,
    q: Query,
    what: &'static str,
) -> Result<Row, GraphError> {
    let mut stream = txn.execute(q).await?;
    let mut first = None;
    while let Some(row) = stream.next(txn.handle()).await? {
        if first.is_none() {
            first = Some(row);
        }
    }
    first.ok_or(GraphError::EmptyResult { query: what })
}

async fn read_string_list(
    txn: &mut Txn,
    q: Query,
    column: &'static str,
) -> Result<Vec<String>, GraphError> {
    let row = txn_single_row(txn, q, column).await?;
    row.get::<Vec<String>>(column)
        .map_err(|e| GraphError::Deserialization(format!("{column}: {e}")))
}

/// Roll back after a failed step and hand the original error back.
pub(crate) async fn abandon(txn: Txn, error: GraphError) -> GraphError {
    if let Err(rollback) = txn.rollback().await {
        tracing::warn!(error = %rollback, "Rollback failed");
    }
    error
}
