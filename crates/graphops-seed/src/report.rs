//! Seed run report and its console rendering.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use graphops_core::SchemaSummary;

#[derive(Debug, Clone, Serialize)]
pub struct SeedReport {
    pub run_id: Uuid,
    pub uri: String,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    /// `movies_created` as returned by the seed statement.
    pub movies_created: i64,
    pub schema: SchemaSummary,
}

impl fmt::Display for SeedReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Cleared existing graph data.")?;
        writeln!(f)?;
        writeln!(
            f,
            "Successfully added {} Movie nodes and associated relationships.",
            self.movies_created
        )?;
        writeln!(f)?;
        writeln!(f, "--- Graph Schema Summary ---")?;
        writeln!(f, "Node Labels Found: {}", self.schema.labels_line())?;
        writeln!(
            f,
            "Relationship Types Found: {}",
            self.schema.relationship_types_line()
        )?;
        write!(f, "{}", "-".repeat(35))
    }
}
