//! Error types for the graphops-seed crate.

use std::fmt;

use thiserror::Error;

/// The step of a seeding run an error happened in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedStage {
    Connect,
    Wipe,
    WipeCheck,
    Seed,
    SchemaRead,
}

impl fmt::Display for SeedStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Connect => "connect",
            Self::Wipe => "wipe",
            Self::WipeCheck => "wipe check",
            Self::Seed => "seed",
            Self::SchemaRead => "schema read",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug)]
pub enum SeedError {
    #[error("{0}")]
    Dataset(#[from] graphops_core::CoreError),

    #[error("{stage} failed")]
    Graph {
        stage: SeedStage,
        #[source]
        source: graphops_graph::GraphError,
    },

    #[error("Wipe incomplete: {remaining} nodes remain")]
    WipeIncomplete { remaining: i64 },

    #[error("Seed checksum mismatch: expected {expected} movies, statement reported {actual}")]
    ChecksumMismatch { expected: usize, actual: i64 },
}

impl SeedError {
    /// The stage a graph error happened in, if any.
    pub fn stage(&self) -> Option<SeedStage> {
        match self {
            Self::Graph { stage, .. } => Some(*stage),
            Self::WipeIncomplete { .. } => Some(SeedStage::WipeCheck),
            Self::ChecksumMismatch { .. } => Some(SeedStage::Seed),
            Self::Dataset(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, SeedError>;

/// Attach a stage to a graph error.
pub(crate) fn at(stage: SeedStage) -> impl FnOnce(graphops_graph::GraphError) -> SeedError {
    move |source| SeedError::Graph { stage, source }
}
