//! Error types for the graphops-rotate crate.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RotateError {
    #[error("Graph error: {0}")]
    Graph(#[from] graphops_graph::GraphError),

    #[error("{0}")]
    Config(#[from] graphops_core::CoreError),

    #[error("New password must differ from the current password")]
    UnchangedPassword,

    #[error("New password must not be empty")]
    EmptyPassword,

    #[error("Unexpected verification response: {got:?}")]
    UnexpectedGreeting { got: String },
}

pub type Result<T> = std::result::Result<T, RotateError>;
