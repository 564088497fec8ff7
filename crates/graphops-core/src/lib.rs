//! graphops-core: Shared types, configuration, and error handling for graphops.
//!
//! This crate provides the foundational pieces used by both utilities:
//! - The movie sample dataset (Person, Movie, ACTED_IN) and its validation
//! - The parameterized seed statement built from a dataset
//! - The schema summary type reported after seeding
//! - Layered settings (file, environment, CLI overrides)
//! - Common error types

pub mod config;
pub mod dataset;
pub mod error;
pub mod schema;
pub mod statement;

pub use config::{Neo4jSettings, RotationSettings, Settings};
pub use dataset::{Credit, Dataset, Movie, Person};
pub use error::CoreError;
pub use schema::SchemaSummary;
pub use statement::{SeedParam, SeedStatement};

/// Node label for people.
pub const PERSON_LABEL: &str = "Person";

/// Node label for movies.
pub const MOVIE_LABEL: &str = "Movie";

/// Relationship type connecting a Person to a Movie they appeared in.
pub const ACTED_IN: &str = "ACTED_IN";
