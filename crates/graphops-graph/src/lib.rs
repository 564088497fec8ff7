//! graphops-graph — Neo4j client for the graphops utilities.
//!
//! Every statement the utilities send goes through [`GraphClient`]. The
//! [`Connector`] and [`GraphSession`] traits are the seam the rotation and
//! seeding procedures are written against, so they can run against a live
//! server or an in-memory fake.

pub mod client;
pub mod mutations;
pub mod queries;
pub mod session;

pub use client::{GraphClient, GraphConfig, GraphError};
pub use session::{Connector, GraphSession, Neo4jConnector};
