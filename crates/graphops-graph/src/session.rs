//! The connection seam used by the rotation and seeding procedures.
//!
//! A [`Connector`] opens one [`GraphSession`] per configuration. Whoever
//! opens a session owns it and must call [`GraphSession::close`] exactly
//! once, on success and failure paths alike.

use graphops_core::{Dataset, SchemaSummary};

use crate::client::{GraphClient, GraphConfig, GraphError};

/// Opens sessions against a Neo4j server.
#[allow(async_fn_in_trait)]
pub trait Connector {
    type Session: GraphSession;

    async fn connect(&self, config: &GraphConfig) -> Result<Self::Session, GraphError>;
}

/// The statements the utilities issue over one acquired connection.
#[allow(async_fn_in_trait)]
pub trait GraphSession {
    /// Delete every node and relationship.
    async fn wipe(&self) -> Result<(), GraphError>;

    async fn count_all_nodes(&self) -> Result<i64, GraphError>;

    /// Load a dataset in one write transaction; returns `movies_created`.
    async fn seed(&self, dataset: &Dataset) -> Result<i64, GraphError>;

    async fn schema_summary(&self) -> Result<SchemaSummary, GraphError>;

    /// Change the authenticated account's password.
    async fn change_password(&self, current: &str, new: &str) -> Result<(), GraphError>;

    /// Round-trip the verification greeting.
    async fn greeting(&self) -> Result<String, GraphError>;

    /// Release the connection.
    fn close(self);
}

/// Connector backed by [`GraphClient`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Neo4jConnector;

impl Connector for Neo4jConnector {
    type Session = GraphClient;

    async fn connect(&self, config: &GraphConfig) -> Result<GraphClient, GraphError> {
        GraphClient::connect(config).await
    }
}

impl GraphSession for GraphClient {
    async fn wipe(&self) -> Result<(), GraphError> {
        self.wipe_graph().await
    }

    async fn count_all_nodes(&self) -> Result<i64, GraphError> {
        GraphClient::count_all_nodes(self).await
    }

    async fn seed(&self, dataset: &Dataset) -> Result<i64, GraphError> {
        self.seed_dataset(dataset).await
    }

    async fn schema_summary(&self) -> Result<SchemaSummary, GraphError> {
        GraphClient::schema_summary(self).await
    }

    async fn change_password(&self, current: &str, new: &str) -> Result<(), GraphError> {
        GraphClient::change_password(self, current, new).await
    }

    async fn greeting(&self) -> Result<String, GraphError> {
        GraphClient::greeting(self).await
    }

    fn close(self) {
        GraphClient::close(self)
    }
}
