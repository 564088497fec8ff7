//! Neo4j connection management and the shared graph client.

use graphops_core::{CoreError, Neo4jSettings};
use neo4rs::{ConfigBuilder, Graph, Query};

/// Errors from graph operations.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("Neo4j connection error: {0}")]
    Connection(String),

    #[error("Neo4j query error: {0}")]
    Query(#[from] neo4rs::Error),

    #[error("Query returned no rows: {query}")]
    EmptyResult { query: &'static str },

    #[error("Unexpected row shape: {0}")]
    Deserialization(String),
}

/// Configuration for connecting to Neo4j.
#[derive(Clone)]
pub struct GraphConfig {
    pub uri: String,
    pub user: String,
    pub password: String,
    /// Target database; the server default when `None`.
    pub database: Option<String>,
    pub max_connections: u32,
    pub fetch_size: usize,
}

impl GraphConfig {
    /// Build a connection config from loaded settings. Fails when no
    /// password is configured or a pool limit is zero.
    pub fn from_settings(settings: &Neo4jSettings) -> Result<Self, CoreError> {
        if settings.max_connections == 0 {
            return Err(CoreError::InvalidSetting {
                key: "neo4j.max_connections",
                reason: "must be at least 1".to_string(),
            });
        }
        if settings.fetch_size == 0 {
            return Err(CoreError::InvalidSetting {
                key: "neo4j.fetch_size",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(Self {
            uri: settings.uri.clone(),
            user: settings.user.clone(),
            password: settings.password()?.to_string(),
            database: settings.database().map(str::to_string),
            max_connections: settings.max_connections,
            fetch_size: settings.fetch_size,
        })
    }

    /// Same server and account, different password.
    pub fn with_password(&self, password: &str) -> Self {
        Self {
            password: password.to_string(),
            ..self.clone()
        }
    }

    /// Same server and credentials, different database.
    pub fn on_database(&self, database: Option<&str>) -> Self {
        Self {
            database: database.map(str::to_string),
            ..self.clone()
        }
    }

    /// The database name for logs.
    pub fn database_name(&self) -> &str {
        self.database.as_deref().unwrap_or("<default>")
    }
}

impl std::fmt::Debug for GraphConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphConfig")
            .field("uri", &self.uri)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("database", &self.database)
            .field("max_connections", &self.max_connections)
            .field("fetch_size", &self.fetch_size)
            .finish()
    }
}

/// Neo4j client owning one connection pool.
///
/// A client is opened by the operation that uses it and released with
/// [`GraphClient::close`] when that operation finishes.
pub struct GraphClient {
    graph: Graph,
    uri: String,
    database: Option<String>,
}

impl GraphClient {
    /// Connect to Neo4j with the given configuration.
    pub async fn connect(config: &GraphConfig) -> Result<Self, GraphError> {
        // A zero-sized pool never hands out a connection.
        if config.max_connections == 0 || config.fetch_size == 0 {
            return Err(GraphError::Connection(
                "max_connections and fetch_size must be at least 1".to_string(),
            ));
        }

        let mut builder = ConfigBuilder::default()
            .uri(&config.uri)
            .user(&config.user)
            .password(&config.password)
            .max_connections(config.max_connections as usize)
            .fetch_size(config.fetch_size);
        if let Some(db) = &config.database {
            builder = builder.db(db.as_str());
        }
        let neo_config = builder
            .build()
            .map_err(|e| GraphError::Connection(e.to_string()))?;

        let graph = Graph::connect(neo_config)
            .await
            .map_err(|e| GraphError::Connection(e.to_string()))?;

        tracing::info!(
            uri = %config.uri,
            user = %config.user,
            database = config.database_name(),
            "Connected to Neo4j"
        );
        Ok(Self {
            graph,
            uri: config.uri.clone(),
            database: config.database.clone(),
        })
    }

    /// Execute a statement that returns nothing of interest.
    pub async fn run(&self, query: Query) -> Result<(), GraphError> {
        self.graph.run(query).await?;
        Ok(())
    }

    /// Execute a read query and return the first row, if any.
    pub async fn query_one(&self, query: Query) -> Result<Option<neo4rs::Row>, GraphError> {
        let mut stream = self.graph.execute(query).await?;
        Ok(stream.next().await?)
    }

    /// Begin a transaction.
    pub async fn start_txn(&self) -> Result<neo4rs::Txn, GraphError> {
        Ok(self.graph.start_txn().await?)
    }

    /// Release the connection pool.
    pub fn close(self) {
        tracing::debug!(
            uri = %self.uri,
            database = self.database.as_deref().unwrap_or("<default>"),
            "Closing Neo4j connection"
        );
        drop(self.graph);
    }
}
