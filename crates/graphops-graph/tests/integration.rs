//! Integration tests for graphops-graph against a live Neo4j instance.
//!
//! These tests WIPE the target database. Point them at a throwaway server:
//!   GRAPHOPS_TEST_URI=bolt://localhost:7687 GRAPHOPS_TEST_PASSWORD=... \
//!   cargo test --package graphops-graph --test integration -- --ignored --test-threads=1
//!
//! Skipped automatically if Neo4j is not available or no password is set.

use graphops_core::{Dataset, SchemaSummary, ACTED_IN, MOVIE_LABEL, PERSON_LABEL};
use graphops_graph::queries::VERIFICATION_GREETING;
use graphops_graph::{GraphClient, GraphConfig};

fn test_config() -> Option<GraphConfig> {
    let password = std::env::var("GRAPHOPS_TEST_PASSWORD").ok()?;
    Some(GraphConfig {
        uri: std::env::var("GRAPHOPS_TEST_URI")
            .unwrap_or_else(|_| "bolt://localhost:7687".to_string()),
        user: std::env::var("GRAPHOPS_TEST_USER").unwrap_or_else(|_| "neo4j".to_string()),
        password,
        database: None,
        max_connections: 2,
        fetch_size: 200,
    })
}

async fn connect_or_skip() -> Option<GraphClient> {
    let Some(config) = test_config() else {
        eprintln!("Skipping integration test (GRAPHOPS_TEST_PASSWORD not set)");
        return None;
    };
    match GraphClient::connect(&config).await {
        Ok(client) => Some(client),
        Err(e) => {
            eprintln!("Skipping integration test (Neo4j not available): {e}");
            None
        }
    }
}

async fn seed_once(client: &GraphClient) -> i64 {
    client.wipe_graph().await.unwrap();
    client.seed_dataset(&Dataset::sample()).await.unwrap()
}

#[tokio::test]
#[ignore = "requires live Neo4j — wipes the database"]
async fn test_wipe_leaves_no_nodes() {
    let Some(client) = connect_or_skip().await else {
        return;
    };

    seed_once(&client).await;
    assert!(client.count_all_nodes().await.unwrap() > 0);

    client.wipe_graph().await.unwrap();
    assert_eq!(client.count_all_nodes().await.unwrap(), 0);

    client.close();
}

#[tokio::test]
#[ignore = "requires live Neo4j — wipes the database"]
async fn test_seed_creates_fixed_graph() {
    let Some(client) = connect_or_skip().await else {
        return;
    };

    let created = seed_once(&client).await;
    assert_eq!(created, 10);
    assert_eq!(client.count_nodes(PERSON_LABEL).await.unwrap(), 4);
    assert_eq!(client.count_nodes(MOVIE_LABEL).await.unwrap(), 10);
    assert_eq!(client.count_relationships(ACTED_IN).await.unwrap(), 12);

    client.close();
}

#[tokio::test]
#[ignore = "requires live Neo4j — wipes the database"]
async fn test_people_are_not_duplicated() {
    let Some(client) = connect_or_skip().await else {
        return;
    };

    seed_once(&client).await;
    // Second load without a wipe: people merge, movies do not.
    client.seed_dataset(&Dataset::sample()).await.unwrap();

    assert_eq!(client.count_nodes(PERSON_LABEL).await.unwrap(), 4);
    assert_eq!(client.count_nodes(MOVIE_LABEL).await.unwrap(), 20);

    seed_once(&client).await;
    assert_eq!(client.count_nodes(PERSON_LABEL).await.unwrap(), 4);
    assert_eq!(client.count_nodes(MOVIE_LABEL).await.unwrap(), 10);

    client.close();
}

#[tokio::test]
#[ignore = "requires live Neo4j — wipes the database"]
async fn test_schema_summary_after_seed() {
    let Some(client) = connect_or_skip().await else {
        return;
    };

    seed_once(&client).await;
    let summary = client.schema_summary().await.unwrap();
    assert!(summary.same_as(&SchemaSummary::expected_for_movies()));

    client.close();
}

#[tokio::test]
#[ignore = "requires live Neo4j"]
async fn test_greeting_round_trip() {
    let Some(client) = connect_or_skip().await else {
        return;
    };

    assert_eq!(client.greeting().await.unwrap(), VERIFICATION_GREETING);

    client.close();
}

#[tokio::test]
#[ignore = "requires live Neo4j — changes and restores the account password"]
async fn test_password_rotation_round_trip() {
    let Some(config) = test_config() else {
        return;
    };
    let admin = config.on_database(Some("system"));
    let Ok(client) = GraphClient::connect(&admin).await else {
        return;
    };

    let original = config.password.clone();
    let rotated = format!("{original}-rotated");
    client.change_password(&original, &rotated).await.unwrap();
    client.close();

    let new_login = GraphClient::connect(&config.with_password(&rotated))
        .await
        .unwrap();
    assert_eq!(new_login.greeting().await.unwrap(), VERIFICATION_GREETING);
    new_login.close();

    let old_login = match GraphClient::connect(&config).await {
        Ok(client) => {
            let outcome = client.greeting().await;
            client.close();
            outcome.is_ok()
        }
        Err(_) => false,
    };
    assert!(!old_login, "old password still accepted after rotation");

    let restore = GraphClient::connect(&admin.with_password(&rotated))
        .await
        .unwrap();
    restore.change_password(&rotated, &original).await.unwrap();
    restore.close();
}

#[tokio::test]
#[ignore = "requires live Neo4j"]
async fn test_wrong_current_password_is_rejected() {
    let Some(config) = test_config() else {
        return;
    };
    let Ok(client) = GraphClient::connect(&config.on_database(Some("system"))).await else {
        return;
    };

    let outcome = client
        .change_password("definitely-not-the-password", "whatever-next")
        .await;
    assert!(outcome.is_err());

    client.close();
}
