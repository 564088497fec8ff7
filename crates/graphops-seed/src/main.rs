//! CLI entry point for graphops-seed.

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use graphops_core::config::{Overrides, Settings};
use graphops_core::Dataset;
use graphops_graph::{GraphConfig, Neo4jConnector};
use graphops_seed::seed_graph;

#[derive(Parser)]
#[command(name = "graphops-seed")]
#[command(about = "Wipe a Neo4j database, load the movie sample, and print its schema")]
struct Cli {
    /// Bolt URI of the server (default: bolt://localhost:7687).
    #[arg(long)]
    uri: Option<String>,

    /// Account name (default: neo4j).
    #[arg(short, long)]
    user: Option<String>,

    /// Account password.
    #[arg(long)]
    password: Option<String>,

    /// Database to seed (default: server default).
    #[arg(long)]
    database: Option<String>,

    /// Print the report as JSON.
    #[arg(long)]
    json: bool,

    /// Emit logs as JSON lines on stderr.
    #[arg(long)]
    log_json: bool,

    /// Config file prefix (default: graphops).
    #[arg(short, long, default_value = "graphops")]
    config: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let settings = Settings::load(&cli.config)?.with_overrides(Overrides {
        uri: cli.uri.clone(),
        user: cli.user.clone(),
        password: cli.password.clone(),
        database: cli.database.clone(),
        new_password: None,
    });
    let graph_config = GraphConfig::from_settings(&settings.neo4j)?;

    if !cli.json {
        println!("Connecting to Neo4j at {}...", graph_config.uri);
    }

    let outcome = seed_graph(&Neo4jConnector, &graph_config, &Dataset::sample()).await;

    match outcome {
        Ok(report) if cli.json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Ok(report) => {
            println!("{report}");
            println!();
            println!("Connection closed.");
        }
        Err(e) => {
            if !cli.json {
                println!();
                println!("An error occurred during the seed run. Check credentials and server status.");
            }
            return Err(e.into());
        }
    }

    Ok(())
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = fmt().with_env_filter(filter).with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
