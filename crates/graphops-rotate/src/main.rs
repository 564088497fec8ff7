//! CLI entry point for graphops-rotate.
//!
//! Prints a status line per phase (or a JSON report with `--json`) and
//! exits non-zero unless both phases succeeded.

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use graphops_core::config::{Overrides, Settings};
use graphops_graph::Neo4jConnector;
use graphops_rotate::{rotate_credentials, RotationRequest};

#[derive(Parser)]
#[command(name = "graphops-rotate")]
#[command(about = "Rotate a Neo4j account password and verify the new one")]
struct Cli {
    /// Bolt URI of the server (default: bolt://localhost:7687).
    #[arg(long)]
    uri: Option<String>,

    /// Account to rotate (default: neo4j).
    #[arg(short, long)]
    user: Option<String>,

    /// Current password.
    #[arg(long)]
    password: Option<String>,

    /// Password to rotate to.
    #[arg(long)]
    new_password: Option<String>,

    /// Database used for the verification query (default: server default).
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
        new_password: cli.new_password.clone(),
    });

    let request = RotationRequest::from_settings(&settings)?;

    if !cli.json {
        println!(
            "Rotating password for {} at {}...",
            request.login.user, request.login.uri
        );
    }

    let report = rotate_credentials(&Neo4jConnector, &request).await;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{report}");
    }

    if !report.succeeded() {
        anyhow::bail!("credential rotation did not complete");
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
