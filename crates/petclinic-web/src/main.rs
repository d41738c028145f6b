use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use petclinic_web::config::{load_config, LogConfig};
use petclinic_web::{router, AppState};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "petclinic-web", version, about = "Serve the pet clinic visit forms")]
struct Cli {
    /// Path to the TOML config file
    #[arg(long, default_value = "petclinic.toml")]
    config: PathBuf,

    /// Address to listen on, e.g. 127.0.0.1:8080
    #[arg(long)]
    bind: Option<String>,

    /// SQLite database file
    #[arg(long)]
    database: Option<PathBuf>,

    /// Load sample data into an empty store
    #[arg(long)]
    seed: Option<bool>,
}

fn init_tracing(log: &LogConfig) {
    let filter = EnvFilter::try_from_env("PETCLINIC_LOG")
        .unwrap_or_else(|_| EnvFilter::new(&log.filter));

    let format = env::var("PETCLINIC_LOG_FORMAT").unwrap_or_else(|_| log.format.clone());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry.with(fmt::layer().json().with_ansi(false)).init();
        }
        _ => {
            registry.with(fmt::layer().compact()).init();
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli.config)?.with_overrides(cli.bind, cli.database, cli.seed);

    init_tracing(&config.log);

    let db = config.open_database()?;
    let app = router(AppState::new(db));

    let listener = tokio::net::TcpListener::bind(&config.server.bind)
        .await
        .with_context(|| format!("Failed to bind {}", config.server.bind))?;
    info!(addr = %config.server.bind, "pet clinic listening");

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
