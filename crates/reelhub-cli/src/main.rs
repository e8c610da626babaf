//! ReelHub CLI entry point.
//!
//! Wires configuration, logging, and the application context together,
//! then hands control to the interactive shell.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod context;
mod flows;
mod output;
mod router;
mod shell;
mod views;

use context::AppContext;
use output::OutputFormat;
use reelhub_core::config::AppConfig;

/// ReelHub, a terminal client for a movie collection API
#[derive(Debug, Parser)]
#[command(name = "reelhub", version, about, long_about = None)]
pub struct Cli {
    /// Configuration environment to load (merges config/{env}.toml)
    #[arg(short, long, default_value = "development")]
    pub env: String,

    /// Override the configured API base URL
    #[arg(long)]
    pub api_url: Option<String>,

    /// Output format for listings
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let mut config = match AppConfig::load(&cli.env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };
    if let Some(api_url) = &cli.api_url {
        config.api.base_url = api_url.clone();
    }

    init_logging(&config);

    let ctx = match AppContext::new(config, cli.format) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("Failed to initialize: {}", e);
            std::process::exit(1);
        }
    };

    let result = shell::run(&ctx).await;

    // Tear down outstanding alert timers before the process exits.
    ctx.alerts.shutdown();

    if let Err(e) = result {
        output::print_error(&e.to_string());
        std::process::exit(1);
    }
}

/// Initialize tracing/logging from the configuration.
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .json()
                .init();
        }
        _ => {
            tracing_subscriber::fmt().with_env_filter(filter).init();
        }
    }
}
