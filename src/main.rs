//! Savings Dashboard
//!
//! Run with: cargo run -- serve
//!
//! # Configuration
//!
//! Settings come from `--config <file>`, otherwise the first of
//! `~/.config/savings-dashboard/config.toml` and `./config.toml` that exists.
//! Environment variables override the file:
//! - `SAVINGS_HOST`, `SAVINGS_PORT`, `SAVINGS_BASE_PATH`
//! - `SAVINGS_DATA_FILE`
//! - `SAVINGS_LOG_LEVEL`, `SAVINGS_LOG_FORMAT`
//! - `RUST_LOG`: full filter, takes precedence over the configured level

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use savings_dashboard::api::{serve, ApiConfig, AppState};
use savings_dashboard::config::{generate_default_config, normalize_base_path, Config, LoggingConfig};
use savings_dashboard::export::export_site;
use savings_dashboard::render::{currency, table_date};
use savings_dashboard::savings::{date_span, resolve_entries, SavingsSummary};

#[derive(Parser)]
#[command(name = "savings-dashboard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Dashboard of reported savings: cumulative chart, table and JSON endpoint")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file (default: search standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP server (default)
    Serve {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
        /// Path prefix, e.g. /doge-dashboard
        #[arg(long)]
        base_path: Option<String>,
    },

    /// Print the total and the savings table
    Summary,

    /// Write the dashboard as static files
    Export {
        /// Output directory
        #[arg(short, long, default_value = "out")]
        output: PathBuf,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_with_env(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::load_default(),
    };

    init_logging(&config.logging);

    match cli.command.unwrap_or(Commands::Serve {
        host: None,
        port: None,
        base_path: None,
    }) {
        Commands::Serve {
            host,
            port,
            base_path,
        } => {
            let mut server = config.server.clone();
            if let Some(host) = host {
                server.host = host;
            }
            if let Some(port) = port {
                server.port = port;
            }
            if let Some(base_path) = base_path {
                server.base_path = normalize_base_path(&base_path);
            }

            tracing::info!("Starting savings dashboard v{}", env!("CARGO_PKG_VERSION"));

            let api_config = ApiConfig::from(&server);
            let data_file = config.data.file_path();
            let state = AppState::load(data_file.as_deref(), api_config.clone())?;

            serve(state, &api_config).await?;
        }

        Commands::Summary => {
            let entries = resolve_entries(config.data.file_path().as_deref())?;
            let summary = SavingsSummary::from_entries(&entries);
            print_summary(&summary);
        }

        Commands::Export { output } => {
            let entries = resolve_entries(config.data.file_path().as_deref())?;
            let summary = SavingsSummary::from_entries(&entries);
            let report = export_site(&summary, &output)?;

            for file in report.files {
                println!("wrote {}", file.display());
            }
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("writing {}", path.display()))?;
                    println!("wrote {}", path.display());
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

fn init_logging(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "savings_dashboard={},tower_http=info",
            logging.level
        ))
    });

    if logging.is_json() {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

fn print_summary(summary: &SavingsSummary) {
    println!("Total Savings: {}", currency(summary.total));

    if let Some((first, last)) = date_span(&summary.entries) {
        println!(
            "{} entries over {} reporting days ({} - {})",
            summary.entries.len(),
            summary.reporting_days(),
            table_date(first),
            table_date(last)
        );
    }
    println!();

    println!("{:<12} {:>16}  Description", "Date", "Amount");
    for entry in &summary.entries {
        let first_line = entry.description.lines().next().unwrap_or("");
        println!(
            "{:<12} {:>16}  {}",
            table_date(entry.date),
            currency(entry.amount),
            first_line
        );
    }
}
