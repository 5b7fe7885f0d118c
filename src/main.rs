use clap::{Parser, Subcommand};
use rfc_scout::Result;
use rfc_scout::commands::{run_search, show_status};
use rfc_scout::config::{run_interactive_config, show_config};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rfc-scout")]
#[command(about = "Keyword search over a local index of RFC summaries")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the RFC index by summary keyword
    Search {
        /// Keyword to match against record summaries; prompted for when omitted
        term: Option<String>,
        /// Write the results as an HTML page to this path
        #[arg(long)]
        html: Option<PathBuf>,
        /// Print the results as JSON
        #[arg(long, conflicts_with = "html")]
        json: bool,
    },
    /// Configure the record store location and link template
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
    /// Show record store diagnostics
    Status,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Search { term, html, json } => {
            run_search(term, html, json).await?;
        }
        Commands::Config { show } => {
            if show {
                show_config()?;
            } else {
                run_interactive_config()?;
            }
        }
        Commands::Status => {
            show_status().await?;
        }
    }

    Ok(())
}
