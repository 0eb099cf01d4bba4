use anyhow::Result;
use clap::{Parser, Subcommand};

mod cli;

/// riviera - Riviera Stays website backend
#[derive(Parser)]
#[command(name = "riviera")]
#[command(about = "Property inquiry service for Riviera Stays", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Submit an inquiry to a running server
    Inquire(cli::inquire::InquireArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = riviera::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    riviera::observability::init_observability(
        "riviera",
        env!("CARGO_PKG_VERSION"),
        &config.observability.log_level,
    )?;

    match cli.command {
        Commands::Serve { host, port } => cli::server::serve(config, host, port).await,
        Commands::Inquire(args) => cli::inquire::inquire(config, args).await,
    }
}
