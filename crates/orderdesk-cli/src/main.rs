mod cmd;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "orderdesk",
    about = "Warehouse orders dashboard — serve the API, mint editor tokens, validate the dataset",
    version,
    propagate_version = true
)]
struct Cli {
    /// Config file (YAML); missing file falls back to defaults + env vars
    #[arg(long, global = true, env = "ORDERDESK_CONFIG", default_value = "orderdesk.yaml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the dashboard API server
    Serve {
        /// Port to listen on
        #[arg(long, default_value = "3170")]
        port: u16,
    },

    /// Mint an editor token and its shareable link
    Token {
        /// Company label on the token (default: configured company)
        #[arg(long)]
        company: Option<String>,

        /// Hours the token stays valid (1-72)
        #[arg(long, default_value = "4")]
        hours: u32,
    },

    /// Print the SHA-256 hex of a password for the config file
    HashPassword {
        password: String,
    },

    /// Load and validate the seed dataset
    Check,
}

fn main() {
    let cli = Cli::parse();

    let default_level = match &cli.command {
        Commands::Serve { .. } => tracing::Level::INFO,
        _ => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Serve { port } => cmd::serve::run(&cli.config, port),
        Commands::Token { company, hours } => cmd::token::run(&cli.config, company.as_deref(), hours),
        Commands::HashPassword { password } => cmd::hash::run(&password),
        Commands::Check => cmd::check::run(&cli.config),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
