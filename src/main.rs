//! Forum backend - Application entry point
//!
//! CLI-based entry point that dispatches to the forum commands.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use forum_backend::{
    cli::{Cli, Commands},
    commands,
    config::Config,
};

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing (verbose mode sets debug level)
    init_tracing(cli.verbose);

    // Load configuration
    let mut config = Config::from_env();
    if let Some(url) = cli.database_url {
        config.database_url = url;
    }
    tracing::debug!(?config, "Configuration loaded");

    // Execute command
    let result = match cli.command {
        Commands::Migrate(args) => commands::migrate::execute(args, config).await,
        Commands::User(args) => commands::user::execute(args, config).await,
        Commands::Topic(args) => commands::topic::execute(args, config).await,
        Commands::Vote(args) => commands::vote::execute(args, config).await,
        Commands::Comment(args) => commands::comment::execute(args, config).await,
    };

    // Handle errors
    if let Err(e) = result {
        tracing::error!(code = e.code(), "Command failed: {}", e);
        if let Ok(body) = serde_json::to_string(&e.to_response()) {
            eprintln!("{}", body);
        }
        std::process::exit(1);
    }
}

/// Initialize tracing subscriber
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string())
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
