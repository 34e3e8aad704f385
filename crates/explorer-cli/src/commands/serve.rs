//! Start the HTTP server.

use clap::Args;

use explorer_core::config::{AppConfig, StoreBackend};
use explorer_core::error::AppError;

/// Arguments for the serve command
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Override the server port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Override the server host
    #[arg(long)]
    pub host: Option<String>,

    /// Serve from the in-memory store instead of PostgreSQL
    #[arg(long)]
    pub memory: bool,

    /// Skip migrations on startup
    #[arg(long)]
    pub no_migrate: bool,
}

/// Execute the serve command
pub async fn execute(args: &ServeArgs, mut config: AppConfig) -> Result<(), AppError> {
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(ref host) = args.host {
        config.server.host = host.clone();
    }
    if args.memory {
        config.database.backend = StoreBackend::Memory;
    }
    if args.no_migrate {
        config.database.run_migrations = false;
    }

    println!("Starting folder explorer server...");
    println!("  Host: {}", config.server.host);
    println!("  Port: {}", config.server.port);

    explorer_api::app::run_server(config).await
}
