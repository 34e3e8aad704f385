//! CLI command definitions and dispatch.

pub mod file;
pub mod folder;
pub mod migrate;
pub mod seed;
pub mod serve;

use clap::{Parser, Subcommand};

use explorer_api::app::Stores;
use explorer_core::config::{AppConfig, DEFAULT_CONFIG_BASE};
use explorer_core::error::AppError;

use crate::output::{self, OutputFormat};

/// Folder explorer: hierarchical folder and file metadata service
#[derive(Debug, Parser)]
#[command(name = "explorer", version, about, long_about = None)]
pub struct Cli {
    /// Base configuration file (extension optional)
    #[arg(short, long, default_value = DEFAULT_CONFIG_BASE)]
    pub config: String,

    /// Environment overlay, loaded from `config/{env}`
    #[arg(short, long, env = "EXPLORER_ENV")]
    pub env: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the HTTP server
    Serve(serve::ServeArgs),
    /// Database migration management
    Migrate(migrate::MigrateArgs),
    /// Load the sample hierarchy
    Seed,
    /// Folder inspection and creation
    Folder(folder::FolderArgs),
    /// File inspection and creation
    File(file::FileArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        let config = self.load_config()?;
        match &self.command {
            Commands::Serve(args) => serve::execute(args, config).await,
            Commands::Migrate(args) => migrate::execute(args, &config).await,
            Commands::Seed => seed::execute(&config, self.format).await,
            Commands::Folder(args) => folder::execute(args, &config, self.format).await,
            Commands::File(args) => file::execute(args, &config, self.format).await,
        }
    }

    fn load_config(&self) -> Result<AppConfig, AppError> {
        AppConfig::load_with_base(&self.config, self.env.as_deref())
    }
}

/// Open the configured store, warning when writes will not persist.
pub async fn open_stores(config: &AppConfig) -> Result<Stores, AppError> {
    let stores = Stores::open(&config.database).await?;
    if stores.pool.is_none() {
        output::print_warning("Using the in-memory store; changes end with this command.");
    }
    Ok(stores)
}
