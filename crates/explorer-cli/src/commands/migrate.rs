//! Database migration management commands.

use clap::{Args, Subcommand};

use explorer_core::config::{AppConfig, StoreBackend};
use explorer_core::error::AppError;
use explorer_database::DatabasePool;
use explorer_database::migration::{reset_database, run_migrations};

use crate::output;

/// Arguments for the migrate command
#[derive(Debug, Args)]
pub struct MigrateArgs {
    /// Migration subcommand
    #[command(subcommand)]
    pub command: MigrateCommand,
}

/// Migration subcommands
#[derive(Debug, Subcommand)]
pub enum MigrateCommand {
    /// Run all pending migrations
    Run,
    /// Reset database (drop the hierarchy tables and re-run)
    Reset {
        /// Skip confirmation prompt
        #[arg(long)]
        force: bool,
    },
}

/// Execute migration commands
pub async fn execute(args: &MigrateArgs, config: &AppConfig) -> Result<(), AppError> {
    if config.database.backend == StoreBackend::Memory {
        return Err(AppError::configuration(
            "Migrations apply to the postgres backend only",
        ));
    }

    match &args.command {
        MigrateCommand::Run => {
            let pool = DatabasePool::connect(&config.database).await?;
            println!("Running database migrations...");
            run_migrations(pool.pool()).await?;
            pool.close().await;
            output::print_success("All migrations applied successfully.");
        }
        MigrateCommand::Reset { force } => {
            if !force {
                let confirm = dialoguer::Confirm::new()
                    .with_prompt("This will DROP all folders and files and re-run migrations. Continue?")
                    .default(false)
                    .interact()
                    .map_err(|e| AppError::internal(format!("Input error: {e}")))?;

                if !confirm {
                    println!("Cancelled.");
                    return Ok(());
                }
            }

            let pool = DatabasePool::connect(&config.database).await?;
            println!("Resetting database...");
            reset_database(pool.pool()).await?;
            pool.close().await;
            output::print_success("Database reset complete.");
        }
    }

    Ok(())
}
