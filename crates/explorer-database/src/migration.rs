//! Database migration runner.

use sqlx::PgPool;
use tracing::{info, warn};

use explorer_core::error::{AppError, ErrorKind};

/// Run all pending database migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<(), AppError> {
    info!("Running database migrations...");

    sqlx::migrate!("../../migrations")
        .run(pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                format!("Failed to run migrations: {e}"),
                e,
            )
        })?;

    info!("Database migrations completed successfully");
    Ok(())
}

/// Drop the hierarchy tables and the migration ledger, then migrate again.
pub async fn reset_database(pool: &PgPool) -> Result<(), AppError> {
    warn!("Dropping hierarchy tables");

    sqlx::query("DROP TABLE IF EXISTS files, folders, _sqlx_migrations CASCADE")
        .execute(pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to drop tables", e))?;

    run_migrations(pool).await
}
