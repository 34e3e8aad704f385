//! Load the sample hierarchy.

use explorer_core::config::AppConfig;
use explorer_core::error::AppError;
use explorer_service::SeedService;

use crate::output::{self, OutputFormat};

/// Execute the seed command
pub async fn execute(config: &AppConfig, format: OutputFormat) -> Result<(), AppError> {
    let stores = super::open_stores(config).await?;
    let seeder = SeedService::new(stores.folders.clone(), stores.files.clone());
    let result = seeder.seed_sample_hierarchy().await;
    stores.close().await;
    let report = result?;

    match format {
        OutputFormat::Json => output::print_json(&report, "{}"),
        OutputFormat::Table => {
            output::print_success("Sample hierarchy seeded.");
            output::print_kv("Folders upserted", &report.folders_upserted.to_string());
            output::print_kv("Files created", &report.files_created.to_string());
            output::print_kv("Files skipped", &report.files_skipped.to_string());
        }
    }
    Ok(())
}
