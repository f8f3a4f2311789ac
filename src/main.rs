use crate::app_config::AppConfig;
use crate::domain::CoordinateTable;
use crate::patcher::patch_file;
use crate::table_loader::load_table_from;
use std::path::Path;
use tracing::info;

mod app_config;
mod domain;
mod geo_location_deserializer;
mod injector;
mod patcher;
mod table_loader;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load();
    info!("✅  Loaded configuration");

    let table = match config.patch().table() {
        Some(path) => load_table_from(path).await?,
        None => CoordinateTable::builtin(),
    };
    info!("✅  Resolved coordinate table, {} cities", table.city_count());

    let report = patch_file(Path::new(config.patch().source()), &table).await?;
    info!(
        "🗺️ Updated coordinates successfully! {} record(s) annotated, {} left untouched",
        report.annotated, report.skipped
    );

    Ok(())
}
