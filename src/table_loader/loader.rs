use crate::domain::CoordinateTable;
use crate::table_loader::factory::{TableFactoryError, from_json};
use std::io;
use std::path::PathBuf;
use thiserror::Error;
use tokio::fs;
use tracing::{info, instrument};

#[instrument]
pub async fn load_table_from(path: &str) -> Result<CoordinateTable, TableLoaderError> {
    info!("📁 Loading coordinate table...");
    let content = fs::read_to_string(path).await.map_err(|e| TableLoaderError::Io {
        source: e,
        path: PathBuf::from(path),
    })?;

    let table = from_json(&content).map_err(|e| TableLoaderError::TableFactory {
        source: e,
        path: PathBuf::from(path),
    })?;

    info!("📁 Loading coordinate table... OK, {} cities", table.city_count());
    Ok(table)
}

#[derive(Error, Debug)]
pub enum TableLoaderError {
    #[error("failed to load '{}': {}", path.display(), source)]
    TableFactory { source: TableFactoryError, path: PathBuf },
    #[error("failed to load '{}': {}", path.display(), source)]
    Io { source: io::Error, path: PathBuf },
}
