use crate::domain::CoordinateTable;
use crate::injector::{InjectError, InjectReport, inject};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;
use tracing::{info, instrument};

/// Reads the mock-data file, injects coordinates and overwrites it in place.
/// No backup is made and the write is not transactional; a failure mid-write
/// can leave the file truncated.
#[instrument(skip(table))]
pub async fn patch_file(path: &Path, table: &CoordinateTable) -> Result<InjectReport, PatchError> {
    info!("🗺️ Patching '{}'...", path.display());
    let content = fs::read_to_string(path).await.map_err(|e| PatchError::Io {
        source: e,
        path: path.to_path_buf(),
    })?;

    let report = inject(&content, table)?;

    fs::write(path, &report.text).await.map_err(|e| PatchError::Io {
        source: e,
        path: path.to_path_buf(),
    })?;

    info!(
        "🗺️ Patching '{}'... OK, {} annotated, {} untouched",
        path.display(),
        report.annotated,
        report.skipped
    );
    Ok(report)
}

#[derive(Error, Debug)]
pub enum PatchError {
    #[error("failed to access '{}': {}", path.display(), source)]
    Io { source: io::Error, path: PathBuf },
    #[error(transparent)]
    Inject(#[from] InjectError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::env::temp_dir;
    use test_log::test;

    #[test(tokio::test)]
    async fn overwrites_the_source_file_with_annotated_records() -> Result<(), PatchError> {
        let path = temp_dir().join("patcher_annotates.ts");
        let record = "{\n    id: 'company-1',\n    location: 'Hà Nội',\n    employees: [12],\n  }";
        fs::write(&path, record).await.unwrap();

        let report = patch_file(&path, &CoordinateTable::builtin()).await?;

        let content = fs::read_to_string(&path).await.unwrap();
        assert_eq!(content, report.text);
        assert!(content.contains("latitude: 21.0285,"), "unexpected content: {}", content);
        assert!(content.contains("longitude: 105.8542,"), "unexpected content: {}", content);

        Ok(())
    }

    #[test(tokio::test)]
    async fn an_empty_file_stays_empty() -> Result<(), PatchError> {
        let path = temp_dir().join("patcher_empty.ts");
        fs::write(&path, "").await.unwrap();

        let report = patch_file(&path, &CoordinateTable::builtin()).await?;

        assert_eq!(report.annotated, 0);
        assert_eq!(fs::read_to_string(&path).await.unwrap(), "");

        Ok(())
    }

    #[test(tokio::test)]
    async fn returns_an_io_error_for_a_missing_file() {
        let path = temp_dir().join("patcher_missing.ts");

        let result = patch_file(&path, &CoordinateTable::builtin()).await;

        assert!(matches!(result, Err(PatchError::Io { .. })));
    }

    #[test(tokio::test)]
    async fn leaves_the_file_untouched_when_the_table_is_exhausted() {
        let path = temp_dir().join("patcher_exhausted.ts");
        let record = "{\n    id: 'company-1',\n    location: 'Hà Nội',\n    employees: [12],\n  }";
        fs::write(&path, record).await.unwrap();

        let mut table = CoordinateTable::new();
        table.insert("Hà Nội", vec![]);
        let result = patch_file(&path, &table).await;

        assert!(matches!(result, Err(PatchError::Inject(InjectError::TableExhausted { .. }))));
        assert_eq!(fs::read_to_string(&path).await.unwrap(), record);
    }
}
