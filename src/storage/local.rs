// src/storage/local.rs

//! Local filesystem export storage.

use std::path::{Path, PathBuf};

use tokio::io::AsyncWriteExt;

use crate::error::Result;
use crate::models::BatchManual;
use crate::storage::{export_file_name, file_timestamp};

/// Writes export documents to a local directory.
#[derive(Debug, Clone)]
pub struct LocalExportStorage {
    root_dir: PathBuf,
}

impl LocalExportStorage {
    /// Create an export storage rooted at the given directory.
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
        }
    }

    /// Write one export document, returning the path written.
    ///
    /// The timestamp is passed in so the SP and DP files of a single run
    /// share one stamp.
    pub async fn write_document(
        &self,
        document: &BatchManual,
        timestamp: &str,
    ) -> Result<PathBuf> {
        let path = self
            .root_dir
            .join(export_file_name(document.playtype(), timestamp));
        let bytes = serde_json::to_vec_pretty(document)?;
        self.write_bytes(&path, &bytes).await?;
        Ok(path)
    }

    /// Write every document of a run under a single timestamp.
    pub async fn write_all(&self, documents: &[BatchManual]) -> Result<Vec<PathBuf>> {
        let timestamp = file_timestamp();
        let mut paths = Vec::with_capacity(documents.len());
        for document in documents {
            paths.push(self.write_document(document, &timestamp).await?);
        }
        Ok(paths)
    }

    /// Write bytes atomically (write to temp, then rename).
    async fn write_bytes(&self, path: &Path, bytes: &[u8]) -> Result<()> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        let tmp = path.with_extension("tmp");
        let mut file = tokio::fs::File::create(&tmp).await?;
        file.write_all(bytes).await?;
        file.flush().await?;
        drop(file);

        tokio::fs::rename(&tmp, path).await?;
        Ok(())
    }
}
