// src/storage/mod.rs

//! Storage for export documents.
//!
//! Export files are the durable contract consumed by the batch-manual
//! importer: `export-cg-iidx-{sp|dp}-{timestamp}.json`, one file per
//! non-empty play mode, pretty-printed JSON.

pub mod local;

use chrono::Local;

use crate::models::Playstyle;

// Re-export for convenience
pub use local::LocalExportStorage;

/// Sortable local-time stamp used in export file names,
/// e.g. `2024-08-03-at-02-05-41`.
pub fn file_timestamp() -> String {
    Local::now().format("%Y-%m-%d-at-%I-%M-%S").to_string()
}

/// File name for one export document.
pub fn export_file_name(playtype: Playstyle, timestamp: &str) -> String {
    format!(
        "export-cg-iidx-{}-{}.json",
        playtype.as_str().to_lowercase(),
        timestamp
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_pattern() {
        assert_eq!(
            export_file_name(Playstyle::Sp, "2024-08-03-at-02-05-41"),
            "export-cg-iidx-sp-2024-08-03-at-02-05-41.json"
        );
        assert_eq!(
            export_file_name(Playstyle::Dp, "2024-08-03-at-02-05-41"),
            "export-cg-iidx-dp-2024-08-03-at-02-05-41.json"
        );
    }

    #[test]
    fn timestamp_is_sortable_shape() {
        let stamp = file_timestamp();
        // e.g. 2024-08-03-at-02-05-41
        assert_eq!(stamp.len(), 22);
        assert!(stamp.contains("-at-"));
    }
}
