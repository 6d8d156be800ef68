use crate::config::AppConfig;
use crate::decoder::MetadataDecoder;
use crate::error::AppError;
use crate::metadata::RecordCollection;
use crate::processor;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A file that matched the extension filter but produced no record.
#[derive(Debug, Clone)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

#[derive(Debug, Default)]
pub struct ScanOutcome {
    pub records: RecordCollection,
    pub skipped: Vec<SkippedFile>,
}

/// Walks `config.scan_directory` and builds a record for every eligible image.
///
/// Per-file failures are logged and skipped. Any error from the walk itself aborts
/// the whole scan.
pub fn collect_records<D: MetadataDecoder>(
    config: &AppConfig,
    decoder: &D,
) -> Result<ScanOutcome, AppError> {
    log::info!("Starting file discovery in {}", config.scan_directory);
    log::debug!("Configured allowed extensions: {:?}", config.allowed_extensions);

    let root = Path::new(&config.scan_directory);
    let mut outcome = ScanOutcome::default();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|source| AppError::Traversal {
            path: source
                .path()
                .unwrap_or(root)
                .display()
                .to_string(),
            source,
        })?;

        // Symlinked images count; the walk itself does not follow links.
        if !entry.path().is_file() {
            log::trace!("Skipping non-file entry: {:?}", entry.path());
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        if !has_allowed_extension(&name, &config.allowed_extensions) {
            log::trace!("Skipping file due to unsupported extension: {:?}", entry.path());
            continue;
        }

        log::debug!("Processing image: {:?}", entry.path());
        match processor::build_record(decoder, entry.path()) {
            Ok(record) => outcome.records.push(record),
            Err(e) => {
                log::warn!("Failed to process image {:?}: {}", entry.path(), e);
                outcome.skipped.push(SkippedFile {
                    path: entry.path().to_path_buf(),
                    reason: e.to_string(),
                });
            }
        }
    }

    log::info!(
        "File discovery complete: {} records, {} files skipped.",
        outcome.records.len(),
        outcome.skipped.len()
    );
    Ok(outcome)
}

fn has_allowed_extension(name: &str, allowed_extensions: &HashSet<String>) -> bool {
    allowed_extensions.iter().any(|ext| name.ends_with(ext.as_str()))
}
