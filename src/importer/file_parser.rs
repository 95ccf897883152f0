// ==========================================
// Pre-sale Unit Inventory - Import File Reader
// ==========================================
// Responsibility: turn a user-selected .csv/.txt file into the raw
// text the batch accumulator consumes
// Only plain UTF-8 text is accepted; the pipeline never produces files
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use std::fs;
use std::path::Path;

/// Read a bulk-import file as UTF-8 text.
///
/// Checks existence, extension (`.csv` / `.txt`, case-insensitive) and
/// the size cap before reading, so oversized files are rejected without
/// being pulled into memory.
pub fn read_import_text<P: AsRef<Path>>(path: P, max_bytes: u64) -> ImportResult<String> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ImportError::FileNotFound(path.display().to_string()));
    }

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();
    if ext != "csv" && ext != "txt" {
        return Err(ImportError::UnsupportedFormat(ext));
    }

    let size = fs::metadata(path)?.len();
    if size > max_bytes {
        return Err(ImportError::FileTooLarge {
            size,
            limit: max_bytes,
        });
    }

    fs::read_to_string(path).map_err(ImportError::from)
}
