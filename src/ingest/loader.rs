use crate::display::output::display_warning;
use crate::error::AppError;
use crate::ingest::models::{EventBatch, SeriesDocument, SeriesState};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct DataFiles {
    pub series: Vec<PathBuf>,
    pub events: Vec<PathBuf>,
}

/// Partition a data directory into series documents (.json) and event logs
/// (.jsonl). Sorted by file name so the round traversal order is stable
/// across runs.
pub fn scan_data_dir(dir: &Path) -> Result<DataFiles, AppError> {
    let entries = fs::read_dir(dir)
        .map_err(|e| AppError::IoError(format!("cannot read {}: {}", dir.display(), e)))?;

    let mut series = Vec::new();
    let mut events = Vec::new();

    for entry in entries {
        let entry = entry.map_err(|e| AppError::IoError(e.to_string()))?;
        let path = entry.path();
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => series.push(path),
            Some("jsonl") => events.push(path),
            _ => {}
        }
    }

    series.sort();
    events.sort();

    Ok(DataFiles { series, events })
}

pub fn load_series(path: &Path) -> Result<SeriesState, AppError> {
    let content = fs::read_to_string(path)
        .map_err(|e| AppError::IoError(format!("failed to read {}: {}", path.display(), e)))?;

    let doc: SeriesDocument = serde_json::from_str(&content)
        .map_err(|e| AppError::MalformedRecord(format!("{}: {}", path.display(), e)))?;

    Ok(doc.data.series_state)
}

#[derive(Debug)]
pub struct EventLog {
    pub batches: Vec<EventBatch>,
    pub skipped_lines: usize,
}

/// Parse a newline-delimited event log, one batch per non-blank line.
/// Malformed lines abort in strict mode; otherwise they are skipped with a
/// warning and counted.
pub fn load_event_batches(path: &Path, strict: bool) -> Result<EventLog, AppError> {
    let content = fs::read_to_string(path)
        .map_err(|e| AppError::IoError(format!("failed to read {}: {}", path.display(), e)))?;

    let mut batches = Vec::new();
    let mut skipped_lines = 0;

    for (idx, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        match serde_json::from_str::<EventBatch>(line) {
            Ok(batch) => batches.push(batch),
            Err(e) => {
                let detail = format!("{} line {}: {}", path.display(), idx + 1, e);
                if strict {
                    return Err(AppError::MalformedRecord(detail));
                }
                display_warning(&format!("skipping malformed event line ({})", detail));
                skipped_lines += 1;
            }
        }
    }

    Ok(EventLog {
        batches,
        skipped_lines,
    })
}
