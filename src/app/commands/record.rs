//! Rendering of monitoring records stored as JSON.

use std::fs;
use std::path::Path;

use crate::domain::{AppError, Record};
use crate::ports::RecordProcessor;
use crate::services::{LogRecorder, RecordFields};

/// Parse a JSON record.
pub fn parse_record(content: &str) -> Result<Record, AppError> {
    serde_json::from_str(content).map_err(|e| AppError::ParseError {
        what: "monitoring record".into(),
        details: e.to_string(),
    })
}

/// Load a record, pass it through the log recorder and return its rendering.
pub fn execute(path: &Path, fields: RecordFields) -> Result<String, AppError> {
    let record = parse_record(&fs::read_to_string(path)?)?;
    let recorder = LogRecorder::with_fields(fields);
    recorder.process_record(&record);
    Ok(recorder.render(&record))
}
