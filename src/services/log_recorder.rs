//! Record processor writing monitoring records to the debug log.

use serde::{Deserialize, Serialize};
use tracing::{Level, debug};

use crate::domain::{MessageType, Record};
use crate::ports::RecordProcessor;

/// Tracing target for rendered monitoring records.
pub const MONITORING_TARGET: &str = "wsgen::monitoring";

/// Which parts of a record are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RecordFields {
    pub message_type: bool,
    pub source_host: bool,
    pub destination_host: bool,
    pub date: bool,
    pub operation: bool,
    pub headers: bool,
    pub envelope: bool,
}

impl Default for RecordFields {
    fn default() -> Self {
        Self {
            message_type: true,
            source_host: true,
            destination_host: true,
            date: true,
            operation: true,
            headers: true,
            envelope: true,
        }
    }
}

/// Renders records as plain text and logs them at DEBUG level.
#[derive(Debug, Clone)]
pub struct LogRecorder {
    name: String,
    fields: RecordFields,
}

impl LogRecorder {
    pub fn new() -> Self {
        Self::with_fields(RecordFields::default())
    }

    pub fn with_fields(fields: RecordFields) -> Self {
        Self { name: "LogRecorder".to_string(), fields }
    }

    pub fn fields(&self) -> &RecordFields {
        &self.fields
    }

    /// Render a record the way it is written to the log.
    pub fn render(&self, record: &Record) -> String {
        let fields = &self.fields;
        let mut out = String::new();

        if fields.message_type {
            match record.message_type {
                Some(MessageType::Inbound) => {
                    out.push_str("INBOUND MESSAGE ");
                    self.push_source(&mut out, record);
                }
                Some(MessageType::Outbound) => {
                    out.push_str("OUTBOUND MESSAGE ");
                    self.push_destination(&mut out, record);
                }
                None => {
                    self.push_source(&mut out, record);
                    self.push_destination(&mut out, record);
                }
            }
        } else {
            out.push_str("MESSAGE");
        }

        out.push(':');
        if fields.date {
            out.push_str(&format!("\nDate: {}", record.date));
        }
        out.push_str(&format!("\nGroupID: {}", record.group_id));
        if fields.operation {
            out.push_str(&format!("\nOperation: {}", record.operation.as_deref().unwrap_or("")));
        }
        out.push('\n');

        if fields.headers {
            for (name, values) in record.headers.iter().flatten() {
                out.push_str(name);
                out.push_str(": ");
                for value in values {
                    out.push_str(value);
                    out.push_str("; ");
                }
                out.push('\n');
            }
        }
        out.push('\n');

        if fields.envelope {
            if let Some(envelope) = &record.envelope {
                out.push_str(envelope);
            }
        }
        out
    }

    fn push_source(&self, out: &mut String, record: &Record) {
        let host = record.source_host.as_deref().filter(|_| self.fields.source_host);
        if let Some(host) = host {
            out.push_str("from ");
            out.push_str(host);
        }
    }

    fn push_destination(&self, out: &mut String, record: &Record) {
        let host = record.destination_host.as_deref().filter(|_| self.fields.destination_host);
        if let Some(host) = host {
            out.push_str("to ");
            out.push_str(host);
        }
    }
}

impl Default for LogRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordProcessor for LogRecorder {
    fn name(&self) -> &str {
        &self.name
    }

    fn process_record(&self, record: &Record) {
        if !tracing::enabled!(target: MONITORING_TARGET, Level::DEBUG) {
            return;
        }
        let rendered = self.render(record);
        debug!(target: MONITORING_TARGET, "{}", rendered);
    }
}
