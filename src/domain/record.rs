//! Monitoring records captured for exchanged messages.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Direction of a recorded message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MessageType {
    Inbound,
    Outbound,
}

/// A single recorded message exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Record {
    /// Identifier shared by the records of one request/response exchange.
    pub group_id: String,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub message_type: Option<MessageType>,
    #[serde(default)]
    pub source_host: Option<String>,
    #[serde(default)]
    pub destination_host: Option<String>,
    #[serde(default)]
    pub operation: Option<String>,
    #[serde(default)]
    pub headers: Option<BTreeMap<String, Vec<String>>>,
    #[serde(default)]
    pub envelope: Option<String>,
}

impl Record {
    pub fn new(group_id: &str, date: DateTime<Utc>) -> Self {
        Self {
            group_id: group_id.to_string(),
            date,
            message_type: None,
            source_host: None,
            destination_host: None,
            operation: None,
            headers: None,
            envelope: None,
        }
    }
}
