use chrono::{Local, TimeZone};
use serde::{Deserialize, Serialize};

/// A single text message as read from the inbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub sender: String,
    pub content: String,
    pub timestamp: i64, // Epoch milliseconds, assigned by the store
}

impl Message {
    pub fn new(sender: &str, content: &str, timestamp: i64) -> Self {
        Self {
            sender: sender.to_string(),
            content: content.to_string(),
            timestamp,
        }
    }

    /// Render the timestamp in the local zone with a chrono format string,
    /// e.g. `%b %d, %Y %H:%M`.
    pub fn formatted_timestamp(&self, format: &str) -> String {
        self.formatted_timestamp_in(&Local, format)
    }

    pub fn formatted_timestamp_in<Tz: TimeZone>(&self, zone: &Tz, format: &str) -> String
    where
        Tz::Offset: std::fmt::Display,
    {
        match zone.timestamp_millis_opt(self.timestamp).earliest() {
            Some(time) => time.format(format).to_string(),
            None => self.timestamp.to_string(),
        }
    }
}

/// One row of the message store. Sender and body columns may be null.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawMessage {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
    pub date: i64,
}

impl From<RawMessage> for Message {
    fn from(raw: RawMessage) -> Self {
        Message {
            sender: raw.address.unwrap_or_default(),
            content: raw.body.unwrap_or_default(),
            timestamp: raw.date,
        }
    }
}
