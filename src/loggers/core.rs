use serde::{Deserialize, Serialize};
use serde_json::Value;
use chrono::{DateTime, Utc};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace, Debug, Info, Warn, Error, Fatal,
}

/// Where the worker writes records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogSink {
    #[default]
    Stdout,
    Stderr,
}

#[derive(Debug, Serialize)]
pub struct LogRecord {
    pub ts: DateTime<Utc>,
    pub level: LogLevel,
    pub msg: String,
    pub component: String,
    pub ctx: HashMap<String, Value>,
}

impl LogRecord {
    pub fn new(level: LogLevel, msg: &str, component: &str, ctx: HashMap<String, Value>) -> Self {
        Self {
            ts: Utc::now(),
            level,
            msg: msg.to_string(),
            component: component.to_string(),
            ctx,
        }
    }
}
