use tokio::sync::mpsc;
use crate::loggers::worker::LogWorker;
use crate::loggers::core::{LogLevel, LogRecord, LogSink};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use arc_swap::ArcSwap;

pub struct LoggerConfig {
    pub level: LogLevel,
    pub component: String,
}

/// Cheap, cloneable handle. Records are queued with `try_send` and written by a
/// background worker, so logging never blocks a request.
#[derive(Clone)]
pub struct Logger {
    pub sender: mpsc::Sender<LogRecord>,
    pub config: Arc<ArcSwap<LoggerConfig>>,
}

impl Logger {
    /// A handle with no worker behind it. Every record is discarded.
    ///
    /// Useful outside a tokio runtime, where [`LoggerBuilder::build`] cannot spawn.
    pub fn detached(component: &str) -> Self {
        let (tx, _rx) = mpsc::channel(1);
        Self {
            sender: tx,
            config: Arc::new(ArcSwap::from_pointee(LoggerConfig {
                level: LogLevel::Fatal,
                component: component.to_string(),
            })),
        }
    }

    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.config.load().level
    }

    /// Changes the minimum level for this handle and all its clones.
    pub fn set_level(&self, level: LogLevel) {
        let component = self.config.load().component.clone();
        self.config.store(Arc::new(LoggerConfig { level, component }));
    }

    pub fn emit(&self, level: LogLevel, msg: &str, ctx: HashMap<String, Value>) {
        if !self.enabled(level) {
            return;
        }
        let cfg = self.config.load();
        // best-effort send; a full or closed channel drops the record
        let _ = self.sender.try_send(LogRecord::new(level, msg, &cfg.component, ctx));
    }
}

pub struct LoggerBuilder {
    component: String,
    level: LogLevel,
    sink: LogSink,
    buffer_size: usize,
}

impl LoggerBuilder {
    pub fn new(component: &str) -> Self {
        Self {
            component: component.to_string(),
            level: LogLevel::Info,
            sink: LogSink::Stdout,
            buffer_size: 1024,
        }
    }

    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    pub fn with_sink(mut self, sink: LogSink) -> Self {
        self.sink = sink;
        self
    }

    pub fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size.max(1);
        self
    }

    /// Spawns the writer task. Must be called inside a tokio runtime.
    pub fn build(self) -> Result<Logger, crate::core::error::RcError> {
        let handle = tokio::runtime::Handle::try_current()
            .map_err(|e| crate::core::error::RcError::Config(format!("Logger needs a tokio runtime: {}", e)))?;

        let (tx, rx) = mpsc::channel(self.buffer_size);
        let config = Arc::new(ArcSwap::from_pointee(LoggerConfig {
            level: self.level,
            component: self.component,
        }));

        let worker = LogWorker::new(rx, self.sink);
        handle.spawn(async move {
            worker.run().await;
        });

        Ok(Logger { sender: tx, config })
    }
}
