use tokio::io::{AsyncWriteExt, stderr, stdout};
use tokio::sync::mpsc;
use crate::loggers::core::{LogRecord, LogSink};

/// Drains the logger channel and writes one JSON line per record.
pub struct LogWorker {
    receiver: mpsc::Receiver<LogRecord>,
    sink: LogSink,
}

impl LogWorker {
    pub fn new(receiver: mpsc::Receiver<LogRecord>, sink: LogSink) -> Self {
        Self { receiver, sink }
    }

    pub async fn run(mut self) {
        while let Some(record) = self.receiver.recv().await {
            let Ok(mut line) = serde_json::to_string(&record) else {
                continue;
            };
            line.push('\n');

            // Write failures are dropped: logging must never take the client down.
            let _ = match self.sink {
                LogSink::Stdout => stdout().write_all(line.as_bytes()).await,
                LogSink::Stderr => stderr().write_all(line.as_bytes()).await,
            };
        }
    }
}
