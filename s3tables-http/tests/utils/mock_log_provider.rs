use std::time::Duration;

use parking_lot::Mutex;
use s3tables_http::output_logger::OutputLogProvider;

#[derive(Debug, PartialEq)]
pub enum RecordedLog {
    Debug(String, String),
    Info(String, String),
    Warn(String, String),
    Error(String, String),
    Init,
    Shutdown,
}

pub struct MockLogProvider {
    pub logs: Mutex<Vec<RecordedLog>>,
}

impl MockLogProvider {
    pub fn new() -> Self {
        Self {
            logs: Mutex::new(Vec::new()),
        }
    }

    fn push(&self, log: RecordedLog) {
        self.logs
            .try_lock_for(Duration::from_secs(5))
            .unwrap()
            .push(log);
    }
}

impl OutputLogProvider for MockLogProvider {
    fn initialize(&self) {
        self.push(RecordedLog::Init);
    }

    fn debug(&self, tag: &str, msg: String) {
        self.push(RecordedLog::Debug(tag.to_string(), msg));
    }

    fn info(&self, tag: &str, msg: String) {
        self.push(RecordedLog::Info(tag.to_string(), msg));
    }

    fn warn(&self, tag: &str, msg: String) {
        self.push(RecordedLog::Warn(tag.to_string(), msg));
    }

    fn error(&self, tag: &str, msg: String) {
        self.push(RecordedLog::Error(tag.to_string(), msg));
    }

    fn shutdown(&self) {
        self.push(RecordedLog::Shutdown);
    }
}
