// file: src/models/record.rs
// description: log record model built from tracing events
// reference: https://docs.rs/tracing/latest/tracing/field/trait.Visit.html

use super::severity::{SEVERITY_FIELD, Severity};
use chrono::{DateTime, Local};
use std::fmt;
use tracing::Event;
use tracing::field::{Field, Visit};

pub const MESSAGE_FIELD: &str = "message";
pub const LOGGER_FIELD: &str = "logger";
pub const SESSION_FIELD: &str = "session_id";

#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    pub timestamp: DateTime<Local>,
    pub name: String,
    pub level_name: String,
    pub process: Option<u32>,
    pub message: String,
    pub session_id: Option<String>,
}

impl LogRecord {
    pub fn new(name: &str, level_name: &str, message: &str) -> Self {
        Self {
            timestamp: Local::now(),
            name: name.to_string(),
            level_name: level_name.to_string(),
            process: Some(std::process::id()),
            message: message.to_string(),
            session_id: None,
        }
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Local>) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn with_process(mut self, process: Option<u32>) -> Self {
        self.process = process;
        self
    }

    pub fn with_session_id(mut self, session_id: &str) -> Self {
        self.session_id = Some(session_id.to_string());
        self
    }

    pub fn from_event(event: &Event<'_>) -> Self {
        let metadata = event.metadata();
        let mut visitor = RecordVisitor::default();
        event.record(&mut visitor);
        visitor.into_record(metadata.target(), metadata.level())
    }

    pub fn severity(&self) -> Option<Severity> {
        Severity::from_name(&self.level_name)
    }

    pub fn event_severity(event: &Event<'_>) -> Option<Severity> {
        let mut visitor = SeverityVisitor::default();
        event.record(&mut visitor);
        visitor
            .severity
            .or_else(|| Severity::from_tracing(event.metadata().level()))
    }
}

#[derive(Default)]
struct SeverityVisitor {
    severity: Option<Severity>,
}

impl SeverityVisitor {
    fn store(&mut self, field: &Field, value: &str) {
        if field.name() == SEVERITY_FIELD {
            self.severity = Severity::from_name(&value.to_ascii_uppercase());
        }
    }
}

impl Visit for SeverityVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.store(field, value);
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == SEVERITY_FIELD {
            self.store(field, &format!("{:?}", value));
        }
    }
}

#[derive(Debug, Default)]
pub struct RecordVisitor {
    message: String,
    logger: Option<String>,
    severity: Option<String>,
    session_id: Option<String>,
    extra: Vec<(String, String)>,
}

impl RecordVisitor {
    fn store(&mut self, name: &str, value: String) {
        match name {
            MESSAGE_FIELD => self.message = value,
            LOGGER_FIELD => self.logger = Some(value),
            SEVERITY_FIELD => self.severity = Some(value.to_ascii_uppercase()),
            SESSION_FIELD => {
                if !value.is_empty() {
                    self.session_id = Some(value);
                }
            }
            _ => self.extra.push((name.to_string(), value)),
        }
    }

    pub fn into_record(self, target: &str, level: &tracing::Level) -> LogRecord {
        let mut message = self.message;
        for (key, value) in &self.extra {
            if !message.is_empty() {
                message.push(' ');
            }
            message.push_str(&format!("{}={}", key, value));
        }

        let level_name = self
            .severity
            .unwrap_or_else(|| Severity::level_name(level).to_string());

        LogRecord {
            timestamp: Local::now(),
            name: self.logger.unwrap_or_else(|| target.to_string()),
            level_name,
            process: Some(std::process::id()),
            message,
            session_id: self.session_id,
        }
    }
}

impl Visit for RecordVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.store(field.name(), value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.store(field.name(), format!("{:?}", value));
    }
}
