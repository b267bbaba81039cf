// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod record;
pub mod severity;

pub use record::{LogRecord, RecordVisitor};
pub use severity::Severity;
