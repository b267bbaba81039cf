// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod color;
pub mod config;
pub mod error;
pub mod format;
pub mod logger;
pub mod models;
pub mod session;
pub mod utils;

pub use color::{BaseColor, ColorTable, color_index_for, colorize};
pub use crate::config::{ColorChoice, Config, LoggingConfig};
pub use error::{LogError, Result};
pub use format::{ColoredFormatter, LineTemplate, SeverityFilter};
pub use logger::{BoundLogger, Logger, LoggerRegistry};
pub use models::{LogRecord, Severity};
pub use session::{
    Driver, HasDriver, NO_SESSION_ID, SessionGuard, SessionLayer, SessionResolver, SessionScope,
    session_span,
};
pub use utils::{MemoryWriter, init_logger};
