// file: src/logger/mod.rs
// description: logger construction and registry module exports
// reference: internal module structure

pub mod handle;
pub mod pipeline;
pub mod registry;

pub use handle::{BoundLogger, Logger};
pub use pipeline::console_pipeline;
pub use registry::LoggerRegistry;
