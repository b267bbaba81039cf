// file: src/utils/mod.rs
// description: utility functions module exports
// reference: internal module structure

pub mod capture;
pub mod logging;

pub use capture::MemoryWriter;
pub use logging::init_logger;
