// file: src/format/mod.rs
// description: record formatting module exports
// reference: internal module structure

pub mod filter;
pub mod formatter;
pub mod template;

pub use filter::SeverityFilter;
pub use formatter::{ColoredFormatter, format_asctime};
pub use template::{DEFAULT_TEMPLATE, LineFields, LineTemplate, Placeholder};
