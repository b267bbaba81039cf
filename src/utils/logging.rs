// file: src/utils/logging.rs
// description: process-wide tracing subscriber with session-aware colored output
// reference: https://docs.rs/tracing-subscriber

use crate::config::LoggingConfig;
use crate::error::{LogError, Result};
use crate::format::ColoredFormatter;
use crate::logger::console_pipeline;
use tracing_subscriber::prelude::*;

pub fn init_logger(config: &LoggingConfig) -> Result<()> {
    let level = config.severity()?;
    let formatter = ColoredFormatter::new(config.line_template()?, config.use_color());

    console_pipeline(formatter, level, std::io::stderr)
        .try_init()
        .map_err(|e| LogError::Subscriber(e.to_string()))?;

    tracing::debug!(level = %level, "logging initialized");
    Ok(())
}
