// file: src/models/severity.rs
// description: severity levels, level-name parsing and tracing level mapping
// reference: https://docs.rs/tracing/latest/tracing/struct.Level.html

use crate::color::BaseColor;
use crate::error::LogError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::Level;

pub const SEVERITY_FIELD: &str = "severity";

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl Severity {
    pub const ALL: [Severity; 5] = [
        Severity::Debug,
        Severity::Info,
        Severity::Warning,
        Severity::Error,
        Severity::Critical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
            Severity::Critical => "CRITICAL",
        }
    }

    // aliases are accepted only by FromStr
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == name)
    }

    pub fn base_color(&self) -> BaseColor {
        match self {
            Severity::Warning => BaseColor::Yellow,
            Severity::Info => BaseColor::White,
            Severity::Debug => BaseColor::Blue,
            Severity::Critical => BaseColor::Magenta,
            Severity::Error => BaseColor::Red,
        }
    }

    pub fn tracing_level(&self) -> Level {
        match self {
            Severity::Debug => Level::DEBUG,
            Severity::Info => Level::INFO,
            Severity::Warning => Level::WARN,
            Severity::Error | Severity::Critical => Level::ERROR,
        }
    }

    pub fn from_tracing(level: &Level) -> Option<Self> {
        match *level {
            Level::ERROR => Some(Severity::Error),
            Level::WARN => Some(Severity::Warning),
            Level::INFO => Some(Severity::Info),
            Level::DEBUG => Some(Severity::Debug),
            _ => None,
        }
    }

    pub fn level_name(level: &Level) -> &'static str {
        match Self::from_tracing(level) {
            Some(severity) => severity.as_str(),
            None => "TRACE",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "DEBUG" => Ok(Severity::Debug),
            "INFO" => Ok(Severity::Info),
            "WARNING" | "WARN" => Ok(Severity::Warning),
            "ERROR" => Ok(Severity::Error),
            "CRITICAL" | "FATAL" => Ok(Severity::Critical),
            _ => Err(LogError::Configuration(format!(
                "unknown log level '{}'",
                s
            ))),
        }
    }
}
