// file: src/config.rs
// description: logging configuration management with toml and environment support
// reference: https://docs.rs/config

use crate::error::{LogError, Result};
use crate::format::LineTemplate;
use crate::models::Severity;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";
pub const ENV_PREFIX: &str = "SESSION_LOG";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default)]
    pub color: ColorChoice,
    #[serde(default)]
    pub template: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorChoice {
    #[default]
    Always,
    Never,
    Auto,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            color: ColorChoice::default(),
            template: None,
        }
    }
}

impl LoggingConfig {
    pub fn severity(&self) -> Result<Severity> {
        self.level.parse()
    }

    pub fn use_color(&self) -> bool {
        match self.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => colored::control::SHOULD_COLORIZE.should_colorize(),
        }
    }

    pub fn line_template(&self) -> Result<LineTemplate> {
        match self.template.as_deref() {
            Some(template) => LineTemplate::parse(template),
            None => Ok(LineTemplate::new()),
        }
    }
}

impl Config {
    /// Env overrides look like `SESSION_LOG__LOGGING__LEVEL=debug`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder
                .add_source(config::File::from(Path::new(DEFAULT_CONFIG_PATH)).required(false));
        }

        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| LogError::Configuration(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| LogError::Configuration(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            logging: LoggingConfig::default(),
        }
    }

    fn validate(&self) -> Result<()> {
        self.logging.severity()?;
        self.logging.line_template()?;
        Ok(())
    }
}
