// file: src/logger/registry.rs
// description: process-owned registry constructing and tracking named loggers
// reference: https://docs.rs/tracing-subscriber/latest/tracing_subscriber/fmt/writer/struct.BoxMakeWriter.html

use super::handle::Logger;
use super::pipeline::console_pipeline;
use crate::config::LoggingConfig;
use crate::error::Result;
use crate::format::{ColoredFormatter, LineTemplate};
use crate::models::Severity;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::Dispatch;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

type WriterFactory = Arc<dyn Fn() -> BoxMakeWriter + Send + Sync>;

/// Owns the loggers of a process; build one at startup and pass it around.
pub struct LoggerRegistry {
    config: LoggingConfig,
    writer: WriterFactory,
    loggers: RwLock<HashMap<String, Arc<Logger>>>,
}

impl LoggerRegistry {
    pub fn new(config: LoggingConfig) -> Self {
        Self::with_writer(config, std::io::stderr)
    }

    pub fn with_writer<W>(config: LoggingConfig, make_writer: W) -> Self
    where
        W: for<'a> MakeWriter<'a> + Clone + Send + Sync + 'static,
    {
        Self {
            config,
            writer: Arc::new(move || BoxMakeWriter::new(make_writer.clone())),
            loggers: RwLock::new(HashMap::new()),
        }
    }

    pub fn config(&self) -> &LoggingConfig {
        &self.config
    }

    /// Missing `level`/`template` fall back to the config. Re-requesting a
    /// name replaces the previous logger.
    pub fn get_logger(
        &self,
        name: &str,
        level: Option<&str>,
        template: Option<&str>,
    ) -> Result<Arc<Logger>> {
        let level: Severity = match level.filter(|level| !level.trim().is_empty()) {
            Some(level) => level.parse()?,
            None => self.config.severity()?,
        };

        let template = match template {
            Some(template) => LineTemplate::parse(template)?,
            None => self.config.line_template()?,
        };

        let formatter = ColoredFormatter::new(template, self.config.use_color());
        let dispatch = Dispatch::new(console_pipeline(formatter, level, (self.writer)()));
        let logger = Arc::new(Logger::new(name, level, dispatch));

        self.loggers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name.to_string(), Arc::clone(&logger));

        Ok(logger)
    }

    pub fn logger(&self, name: &str) -> Option<Arc<Logger>> {
        self.loggers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
    }

    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .loggers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        names.sort();
        names
    }
}

impl Default for LoggerRegistry {
    fn default() -> Self {
        Self::new(LoggingConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::strip_ansi;
    use crate::config::ColorChoice;
    use crate::error::LogError;
    use crate::session::{Driver, NO_SESSION_ID, SessionScope, session_span};
    use crate::utils::MemoryWriter;
    use pretty_assertions::assert_eq;

    struct Browser {
        session_id: Option<String>,
    }

    impl Driver for Browser {
        fn session_id(&self) -> Option<&str> {
            self.session_id.as_deref()
        }
    }

    struct CheckoutTest {
        driver: Browser,
    }

    impl crate::session::HasDriver for CheckoutTest {
        fn driver(&self) -> Option<&dyn Driver> {
            Some(&self.driver)
        }
    }

    fn checkout(session_id: &str) -> CheckoutTest {
        CheckoutTest {
            driver: Browser {
                session_id: Some(session_id.to_string()),
            },
        }
    }

    fn registry(color: ColorChoice) -> (LoggerRegistry, MemoryWriter) {
        let writer = MemoryWriter::new();
        let config = LoggingConfig {
            color,
            ..LoggingConfig::default()
        };
        (LoggerRegistry::with_writer(config, writer.clone()), writer)
    }

    #[test]
    fn test_info_without_session() -> anyhow::Result<()> {
        let (registry, writer) = registry(ColorChoice::Always);
        let logger = registry.get_logger("app", Some("INFO"), None)?;

        logger.info("hello");

        let output = writer.contents();
        assert!(output.ends_with(&format!(
            "{}: hello\n",
            crate::color::colorize_identifier(NO_SESSION_ID)
        )));
        assert!(strip_ansi(&output).ends_with("<no session id>: hello\n"));
        assert_eq!(writer.lines().len(), 1);
        Ok(())
    }

    #[test]
    fn test_line_layout_without_color() -> anyhow::Result<()> {
        let (registry, writer) = registry(ColorChoice::Never);
        let logger = registry.get_logger("app", Some("info"), None)?;

        logger.warning("disk almost full");

        let line = writer.lines().remove(0);
        let expected_tail = format!(
            "] {} WARNING <no session id>: disk almost full",
            std::process::id()
        );
        assert!(line.starts_with('['));
        assert!(line.ends_with(&expected_tail), "unexpected line: {line}");
        Ok(())
    }

    #[test]
    fn test_below_threshold_suppressed() -> anyhow::Result<()> {
        let (registry, writer) = registry(ColorChoice::Never);
        let logger = registry.get_logger("app", Some("INFO"), None)?;

        logger.debug("hidden");

        assert!(writer.is_empty());
        assert!(!logger.is_enabled_for(Severity::Debug));
        Ok(())
    }

    #[test]
    fn test_invalid_level_fails_construction() {
        let (registry, writer) = registry(ColorChoice::Never);

        let err = registry
            .get_logger("app", Some("NOTALEVEL"), None)
            .unwrap_err();

        assert!(matches!(err, LogError::Configuration(_)));
        assert!(registry.logger("app").is_none());
        assert!(writer.is_empty());
    }

    #[test]
    fn test_invalid_configured_level_fails_construction() {
        let writer = MemoryWriter::new();
        let config = LoggingConfig {
            level: "loud".to_string(),
            ..LoggingConfig::default()
        };
        let registry = LoggerRegistry::with_writer(config, writer);

        let err = registry.get_logger("app", None, None).unwrap_err();

        assert!(matches!(err, LogError::Configuration(_)));
    }

    #[test]
    fn test_level_falls_back_to_config() -> anyhow::Result<()> {
        let writer = MemoryWriter::new();
        let config = LoggingConfig {
            level: "warning".to_string(),
            color: ColorChoice::Never,
            template: None,
        };
        let registry = LoggerRegistry::with_writer(config, writer.clone());

        let logger = registry.get_logger("app", None, None)?;
        logger.info("skipped");
        logger.error("kept");

        assert_eq!(logger.level(), Severity::Warning);
        assert_eq!(writer.lines().len(), 1);
        assert!(writer.contents().contains("ERROR <no session id>: kept"));
        Ok(())
    }

    #[test]
    fn test_critical_threshold() -> anyhow::Result<()> {
        let (registry, writer) = registry(ColorChoice::Never);
        let logger = registry.get_logger("app", Some("CRITICAL"), Some("{levelname} {message}"))?;

        logger.error("not yet");
        logger.critical("meltdown");

        assert_eq!(writer.lines(), vec!["CRITICAL meltdown"]);
        Ok(())
    }

    #[test]
    fn test_bound_logger_uses_driver_session() -> anyhow::Result<()> {
        let (registry, writer) = registry(ColorChoice::Never);
        let logger = registry.get_logger("app", Some("DEBUG"), Some("{session_id}: {message}"))?;
        let test = checkout("abc123");

        logger.bind(&test).debug("clicked pay");
        logger.with_session("").info("no session");

        assert_eq!(
            writer.lines(),
            vec!["abc123: clicked pay", "<no session id>: no session"]
        );
        Ok(())
    }

    #[test]
    fn test_session_span_supplies_session() -> anyhow::Result<()> {
        let (registry, writer) = registry(ColorChoice::Never);
        let logger = registry.get_logger("app", Some("INFO"), Some("{session_id}: {message}"))?;
        let test = checkout("span-session");

        logger.in_scope(|| {
            let _span = session_span(&test).entered();
            logger.info("inside span");
            tracing::info!("from macro");
        });
        logger.info("outside span");

        assert_eq!(
            writer.lines(),
            vec![
                "span-session: inside span",
                "span-session: from macro",
                "<no session id>: outside span",
            ]
        );
        Ok(())
    }

    #[test]
    fn test_ambient_scope_supplies_session() -> anyhow::Result<()> {
        let (registry, writer) = registry(ColorChoice::Never);
        let logger = registry.get_logger("app", Some("INFO"), Some("{session_id}: {message}"))?;
        let test = checkout("ambient");

        {
            let _scope = SessionScope::enter(&test);
            logger.info("in scope");
        }
        logger.info("after scope");

        assert_eq!(
            writer.lines(),
            vec!["ambient: in scope", "<no session id>: after scope"]
        );
        Ok(())
    }

    #[test]
    fn test_session_colored_consistently() -> anyhow::Result<()> {
        let (registry, writer) = registry(ColorChoice::Always);
        let logger = registry.get_logger("app", Some("INFO"), Some("{session_id}"))?;

        logger.with_session("abc123").info("one");
        logger.with_session("abc123").info("two");

        let lines = writer.lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], lines[1]);
        assert_eq!(lines[0], crate::color::colorize_identifier("abc123"));
        Ok(())
    }

    #[test]
    fn test_name_placeholder_and_replacement() -> anyhow::Result<()> {
        let (registry, writer) = registry(ColorChoice::Never);
        registry.get_logger("worker", Some("ERROR"), None)?;
        let logger = registry.get_logger("worker", Some("INFO"), Some("{name}: {message}"))?;
        registry.get_logger("api", None, None)?;

        logger.info("started");

        assert_eq!(writer.lines(), vec!["worker: started"]);
        assert_eq!(registry.names(), vec!["api", "worker"]);
        assert_eq!(
            registry.logger("worker").map(|l| l.level()),
            Some(Severity::Info)
        );
        Ok(())
    }

    #[test]
    fn test_invalid_template_fails_construction() {
        let (registry, _writer) = registry(ColorChoice::Never);

        let err = registry
            .get_logger("app", Some("INFO"), Some("{nope}"))
            .unwrap_err();

        assert!(matches!(err, LogError::Template(_)));
    }

    #[test]
    fn test_construction_inside_scope_stays_silent() -> anyhow::Result<()> {
        let (registry, outer_writer) = registry(ColorChoice::Never);
        let outer = registry.get_logger("outer", Some("DEBUG"), Some("{name} {message}"))?;

        let inner = outer.in_scope(|| registry.get_logger("inner", Some("INFO"), None))?;

        assert!(outer_writer.is_empty(), "unexpected output: {:?}", outer_writer.lines());
        assert_eq!(inner.name(), "inner");
        Ok(())
    }

    #[test]
    fn test_threads_log_their_own_sessions() -> anyhow::Result<()> {
        let (registry, writer) = registry(ColorChoice::Never);
        let logger = registry.get_logger("app", Some("INFO"), Some("{session_id}: {message}"))?;

        let workers: Vec<_> = ["alpha", "beta"]
            .into_iter()
            .map(|session| {
                let logger = Arc::clone(&logger);
                std::thread::spawn(move || {
                    let _scope = SessionScope::enter_id(session);
                    for _ in 0..20 {
                        logger.info(session);
                    }
                })
            })
            .collect();
        for worker in workers {
            worker.join().unwrap();
        }

        let lines = writer.lines();
        assert_eq!(lines.len(), 40);
        for line in &lines {
            let (session, message) = line.split_once(": ").unwrap();
            assert_eq!(session, message);
        }
        assert_eq!(lines.iter().filter(|l| l.starts_with("alpha")).count(), 20);
        Ok(())
    }
}
