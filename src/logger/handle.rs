// file: src/logger/handle.rs
// description: named logger handles emitting through a private dispatcher
// reference: https://docs.rs/tracing/latest/tracing/dispatcher/index.html

use crate::models::Severity;
use crate::session::{HasDriver, session_of};
use std::fmt;
use tracing::Dispatch;
use tracing::dispatcher;

/// Emits through its own [`Dispatch`], independent of the global subscriber.
#[derive(Debug)]
pub struct Logger {
    name: String,
    level: Severity,
    dispatch: Dispatch,
}

impl Logger {
    pub(crate) fn new(name: &str, level: Severity, dispatch: Dispatch) -> Self {
        Self {
            name: name.to_string(),
            level,
            dispatch,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> Severity {
        self.level
    }

    pub fn is_enabled_for(&self, severity: Severity) -> bool {
        severity >= self.level
    }

    pub fn log(&self, severity: Severity, message: impl fmt::Display) {
        self.emit(severity, None, &message);
    }

    pub fn debug(&self, message: impl fmt::Display) {
        self.emit(Severity::Debug, None, &message);
    }

    pub fn info(&self, message: impl fmt::Display) {
        self.emit(Severity::Info, None, &message);
    }

    pub fn warning(&self, message: impl fmt::Display) {
        self.emit(Severity::Warning, None, &message);
    }

    pub fn error(&self, message: impl fmt::Display) {
        self.emit(Severity::Error, None, &message);
    }

    pub fn critical(&self, message: impl fmt::Display) {
        self.emit(Severity::Critical, None, &message);
    }

    pub fn bind(&self, ctx: &dyn HasDriver) -> BoundLogger<'_> {
        BoundLogger {
            logger: self,
            session_id: session_of(ctx).map(str::to_string),
        }
    }

    pub fn with_session(&self, session_id: &str) -> BoundLogger<'_> {
        BoundLogger {
            logger: self,
            session_id: (!session_id.is_empty()).then(|| session_id.to_string()),
        }
    }

    /// Runs `f` with this logger as the thread's default dispatcher, so
    /// `tracing` macros and session spans inside `f` reach it.
    pub fn in_scope<T>(&self, f: impl FnOnce() -> T) -> T {
        dispatcher::with_default(&self.dispatch, f)
    }

    fn emit(&self, severity: Severity, session_id: Option<&str>, message: &dyn fmt::Display) {
        if !self.is_enabled_for(severity) {
            return;
        }

        let logger = self.name.as_str();
        dispatcher::with_default(&self.dispatch, || match severity {
            Severity::Debug => tracing::debug!(logger, session_id, "{}", message),
            Severity::Info => tracing::info!(logger, session_id, "{}", message),
            Severity::Warning => tracing::warn!(logger, session_id, "{}", message),
            Severity::Error => tracing::error!(logger, session_id, "{}", message),
            Severity::Critical => {
                tracing::error!(logger, severity = "CRITICAL", session_id, "{}", message)
            }
        });
    }
}

#[derive(Debug, Clone)]
pub struct BoundLogger<'a> {
    logger: &'a Logger,
    session_id: Option<String>,
}

impl BoundLogger<'_> {
    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    pub fn log(&self, severity: Severity, message: impl fmt::Display) {
        self.logger
            .emit(severity, self.session_id.as_deref(), &message);
    }

    pub fn debug(&self, message: impl fmt::Display) {
        self.log(Severity::Debug, message);
    }

    pub fn info(&self, message: impl fmt::Display) {
        self.log(Severity::Info, message);
    }

    pub fn warning(&self, message: impl fmt::Display) {
        self.log(Severity::Warning, message);
    }

    pub fn error(&self, message: impl fmt::Display) {
        self.log(Severity::Error, message);
    }

    pub fn critical(&self, message: impl fmt::Display) {
        self.log(Severity::Critical, message);
    }
}
