// file: src/format/filter.rs
// description: per-layer severity threshold filter
// reference: https://docs.rs/tracing-subscriber/latest/tracing_subscriber/layer/trait.Filter.html

use crate::models::{LogRecord, Severity};
use tracing::{Event, Metadata};
use tracing_subscriber::layer::{Context, Filter};

// Spans always pass so their session fields survive any threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeverityFilter {
    threshold: Severity,
}

impl SeverityFilter {
    pub fn new(threshold: Severity) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> Severity {
        self.threshold
    }

    pub fn allows(&self, severity: Option<Severity>) -> bool {
        severity.is_some_and(|severity| severity >= self.threshold)
    }
}

impl<S> Filter<S> for SeverityFilter {
    fn enabled(&self, metadata: &Metadata<'_>, _cx: &Context<'_, S>) -> bool {
        if !metadata.is_event() {
            return true;
        }
        *metadata.level() <= self.threshold.tracing_level()
    }

    // CRITICAL shares ERROR's tracing level; the override field settles it.
    fn event_enabled(&self, event: &Event<'_>, _cx: &Context<'_, S>) -> bool {
        self.allows(LogRecord::event_severity(event))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_comparison() {
        let filter = SeverityFilter::new(Severity::Info);

        assert!(!filter.allows(Some(Severity::Debug)));
        assert!(filter.allows(Some(Severity::Info)));
        assert!(filter.allows(Some(Severity::Critical)));
        assert!(!filter.allows(None));
    }

    #[test]
    fn test_critical_threshold_drops_errors() {
        let filter = SeverityFilter::new(Severity::Critical);

        assert!(!filter.allows(Some(Severity::Error)));
        assert!(filter.allows(Some(Severity::Critical)));
        assert_eq!(filter.threshold(), Severity::Critical);
    }
}
