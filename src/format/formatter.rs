// file: src/format/formatter.rs
// description: colorizing event formatter producing one console line per event
// reference: https://docs.rs/tracing-subscriber/latest/tracing_subscriber/fmt/trait.FormatEvent.html

use super::template::{LineFields, LineTemplate};
use crate::color::{colorize_identifier, colorize_level};
use crate::models::LogRecord;
use crate::session::SessionResolver;
use chrono::{DateTime, Local};
use std::fmt;
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::FmtContext;
use tracing_subscriber::fmt::format::{FormatEvent, FormatFields, Writer};
use tracing_subscriber::registry::LookupSpan;

pub fn format_asctime(timestamp: &DateTime<Local>) -> String {
    timestamp.format("%Y-%m-%d %H:%M:%S,%3f").to_string()
}

#[derive(Debug, Clone)]
pub struct ColoredFormatter {
    template: LineTemplate,
    use_color: bool,
}

impl ColoredFormatter {
    pub fn new(template: LineTemplate, use_color: bool) -> Self {
        Self {
            template,
            use_color,
        }
    }

    pub fn template(&self) -> &LineTemplate {
        &self.template
    }

    pub fn use_color(&self) -> bool {
        self.use_color
    }

    pub fn format(&self, record: &LogRecord) -> String {
        let asctime = format_asctime(&record.timestamp);
        let process = record.process.map(|pid| pid.to_string());
        let session_id = record.session_id.as_deref().unwrap_or_default();

        let (levelname, process, session_id) = if self.use_color {
            let levelname = match record.severity() {
                Some(severity) => colorize_level(severity),
                None => record.level_name.clone(),
            };
            let process = process.map(|pid| colorize_identifier(&pid));
            let session_id = if session_id.is_empty() {
                String::new()
            } else {
                colorize_identifier(session_id)
            };
            (levelname, process, session_id)
        } else {
            (record.level_name.clone(), process, session_id.to_string())
        };

        self.template.render(&LineFields {
            asctime: &asctime,
            process: process.as_deref().unwrap_or("-"),
            levelname: &levelname,
            session_id: &session_id,
            message: &record.message,
            name: &record.name,
        })
    }
}

impl Default for ColoredFormatter {
    fn default() -> Self {
        Self::new(LineTemplate::default(), true)
    }
}

impl<S, N> FormatEvent<S, N> for ColoredFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let mut record = LogRecord::from_event(event);
        let span_sessions = SessionResolver::span_sessions(ctx.event_scope());
        SessionResolver::resolve(&mut record, span_sessions);

        writeln!(writer, "{}", self.format(&record))
    }
}
