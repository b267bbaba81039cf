// file: src/session/resolver.rs
// description: resolves the session id of a record from the emitting context
// reference: https://docs.rs/tracing-subscriber/latest/tracing_subscriber/registry/struct.Scope.html

use super::layer::SpanSession;
use super::scope::SessionScope;
use crate::models::LogRecord;
use tracing_subscriber::registry::{LookupSpan, Scope};

pub const NO_SESSION_ID: &str = "<no session id>";

/// Fills in `LogRecord::session_id` before formatting.
///
/// Sources are consulted nearest-first and the first non-empty id wins:
/// 1. an explicit `session_id` already on the record (passed with the event),
/// 2. sessions recorded on the enclosing spans, innermost first,
/// 3. the calling thread's [`SessionScope`] stack, innermost first.
///
/// When nothing matches the record gets [`NO_SESSION_ID`]. Never fails.
pub struct SessionResolver;

impl SessionResolver {
    pub fn resolve<I>(record: &mut LogRecord, span_sessions: I)
    where
        I: IntoIterator<Item = String>,
    {
        if record.session_id.as_deref().is_some_and(|id| !id.is_empty()) {
            return;
        }

        let resolved = span_sessions
            .into_iter()
            .find(|id| !id.is_empty())
            .or_else(SessionScope::current)
            .unwrap_or_else(|| NO_SESSION_ID.to_string());

        record.session_id = Some(resolved);
    }

    pub fn span_sessions<'a, S>(scope: Option<Scope<'a, S>>) -> Vec<String>
    where
        S: LookupSpan<'a>,
    {
        let mut sessions = Vec::new();
        if let Some(scope) = scope {
            for span in scope {
                if let Some(session) = span.extensions().get::<SpanSession>() {
                    sessions.push(session.0.clone());
                }
            }
        }
        sessions
    }
}
