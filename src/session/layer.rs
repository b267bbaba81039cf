// file: src/session/layer.rs
// description: layer capturing session ids recorded on tracing spans
// reference: https://docs.rs/tracing-subscriber/latest/tracing_subscriber/layer/trait.Layer.html

use crate::models::record::SESSION_FIELD;
use std::fmt;
use tracing::field::{Field, Visit};
use tracing::{Subscriber, span};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanSession(pub String);

#[derive(Debug, Default, Clone, Copy)]
pub struct SessionLayer;

impl SessionLayer {
    pub fn new() -> Self {
        Self
    }
}

impl<S> Layer<S> for SessionLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_new_span(&self, attrs: &span::Attributes<'_>, id: &span::Id, ctx: Context<'_, S>) {
        let mut visitor = SessionVisitor::default();
        attrs.record(&mut visitor);

        if let Some(session) = visitor.session
            && let Some(span) = ctx.span(id)
        {
            span.extensions_mut().replace(SpanSession(session));
        }
    }

    fn on_record(&self, id: &span::Id, values: &span::Record<'_>, ctx: Context<'_, S>) {
        let mut visitor = SessionVisitor::default();
        values.record(&mut visitor);

        if let Some(session) = visitor.session
            && let Some(span) = ctx.span(id)
        {
            span.extensions_mut().replace(SpanSession(session));
        }
    }
}

#[derive(Default)]
struct SessionVisitor {
    session: Option<String>,
}

impl SessionVisitor {
    fn store(&mut self, field: &Field, value: String) {
        if field.name() == SESSION_FIELD && !value.is_empty() {
            self.session = Some(value);
        }
    }
}

impl Visit for SessionVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.store(field, value.to_string());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.store(field, format!("{:?}", value));
    }
}
