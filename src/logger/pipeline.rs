// file: src/logger/pipeline.rs
// description: subscriber stack shared by registry loggers and the global logger
// reference: https://docs.rs/tracing-subscriber/latest/tracing_subscriber/layer/index.html

use crate::format::{ColoredFormatter, SeverityFilter};
use crate::models::Severity;
use crate::session::SessionLayer;
use tracing::Subscriber;
use tracing_subscriber::fmt::{self, MakeWriter};
use tracing_subscriber::prelude::*;

pub fn console_pipeline<W>(
    formatter: ColoredFormatter,
    threshold: Severity,
    make_writer: W,
) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let console_layer = fmt::layer()
        .event_format(formatter)
        .with_writer(make_writer)
        .with_filter(SeverityFilter::new(threshold));

    tracing_subscriber::registry()
        .with(SessionLayer::new())
        .with(console_layer)
}
