// file: src/session/driver.rs
// description: traits for contexts that own a session-bearing driver
// reference: https://docs.rs/tracing/latest/tracing/span/index.html

use tracing::Span;

/// Something holding a live session, e.g. a browser or device driver.
pub trait Driver {
    fn session_id(&self) -> Option<&str>;
}

/// A calling context (test case, page object, worker) that exposes a driver.
pub trait HasDriver {
    fn driver(&self) -> Option<&dyn Driver>;
}

impl<T: Driver + ?Sized> Driver for &T {
    fn session_id(&self) -> Option<&str> {
        (**self).session_id()
    }
}

impl Driver for Option<String> {
    fn session_id(&self) -> Option<&str> {
        self.as_deref()
    }
}

pub fn session_of(ctx: &dyn HasDriver) -> Option<&str> {
    ctx.driver()
        .and_then(|driver| driver.session_id())
        .filter(|id| !id.is_empty())
}

pub fn session_span(ctx: &dyn HasDriver) -> Span {
    match session_of(ctx) {
        Some(id) => tracing::info_span!("session", session_id = id),
        None => Span::none(),
    }
}
