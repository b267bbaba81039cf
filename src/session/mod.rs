// file: src/session/mod.rs
// description: session context discovery module exports
// reference: internal module structure

pub mod driver;
pub mod layer;
pub mod resolver;
pub mod scope;

pub use driver::{Driver, HasDriver, session_of, session_span};
pub use layer::{SessionLayer, SpanSession};
pub use resolver::{NO_SESSION_ID, SessionResolver};
pub use scope::{SessionGuard, SessionScope};
