// file: src/session/scope.rs
// description: thread-local stack of entered session contexts
// reference: https://doc.rust-lang.org/std/macro.thread_local.html

use super::driver::{HasDriver, session_of};
use std::cell::RefCell;
use std::marker::PhantomData;

thread_local! {
    static SCOPES: RefCell<Vec<Option<String>>> = const { RefCell::new(Vec::new()) };
}

/// Per-thread stack of entered session contexts, searched innermost first.
pub struct SessionScope;

impl SessionScope {
    // the id is captured on entry
    pub fn enter(ctx: &dyn HasDriver) -> SessionGuard {
        Self::push(session_of(ctx).map(str::to_string))
    }

    pub fn enter_id(session_id: &str) -> SessionGuard {
        let session = (!session_id.is_empty()).then(|| session_id.to_string());
        Self::push(session)
    }

    pub fn current() -> Option<String> {
        SCOPES
            .try_with(|scopes| scopes.borrow().iter().rev().flatten().next().cloned())
            .ok()
            .flatten()
    }

    pub fn depth() -> usize {
        SCOPES
            .try_with(|scopes| scopes.borrow().len())
            .unwrap_or(0)
    }

    fn push(session: Option<String>) -> SessionGuard {
        let depth = SCOPES.with(|scopes| {
            let mut scopes = scopes.borrow_mut();
            scopes.push(session);
            scopes.len() - 1
        });

        SessionGuard {
            depth,
            _not_send: PhantomData,
        }
    }
}

#[must_use = "the session scope ends when the guard is dropped"]
pub struct SessionGuard {
    depth: usize,
    _not_send: PhantomData<*const ()>,
}

impl Drop for SessionGuard {
    fn drop(&mut self) {
        let _ = SCOPES.try_with(|scopes| scopes.borrow_mut().truncate(self.depth));
    }
}
