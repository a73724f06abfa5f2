//! # Session State
//!
//! Holds the one live [`Session`] for the process.
//!
//! ## Ownership
//! The shell owns a `SessionState` by value and hands `&mut` to the
//! commands that change it. There is a single event loop and no other
//! thread, so there is no lock: exclusive access is what `&mut` already
//! guarantees.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  command ──► dispatch(action) ──► next = session.reduce(&action)        │
//! │                                        │                                │
//! │                    next.changed_from(&session)?  ──► log + replace      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use beesy_core::{Action, Session};
use tracing::debug;

#[derive(Debug, Default)]
pub struct SessionState {
    session: Session,
    /// Number of dispatches that produced a new state.
    revision: u64,
}

impl SessionState {
    /// Fresh session: landing view, empty cart.
    pub fn new() -> Self {
        SessionState::default()
    }

    /// Executes a function with read access to the session.
    pub fn with_session<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Session) -> R,
    {
        f(&self.session)
    }

    /// Runs `action` through the reducer and keeps the result.
    ///
    /// Returns whether anything changed.
    pub fn dispatch(&mut self, action: Action) -> bool {
        let next = self.session.reduce(&action);
        let changed = next.changed_from(&self.session);

        if changed {
            self.revision += 1;
            self.session = next;
        }

        debug!(?action, changed, revision = self.revision, "dispatch");
        changed
    }

    /// Counts state-changing dispatches since startup. A view layer can
    /// compare revisions to decide whether to redraw.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use beesy_core::{Catalog, View};

    #[test]
    fn test_dispatch_tracks_changes() {
        let snake = Catalog::plants().require("snake").unwrap().clone();
        let mut state = SessionState::new();

        assert!(state.dispatch(Action::AddToCart(snake.clone())));
        assert!(!state.dispatch(Action::AddToCart(snake)));
        assert!(!state.dispatch(Action::Increase("cactus".to_string())));
        assert!(state.dispatch(Action::Navigate(View::Cart)));

        assert_eq!(state.revision(), 2);
        state.with_session(|s| {
            assert_eq!(s.view(), View::Cart);
            assert_eq!(s.totals().total_items, 1);
        });
    }
}
