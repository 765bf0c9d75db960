//! Authoritative state container for the window manager.

use crate::model::DesktopState;
use crate::reducer::{reduce_desktop, DesktopAction, RuntimeEffect};

/// Owns [`DesktopState`] and is its sole mutation entry point.
///
/// Collaborators read through [`WindowStore::state`] and mutate only by
/// dispatching actions; no field of the aggregate is reachable mutably from
/// outside the store.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WindowStore {
    state: DesktopState,
}

impl WindowStore {
    /// Creates a store with an empty desktop.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only view of the current state.
    pub fn state(&self) -> &DesktopState {
        &self.state
    }

    /// Applies one action and returns the side effects to execute.
    pub fn dispatch(&mut self, action: DesktopAction) -> Vec<RuntimeEffect> {
        reduce_desktop(&mut self.state, action)
    }
}
