//! Runtime provider and context wiring for the desktop shell.
//!
//! Owns the long-lived [`WindowStore`] signal and the dispatch callback
//! components use to mutate it. Side effects emitted by the store are
//! executed against the host boundary right after each transition; UI
//! composition stays in [`crate::components`].

use leptos::*;
use shell_core::{DesktopAction, WindowStore};

use crate::host;

#[derive(Clone, Copy)]
/// Leptos context for reading desktop state and dispatching [`DesktopAction`]
/// values.
pub struct ShellRuntimeContext {
    /// Reactive window-store signal. Components read it; only the dispatch
    /// callback writes it.
    pub store: RwSignal<WindowStore>,
    /// Store dispatch callback, the sole mutation path.
    pub dispatch: Callback<DesktopAction>,
}

impl ShellRuntimeContext {
    /// Dispatches an action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }
}

#[component]
/// Provides [`ShellRuntimeContext`] to descendant components.
pub fn ShellProvider(children: Children) -> impl IntoView {
    let store = create_rw_signal(WindowStore::new());

    let dispatch = Callback::new(move |action: DesktopAction| {
        let previous = store.get_untracked();
        let mut next = previous.clone();
        let effects = next.dispatch(action);
        if next != previous {
            store.set(next);
        }
        for effect in &effects {
            host::run_effect(effect);
        }
    });

    provide_context(ShellRuntimeContext { store, dispatch });

    children().into_view()
}

/// Returns the current [`ShellRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`ShellProvider`].
pub fn use_shell_runtime() -> ShellRuntimeContext {
    use_context::<ShellRuntimeContext>().expect("ShellRuntimeContext not provided")
}
