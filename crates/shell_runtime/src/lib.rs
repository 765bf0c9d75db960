//! Leptos runtime for the desktop shell: provider wiring, host boundary,
//! application catalog, and the UI surfaces driven by the window-manager
//! core.

pub mod apps;
pub mod components;
pub mod host;
pub mod runtime_context;

pub use components::DesktopShell;
pub use runtime_context::{use_shell_runtime, ShellProvider, ShellRuntimeContext};
