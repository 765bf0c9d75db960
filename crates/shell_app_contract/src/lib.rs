//! Shared contract types between the desktop window manager and application
//! payloads.
//!
//! The window manager treats application content as an opaque capability: it
//! stores an [`ApplicationId`] plus a launch payload, and the shell mounts the
//! actual view through a host-supplied [`AppModule`] factory. Nothing in this
//! crate knows about window geometry or manager state.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use leptos::View;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Stable identifier for a runtime-managed window, as seen by app payloads.
pub type WindowRuntimeId = u64;

/// Error produced when an application id string violates the naming policy.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AppIdError {
    /// The raw string is not a valid dotted, lowercase identifier.
    #[error("invalid application id `{0}`; expected namespaced dotted segments")]
    Invalid(String),
}

/// Stable identifier for an installable application.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ApplicationId(String);

impl ApplicationId {
    /// Returns an app identifier when `raw` conforms to the
    /// `segment.segment...` policy.
    pub fn new(raw: impl Into<String>) -> Result<Self, AppIdError> {
        let raw = raw.into();
        if is_valid_application_id(&raw) {
            Ok(Self(raw))
        } else {
            Err(AppIdError::Invalid(raw))
        }
    }

    /// Returns the string form of the identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Creates an id without validation for compile-time trusted constants.
    pub fn trusted(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }
}

impl std::fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn is_valid_application_id(raw: &str) -> bool {
    if raw.is_empty() || raw.len() > 120 {
        return false;
    }

    let mut count = 0usize;
    for part in raw.split('.') {
        count += 1;
        if part.is_empty() || part.len() > 32 {
            return false;
        }
        let bytes = part.as_bytes();
        if !bytes[0].is_ascii_lowercase() {
            return false;
        }
        if !bytes
            .iter()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || *b == b'-')
        {
            return false;
        }
        if part.ends_with('-') {
            return false;
        }
    }

    count >= 2
}

#[derive(Clone)]
/// Mount context injected by the shell per window instance.
///
/// `launch_params` is the opaque payload supplied at window-open time; the
/// window manager hands it through without inspecting it.
pub struct AppMountContext {
    /// Stable runtime window id hosting this payload.
    pub window_id: WindowRuntimeId,
    /// Launch payload supplied by the application definition.
    pub launch_params: Value,
}

/// Static app mount function used by the shell registry.
pub type AppMountFn = fn(AppMountContext) -> View;

#[derive(Debug, Clone, Copy)]
/// Mounted app module descriptor used by the shell app registry.
pub struct AppModule {
    mount_fn: AppMountFn,
}

impl AppModule {
    /// Creates a module from a mount function.
    pub const fn new(mount_fn: AppMountFn) -> Self {
        Self { mount_fn }
    }

    /// Mounts the app view with a shell-provided context.
    pub fn mount(self, context: AppMountContext) -> View {
        (self.mount_fn)(context)
    }
}

#[derive(Debug, Clone)]
/// One installable application as declared to the shell.
pub struct AppDefinition {
    /// Canonical app id.
    pub id: ApplicationId,
    /// Human-readable display name.
    pub name: &'static str,
    /// Icon source rendered by launcher surfaces; display metadata only.
    pub icon: &'static str,
    /// Declared default window width in pixels.
    pub default_width: i32,
    /// Declared default window height in pixels.
    pub default_height: i32,
    /// Fixed-purpose utility windows opt out of drag-release snapping.
    pub snap_exempt: bool,
    /// Opaque payload handed to [`AppModule::mount`] for each new window.
    pub launch_params: Value,
    /// Content factory for this application.
    pub module: AppModule,
}
