//! Window-manager core for the desktop shell.
//!
//! Owns the authoritative desktop state and every transition over it: window
//! lifecycle, focus and z-order, drag/resize interaction sessions, maximize
//! bookkeeping, and edge/corner snapping. The crate has no UI dependency; the
//! shell runtime consumes it through [`store::WindowStore`].

pub mod model;
pub mod reducer;
pub mod session;
pub mod snap;
pub mod store;

pub use model::*;
pub use reducer::{reduce_desktop, DesktopAction, RuntimeEffect};
pub use snap::{classify, SnapZone, SNAP_THRESHOLD};
pub use store::WindowStore;
