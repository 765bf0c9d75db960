use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use shell_app_contract::ApplicationId;

/// System default window width when an app declares none.
pub const DEFAULT_WINDOW_WIDTH: i32 = 640;
/// System default window height when an app declares none.
pub const DEFAULT_WINDOW_HEIGHT: i32 = 480;
/// Minimum window width enforced during resize.
pub const MIN_WINDOW_WIDTH: i32 = 300;
/// Minimum window height enforced during resize.
pub const MIN_WINDOW_HEIGHT: i32 = 200;
/// Height of the reserved taskbar strip at the bottom of the desktop box.
pub const TASKBAR_HEIGHT: i32 = 48;
/// Cascade offset applied per already-open window when placing a new one.
pub const CASCADE_OFFSET_STEP: i32 = 20;
/// Horizontal strip of a dragged window that must stay on screen.
pub const DRAG_EDGE_MARGIN: i32 = 100;
/// Vertical margin keeping a dragged titlebar above the taskbar.
pub const DRAG_BOTTOM_MARGIN: i32 = 30;
/// First z-index handed out; the counter only grows from here.
pub const BASE_Z_INDEX: u32 = 100;

/// Stable identifier for one open window. Never reused within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WindowId(pub u64);

/// Window geometry in desktop-box pixel coordinates, top-left anchored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl WindowRect {
    /// X coordinate of the right edge.
    pub fn right(self) -> i32 {
        self.x + self.w
    }

    /// Y coordinate of the bottom edge.
    pub fn bottom(self) -> i32 {
        self.y + self.h
    }
}

/// Measured bounding box of the desktop surface, including the taskbar strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesktopBox {
    pub width: i32,
    pub height: i32,
}

impl DesktopBox {
    /// True when the container has not been laid out yet.
    pub fn is_empty(self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

/// Pointer sample in desktop-box pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

/// Declared default window size of an application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSize {
    pub w: i32,
    pub h: i32,
}

impl Default for WindowSize {
    fn default() -> Self {
        Self {
            w: DEFAULT_WINDOW_WIDTH,
            h: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

/// One open application window and its geometry/state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowInstance {
    pub id: WindowId,
    /// Originating application; used for single-instance dedup and content
    /// factory lookup.
    pub app_id: ApplicationId,
    pub title: String,
    pub icon: String,
    pub rect: WindowRect,
    /// Declared default size, kept for maximize-restore fallback.
    pub default_size: WindowSize,
    pub z_index: u32,
    pub minimized: bool,
    pub maximized: bool,
    pub is_focused: bool,
    /// Fixed-purpose utility windows are not reflowed by snap zones.
    pub snap_exempt: bool,
    /// Opaque content payload; stored and handed through, never inspected.
    pub launch_params: Value,
}

/// Request to open a window for an application definition.
#[derive(Debug, Clone, PartialEq)]
pub struct OpenWindowRequest {
    pub app_id: ApplicationId,
    pub title: String,
    pub icon: String,
    /// Declared default size; `None` falls back to the system default.
    pub default_size: Option<WindowSize>,
    pub snap_exempt: bool,
    pub launch_params: Value,
}

impl OpenWindowRequest {
    /// Creates a request with system defaults for everything but the id.
    pub fn new(app_id: ApplicationId, title: impl Into<String>) -> Self {
        Self {
            app_id,
            title: title.into(),
            icon: String::new(),
            default_size: None,
            snap_exempt: false,
            launch_params: Value::Null,
        }
    }
}

/// The at-most-one live pointer interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionSession {
    /// No interaction in progress.
    #[default]
    Idle,
    /// A titlebar drag; `pointer_offset` is pointer minus window origin at
    /// session start.
    Move {
        window_id: WindowId,
        pointer_offset: PointerPosition,
    },
    /// A resize from the bottom-right handle; `origin` snapshots geometry at
    /// session start so deltas extend from a fixed top-left anchor.
    Resize {
        window_id: WindowId,
        origin: WindowRect,
    },
}

impl InteractionSession {
    /// The window the session targets, if one is live.
    pub fn window_id(self) -> Option<WindowId> {
        match self {
            Self::Idle => None,
            Self::Move { window_id, .. } | Self::Resize { window_id, .. } => Some(window_id),
        }
    }

    /// True when no interaction is in progress.
    pub fn is_idle(self) -> bool {
        matches!(self, Self::Idle)
    }
}

/// Root aggregate owned by [`crate::store::WindowStore`].
#[derive(Debug, Clone, PartialEq)]
pub struct DesktopState {
    /// Monotonic source for [`WindowId`] values.
    pub next_window_id: u64,
    /// Monotonic source for stacking order; invariant: all live `z_index`
    /// values are pairwise distinct and below this counter.
    pub next_z_index: u32,
    /// Open windows in insertion order; render order is governed by
    /// `z_index`, not position in this collection.
    pub windows: Vec<WindowInstance>,
    /// Currently focused window, if any.
    pub active_window_id: Option<WindowId>,
    /// The live pointer interaction.
    pub session: InteractionSession,
    /// Pre-maximize geometry per window; an entry exists iff that window is
    /// currently maximized.
    pub saved_geometry: BTreeMap<WindowId, WindowRect>,
}

impl Default for DesktopState {
    fn default() -> Self {
        Self {
            next_window_id: 1,
            next_z_index: BASE_Z_INDEX,
            windows: Vec::new(),
            active_window_id: None,
            session: InteractionSession::Idle,
            saved_geometry: BTreeMap::new(),
        }
    }
}

impl DesktopState {
    /// Looks up a window by id.
    pub fn window(&self, id: WindowId) -> Option<&WindowInstance> {
        self.windows.iter().find(|w| w.id == id)
    }

    /// Id of the window currently holding focus.
    pub fn focused_window_id(&self) -> Option<WindowId> {
        self.windows.iter().find(|w| w.is_focused).map(|w| w.id)
    }
}
