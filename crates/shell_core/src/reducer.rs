//! Reducer actions, side-effect intents, and transition logic for the window
//! manager.
//!
//! Every mutation of [`DesktopState`] flows through [`reduce_desktop`].
//! Actions referencing a window that no longer exists degrade to no-ops; the
//! transition function never fails.

use crate::model::{
    DesktopBox, DesktopState, InteractionSession, OpenWindowRequest, PointerPosition, WindowId,
    WindowInstance, WindowRect, CASCADE_OFFSET_STEP, DRAG_BOTTOM_MARGIN, DRAG_EDGE_MARGIN,
    MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH, TASKBAR_HEIGHT,
};
use crate::snap::SnapZone;

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Open a window for an application, deduplicating against a live
    /// non-minimized instance of the same app.
    OpenWindow {
        /// Application definition data for the new window.
        request: OpenWindowRequest,
        /// Measured desktop box used for initial placement.
        desktop: DesktopBox,
    },
    /// Close a window by id.
    CloseWindow {
        /// Window to close.
        window_id: WindowId,
    },
    /// Focus (and raise) a window by id, unminimizing it.
    FocusWindow {
        /// Window to focus.
        window_id: WindowId,
    },
    /// Minimize a window; no other window is promoted in its place.
    MinimizeWindow {
        /// Window to minimize.
        window_id: WindowId,
    },
    /// Maximize a window into the desktop box, or restore its saved
    /// geometry when it is already maximized.
    ToggleMaximizeWindow {
        /// Window to toggle.
        window_id: WindowId,
        /// Measured desktop box to maximize into.
        desktop: DesktopBox,
    },
    /// Begin a titlebar drag session. Rejected for maximized windows; a live
    /// session is force-ended first.
    BeginDrag {
        /// Window being dragged.
        window_id: WindowId,
        /// Pointer position at session start.
        pointer: PointerPosition,
    },
    /// Move the dragged window to follow the pointer, offset-preserving.
    DragWindow {
        /// Current pointer position.
        pointer: PointerPosition,
        /// Measured desktop box for visibility clamping.
        desktop: DesktopBox,
    },
    /// End the drag session, optionally locking the window into a snap zone.
    EndDrag {
        /// Measured desktop box the snap target scales to.
        desktop: DesktopBox,
        /// Zone classified at pointer release, if any.
        snap_zone: Option<SnapZone>,
    },
    /// Begin a resize session anchored at the window's top-left corner.
    /// Rejected for maximized windows; a live session is force-ended first.
    BeginResize {
        /// Window being resized.
        window_id: WindowId,
    },
    /// Extend the resized window toward the pointer from its fixed anchor.
    ResizeWindow {
        /// Current pointer position.
        pointer: PointerPosition,
        /// Measured desktop box capping the far edges.
        desktop: DesktopBox,
    },
    /// End the resize session; geometry was committed incrementally.
    EndResize,
    /// Replace the window collection wholesale, preserving all other state.
    SetWindows {
        /// New window collection.
        windows: Vec<WindowInstance>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the shell to execute.
pub enum RuntimeEffect {
    /// Move browser focus to the surface of the newly active window.
    FocusWindowSurface(WindowId),
    /// Toggle the document-level drag cursor override for a session.
    DragCursor {
        /// Whether a drag/resize session is now live.
        active: bool,
    },
}

/// Applies a [`DesktopAction`] to the desktop state and collects resulting
/// side effects.
///
/// This function is the authoritative state transition engine for window
/// lifecycle, focus/z-order, and interaction sessions. Actions referencing
/// unknown window ids leave the state untouched.
pub fn reduce_desktop(state: &mut DesktopState, action: DesktopAction) -> Vec<RuntimeEffect> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::OpenWindow { request, desktop } => {
            open_window(state, request, desktop, &mut effects);
        }
        DesktopAction::CloseWindow { window_id } => {
            let before = state.windows.len();
            state.windows.retain(|w| w.id != window_id);
            if state.windows.len() == before {
                return effects;
            }
            state.saved_geometry.remove(&window_id);
            if state.active_window_id == Some(window_id) {
                state.active_window_id = None;
            }
            clear_session_for(state, window_id, &mut effects);
        }
        DesktopAction::FocusWindow { window_id } => {
            if focus_window_internal(state, window_id) {
                effects.push(RuntimeEffect::FocusWindowSurface(window_id));
            }
        }
        DesktopAction::MinimizeWindow { window_id } => {
            let Some(window) = find_window_mut(state, window_id) else {
                return effects;
            };
            window.minimized = true;
            window.is_focused = false;
            if state.active_window_id == Some(window_id) {
                state.active_window_id = None;
            }
            clear_session_for(state, window_id, &mut effects);
        }
        DesktopAction::ToggleMaximizeWindow { window_id, desktop } => {
            toggle_maximize(state, window_id, desktop, &mut effects);
        }
        DesktopAction::BeginDrag { window_id, pointer } => {
            let Some(window) = state.window(window_id) else {
                return effects;
            };
            if window.maximized || window.minimized {
                return effects;
            }
            let pointer_offset = PointerPosition {
                x: pointer.x - window.rect.x,
                y: pointer.y - window.rect.y,
            };
            // A second begin while a session is live force-ends the prior one.
            state.session = InteractionSession::Move {
                window_id,
                pointer_offset,
            };
            if focus_window_internal(state, window_id) {
                effects.push(RuntimeEffect::FocusWindowSurface(window_id));
            }
            effects.push(RuntimeEffect::DragCursor { active: true });
        }
        DesktopAction::DragWindow { pointer, desktop } => {
            let InteractionSession::Move {
                window_id,
                pointer_offset,
            } = state.session
            else {
                return effects;
            };
            let Some(window) = find_window_mut(state, window_id) else {
                return effects;
            };
            if window.maximized {
                return effects;
            }
            // Lower bounds win so a window can never leave the reachable
            // strip even on degenerate desktop boxes.
            window.rect.x = (pointer.x - pointer_offset.x)
                .min(desktop.width - DRAG_EDGE_MARGIN)
                .max(-window.rect.w + DRAG_EDGE_MARGIN);
            window.rect.y = (pointer.y - pointer_offset.y)
                .min(desktop.height - TASKBAR_HEIGHT - DRAG_BOTTOM_MARGIN)
                .max(0);
        }
        DesktopAction::EndDrag { desktop, snap_zone } => {
            let InteractionSession::Move { window_id, .. } = state.session else {
                return effects;
            };
            state.session = InteractionSession::Idle;
            if let Some(zone) = snap_zone {
                if let Some(window) = find_window_mut(state, window_id) {
                    if !window.snap_exempt {
                        window.rect = zone.target_rect(desktop);
                    }
                }
            }
            effects.push(RuntimeEffect::DragCursor { active: false });
        }
        DesktopAction::BeginResize { window_id } => {
            let Some(window) = state.window(window_id) else {
                return effects;
            };
            if window.maximized || window.minimized {
                return effects;
            }
            let origin = window.rect;
            state.session = InteractionSession::Resize { window_id, origin };
            if focus_window_internal(state, window_id) {
                effects.push(RuntimeEffect::FocusWindowSurface(window_id));
            }
            effects.push(RuntimeEffect::DragCursor { active: true });
        }
        DesktopAction::ResizeWindow { pointer, desktop } => {
            let InteractionSession::Resize { window_id, origin } = state.session else {
                return effects;
            };
            let Some(window) = find_window_mut(state, window_id) else {
                return effects;
            };
            if window.maximized {
                return effects;
            }
            let mut new_w = (origin.w + (pointer.x - origin.right())).max(MIN_WINDOW_WIDTH);
            let mut new_h = (origin.h + (pointer.y - origin.bottom())).max(MIN_WINDOW_HEIGHT);
            if window.rect.x + new_w > desktop.width {
                new_w = desktop.width - window.rect.x;
            }
            if window.rect.y + new_h > desktop.height - TASKBAR_HEIGHT {
                new_h = desktop.height - TASKBAR_HEIGHT - window.rect.y;
            }
            window.rect.w = new_w;
            window.rect.h = new_h;
        }
        DesktopAction::EndResize => {
            if !matches!(state.session, InteractionSession::Resize { .. }) {
                return effects;
            }
            state.session = InteractionSession::Idle;
            effects.push(RuntimeEffect::DragCursor { active: false });
        }
        DesktopAction::SetWindows { windows } => {
            state.windows = windows;
        }
    }
    effects
}

fn open_window(
    state: &mut DesktopState,
    request: OpenWindowRequest,
    desktop: DesktopBox,
    effects: &mut Vec<RuntimeEffect>,
) {
    let existing = state
        .windows
        .iter()
        .find(|w| w.app_id == request.app_id && !w.minimized)
        .map(|w| w.id);
    if let Some(window_id) = existing {
        if focus_window_internal(state, window_id) {
            effects.push(RuntimeEffect::FocusWindowSurface(window_id));
        }
        return;
    }

    let size = request.default_size.unwrap_or_default();
    let cascade = state.windows.len() as i32 * CASCADE_OFFSET_STEP;
    let rect = WindowRect {
        x: ((desktop.width - size.w) / 2 + cascade).max(0),
        y: ((desktop.height - TASKBAR_HEIGHT - size.h) / 2 + cascade).max(0),
        w: size.w,
        h: size.h,
    };

    let window_id = WindowId(state.next_window_id);
    state.next_window_id += 1;
    for window in &mut state.windows {
        window.is_focused = false;
    }
    state.next_z_index += 1;
    state.windows.push(WindowInstance {
        id: window_id,
        app_id: request.app_id,
        title: request.title,
        icon: request.icon,
        rect,
        default_size: size,
        z_index: state.next_z_index,
        minimized: false,
        maximized: false,
        is_focused: true,
        snap_exempt: request.snap_exempt,
        launch_params: request.launch_params,
    });
    state.active_window_id = Some(window_id);
    effects.push(RuntimeEffect::FocusWindowSurface(window_id));
}

fn toggle_maximize(
    state: &mut DesktopState,
    window_id: WindowId,
    desktop: DesktopBox,
    effects: &mut Vec<RuntimeEffect>,
) {
    let Some(index) = state.windows.iter().position(|w| w.id == window_id) else {
        return;
    };
    let restored = state.saved_geometry.remove(&window_id);
    let window = &mut state.windows[index];

    if window.maximized {
        window.rect = restored.unwrap_or(WindowRect {
            x: window.rect.x,
            y: window.rect.y,
            w: window.default_size.w,
            h: window.default_size.h,
        });
        window.maximized = false;
    } else {
        let saved = window.rect;
        window.rect = WindowRect {
            x: 0,
            y: 0,
            w: desktop.width,
            h: desktop.height - TASKBAR_HEIGHT,
        };
        window.maximized = true;
        state.saved_geometry.insert(window_id, saved);
    }

    if focus_window_internal(state, window_id) {
        effects.push(RuntimeEffect::FocusWindowSurface(window_id));
    }
}

fn find_window_mut(state: &mut DesktopState, window_id: WindowId) -> Option<&mut WindowInstance> {
    state.windows.iter_mut().find(|w| w.id == window_id)
}

/// Focuses and raises `window_id`; returns `true` when state changed.
///
/// A window that is already the sole focused, non-minimized, active window
/// is left untouched (no z-index burn on redundant focus).
fn focus_window_internal(state: &mut DesktopState, window_id: WindowId) -> bool {
    let Some(index) = state.windows.iter().position(|w| w.id == window_id) else {
        return false;
    };

    let already_sole = state.windows[index].is_focused
        && !state.windows[index].minimized
        && state.active_window_id == Some(window_id)
        && state.windows.iter().filter(|w| w.is_focused).count() == 1;
    if already_sole {
        return false;
    }

    for window in &mut state.windows {
        window.is_focused = false;
    }
    state.next_z_index += 1;
    let window = &mut state.windows[index];
    window.is_focused = true;
    window.minimized = false;
    window.z_index = state.next_z_index;
    state.active_window_id = Some(window_id);
    true
}

fn clear_session_for(
    state: &mut DesktopState,
    window_id: WindowId,
    effects: &mut Vec<RuntimeEffect>,
) {
    if state.session.window_id() == Some(window_id) {
        state.session = InteractionSession::Idle;
        effects.push(RuntimeEffect::DragCursor { active: false });
    }
}
