//! Session controller: turns raw pointer samples into actions for the live
//! drag/resize session.
//!
//! The shell forwards pointer-move and pointer-release events from the
//! desktop surface here; the controller answers with the matching action (or
//! `None` when no session is live) and computes the live snap preview shown
//! while dragging. Release ends a session unconditionally, wherever the
//! cursor is.

use crate::model::{
    DesktopBox, DesktopState, InteractionSession, PointerPosition, WindowId, WindowRect,
};
use crate::reducer::DesktopAction;
use crate::snap::{classify, SnapZone, SNAP_THRESHOLD};

/// Action for a pointer-move sample, if a session is live.
pub fn pointer_moved(
    state: &DesktopState,
    pointer: PointerPosition,
    desktop: DesktopBox,
) -> Option<DesktopAction> {
    match state.session {
        InteractionSession::Idle => None,
        InteractionSession::Move { .. } => Some(DesktopAction::DragWindow { pointer, desktop }),
        InteractionSession::Resize { .. } => Some(DesktopAction::ResizeWindow { pointer, desktop }),
    }
}

/// Action for pointer release, if a session is live.
///
/// Drag release consults the snap classifier for the window's last dragged
/// position; the zone, when any, rides along on the end action.
pub fn pointer_released(state: &DesktopState, desktop: DesktopBox) -> Option<DesktopAction> {
    match state.session {
        InteractionSession::Idle => None,
        InteractionSession::Move { window_id, .. } => {
            let snap_zone = snap_candidate(state, window_id, desktop);
            Some(DesktopAction::EndDrag { desktop, snap_zone })
        }
        InteractionSession::Resize { .. } => Some(DesktopAction::EndResize),
    }
}

/// Zone and target rectangle to preview while a drag session is live.
pub fn snap_preview(state: &DesktopState, desktop: DesktopBox) -> Option<(SnapZone, WindowRect)> {
    let InteractionSession::Move { window_id, .. } = state.session else {
        return None;
    };
    let zone = snap_candidate(state, window_id, desktop)?;
    Some((zone, zone.target_rect(desktop)))
}

fn snap_candidate(
    state: &DesktopState,
    window_id: WindowId,
    desktop: DesktopBox,
) -> Option<SnapZone> {
    let window = state.window(window_id)?;
    if window.snap_exempt {
        return None;
    }
    classify(window.rect, desktop, SNAP_THRESHOLD)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::Value;
    use shell_app_contract::ApplicationId;

    use super::*;
    use crate::model::{OpenWindowRequest, WindowSize};
    use crate::reducer::reduce_desktop;

    const DESKTOP: DesktopBox = DesktopBox {
        width: 1920,
        height: 1080,
    };

    fn state_with_drag(snap_exempt: bool) -> DesktopState {
        let mut state = DesktopState::default();
        reduce_desktop(
            &mut state,
            DesktopAction::OpenWindow {
                request: OpenWindowRequest {
                    app_id: ApplicationId::trusted("system.browser"),
                    title: "Web Browser".to_string(),
                    icon: String::new(),
                    default_size: Some(WindowSize { w: 800, h: 600 }),
                    snap_exempt,
                    launch_params: Value::Null,
                },
                desktop: DESKTOP,
            },
        );
        let id = state.windows[0].id;
        reduce_desktop(
            &mut state,
            DesktopAction::BeginDrag {
                window_id: id,
                pointer: PointerPosition { x: 600, y: 250 },
            },
        );
        state
    }

    #[test]
    fn idle_sessions_translate_nothing() {
        let state = DesktopState::default();
        let pointer = PointerPosition { x: 10, y: 10 };
        assert_eq!(pointer_moved(&state, pointer, DESKTOP), None);
        assert_eq!(pointer_released(&state, DESKTOP), None);
        assert_eq!(snap_preview(&state, DESKTOP), None);
    }

    #[test]
    fn move_sessions_follow_the_pointer_and_classify_on_release() {
        let mut state = state_with_drag(false);
        let action = pointer_moved(&state, PointerPosition { x: 45, y: 39 }, DESKTOP)
            .expect("drag update");
        reduce_desktop(&mut state, action);
        assert_eq!(state.windows[0].rect.x, 5);
        assert_eq!(state.windows[0].rect.y, 5);

        assert_eq!(
            snap_preview(&state, DESKTOP),
            Some((
                SnapZone::TopLeft,
                WindowRect {
                    x: 0,
                    y: 0,
                    w: 960,
                    h: 540
                }
            ))
        );
        assert_eq!(
            pointer_released(&state, DESKTOP),
            Some(DesktopAction::EndDrag {
                desktop: DESKTOP,
                snap_zone: Some(SnapZone::TopLeft),
            })
        );
    }

    #[test]
    fn release_away_from_every_edge_carries_no_zone() {
        let mut state = state_with_drag(false);
        let action = pointer_moved(&state, PointerPosition { x: 640, y: 334 }, DESKTOP)
            .expect("drag update");
        reduce_desktop(&mut state, action);

        assert_eq!(snap_preview(&state, DESKTOP), None);
        assert_eq!(
            pointer_released(&state, DESKTOP),
            Some(DesktopAction::EndDrag {
                desktop: DESKTOP,
                snap_zone: None,
            })
        );
    }

    #[test]
    fn snap_exempt_windows_never_preview() {
        let mut state = state_with_drag(true);
        let action = pointer_moved(&state, PointerPosition { x: 45, y: 39 }, DESKTOP)
            .expect("drag update");
        reduce_desktop(&mut state, action);

        assert_eq!(snap_preview(&state, DESKTOP), None);
        assert_eq!(
            pointer_released(&state, DESKTOP),
            Some(DesktopAction::EndDrag {
                desktop: DESKTOP,
                snap_zone: None,
            })
        );
    }

    #[test]
    fn resize_sessions_translate_to_resize_updates_and_plain_end() {
        let mut state = state_with_drag(false);
        let id = state.windows[0].id;
        reduce_desktop(
            &mut state,
            DesktopAction::EndDrag {
                desktop: DESKTOP,
                snap_zone: None,
            },
        );
        reduce_desktop(&mut state, DesktopAction::BeginResize { window_id: id });

        let pointer = PointerPosition { x: 1500, y: 900 };
        assert_eq!(
            pointer_moved(&state, pointer, DESKTOP),
            Some(DesktopAction::ResizeWindow {
                pointer,
                desktop: DESKTOP
            })
        );
        assert_eq!(
            pointer_released(&state, DESKTOP),
            Some(DesktopAction::EndResize)
        );
    }
}
