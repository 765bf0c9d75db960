//! Browser environment boundary for the shell runtime.
//!
//! Owns the desktop-box measurement and the execution of reducer side-effect
//! intents against the DOM. Non-wasm builds get inert fallbacks so the crate
//! compiles and its tests run on the host.

use shell_core::{DesktopBox, RuntimeEffect, WindowId};

/// Class applied to `<body>` while a drag/resize session is live.
pub const DRAGGING_BODY_CLASS: &str = "window-dragging";

#[cfg(not(target_arch = "wasm32"))]
const FALLBACK_DESKTOP: DesktopBox = DesktopBox {
    width: 1280,
    height: 800,
};

/// DOM id of a window's chrome element.
pub fn window_dom_id(window_id: WindowId) -> String {
    format!("desktop-window-{}", window_id.0)
}

/// Measures the desktop bounding box, taskbar strip included.
///
/// An unmeasurable environment reports a zero box, which downstream geometry
/// (snap classification in particular) treats as "not rendered yet".
pub fn desktop_box() -> DesktopBox {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return DesktopBox {
                width: 0,
                height: 0,
            };
        };
        let width = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0) as i32;
        let height = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0) as i32;
        return DesktopBox { width, height };
    }

    #[cfg(not(target_arch = "wasm32"))]
    FALLBACK_DESKTOP
}

/// Executes one reducer side-effect intent.
pub fn run_effect(effect: &RuntimeEffect) {
    match effect {
        RuntimeEffect::FocusWindowSurface(window_id) => focus_window_surface(*window_id),
        RuntimeEffect::DragCursor { active } => set_drag_cursor(*active),
    }
}

#[cfg(target_arch = "wasm32")]
fn focus_window_surface(window_id: WindowId) {
    use wasm_bindgen::JsCast;

    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.get_element_by_id(&window_dom_id(window_id)));
    match element.and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok()) {
        Some(el) => {
            let _ = el.focus();
        }
        None => leptos::logging::warn!("focus target missing for window {}", window_id.0),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn focus_window_surface(_: WindowId) {}

#[cfg(target_arch = "wasm32")]
fn set_drag_cursor(active: bool) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.body())
    else {
        return;
    };
    let class_list = body.class_list();
    let result = if active {
        class_list.add_1(DRAGGING_BODY_CLASS)
    } else {
        class_list.remove_1(DRAGGING_BODY_CLASS)
    };
    if result.is_err() {
        leptos::logging::warn!("drag cursor class toggle failed");
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn set_drag_cursor(_: bool) {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_dom_ids_are_stable_per_window() {
        assert_eq!(window_dom_id(WindowId(7)), "desktop-window-7");
    }

    #[test]
    fn host_fallback_desktop_box_is_renderable() {
        assert!(!desktop_box().is_empty());
    }
}
