//! Desktop shell UI composition and interaction surfaces.
//!
//! Components here are pure consumers of the window store: they render from
//! state and dispatch actions, never mutating window or session fields
//! directly. Pointer streams over the desktop surface are translated by the
//! core session controller.

mod start_menu;
mod taskbar;
mod window;

use leptos::*;
use shell_app_contract::AppDefinition;
use shell_core::{session, DesktopAction, DesktopState, PointerPosition, WindowInstance};

use self::{start_menu::StartMenu, taskbar::Taskbar, window::DesktopWindow};
use crate::{apps, host};

pub use crate::runtime_context::{use_shell_runtime, ShellProvider, ShellRuntimeContext};

const WALLPAPER_URL: &str = "https://picsum.photos/1920/1080?grayscale&blur=2";

#[component]
/// Renders the full desktop shell: wallpaper, icon grid, window layer, snap
/// preview, start menu, and taskbar.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_shell_runtime();
    let store = runtime.store;
    let start_menu_open = create_rw_signal(false);

    let on_pointer_down = move |_: web_sys::PointerEvent| {
        if start_menu_open.get_untracked() {
            start_menu_open.set(false);
        }
    };
    let on_pointer_move = move |ev: web_sys::PointerEvent| {
        let pointer = pointer_from_pointer_event(&ev);
        let current = store.get_untracked();
        if let Some(action) = session::pointer_moved(current.state(), pointer, host::desktop_box())
        {
            runtime.dispatch_action(action);
        }
    };
    let on_pointer_end = move |_: web_sys::PointerEvent| {
        let current = store.get_untracked();
        if let Some(action) = session::pointer_released(current.state(), host::desktop_box()) {
            runtime.dispatch_action(action);
        }
    };

    view! {
        <div
            class="desktop-shell"
            on:pointerdown=on_pointer_down
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_end
            on:pointercancel=on_pointer_end
        >
            <div
                class="desktop-wallpaper"
                style=format!("background-image:url('{}');", WALLPAPER_URL)
                aria-hidden="true"
            />
            <div class="desktop-icon-grid">
                <For each=move || apps::catalog() key=|app| app.id.clone() let:app>
                    {{
                        let definition = app.clone();
                        view! {
                            <button
                                type="button"
                                class="desktop-icon"
                                on:click=move |_| launch_app(runtime, &definition)
                            >
                                {app_icon_view(app.icon, app.name)}
                                <span class="desktop-icon-label">{app.name}</span>
                            </button>
                        }
                    }}
                </For>
            </div>
            <div class="desktop-window-layer">
                <For
                    each=move || visible_windows(store.get().state())
                    key=|win| win.id.0
                    let:win
                >
                    <DesktopWindow window_id=win.id />
                </For>
            </div>
            <SnapPreviewOverlay />
            <Show when=move || start_menu_open.get() fallback=|| ()>
                <StartMenu start_menu_open=start_menu_open />
            </Show>
            <Taskbar start_menu_open=start_menu_open />
        </div>
    }
}

#[component]
/// Translucent target rectangle shown while a drag session would snap.
fn SnapPreviewOverlay() -> impl IntoView {
    let runtime = use_shell_runtime();
    let preview = Signal::derive(move || {
        let current = runtime.store.get();
        session::snap_preview(current.state(), host::desktop_box())
    });

    view! {
        <Show when=move || preview.get().is_some() fallback=|| ()>
            {move || {
                let (_, rect) = preview.get().expect("preview present while shown");
                view! {
                    <div
                        class="snap-preview"
                        aria-hidden="true"
                        style=format!(
                            "left:{}px;top:{}px;width:{}px;height:{}px;",
                            rect.x, rect.y, rect.w, rect.h
                        )
                    />
                }
                    .into_view()
            }}
        </Show>
    }
}

/// Opens a catalog application through the store.
pub(crate) fn launch_app(runtime: ShellRuntimeContext, app: &AppDefinition) {
    runtime.dispatch_action(DesktopAction::OpenWindow {
        request: apps::open_request(app),
        desktop: host::desktop_box(),
    });
}

/// Windows to render in the window layer; minimized ones only live on the
/// taskbar.
fn visible_windows(state: &DesktopState) -> Vec<WindowInstance> {
    state
        .windows
        .iter()
        .filter(|w| !w.minimized)
        .cloned()
        .collect()
}

fn icon_is_url(icon: &str) -> bool {
    icon.starts_with("http") || icon.starts_with("data:image")
}

/// Renders display-metadata icons: URLs as images, anything else as a glyph.
fn app_icon_view(icon: &str, alt: &str) -> View {
    if icon_is_url(icon) {
        view! { <img class="app-icon-image" src=icon.to_string() alt=alt.to_string() /> }
            .into_view()
    } else {
        view! { <span class="app-icon-glyph" aria-hidden="true">{icon.to_string()}</span> }
            .into_view()
    }
}

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::Value;
    use shell_app_contract::ApplicationId;
    use shell_core::{reduce_desktop, DesktopBox, OpenWindowRequest, WindowSize};

    use super::*;

    fn open(state: &mut DesktopState, app: &str) {
        reduce_desktop(
            state,
            DesktopAction::OpenWindow {
                request: OpenWindowRequest {
                    app_id: ApplicationId::trusted(app),
                    title: app.to_string(),
                    icon: String::new(),
                    default_size: Some(WindowSize { w: 640, h: 480 }),
                    snap_exempt: false,
                    launch_params: Value::Null,
                },
                desktop: DesktopBox {
                    width: 1280,
                    height: 800,
                },
            },
        );
    }

    #[test]
    fn minimized_windows_leave_the_window_layer() {
        let mut state = DesktopState::default();
        open(&mut state, "system.browser");
        open(&mut state, "system.notepad");
        let first = state.windows[0].id;
        reduce_desktop(&mut state, DesktopAction::MinimizeWindow { window_id: first });

        let visible = visible_windows(&state);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].app_id, ApplicationId::trusted("system.notepad"));
    }

    #[test]
    fn icon_sources_are_classified_as_url_or_glyph() {
        assert!(icon_is_url("https://api.iconify.design/fluent/x.svg"));
        assert!(icon_is_url("data:image/png;base64,AAAA"));
        assert!(!icon_is_url("🌐"));
    }
}
