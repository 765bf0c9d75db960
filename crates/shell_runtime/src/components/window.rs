use shell_core::{WindowId, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

use super::*;

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

fn is_primary_press(ev: &web_sys::PointerEvent) -> bool {
    if ev.pointer_type() == "mouse" {
        ev.button() == 0
    } else {
        ev.is_primary()
    }
}

#[component]
pub(super) fn DesktopWindow(window_id: WindowId) -> impl IntoView {
    let runtime = use_shell_runtime();

    let window = Signal::derive(move || runtime.store.get().state().window(window_id).cloned());

    let focus = move |_: web_sys::PointerEvent| {
        let should_focus = window.get_untracked().map(|w| !w.is_focused).unwrap_or(false);
        if should_focus {
            runtime.dispatch_action(DesktopAction::FocusWindow { window_id });
        }
    };
    let begin_move = move |ev: web_sys::PointerEvent| {
        if !is_primary_press(&ev) {
            return;
        }
        if window.get_untracked().map(|w| w.maximized).unwrap_or(true) {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        runtime.dispatch_action(DesktopAction::BeginDrag {
            window_id,
            pointer: pointer_from_pointer_event(&ev),
        });
    };
    let begin_resize = move |ev: web_sys::PointerEvent| {
        if !is_primary_press(&ev) {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::BeginResize { window_id });
    };
    let toggle_maximize = move || {
        runtime.dispatch_action(DesktopAction::ToggleMaximizeWindow {
            window_id,
            desktop: host::desktop_box(),
        });
    };
    let titlebar_double_click = move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        toggle_maximize();
    };
    let minimize = move |_| runtime.dispatch_action(DesktopAction::MinimizeWindow { window_id });
    let close = move |_| runtime.dispatch_action(DesktopAction::CloseWindow { window_id });

    view! {
        <Show when=move || window.get().is_some() fallback=|| ()>
            {move || {
                let win = window.get().expect("window exists while shown");
                let style = format!(
                    "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};min-width:{}px;min-height:{}px;",
                    win.rect.x,
                    win.rect.y,
                    win.rect.w,
                    win.rect.h,
                    win.z_index,
                    MIN_WINDOW_WIDTH,
                    MIN_WINDOW_HEIGHT
                );
                let focused_class = if win.is_focused { " focused" } else { "" };
                let maximized_class = if win.maximized { " maximized" } else { "" };

                view! {
                    <section
                        id=host::window_dom_id(window_id)
                        class=format!("desktop-window{}{}", focused_class, maximized_class)
                        style=style
                        tabindex="-1"
                        role="dialog"
                        aria-label=win.title.clone()
                        on:pointerdown=focus
                    >
                        <header
                            class="titlebar"
                            on:pointerdown=begin_move
                            on:dblclick=titlebar_double_click
                        >
                            <div class="titlebar-title">
                                {app_icon_view(&win.icon, &win.title)}
                                <span class="titlebar-text">{win.title.clone()}</span>
                            </div>
                            <div class="titlebar-controls">
                                <button
                                    type="button"
                                    class="titlebar-control control-close"
                                    title="Close"
                                    aria-label="Close window"
                                    on:pointerdown=move |ev: web_sys::PointerEvent| {
                                        ev.prevent_default();
                                        ev.stop_propagation();
                                    }
                                    on:mousedown=move |ev| stop_mouse_event(&ev)
                                    on:click=move |ev| {
                                        stop_mouse_event(&ev);
                                        close(ev);
                                    }
                                />
                                <button
                                    type="button"
                                    class="titlebar-control control-minimize"
                                    title="Minimize"
                                    aria-label="Minimize window"
                                    on:pointerdown=move |ev: web_sys::PointerEvent| {
                                        ev.prevent_default();
                                        ev.stop_propagation();
                                    }
                                    on:mousedown=move |ev| stop_mouse_event(&ev)
                                    on:click=move |ev| {
                                        stop_mouse_event(&ev);
                                        minimize(ev);
                                    }
                                />
                                <button
                                    type="button"
                                    class="titlebar-control control-maximize"
                                    title=if win.maximized { "Restore" } else { "Maximize" }
                                    aria-label=if win.maximized {
                                        "Restore window"
                                    } else {
                                        "Maximize window"
                                    }
                                    on:pointerdown=move |ev: web_sys::PointerEvent| {
                                        ev.prevent_default();
                                        ev.stop_propagation();
                                    }
                                    on:mousedown=move |ev| stop_mouse_event(&ev)
                                    on:click=move |ev| {
                                        stop_mouse_event(&ev);
                                        toggle_maximize();
                                    }
                                />
                            </div>
                        </header>
                        <div class="window-body">
                            <WindowBody window_id=window_id />
                        </div>
                        <Show
                            when=move || window.get().map(|w| !w.maximized).unwrap_or(false)
                            fallback=|| ()
                        >
                            <div
                                class="resize-handle"
                                title="Resize window"
                                aria-hidden="true"
                                on:pointerdown=begin_resize
                            />
                        </Show>
                    </section>
                }
                    .into_view()
            }}
        </Show>
    }
}

#[component]
fn WindowBody(window_id: WindowId) -> impl IntoView {
    let runtime = use_shell_runtime();
    let contents = runtime
        .store
        .get_untracked()
        .state()
        .window(window_id)
        .map(apps::mount_window_contents)
        .unwrap_or_else(|| view! { <p>"Closed"</p> }.into_view());

    view! { <div class="window-body-content">{contents}</div> }
}
