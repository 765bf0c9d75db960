use std::time::Duration;

use shell_core::WindowId;

use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ClockSnapshot {
    hour: u32,
    minute: u32,
    second: u32,
}

impl ClockSnapshot {
    fn now() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new_0();
            return Self {
                hour: date.get_hours(),
                minute: date.get_minutes(),
                second: date.get_seconds(),
            };
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Self {
                hour: 0,
                minute: 0,
                second: 0,
            }
        }
    }
}

fn format_clock_time(snapshot: ClockSnapshot) -> String {
    let mut hour = snapshot.hour % 12;
    if hour == 0 {
        hour = 12;
    }
    let suffix = if snapshot.hour >= 12 { "PM" } else { "AM" };
    format!(
        "{:02}:{:02}:{:02} {}",
        hour, snapshot.minute, snapshot.second, suffix
    )
}

/// Taskbar entries mirror the open-window collection in open order.
fn taskbar_windows(state: &DesktopState) -> Vec<WindowInstance> {
    state.windows.clone()
}

/// Click behavior of a window's taskbar button: surface it when minimized or
/// unfocused, minimize it when it is the focused window.
fn taskbar_click_action(state: &DesktopState, window_id: WindowId) -> Option<DesktopAction> {
    let window = state.window(window_id)?;
    if window.minimized || !window.is_focused {
        Some(DesktopAction::FocusWindow { window_id })
    } else {
        Some(DesktopAction::MinimizeWindow { window_id })
    }
}

#[component]
pub(super) fn Taskbar(start_menu_open: RwSignal<bool>) -> impl IntoView {
    let runtime = use_shell_runtime();
    let store = runtime.store;

    let clock_now = create_rw_signal(ClockSnapshot::now());
    if let Ok(interval) = set_interval_with_handle(
        move || clock_now.set(ClockSnapshot::now()),
        Duration::from_secs(1),
    ) {
        on_cleanup(move || interval.clear());
    }

    view! {
        <footer
            class="taskbar"
            on:pointerdown=move |ev: web_sys::PointerEvent| ev.stop_propagation()
        >
            <button
                type="button"
                class="start-button"
                class:active=move || start_menu_open.get()
                aria-label="Start menu"
                on:click=move |ev| {
                    stop_mouse_event(&ev);
                    start_menu_open.update(|open| *open = !*open);
                }
            >
                "Start"
            </button>
            <div class="taskbar-windows" role="group" aria-label="Open windows">
                <For
                    each=move || taskbar_windows(store.get().state())
                    key=|win| win.id.0
                    let:win
                >
                    {{
                        let window_id = win.id;
                        let active = win.is_focused && !win.minimized;
                        let minimized = win.minimized;
                        let title = win.title.clone();
                        let icon = win.icon.clone();
                        view! {
                            <button
                                type="button"
                                class="taskbar-window-button"
                                class:active=active
                                class:minimized=minimized
                                title=title.clone()
                                on:click=move |_| {
                                    let current = store.get_untracked();
                                    if let Some(action) =
                                        taskbar_click_action(current.state(), window_id)
                                    {
                                        runtime.dispatch_action(action);
                                    }
                                }
                            >
                                {app_icon_view(&icon, &title)}
                                <span class="taskbar-window-title">{title.clone()}</span>
                            </button>
                        }
                    }}
                </For>
            </div>
            <div class="taskbar-clock" role="timer">
                {move || format_clock_time(clock_now.get())}
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::Value;
    use shell_app_contract::ApplicationId;
    use shell_core::{reduce_desktop, DesktopBox, OpenWindowRequest, WindowSize};

    use super::*;

    fn open(state: &mut DesktopState, app: &str) -> WindowId {
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
        state.windows.last().expect("window").id
    }

    #[test]
    fn focused_button_minimizes_and_others_focus() {
        let mut state = DesktopState::default();
        let first = open(&mut state, "system.browser");
        let second = open(&mut state, "system.notepad");

        assert_eq!(
            taskbar_click_action(&state, second),
            Some(DesktopAction::MinimizeWindow { window_id: second })
        );
        assert_eq!(
            taskbar_click_action(&state, first),
            Some(DesktopAction::FocusWindow { window_id: first })
        );

        reduce_desktop(
            &mut state,
            DesktopAction::MinimizeWindow { window_id: second },
        );
        assert_eq!(
            taskbar_click_action(&state, second),
            Some(DesktopAction::FocusWindow { window_id: second })
        );
        assert_eq!(taskbar_click_action(&state, WindowId(99)), None);
    }

    #[test]
    fn taskbar_lists_minimized_windows_too() {
        let mut state = DesktopState::default();
        let first = open(&mut state, "system.browser");
        open(&mut state, "system.notepad");
        reduce_desktop(&mut state, DesktopAction::MinimizeWindow { window_id: first });

        let entries = taskbar_windows(&state);
        assert_eq!(entries.len(), 2);
        assert!(entries[0].minimized);
    }

    #[test]
    fn clock_formats_twelve_hour_time() {
        assert_eq!(
            format_clock_time(ClockSnapshot {
                hour: 0,
                minute: 0,
                second: 0
            }),
            "12:00:00 AM"
        );
        assert_eq!(
            format_clock_time(ClockSnapshot {
                hour: 13,
                minute: 5,
                second: 9
            }),
            "01:05:09 PM"
        );
    }
}
