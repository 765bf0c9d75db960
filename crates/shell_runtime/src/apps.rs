//! Application catalog and placeholder content views.
//!
//! The window manager never inspects content: windows carry an application id
//! plus an opaque launch payload, and this registry mounts the matching view
//! through the contract's factory when the shell renders a window body.

use leptos::*;
use serde_json::{json, Value};
use shell_app_contract::{AppDefinition, AppModule, AppMountContext, ApplicationId};
use shell_core::{OpenWindowRequest, WindowInstance, WindowSize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Registry lookup failures.
pub enum RegistryError {
    /// No application is registered under the requested id.
    #[error("no application registered for id `{0}`")]
    UnknownApp(ApplicationId),
}

/// The installable applications, in launcher order.
pub fn catalog() -> Vec<AppDefinition> {
    vec![
        AppDefinition {
            id: ApplicationId::trusted("system.browser"),
            name: "Web Browser",
            icon: "https://api.iconify.design/fluent/globe-desktop-24-filled.svg?color=00A9E0",
            default_width: 800,
            default_height: 600,
            snap_exempt: false,
            launch_params: json!({ "homepage": "https://www.wikipedia.org" }),
            module: AppModule::new(mount_browser),
        },
        AppDefinition {
            id: ApplicationId::trusted("system.notepad"),
            name: "Notepad",
            icon: "https://api.iconify.design/fluent/notepad-edit-24-filled.svg?color=00A9E0",
            default_width: 700,
            default_height: 500,
            snap_exempt: false,
            launch_params: Value::Null,
            module: AppModule::new(mount_notepad),
        },
        AppDefinition {
            id: ApplicationId::trusted("system.calculator"),
            name: "Calculator",
            icon: "https://api.iconify.design/fluent/calculator-24-filled.svg?color=00A9E0",
            default_width: 320,
            default_height: 480,
            // Fixed-purpose utility window; drag-release snapping would
            // reflow it into an unusable shape.
            snap_exempt: true,
            launch_params: Value::Null,
            module: AppModule::new(mount_calculator),
        },
        AppDefinition {
            id: ApplicationId::trusted("system.explorer"),
            name: "File Explorer",
            icon: "https://api.iconify.design/fluent/folder-open-vertical-24-filled.svg?color=00A9E0",
            default_width: 850,
            default_height: 600,
            snap_exempt: false,
            launch_params: json!({ "path": "/home/user" }),
            module: AppModule::new(mount_explorer),
        },
        AppDefinition {
            id: ApplicationId::trusted("system.settings"),
            name: "Settings",
            icon: "https://api.iconify.design/fluent/settings-cog-multiple-24-filled.svg?color=00A9E0",
            default_width: 600,
            default_height: 450,
            snap_exempt: false,
            launch_params: Value::Null,
            module: AppModule::new(mount_settings),
        },
        AppDefinition {
            id: ApplicationId::trusted("system.app-store"),
            name: "App Store",
            icon: "https://api.iconify.design/fluent/app-folder-24-filled.svg?color=00A9E0",
            default_width: 750,
            default_height: 550,
            snap_exempt: false,
            launch_params: Value::Null,
            module: AppModule::new(mount_app_store),
        },
    ]
}

/// Finds the definition for `app_id`.
pub fn app_definition(app_id: &ApplicationId) -> Result<AppDefinition, RegistryError> {
    catalog()
        .into_iter()
        .find(|app| app.id == *app_id)
        .ok_or_else(|| RegistryError::UnknownApp(app_id.clone()))
}

/// Builds the open request for an application definition.
pub fn open_request(app: &AppDefinition) -> OpenWindowRequest {
    OpenWindowRequest {
        app_id: app.id.clone(),
        title: app.name.to_string(),
        icon: app.icon.to_string(),
        default_size: Some(WindowSize {
            w: app.default_width,
            h: app.default_height,
        }),
        snap_exempt: app.snap_exempt,
        launch_params: app.launch_params.clone(),
    }
}

/// Mounts the content payload for a managed window.
pub fn mount_window_contents(window: &WindowInstance) -> View {
    match app_definition(&window.app_id) {
        Ok(app) => app.module.mount(AppMountContext {
            window_id: window.id.0,
            launch_params: window.launch_params.clone(),
        }),
        Err(err) => {
            logging::warn!("window content mount failed: {err}");
            view! { <p class="app-missing">"Application unavailable"</p> }.into_view()
        }
    }
}

fn mount_browser(context: AppMountContext) -> View {
    let homepage = context
        .launch_params
        .get("homepage")
        .and_then(Value::as_str)
        .unwrap_or("about:blank")
        .to_string();
    view! { <BrowserApp homepage=homepage /> }.into_view()
}

fn mount_notepad(_: AppMountContext) -> View {
    view! { <NotepadApp /> }.into_view()
}

fn mount_calculator(_: AppMountContext) -> View {
    view! { <CalculatorApp /> }.into_view()
}

fn mount_explorer(context: AppMountContext) -> View {
    let path = context
        .launch_params
        .get("path")
        .and_then(Value::as_str)
        .unwrap_or("/")
        .to_string();
    view! { <ExplorerApp path=path /> }.into_view()
}

fn mount_settings(_: AppMountContext) -> View {
    view! { <SettingsApp /> }.into_view()
}

fn mount_app_store(_: AppMountContext) -> View {
    view! { <AppStoreApp /> }.into_view()
}

#[component]
fn BrowserApp(homepage: String) -> impl IntoView {
    let address = create_rw_signal(homepage);
    view! {
        <div class="app app-browser">
            <div class="app-toolbar" role="group" aria-label="Browser navigation">
                <button type="button">"Back"</button>
                <button type="button">"Forward"</button>
                <button type="button">"Reload"</button>
                <input
                    type="text"
                    class="browser-address"
                    prop:value=move || address.get()
                    on:change=move |ev| address.set(event_target_value(&ev))
                />
            </div>
            <div class="browser-viewport">
                <p>{move || format!("Navigated to {}", address.get())}</p>
                <p>"Page rendering is sandboxed out of the shell."</p>
            </div>
        </div>
    }
}

#[component]
fn NotepadApp() -> impl IntoView {
    view! {
        <div class="app app-notepad">
            <textarea placeholder="Type something..."></textarea>
        </div>
    }
}

#[component]
fn CalculatorApp() -> impl IntoView {
    let keys = [
        "AC", "%", "/", "7", "8", "9", "*", "4", "5", "6", "-", "1", "2", "3", "+", "0", ".", "=",
    ];
    view! {
        <div class="app app-calculator">
            <div class="calc-display">"0"</div>
            <div class="calc-keys">
                {keys
                    .into_iter()
                    .map(|key| view! { <button type="button">{key}</button> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn ExplorerApp(path: String) -> impl IntoView {
    view! {
        <div class="app app-explorer">
            <div class="app-toolbar">
                <span class="explorer-path">{format!("Path: {path}")}</span>
            </div>
            <ul class="explorer-listing">
                <li>"Documents"</li>
                <li>"Pictures"</li>
                <li>"notes.txt"</li>
            </ul>
        </div>
    }
}

#[component]
fn SettingsApp() -> impl IntoView {
    let sections = [
        ("Display", "Wallpaper, resolution, themes"),
        ("Network & Internet", "Wi-Fi, Ethernet, VPN"),
        ("Storage", "Manage local storage"),
        ("Privacy & Security", "Permissions, encryption"),
        ("Applications", "Manage installed applications"),
        ("About", "Version, updates, credits"),
    ];
    view! {
        <div class="app app-settings">
            <h2>"System Settings"</h2>
            <ul class="settings-sections">
                {sections
                    .into_iter()
                    .map(|(name, description)| {
                        view! {
                            <li>
                                <strong>{name}</strong>
                                <span>{description}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[component]
fn AppStoreApp() -> impl IntoView {
    view! {
        <div class="app app-store">
            <h2>"App Store"</h2>
            <p>"Featured applications land here when the catalog backend ships."</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn catalog_lookup_round_trips_every_entry() {
        for app in catalog() {
            let found = app_definition(&app.id).expect("catalog entry");
            assert_eq!(found.name, app.name);
        }
    }

    #[test]
    fn unknown_ids_produce_a_typed_registry_error() {
        let ghost = ApplicationId::trusted("system.ghost");
        let err = app_definition(&ghost).expect_err("no such app");
        assert_eq!(err, RegistryError::UnknownApp(ghost));
    }

    #[test]
    fn only_the_calculator_is_snap_exempt() {
        let exempt: Vec<_> = catalog()
            .into_iter()
            .filter(|app| app.snap_exempt)
            .map(|app| app.id)
            .collect();
        assert_eq!(exempt, vec![ApplicationId::trusted("system.calculator")]);
    }

    #[test]
    fn open_requests_carry_the_declared_default_size() {
        let browser = app_definition(&ApplicationId::trusted("system.browser")).expect("browser");
        let request = open_request(&browser);
        assert_eq!(request.default_size, Some(WindowSize { w: 800, h: 600 }));
        assert_eq!(request.title, "Web Browser");
        assert_eq!(
            request.launch_params.get("homepage").and_then(Value::as_str),
            Some("https://www.wikipedia.org")
        );
    }
}
