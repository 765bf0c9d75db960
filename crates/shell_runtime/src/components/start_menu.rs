use super::*;

/// Case-insensitive launcher filter over the catalog by display name.
fn filter_catalog(catalog: &[AppDefinition], term: &str) -> Vec<AppDefinition> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return catalog.to_vec();
    }
    catalog
        .iter()
        .filter(|app| app.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[component]
pub(super) fn StartMenu(start_menu_open: RwSignal<bool>) -> impl IntoView {
    let runtime = use_shell_runtime();
    let search = create_rw_signal(String::new());

    view! {
        <div
            class="start-menu"
            role="menu"
            on:pointerdown=move |ev: web_sys::PointerEvent| ev.stop_propagation()
        >
            <input
                type="text"
                class="start-menu-search"
                placeholder="Search apps..."
                prop:value=move || search.get()
                on:input=move |ev| search.set(event_target_value(&ev))
            />
            <ul class="start-menu-apps">
                <For
                    each=move || filter_catalog(&apps::catalog(), &search.get())
                    key=|app| app.id.clone()
                    let:app
                >
                    {{
                        let definition = app.clone();
                        view! {
                            <li>
                                <button
                                    type="button"
                                    class="start-menu-app"
                                    on:click=move |_| {
                                        launch_app(runtime, &definition);
                                        start_menu_open.set(false);
                                    }
                                >
                                    {app_icon_view(app.icon, app.name)}
                                    <span>{app.name}</span>
                                </button>
                            </li>
                        }
                    }}
                </For>
            </ul>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn empty_search_lists_the_whole_catalog() {
        let catalog = apps::catalog();
        assert_eq!(filter_catalog(&catalog, "  ").len(), catalog.len());
    }

    #[test]
    fn search_matches_names_case_insensitively() {
        let catalog = apps::catalog();
        let hits = filter_catalog(&catalog, "CALC");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Calculator");

        assert!(filter_catalog(&catalog, "zzz").is_empty());
    }
}
