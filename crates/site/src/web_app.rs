use leptos::*;
use leptos_meta::*;
use shell_runtime::{DesktopShell, ShellProvider};

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Web Desktop" />
        <Meta name="description" content="A browser-hosted desktop shell." />

        <main class="site-root">
            <DesktopEntry />
        </main>
    }
}

#[component]
pub fn DesktopEntry() -> impl IntoView {
    view! {
        <ShellProvider>
            <DesktopShell />
        </ShellProvider>
    }
}
