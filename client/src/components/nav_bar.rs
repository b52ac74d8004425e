//! Top navigation shared by every page.

use leptos::prelude::*;

/// Which page is active, for link highlighting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavPage {
    Capture,
    Projects,
    Viewer,
    Settings,
}

#[component]
pub fn NavBar(active: NavPage) -> impl IntoView {
    let link = move |page: NavPage, href: &'static str, label: &'static str| {
        view! {
            <a class="toolbar__link" class:toolbar__link--active=active == page href=href>
                {label}
            </a>
        }
    };

    view! {
        <header class="toolbar">
            <span class="toolbar__title">"Turntable 360"</span>
            <span class="toolbar__divider" aria-hidden="true"></span>
            {link(NavPage::Capture, "/", "Capture")}
            {link(NavPage::Projects, "/projects", "Projects")}
            {link(NavPage::Viewer, "/viewer", "Viewer")}
            <span class="toolbar__spacer"></span>
            {link(NavPage::Settings, "/settings", "Settings")}
        </header>
    }
}
