//! Thin wrappers over `window` for alerts and full-page navigation.
//!
//! TRADE-OFFS
//! ==========
//! These are browser-only side effects; SSR builds no-op so server rendering
//! stays deterministic. Failures (no window, blocked dialogs) are logged and
//! otherwise ignored.

/// Show a blocking alert dialog.
pub fn alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(err) = window.alert_with_message(message) {
            leptos::logging::warn!("alert failed: {err:?}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
    }
}

/// Reload the current page.
pub fn reload() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(err) = window.location().reload() {
                leptos::logging::warn!("reload failed: {err:?}");
            }
        }
    }
}

/// Navigate with a full page load.
pub fn redirect(href: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(err) = window.location().set_href(href) {
                leptos::logging::warn!("redirect to {href} failed: {err:?}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = href;
    }
}
