//! Fullscreen viewer overlay.
//!
//! While open, the overlay listens on `window` for `keydown` (Escape closes)
//! and `pointerup` (ends a drag released outside the image). Both listeners
//! live in one [`SubscriptionSet`]: opening installs them only into an empty
//! set, and the set is cleared on close and on unmount.

use carousel::listener::SubscriptionSet;
use leptos::prelude::*;

use crate::components::carousel_view::CarouselView;
use crate::state::viewer::ViewerState;
use crate::util::auto_rotate::AutoRotateTimer;

#[component]
pub fn ViewerOverlay(viewer: RwSignal<ViewerState>, timer: AutoRotateTimer) -> impl IntoView {
    let subscriptions = StoredValue::new_local(SubscriptionSet::new());
    let open = Memo::new(move |_| viewer.with(|v| v.fullscreen));

    Effect::new(move || {
        if open.get() {
            register_window_listeners(viewer, subscriptions);
        } else {
            subscriptions.try_update_value(SubscriptionSet::clear);
        }
    });
    on_cleanup(move || {
        subscriptions.try_update_value(SubscriptionSet::clear);
    });

    let close = move || viewer.update(|v| v.fullscreen = false);

    view! {
        <Show when=move || open.get()>
            <div class="viewer-overlay" role="dialog" aria-modal="true">
                <button class="viewer-overlay__close btn" on:click=move |_| close() title="Close (Esc)">
                    "✕"
                </button>
                <CarouselView viewer=viewer timer=timer fullscreen=true/>
            </div>
        </Show>
    }
}

#[cfg(feature = "hydrate")]
fn register_window_listeners(viewer: RwSignal<ViewerState>, subscriptions: StoredValue<SubscriptionSet, LocalStorage>) {
    use carousel::listener::Subscription;
    use wasm_bindgen::JsCast as _;

    let Some(window) = web_sys::window() else {
        return;
    };

    let make = move || {
        let on_key = Subscription::listen(&window, "keydown", move |ev| {
            let Some(key_event) = ev.dyn_ref::<web_sys::KeyboardEvent>() else {
                return;
            };
            if key_event.key() == "Escape" {
                viewer.update(|v| v.fullscreen = false);
            }
        });
        let on_release = Subscription::listen(&window, "pointerup", move |_| {
            if viewer.with_untracked(|v| v.core.is_dragging()) {
                viewer.update(|v| v.core.on_drag_end());
            }
        });
        [on_key, on_release]
            .into_iter()
            .filter_map(|sub| match sub {
                Ok(sub) => Some(sub),
                Err(err) => {
                    leptos::logging::warn!("overlay listener registration failed: {err:?}");
                    None
                }
            })
            .collect::<Vec<_>>()
    };
    subscriptions.try_update_value(|set| set.install(make));
}

#[cfg(not(feature = "hydrate"))]
fn register_window_listeners(viewer: RwSignal<ViewerState>, subscriptions: StoredValue<SubscriptionSet, LocalStorage>) {
    let _ = (viewer, subscriptions);
}
