//! Main 360° image surface: drag to rotate, wheel to zoom.
//!
//! ARCHITECTURE
//! ============
//! All interaction goes through [`carousel::controller::CarouselCore`] via
//! [`crate::util::auto_rotate::dispatch`]; this component only translates
//! DOM pointer and wheel events into core calls and renders the current
//! frame with the zoom transform. The same component backs the inline viewer
//! and the fullscreen overlay.
//!
//! The surface disables browser touch panning and captures the pointer on
//! press, so a drag keeps receiving moves after it leaves the image and a
//! horizontal swipe on touch screens rotates instead of scrolling.

use leptos::prelude::*;

use crate::state::viewer::ViewerState;
use crate::util::auto_rotate::{AutoRotateTimer, dispatch};

#[component]
pub fn CarouselView(
    viewer: RwSignal<ViewerState>,
    timer: AutoRotateTimer,
    #[prop(optional)] fullscreen: bool,
) -> impl IntoView {
    let current_url = move || viewer.with(|v| v.core.current_url().map(str::to_owned).unwrap_or_default());
    let transform = move || viewer.with(|v| v.core.zoom().css_transform());
    let dragging = move || viewer.with(|v| v.core.is_dragging());

    let on_pointer_down = move |ev: leptos::ev::PointerEvent| {
        if ev.button() != 0 {
            return;
        }
        ev.prevent_default();
        capture_pointer(&ev);
        let x = f64::from(ev.client_x());
        dispatch(viewer, timer, |core| core.on_drag_start(x));
    };

    let on_pointer_move = move |ev: leptos::ev::PointerEvent| {
        if !viewer.with_untracked(|v| v.core.is_dragging()) {
            return;
        }
        let x = f64::from(ev.client_x());
        dispatch(viewer, timer, |core| core.on_drag_move(x));
    };

    let end_drag = move || {
        if viewer.with_untracked(|v| v.core.is_dragging()) {
            viewer.update(|v| v.core.on_drag_end());
        }
    };

    let on_wheel = move |ev: leptos::ev::WheelEvent| {
        ev.prevent_default();
        let delta_y = ev.delta_y();
        dispatch(viewer, timer, |core| core.on_wheel(delta_y));
    };

    view! {
        <div
            class="carousel"
            class:carousel--fullscreen=fullscreen
            class:carousel--dragging=dragging
            style:touch-action="none"
            on:pointerdown=on_pointer_down
            on:pointermove=on_pointer_move
            on:pointerup=move |_| end_drag()
            on:pointercancel=move |_| end_drag()
            on:wheel=on_wheel
        >
            <img
                class="carousel__image"
                src=current_url
                alt="360° view"
                draggable="false"
                style:transform=transform
                on:error=move |_| {
                    let url = viewer.with_untracked(|v| v.core.current_url().map(str::to_owned));
                    leptos::logging::warn!("image failed to load: {}", url.unwrap_or_default());
                }
            />
        </div>
    }
}

/// Route the rest of this pointer's events to the carousel surface.
fn capture_pointer(ev: &leptos::ev::PointerEvent) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast as _;

        let Some(surface) = ev.current_target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) else {
            return;
        };
        if let Err(err) = surface.set_pointer_capture(ev.pointer_id()) {
            leptos::logging::warn!("pointer capture failed: {err:?}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ev;
    }
}
