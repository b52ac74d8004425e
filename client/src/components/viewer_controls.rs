//! Playback, zoom, reset and fullscreen buttons plus the frame slider.

use leptos::prelude::*;

use crate::state::viewer::ViewerState;
use crate::util::auto_rotate::{AutoRotateTimer, dispatch};

/// Slider resolution; the range input runs `0..=SLIDER_STEPS`.
const SLIDER_STEPS: f64 = 1000.0;

#[component]
pub fn ViewerControls(viewer: RwSignal<ViewerState>, timer: AutoRotateTimer) -> impl IntoView {
    let playing = move || viewer.with(|v| v.core.is_auto_rotating());
    let at_max = move || viewer.with(|v| v.core.zoom().at_max());
    let at_min = move || viewer.with(|v| v.core.zoom().at_min());
    let slider_value = move || format!("{:.0}", viewer.with(ViewerState::slider_fraction) * SLIDER_STEPS);

    view! {
        <div class="viewer-controls">
            <button
                class="btn viewer-controls__play"
                on:click=move |_| dispatch(viewer, timer, |core| core.toggle_auto_rotate())
                title=move || if playing() { "Pause rotation" } else { "Start rotation" }
            >
                {move || if playing() { "❚❚" } else { "▶" }}
            </button>
            <button
                class="btn"
                on:click=move |_| dispatch(viewer, timer, |core| core.zoom_out())
                disabled=at_min
                title="Zoom out"
            >
                "−"
            </button>
            <button
                class="btn"
                on:click=move |_| dispatch(viewer, timer, |core| core.zoom_in())
                disabled=at_max
                title="Zoom in"
            >
                "+"
            </button>
            <button class="btn" on:click=move |_| dispatch(viewer, timer, |core| core.reset()) title="Reset view">
                "Reset"
            </button>
            <button
                class="btn"
                on:click=move |_| viewer.update(|v| v.fullscreen = true)
                title="Fullscreen"
            >
                "⛶"
            </button>
            <input
                class="viewer-controls__slider"
                type="range"
                min="0"
                max="1000"
                prop:value=slider_value
                on:input=move |ev| {
                    let Ok(raw) = event_target_value(&ev).parse::<f64>() else {
                        return;
                    };
                    let fraction = raw / SLIDER_STEPS;
                    dispatch(viewer, timer, |core| {
                        let mut actions = core.stop_auto_rotate();
                        actions.extend(core.seek_fraction(fraction));
                        actions
                    });
                }
            />
            <span class="viewer-controls__position">{move || viewer.with(ViewerState::position_label)}</span>
        </div>
    }
}
