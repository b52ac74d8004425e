//! Capture page: guided full-turn sequence plus single manual rotations.
//!
//! SYSTEM CONTEXT
//! ==============
//! Step and interval default from the saved rotation config. Start runs an
//! async loop that asks [`CaptureSession`] for each step, posts `/rotate`,
//! records the returned photo path and sleeps between steps. Stop only sets a
//! flag; the loop sees it before the next step. Any failed call ends the run.
//! Once a run has finished, "Clear" returns the bar and status to idle.
//!
//! TRADE-OFFS
//! ==========
//! The loop holds no handle to the session besides the signal. Leaving the
//! page mid-run lets the in-flight request finish; the loop then finds the
//! signal disposed and exits.

use leptos::prelude::*;

use crate::components::nav_bar::{NavBar, NavPage};
use crate::state::capture::{CaptureSession, CapturePlan};

#[component]
pub fn CapturePage() -> impl IntoView {
    let session = RwSignal::new(CaptureSession::default());
    let step = RwSignal::new(crate::net::types::RotationConfig::default().default_degrees.to_string());
    let interval = RwSignal::new(crate::net::types::RotationConfig::default().default_interval.to_string());
    let form_error = RwSignal::new(None::<String>);
    provide_context(session);

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_config().await {
                Ok(config) => {
                    step.set(config.rotation.default_degrees.to_string());
                    interval.set(config.rotation.default_interval.to_string());
                }
                Err(err) => leptos::logging::warn!("rotation defaults unavailable: {err}"),
            }
        });
    }

    let on_start = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let started = CapturePlan::parse(&step.get_untracked(), &interval.get_untracked())
            .and_then(|plan| session.try_update(|s| s.start(plan)).unwrap_or(Ok(())));
        match started {
            Ok(()) => {
                form_error.set(None);
                run_sequence(session);
            }
            Err(err) => form_error.set(Some(err.to_string())),
        }
    };

    let on_stop = move |_| {
        session.update(|s| {
            s.request_stop();
        });
    };

    let running = move || session.with(CaptureSession::is_running);
    let percent = move || session.with(|s| crate::util::format::progress_percent(s.completed(), s.total()));

    view! {
        <div class="capture-page">
            <NavBar active=NavPage::Capture/>
            <h1>"360° Capture"</h1>

            <form class="capture-form" on:submit=on_start>
                <label class="capture-form__label">
                    "Rotation step (degrees)"
                    <input
                        type="number"
                        min="1"
                        max="360"
                        prop:value=move || step.get()
                        on:input=move |ev| step.set(event_target_value(&ev))
                        disabled=running
                    />
                </label>
                <label class="capture-form__label">
                    "Interval (seconds)"
                    <input
                        type="number"
                        min="0"
                        prop:value=move || interval.get()
                        on:input=move |ev| interval.set(event_target_value(&ev))
                        disabled=running
                    />
                </label>
                <div class="capture-form__actions">
                    <button class="btn btn--primary" type="submit" disabled=running>
                        "Start Rotation"
                    </button>
                    <button
                        class="btn btn--danger"
                        type="button"
                        on:click=on_stop
                        disabled=move || session.with(|s| !s.is_running() || s.is_stopping())
                    >
                        "Stop"
                    </button>
                </div>
                <Show when=move || form_error.with(Option::is_some)>
                    <p class="capture-form__error">{move || form_error.get().unwrap_or_default()}</p>
                </Show>
            </form>

            <div class="progress">
                <div class=move || session.with(CaptureSession::bar_class) style:width=percent></div>
            </div>
            <p class="capture-page__status">{move || session.with(CaptureSession::status_text)}</p>
            <Show when=move || session.with(CaptureSession::is_finished)>
                <button class="btn" type="button" on:click=move |_| session.update(CaptureSession::reset)>
                    "Clear"
                </button>
            </Show>

            <ManualRotate session=session/>

            <Show when=move || session.with(|s| s.latest_photo().is_some())>
                <figure class="capture-page__preview">
                    <img
                        alt="Latest capture"
                        src=move || session.with(|s| s.latest_photo().map(str::to_owned).unwrap_or_default())
                    />
                </figure>
            </Show>
        </div>
    }
}

/// One rotation by an arbitrary angle, outside any sequence.
#[component]
fn ManualRotate(session: RwSignal<CaptureSession>) -> impl IntoView {
    let degrees = RwSignal::new(String::from("15"));
    let status = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);

    let on_rotate = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() || session.with_untracked(CaptureSession::is_running) {
            return;
        }
        let deg = match crate::state::capture::parse_manual_degrees(&degrees.get_untracked()) {
            Ok(deg) => deg,
            Err(err) => {
                status.set(Some(format!("Error: {err}")));
                return;
            }
        };
        pending.set(true);
        status.set(Some(format!("Rotating {deg}°...")));
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::rotate(deg, None).await {
                    Ok(photo) => {
                        session.update(|s| s.set_latest_photo(photo));
                        status.set(Some(format!("Rotated {deg}°")));
                    }
                    Err(err) => {
                        leptos::logging::error!("manual rotate failed: {err}");
                        status.set(Some(format!("Error: {err}")));
                    }
                }
                pending.set(false);
            });
        }
    };

    view! {
        <form class="manual-rotate" on:submit=on_rotate>
            <label class="capture-form__label">
                "Rotate by (degrees)"
                <input
                    type="number"
                    min="1"
                    max="360"
                    prop:value=move || degrees.get()
                    on:input=move |ev| degrees.set(event_target_value(&ev))
                />
            </label>
            <button
                class="btn"
                type="submit"
                disabled=move || pending.get() || session.with(CaptureSession::is_running)
            >
                "Rotate"
            </button>
            <Show when=move || status.with(Option::is_some)>
                <p class="manual-rotate__status">{move || status.get().unwrap_or_default()}</p>
            </Show>
        </form>
    }
}

/// Drive a started session to a terminal phase.
fn run_sequence(session: RwSignal<CaptureSession>) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            loop {
                let Some(degrees) = session.try_update(CaptureSession::next_step).flatten() else {
                    break;
                };
                let Some(interval) = session.try_with_untracked(CaptureSession::interval_secs) else {
                    break;
                };
                let recorded = match crate::net::api::rotate(degrees, Some(interval)).await {
                    Ok(photo) => session.try_update(|s| s.record_photo(photo)).is_some(),
                    Err(err) => {
                        leptos::logging::error!("rotation step failed: {err}");
                        session.try_update(|s| s.record_error(err.to_string()));
                        false
                    }
                };
                if !recorded {
                    break;
                }
                if session.try_with_untracked(CaptureSession::should_wait).unwrap_or(false) {
                    gloo_timers::future::sleep(std::time::Duration::from_secs(u64::from(interval))).await;
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
    }
}
