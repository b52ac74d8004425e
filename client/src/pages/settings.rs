//! Settings page: camera, serial port, rotation defaults and simulator.
//!
//! SYSTEM CONTEXT
//! ==============
//! On mount the page loads `/get_config` into the form and `/api/devices`
//! into the suggestion lists; "Refresh devices" re-runs the scan after a
//! camera or Arduino is replugged. A failed config load is logged and the form
//! keeps its defaults. Submit validates locally, posts the full config to
//! `/save_config`, and on success returns to the capture page after
//! [`crate::state::settings::SAVE_REDIRECT_DELAY_MS`].

use leptos::prelude::*;

use crate::components::device_list::{DeviceList, gphoto2_options, serial_options, webcam_options};
use crate::components::nav_bar::{NavBar, NavPage};
use crate::state::settings::{CUSTOM_PRESET, RESOLUTION_PRESETS, SaveStatus, SettingsForm, SettingsState};

#[component]
pub fn SettingsPage() -> impl IntoView {
    let settings = RwSignal::new(SettingsState { loading: true, ..SettingsState::default() });
    provide_context(settings);

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_config().await {
                Ok(config) => settings.update(|s| {
                    s.form = SettingsForm::from_config(&config);
                    s.load_error = None;
                }),
                Err(err) => {
                    leptos::logging::warn!("config load failed, keeping defaults: {err}");
                    settings.update(|s| s.load_error = Some(format!("Could not load settings: {err}")));
                }
            }
            settings.update(|s| s.loading = false);
        });
    }
    scan_devices(settings);

    let field = move |read: fn(&SettingsForm) -> String| move || settings.with(|s| read(&s.form));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if settings.with_untracked(|s| s.save == SaveStatus::Saving) {
            return;
        }
        let config = match settings.with_untracked(|s| s.form.to_config()) {
            Ok(config) => config,
            Err(err) => {
                settings.update(|s| s.save = SaveStatus::Failed(err.to_string()));
                return;
            }
        };
        settings.update(|s| s.save = SaveStatus::Saving);
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::save_config(&config).await {
                    Ok(message) => {
                        settings.update(|s| s.save = SaveStatus::Saved(message));
                        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(crate::state::settings::SAVE_REDIRECT_DELAY_MS))).await;
                        crate::util::browser::redirect("/");
                    }
                    Err(err) => {
                        leptos::logging::error!("save config failed: {err}");
                        settings.update(|s| s.save = SaveStatus::Failed(err.to_string()));
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = config;
        }
    };

    let on_show_config = move |_| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let dump = match crate::net::api::fetch_config_raw().await {
                    Ok(value) => crate::state::settings::pretty_config(&value),
                    Err(err) => {
                        leptos::logging::error!("config dump failed: {err}");
                        format!("Error loading configuration: {err}")
                    }
                };
                settings.update(|s| s.config_dump = Some(dump));
            });
        }
    };

    let devices = move || settings.with(|s| s.devices.clone());
    let pick_device = Callback::new(move |path: String| settings.update(|s| s.form.device_path = path));
    let pick_port = Callback::new(move |port: String| settings.update(|s| s.form.arduino_port = port));

    view! {
        <div class="settings-page">
            <NavBar active=NavPage::Settings/>
            <h1>"Settings"</h1>
            <Show when=move || settings.with(|s| s.load_error.is_some())>
                <p class="settings-page__warning">{move || settings.with(|s| s.load_error.clone().unwrap_or_default())}</p>
            </Show>
            <form class="settings-form" on:submit=on_submit>
                <fieldset>
                    <legend>"Camera"</legend>
                    <label class="settings-form__label">
                        "Device path"
                        <input
                            type="text"
                            prop:value=field(|f| f.device_path.clone())
                            on:input=move |ev| settings.update(|s| s.form.device_path = event_target_value(&ev))
                        />
                    </label>
                    <div class="settings-form__devices">
                        <button
                            class="btn"
                            type="button"
                            on:click=move |_| scan_devices(settings)
                            disabled=move || settings.with(|s| s.scanning_devices)
                        >
                            {move || if settings.with(|s| s.scanning_devices) { "Detecting..." } else { "Refresh devices" }}
                        </button>
                    </div>
                    {move || devices().map(|d| view! {
                        <DeviceList options=webcam_options(&d) empty_text="No webcams found" on_pick=pick_device/>
                    })}
                    <label class="settings-form__label">
                        "Camera type"
                        <select
                            prop:value=field(|f| f.camera_kind.clone())
                            on:change=move |ev| settings.update(|s| s.form.camera_kind = event_target_value(&ev))
                        >
                            <option value="webcam">"Webcam"</option>
                            <option value="gphoto2">"gPhoto2 (DSLR)"</option>
                        </select>
                    </label>
                    {move || devices().map(|d| view! {
                        <DeviceList options=gphoto2_options(&d) empty_text="No gphoto2 cameras found"/>
                    })}
                    <label class="settings-form__label">
                        "Resolution"
                        <select
                            prop:value=field(|f| f.preset.clone())
                            on:change=move |ev| settings.update(|s| s.form.select_preset(&event_target_value(&ev)))
                        >
                            {RESOLUTION_PRESETS
                                .iter()
                                .map(|(key, _, _)| view! { <option value=*key>{*key}</option> })
                                .collect::<Vec<_>>()}
                            <option value=CUSTOM_PRESET>"Custom"</option>
                        </select>
                    </label>
                    <div class="settings-form__row">
                        <label class="settings-form__label">
                            "Width"
                            <input
                                type="number"
                                min="1"
                                prop:value=field(|f| f.width.clone())
                                on:input=move |ev| settings.update(|s| {
                                    s.form.width = event_target_value(&ev);
                                    s.form.sync_preset();
                                })
                            />
                        </label>
                        <label class="settings-form__label">
                            "Height"
                            <input
                                type="number"
                                min="1"
                                prop:value=field(|f| f.height.clone())
                                on:input=move |ev| settings.update(|s| {
                                    s.form.height = event_target_value(&ev);
                                    s.form.sync_preset();
                                })
                            />
                        </label>
                    </div>
                </fieldset>

                <fieldset>
                    <legend>"Turntable"</legend>
                    <label class="settings-form__label">
                        "Serial port"
                        <input
                            type="text"
                            prop:value=field(|f| f.arduino_port.clone())
                            on:input=move |ev| settings.update(|s| s.form.arduino_port = event_target_value(&ev))
                        />
                    </label>
                    {move || devices().map(|d| view! {
                        <DeviceList options=serial_options(&d) empty_text="No Arduino devices found" on_pick=pick_port/>
                    })}
                    <label class="settings-form__label">
                        "Baud rate"
                        <input
                            type="number"
                            prop:value=field(|f| f.baudrate.clone())
                            on:input=move |ev| settings.update(|s| s.form.baudrate = event_target_value(&ev))
                        />
                    </label>
                </fieldset>

                <fieldset>
                    <legend>"Rotation defaults"</legend>
                    <label class="settings-form__label">
                        "Step (degrees)"
                        <input
                            type="number"
                            min="1"
                            max="360"
                            prop:value=field(|f| f.default_degrees.clone())
                            on:input=move |ev| settings.update(|s| s.form.default_degrees = event_target_value(&ev))
                        />
                    </label>
                    <label class="settings-form__label">
                        "Interval (seconds)"
                        <input
                            type="number"
                            min="0"
                            prop:value=field(|f| f.default_interval.clone())
                            on:input=move |ev| settings.update(|s| s.form.default_interval = event_target_value(&ev))
                        />
                    </label>
                </fieldset>

                <fieldset>
                    <legend>"Simulator"</legend>
                    <label class="settings-form__radio">
                        <input
                            type="radio"
                            name="simulator"
                            prop:checked=move || settings.with(|s| s.form.simulator_enabled)
                            on:change=move |_| settings.update(|s| s.form.simulator_enabled = true)
                        />
                        "On"
                    </label>
                    <label class="settings-form__radio">
                        <input
                            type="radio"
                            name="simulator"
                            prop:checked=move || settings.with(|s| !s.form.simulator_enabled)
                            on:change=move |_| settings.update(|s| s.form.simulator_enabled = false)
                        />
                        "Off"
                    </label>
                </fieldset>

                <div class="settings-form__actions">
                    <button
                        class="btn btn--primary"
                        type="submit"
                        disabled=move || settings.with(|s| s.loading || s.save == SaveStatus::Saving)
                    >
                        "Save"
                    </button>
                    <button class="btn" type="button" on:click=on_show_config>
                        "Show current config"
                    </button>
                </div>
                <Show when=move || settings.with(|s| s.save != SaveStatus::Idle)>
                    <p class=move || format!("status {}", settings.with(|s| s.save.css_class()))>
                        {move || settings.with(|s| s.save.text())}
                    </p>
                </Show>
            </form>
            <Show when=move || settings.with(|s| s.config_dump.is_some())>
                <pre class="settings-page__dump">{move || settings.with(|s| s.config_dump.clone().unwrap_or_default())}</pre>
            </Show>
        </div>
    }
}

/// (Re)detect cameras and serial ports. Ignored while a scan is running.
fn scan_devices(settings: RwSignal<SettingsState>) {
    if !settings.try_update(SettingsState::begin_device_scan).unwrap_or(false) {
        return;
    }
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_devices().await;
            if let Err(err) = &result {
                leptos::logging::warn!("device detection failed: {err}");
            }
            settings.update(|s| s.finish_device_scan(result));
        });
    }
}
