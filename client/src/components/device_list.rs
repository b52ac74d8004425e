//! Detected-device suggestions under a settings field.
//!
//! Clickable entries fill the associated input through `on_pick`; entries
//! without a handler are informational (gphoto2 cameras are addressed by the
//! backend, not by a path).

#[cfg(test)]
#[path = "device_list_test.rs"]
mod device_list_test;

use leptos::prelude::*;

use crate::net::types::Devices;

/// One suggestion: the value written into the field and its label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeviceOption {
    pub value: String,
    pub label: String,
}

pub fn webcam_options(devices: &Devices) -> Vec<DeviceOption> {
    devices
        .cameras
        .webcams
        .iter()
        .map(|path| DeviceOption { value: path.clone(), label: path.clone() })
        .collect()
}

pub fn gphoto2_options(devices: &Devices) -> Vec<DeviceOption> {
    devices
        .cameras
        .gphoto2
        .iter()
        .map(|name| DeviceOption { value: name.clone(), label: name.clone() })
        .collect()
}

/// Serial ports labelled `port - description` (just the port when the
/// description is blank).
pub fn serial_options(devices: &Devices) -> Vec<DeviceOption> {
    devices
        .arduinos
        .iter()
        .map(|a| {
            let label = if a.description.trim().is_empty() {
                a.port.clone()
            } else {
                format!("{} - {}", a.port, a.description)
            };
            DeviceOption { value: a.port.clone(), label }
        })
        .collect()
}

#[component]
pub fn DeviceList(
    options: Vec<DeviceOption>,
    empty_text: &'static str,
    #[prop(optional)] on_pick: Option<Callback<String>>,
) -> impl IntoView {
    if options.is_empty() {
        return view! { <div class="device-list device-list--empty">{empty_text}</div> }.into_any();
    }
    view! {
        <ul class="device-list">
            {options
                .into_iter()
                .map(|opt| {
                    let value = opt.value.clone();
                    view! {
                        <li
                            class="device-list__item"
                            class:device-list__item--clickable=on_pick.is_some()
                            on:click=move |_| {
                                if let Some(pick) = on_pick {
                                    pick.run(value.clone());
                                }
                            }
                        >
                            {opt.label}
                        </li>
                    }
                })
                .collect::<Vec<_>>()}
        </ul>
    }
    .into_any()
}
