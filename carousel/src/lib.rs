//! Interaction core for the 360° turntable viewer.
//!
//! This crate is compiled to WebAssembly and runs in the browser, but none of
//! its state logic touches the DOM. It owns the ordered frame list, the
//! current frame index, pointer-drag tracking, zoom, and the auto-rotate
//! gate. Every mutation returns [`controller::Action`]s that the host
//! component applies (swap the shown frame, start or stop the interval,
//! restyle the zoom transform). The only browser-bound piece is
//! [`listener`], which scopes DOM event listeners to a value's lifetime.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | [`controller::CarouselCore`] and the [`controller::Action`] output |
//! | [`images`] | [`images::ImageSet`], demo fallback, static URL templates |
//! | [`drag`] | Pointer-drag tracker and step direction convention |
//! | [`zoom`] | Clamped zoom level and CSS transform |
//! | [`listener`] | Drop-scoped DOM event subscriptions |
//! | [`consts`] | Default thresholds, periods, and zoom limits |

pub mod consts;
pub mod controller;
pub mod drag;
pub mod images;
pub mod listener;
pub mod zoom;
