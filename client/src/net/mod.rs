//! Networking modules for the turntable backend's REST endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP calls, `error` defines how they fail, and `types`
//! defines the shared wire schema.

pub mod api;
pub mod error;
pub mod types;
