//! Page-scoped application state.
//!
//! ARCHITECTURE
//! ============
//! Each page provides one `RwSignal` of its state struct via context. The
//! structs are plain data with synchronous transition methods so they can be
//! unit tested without a browser.

pub mod capture;
pub mod projects;
pub mod settings;
pub mod viewer;
