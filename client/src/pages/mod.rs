//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its route-scoped state signal and async loads, and
//! delegates rendering details to `components`.

pub mod capture;
pub mod projects;
pub mod settings;
pub mod viewer;
