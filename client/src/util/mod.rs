//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (timers, window
//! navigation) and display formatting from page and component logic.

pub mod auto_rotate;
pub mod browser;
pub mod format;
