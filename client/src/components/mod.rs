//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the viewer surface, its controls and the list/form
//! pieces, reading and writing page state passed in as signals.

pub mod carousel_view;
pub mod device_list;
pub mod nav_bar;
pub mod project_card;
pub mod thumbnail_strip;
pub mod viewer_controls;
pub mod viewer_overlay;
