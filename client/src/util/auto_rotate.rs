//! Auto-rotate timer slot and carousel action dispatch.
//!
//! TRADE-OFFS
//! ==========
//! The repeating `Interval` lives in a local `StoredValue` rather than in
//! `ViewerState`, because timer handles are not `Send` and must not be
//! cloned with the state. Starting is guarded by slot presence, so a second
//! `StartTimer` never creates a second interval. SSR builds carry an empty
//! slot and every operation is a no-op.

use carousel::controller::{Action, CarouselCore};
use leptos::prelude::*;

use crate::state::viewer::ViewerState;

/// Handle to the viewer's single auto-rotate interval. `Copy`, so it can be
/// moved into any number of event handlers.
#[derive(Clone, Copy)]
pub struct AutoRotateTimer {
    #[cfg(feature = "hydrate")]
    slot: StoredValue<Option<gloo_timers::callback::Interval>, LocalStorage>,
}

impl AutoRotateTimer {
    pub fn new() -> Self {
        Self {
            #[cfg(feature = "hydrate")]
            slot: StoredValue::new_local(None),
        }
    }

    /// Apply the timer side of a carousel action list.
    pub fn apply(self, viewer: RwSignal<ViewerState>, actions: &[Action]) {
        for action in actions {
            match action {
                Action::StartTimer { period_ms } => self.start(viewer, *period_ms),
                Action::StopTimer => self.stop(),
                Action::ShowFrame { .. } | Action::ZoomChanged(_) => {}
            }
        }
    }

    pub fn is_running(self) -> bool {
        #[cfg(feature = "hydrate")]
        {
            self.slot.try_with_value(Option::is_some).unwrap_or(false)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            false
        }
    }

    fn start(self, viewer: RwSignal<ViewerState>, period_ms: u32) {
        #[cfg(feature = "hydrate")]
        {
            if self.is_running() {
                return;
            }
            let interval = gloo_timers::callback::Interval::new(period_ms, move || {
                viewer.update(|v| {
                    v.core.tick();
                });
            });
            self.slot.try_set_value(Some(interval));
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (viewer, period_ms);
        }
    }

    /// Cancel the interval if one is running.
    pub fn stop(self) {
        #[cfg(feature = "hydrate")]
        {
            self.slot.try_update_value(|slot| {
                slot.take();
            });
        }
    }
}

impl Default for AutoRotateTimer {
    fn default() -> Self {
        Self::new()
    }
}

/// Run one carousel operation against the viewer state and apply its timer
/// actions. Frame and zoom actions need no work here; the view re-renders
/// from the updated state.
pub fn dispatch<F>(viewer: RwSignal<ViewerState>, timer: AutoRotateTimer, op: F)
where
    F: FnOnce(&mut CarouselCore) -> Vec<Action>,
{
    let actions = viewer.try_update(|v| op(&mut v.core)).unwrap_or_default();
    timer.apply(viewer, &actions);
}
