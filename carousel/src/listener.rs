//! DOM event listeners tied to a Rust value's lifetime.
//!
//! DESIGN
//! ======
//! A [`Subscription`] owns the JS closure it registered. Dropping it removes
//! the listener from the target before the closure is freed, so a component
//! that stores its subscriptions and drops them on cleanup never leaves a
//! dangling handler behind (the fullscreen overlay's Escape handler is the
//! main user).

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Event, EventTarget};

/// One registered listener. Removed from its target on drop.
pub struct Subscription {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Subscription {
    /// Register `handler` for `event` on `target`.
    ///
    /// # Errors
    ///
    /// Returns the JS exception if the browser rejects the registration.
    pub fn listen<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self, JsValue>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::<dyn FnMut(Event)>::new(handler);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self { target: target.clone(), event, callback })
    }

    #[must_use]
    pub fn event(&self) -> &'static str {
        self.event
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
            .is_err()
        {
            // Target already gone; the closure is freed regardless.
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("event", &self.event).finish_non_exhaustive()
    }
}

/// A group of guards released together.
///
/// Generic over the guard so the open/close bookkeeping does not depend on
/// a browser; in the app `S` is always [`Subscription`].
#[derive(Debug)]
pub struct SubscriptionSet<S = Subscription> {
    subs: Vec<S>,
}

impl<S> Default for SubscriptionSet<S> {
    fn default() -> Self {
        Self { subs: Vec::new() }
    }
}

impl<S> SubscriptionSet<S> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, sub: S) {
        self.subs.push(sub);
    }

    /// Fill an empty set from `make`. A set that already holds guards is left
    /// alone and `make` is not called, so repeated opens never stack
    /// listeners. Returns whether `make` ran.
    pub fn install<F>(&mut self, make: F) -> bool
    where
        F: FnOnce() -> Vec<S>,
    {
        if !self.subs.is_empty() {
            return false;
        }
        self.subs = make();
        true
    }

    /// Drop every guard in the set.
    pub fn clear(&mut self) {
        self.subs.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.subs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subs.is_empty()
    }
}

#[cfg(test)]
#[path = "listener_test.rs"]
mod listener_test;
