//! Ties async continuations to the view that started them.
//!
//! A response that arrives after its view was disposed must not touch state.

use leptos::prelude::on_cleanup;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct Lifetime {
    alive: Arc<AtomicBool>,
}

impl Default for Lifetime {
    fn default() -> Self {
        Self::new()
    }
}

impl Lifetime {
    pub fn new() -> Self {
        Self {
            alive: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Creates a lifetime that ends when the current reactive owner is cleaned up
    pub fn of_current_view() -> Self {
        let lifetime = Self::new();
        let handle = lifetime.clone();
        on_cleanup(move || handle.end());
        lifetime
    }

    pub fn end(&self) {
        self.alive.store(false, Ordering::Release);
    }

    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Acquire)
    }

    /// Returns `value` only while the view is alive, logging a discarded one.
    pub fn keep<T>(&self, what: &str, value: T) -> Option<T> {
        if self.is_alive() {
            Some(value)
        } else {
            log::warn!("{}: response discarded, view already disposed", what);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_state() {
        let lifetime = Lifetime::new();
        let in_flight = lifetime.clone();
        assert!(in_flight.is_alive());

        lifetime.end();
        assert!(!in_flight.is_alive());
        assert_eq!(in_flight.keep("categories", 5), None);
    }

    #[test]
    fn test_keep_while_alive() {
        let lifetime = Lifetime::new();
        assert_eq!(lifetime.keep("products", "ok"), Some("ok"));
    }
}
