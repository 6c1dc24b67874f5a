//! Liveness flag for async work spawned by a component.
//!
//! Results arriving after the owning component unmounted must not touch its
//! signals. Tasks clone the guard and check [`MountGuard::is_alive`] before
//! writing.

#[cfg(test)]
#[path = "mount_test.rs"]
mod mount_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Clone, Debug)]
pub struct MountGuard {
    alive: Arc<AtomicBool>,
}

impl MountGuard {
    /// A live guard, not yet tied to any owner.
    #[must_use]
    pub fn detached() -> Self {
        Self { alive: Arc::new(AtomicBool::new(true)) }
    }

    /// A guard flipped off when the current reactive owner is cleaned up.
    #[must_use]
    pub fn new() -> Self {
        let guard = Self::detached();
        let alive = guard.alive.clone();
        leptos::prelude::on_cleanup(move || alive.store(false, Ordering::Relaxed));
        guard
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }

    pub fn release(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}
