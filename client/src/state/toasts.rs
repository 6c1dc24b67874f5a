//! Visible toast queue fed by the HTTP gateway and page actions.

#[cfg(test)]
#[path = "toasts_test.rs"]
mod toasts_test;

use leptos::prelude::*;

use crate::notify::{Notice, Notifier};

/// Oldest toasts are dropped beyond this many.
pub const MAX_TOASTS: usize = 5;
#[cfg(feature = "hydrate")]
const TOAST_TTL_MS: u64 = 5_000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: String,
    pub notice: Notice,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub items: Vec<Toast>,
}

impl ToastState {
    /// Queue a notice and return its id.
    pub fn push(&mut self, notice: Notice) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        self.items.push(Toast { id: id.clone(), notice });
        if self.items.len() > MAX_TOASTS {
            let overflow = self.items.len() - MAX_TOASTS;
            self.items.drain(..overflow);
        }
        id
    }

    pub fn dismiss(&mut self, id: &str) {
        self.items.retain(|t| t.id != id);
    }
}

/// [`Notifier`] that pushes into the reactive toast queue.
#[derive(Clone, Copy)]
pub struct ToastNotifier {
    toasts: RwSignal<ToastState>,
}

impl ToastNotifier {
    pub fn new(toasts: RwSignal<ToastState>) -> Self {
        Self { toasts }
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, notice: Notice) {
        let Some(id) = self.toasts.try_update(|s| s.push(notice)) else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let toasts = self.toasts;
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_millis(TOAST_TTL_MS)).await;
                toasts.update(|s| s.dismiss(&id));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    }
}
