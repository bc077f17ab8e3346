//! Transient toast notifications.
//!
//! DESIGN
//! ======
//! Producers call [`NotificationSink::notify`] and never read anything back.
//! `ToastState` keeps a short queue; the browser build schedules each entry's
//! removal, and the toast host also lets the user dismiss early.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::*;

/// Visible toasts kept at once; older ones are dropped first.
pub const MAX_VISIBLE_TOASTS: usize = 3;

/// Milliseconds before a toast dismisses itself.
pub const TOAST_DURATION_MS: u32 = 5_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Success,
    /// Rendered with the destructive style.
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub severity: Severity,
    pub title: String,
    pub message: String,
}

impl Toast {
    #[must_use]
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self { severity: Severity::Success, title: title.into(), message: message.into() }
    }

    #[must_use]
    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self { severity: Severity::Error, title: title.into(), message: message.into() }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToastEntry {
    pub id: u64,
    pub toast: Toast,
}

#[derive(Clone, Debug, Default)]
pub struct ToastState {
    entries: Vec<ToastEntry>,
    next_id: u64,
}

impl ToastState {
    /// Queue a toast and return its id.
    pub fn push(&mut self, toast: Toast) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(ToastEntry { id, toast });
        if self.entries.len() > MAX_VISIBLE_TOASTS {
            let overflow = self.entries.len() - MAX_VISIBLE_TOASTS;
            self.entries.drain(..overflow);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.entries.retain(|entry| entry.id != id);
    }

    #[must_use]
    pub fn entries(&self) -> &[ToastEntry] {
        &self.entries
    }
}

/// Fire-and-forget notification target.
pub trait NotificationSink {
    fn notify(&self, toast: Toast);
}

impl NotificationSink for RwSignal<ToastState> {
    fn notify(&self, toast: Toast) {
        let mut id = 0;
        self.update(|state| id = state.push(toast));

        #[cfg(feature = "hydrate")]
        {
            let signal = *self;
            gloo_timers::callback::Timeout::new(TOAST_DURATION_MS, move || {
                signal.try_update(|state| state.dismiss(id));
            })
            .forget();
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    }
}
