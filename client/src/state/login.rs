//! Login view state: which form is showing, and the in-flight gate.
//!
//! DESIGN
//! ======
//! A form holds at most one outstanding login attempt. [`BusyGuard`] flips
//! the form's busy flag on acquire and back on drop, so every exit path of
//! an attempt (success, failure, validation) re-enables submission.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

/// Which login form the login page is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoginMode {
    #[default]
    Parent,
    Child,
}

/// A boolean flag the submit button is bound to.
pub trait BusyFlag {
    fn is_busy(&self) -> bool;
    fn set_busy(&self, busy: bool);
}

impl BusyFlag for RwSignal<bool> {
    fn is_busy(&self) -> bool {
        self.get_untracked()
    }

    fn set_busy(&self, busy: bool) {
        // The form may have unmounted while the request was in flight.
        let _ = self.try_set(busy);
    }
}

/// Held for the duration of one login attempt.
#[must_use = "dropping the guard immediately re-enables submission"]
pub struct BusyGuard<B: BusyFlag> {
    flag: B,
}

impl<B: BusyFlag> BusyGuard<B> {
    /// Mark the flag busy, or return `None` if an attempt is already running.
    pub fn acquire(flag: B) -> Option<Self> {
        if flag.is_busy() {
            return None;
        }
        flag.set_busy(true);
        Some(Self { flag })
    }
}

impl<B: BusyFlag> Drop for BusyGuard<B> {
    fn drop(&mut self) {
        self.flag.set_busy(false);
    }
}
