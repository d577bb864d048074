use dioxus::prelude::*;

/// Open/closed state of a confirmation dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfirmState {
    /// Closed with nothing pending.
    #[default]
    Closed,
    Open,
    /// The overlay closed itself but the cycle has not been resolved yet.
    Dismissed,
}

/// What the dialog's surroundings ask of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmIntent {
    /// The trigger was activated.
    Open,
    /// The confirm action was activated.
    Confirm,
    /// The cancel action was activated.
    Cancel,
    /// The overlay closed itself (escape, outside click).
    Dismiss,
}

/// Result of applying a [`ConfirmIntent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmOutcome {
    Opened,
    Confirmed,
    Cancelled,
    Dismissed,
    /// The intent had no effect in the current state.
    Ignored,
}

impl ConfirmState {
    pub fn is_open(self) -> bool {
        matches!(self, ConfirmState::Open)
    }

    /// Apply an intent, returning the next state and what happened.
    ///
    /// Each open cycle resolves at most once. A confirm or cancel arriving
    /// after the overlay reported its own close still resolves that cycle.
    pub fn transition(self, intent: ConfirmIntent) -> (ConfirmState, ConfirmOutcome) {
        use ConfirmIntent as I;
        use ConfirmOutcome as O;
        use ConfirmState as S;

        match (self, intent) {
            (S::Closed | S::Dismissed, I::Open) => (S::Open, O::Opened),
            // Modal: a second open while open changes nothing.
            (S::Open, I::Open) => (S::Open, O::Ignored),
            (S::Open | S::Dismissed, I::Confirm) => (S::Closed, O::Confirmed),
            (S::Open | S::Dismissed, I::Cancel) => (S::Closed, O::Cancelled),
            (S::Closed, I::Confirm | I::Cancel) => (S::Closed, O::Ignored),
            (S::Open, I::Dismiss) => (S::Dismissed, O::Dismissed),
            (S::Closed | S::Dismissed, I::Dismiss) => (self, O::Ignored),
        }
    }
}

/// Handle to a controlled alert dialog's open state.
///
/// Components holding a handle only send intents; the handle owns the
/// state and feeds it to [`AlertDialogRoot`](super::AlertDialogRoot).
#[derive(Clone, Copy, PartialEq)]
pub struct AlertDialogHandle {
    state: Signal<ConfirmState>,
}

impl AlertDialogHandle {
    pub fn state(&self) -> ConfirmState {
        (self.state)()
    }

    pub fn is_open(&self) -> bool {
        self.state().is_open()
    }

    pub fn send(&self, intent: ConfirmIntent) -> ConfirmOutcome {
        let mut state = self.state;
        let (next, outcome) = state().transition(intent);
        if next != state() {
            state.set(next);
        }
        outcome
    }

    /// Bridge for the overlay's `on_open_change` callback.
    pub fn on_open_change(&self, open: bool) -> ConfirmOutcome {
        self.send(if open {
            ConfirmIntent::Open
        } else {
            ConfirmIntent::Dismiss
        })
    }
}

/// Create the open state for an alert dialog.
pub fn use_alert_dialog(default_open: bool) -> AlertDialogHandle {
    let state = use_signal(|| {
        if default_open {
            ConfirmState::Open
        } else {
            ConfirmState::Closed
        }
    });
    AlertDialogHandle { state }
}
