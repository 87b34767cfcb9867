// --- File: crates/schedulify_dashboard/src/toggle.rs ---
//! Optimistic active/inactive switch.
//!
//! The authoritative value lives server-side, but the switch must feel
//! instant: the rendered value flips before the network round trip and
//! rolls back only if the confirmation fails. The machine is a plain enum
//! with explicit transitions, independent of any UI framework's update
//! scheduling; each event-type item owns its own instance, so toggles on
//! different records never share state.

use schedulify_common::services::{BoxedError, NotificationService};
use std::future::Future;
use tracing::warn;

/// Where the rendered value currently comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleState {
    /// The server has confirmed this value.
    Confirmed(bool),
    /// `value` is rendered optimistically; `previous` is what to revert to
    /// if the in-flight confirmation fails.
    Pending { value: bool, previous: bool },
}

/// A sequence-numbered in-flight flip.
///
/// Rapid double-toggling starts a second attempt before the first
/// resolves; the sequence number lets late results for superseded
/// attempts be discarded so the switch settles on the user's final
/// intent instead of bouncing back to the original value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleAttempt {
    target: bool,
    prior: bool,
    seq: u64,
}

impl ToggleAttempt {
    /// The value this attempt is asking the server to confirm.
    pub fn target(&self) -> bool {
        self.target
    }
}

/// Optimistic boolean toggle for one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptimisticToggle {
    state: ToggleState,
    seq: u64,
}

impl OptimisticToggle {
    pub fn new(initial: bool) -> Self {
        Self {
            state: ToggleState::Confirmed(initial),
            seq: 0,
        }
    }

    pub fn state(&self) -> ToggleState {
        self.state
    }

    /// The value the view renders right now.
    pub fn rendered(&self) -> bool {
        match self.state {
            ToggleState::Confirmed(value) => value,
            ToggleState::Pending { value, .. } => value,
        }
    }

    /// Flip the rendered value immediately and open a new attempt.
    ///
    /// The flip reads the most recent optimistic value, never the last
    /// confirmed one, so a second press while the first is outstanding
    /// targets the user's actual intent.
    pub fn begin(&mut self) -> ToggleAttempt {
        let current = self.rendered();
        self.seq += 1;
        self.state = ToggleState::Pending {
            value: !current,
            previous: current,
        };
        ToggleAttempt {
            target: !current,
            prior: current,
            seq: self.seq,
        }
    }

    /// The server acknowledged an attempt. The rendered value already
    /// matches, so this only settles the state; acks for superseded
    /// attempts are ignored.
    pub fn confirm(&mut self, attempt: ToggleAttempt) {
        if attempt.seq == self.seq {
            self.state = ToggleState::Confirmed(attempt.target);
        }
    }

    /// An attempt failed. Rolls the rendered value back to what it was
    /// before that attempt was pressed, unless a newer attempt has taken
    /// over in the meantime (then the failure is discarded).
    ///
    /// Returns whether a rollback was applied, so the caller knows to
    /// surface a transient error notification.
    pub fn fail(&mut self, attempt: ToggleAttempt) -> bool {
        if attempt.seq == self.seq {
            self.state = ToggleState::Confirmed(attempt.prior);
            true
        } else {
            false
        }
    }
}

/// Drive one full optimistic flip against the `set_active` mutation.
///
/// The rendered value flips before `send` is awaited. On failure the
/// rollback is applied (when still current) and a transient error is
/// shown; a success needs no further UI change.
pub async fn toggle_with<Fut>(
    toggle: &mut OptimisticToggle,
    notifier: &dyn NotificationService,
    send: impl FnOnce(bool) -> Fut,
) -> bool
where
    Fut: Future<Output = Result<(), BoxedError>>,
{
    let attempt = toggle.begin();

    match send(attempt.target()).await {
        Ok(()) => {
            toggle.confirm(attempt);
            true
        }
        Err(err) => {
            warn!("set_active failed: {}", err);
            if toggle.fail(attempt) {
                notifier.notify_error("Could not update the event type. Please try again.");
            }
            false
        }
    }
}
