//! Pure functions for calculating animation deadlines.
//!
//! These functions are I/O-free and deterministic, suitable for use in the app layer.
//! The UI layer uses the returned deadlines to schedule wake-ups.

use std::time::{Duration, Instant};

use crate::state::AppState;

/// Interval for spinner animation updates.
const SPINNER_INTERVAL: Duration = Duration::from_millis(150);

/// Calculates the next animation deadline based on the current state.
///
/// Returns `Some(Instant)` when an animation is active and needs a timed update.
/// Returns `None` when no animations are active (caller can wait indefinitely for input).
///
/// # Animation sources
/// 1. Spinner: database or table list loading, or a query in flight
/// 2. Message timeout: Error/success messages with expiration
pub fn next_animation_deadline(state: &AppState, now: Instant) -> Option<Instant> {
    let mut earliest: Option<Instant> = None;

    if has_active_spinner(state) {
        earliest = min_instant(earliest, Some(now + SPINNER_INTERVAL));
    }

    if let Some(expires_at) = state.messages.expires_at {
        earliest = min_instant(earliest, Some(expires_at));
    }

    earliest
}

/// Returns true if a spinner animation is currently active.
fn has_active_spinner(state: &AppState) -> bool {
    state.databases.load.is_loading()
        || state
            .table_tree
            .as_ref()
            .is_some_and(|tree| tree.load.is_loading())
        || state.query.phase.is_busy()
}

/// Returns the earlier of two optional instants.
fn min_instant(a: Option<Instant>, b: Option<Instant>) -> Option<Instant> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (Some(a), None) => Some(a),
        (None, Some(b)) => Some(b),
        (None, None) => None,
    }
}
