//! Playback-rate stepping along a fixed ladder.
//!
//! Only VODs are stepped. A rate that is not exactly on the ladder (set by
//! the player's own menu or a live stream) is left alone.

use crate::host::PlayerAccess;

/// Supported rates, slowest first.
pub const RATE_LADDER: [f64; 7] = [0.25, 0.5, 0.75, 1.0, 1.25, 1.5, 2.0];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    Faster,
    Slower,
}

/// The ladder neighbour of `current` in `direction`.
///
/// `None` when `current` is not on the ladder or the step would leave it.
pub fn next_rate(current: f64, direction: StepDirection) -> Option<f64> {
    let idx = RATE_LADDER.iter().position(|&rate| rate == current)?;
    let next = match direction {
        StepDirection::Faster => idx.checked_add(1)?,
        StepDirection::Slower => idx.checked_sub(1)?,
    };
    RATE_LADDER.get(next).copied()
}

/// Step the current player's rate one rung.
pub fn step_playback_speed<H: PlayerAccess + ?Sized>(host: &mut H, direction: StepDirection) {
    let Some(player) = host.current_player() else {
        return;
    };
    if !player.is_vod() {
        return;
    }
    let current = player.playback_rate();
    if let Some(rate) = next_rate(current, direction) {
        player.set_playback_rate(rate);
        tracing::debug!(from = current, to = rate, "playback rate stepped");
    }
}
