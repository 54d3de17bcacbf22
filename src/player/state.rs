//! Controller state
//!
//! The only mutable state the controller carries across events. Everything
//! else (rate, mute, paused) lives in the player and is read on demand.

/// Per-controller state, alive for the page session.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ControllerState {
    /// Mute state the user last chose through the player's volume control.
    ///
    /// Captured on every player mount and flipped by volume-control clicks;
    /// visibility and focus changes never write it.
    pub is_muted_by_user: bool,
    /// Surface clicks seen in the current disambiguation window.
    pub pending_click_count: u32,
}

impl ControllerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a user interaction with the volume control.
    pub fn toggle_muted_by_user(&mut self) {
        self.is_muted_by_user = !self.is_muted_by_user;
    }

    /// Record one surface click.
    pub fn record_click(&mut self) {
        self.pending_click_count += 1;
    }

    /// Close the window: return the clicks seen and reset the counter.
    pub fn take_clicks(&mut self) -> u32 {
        std::mem::take(&mut self.pending_click_count)
    }
}
