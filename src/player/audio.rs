//! Cross-tab audio muting.
//!
//! A hidden tab or an unfocused window forces the player muted; coming back
//! restores whatever the user last chose. The user's choice is only ever
//! changed by the player's own volume control.

use crate::host::{Listener, PlayerAccess};
use crate::player::state::ControllerState;

/// Listeners owned by the mute feature.
pub const MUTE_LISTENERS: [Listener; 4] = [
    Listener::VisibilityChange,
    Listener::WindowBlur,
    Listener::WindowFocus,
    Listener::VolumeControlClick,
];

/// Record the freshly mounted player's mute state as the user's choice.
pub fn capture_user_intent<H: PlayerAccess + ?Sized>(state: &mut ControllerState, host: &mut H) {
    state.is_muted_by_user = host.current_player().is_some_and(|p| p.muted());
}

/// Tab hidden or window blurred.
pub fn suppress<H: PlayerAccess + ?Sized>(host: &mut H) {
    if let Some(player) = host.current_player() {
        player.set_muted(true);
        tracing::debug!("tab in background, audio suppressed");
    }
}

/// Tab visible or window focused again.
pub fn restore<H: PlayerAccess + ?Sized>(state: &ControllerState, host: &mut H) {
    if let Some(player) = host.current_player() {
        player.set_muted(state.is_muted_by_user);
        tracing::debug!(muted = state.is_muted_by_user, "tab in foreground, audio restored");
    }
}

pub fn on_visibility_change<H: PlayerAccess + ?Sized>(
    hidden: bool,
    state: &ControllerState,
    host: &mut H,
) {
    if hidden {
        suppress(host);
    } else {
        restore(state, host);
    }
}
