//! Keyboard shortcuts for the player.
//!
//! Rate keys step through the rate ladder; everything else presses one of the
//! player's own control buttons.

use crate::host::{Control, PageSurface, PlayerAccess};
use crate::player::playback::{step_playback_speed, StepDirection};

/// A key press as delivered by the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// Character produced by the key.
    pub key: char,
    pub ctrl: bool,
    pub meta: bool,
}

impl KeyPress {
    pub fn new(key: char) -> Self {
        Self {
            key,
            ctrl: false,
            meta: false,
        }
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }
}

/// What a shortcut does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    SlowDown,
    SpeedUp,
    TogglePlayPause,
    ToggleFullscreen,
    ToggleMute,
}

/// Map a character to its shortcut, if any.
pub fn action_for_key(key: char) -> Option<KeyAction> {
    match key {
        '<' | ',' => Some(KeyAction::SlowDown),
        '>' | '.' => Some(KeyAction::SpeedUp),
        'k' => Some(KeyAction::TogglePlayPause),
        'f' => Some(KeyAction::ToggleFullscreen),
        'm' => Some(KeyAction::ToggleMute),
        _ => None,
    }
}

/// Handle a key press.
///
/// Ignored with ctrl/meta held, while typing into a form field, or when no
/// player is on the page.
pub fn handle_key_event<H>(key: KeyPress, host: &mut H)
where
    H: PlayerAccess + PageSurface + ?Sized,
{
    if key.ctrl || key.meta {
        return;
    }
    if host.text_input_focused() || !host.player_present() {
        return;
    }
    let Some(action) = action_for_key(key.key) else {
        return;
    };

    match action {
        KeyAction::SlowDown => step_playback_speed(host, StepDirection::Slower),
        KeyAction::SpeedUp => step_playback_speed(host, StepDirection::Faster),
        KeyAction::TogglePlayPause => press(host, Control::PlayPause),
        KeyAction::ToggleFullscreen => press(host, Control::Fullscreen),
        KeyAction::ToggleMute => press(host, Control::Mute),
    }
}

fn press<H: PageSurface + ?Sized>(host: &mut H, control: Control) {
    tracing::debug!(?control, "shortcut pressed player control");
    host.activate(control);
}
