//! Input handling for the controller.
//!
//! Key presses become player actions; clicks and mouse moves on the player
//! drive click-to-pause and the fullscreen cursor.

mod keyboard;
mod mouse;

pub use keyboard::{action_for_key, handle_key_event, KeyAction, KeyPress};
pub use mouse::{
    handle_player_click, resolve_clicks, ClickTarget, CursorAutoHide, SurfaceKind, CLICK_WINDOW,
    CURSOR_HIDE_DELAY,
};
