//! Mouse input handling for the player.
//!
//! Handles click-to-pause, which must tell a single click apart from the
//! double-click the page uses for fullscreen, and hides the cursor over an
//! idle fullscreen player.

use std::time::Duration;

use crate::host::{Control, PageFlag, PageSurface, Scheduler, Timer};
use crate::player::debounce::Debounce;
use crate::player::state::ControllerState;

/// Window in which a second click turns a click into a double-click.
pub const CLICK_WINDOW: Duration = Duration::from_millis(250);

/// Idle time before the fullscreen cursor is hidden.
pub const CURSOR_HIDE_DELAY: Duration = Duration::from_millis(5000);

/// Player surface elements that count as a click-to-pause target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceKind {
    FullscreenOverlay,
    Video,
    /// Overlay shown while paused.
    PausedOverlay,
}

/// Where a click on the player landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// Directly on a surface element.
    Surface(SurfaceKind),
    /// On something inside the player that bubbled up.
    Descendant,
}

/// Handle a click on the player.
///
/// Surface clicks are counted and resolved after [`CLICK_WINDOW`]; other
/// clicks only pull keyboard focus back to the player.
pub fn handle_player_click<H>(target: ClickTarget, state: &mut ControllerState, host: &mut H)
where
    H: PageSurface + Scheduler + ?Sized,
{
    match target {
        ClickTarget::Descendant => host.focus_player_container(),
        ClickTarget::Surface(_) => {
            state.record_click();
            host.schedule(Timer::ClickResolution, CLICK_WINDOW);
        }
    }
}

/// Close a click window.
///
/// Exactly one click pauses a playing player; two or more were a double-click
/// and do nothing. A paused player resumes from the click by itself, so it is
/// never toggled here. The counter is always reset.
pub fn resolve_clicks<H>(state: &mut ControllerState, host: &mut H)
where
    H: PageSurface + ?Sized,
{
    let clicks = state.take_clicks();
    if clicks != 1 || host.is_paused() {
        return;
    }
    tracing::debug!("click-to-pause pausing playback");
    host.activate(Control::PlayPause);
}

/// Shows the cursor on movement and hides it again after a quiet period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CursorAutoHide {
    debounce: Debounce,
}

impl Default for CursorAutoHide {
    fn default() -> Self {
        Self {
            debounce: Debounce::new(CURSOR_HIDE_DELAY),
        }
    }
}

impl CursorAutoHide {
    pub fn on_mouse_move<H>(&mut self, host: &mut H)
    where
        H: PageSurface + Scheduler + ?Sized,
    {
        host.set_page_flag(PageFlag::HidePlayerCursor, false);
        self.debounce.arm(host, Timer::CursorHide);
    }

    pub fn on_timer<H>(&mut self, host: &mut H, generation: u64)
    where
        H: PageSurface + ?Sized,
    {
        if self.debounce.is_current(generation) {
            host.set_page_flag(PageFlag::HidePlayerCursor, true);
        }
    }
}
