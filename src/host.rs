//! The embedding environment, as seen by the controller.
//!
//! The player, the page it lives on, the event bus and the timer queue all
//! belong to someone else. Each is reached through a small trait here; a host
//! implements all of them and gets [`Host`] for free.

use std::time::Duration;

use crate::selectors;

/// The currently mounted player instance.
///
/// Borrowed for one operation at a time and never stored by the controller.
pub trait PlayerHandle {
    fn playback_rate(&self) -> f64;

    fn set_playback_rate(&mut self, rate: f64);

    fn muted(&self) -> bool;

    fn set_muted(&mut self, muted: bool);

    /// True for video-on-demand, false for a live broadcast.
    fn is_vod(&self) -> bool;
}

/// Access to the player handle, if one is mounted.
pub trait PlayerAccess {
    fn current_player(&mut self) -> Option<&mut dyn PlayerHandle>;
}

/// Player control elements the controller can press.
///
/// Play/pause, fullscreen and mute go through the player's own buttons rather
/// than its API so the player's UI stays consistent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    PlayPause,
    Fullscreen,
    /// The player's mute button.
    ///
    /// Pressing it is a volume-control click: the host must report it back as
    /// `Event::VolumeControlClick` once the current handler has returned, so
    /// the user's mute choice follows the shortcut. In a browser this happens
    /// by the click bubbling up to the volume control.
    Mute,
    /// Cancel button of the end-of-video recommendation overlay.
    CancelRecommendation,
}

impl Control {
    pub fn selector(self) -> &'static str {
        match self {
            Control::PlayPause => selectors::PLAY_PAUSE_BUTTON,
            Control::Fullscreen => selectors::FULLSCREEN_BUTTON,
            Control::Mute => selectors::MUTE_BUTTON,
            Control::CancelRecommendation => selectors::CANCEL_VOD_RECOMMENDATION,
        }
    }
}

/// Page-level presentation flags (body classes in a browser).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageFlag {
    HidePlayerExtensions,
    HidePlayerCursor,
}

impl PageFlag {
    pub fn class_name(self) -> &'static str {
        match self {
            PageFlag::HidePlayerExtensions => selectors::HIDE_PLAYER_EXTENSIONS_CLASS,
            PageFlag::HidePlayerCursor => selectors::HIDE_PLAYER_CURSOR_CLASS,
        }
    }
}

/// Query and poke the page around the player.
pub trait PageSurface {
    /// Whether the player element is in the DOM.
    fn player_present(&self) -> bool;

    /// Whether an input, textarea or select currently has focus.
    fn text_input_focused(&self) -> bool;

    /// Paused state as reported by the player element.
    fn is_paused(&self) -> bool;

    /// Press a control as if the user clicked it. Events caused by the press
    /// (see [`Control::Mute`]) are delivered after the current handler.
    fn activate(&mut self, control: Control);

    /// Move keyboard focus to the player container.
    fn focus_player_container(&mut self);

    fn set_page_flag(&mut self, flag: PageFlag, on: bool);
}

/// Event listeners the controller can own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Listener {
    /// Document-wide key presses.
    KeyPress,
    /// Clicks on the player surface.
    PlayerClick,
    /// The player's "ended" event.
    PlayerEnded,
    VisibilityChange,
    WindowBlur,
    WindowFocus,
    /// Clicks on the player's volume control.
    VolumeControlClick,
    /// Mouse moves over the fullscreen player.
    FullscreenMouseMove,
}

/// Attach and detach listeners.
///
/// A bound listener delivers its events to `PlayerControlController::handle`.
/// The controller never binds a listener that is already bound.
pub trait Listeners {
    fn bind(&mut self, listener: Listener);

    fn unbind(&mut self, listener: Listener);
}

/// Timers the controller schedules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Timer {
    /// End of the click disambiguation window.
    ClickResolution,
    /// Cursor hide, tagged with the debounce generation that armed it.
    CursorHide(u64),
}

/// One-shot timers. A fired timer arrives as `Event::TimerFired`.
pub trait Scheduler {
    fn schedule(&mut self, timer: Timer, delay: Duration);
}

/// Named UI regions that appear asynchronously.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    VodRecommendation,
}

impl Region {
    pub fn name(self) -> &'static str {
        match self {
            Region::VodRecommendation => "vodRecommendation",
        }
    }
}

/// Wait for a region to load. Completion arrives as `Event::RegionLoaded`.
pub trait RegionWatcher {
    fn wait_for_region(&mut self, region: Region);
}

/// Everything the controller needs from its environment.
pub trait Host: PlayerAccess + PageSurface + Listeners + Scheduler + RegionWatcher {}

impl<T> Host for T where T: PlayerAccess + PageSurface + Listeners + Scheduler + RegionWatcher {}
