//! Player control controller
//!
//! Layers extra interactive behavior onto a third-party stream player:
//!
//! - keyboard shortcuts (rate stepping, play/pause, fullscreen, mute)
//! - click-to-pause that ignores the second click of a double-click
//! - cancelling the recommendation autoplay after a VOD ends
//! - muting tabs that are hidden or unfocused
//! - hiding the cursor over an idle fullscreen player
//!
//! # Architecture
//!
//! The controller is a plain state machine. The host delivers every DOM,
//! player, timer and settings event to [`PlayerControlController::handle`]
//! together with `&mut` access to itself; the controller answers by calling
//! back into the host traits in [`crate::host`]. Nothing is retained between
//! events except [`ControllerState`], the listener subscriptions and the
//! cursor debounce.
//!
//! - `state`: ControllerState (user mute intent, click counter)
//! - `input/`: keyboard shortcuts, click disambiguation, cursor auto-hide
//! - `playback/`: rate ladder and autoplay suppression
//! - `audio`: cross-tab mute synchronization
//! - `subscription`: idempotent listener bindings
//!
//! # Usage
//!
//! ```ignore
//! use player_controls::{Event, PlayerControlController, Settings};
//!
//! let mut controller = PlayerControlController::new(Settings::new());
//! controller.attach(&mut host);
//! controller.handle(&mut host, Event::PlayerLoad);
//! ```

pub mod audio;
pub mod debounce;
pub mod input;
pub mod playback;
pub mod state;
pub mod subscription;

pub use input::{ClickTarget, KeyAction, KeyPress, SurfaceKind};
pub use playback::{StepDirection, RATE_LADDER};
pub use state::ControllerState;

use crate::config::{FeatureId, Settings, SettingsRegistry};
use crate::host::{Host, Listener, PageFlag, Region, Timer};
use input::CursorAutoHide;
use playback::AutoplaySuppressor;
use subscription::{Subscription, SubscriptionSet};

/// Everything the host can report to the controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    KeyPress(KeyPress),
    PlayerClick(ClickTarget),
    /// A player instance was mounted (or replaced).
    PlayerLoad,
    PlayerEnded,
    RegionLoaded(Region),
    VisibilityChange {
        hidden: bool,
    },
    WindowBlur,
    WindowFocus,
    VolumeControlClick,
    FullscreenMouseMove,
    TimerFired(Timer),
    SettingChanged(FeatureId),
}

impl Event {
    /// The listener that must be bound for this event to be honored.
    pub fn listener(&self) -> Option<Listener> {
        match self {
            Event::KeyPress(_) => Some(Listener::KeyPress),
            Event::PlayerClick(_) => Some(Listener::PlayerClick),
            Event::PlayerEnded => Some(Listener::PlayerEnded),
            Event::VisibilityChange { .. } => Some(Listener::VisibilityChange),
            Event::WindowBlur => Some(Listener::WindowBlur),
            Event::WindowFocus => Some(Listener::WindowFocus),
            Event::VolumeControlClick => Some(Listener::VolumeControlClick),
            Event::FullscreenMouseMove => Some(Listener::FullscreenMouseMove),
            Event::PlayerLoad
            | Event::RegionLoaded(_)
            | Event::TimerFired(_)
            | Event::SettingChanged(_) => None,
        }
    }
}

/// Listener bindings, one owner per feature.
#[derive(Debug)]
struct Subscriptions {
    key_press: Subscription,
    mouse_move: Subscription,
    player_click: Subscription,
    player_ended: Subscription,
    mute: SubscriptionSet,
}

impl Subscriptions {
    fn new() -> Self {
        Self {
            key_press: Subscription::new(Listener::KeyPress),
            mouse_move: Subscription::new(Listener::FullscreenMouseMove),
            player_click: Subscription::new(Listener::PlayerClick),
            player_ended: Subscription::new(Listener::PlayerEnded),
            mute: SubscriptionSet::new(&audio::MUTE_LISTENERS),
        }
    }

    fn is_bound(&self, listener: Listener) -> bool {
        [
            &self.key_press,
            &self.mouse_move,
            &self.player_click,
            &self.player_ended,
        ]
        .iter()
        .any(|s| s.listener() == listener && s.is_active())
            || self.mute.is_bound(listener)
    }
}

/// Adds shortcuts, click-to-pause, autoplay suppression and tab muting to
/// an embedded player.
#[derive(Debug)]
pub struct PlayerControlController<S = Settings> {
    settings: S,
    state: ControllerState,
    subscriptions: Subscriptions,
    cursor: CursorAutoHide,
    autoplay: AutoplaySuppressor,
}

impl<S: SettingsRegistry> PlayerControlController<S> {
    /// Register the features with `settings` and watch them for changes.
    pub fn new(mut settings: S) -> Self {
        for id in FeatureId::ALL {
            settings.register(id.definition());
        }
        for id in [
            FeatureId::HidePlayerExtensions,
            FeatureId::ClickToPlay,
            FeatureId::MuteInvisibleTabs,
        ] {
            settings.watch(id);
        }

        Self {
            settings,
            state: ControllerState::new(),
            subscriptions: Subscriptions::new(),
            cursor: CursorAutoHide::default(),
            autoplay: AutoplaySuppressor::new(),
        }
    }

    /// Hook into the page: global shortcuts, fullscreen cursor, and the
    /// extension-hiding flag. Player-bound features wait for `PlayerLoad`.
    pub fn attach<H: Host + ?Sized>(&mut self, host: &mut H) {
        self.subscriptions.key_press.set(host, true);
        self.subscriptions.mouse_move.set(host, true);
        self.apply_hide_extensions(host);
    }

    /// Process one event. Never fails; unmet preconditions are no-ops.
    pub fn handle<H: Host + ?Sized>(&mut self, host: &mut H, event: Event) {
        tracing::trace!(?event, "player control event");

        if let Some(listener) = event.listener() {
            if !self.subscriptions.is_bound(listener) {
                return;
            }
        }

        match event {
            Event::KeyPress(key) => input::handle_key_event(key, host),
            Event::PlayerClick(target) => input::handle_player_click(target, &mut self.state, host),
            Event::PlayerLoad => self.on_player_load(host),
            Event::PlayerEnded => {
                let enabled = self
                    .settings
                    .get(FeatureId::DisableVodRecommendationAutoplay);
                self.autoplay.on_ended(host, enabled);
            }
            Event::RegionLoaded(region) => self.autoplay.on_region_loaded(host, region),
            Event::VisibilityChange { hidden } => {
                audio::on_visibility_change(hidden, &self.state, host)
            }
            Event::WindowBlur => audio::suppress(host),
            Event::WindowFocus => audio::restore(&self.state, host),
            Event::VolumeControlClick => self.state.toggle_muted_by_user(),
            Event::FullscreenMouseMove => self.cursor.on_mouse_move(host),
            Event::TimerFired(Timer::ClickResolution) => input::resolve_clicks(&mut self.state, host),
            Event::TimerFired(Timer::CursorHide(generation)) => {
                self.cursor.on_timer(host, generation)
            }
            Event::SettingChanged(id) => self.apply_feature(host, id),
        }
    }

    pub fn state(&self) -> &ControllerState {
        &self.state
    }

    pub fn settings(&self) -> &S {
        &self.settings
    }

    /// Whether the controller currently holds a binding for `listener`.
    pub fn is_bound(&self, listener: Listener) -> bool {
        self.subscriptions.is_bound(listener)
    }

    /// Whether an "ended" is waiting on the recommendation overlay.
    pub fn is_awaiting_recommendation(&self) -> bool {
        self.autoplay.is_awaiting()
    }

    /// A new player element replaced the old one: rebind everything attached
    /// to it and re-read the user's mute choice.
    fn on_player_load<H: Host + ?Sized>(&mut self, host: &mut H) {
        let click_to_play = self.settings.get(FeatureId::ClickToPlay);
        self.subscriptions.player_click.refresh(host, click_to_play);
        self.subscriptions.player_ended.refresh(host, true);

        audio::capture_user_intent(&mut self.state, host);

        let mute_tabs = self.settings.get(FeatureId::MuteInvisibleTabs);
        self.subscriptions.mute.refresh(host, mute_tabs);

        tracing::debug!(
            muted_by_user = self.state.is_muted_by_user,
            click_to_play,
            mute_tabs,
            "player mounted"
        );
    }

    fn apply_feature<H: Host + ?Sized>(&mut self, host: &mut H, id: FeatureId) {
        let enabled = self.settings.get(id);
        match id {
            FeatureId::HidePlayerExtensions => self.apply_hide_extensions(host),
            FeatureId::ClickToPlay => self.subscriptions.player_click.set(host, enabled),
            FeatureId::MuteInvisibleTabs => self.subscriptions.mute.set(host, enabled),
            // Read when the video ends.
            FeatureId::DisableVodRecommendationAutoplay => {}
        }
    }

    fn apply_hide_extensions<H: Host + ?Sized>(&mut self, host: &mut H) {
        let hide = self.settings.get(FeatureId::HidePlayerExtensions);
        host.set_page_flag(PageFlag::HidePlayerExtensions, hide);
    }
}

impl PlayerControlController<Settings> {
    /// Change a feature in the in-memory registry and react to it.
    pub fn set_feature<H: Host + ?Sized>(&mut self, host: &mut H, id: FeatureId, enabled: bool) {
        if self.settings.set(id, enabled) {
            self.handle(host, Event::SettingChanged(id));
        }
    }
}
