//! Player controls
//!
//! Extra interactive behavior for an embedded live/VOD stream player that
//! lives on a page we do not own: keyboard shortcuts, click-to-pause,
//! playback-rate stepping, recommendation-autoplay suppression, fullscreen
//! cursor auto-hide and muting of background tabs.
//!
//! The player, the page and the settings store are reached through the traits
//! in [`host`]; [`PlayerControlController`] is driven one [`Event`] at a time.
//! [`actor`] runs a controller on its own thread for hosts with real threads,
//! and `web` (wasm32 only) wires it to a browser page.

pub mod actor;
pub mod config;
pub mod error;
pub mod host;
pub mod player;
pub mod selectors;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use config::{FeatureConfig, FeatureId, Settings, SettingsRegistry};
pub use error::{ActorError, ConfigError};
pub use host::{
    Control, Host, Listener, Listeners, PageFlag, PageSurface, PlayerAccess, PlayerHandle,
    Region, RegionWatcher, Scheduler, Timer,
};
pub use player::{ClickTarget, Event, KeyPress, PlayerControlController, SurfaceKind};
