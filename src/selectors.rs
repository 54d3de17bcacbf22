//! How the browser host finds the player's elements.

/// The player root. Key presses are ignored while it is absent.
pub const VIDEO_PLAYER: &str = ".video-player .player";

/// Focus target for clicks that land inside the player but off its surface.
pub const VIDEO_PLAYER_CONTAINER: &str = ".video-player__container";

/// Surface elements a click-to-pause click may target.
pub const FULLSCREEN_OVERLAY: &str = ".player-overlay.pl-overlay__fullscreen";
pub const PLAYER_VIDEO: &str = ".player-video";
pub const PAUSED_OVERLAY: &str = ".js-paused-overlay";

/// Wrapper of the fullscreen player, for cursor auto-hide.
pub const FULLSCREEN_PLAYER: &str = ".video-player--fullscreen";

pub const PLAY_PAUSE_BUTTON: &str = ".qa-pause-play-button";
pub const FULLSCREEN_BUTTON: &str = ".qa-fullscreen-button";
pub const MUTE_BUTTON: &str = ".qa-control-volume";
pub const PLAYER_VOLUME: &str = ".player-button--volume";
pub const CANCEL_VOD_RECOMMENDATION: &str = ".recommendations-overlay .pl-rec__cancel.pl-button";

/// Elements whose focus suspends shortcuts.
pub const TEXT_INPUTS: &str = "input, textarea, select";

/// Attribute the player root carries while paused.
pub const PAUSED_ATTRIBUTE: &str = "data-paused";

pub const HIDE_PLAYER_EXTENSIONS_CLASS: &str = "bttv-hide-player-extensions";
pub const HIDE_PLAYER_CURSOR_CLASS: &str = "bttv-hide-player-cursor";
