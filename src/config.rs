//! Feature toggles and the settings registry seam.
//!
//! Every behavior the controller layers onto the player is gated by a boolean
//! feature. The registry that stores them belongs to the embedding page, so the
//! controller talks to it through [`SettingsRegistry`]. [`Settings`] is the
//! in-memory registry used when the host has none of its own, seeded from an
//! optional TOML file.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;

/// Identifier of a feature toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeatureId {
    HidePlayerExtensions,
    ClickToPlay,
    DisableVodRecommendationAutoplay,
    MuteInvisibleTabs,
}

impl FeatureId {
    /// All features, in registration order.
    pub const ALL: [FeatureId; 4] = [
        FeatureId::HidePlayerExtensions,
        FeatureId::ClickToPlay,
        FeatureId::DisableVodRecommendationAutoplay,
        FeatureId::MuteInvisibleTabs,
    ];

    /// The id used by the external registry and in config files.
    pub fn as_str(self) -> &'static str {
        match self {
            FeatureId::HidePlayerExtensions => "hidePlayerExtensions",
            FeatureId::ClickToPlay => "clickToPlay",
            FeatureId::DisableVodRecommendationAutoplay => "disableVodRecommendationAutoplay",
            FeatureId::MuteInvisibleTabs => "muteInvisibleTabs",
        }
    }

    /// Look up a feature by its external id.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == id)
    }

    /// Registry entry (display metadata and default) for this feature.
    pub fn definition(self) -> FeatureDef {
        let (name, description) = match self {
            FeatureId::HidePlayerExtensions => (
                "Hide Twitch Extensions",
                "Hides the interactive overlays on top of Twitch's video player",
            ),
            FeatureId::ClickToPlay => (
                "Click to Play/Pause Stream",
                "Click on the twitch player to pause/resume playback",
            ),
            FeatureId::DisableVodRecommendationAutoplay => (
                "Disable VoD Recommendation Autoplay",
                "Disables autoplay of recommended videos on VoDs",
            ),
            FeatureId::MuteInvisibleTabs => (
                "Mute Streams in Invisible Tabs",
                "Automatically mute/unmute streams so only visible tabs have audio",
            ),
        };
        FeatureDef {
            id: self,
            name,
            default_value: false,
            description,
        }
    }
}

impl fmt::Display for FeatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A registry entry: default value plus what the settings UI shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureDef {
    pub id: FeatureId,
    pub name: &'static str,
    pub default_value: bool,
    pub description: &'static str,
}

/// The settings registry owned by the embedding page.
pub trait SettingsRegistry {
    /// Declare a feature. Must not overwrite a value that is already stored.
    fn register(&mut self, definition: FeatureDef);

    /// Current value of a feature. Unregistered features read as `false`.
    fn get(&self, id: FeatureId) -> bool;

    /// Ask to be notified when `id` changes.
    ///
    /// Notifications arrive as `Event::SettingChanged`.
    fn watch(&mut self, id: FeatureId);
}

/// Feature defaults read from `config.toml`.
///
/// ```toml
/// [features]
/// clickToPlay = true
/// muteInvisibleTabs = true
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FeatureConfig {
    #[serde(default)]
    pub features: FeatureToggles,
}

/// One boolean per feature, keyed by external id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FeatureToggles {
    #[serde(default)]
    pub hide_player_extensions: bool,
    #[serde(default)]
    pub click_to_play: bool,
    #[serde(default)]
    pub disable_vod_recommendation_autoplay: bool,
    #[serde(default)]
    pub mute_invisible_tabs: bool,
}

impl FeatureToggles {
    pub fn get(&self, id: FeatureId) -> bool {
        match id {
            FeatureId::HidePlayerExtensions => self.hide_player_extensions,
            FeatureId::ClickToPlay => self.click_to_play,
            FeatureId::DisableVodRecommendationAutoplay => self.disable_vod_recommendation_autoplay,
            FeatureId::MuteInvisibleTabs => self.mute_invisible_tabs,
        }
    }
}

impl FeatureConfig {
    /// Default location: `<config dir>/player-controls/config.toml`.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(dir.join("player-controls").join("config.toml"))
    }

    /// Load from the default location, or defaults if the file is absent.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded feature config");
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}

/// In-memory settings registry.
#[derive(Debug, Default)]
pub struct Settings {
    definitions: Vec<FeatureDef>,
    values: HashMap<FeatureId, bool>,
    watched: HashSet<FeatureId>,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed values from a loaded config. Registration keeps them.
    pub fn from_config(config: &FeatureConfig) -> Self {
        let values = FeatureId::ALL
            .into_iter()
            .map(|id| (id, config.features.get(id)))
            .collect();
        Self {
            values,
            ..Self::default()
        }
    }

    /// Store a value.
    ///
    /// Returns true when the value changed and someone watches `id`, i.e. when
    /// a change notification is due.
    pub fn set(&mut self, id: FeatureId, value: bool) -> bool {
        let previous = self.values.insert(id, value).unwrap_or(false);
        previous != value && self.watched.contains(&id)
    }

    /// Registered definitions, in registration order.
    pub fn definitions(&self) -> &[FeatureDef] {
        &self.definitions
    }

    pub fn is_watched(&self, id: FeatureId) -> bool {
        self.watched.contains(&id)
    }
}

impl SettingsRegistry for Settings {
    fn register(&mut self, definition: FeatureDef) {
        self.values
            .entry(definition.id)
            .or_insert(definition.default_value);
        if !self.definitions.iter().any(|d| d.id == definition.id) {
            self.definitions.push(definition);
        }
    }

    fn get(&self, id: FeatureId) -> bool {
        self.values.get(&id).copied().unwrap_or(false)
    }

    fn watch(&mut self, id: FeatureId) {
        self.watched.insert(id);
    }
}
