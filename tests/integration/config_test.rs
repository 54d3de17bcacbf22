//! Feature defaults loaded from `config.toml`.

use std::fs;

use tempfile::TempDir;

use player_controls::{
    ConfigError, FeatureConfig, FeatureId, Listener, PlayerControlController, Settings,
    SettingsRegistry,
};

use crate::helpers::{FakeHost, FakePlayer};

fn write_config(content: &str) -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, content).unwrap();
    (dir, path)
}

#[test]
fn load_from_reads_feature_table() {
    let (_dir, path) = write_config("[features]\nclickToPlay = true\nmuteInvisibleTabs = true\n");

    let config = FeatureConfig::load_from(&path).unwrap();

    assert!(config.features.click_to_play);
    assert!(config.features.mute_invisible_tabs);
    assert!(!config.features.hide_player_extensions);
    assert!(!config.features.disable_vod_recommendation_autoplay);
}

#[test]
fn missing_file_is_a_read_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");

    let err = FeatureConfig::load_from(&path).unwrap_err();

    match err {
        ConfigError::Read { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected read error, got {other:?}"),
    }
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let (_dir, path) = write_config("[features\nclickToPlay = yes\n");

    let err = FeatureConfig::load_from(&path).unwrap_err();

    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().starts_with("Invalid config"));
}

#[test]
fn wrong_value_type_is_a_parse_error() {
    let (_dir, path) = write_config("[features]\nclickToPlay = \"on\"\n");

    assert!(matches!(
        FeatureConfig::load_from(&path),
        Err(ConfigError::Parse(_))
    ));
}

// ============================================================================
// Seeding the Controller
// ============================================================================

#[test]
fn seeded_settings_survive_registration() {
    let (_dir, path) = write_config("[features]\nhidePlayerExtensions = true\n");
    let config = FeatureConfig::load_from(&path).unwrap();

    let controller = PlayerControlController::new(Settings::from_config(&config));

    assert!(controller.settings().get(FeatureId::HidePlayerExtensions));
    assert!(!controller.settings().get(FeatureId::ClickToPlay));
    assert_eq!(controller.settings().definitions().len(), 4);
}

#[test]
fn seeded_click_to_play_binds_on_mount() {
    let config = FeatureConfig::from_toml_str("[features]\nclickToPlay = true\n").unwrap();
    let mut controller = PlayerControlController::new(Settings::from_config(&config));
    let mut host = FakeHost::new(Some(FakePlayer::vod()));

    controller.attach(&mut host);
    assert_eq!(host.binding_count(Listener::PlayerClick), 0);

    controller.handle(&mut host, player_controls::Event::PlayerLoad);
    assert_eq!(host.binding_count(Listener::PlayerClick), 1);
    assert!(controller.is_bound(Listener::PlayerClick));
}
