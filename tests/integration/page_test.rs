//! Page-level behavior: extension hiding, fullscreen cursor, registered settings.

use std::time::Duration;

use player_controls::{Event, FeatureId, Listener, PageFlag, Timer};

use crate::helpers::{FakePlayer, Harness};

// ============================================================================
// Hide Player Extensions
// ============================================================================

#[test]
fn extensions_flag_applied_on_attach() {
    let h = Harness::new();
    assert_eq!(h.host.flag(PageFlag::HidePlayerExtensions), Some(false));

    let h = Harness::with_features(&[FeatureId::HidePlayerExtensions], Some(FakePlayer::vod()));
    assert_eq!(h.host.flag(PageFlag::HidePlayerExtensions), Some(true));
}

#[test]
fn extensions_flag_follows_setting_and_reverts() {
    let mut h = Harness::new();
    h.set_feature(FeatureId::HidePlayerExtensions, true);
    assert_eq!(h.host.flag(PageFlag::HidePlayerExtensions), Some(true));

    h.set_feature(FeatureId::HidePlayerExtensions, false);
    assert_eq!(h.host.flag(PageFlag::HidePlayerExtensions), Some(false));
}

// ============================================================================
// Fullscreen Cursor
// ============================================================================

fn cursor_changes(h: &Harness) -> Vec<bool> {
    h.host
        .flag_changes
        .iter()
        .filter(|(flag, _)| *flag == PageFlag::HidePlayerCursor)
        .map(|&(_, on)| on)
        .collect()
}

#[test]
fn mouse_move_listener_is_bound_for_page_lifetime() {
    let mut h = Harness::new();
    h.mount();
    h.set_feature(FeatureId::ClickToPlay, true);
    h.set_feature(FeatureId::ClickToPlay, false);

    assert_eq!(h.host.binding_count(Listener::FullscreenMouseMove), 1);
}

#[test]
fn burst_of_moves_hides_cursor_once() {
    let mut h = Harness::new();
    for _ in 0..5 {
        h.fire(Event::FullscreenMouseMove);
    }
    assert_eq!(cursor_changes(&h), vec![false; 5]);

    h.run_timers();

    assert_eq!(cursor_changes(&h), [vec![false; 5], vec![true]].concat());
    assert_eq!(h.host.flag(PageFlag::HidePlayerCursor), Some(true));
}

#[test]
fn cursor_hide_waits_five_seconds() {
    let mut h = Harness::new();
    h.fire(Event::FullscreenMouseMove);

    assert_eq!(
        h.host.pending_timers,
        vec![(Timer::CursorHide(1), Duration::from_millis(5000))]
    );
}

#[test]
fn move_after_hide_shows_cursor_again() {
    let mut h = Harness::new();
    h.fire(Event::FullscreenMouseMove);
    h.run_timers();
    h.fire(Event::FullscreenMouseMove);

    assert_eq!(h.host.flag(PageFlag::HidePlayerCursor), Some(false));
    h.run_timers();
    assert_eq!(cursor_changes(&h), vec![false, true, false, true]);
}

// ============================================================================
// Registered Settings
// ============================================================================

#[test]
fn registered_settings_metadata() {
    let h = Harness::new();
    let listing = h
        .controller
        .settings()
        .definitions()
        .iter()
        .map(|d| {
            format!(
                "{} (default {}): {} - {}",
                d.id, d.default_value, d.name, d.description
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    insta::assert_snapshot!(listing, @r#"
    hidePlayerExtensions (default false): Hide Twitch Extensions - Hides the interactive overlays on top of Twitch's video player
    clickToPlay (default false): Click to Play/Pause Stream - Click on the twitch player to pause/resume playback
    disableVodRecommendationAutoplay (default false): Disable VoD Recommendation Autoplay - Disables autoplay of recommended videos on VoDs
    muteInvisibleTabs (default false): Mute Streams in Invisible Tabs - Automatically mute/unmute streams so only visible tabs have audio
    "#);
}
