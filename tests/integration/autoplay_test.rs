//! Recommendation autoplay suppression after a VOD ends.

use player_controls::{Control, Event, FeatureId, Listener, Region};

use crate::helpers::{FakePlayer, Harness};

#[test]
fn ended_listener_is_bound_per_mount() {
    let mut h = Harness::new();
    assert_eq!(h.host.binding_count(Listener::PlayerEnded), 0);

    h.mount();
    h.mount();

    assert_eq!(h.host.binding_count(Listener::PlayerEnded), 1);
}

#[test]
fn disabled_flag_never_waits_for_overlay() {
    let mut h = Harness::new();
    h.mount();
    h.fire(Event::PlayerEnded);

    assert!(h.host.region_waits.is_empty());
    assert!(!h.controller.is_awaiting_recommendation());
}

#[test]
fn enabled_flag_cancels_recommendation_once_overlay_loads() {
    let mut h = Harness::with_features(
        &[FeatureId::DisableVodRecommendationAutoplay],
        Some(FakePlayer::vod()),
    );
    h.mount();
    h.fire(Event::PlayerEnded);

    assert_eq!(h.host.region_waits, vec![Region::VodRecommendation]);
    assert!(h.host.activated.is_empty(), "overlay not there yet");

    h.fire(Event::RegionLoaded(Region::VodRecommendation));

    assert_eq!(h.host.activated, vec![Control::CancelRecommendation]);
    assert!(!h.controller.is_awaiting_recommendation());
}

#[test]
fn flag_is_read_when_the_video_ends() {
    let mut h = Harness::new();
    h.mount();
    h.set_feature(FeatureId::DisableVodRecommendationAutoplay, true);
    h.fire(Event::PlayerEnded);
    assert_eq!(h.host.region_waits.len(), 1);

    h.set_feature(FeatureId::DisableVodRecommendationAutoplay, false);
    h.fire(Event::PlayerEnded);
    assert_eq!(h.host.region_waits.len(), 1);
}

#[test]
fn unrequested_overlay_is_left_alone() {
    let mut h = Harness::new();
    h.mount();
    h.fire(Event::RegionLoaded(Region::VodRecommendation));

    assert!(h.host.activated.is_empty());
}

#[test]
fn overlay_is_cancelled_only_once_per_end() {
    let mut h = Harness::with_features(
        &[FeatureId::DisableVodRecommendationAutoplay],
        Some(FakePlayer::vod()),
    );
    h.mount();
    h.fire(Event::PlayerEnded);
    h.fire(Event::RegionLoaded(Region::VodRecommendation));
    h.fire(Event::RegionLoaded(Region::VodRecommendation));

    assert_eq!(h.host.activations(Control::CancelRecommendation), 1);
}

#[test]
fn ended_before_any_mount_is_ignored() {
    let mut h = Harness::with_features(
        &[FeatureId::DisableVodRecommendationAutoplay],
        Some(FakePlayer::vod()),
    );
    h.controller.handle(&mut h.host, Event::PlayerEnded);

    assert!(h.host.region_waits.is_empty());
}
