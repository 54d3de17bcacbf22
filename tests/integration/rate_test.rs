//! Rate ladder behavior as seen through the controller.

use player_controls::player::playback::RATE_LADDER;
use player_controls::{Event, KeyPress};

use crate::helpers::{FakePlayer, Harness};

fn vod_at(rate: f64) -> Harness {
    let mut player = FakePlayer::vod();
    player.rate = rate;
    Harness::with_features(&[], Some(player))
}

fn faster(h: &mut Harness) {
    h.fire(Event::KeyPress(KeyPress::new('.')));
}

fn slower(h: &mut Harness) {
    h.fire(Event::KeyPress(KeyPress::new(',')));
}

#[test]
fn faster_then_slower_returns_to_start() {
    for &rate in &RATE_LADDER[..RATE_LADDER.len() - 1] {
        let mut h = vod_at(rate);
        faster(&mut h);
        slower(&mut h);
        assert_eq!(h.host.player().rate, rate, "start rate {rate}");
        assert_eq!(h.host.player().rate_sets.len(), 2);
    }
}

#[test]
fn slower_then_faster_returns_to_start() {
    for &rate in &RATE_LADDER[1..] {
        let mut h = vod_at(rate);
        slower(&mut h);
        faster(&mut h);
        assert_eq!(h.host.player().rate, rate, "start rate {rate}");
    }
}

#[test]
fn faster_at_maximum_is_noop() {
    let mut h = vod_at(2.0);
    faster(&mut h);

    assert_eq!(h.host.player().rate, 2.0);
    assert!(h.host.player().rate_sets.is_empty());
}

#[test]
fn slower_at_minimum_is_noop() {
    let mut h = vod_at(0.25);
    slower(&mut h);

    assert_eq!(h.host.player().rate, 0.25);
    assert!(h.host.player().rate_sets.is_empty());
}

#[test]
fn off_ladder_rate_is_left_alone() {
    let mut h = vod_at(1.1);
    faster(&mut h);
    slower(&mut h);

    assert_eq!(h.host.player().rate, 1.1);
    assert!(h.host.player().rate_sets.is_empty());
}

#[test]
fn walking_up_visits_every_rung() {
    let mut h = vod_at(0.25);
    for _ in 0..10 {
        faster(&mut h);
    }

    assert_eq!(h.host.player().rate_sets, RATE_LADDER[1..].to_vec());
}
