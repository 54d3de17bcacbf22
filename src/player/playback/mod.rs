//! Playback behaviors for VODs.
//!
//! This module handles playback-rate stepping and end-of-video
//! recommendation autoplay.

mod autoplay;
mod rate;

pub use autoplay::AutoplaySuppressor;
pub use rate::{next_rate, step_playback_speed, StepDirection, RATE_LADDER};
