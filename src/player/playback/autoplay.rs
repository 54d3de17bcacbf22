//! Suppress autoplay of the recommended video after a VOD ends.

use crate::host::{Control, PageSurface, Region, RegionWatcher};

/// Waits for the recommendation overlay and presses its cancel button.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AutoplaySuppressor {
    awaiting_overlay: bool,
}

impl AutoplaySuppressor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a wait for the overlay is outstanding.
    pub fn is_awaiting(&self) -> bool {
        self.awaiting_overlay
    }

    /// The player reported "ended". `enabled` is the feature flag right now.
    pub fn on_ended<H: RegionWatcher + ?Sized>(&mut self, host: &mut H, enabled: bool) {
        if !enabled {
            return;
        }
        self.awaiting_overlay = true;
        host.wait_for_region(Region::VodRecommendation);
    }

    /// A region finished loading. Only an awaited overlay is cancelled.
    pub fn on_region_loaded<H: PageSurface + ?Sized>(&mut self, host: &mut H, region: Region) {
        if region != Region::VodRecommendation || !self.awaiting_overlay {
            return;
        }
        self.awaiting_overlay = false;
        host.activate(Control::CancelRecommendation);
        tracing::debug!("cancelled recommendation autoplay");
    }
}
