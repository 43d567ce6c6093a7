//! Progress watchface

use embedded_graphics::{draw_target::DrawTarget, pixelcolor::Rgb565};

use super::{draw_label, Layers, ProgressRing, WatchFace, WatchFaceState};
use crate::{
    config::{DayRingMode, FaceConfig},
    progress::{Progress, SegmentLabel},
};

/// Two progress rings around a segment counter.
///
/// This is the render context of the face: it owns the configuration, the
/// set of dirty layers and the most recently drawn frame.
pub struct ProgressWatchface {
    config: FaceConfig,
    dirty: Layers,
    /// Last drawn progress
    progress: Option<Progress>,
    /// Last drawn label
    label: SegmentLabel,
}

impl ProgressWatchface {
    /// Build the face, everything starts dirty
    pub fn load(config: FaceConfig) -> Self {
        info!(
            "Loading watchface: {}s cycle, {} segments",
            config.cycle_seconds,
            config.segments_per_day()
        );

        Self {
            config,
            dirty: Layers::all(),
            progress: None,
            label: SegmentLabel::new(),
        }
    }

    /// Layers waiting for the next draw
    pub fn dirty(&self) -> Layers {
        self.dirty
    }

    pub fn mark_dirty(&mut self, layers: Layers) {
        self.dirty |= layers;
    }

    /// Progress of the last drawn frame
    pub fn progress(&self) -> Option<Progress> {
        self.progress
    }

    /// Label text of the last drawn frame
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl WatchFace for ProgressWatchface {
    fn on_tick(&mut self) {
        self.mark_dirty(Layers::CYCLE_RING | Layers::DAY_RING);
    }

    fn draw<D>(&mut self, target: &mut D, state: &WatchFaceState) -> Result<Layers, D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        if self.dirty.is_empty() {
            return Ok(Layers::empty());
        }

        let theme = self.config.theme;
        let center = target.bounding_box().center();
        let progress = Progress::at(&state.reading, &self.config);
        let mut drawn = Layers::empty();

        if self.dirty.contains(Layers::BACKGROUND) {
            target.clear(theme.background)?;
            drawn |= Layers::BACKGROUND;
        }

        if self.dirty.contains(Layers::CYCLE_RING) {
            ProgressRing::new(center, self.config.cycle_ring).draw(
                target,
                progress.cycle,
                theme.ring,
                theme.background,
            )?;
            drawn |= Layers::CYCLE_RING;
        }

        if self.dirty.contains(Layers::DAY_RING) && self.config.day_ring_mode == DayRingMode::Live {
            ProgressRing::new(center, self.config.day_ring).draw(
                target,
                progress.day,
                theme.ring,
                theme.background,
            )?;
            drawn |= Layers::DAY_RING;
        }

        // The label area sits inside the day ring and clears itself
        let label = progress.label();
        draw_label(target, &label, self.config.label_area, &theme)?;

        debug!(
            "Drew frame: cycle {}, day {}, label {}",
            progress.cycle.degrees(),
            progress.day.degrees(),
            label.as_str()
        );

        self.dirty = Layers::empty();
        self.progress = Some(progress);
        self.label = label;

        Ok(drawn)
    }
}
