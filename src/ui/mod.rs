//! UI definitions module
//! Based on: https://github.com/lupyuen/pinetime-watchface/blob/master/src/lib.rs

use bitflags::bitflags;
use embedded_graphics::{draw_target::DrawTarget, pixelcolor::Rgb565};

use crate::clock::{ClockReading, ClockSource};

mod label;
mod progress_watchface;
mod ring;

pub use label::draw_label;
pub use progress_watchface::ProgressWatchface;
pub use ring::{ProgressRing, Shade};

bitflags! {
    /// Independently redrawn parts of a watchface
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct Layers: u8 {
        /// Whole screen background
        const BACKGROUND = 0b001;
        /// Outer ring following the short cycle
        const CYCLE_RING = 0b010;
        /// Inner ring following the day
        const DAY_RING = 0b100;
    }
}

pub trait WatchFace {
    /// Called once per second, marks the time dependent layers dirty
    fn on_tick(&mut self);

    /// Redraw dirty layers for the given state and return the layers drawn
    fn draw<D>(&mut self, target: &mut D, state: &WatchFaceState) -> Result<Layers, D::Error>
    where
        D: DrawTarget<Color = Rgb565>;

    /// Sample `clock` and redraw. A failed clock read skips the frame, the
    /// dirty layers are kept for the next tick.
    fn refresh<D, C>(&mut self, target: &mut D, clock: &C) -> Result<Layers, D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
        C: ClockSource,
    {
        match clock.now() {
            Ok(reading) => self.draw(target, &WatchFaceState { reading }),
            Err(err) => {
                warn!("Skipping frame: {}", err);
                Ok(Layers::empty())
            }
        }
    }
}

/// State for the watch face
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WatchFaceState {
    pub reading: ClockReading,
}
