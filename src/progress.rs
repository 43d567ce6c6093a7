//! Time decomposition
//!
//! Converts a [`ClockReading`] into the two ring angles and the segment
//! counter shown in the middle of the face. All functions are pure integer
//! arithmetic and truncate towards zero.

use core::fmt::Write;

use heapless::String;

use crate::{
    clock::{ClockReading, SECONDS_PER_DAY},
    config::FaceConfig,
};

/// Seconds of the day covered by one degree of the day ring
pub const DAY_SCALE: u32 = SECONDS_PER_DAY / 360;

/// Minutes in one day
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Label capacity, enough for any validated configuration
pub const LABEL_LEN: usize = 3;

/// Text shown in the middle of the face
pub type SegmentLabel = String<LABEL_LEN>;

/// Clockwise angle from 12 o'clock in whole degrees, always below 360
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SweepAngle(u16);

impl SweepAngle {
    pub const ZERO: Self = Self(0);

    /// Wrap any number of degrees into a sweep angle
    pub fn from_degrees(degrees: u32) -> Self {
        Self((degrees % 360) as u16)
    }

    pub fn degrees(&self) -> u16 {
        self.0
    }
}

/// Counting direction of the segment label
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Segments elapsed since midnight
    Up,
    /// Segments left until midnight
    Down,
}

/// Angle of the short cycle ring
pub fn cycle_angle(elapsed_seconds: u32, cycle_seconds: u32) -> SweepAngle {
    if cycle_seconds == 0 {
        return SweepAngle::ZERO;
    }

    let phase = (elapsed_seconds % cycle_seconds) as u64;
    SweepAngle::from_degrees((phase * 360 / cycle_seconds as u64) as u32)
}

/// Angle of the day ring, a full turn once per day
pub fn day_angle(elapsed_seconds: u32) -> SweepAngle {
    SweepAngle::from_degrees(elapsed_seconds % SECONDS_PER_DAY / DAY_SCALE)
}

/// Number of segments in one day
pub fn segments_per_day(segment_minutes: u32) -> u16 {
    if segment_minutes == 0 {
        return 0;
    }

    (MINUTES_PER_DAY / segment_minutes) as u16
}

/// Index of the segment the reading falls into
pub fn segment_index(reading: &ClockReading, segment_minutes: u32, direction: Direction) -> u16 {
    if segment_minutes == 0 {
        return 0;
    }

    let elapsed = reading.hour() as u32 * (60 / segment_minutes)
        + reading.minute() as u32 / segment_minutes;

    match direction {
        Direction::Up => elapsed as u16,
        Direction::Down => segments_per_day(segment_minutes).saturating_sub(elapsed as u16),
    }
}

/// Format a segment index as decimal text
pub fn segment_label(index: u16) -> SegmentLabel {
    let mut label = SegmentLabel::new();
    // Validated configurations never exceed three digits
    if write!(label, "{}", index).is_err() {
        warn!("Segment index {} does not fit the label", index);
        label.clear();
    }
    label
}

/// Everything one frame needs to know about the time
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Progress {
    /// Position within the short repeating cycle
    pub cycle: SweepAngle,
    /// Position within the day
    pub day: SweepAngle,
    /// Current segment counter
    pub segment: u16,
}

impl Progress {
    /// Evaluate a reading against a face configuration
    pub fn at(reading: &ClockReading, config: &FaceConfig) -> Self {
        let elapsed = reading.elapsed_seconds();
        Self {
            cycle: cycle_angle(elapsed, config.cycle_seconds),
            day: day_angle(elapsed),
            segment: segment_index(reading, config.segment_minutes, config.direction),
        }
    }

    pub fn label(&self) -> SegmentLabel {
        segment_label(self.segment)
    }
}
