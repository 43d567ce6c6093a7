//! Watchface configuration
//!
//! All values are fixed at compile time. The firmware picks one of the
//! [`Variant`] presets and a [`Theme`] matching the display at startup.

use core::fmt;

use embedded_graphics::{
    geometry::{Point, Size},
    mono_font::{ascii::FONT_10X20, MonoFont},
    pixelcolor::{Rgb565, RgbColor},
    primitives::Rectangle,
};
use profont::PROFONT_24_POINT;

use crate::{
    clock::SECONDS_PER_DAY,
    progress::{segments_per_day, Direction},
};

/// PineTime LCD size
pub const SCREEN_SIZE: Size = Size::new(240, 240);

/// Largest segment counter the label can show
const MAX_LABEL_VALUE: u16 = 999;

/// Dodger blue, 0x1E90FF
const DODGER_BLUE: Rgb565 = Rgb565::new(0x1E >> 3, 0x90 >> 2, 0xFF >> 3);

/// What the display can show
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayCapability {
    Color,
    Monochrome,
}

/// Colors and font of the face
#[derive(Clone, Copy)]
pub struct Theme {
    /// Window background, also used to erase the unfilled part of a ring
    pub background: Rgb565,
    /// Filled part of both rings
    pub ring: Rgb565,
    /// Segment label text
    pub label: Rgb565,
    /// Segment label font
    pub font: &'static MonoFont<'static>,
}

impl fmt::Debug for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Theme")
            .field("background", &self.background)
            .field("ring", &self.ring)
            .field("label", &self.label)
            .field("font_size", &self.font.character_size)
            .finish()
    }
}

impl Theme {
    /// White rings on dodger blue
    pub fn color() -> Self {
        Self {
            background: DODGER_BLUE,
            ring: Rgb565::WHITE,
            label: Rgb565::WHITE,
            font: &PROFONT_24_POINT,
        }
    }

    /// White rings on black
    pub fn monochrome() -> Self {
        Self {
            background: Rgb565::BLACK,
            ring: Rgb565::WHITE,
            label: Rgb565::WHITE,
            font: &FONT_10X20,
        }
    }

    /// Select the theme for a display
    pub fn for_display(capability: DisplayCapability) -> Self {
        match capability {
            DisplayCapability::Color => Self::color(),
            DisplayCapability::Monochrome => Self::monochrome(),
        }
    }
}

/// Radii of one progress ring in pixels
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RingGeometry {
    /// Outer edge of the ring band
    pub outer_radius: u32,
    /// Inner edge of the ring band, everything inside is left untouched
    pub inner_radius: u32,
}

impl RingGeometry {
    pub fn new(outer_radius: u32, inner_radius: u32) -> Result<Self, ConfigError> {
        let geometry = Self {
            outer_radius,
            inner_radius,
        };
        geometry.validate()?;
        Ok(geometry)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.inner_radius == 0 || self.outer_radius <= self.inner_radius {
            return Err(ConfigError::RingRadii {
                outer: self.outer_radius,
                inner: self.inner_radius,
            });
        }
        Ok(())
    }

    /// Width of the visible band
    pub fn band_width(&self) -> u32 {
        self.outer_radius.saturating_sub(self.inner_radius)
    }
}

/// Whether the day ring follows the clock
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DayRingMode {
    /// Redrawn on every tick
    Live,
    /// Has no update routine and is never drawn
    Detached,
}

/// The watchface variants
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Variant {
    /// 5 minute cycle, 288 segments counting down
    FiveMinuteCountdown,
    /// 6 minute cycle, 240 segments counting down
    SixMinuteCountdown,
    /// 6 minute cycle, 240 segments counting up
    SixMinuteCountUp,
    /// Like [`Variant::SixMinuteCountdown`] but the day ring never updates
    SixMinuteDetachedDay,
}

impl Variant {
    pub fn config(self, capability: DisplayCapability) -> FaceConfig {
        let config = match self {
            Self::FiveMinuteCountdown => FaceConfig::five_minute_countdown(),
            Self::SixMinuteCountdown => FaceConfig::six_minute_countdown(),
            Self::SixMinuteCountUp => FaceConfig::six_minute_count_up(),
            Self::SixMinuteDetachedDay => FaceConfig::six_minute_detached_day(),
        };
        config.with_theme(Theme::for_display(capability))
    }
}

/// Complete configuration of a progress watchface
#[derive(Clone, Copy, Debug)]
pub struct FaceConfig {
    /// Length of one outer ring revolution in seconds
    pub cycle_seconds: u32,
    /// Length of one label segment in minutes
    pub segment_minutes: u32,
    /// Counting direction of the label
    pub direction: Direction,
    /// Outer ring, tracks the short cycle
    pub cycle_ring: RingGeometry,
    /// Inner ring, tracks the day
    pub day_ring: RingGeometry,
    pub day_ring_mode: DayRingMode,
    /// Area the label is centered in, cleared on every draw. Must lie
    /// inside the day ring.
    pub label_area: Rectangle,
    pub theme: Theme,
}

impl FaceConfig {
    /// Ring layout for the 240x240 PineTime screen
    fn pinetime(cycle_seconds: u32, segment_minutes: u32, direction: Direction) -> Self {
        Self {
            cycle_seconds,
            segment_minutes,
            direction,
            cycle_ring: RingGeometry {
                outer_radius: 100,
                inner_radius: 92,
            },
            day_ring: RingGeometry {
                outer_radius: 90,
                inner_radius: 83,
            },
            day_ring_mode: DayRingMode::Live,
            label_area: Rectangle::new(Point::new(60, 95), Size::new(120, 50)),
            theme: Theme::color(),
        }
    }

    pub fn five_minute_countdown() -> Self {
        Self::pinetime(300, 5, Direction::Down)
    }

    pub fn six_minute_countdown() -> Self {
        Self::pinetime(360, 6, Direction::Down)
    }

    pub fn six_minute_count_up() -> Self {
        Self::pinetime(360, 6, Direction::Up)
    }

    pub fn six_minute_detached_day() -> Self {
        Self {
            day_ring_mode: DayRingMode::Detached,
            ..Self::pinetime(360, 6, Direction::Down)
        }
    }

    pub fn with_theme(self, theme: Theme) -> Self {
        Self { theme, ..self }
    }

    /// Number of segments in one day
    pub fn segments_per_day(&self) -> u16 {
        segments_per_day(self.segment_minutes)
    }

    /// Check the configuration invariants
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cycle_seconds == 0 {
            return Err(ConfigError::ZeroCycle);
        }
        if self.cycle_seconds > SECONDS_PER_DAY {
            return Err(ConfigError::CycleTooLong(self.cycle_seconds));
        }

        // Segments must tile an hour and the counter must fit the label
        if self.segment_minutes == 0
            || 60 % self.segment_minutes != 0
            || self.segments_per_day() > MAX_LABEL_VALUE
        {
            return Err(ConfigError::SegmentLength(self.segment_minutes));
        }

        self.cycle_ring.validate()?;
        self.day_ring.validate()?;

        if self.day_ring.outer_radius >= self.cycle_ring.inner_radius {
            return Err(ConfigError::RingsOverlap);
        }

        // Rings only paint their band, the label clears its own area
        let center = Rectangle::new(Point::zero(), SCREEN_SIZE).center();
        let inner_sq = (self.day_ring.inner_radius as i64).pow(2);
        let area = self.label_area;
        if area.is_zero_sized() {
            return Err(ConfigError::LabelOutsideRings);
        }
        let corners = [
            area.top_left,
            area.top_left + Point::new(area.size.width as i32 - 1, 0),
            area.top_left + Point::new(0, area.size.height as i32 - 1),
            area.top_left + area.size - Size::new(1, 1),
        ];
        let inside = corners.iter().all(|corner| {
            let dx = (corner.x - center.x) as i64;
            let dy = (corner.y - center.y) as i64;
            dx * dx + dy * dy <= inner_sq
        });
        if !inside {
            return Err(ConfigError::LabelOutsideRings);
        }

        Ok(())
    }
}

impl Default for FaceConfig {
    fn default() -> Self {
        Self::six_minute_countdown()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// The short cycle has no length
    ZeroCycle,
    /// The short cycle is longer than a day
    CycleTooLong(u32),
    /// Segment length does not divide an hour or overflows the label
    SegmentLength(u32),
    /// Ring radii are not `outer > inner > 0`
    RingRadii { outer: u32, inner: u32 },
    /// The day ring reaches into the cycle ring
    RingsOverlap,
    /// The label area is empty or reaches into the day ring
    LabelOutsideRings,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroCycle => f.write_str("cycle length must be positive"),
            Self::CycleTooLong(seconds) => {
                write!(f, "cycle of {} seconds is longer than a day", seconds)
            }
            Self::SegmentLength(minutes) => {
                write!(f, "unsupported segment length of {} minutes", minutes)
            }
            Self::RingRadii { outer, inner } => {
                write!(f, "invalid ring radii: outer {}, inner {}", outer, inner)
            }
            Self::RingsOverlap => f.write_str("day ring overlaps the cycle ring"),
            Self::LabelOutsideRings => f.write_str("label area must lie inside the day ring"),
        }
    }
}
