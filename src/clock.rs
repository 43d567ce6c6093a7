//! Wall-clock readings

use core::fmt;

use chrono::Timelike;

/// Seconds in one day
pub const SECONDS_PER_DAY: u32 = 24 * 60 * 60;

/// Time of day sampled for a single frame.
///
/// A reading is taken fresh for every render and never cached, so the face
/// stays correct across midnight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockReading {
    hour: u8,
    minute: u8,
    second: u8,
}

impl ClockReading {
    /// 00:00:00
    pub const MIDNIGHT: Self = Self {
        hour: 0,
        minute: 0,
        second: 0,
    };

    /// Create a reading from raw parts
    pub fn new(hour: u8, minute: u8, second: u8) -> Result<Self, ClockError> {
        if hour > 23 || minute > 59 || second > 59 {
            return Err(ClockError::OutOfRange);
        }

        Ok(Self {
            hour,
            minute,
            second,
        })
    }

    /// Create a reading from seconds elapsed since midnight.
    /// Values of a day or more wrap around.
    pub fn from_elapsed_seconds(elapsed: u32) -> Self {
        let elapsed = elapsed % SECONDS_PER_DAY;
        Self {
            hour: (elapsed / 3_600) as u8,
            minute: (elapsed / 60 % 60) as u8,
            second: (elapsed % 60) as u8,
        }
    }

    /// Take the time of day from any chrono value
    pub fn from_time<T: Timelike>(time: &T) -> Self {
        // chrono keeps leap seconds in the nanosecond field, so `second()`
        // never exceeds 59
        Self {
            hour: time.hour() as u8,
            minute: time.minute() as u8,
            second: time.second() as u8,
        }
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn second(&self) -> u8 {
        self.second
    }

    /// Seconds elapsed since midnight, always below [`SECONDS_PER_DAY`]
    pub fn elapsed_seconds(&self) -> u32 {
        self.hour as u32 * 3_600 + self.minute as u32 * 60 + self.second as u32
    }
}

/// Source of the current time of day
pub trait ClockSource {
    /// Sample the clock
    fn now(&self) -> Result<ClockReading, ClockError>;
}

/// Clock that always reports the same reading
#[derive(Clone, Copy, Debug)]
pub struct FixedClock(pub ClockReading);

impl ClockSource for FixedClock {
    fn now(&self) -> Result<ClockReading, ClockError> {
        Ok(self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockError {
    /// A time component is outside its range
    OutOfRange,
    /// The clock could not be read
    Unavailable,
}

impl fmt::Display for ClockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange => f.write_str("time component out of range"),
            Self::Unavailable => f.write_str("clock unavailable"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    #[test]
    fn rejects_out_of_range_components() {
        assert_eq!(ClockReading::new(24, 0, 0), Err(ClockError::OutOfRange));
        assert_eq!(ClockReading::new(0, 60, 0), Err(ClockError::OutOfRange));
        assert_eq!(ClockReading::new(0, 0, 60), Err(ClockError::OutOfRange));
        assert!(ClockReading::new(23, 59, 59).is_ok());
    }

    #[test]
    fn elapsed_seconds_since_midnight() {
        assert_eq!(ClockReading::MIDNIGHT.elapsed_seconds(), 0);
        assert_eq!(ClockReading::new(0, 5, 30).unwrap().elapsed_seconds(), 330);
        assert_eq!(
            ClockReading::new(23, 59, 59).unwrap().elapsed_seconds(),
            SECONDS_PER_DAY - 1
        );
    }

    #[test]
    fn from_elapsed_seconds_wraps_at_midnight() {
        let reading = ClockReading::from_elapsed_seconds(45_296);
        assert_eq!((reading.hour(), reading.minute(), reading.second()), (12, 34, 56));
        assert_eq!(
            ClockReading::from_elapsed_seconds(SECONDS_PER_DAY),
            ClockReading::MIDNIGHT
        );
    }

    #[test]
    fn reading_from_chrono_time() {
        let time = NaiveTime::from_hms_opt(7, 8, 9).unwrap();
        assert_eq!(
            ClockReading::from_time(&time),
            ClockReading::new(7, 8, 9).unwrap()
        );
    }

    #[test]
    fn fixed_clock_reports_its_reading() {
        let reading = ClockReading::new(1, 2, 3).unwrap();
        assert_eq!(FixedClock(reading).now(), Ok(reading));
    }
}
