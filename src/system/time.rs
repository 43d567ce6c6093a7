//! Time keeping module for PineTime

use chrono::{DateTime, Duration, NaiveDateTime};
use embassy_time::Instant;
use progress_clock::clock::{ClockError, ClockReading, ClockSource};

pub struct TimeReference {
    /// Local clock time
    time: NaiveDateTime,
    /// Related system time
    instant: Instant,
}

impl TimeReference {
    /// Create new time reference from a UTC timestamp and a local offset,
    /// anchored at the current system time
    pub fn from_timestamp(utc_secs: i64, offset_secs: i32) -> Option<Self> {
        let time = DateTime::from_timestamp(utc_secs + offset_secs as i64, 0)?.naive_utc();

        Some(Self {
            time,
            instant: Instant::now(),
        })
    }
}

pub struct TimeManager {
    reference: TimeReference,
}

impl TimeManager {
    /// Initialize time measurement on boot
    pub fn init(reference: TimeReference) -> Self {
        Self { reference }
    }

    /// Get current local time
    pub fn get_time(&self) -> Option<NaiveDateTime> {
        let elapsed = self.reference.instant.elapsed().as_micros();
        self.reference
            .time
            .checked_add_signed(Duration::microseconds(i64::try_from(elapsed).ok()?))
    }
}

impl ClockSource for TimeManager {
    fn now(&self) -> Result<ClockReading, ClockError> {
        self.get_time()
            .map(|time| ClockReading::from_time(&time))
            .ok_or(ClockError::Unavailable)
    }
}
