//! Time sources for the simulator.

use core::cell::Cell;

use crate::frame::sidereal::{julian_date_from_unix, SECONDS_PER_DAY, UNIX_EPOCH_JULIAN_DATE};

/// Wall-clock time source.
pub trait Clock {
    /// Seconds since the Unix epoch (UTC).
    fn unix_seconds(&self) -> f64;

    /// Current Julian date.
    fn julian_date(&self) -> f64 {
        julian_date_from_unix(self.unix_seconds())
    }
}

impl<T: Clock + ?Sized> Clock for &T {
    fn unix_seconds(&self) -> f64 {
        (**self).unix_seconds()
    }
}

/// Operating system clock (std only).
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

#[cfg(feature = "std")]
impl Clock for SystemClock {
    fn unix_seconds(&self) -> f64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs_f64())
            .unwrap_or(0.0)
    }
}

/// Clock that only moves when told to. For tests and offline simulation.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Cell<f64>,
}

impl ManualClock {
    /// Create a clock frozen at a Unix timestamp.
    pub fn new(unix_seconds: f64) -> Self {
        Self {
            now: Cell::new(unix_seconds),
        }
    }

    /// Create a clock frozen at a Julian date.
    pub fn at_julian_date(julian_date: f64) -> Self {
        Self::new((julian_date - UNIX_EPOCH_JULIAN_DATE) * SECONDS_PER_DAY)
    }

    /// Jump to a Unix timestamp.
    pub fn set(&self, unix_seconds: f64) {
        self.now.set(unix_seconds);
    }

    /// Move forward (or backward, for negative values) by some seconds.
    pub fn advance(&self, seconds: f64) {
        self.now.set(self.now.get() + seconds);
    }
}

impl Clock for ManualClock {
    fn unix_seconds(&self) -> f64 {
        self.now.get()
    }
}
