//! Periodic tick driver.
//!
//! Measures wall-clock time between polls, ticks the mount and hands the
//! reported pointing to a sink. Pacing uses an embedded-hal delay so the
//! same loop runs on a host thread or a bare-metal timer.

use embedded_hal::delay::DelayNs;

use crate::frame::{AlignmentModel, EquatorialCoordinates};

use super::clock::Clock;
use super::coordinator::Mount;

/// Receives the mount's pointing once per tick.
pub trait PointingSink {
    /// Called with the pointing reported by a tick.
    fn report(&mut self, pointing: EquatorialCoordinates);
}

impl<F> PointingSink for F
where
    F: FnMut(EquatorialCoordinates),
{
    fn report(&mut self, pointing: EquatorialCoordinates) {
        self(pointing)
    }
}

/// Owns a mount and ticks it with measured elapsed time.
pub struct TickDriver<A, C, DELAY>
where
    A: AlignmentModel,
    C: Clock,
    DELAY: DelayNs,
{
    mount: Mount<A, C>,
    delay: DELAY,
    /// Clock reading at the previous poll.
    last: Option<f64>,
}

impl<A, C, DELAY> TickDriver<A, C, DELAY>
where
    A: AlignmentModel,
    C: Clock,
    DELAY: DelayNs,
{
    /// Wrap a mount.
    pub fn new(mount: Mount<A, C>, delay: DELAY) -> Self {
        Self {
            mount,
            delay,
            last: None,
        }
    }

    /// The driven mount.
    #[inline]
    pub fn mount(&self) -> &Mount<A, C> {
        &self.mount
    }

    /// The driven mount, for issuing commands between polls.
    #[inline]
    pub fn mount_mut(&mut self) -> &mut Mount<A, C> {
        &mut self.mount
    }

    /// Release the mount and the delay provider.
    pub fn into_inner(self) -> (Mount<A, C>, DELAY) {
        (self.mount, self.delay)
    }

    /// Tick once with the time elapsed since the previous poll.
    ///
    /// The first poll ticks with zero elapsed time, as does a poll after the
    /// clock stepped backwards.
    pub fn poll<S: PointingSink + ?Sized>(&mut self, sink: &mut S) -> EquatorialCoordinates {
        let now = self.mount.clock().unix_seconds();
        let elapsed = match self.last {
            Some(previous) if now > previous => now - previous,
            _ => 0.0,
        };
        self.last = Some(now);

        let pointing = self.mount.tick(elapsed);
        sink.report(pointing);
        pointing
    }

    /// Poll `ticks` times, sleeping the nominal tick interval in between.
    pub fn run<S: PointingSink + ?Sized>(&mut self, ticks: usize, sink: &mut S) {
        let interval_ms = self.mount.tick_interval_ms();
        for i in 0..ticks {
            if i > 0 {
                self.delay.delay_ms(interval_ms);
            }
            self.poll(sink);
        }
    }
}
