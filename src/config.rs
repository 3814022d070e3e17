//! Timing configuration.
//!
//! The clock half period and the sequencer cadence are separate values even
//! though both end up as plain waits.

use embassy_time::Duration;

/// Default time, in nanoseconds, the clock line is held low, and then high,
/// for one bit.
pub const DEFAULT_CLOCK_HALF_PERIOD_NS: u32 = 10_000;

/// Default interval between two colors offered by the sequencer.
pub const DEFAULT_CADENCE: Duration = Duration::from_secs(2);

/// Timings shared by the driver and the sequencer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainConfig {
    /// Hold time for each half of a clock pulse, in nanoseconds
    pub clock_half_period_ns: u32,
    /// Interval between palette steps
    pub cadence: Duration,
}

impl ChainConfig {
    pub const DEFAULT: Self = Self {
        clock_half_period_ns: DEFAULT_CLOCK_HALF_PERIOD_NS,
        cadence: DEFAULT_CADENCE,
    };

    #[must_use]
    pub const fn with_cadence(mut self, cadence: Duration) -> Self {
        self.cadence = cadence;
        self
    }

    #[must_use]
    pub const fn with_clock_half_period_ns(mut self, half_period_ns: u32) -> Self {
        self.clock_half_period_ns = half_period_ns;
        self
    }
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
