//! Bit-banged driver for a chainable RGB LED.
//!
//! Bytes go out most significant bit first. For every bit the data line is
//! set, then the clock is pulsed low and back high; the LED samples data on
//! the rising edge.

use core::fmt;

use embedded_hal::delay::DelayNs;

use crate::color::Rgb;
use crate::config::ChainConfig;
use crate::encoder::{bits_msb_first, encode};
use crate::line::{BusLine, LineId};

/// Error returned by [`ChainableLed::init`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitError<E> {
    /// The line's device reported it is not ready
    NotReady(LineId),
    /// The line refused to become an output
    Configure { line: LineId, source: E },
}

impl<E> InitError<E> {
    pub const fn line(&self) -> LineId {
        match self {
            Self::NotReady(line) | Self::Configure { line, .. } => *line,
        }
    }
}

impl<E: fmt::Display> fmt::Display for InitError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotReady(line) => write!(f, "{line} line not ready"),
            Self::Configure { line, source } => {
                write!(f, "{line} line configuration failed: {source}")
            }
        }
    }
}

impl<E: fmt::Debug + fmt::Display> core::error::Error for InitError<E> {}

/// Proof that [`ChainableLed::init`] succeeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusReady {
    _private: (),
}

/// Single chainable LED on a two-wire clock/data bus
pub struct ChainableLed<C, D, W> {
    clock: C,
    data: D,
    delay: W,
    half_period_ns: u32,
}

impl<C, D, W> ChainableLed<C, D, W>
where
    C: BusLine,
    D: BusLine<Error = C::Error>,
    W: DelayNs,
{
    pub fn new(clock: C, data: D, delay: W, config: &ChainConfig) -> Self {
        Self {
            clock,
            data,
            delay,
            half_period_ns: config.clock_half_period_ns,
        }
    }

    /// Check both lines and configure them as outputs.
    ///
    /// Readiness of both lines is checked before either is configured.
    pub fn init(&mut self) -> Result<BusReady, InitError<C::Error>> {
        if !self.clock.is_ready() {
            log!("chainable led: {} line not ready", LineId::Clock);
            return Err(InitError::NotReady(LineId::Clock));
        }
        if !self.data.is_ready() {
            log!("chainable led: {} line not ready", LineId::Data);
            return Err(InitError::NotReady(LineId::Data));
        }

        self.clock
            .configure_output()
            .map_err(|source| configure_failed(LineId::Clock, source))?;
        self.data
            .configure_output()
            .map_err(|source| configure_failed(LineId::Data, source))?;

        log!("chainable led: initialized");
        Ok(BusReady { _private: () })
    }

    /// Send start frame, LED frame and end frame for `color`.
    pub fn set_color(&mut self, color: Rgb) {
        for byte in encode(color) {
            self.send_byte(byte);
        }
    }

    /// Shift one byte out, MSB first
    pub fn send_byte(&mut self, byte: u8) {
        for bit in bits_msb_first(byte) {
            self.data.set(bit);
            self.pulse_clock();
        }
    }

    fn pulse_clock(&mut self) {
        self.clock.set(false);
        self.delay.delay_ns(self.half_period_ns);
        self.clock.set(true);
        self.delay.delay_ns(self.half_period_ns);
    }

    /// Release the lines and the delay
    pub fn release(self) -> (C, D, W) {
        (self.clock, self.data, self.delay)
    }
}

fn configure_failed<E>(line: LineId, source: E) -> InitError<E> {
    log!("chainable led: {} line configuration failed", line);
    InitError::Configure { line, source }
}
