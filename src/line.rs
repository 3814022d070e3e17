//! GPIO seam between the driver and the board.

use core::convert::Infallible;
use core::fmt;

use embedded_hal::digital::{OutputPin, PinState};

/// Which of the two bus lines an event refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineId {
    Clock,
    Data,
}

impl LineId {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Clock => "clock",
            Self::Data => "data",
        }
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Abstract output line
///
/// Implement this trait to drive the bus from a board's GPIO layer.
/// Readiness and configuration are only queried during initialization;
/// `set` is called for every bit and must not fail once configured.
pub trait BusLine {
    /// Error reported when the line cannot be configured as an output
    type Error;

    /// Whether the underlying device can be used
    fn is_ready(&self) -> bool;

    /// Configure the line as a push-pull output
    fn configure_output(&mut self) -> Result<(), Self::Error>;

    /// Drive the line high or low
    fn set(&mut self, high: bool);
}

/// Adapter for pins that are already outputs in an `embedded-hal` HAL.
///
/// Such pins are ready by construction, so configuration is a no-op and
/// write errors are discarded.
#[derive(Debug)]
pub struct HalLine<P> {
    pin: P,
}

impl<P: OutputPin> HalLine<P> {
    pub const fn new(pin: P) -> Self {
        Self { pin }
    }

    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: OutputPin> BusLine for HalLine<P> {
    type Error = Infallible;

    fn is_ready(&self) -> bool {
        true
    }

    fn configure_output(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set(&mut self, high: bool) {
        let _ = self.pin.set_state(PinState::from(high));
    }
}
