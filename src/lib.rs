#![no_std]

#[macro_use]
mod log;

pub mod color;
pub mod config;
pub mod driver;
pub mod encoder;
pub mod handoff;
pub mod line;
#[cfg(feature = "host")]
pub mod probe;
pub mod sequencer;
pub mod transmitter;

pub use color::{Palette, REFERENCE_PALETTE, Rgb};
pub use config::ChainConfig;
pub use driver::{BusReady, ChainableLed, InitError};
pub use handoff::{Dropped, HandoffSlot, SlotReceiver, SlotSender};
pub use line::{BusLine, HalLine, LineId};
pub use sequencer::{Offer, Sequencer};
pub use transmitter::Transmitter;
pub use embassy_time::Duration;
