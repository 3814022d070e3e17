//! Palette sequencer.
//!
//! Offers one palette color per cadence tick to the handoff slot, wrapping
//! around at the end of the palette. Colors that find the slot full are
//! dropped without notice.

use core::convert::Infallible;

use embassy_time::{Duration, Timer};

use crate::color::{Palette, Rgb};
use crate::config::ChainConfig;
use crate::driver::{BusReady, InitError};
use crate::handoff::SlotSender;

/// Outcome of a single offer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Offer {
    /// The color is now pending in the slot
    Accepted(Rgb),
    /// The slot was full and the color was discarded
    Dropped(Rgb),
}

/// Cycles through a palette forever
pub struct Sequencer<'a, const N: usize> {
    palette: Palette<N>,
    colors: SlotSender<'a, Rgb>,
    cadence: Duration,
    position: usize,
}

impl<'a, const N: usize> Sequencer<'a, N> {
    pub const fn new(
        palette: Palette<N>,
        colors: SlotSender<'a, Rgb>,
        config: &ChainConfig,
    ) -> Self {
        Self {
            palette,
            colors,
            cadence: config.cadence,
            position: 0,
        }
    }

    /// Index of the next color to offer
    pub const fn position(&self) -> usize {
        self.position
    }

    pub const fn cadence(&self) -> Duration {
        self.cadence
    }

    /// Offer the color at the current position and advance.
    ///
    /// Returns `None` only for an empty palette.
    pub fn step(&mut self) -> Option<Offer> {
        let color = self.palette.get(self.position)?;
        self.position += 1;
        if self.position == N {
            self.position = 0;
        }

        let offer = match self.colors.offer(color) {
            Ok(()) => Offer::Accepted(color),
            Err(_) => Offer::Dropped(color),
        };
        Some(offer)
    }

    /// Run the sequencer loop.
    ///
    /// `ready` is the outcome of bus initialization. On failure the error is
    /// returned straight away and nothing is offered; the transmitter is not
    /// told and keeps waiting on an empty slot.
    pub async fn run<E>(
        &mut self,
        ready: Result<BusReady, InitError<E>>,
    ) -> Result<Infallible, InitError<E>> {
        if let Err(err) = ready {
            log!("sequencer: bus init failed on {} line, stopping", err.line());
            return Err(err);
        }

        loop {
            let _ = self.step();
            Timer::after(self.cadence).await;
        }
    }
}
