//! Transmitter task.
//!
//! Waits on the handoff slot and writes each color it receives to the bus.
//! A frame is sent in one go, without yielding between pulses.

use embedded_hal::delay::DelayNs;

use crate::color::Rgb;
use crate::driver::ChainableLed;
use crate::handoff::SlotReceiver;
use crate::line::BusLine;

pub struct Transmitter<'a, C, D, W> {
    colors: SlotReceiver<'a, Rgb>,
    led: ChainableLed<C, D, W>,
}

impl<'a, C, D, W> Transmitter<'a, C, D, W>
where
    C: BusLine,
    D: BusLine<Error = C::Error>,
    W: DelayNs,
{
    pub const fn new(colors: SlotReceiver<'a, Rgb>, led: ChainableLed<C, D, W>) -> Self {
        Self { colors, led }
    }

    /// Wait for the next color and send it
    pub async fn transmit_next(&mut self) -> Rgb {
        let color = self.colors.take().await;
        self.led.set_color(color);
        color
    }

    /// Send colors forever
    pub async fn run(&mut self) {
        loop {
            self.transmit_next().await;
        }
    }

    pub fn led_mut(&mut self) -> &mut ChainableLed<C, D, W> {
        &mut self.led
    }

    pub fn into_led(self) -> ChainableLed<C, D, W> {
        self.led
    }
}
