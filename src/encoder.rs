//! Wire encoding for APA102-style chainable LEDs.
//!
//! A transmission is a 4-byte zero start frame, one 4-byte LED frame per
//! color and a 4-byte zero end frame. The LED frame is a prefix byte
//! followed by the blue, green and red channels.

use crate::color::Rgb;

/// Marks the beginning of a transmission.
pub const START_FRAME: [u8; 4] = [0x00; 4];

/// Flushes the chain so the last device latches its color.
pub const END_FRAME: [u8; 4] = [0x00; 4];

pub const LED_FRAME_LEN: usize = 4;

/// Bytes needed to set a single LED.
pub const FRAME_LEN: usize = START_FRAME.len() + LED_FRAME_LEN + END_FRAME.len();

/// Clock pulses needed to set a single LED.
pub const PULSES_PER_FRAME: usize = FRAME_LEN * 8;

const PREFIX_MARKER: u8 = 0b1100_0000;

/// Header byte sent ahead of the channel bytes.
///
/// The top two bits are always set. The remaining six carry, for blue,
/// green and red in that order, one bit per channel bit 7 and bit 6, set
/// when the channel bit is clear.
pub const fn prefix_byte(color: Rgb) -> u8 {
    PREFIX_MARKER
        | (inverted_high_bits(color.b) << 4)
        | (inverted_high_bits(color.g) << 2)
        | inverted_high_bits(color.r)
}

/// Bits 7 and 6 of `channel`, inverted and moved down to bits 1 and 0
const fn inverted_high_bits(channel: u8) -> u8 {
    (!channel >> 6) & 0b11
}

/// Prefix, blue, green, red.
pub const fn led_frame(color: Rgb) -> [u8; LED_FRAME_LEN] {
    [prefix_byte(color), color.b, color.g, color.r]
}

/// Full byte sequence that sets one LED to `color`.
///
/// All-zero colors are encoded like any other.
pub const fn encode(color: Rgb) -> [u8; FRAME_LEN] {
    let [s0, s1, s2, s3] = START_FRAME;
    let [prefix, blue, green, red] = led_frame(color);
    let [e0, e1, e2, e3] = END_FRAME;
    [s0, s1, s2, s3, prefix, blue, green, red, e0, e1, e2, e3]
}

/// Bits of `byte`, most significant first
pub fn bits_msb_first(byte: u8) -> impl Iterator<Item = bool> {
    (0..8).rev().map(move |shift| (byte >> shift) & 1 == 1)
}

/// Recover the color from a full frame.
///
/// Returns `None` when the start or end frame is not all zeros or the
/// prefix does not match the channel bytes.
pub fn decode(frame: &[u8; FRAME_LEN]) -> Option<Rgb> {
    let (start, rest) = frame.split_at(START_FRAME.len());
    let (led, end) = rest.split_at(LED_FRAME_LEN);
    if start != START_FRAME || end != END_FRAME {
        return None;
    }
    let &[prefix, blue, green, red] = led else {
        return None;
    };
    let color = Rgb::new(red, green, blue);
    (prefix_byte(color) == prefix).then_some(color)
}
