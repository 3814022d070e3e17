//! Logic-analyzer style probe for the clock/data bus.
//!
//! [`BusProbe::lines`] hands out two [`BusLine`]s that record what a driver
//! does to them. Data is sampled on every rising clock edge and the bits are
//! reassembled into bytes, MSB first. Readiness and configuration failures
//! can be injected per line.

use core::cell::RefCell;
use core::fmt;

use heapless::Vec;

use crate::color::Rgb;
use crate::encoder::{FRAME_LEN, decode};
use crate::line::{BusLine, LineId};

/// Error returned by a probe line whose configuration was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeFault(pub LineId);

impl fmt::Display for ProbeFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} line rejected configuration", self.0)
    }
}

#[derive(Debug, Clone, Copy)]
struct LineState {
    ready: bool,
    reject_configure: bool,
    configured: bool,
    level: bool,
}

impl LineState {
    const fn new() -> Self {
        Self {
            ready: true,
            reject_configure: false,
            configured: false,
            level: false,
        }
    }
}

#[derive(Debug)]
struct ProbeState<const N: usize> {
    clock: LineState,
    data: LineState,
    shift: u8,
    bit_count: u8,
    pulses: usize,
    bytes: Vec<u8, N>,
    overflowed: bool,
}

impl<const N: usize> ProbeState<N> {
    const fn line_mut(&mut self, line: LineId) -> &mut LineState {
        match line {
            LineId::Clock => &mut self.clock,
            LineId::Data => &mut self.data,
        }
    }

    const fn line(&self, line: LineId) -> &LineState {
        match line {
            LineId::Clock => &self.clock,
            LineId::Data => &self.data,
        }
    }

    fn sample(&mut self) {
        self.pulses += 1;
        self.shift = (self.shift << 1) | u8::from(self.data.level);
        self.bit_count += 1;
        if self.bit_count == 8 {
            if self.bytes.push(self.shift).is_err() {
                self.overflowed = true;
            }
            self.shift = 0;
            self.bit_count = 0;
        }
    }
}

/// Records up to `N` bytes sent over a two-wire bus
#[derive(Debug)]
pub struct BusProbe<const N: usize> {
    state: RefCell<ProbeState<N>>,
}

impl<const N: usize> BusProbe<N> {
    pub const fn new() -> Self {
        Self {
            state: RefCell::new(ProbeState {
                clock: LineState::new(),
                data: LineState::new(),
                shift: 0,
                bit_count: 0,
                pulses: 0,
                bytes: Vec::new(),
                overflowed: false,
            }),
        }
    }

    /// Clock and data lines attached to this probe
    pub const fn lines(&self) -> (ProbeLine<'_, N>, ProbeLine<'_, N>) {
        (
            ProbeLine {
                probe: self,
                id: LineId::Clock,
            },
            ProbeLine {
                probe: self,
                id: LineId::Data,
            },
        )
    }

    pub fn set_ready(&self, line: LineId, ready: bool) {
        self.state.borrow_mut().line_mut(line).ready = ready;
    }

    /// Make the next `configure_output` call on `line` fail
    pub fn reject_configure(&self, line: LineId) {
        self.state.borrow_mut().line_mut(line).reject_configure = true;
    }

    pub fn is_configured(&self, line: LineId) -> bool {
        self.state.borrow().line(line).configured
    }

    /// Current level of `line`
    pub fn level(&self, line: LineId) -> bool {
        self.state.borrow().line(line).level
    }

    /// Rising clock edges seen so far
    pub fn pulses(&self) -> usize {
        self.state.borrow().pulses
    }

    /// Complete bytes captured so far
    pub fn bytes(&self) -> Vec<u8, N> {
        self.state.borrow().bytes.clone()
    }

    /// Bits sampled since the last complete byte
    pub fn pending_bits(&self) -> u8 {
        self.state.borrow().bit_count
    }

    /// Whether bytes were lost because the buffer was full
    pub fn overflowed(&self) -> bool {
        self.state.borrow().overflowed
    }

    /// Number of complete single-LED frames captured
    pub fn frame_count(&self) -> usize {
        self.state.borrow().bytes.len() / FRAME_LEN
    }

    /// Raw bytes of the `index`-th captured frame
    pub fn frame(&self, index: usize) -> Option<[u8; FRAME_LEN]> {
        let state = self.state.borrow();
        let start = index.checked_mul(FRAME_LEN)?;
        let end = start.checked_add(FRAME_LEN)?;
        let bytes = state.bytes.get(start..end)?;
        bytes.try_into().ok()
    }

    /// Color carried by the `index`-th captured frame, if it is well formed
    pub fn color(&self, index: usize) -> Option<Rgb> {
        self.frame(index).as_ref().and_then(decode)
    }

    /// Forget captured bytes and pulses; line setup is kept
    pub fn clear(&self) {
        let mut state = self.state.borrow_mut();
        state.shift = 0;
        state.bit_count = 0;
        state.pulses = 0;
        state.bytes.clear();
        state.overflowed = false;
    }
}

impl<const N: usize> Default for BusProbe<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// One line of a [`BusProbe`]
#[derive(Debug)]
pub struct ProbeLine<'a, const N: usize> {
    probe: &'a BusProbe<N>,
    id: LineId,
}

impl<const N: usize> ProbeLine<'_, N> {
    pub const fn id(&self) -> LineId {
        self.id
    }
}

impl<const N: usize> BusLine for ProbeLine<'_, N> {
    type Error = ProbeFault;

    fn is_ready(&self) -> bool {
        self.probe.state.borrow().line(self.id).ready
    }

    fn configure_output(&mut self) -> Result<(), Self::Error> {
        let mut state = self.probe.state.borrow_mut();
        let line = state.line_mut(self.id);
        if line.reject_configure {
            return Err(ProbeFault(self.id));
        }
        line.configured = true;
        Ok(())
    }

    fn set(&mut self, high: bool) {
        let mut state = self.probe.state.borrow_mut();
        let was_high = state.line(self.id).level;
        state.line_mut(self.id).level = high;
        if self.id == LineId::Clock && high && !was_high {
            state.sample();
        }
    }
}
