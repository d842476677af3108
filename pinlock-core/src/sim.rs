//! Host-side board simulator
//!
//! [`SimIo`] and [`SimClock`] share one virtual microsecond counter.
//! Delays advance it instantly, and button presses are scheduled as
//! intervals on it, so debounce windows and animation cadence can be
//! checked without real time passing. Every anode selection is recorded
//! together with the segment pattern on the bus at that moment.

use core::cell::Cell;

use heapless::Vec;

use crate::traits::{Clock, DigitalIo, InputLine, OutputLine, Slot, SLOT_COUNT};

/// Maximum scheduled presses
pub const MAX_PRESSES: usize = 32;

/// Maximum recorded strobes; later ones are only counted
pub const MAX_STROBES: usize = 4096;

/// A button held high over `[start_us, end_us)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Press {
    pub line: InputLine,
    pub start_us: u64,
    pub end_us: u64,
}

/// One digit selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Strobe {
    pub slot: Slot,
    pub pattern: u8,
    pub at_us: u64,
}

/// Virtual delay source
pub struct SimClock<'a> {
    now: &'a Cell<u64>,
}

impl<'a> SimClock<'a> {
    pub fn new(now: &'a Cell<u64>) -> Self {
        Self { now }
    }

    /// Current virtual time (µs)
    pub fn now(&self) -> u64 {
        self.now.get()
    }
}

impl Clock for SimClock<'_> {
    fn delay_us(&mut self, us: u32) {
        self.now.set(self.now.get() + u64::from(us));
    }
}

/// Simulated keypad board
pub struct SimIo<'a> {
    now: &'a Cell<u64>,
    held: [bool; InputLine::ALL.len()],
    presses: Vec<Press, MAX_PRESSES>,
    anodes: [bool; SLOT_COUNT],
    segments: u8,
    status_led: bool,
    strobes: Vec<Strobe, MAX_STROBES>,
    strobe_count: usize,
    ghosts: usize,
}

impl<'a> SimIo<'a> {
    /// Board at power-on: nothing pressed, all anodes high, bus dark
    pub fn new(now: &'a Cell<u64>) -> Self {
        Self {
            now,
            held: [false; InputLine::ALL.len()],
            presses: Vec::new(),
            anodes: [true; SLOT_COUNT],
            segments: 0xFF,
            status_led: false,
            strobes: Vec::new(),
            strobe_count: 0,
            ghosts: 0,
        }
    }

    /// Schedule a press starting at an absolute time
    ///
    /// Presses beyond [`MAX_PRESSES`] are dropped.
    pub fn press_at(&mut self, line: InputLine, start_us: u64, duration_us: u64) {
        let _ = self.presses.push(Press {
            line,
            start_us,
            end_us: start_us + duration_us,
        });
    }

    /// Schedule a press starting now
    pub fn press(&mut self, line: InputLine, duration_us: u64) {
        self.press_at(line, self.now.get(), duration_us);
    }

    /// Hold a line high until [`SimIo::release`]
    pub fn hold(&mut self, line: InputLine) {
        self.held[line.index()] = true;
    }

    /// Drop a held line
    pub fn release(&mut self, line: InputLine) {
        self.held[line.index()] = false;
    }

    /// Anode levels by slot (`false` = selected)
    pub fn anodes(&self) -> [bool; SLOT_COUNT] {
        self.anodes
    }

    /// The selected digit, if exactly one is selected
    pub fn active_slot(&self) -> Option<Slot> {
        let mut low = Slot::ALL.iter().filter(|slot| !self.anodes[slot.index()]);
        match (low.next(), low.next()) {
            (Some(slot), None) => Some(*slot),
            _ => None,
        }
    }

    /// Current segment bus value
    pub fn segments(&self) -> u8 {
        self.segments
    }

    pub fn status_led(&self) -> bool {
        self.status_led
    }

    /// Recorded strobes, oldest first
    pub fn strobes(&self) -> &[Strobe] {
        &self.strobes
    }

    /// Strobes seen, including those past the recording limit
    pub fn strobe_count(&self) -> usize {
        self.strobe_count
    }

    pub fn clear_strobes(&mut self) {
        self.strobes.clear();
        self.strobe_count = 0;
    }

    /// Times a digit was selected while another was still selected
    pub fn ghost_count(&self) -> usize {
        self.ghosts
    }
}

impl DigitalIo for SimIo<'_> {
    fn read(&mut self, line: InputLine) -> bool {
        let now = self.now.get();
        self.held[line.index()]
            || self
                .presses
                .iter()
                .any(|p| p.line == line && p.start_us <= now && now < p.end_us)
    }

    fn write(&mut self, line: OutputLine, high: bool) {
        match line {
            OutputLine::Anode(slot) => {
                let i = slot.index();
                if !high && self.anodes[i] {
                    if self.anodes.iter().any(|level| !*level) {
                        self.ghosts += 1;
                    }
                    self.strobe_count += 1;
                    let _ = self.strobes.push(Strobe {
                        slot,
                        pattern: self.segments,
                        at_us: self.now.get(),
                    });
                }
                self.anodes[i] = high;
            }
            OutputLine::Segment(bit) => {
                if high {
                    self.segments |= 1 << bit;
                } else {
                    self.segments &= !(1 << bit);
                }
            }
            OutputLine::StatusLed => self.status_led = high,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_window_is_half_open() {
        let now = Cell::new(100);
        let mut io = SimIo::new(&now);
        io.press(InputLine::Digit, 50);

        assert!(io.read(InputLine::Digit));
        assert!(!io.read(InputLine::Advance));
        now.set(149);
        assert!(io.read(InputLine::Digit));
        now.set(150);
        assert!(!io.read(InputLine::Digit));
    }

    #[test]
    fn test_clock_advances_shared_time() {
        let now = Cell::new(0);
        let mut clock = SimClock::new(&now);
        clock.delay_us(40);
        clock.delay_ms(2);
        assert_eq!(clock.now(), 2_040);
    }

    #[test]
    fn test_double_selection_counts_as_ghost() {
        let now = Cell::new(0);
        let mut io = SimIo::new(&now);
        io.write(OutputLine::Anode(Slot::S0), false);
        io.write(OutputLine::Anode(Slot::S3), false);
        assert_eq!(io.ghost_count(), 1);
        assert_eq!(io.active_slot(), None);
        assert_eq!(io.strobe_count(), 2);
    }
}
