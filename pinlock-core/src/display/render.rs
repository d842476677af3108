//! Render engine
//!
//! Draws one frame of whatever the buffer's first cell selects:
//!
//! - **Digits**: one refresh pass over the four cells. The digit under the
//!   cursor stays dark for the first half of each blink period; its hold
//!   time is still spent so the refresh rate does not change.
//! - **Success**: the whole banner scroll, blocking. It enters at slot 0
//!   and moves toward slot 3 one character per step. The Clear button is
//!   sampled before every refresh pass and aborts the scroll.
//! - **Error**: a few passes of the error banner. After enough calls the
//!   display goes dark for a fixed time, so the banner blinks.
//!
//! The renderer never changes the buffer; the display mode only changes
//! when the checker or the input handler rewrites it.

use super::mux::Multiplexer;
use super::segment::{self, BANNER, BLANK, ERROR_BANNER};
use crate::config::Timing;
use crate::state::{Buffer, DisplayMode};
use crate::traits::{Clock, DigitalIo, InputLine, Slot, SLOT_COUNT};

/// How a render call ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RenderOutcome {
    /// Frame completed
    Drawn,
    /// Success scroll cut short by the Clear button
    Aborted,
}

/// Display renderer with its software timers
#[derive(Debug, Clone)]
pub struct RenderEngine {
    timing: Timing,
    /// Refresh passes into the current cursor blink period
    blink_tick: u16,
    /// Error frames since the last blank
    error_ticks: u16,
}

impl RenderEngine {
    pub fn new(timing: Timing) -> Self {
        Self {
            timing,
            blink_tick: 0,
            error_ticks: 0,
        }
    }

    /// Refresh passes into the current cursor blink period
    pub fn blink_tick(&self) -> u16 {
        self.blink_tick
    }

    /// Error frames since the display last went dark
    pub fn error_ticks(&self) -> u16 {
        self.error_ticks
    }

    /// Draw one frame for `buffer`
    ///
    /// `blink` is the digit to blink in the digit echo, usually the cursor.
    pub fn render<IO: DigitalIo, C: Clock>(
        &mut self,
        buffer: &Buffer,
        blink: Option<Slot>,
        io: &mut IO,
        clock: &mut C,
    ) -> RenderOutcome {
        let mut mux = Multiplexer::new(io);
        match DisplayMode::of(buffer) {
            DisplayMode::Digits => {
                self.draw_digits(buffer, blink, &mut mux, clock);
                RenderOutcome::Drawn
            }
            DisplayMode::Success => self.scroll_banner(&mut mux, clock),
            DisplayMode::Error => {
                self.blink_error(&mut mux, clock);
                RenderOutcome::Drawn
            }
        }
    }

    fn draw_digits<IO: DigitalIo, C: Clock>(
        &mut self,
        buffer: &Buffer,
        blink: Option<Slot>,
        mux: &mut Multiplexer<'_, IO>,
        clock: &mut C,
    ) {
        let period = self.timing.blink_period.max(1);
        let dark = self.blink_tick < period / 2;

        for slot in Slot::ALL {
            mux.write_segments(segment::encode(buffer[slot.index()]));
            // Skip the selection, not the hold: the other digits keep their duty cycle
            if !(dark && blink == Some(slot)) {
                mux.activate(slot);
            }
            clock.delay_us(self.timing.digit_hold_us);
            mux.blank_all();
        }

        self.blink_tick = (self.blink_tick + 1) % period;
    }

    fn scroll_banner<IO: DigitalIo, C: Clock>(
        &mut self,
        mux: &mut Multiplexer<'_, IO>,
        clock: &mut C,
    ) -> RenderOutcome {
        let mut window = [BLANK; SLOT_COUNT];

        for step in 0..usize::from(self.timing.scroll_steps) {
            window.copy_within(0..SLOT_COUNT - 1, 1);
            window[0] = BANNER.get(step).copied().unwrap_or(BLANK);

            for _ in 0..self.timing.scroll_step_cycles {
                if mux.read(InputLine::Clear) {
                    return RenderOutcome::Aborted;
                }
                for slot in Slot::ALL {
                    mux.strobe(slot, window[slot.index()], self.timing.scroll_hold_us, clock);
                }
            }
        }

        RenderOutcome::Drawn
    }

    fn blink_error<IO: DigitalIo, C: Clock>(
        &mut self,
        mux: &mut Multiplexer<'_, IO>,
        clock: &mut C,
    ) {
        for _ in 0..self.timing.error_passes {
            for slot in Slot::ALL {
                mux.strobe(slot, ERROR_BANNER[slot.index()], self.timing.error_hold_us, clock);
            }
        }

        self.error_ticks = self.error_ticks.saturating_add(1);
        if self.error_ticks > self.timing.error_blink_after {
            mux.blank_all();
            clock.delay_ms(self.timing.error_blank_ms);
            self.error_ticks = 0;
        }
    }
}

#[cfg(test)]
mod tests {
    use core::cell::Cell;

    use super::*;
    use crate::sim::{SimClock, SimIo};
    use crate::state::{EMPTY, ERROR, SUCCESS};

    fn engine() -> RenderEngine {
        RenderEngine::new(Timing::DEFAULT)
    }

    #[test]
    fn test_digits_strobe_each_cell_once() {
        let now = Cell::new(0);
        let mut io = SimIo::new(&now);
        let mut clock = SimClock::new(&now);
        let mut render = engine();

        let outcome = render.render(&[1, 2, 3, 4], None, &mut io, &mut clock);

        assert_eq!(outcome, RenderOutcome::Drawn);
        assert_eq!(now.get(), 4 * 500);
        let strobes = io.strobes();
        assert_eq!(strobes.len(), 4);
        for (i, strobe) in strobes.iter().enumerate() {
            assert_eq!(strobe.slot.index(), i);
            assert_eq!(strobe.pattern, segment::encode(i as u8 + 1));
            assert_eq!(strobe.at_us, i as u64 * 500);
        }
        assert_eq!(io.anodes(), [true; 4]);
        assert_eq!(io.ghost_count(), 0);
    }

    #[test]
    fn test_cursor_digit_dark_in_first_half_of_blink_period() {
        let now = Cell::new(0);
        let mut io = SimIo::new(&now);
        let mut clock = SimClock::new(&now);
        let mut render = engine();
        let buffer = [EMPTY, 7, EMPTY, EMPTY];

        render.render(&buffer, Some(Slot::S1), &mut io, &mut clock);

        // Slot 1 skipped, but its hold time still elapsed
        let slots: heapless::Vec<Slot, 4> = io.strobes().iter().map(|s| s.slot).collect();
        assert_eq!(&slots[..], &[Slot::S0, Slot::S2, Slot::S3]);
        assert_eq!(now.get(), 2_000);

        // Advance to the lit half
        for _ in 1..Timing::DEFAULT.blink_period / 2 {
            render.render(&buffer, Some(Slot::S1), &mut io, &mut clock);
        }
        io.clear_strobes();
        render.render(&buffer, Some(Slot::S1), &mut io, &mut clock);
        assert_eq!(io.strobes().len(), 4);
        assert_eq!(io.strobes()[1].pattern, segment::encode(7));
    }

    #[test]
    fn test_blink_duty_over_one_period() {
        let now = Cell::new(0);
        let mut io = SimIo::new(&now);
        let mut clock = SimClock::new(&now);
        let mut render = engine();
        let period = Timing::DEFAULT.blink_period;

        let mut lit = [0u32; 4];
        for _ in 0..period {
            io.clear_strobes();
            render.render(&[0, 1, 2, 3], Some(Slot::S3), &mut io, &mut clock);
            for strobe in io.strobes() {
                lit[strobe.slot.index()] += 1;
            }
        }

        let full = u32::from(period);
        assert_eq!(lit, [full, full, full, full / 2]);
        assert_eq!(render.blink_tick(), 0);
    }

    #[test]
    fn test_success_scrolls_banner_from_slot_zero() {
        let now = Cell::new(0);
        let mut io = SimIo::new(&now);
        let mut clock = SimClock::new(&now);
        let mut render = engine();

        let outcome = render.render(&[SUCCESS; 4], None, &mut io, &mut clock);

        assert_eq!(outcome, RenderOutcome::Drawn);
        assert_eq!(io.strobe_count(), 12 * 50 * 4);
        assert_eq!(now.get(), 12 * 50 * 4 * 800);

        let strobes = io.strobes();
        let frame = |step: usize| -> [u8; 4] {
            let base = step * 50 * 4;
            [
                strobes[base].pattern,
                strobes[base + 1].pattern,
                strobes[base + 2].pattern,
                strobes[base + 3].pattern,
            ]
        };
        assert_eq!(frame(0), [BANNER[0], BLANK, BLANK, BLANK]);
        assert_eq!(frame(3), [BANNER[3], BANNER[2], BANNER[1], BANNER[0]]);
        assert_eq!(frame(5), [BANNER[5], BANNER[4], BANNER[3], BANNER[2]]);
        assert_eq!(frame(11), [BLANK; 4]);
    }

    #[test]
    fn test_success_scroll_aborts_on_clear() {
        let now = Cell::new(0);
        let mut io = SimIo::new(&now);
        let mut clock = SimClock::new(&now);
        let mut render = engine();
        io.press_at(InputLine::Clear, 100_000, 1_000_000);

        let outcome = render.render(&[SUCCESS; 4], None, &mut io, &mut clock);

        assert_eq!(outcome, RenderOutcome::Aborted);
        // First pass boundary at or after 100 ms: 32 passes of 3.2 ms
        assert_eq!(now.get(), 32 * 3_200);
        assert_eq!(io.strobe_count(), 32 * 4);
        assert_eq!(io.anodes(), [true; 4]);
    }

    #[test]
    fn test_error_banner_passes() {
        let now = Cell::new(0);
        let mut io = SimIo::new(&now);
        let mut clock = SimClock::new(&now);
        let mut render = engine();

        render.render(&[ERROR; 4], None, &mut io, &mut clock);

        assert_eq!(io.strobe_count(), 8);
        assert_eq!(now.get(), 8 * 500);
        for (i, strobe) in io.strobes().iter().enumerate() {
            assert_eq!(strobe.pattern, ERROR_BANNER[i % 4]);
        }
        assert_eq!(render.error_ticks(), 1);
    }

    #[test]
    fn test_error_banner_goes_dark_periodically() {
        let now = Cell::new(0);
        let mut io = SimIo::new(&now);
        let mut clock = SimClock::new(&now);
        let mut render = engine();

        for _ in 0..500 {
            render.render(&[ERROR; 4], None, &mut io, &mut clock);
        }
        assert_eq!(now.get(), 500 * 4_000);

        let before = now.get();
        render.render(&[ERROR; 4], None, &mut io, &mut clock);
        assert_eq!(now.get() - before, 4_000 + 500_000);
        assert_eq!(render.error_ticks(), 0);
        assert_eq!(io.anodes(), [true; 4]);
    }
}
