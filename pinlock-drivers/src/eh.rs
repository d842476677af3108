//! `embedded-hal` 1.0 adapters
//!
//! Chip HALs expose pins and delays through `embedded-hal`. These wrappers
//! turn them into `pinlock-hal` pins. Only infallible pins are accepted:
//! the keypad loop has no way to report a GPIO error.

use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital;

fn infallible<T>(result: Result<T, Infallible>) -> T {
    match result {
        Ok(value) => value,
        Err(never) => match never {},
    }
}

/// Input pin adapter
pub struct EhInput<P>(pub P);

impl<P: digital::InputPin<Error = Infallible>> pinlock_hal::InputPin for EhInput<P> {
    fn is_high(&mut self) -> bool {
        infallible(self.0.is_high())
    }
}

/// Output pin adapter; remembers the last level written
pub struct EhOutput<P> {
    pin: P,
    high: bool,
}

impl<P: digital::OutputPin<Error = Infallible>> EhOutput<P> {
    /// Wrap a pin, driving it to `initial_high`
    pub fn new(mut pin: P, initial_high: bool) -> Self {
        if initial_high {
            infallible(pin.set_high());
        } else {
            infallible(pin.set_low());
        }
        Self {
            pin,
            high: initial_high,
        }
    }
}

impl<P: digital::OutputPin<Error = Infallible>> pinlock_hal::OutputPin for EhOutput<P> {
    fn set_high(&mut self) {
        infallible(self.pin.set_high());
        self.high = true;
    }

    fn set_low(&mut self) {
        infallible(self.pin.set_low());
        self.high = false;
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

/// Delay adapter
pub struct EhDelay<D>(pub D);

impl<D: DelayNs> pinlock_hal::Delay for EhDelay<D> {
    fn delay_us(&mut self, us: u32) {
        self.0.delay_us(us);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.0.delay_ms(ms);
    }
}
