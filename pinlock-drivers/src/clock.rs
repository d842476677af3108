//! Delay-backed clock

use pinlock_core::traits::Clock;
use pinlock_hal::Delay;

/// [`Clock`] over a blocking HAL delay
pub struct DelayClock<D> {
    delay: D,
}

impl<D: Delay> DelayClock<D> {
    pub fn new(delay: D) -> Self {
        Self { delay }
    }

    pub fn into_inner(self) -> D {
        self.delay
    }
}

impl<D: Delay> Clock for DelayClock<D> {
    fn delay_us(&mut self, us: u32) {
        self.delay.delay_us(us);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }
}
