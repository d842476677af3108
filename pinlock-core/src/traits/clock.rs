//! Blocking delay capability

/// Source of busy-wait delays
///
/// The loop has no scheduler; every call blocks the whole keypad,
/// including button sampling. Production boards bind this to a calibrated
/// blocking delay, tests to a virtual microsecond counter.
pub trait Clock {
    /// Block for `us` microseconds
    fn delay_us(&mut self, us: u32);

    /// Block for `ms` milliseconds
    fn delay_ms(&mut self, ms: u32) {
        for _ in 0..ms {
            self.delay_us(1_000);
        }
    }
}

impl<T: Clock + ?Sized> Clock for &mut T {
    fn delay_us(&mut self, us: u32) {
        (**self).delay_us(us);
    }

    fn delay_ms(&mut self, ms: u32) {
        (**self).delay_ms(ms);
    }
}
