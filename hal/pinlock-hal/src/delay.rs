//! Blocking delays
//!
//! The keypad loop is cooperative and single-threaded: every wait is a
//! spin that blocks the whole system, including button sampling.

/// Blocking delay source
pub trait Delay {
    /// Block for at least `us` microseconds
    fn delay_us(&mut self, us: u32);

    /// Block for at least `ms` milliseconds
    fn delay_ms(&mut self, ms: u32) {
        for _ in 0..ms {
            self.delay_us(1_000);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counter {
        elapsed_us: u64,
        calls: u32,
    }

    impl Delay for Counter {
        fn delay_us(&mut self, us: u32) {
            self.elapsed_us += u64::from(us);
            self.calls += 1;
        }
    }

    #[test]
    fn test_delay_ms_is_built_from_microseconds() {
        let mut delay = Counter {
            elapsed_us: 0,
            calls: 0,
        };
        delay.delay_ms(3);
        assert_eq!(delay.elapsed_us, 3_000);
        assert_eq!(delay.calls, 3);
    }
}
