//! GPIO pin abstractions
//!
//! Provides traits for the digital inputs (push buttons, mode switch) and
//! outputs (anode enables, segment bus, status LED) of a keypad board.

/// Digital output pin
///
/// Implementations drive the physical level directly. Polarity is the
/// caller's concern: anode enables are active-low and are written as such.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Set the pin to a specific level
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Check if the pin is currently driven high
    fn is_set_high(&self) -> bool;
}

/// Digital input pin
///
/// Buttons are wired active-high: a pressed button reads high.
pub trait InputPin {
    /// Sample the pin; `true` when it reads high (logic 1)
    fn is_high(&mut self) -> bool;

    /// Sample the pin; `true` when it reads low (logic 0)
    fn is_low(&mut self) -> bool {
        !self.is_high()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Latch {
        high: bool,
    }

    impl OutputPin for Latch {
        fn set_high(&mut self) {
            self.high = true;
        }

        fn set_low(&mut self) {
            self.high = false;
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    struct Level(bool);

    impl InputPin for Level {
        fn is_high(&mut self) -> bool {
            self.0
        }
    }

    #[test]
    fn test_set_state_follows_level() {
        let mut pin = Latch { high: false };
        pin.set_state(true);
        assert!(pin.is_set_high());
        pin.set_state(false);
        assert!(!pin.is_set_high());
    }

    #[test]
    fn test_is_low_is_inverse() {
        assert!(Level(false).is_low());
        assert!(!Level(true).is_low());
    }
}
