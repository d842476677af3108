//! Board-agnostic core logic for the pinlock keypad
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Capability traits for digital I/O and blocking delays
//! - Segment encoding tables for a common-anode 7-segment display
//! - Display multiplexing and the three render behaviors
//! - Button polling, debouncing and the two editing modes
//! - Password verification
//! - Configuration type definitions
//! - A host-side simulator for all of the above

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod display;
pub mod input;
pub mod keypad;
pub mod password;
#[cfg(any(test, feature = "sim"))]
pub mod sim;
pub mod state;
pub mod traits;

pub use config::{ConfigError, KeypadConfig, Timing};
pub use input::Action;
pub use keypad::{Keypad, StepReport};
pub use password::{PasswordChecker, Verdict};
pub use state::{DisplayMode, KeypadState, OperatingMode};
pub use traits::{Clock, DigitalIo, InputLine, OutputLine, Slot};
