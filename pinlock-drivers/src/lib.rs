//! Board bindings
//!
//! This crate connects real pins and delays to the capabilities defined
//! in `pinlock-core`:
//!
//! - [`board::PinBoard`] - `DigitalIo` over HAL input/output pins
//! - [`clock::DelayClock`] - `Clock` over a HAL delay
//! - [`eh`] - adapters from `embedded-hal` 1.0 pins and delays to the HAL traits

#![no_std]
#![deny(unsafe_code)]

pub mod board;
pub mod clock;
pub mod eh;

pub use board::{BoardPins, PinBoard};
pub use clock::DelayClock;
pub use eh::{EhDelay, EhInput, EhOutput};
