//! Pinlock Hardware Abstraction Layer
//!
//! This crate defines the hardware traits a board must provide to run the
//! keypad: plain digital pins and a blocking delay. Chip support lives
//! elsewhere; `pinlock-drivers` turns these traits into the capabilities
//! consumed by `pinlock-core`.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  pinlock-firmware (board wiring)        │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  pinlock-drivers (PinBoard, DelayClock) │
//! └─────────────────────────────────────────┘
//!           │                     │
//!           ▼                     ▼
//! ┌───────────────────┐   ┌───────────────────┐
//! │ pinlock-hal       │   │ pinlock-core      │
//! │ (this crate)      │   │ (DigitalIo/Clock) │
//! └───────────────────┘   └───────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`delay::Delay`] - Blocking microsecond/millisecond delays

#![no_std]
#![deny(unsafe_code)]

pub mod delay;
pub mod gpio;

// Re-export key traits at crate root for convenience
pub use delay::Delay;
pub use gpio::{InputPin, OutputPin};
