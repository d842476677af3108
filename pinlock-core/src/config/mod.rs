//! Configuration types
//!
//! Board-agnostic configuration: the stored password and the software
//! timing constants. The firmware fills these in at build time from
//! `keypad.toml`.

pub mod types;

pub use types::*;
