//! Keypad configuration compiled in from keypad.toml
//!
//! build.rs has already rejected out-of-range values, so `Keypad::new`
//! only fails here if the generated file and the core rules drift apart.

include!(concat!(env!("OUT_DIR"), "/keypad_config.rs"));
