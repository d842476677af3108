//! Hardware capability traits
//!
//! These traits define the interface between the keypad logic and the
//! board. Everything in this crate talks to hardware only through them.

pub mod clock;
pub mod io;

pub use clock::Clock;
pub use io::{DigitalIo, InputLine, OutputLine, Slot, SEGMENT_BITS, SLOT_COUNT};
