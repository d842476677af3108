//! Multiplexed 7-segment display
//!
//! Four common-anode digits share one segment bus. Only one anode is
//! enabled at a time; cycling them fast enough makes all four appear lit.

pub mod mux;
pub mod render;
pub mod segment;

pub use mux::Multiplexer;
pub use render::{RenderEngine, RenderOutcome};
