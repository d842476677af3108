//! Button polling and editing
//!
//! One poll per loop iteration. A press must survive a settle window to
//! count, and a single latch shared by all buttons allows one action per
//! press-release cycle.

pub mod action;
pub mod handler;

pub use action::Action;
pub use handler::InputHandler;
