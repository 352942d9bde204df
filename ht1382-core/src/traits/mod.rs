//! Clock capability traits
//!
//! These traits define the interface between application code and a
//! real-time clock, so the application does not name the chip.

pub mod clock;

pub use clock::{RealTimeClock, SquareWaveOutput};
