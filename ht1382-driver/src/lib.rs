//! HT1382 real-time clock driver
//!
//! The driver turns the clock operations (get/set date and time, select
//! the square-wave output) into register transfers over a [`Transport`],
//! including the BCD encoding and the write-protect handshake the chip
//! requires before any register can be modified.
//!
//! - [`Ht1382`] - Protocol engine
//! - [`emulator::EmulatedHt1382`] - Register-level model of the chip for
//!   host testing and demos
//!
//! [`Transport`]: ht1382_hal::Transport

#![no_std]
#![deny(unsafe_code)]

// This must go first so the macros are visible to the other modules
mod fmt;

pub mod emulator;
pub mod ht1382;

pub use ht1382::Ht1382;
pub use ht1382_core::{
    DateTime, DriverConfig, Error, ErrorKind, OutputWave, Parameter, RealTimeClock,
    SquareWaveOutput,
};
pub use ht1382_hal::{BusError, SlaveAddress, Transport};
