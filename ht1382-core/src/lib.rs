//! Board-agnostic core of the HT1382 real-time clock driver
//!
//! This crate contains everything about the chip that does not touch the
//! bus:
//!
//! - Register map and bit positions
//! - Register codec (BCD and bit-field packing)
//! - Date/time and square-wave output types
//! - Error types and driver configuration
//! - Clock capability traits

#![no_std]
#![deny(unsafe_code)]

pub mod codec;
pub mod config;
pub mod datetime;
pub mod error;
pub mod registers;
pub mod traits;
pub mod wave;

pub use config::DriverConfig;
pub use datetime::DateTime;
pub use error::{Error, ErrorKind, Parameter};
pub use registers::HT1382_ADDRESS;
pub use traits::{RealTimeClock, SquareWaveOutput};
pub use wave::OutputWave;
