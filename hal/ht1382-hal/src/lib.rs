//! HT1382 Transport Abstraction Layer
//!
//! This crate defines the byte transport the HT1382 driver talks through.
//! The driver only needs "send N bytes to a 7-bit address" and "receive N
//! bytes from a 7-bit address", plus optional power-up/power-down hooks.
//! Anything that can do that (a hardware I2C peripheral, an SPI bridge, a
//! bit-banged bus, an emulator) can carry the register protocol.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  ht1382-driver (protocol engine)        │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  ht1382-hal (this crate - Transport)    │
//! └─────────────────────────────────────────┘
//!                     │
//!      ┌──────────────┼──────────────┬─────────────┐
//!      ▼              ▼              ▼             ▼
//! ┌──────────┐  ┌───────────┐  ┌──────────┐  ┌───────────┐
//! │ I2cBus   │  │ SpiBus    │  │ fn ptrs  │  │ embedded- │
//! │ adapter  │  │ adapter   │  │ binding  │  │ hal I2C   │
//! └──────────┘  └───────────┘  └──────────┘  └───────────┘
//! ```
//!
//! # Traits
//!
//! - [`Transport`] - The capability the driver consumes
//! - [`i2c::I2cBus`] - I2C bus operations, wrapped by [`I2cTransport`]
//! - [`spi::SpiBus`] - SPI bus operations, wrapped by [`SpiTransport`]

#![no_std]
#![deny(unsafe_code)]

pub mod address;
pub mod binding;
pub mod embedded;
pub mod error;
pub mod i2c;
pub mod spi;
pub mod transport;

// Re-export key types at crate root for convenience
pub use address::SlaveAddress;
pub use binding::FnTransport;
pub use embedded::EmbeddedHalI2c;
pub use error::BusError;
pub use i2c::{I2cBus, I2cTransport};
pub use spi::{SpiBus, SpiTransport};
pub use transport::Transport;
