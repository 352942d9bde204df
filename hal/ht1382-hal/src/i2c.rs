//! I2C bus abstractions
//!
//! Provides the I2C master trait chip-specific HALs implement, and the
//! adapter that turns such a bus into a [`Transport`].

use crate::{SlaveAddress, Transport};

/// I2C bus master
///
/// Provides basic I2C read/write operations for communicating with
/// peripheral devices.
pub trait I2cBus {
    /// Error type for I2C operations
    type Error;

    /// Write data to a device at the given address
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address
    /// * `data` - Bytes to write
    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error>;

    /// Read data from a device at the given address
    ///
    /// # Arguments
    /// * `address` - 7-bit I2C address
    /// * `buf` - Buffer to read into
    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), Self::Error>;

    /// Power up the peripheral
    fn enable(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Power down the peripheral
    fn disable(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// [`Transport`] over an [`I2cBus`]
///
/// The peripheral generates the address byte itself, so the 7-bit address
/// is handed over unchanged. `init`/`deinit` map to `enable`/`disable`.
#[derive(Debug)]
pub struct I2cTransport<B> {
    bus: B,
}

impl<B: I2cBus> I2cTransport<B> {
    /// Wrap an I2C bus
    pub fn new(bus: B) -> Self {
        Self { bus }
    }

    /// Get a reference to the underlying bus
    pub fn bus(&self) -> &B {
        &self.bus
    }

    /// Give back the underlying bus
    pub fn release(self) -> B {
        self.bus
    }
}

impl<B: I2cBus> Transport for I2cTransport<B> {
    type Error = B::Error;

    fn init(&mut self) -> Result<(), Self::Error> {
        self.bus.enable()
    }

    fn deinit(&mut self) -> Result<(), Self::Error> {
        self.bus.disable()
    }

    fn send(&mut self, address: SlaveAddress, data: &[u8]) -> Result<(), Self::Error> {
        self.bus.write(address.seven_bit(), data)
    }

    fn receive(&mut self, address: SlaveAddress, buf: &mut [u8]) -> Result<(), Self::Error> {
        self.bus.read(address.seven_bit(), buf)
    }
}
