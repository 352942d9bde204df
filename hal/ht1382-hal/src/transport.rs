//! The transport capability consumed by the driver

use crate::SlaveAddress;

/// Byte transport to an addressed slave
///
/// `send` and `receive` are mandatory. `init` and `deinit` are optional
/// hooks for powering the bus up and down; the defaults do nothing.
///
/// A read of register data is always issued by the driver as a `send` of
/// the start register followed by a `receive`, so the transport is free to
/// merge the two into a repeated-start transaction if the hardware needs it.
pub trait Transport {
    /// Error type reported by the transport
    type Error;

    /// Whether the mandatory operations are actually available
    ///
    /// Transports built from optional bindings (see [`FnTransport`]) return
    /// `false` when `send` or `receive` is missing.
    ///
    /// [`FnTransport`]: crate::FnTransport
    fn is_bound(&self) -> bool {
        true
    }

    /// Bring up the bus
    fn init(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Tear down the bus
    fn deinit(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Write `data` to the slave at `address`
    fn send(&mut self, address: SlaveAddress, data: &[u8]) -> Result<(), Self::Error>;

    /// Fill `buf` with bytes read from the slave at `address`
    fn receive(&mut self, address: SlaveAddress, buf: &mut [u8]) -> Result<(), Self::Error>;
}

impl<T: Transport + ?Sized> Transport for &mut T {
    type Error = T::Error;

    fn is_bound(&self) -> bool {
        (**self).is_bound()
    }

    fn init(&mut self) -> Result<(), Self::Error> {
        (**self).init()
    }

    fn deinit(&mut self) -> Result<(), Self::Error> {
        (**self).deinit()
    }

    fn send(&mut self, address: SlaveAddress, data: &[u8]) -> Result<(), Self::Error> {
        (**self).send(address, data)
    }

    fn receive(&mut self, address: SlaveAddress, buf: &mut [u8]) -> Result<(), Self::Error> {
        (**self).receive(address, buf)
    }
}
