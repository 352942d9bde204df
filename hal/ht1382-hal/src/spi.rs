//! SPI bus abstractions
//!
//! Some boards reach the RTC through an SPI-to-two-wire bridge or a
//! framed SPI link. There the address byte travels on the wire like any
//! other byte, so the adapter prepends the direction-tagged frame byte.

use crate::{SlaveAddress, Transport};

/// SPI bus master
///
/// Provides basic SPI transfer operations for communicating with
/// peripheral devices.
pub trait SpiBus {
    /// Error type for SPI operations
    type Error;

    /// Write data without reading
    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Read data (writes zeros)
    fn read(&mut self, buf: &mut [u8]) -> Result<(), Self::Error>;

    /// Assert chip select before a transaction
    fn select(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Release chip select after a transaction
    fn deselect(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// [`Transport`] over an [`SpiBus`]
///
/// Every transaction is `select`, frame byte, payload, `deselect`. Chip
/// select is released even when the payload transfer fails.
#[derive(Debug)]
pub struct SpiTransport<B> {
    bus: B,
}

impl<B: SpiBus> SpiTransport<B> {
    /// Wrap an SPI bus
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

    fn framed<F>(&mut self, frame: u8, body: F) -> Result<(), B::Error>
    where
        F: FnOnce(&mut B) -> Result<(), B::Error>,
    {
        self.bus.select()?;
        let result = self.bus.write(&[frame]).and_then(|_| body(&mut self.bus));
        let released = self.bus.deselect();
        result.and(released)
    }
}

impl<B: SpiBus> Transport for SpiTransport<B> {
    type Error = B::Error;

    fn send(&mut self, address: SlaveAddress, data: &[u8]) -> Result<(), Self::Error> {
        self.framed(address.write_frame(), |bus| bus.write(data))
    }

    fn receive(&mut self, address: SlaveAddress, buf: &mut [u8]) -> Result<(), Self::Error> {
        self.framed(address.read_frame(), |bus| bus.read(buf))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct WireBus {
        wire: [u8; 16],
        len: usize,
        selected: bool,
        fail_reads: bool,
    }

    impl SpiBus for WireBus {
        type Error = ();

        fn write(&mut self, data: &[u8]) -> Result<(), ()> {
            assert!(self.selected);
            self.wire[self.len..self.len + data.len()].copy_from_slice(data);
            self.len += data.len();
            Ok(())
        }

        fn read(&mut self, buf: &mut [u8]) -> Result<(), ()> {
            if self.fail_reads {
                return Err(());
            }
            buf.fill(0x42);
            Ok(())
        }

        fn select(&mut self) -> Result<(), ()> {
            self.selected = true;
            Ok(())
        }

        fn deselect(&mut self) -> Result<(), ()> {
            self.selected = false;
            Ok(())
        }
    }

    #[test]
    fn test_write_frame_precedes_payload() {
        let addr = SlaveAddress::new(0x68).unwrap();
        let mut transport = SpiTransport::new(WireBus::default());

        transport.send(addr, &[0x09, 0x0A]).unwrap();

        let bus = transport.bus();
        assert_eq!(&bus.wire[..bus.len], &[0xD0, 0x09, 0x0A]);
        assert!(!bus.selected);
    }

    #[test]
    fn test_read_frame_has_direction_bit() {
        let addr = SlaveAddress::new(0x68).unwrap();
        let mut transport = SpiTransport::new(WireBus::default());

        let mut buf = [0u8; 3];
        transport.receive(addr, &mut buf).unwrap();

        assert_eq!(buf, [0x42; 3]);
        let bus = transport.bus();
        assert_eq!(&bus.wire[..bus.len], &[0xD1]);
    }

    #[test]
    fn test_deselects_after_failure() {
        let addr = SlaveAddress::new(0x68).unwrap();
        let mut transport = SpiTransport::new(WireBus {
            fail_reads: true,
            ..Default::default()
        });

        let mut buf = [0u8; 1];
        assert_eq!(transport.receive(addr, &mut buf), Err(()));
        assert!(!transport.release().selected);
    }
}
