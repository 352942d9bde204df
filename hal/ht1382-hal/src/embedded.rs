//! Bridge to `embedded-hal` 1.0 blocking I2C
//!
//! Lets any chip HAL that implements [`embedded_hal::i2c::I2c`] drive the
//! RTC without further glue.

use embedded_hal::i2c::I2c;

use crate::{SlaveAddress, Transport};

/// [`Transport`] over an `embedded-hal` I2C master
#[derive(Debug)]
pub struct EmbeddedHalI2c<I> {
    i2c: I,
}

impl<I: I2c> EmbeddedHalI2c<I> {
    /// Wrap an `embedded-hal` I2C bus
    pub fn new(i2c: I) -> Self {
        Self { i2c }
    }

    /// Give back the underlying bus
    pub fn release(self) -> I {
        self.i2c
    }
}

impl<I: I2c> Transport for EmbeddedHalI2c<I> {
    type Error = I::Error;

    fn send(&mut self, address: SlaveAddress, data: &[u8]) -> Result<(), Self::Error> {
        self.i2c.write(address.seven_bit(), data)
    }

    fn receive(&mut self, address: SlaveAddress, buf: &mut [u8]) -> Result<(), Self::Error> {
        self.i2c.read(address.seven_bit(), buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::i2c::{ErrorKind, ErrorType, Operation};

    /// Answers every read with an incrementing byte pattern
    #[derive(Default)]
    struct CountingI2c {
        address: Option<u8>,
        writes: usize,
        next: u8,
    }

    impl ErrorType for CountingI2c {
        type Error = ErrorKind;
    }

    impl I2c for CountingI2c {
        fn transaction(
            &mut self,
            address: u8,
            operations: &mut [Operation<'_>],
        ) -> Result<(), Self::Error> {
            self.address = Some(address);
            for op in operations {
                match op {
                    Operation::Write(_) => self.writes += 1,
                    Operation::Read(buf) => {
                        for byte in buf.iter_mut() {
                            *byte = self.next;
                            self.next = self.next.wrapping_add(1);
                        }
                    }
                }
            }
            Ok(())
        }
    }

    #[test]
    fn test_send_and_receive() {
        let addr = SlaveAddress::new(0x68).unwrap();
        let mut transport = EmbeddedHalI2c::new(CountingI2c::default());

        transport.send(addr, &[0x00]).unwrap();
        let mut buf = [0u8; 3];
        transport.receive(addr, &mut buf).unwrap();

        assert_eq!(buf, [0, 1, 2]);
        let i2c = transport.release();
        assert_eq!(i2c.address, Some(0x68));
        assert_eq!(i2c.writes, 1);
    }
}
