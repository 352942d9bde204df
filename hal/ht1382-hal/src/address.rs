//! 7-bit slave addressing

/// A validated 7-bit bus address (0-127)
///
/// On the wire the address occupies the upper seven bits of the first byte
/// of a transaction and the low bit selects the direction. Transports that
/// put raw bytes on the wire use [`write_frame`](Self::write_frame) and
/// [`read_frame`](Self::read_frame); transports whose peripheral does the
/// framing use [`seven_bit`](Self::seven_bit).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SlaveAddress(u8);

impl SlaveAddress {
    /// Highest valid 7-bit address
    pub const MAX: u8 = 0x7F;

    /// Direction bit for a write transaction
    pub const WRITE_BIT: u8 = 0;

    /// Direction bit for a read transaction
    pub const READ_BIT: u8 = 1;

    /// Create an address, returning `None` if it does not fit in 7 bits
    pub const fn new(address: u8) -> Option<Self> {
        if address > Self::MAX {
            None
        } else {
            Some(Self(address))
        }
    }

    /// The plain 7-bit address
    pub const fn seven_bit(self) -> u8 {
        self.0
    }

    /// Address byte for a write transaction (`addr << 1 | 0`)
    pub const fn write_frame(self) -> u8 {
        (self.0 << 1) | Self::WRITE_BIT
    }

    /// Address byte for a read transaction (`addr << 1 | 1`)
    pub const fn read_frame(self) -> u8 {
        (self.0 << 1) | Self::READ_BIT
    }
}

impl TryFrom<u8> for SlaveAddress {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(value)
    }
}

impl From<SlaveAddress> for u8 {
    fn from(address: SlaveAddress) -> Self {
        address.seven_bit()
    }
}
