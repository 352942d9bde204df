//! Square-wave output selection (INT register FO[3:0])

use crate::error::Parameter;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Signal driven on the SQW/OUT pin
///
/// The discriminant is the value of the 4-bit FO field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum OutputWave {
    /// Output disabled
    #[default]
    Disabled = 0,
    Hz32768 = 1,
    Hz4096 = 2,
    Hz1024 = 3,
    Hz64 = 4,
    Hz32 = 5,
    Hz16 = 6,
    Hz8 = 7,
    Hz4 = 8,
    Hz2 = 9,
    Hz1 = 10,
    /// 1/2 Hz
    Period2s = 11,
    /// 1/4 Hz
    Period4s = 12,
    /// 1/8 Hz
    Period8s = 13,
    /// 1/16 Hz
    Period16s = 14,
    /// 1/32 Hz
    Period32s = 15,
}

impl OutputWave {
    /// Largest valid FO value
    pub const MAX: u8 = 15;

    /// Every selection, indexed by FO value
    pub const ALL: [OutputWave; 16] = [
        OutputWave::Disabled,
        OutputWave::Hz32768,
        OutputWave::Hz4096,
        OutputWave::Hz1024,
        OutputWave::Hz64,
        OutputWave::Hz32,
        OutputWave::Hz16,
        OutputWave::Hz8,
        OutputWave::Hz4,
        OutputWave::Hz2,
        OutputWave::Hz1,
        OutputWave::Period2s,
        OutputWave::Period4s,
        OutputWave::Period8s,
        OutputWave::Period16s,
        OutputWave::Period32s,
    ];

    /// FO field value
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Selection for an FO field value, `None` above 15
    pub const fn from_bits(bits: u8) -> Option<Self> {
        if bits > Self::MAX {
            None
        } else {
            Some(Self::ALL[bits as usize])
        }
    }

    /// Frequency as a `(numerator, denominator)` pair in Hz
    ///
    /// `Disabled` reports `(0, 1)`.
    pub const fn frequency(self) -> (u32, u32) {
        match self {
            OutputWave::Disabled => (0, 1),
            OutputWave::Hz32768 => (32768, 1),
            OutputWave::Hz4096 => (4096, 1),
            OutputWave::Hz1024 => (1024, 1),
            OutputWave::Hz64 => (64, 1),
            OutputWave::Hz32 => (32, 1),
            OutputWave::Hz16 => (16, 1),
            OutputWave::Hz8 => (8, 1),
            OutputWave::Hz4 => (4, 1),
            OutputWave::Hz2 => (2, 1),
            OutputWave::Hz1 => (1, 1),
            OutputWave::Period2s => (1, 2),
            OutputWave::Period4s => (1, 4),
            OutputWave::Period8s => (1, 8),
            OutputWave::Period16s => (1, 16),
            OutputWave::Period32s => (1, 32),
        }
    }
}

impl TryFrom<u8> for OutputWave {
    type Error = Parameter;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_bits(value).ok_or(Parameter::OutputWave)
    }
}

impl From<OutputWave> for u8 {
    fn from(wave: OutputWave) -> Self {
        wave.bits()
    }
}
