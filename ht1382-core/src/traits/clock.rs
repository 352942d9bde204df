//! Real-time clock traits

use crate::datetime::DateTime;
use crate::wave::OutputWave;

/// Wall-clock date and time source
pub trait RealTimeClock {
    /// Error type for clock operations
    type Error;

    /// Read the current date and time
    ///
    /// Takes `&mut self` because reading requires bus access.
    fn get_datetime(&mut self) -> Result<DateTime, Self::Error>;

    /// Set the current date and time
    fn set_datetime(&mut self, datetime: &DateTime) -> Result<(), Self::Error>;
}

/// Programmable square-wave output pin
pub trait SquareWaveOutput {
    /// Error type for output configuration
    type Error;

    /// Select the signal driven on the output pin
    fn set_output_wave(&mut self, wave: OutputWave) -> Result<(), Self::Error>;

    /// Stop driving the output pin
    fn disable_output_wave(&mut self) -> Result<(), Self::Error> {
        self.set_output_wave(OutputWave::Disabled)
    }
}
