//! HT1382 protocol engine
//!
//! # Register protocol
//!
//! - Write: one send per chunk, `[start register, data...]`. The chip
//!   auto-increments its register pointer, so a chunk covers consecutive
//!   registers. Writes longer than the send buffer are split, each chunk
//!   re-sending its own start register.
//! - Read: a send of the single start register byte, then one receive of
//!   all requested bytes.
//! - Every modification is bracketed by clearing and then setting the WP
//!   bit of ST1; the chip ignores writes while WP is set.
//!
//! The driver keeps no copy of any register between calls.

use embedded_hal::i2c::I2c;
use ht1382_core::codec;
use ht1382_core::config::SEND_BUFFER_SIZE;
use ht1382_core::registers::{self, bits, reg, DATETIME_LEN, HT1382_ADDRESS, INT_FO_MASK};
use ht1382_core::{
    DateTime, DriverConfig, Error, OutputWave, Parameter, RealTimeClock, SquareWaveOutput,
};
use ht1382_hal::{EmbeddedHalI2c, Transport};

/// HT1382 driver
///
/// `BUF` is the size of the intermediate send buffer: one register address
/// byte plus up to `BUF - 1` data bytes per bus transaction. It must be at
/// least 2; the default of 9 writes the whole date/time block in one go.
pub struct Ht1382<T, const BUF: usize = SEND_BUFFER_SIZE> {
    transport: T,
    config: DriverConfig,
}

impl<T: Transport> Ht1382<T, SEND_BUFFER_SIZE> {
    /// Create a driver with the default send buffer and configuration
    pub fn new(transport: T) -> Self {
        Self::with_buffer(transport, DriverConfig::default())
    }

    /// Create a driver with the default send buffer
    pub fn with_config(transport: T, config: DriverConfig) -> Self {
        Self::with_buffer(transport, config)
    }
}

impl<I: I2c> Ht1382<EmbeddedHalI2c<I>, SEND_BUFFER_SIZE> {
    /// Create a driver on an `embedded-hal` I2C bus
    pub fn new_i2c(i2c: I) -> Self {
        Self::new(EmbeddedHalI2c::new(i2c))
    }
}

impl<T: Transport, const BUF: usize> Ht1382<T, BUF> {
    const BUFFER_FITS: () = assert!(
        BUF >= 2,
        "send buffer must hold a register address and at least one data byte"
    );

    /// Create a driver with an explicit send buffer size
    pub fn with_buffer(transport: T, config: DriverConfig) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::BUFFER_FITS;
        Self { transport, config }
    }

    /// Get the configuration
    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// Get a reference to the transport
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Get a mutable reference to the transport
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Give back the transport
    pub fn release(self) -> T {
        self.transport
    }

    /// Check the transport and run its init hook
    ///
    /// Fails with `InvalidParameter` if the transport lacks send or receive.
    pub fn init(&mut self) -> Result<(), Error<T::Error>> {
        if !self.transport.is_bound() {
            return Err(Error::InvalidParameter(Parameter::Transport));
        }
        self.transport.init().map_err(Error::TransportFailure)?;
        debug!("HT1382 transport initialized");
        Ok(())
    }

    /// Run the transport's deinit hook
    pub fn deinit(&mut self) -> Result<(), Error<T::Error>> {
        self.transport.deinit().map_err(Error::TransportFailure)?;
        debug!("HT1382 transport released");
        Ok(())
    }

    /// Set the date and time
    ///
    /// All fields are validated before anything is sent. Writing the time
    /// also clears the clock halt bit, starting the oscillator.
    pub fn set_datetime(&mut self, datetime: &DateTime) -> Result<(), Error<T::Error>> {
        datetime.validate()?;
        let block = codec::encode_datetime(datetime);

        debug!(
            "HT1382 set {=u8}/{=u8}/{=u8} {=u8}:{=u8}:{=u8}",
            datetime.year,
            datetime.month,
            datetime.day,
            datetime.hour,
            datetime.minute,
            datetime.second
        );

        self.with_write_access(|rtc| rtc.write_registers(reg::SECONDS, &block))
    }

    /// Read the date and time
    ///
    /// The values are returned as read; the chip is trusted to hold valid
    /// BCD.
    pub fn get_datetime(&mut self) -> Result<DateTime, Error<T::Error>> {
        let mut block = [0u8; DATETIME_LEN];
        self.read_registers(reg::SECONDS, &mut block)?;
        Ok(codec::decode_datetime(&block))
    }

    /// Select the square-wave output
    ///
    /// Read-modify-write of INT that touches only FO[3:0], followed by a
    /// read-back of the register.
    pub fn set_output_wave(&mut self, wave: OutputWave) -> Result<(), Error<T::Error>> {
        let current = self.read_register(reg::INT)?;
        let updated = codec::write_field(current, bits::INT_FO0, INT_FO_MASK, wave.bits());

        let (num, den) = wave.frequency();
        debug!("HT1382 output wave {=u32}/{=u32} Hz", num, den);

        self.with_write_access(|rtc| rtc.write_registers(reg::INT, &[updated]))?;

        let readback = self.read_register(reg::INT)?;
        if readback != updated {
            warn!(
                "HT1382 INT read back {=u8:#x}, expected {=u8:#x}",
                readback,
                updated
            );
        }
        Ok(())
    }

    /// Select the square-wave output by its numeric FO value (0-15)
    pub fn set_output_wave_raw(&mut self, bits: u8) -> Result<(), Error<T::Error>> {
        let wave = OutputWave::try_from(bits)?;
        self.set_output_wave(wave)
    }

    /// Read the current square-wave selection
    pub fn output_wave(&mut self) -> Result<OutputWave, Error<T::Error>> {
        let int = self.read_register(reg::INT)?;
        let fo = codec::read_field(int, bits::INT_FO0, INT_FO_MASK);
        Ok(OutputWave::ALL[fo as usize])
    }

    /// Check whether register writes are currently blocked
    pub fn is_write_protected(&mut self) -> Result<bool, Error<T::Error>> {
        let st1 = self.read_register(reg::ST1)?;
        Ok(codec::bit_is_set(st1, bits::ST1_WP))
    }

    /// Run `write` with write protection lifted
    ///
    /// Protection is set again afterwards. If `write` fails and
    /// `reprotect_on_failure` is enabled, one attempt is made to set it
    /// again before the error is returned.
    fn with_write_access<F>(&mut self, write: F) -> Result<(), Error<T::Error>>
    where
        F: FnOnce(&mut Self) -> Result<(), Error<T::Error>>,
    {
        self.write_protection(false)?;

        if let Err(e) = write(self) {
            if self.config.reprotect_on_failure && self.write_protection(true).is_err() {
                warn!("HT1382 write protection could not be restored");
            }
            return Err(e);
        }

        self.write_protection(true)
    }

    fn write_protection(&mut self, enable: bool) -> Result<(), Error<T::Error>> {
        let st1 = if enable {
            codec::set_bit(0, bits::ST1_WP)
        } else {
            0
        };
        self.write_registers(reg::ST1, &[st1])
    }

    /// Burst-write `data` starting at register `start`
    fn write_registers(&mut self, start: u8, data: &[u8]) -> Result<(), Error<T::Error>> {
        let mut buffer = [0u8; BUF];
        let mut register = start;

        for chunk in data.chunks(BUF - 1) {
            let len = chunk.len();
            buffer[0] = register;
            buffer[1..=len].copy_from_slice(chunk);

            trace!(
                "HT1382 write {=str} len {=usize}",
                registers::name(register).unwrap_or("?"),
                len
            );
            self.transport
                .send(HT1382_ADDRESS, &buffer[..=len])
                .map_err(Error::TransportFailure)?;

            register = register.wrapping_add(len as u8);
        }

        Ok(())
    }

    /// Read `buf.len()` consecutive registers starting at `start`
    fn read_registers(&mut self, start: u8, buf: &mut [u8]) -> Result<(), Error<T::Error>> {
        trace!(
            "HT1382 read {=str} len {=usize}",
            registers::name(start).unwrap_or("?"),
            buf.len()
        );
        self.transport
            .send(HT1382_ADDRESS, &[start])
            .map_err(Error::TransportFailure)?;
        self.transport
            .receive(HT1382_ADDRESS, buf)
            .map_err(Error::TransportFailure)
    }

    fn read_register(&mut self, register: u8) -> Result<u8, Error<T::Error>> {
        let mut value = [0u8; 1];
        self.read_registers(register, &mut value)?;
        Ok(value[0])
    }
}

impl<T: Transport, const BUF: usize> RealTimeClock for Ht1382<T, BUF> {
    type Error = Error<T::Error>;

    fn get_datetime(&mut self) -> Result<DateTime, Self::Error> {
        Ht1382::get_datetime(self)
    }

    fn set_datetime(&mut self, datetime: &DateTime) -> Result<(), Self::Error> {
        Ht1382::set_datetime(self, datetime)
    }
}

impl<T: Transport, const BUF: usize> SquareWaveOutput for Ht1382<T, BUF> {
    type Error = Error<T::Error>;

    fn set_output_wave(&mut self, wave: OutputWave) -> Result<(), Self::Error> {
        Ht1382::set_output_wave(self, wave)
    }
}
