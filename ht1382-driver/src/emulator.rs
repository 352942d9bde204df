//! Register-level HT1382 emulator
//!
//! Behaves like the chip as seen from the bus, minus timekeeping:
//!
//! - The first byte of every send sets the register pointer; the rest are
//!   written to consecutive registers.
//! - A receive reads consecutive registers from the pointer.
//! - The pointer wraps after the last register (USR4).
//! - While ST1.WP is set, writes to anything but ST1 are dropped.
//!
//! Every transport call is recorded, and any call up to index
//! [`MAX_FAIL_CALL`] can be made to fail, which makes it suitable for
//! checking exact bus traffic in tests.

use heapless::Vec;
use ht1382_core::codec;
use ht1382_core::registers::{bits, reg, HT1382_ADDRESS, REGISTER_COUNT};
use ht1382_hal::{BusError, SlaveAddress, Transport};

/// Maximum number of recorded transactions
pub const LOG_CAPACITY: usize = 64;

/// Highest call index that can be made to fail
pub const MAX_FAIL_CALL: usize = 63;

/// Maximum number of bytes recorded per send
pub const MAX_LOGGED_BYTES: usize = 32;

/// A recorded transport call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transaction {
    /// Bytes sent (register pointer first)
    Send {
        address: u8,
        bytes: Vec<u8, MAX_LOGGED_BYTES>,
    },
    /// Number of bytes requested
    Receive { address: u8, len: usize },
}

impl Transaction {
    /// Bytes of a send, `None` for a receive
    pub fn sent_bytes(&self) -> Option<&[u8]> {
        match self {
            Transaction::Send { bytes, .. } => Some(bytes.as_slice()),
            Transaction::Receive { .. } => None,
        }
    }
}

/// Emulated HT1382 behind a [`Transport`]
#[derive(Debug, Clone)]
pub struct EmulatedHt1382 {
    registers: [u8; REGISTER_COUNT],
    pointer: u8,
    powered: bool,
    calls: usize,
    fail_calls: u64,
    fail_hooks: bool,
    log: Vec<Transaction, LOG_CAPACITY>,
    log_overflowed: bool,
}

impl Default for EmulatedHt1382 {
    fn default() -> Self {
        Self::new()
    }
}

impl EmulatedHt1382 {
    /// Create an emulator in its power-on state: all registers zero except
    /// ST1, which has write protection set
    pub fn new() -> Self {
        let mut registers = [0u8; REGISTER_COUNT];
        registers[reg::ST1 as usize] = codec::set_bit(0, bits::ST1_WP);

        Self {
            registers,
            pointer: 0,
            powered: false,
            calls: 0,
            fail_calls: 0,
            fail_hooks: false,
            log: Vec::new(),
            log_overflowed: false,
        }
    }

    /// Make the `n`-th transport call (0-based, counting sends and
    /// receives since creation) fail with [`BusError::Failed`]
    ///
    /// Can be called repeatedly to fail several calls.
    ///
    /// # Panics
    ///
    /// Panics if `n` is above [`MAX_FAIL_CALL`].
    pub fn fail_call(&mut self, n: usize) {
        assert!(n <= MAX_FAIL_CALL, "call index {} out of range", n);
        self.fail_calls |= 1 << n;
    }

    /// Make the init and deinit hooks fail with [`BusError::Failed`]
    pub fn fail_hooks(&mut self, fail: bool) {
        self.fail_hooks = fail;
    }

    /// Current register file
    pub fn registers(&self) -> &[u8; REGISTER_COUNT] {
        &self.registers
    }

    /// Read a register directly, bypassing the bus
    ///
    /// # Panics
    ///
    /// Panics if `address` is outside the register map (0x15 and up).
    pub fn register(&self, address: u8) -> u8 {
        self.registers[address as usize]
    }

    /// Write a register directly, bypassing the bus and write protection
    ///
    /// # Panics
    ///
    /// Panics if `address` is outside the register map (0x15 and up).
    pub fn set_register(&mut self, address: u8, value: u8) {
        self.registers[address as usize] = value;
    }

    /// Whether the init hook ran more recently than deinit
    pub fn is_powered(&self) -> bool {
        self.powered
    }

    /// Number of send/receive calls made, including failed ones
    pub fn call_count(&self) -> usize {
        self.calls
    }

    /// Recorded transport calls, including failed ones
    ///
    /// Holds at most [`LOG_CAPACITY`] entries; check [`log_overflowed`]
    /// before relying on it being complete.
    ///
    /// [`log_overflowed`]: Self::log_overflowed
    pub fn log(&self) -> &[Transaction] {
        &self.log
    }

    /// Whether calls were dropped from the log since it was last cleared
    pub fn log_overflowed(&self) -> bool {
        self.log_overflowed
    }

    /// Forget recorded calls (the call counter keeps running)
    pub fn clear_log(&mut self) {
        self.log.clear();
        self.log_overflowed = false;
    }

    fn record(&mut self, transaction: Transaction) {
        if self.log.push(transaction).is_err() {
            self.log_overflowed = true;
        }
    }

    fn write_protected(&self) -> bool {
        codec::bit_is_set(self.registers[reg::ST1 as usize], bits::ST1_WP)
    }

    fn advance(&mut self) {
        self.pointer = (self.pointer + 1) % REGISTER_COUNT as u8;
    }

    /// Count the call and decide whether it fails
    fn begin_call(&mut self, address: SlaveAddress) -> Result<(), BusError> {
        let index = self.calls;
        self.calls += 1;

        if index <= MAX_FAIL_CALL && self.fail_calls & (1 << index) != 0 {
            return Err(BusError::Failed);
        }
        if address != HT1382_ADDRESS {
            return Err(BusError::Nack);
        }
        Ok(())
    }
}

impl Transport for EmulatedHt1382 {
    type Error = BusError;

    fn init(&mut self) -> Result<(), BusError> {
        if self.fail_hooks {
            return Err(BusError::Failed);
        }
        self.powered = true;
        Ok(())
    }

    fn deinit(&mut self) -> Result<(), BusError> {
        if self.fail_hooks {
            return Err(BusError::Failed);
        }
        self.powered = false;
        Ok(())
    }

    fn send(&mut self, address: SlaveAddress, data: &[u8]) -> Result<(), BusError> {
        let mut bytes = Vec::new();
        let logged = data.len().min(MAX_LOGGED_BYTES);
        // Capacity is checked by the slice length above
        let _ = bytes.extend_from_slice(&data[..logged]);
        self.record(Transaction::Send {
            address: address.seven_bit(),
            bytes,
        });

        self.begin_call(address)?;

        let Some((&pointer, payload)) = data.split_first() else {
            // Address-only write: the chip just acknowledges
            return Ok(());
        };
        if pointer as usize >= REGISTER_COUNT {
            return Err(BusError::Nack);
        }

        self.pointer = pointer;
        for &byte in payload {
            if self.pointer == reg::ST1 || !self.write_protected() {
                self.registers[self.pointer as usize] = byte;
            }
            self.advance();
        }
        Ok(())
    }

    fn receive(&mut self, address: SlaveAddress, buf: &mut [u8]) -> Result<(), BusError> {
        self.record(Transaction::Receive {
            address: address.seven_bit(),
            len: buf.len(),
        });

        self.begin_call(address)?;

        for byte in buf.iter_mut() {
            *byte = self.registers[self.pointer as usize];
            self.advance();
        }
        Ok(())
    }
}
