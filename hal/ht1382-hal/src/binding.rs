//! Function-pointer transport binding
//!
//! Board support code that already exposes plain functions for bus access
//! can link them into an [`FnTransport`] instead of writing a type. Send
//! and receive are mandatory, init and deinit are optional.
//!
//! Functions returning a platform status code are adapted with
//! [`BusError::from_status`]:
//!
//! ```
//! use ht1382_hal::{BusError, FnTransport, SlaveAddress, Transport};
//!
//! // Board support: 0 on success, -1/-2/-3 on failure
//! fn board_i2c_write(_addr: u8, _data: &[u8]) -> i8 {
//!     -3
//! }
//!
//! fn board_i2c_read(_addr: u8, buf: &mut [u8]) -> i8 {
//!     buf.fill(0);
//!     0
//! }
//!
//! fn send(address: SlaveAddress, data: &[u8]) -> Result<(), BusError> {
//!     match BusError::from_status(board_i2c_write(address.seven_bit(), data)) {
//!         Some(err) => Err(err),
//!         None => Ok(()),
//!     }
//! }
//!
//! fn receive(address: SlaveAddress, buf: &mut [u8]) -> Result<(), BusError> {
//!     match BusError::from_status(board_i2c_read(address.seven_bit(), buf)) {
//!         Some(err) => Err(err),
//!         None => Ok(()),
//!     }
//! }
//!
//! let mut transport = FnTransport::new().link_send(send).link_receive(receive);
//! assert!(transport.is_bound());
//!
//! let address = SlaveAddress::new(0x68).unwrap();
//! assert_eq!(transport.send(address, &[0x00]), Err(BusError::Nack));
//! ```

use crate::{BusError, SlaveAddress, Transport};

/// Init/deinit hook
pub type HookFn = fn() -> Result<(), BusError>;

/// Send hook: 7-bit address and the bytes to write
pub type SendFn = fn(SlaveAddress, &[u8]) -> Result<(), BusError>;

/// Receive hook: 7-bit address and the buffer to fill
pub type ReceiveFn = fn(SlaveAddress, &mut [u8]) -> Result<(), BusError>;

/// [`Transport`] assembled from individually linked functions
///
/// Unlinked mandatory functions make [`Transport::is_bound`] return
/// `false` and fail with [`BusError::Unbound`] if called anyway.
#[derive(Clone, Copy, Default)]
pub struct FnTransport {
    init: Option<HookFn>,
    deinit: Option<HookFn>,
    send: Option<SendFn>,
    receive: Option<ReceiveFn>,
}

impl FnTransport {
    /// Create a binding with nothing linked
    pub const fn new() -> Self {
        Self {
            init: None,
            deinit: None,
            send: None,
            receive: None,
        }
    }

    /// Link the init hook
    pub const fn link_init(mut self, f: HookFn) -> Self {
        self.init = Some(f);
        self
    }

    /// Link the deinit hook
    pub const fn link_deinit(mut self, f: HookFn) -> Self {
        self.deinit = Some(f);
        self
    }

    /// Link the send function
    pub const fn link_send(mut self, f: SendFn) -> Self {
        self.send = Some(f);
        self
    }

    /// Link the receive function
    pub const fn link_receive(mut self, f: ReceiveFn) -> Self {
        self.receive = Some(f);
        self
    }
}

impl core::fmt::Debug for FnTransport {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FnTransport")
            .field("init", &self.init.is_some())
            .field("deinit", &self.deinit.is_some())
            .field("send", &self.send.is_some())
            .field("receive", &self.receive.is_some())
            .finish()
    }
}

impl Transport for FnTransport {
    type Error = BusError;

    fn is_bound(&self) -> bool {
        self.send.is_some() && self.receive.is_some()
    }

    fn init(&mut self) -> Result<(), BusError> {
        self.init.map_or(Ok(()), |f| f())
    }

    fn deinit(&mut self) -> Result<(), BusError> {
        self.deinit.map_or(Ok(()), |f| f())
    }

    fn send(&mut self, address: SlaveAddress, data: &[u8]) -> Result<(), BusError> {
        let send = self.send.ok_or(BusError::Unbound)?;
        send(address, data)
    }

    fn receive(&mut self, address: SlaveAddress, buf: &mut [u8]) -> Result<(), BusError> {
        let receive = self.receive.ok_or(BusError::Unbound)?;
        receive(address, buf)
    }
}
