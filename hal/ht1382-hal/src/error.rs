//! Bus error vocabulary

/// Error from a bus transfer
///
/// The first three variants follow the status codes platform ports have
/// traditionally returned (-1, -2, -3). The driver does not distinguish
/// between them; they exist for the application's benefit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusError {
    /// Transfer failed
    Failed,
    /// Bus is busy
    Busy,
    /// Slave did not acknowledge the transfer
    Nack,
    /// No function bound for this operation
    Unbound,
}

impl BusError {
    /// Map a platform status code to a bus error
    ///
    /// Returns `None` for success (0 and any positive code). See
    /// [`FnTransport`](crate::FnTransport) for its use in a binding.
    pub const fn from_status(code: i8) -> Option<Self> {
        match code {
            0..=i8::MAX => None,
            -2 => Some(BusError::Busy),
            -3 => Some(BusError::Nack),
            _ => Some(BusError::Failed),
        }
    }

}

impl core::fmt::Display for BusError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            BusError::Failed => "bus transfer failed",
            BusError::Busy => "bus is busy",
            BusError::Nack => "slave did not acknowledge",
            BusError::Unbound => "no transport function bound",
        };
        f.write_str(msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(BusError::from_status(0), None);
        assert_eq!(BusError::from_status(-1), Some(BusError::Failed));
        assert_eq!(BusError::from_status(-2), Some(BusError::Busy));
        assert_eq!(BusError::from_status(-3), Some(BusError::Nack));
        assert_eq!(BusError::from_status(-100), Some(BusError::Failed));
        assert_eq!(BusError::from_status(42), None);
    }
}
