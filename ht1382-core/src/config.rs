//! Driver configuration

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default send buffer size: register address + the whole datetime block
pub const SEND_BUFFER_SIZE: usize = 9;

/// Runtime behaviour of the driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DriverConfig {
    /// Try to set the write-protect bit again when a write fails after it
    /// was cleared. The error of the failed write is still returned.
    pub reprotect_on_failure: bool,
}

impl DriverConfig {
    /// Restore write protection on failure (the default)
    pub const fn new() -> Self {
        Self {
            reprotect_on_failure: true,
        }
    }

    /// Leave write protection as the failed operation left it
    pub const fn without_reprotect() -> Self {
        Self {
            reprotect_on_failure: false,
        }
    }
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self::new()
    }
}
