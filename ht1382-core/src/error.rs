//! Driver error types

/// Caller-supplied value that failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Parameter {
    Second,
    Minute,
    Hour,
    WeekDay,
    Day,
    Month,
    Year,
    /// Square-wave selector above 15
    OutputWave,
    /// Transport has no send or receive operation
    Transport,
}

/// Error returned by driver operations
///
/// `E` is the transport's own error, passed through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// A value was out of range; nothing was sent on the bus
    InvalidParameter(Parameter),
    /// The transport reported a failure
    TransportFailure(E),
}

/// The two error categories, without payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ErrorKind {
    InvalidParameter,
    TransportFailure,
}

impl<E> Error<E> {
    /// Category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidParameter(_) => ErrorKind::InvalidParameter,
            Error::TransportFailure(_) => ErrorKind::TransportFailure,
        }
    }
}

impl<E> From<Parameter> for Error<E> {
    fn from(param: Parameter) -> Self {
        Error::InvalidParameter(param)
    }
}

impl<E: core::fmt::Debug> core::fmt::Display for Error<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::InvalidParameter(param) => write!(f, "invalid parameter: {:?}", param),
            Error::TransportFailure(e) => write!(f, "transport failure: {:?}", e),
        }
    }
}
