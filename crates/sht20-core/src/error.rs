//! Error types for the SHT20 driver
//!
//! Every failure is reported to the caller of the operation that triggered
//! it. Nothing in this crate retries, substitutes or logs errors.

use thiserror_no_std::Error;

/// Open/close or measurement called in the wrong connection state.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StateError {
    #[error("Connection already open")]
    AlreadyOpen,
    #[error("Connection already closed")]
    AlreadyClosed,
    #[error("Connection is not open")]
    NotOpen,
}

/// Invalid input to [`crate::units::round`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InvalidArgument {
    /// Decimal places must be zero or positive
    #[error("Invalid rounding precision: {0} decimal places")]
    NegativePrecision(i32),
    /// NaN and infinities cannot be rounded
    #[error("Cannot round a non-finite value")]
    NonFinite,
}

/// The sensor sent a frame that cannot be trusted.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ProtocolError {
    #[error("Invalid response length (expected {expected} bytes, got {actual})")]
    InvalidLength { expected: usize, actual: usize },
    #[error("CRC check failed (expected {expected:#04x}, received {actual:#04x})")]
    ChecksumMismatch { expected: u8, actual: u8 },
}

/// The bus transport failed, or delivered less data than requested.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TransportError<E> {
    #[error("Bus error: {0:?}")]
    Bus(E),
    #[error("Expected to read {expected} bytes, but only read {actual} bytes")]
    ShortRead { expected: usize, actual: usize },
}

/// Any error returned by the sequencer, generic over the transport error.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Sht20Error<E> {
    #[error("State error: {0}")]
    State(StateError),
    #[error("Invalid argument: {0}")]
    InvalidArgument(InvalidArgument),
    #[error("Protocol error: {0}")]
    Protocol(ProtocolError),
    #[error("Transport error: {0}")]
    Transport(TransportError<E>),
}

impl<E> From<StateError> for Sht20Error<E> {
    fn from(value: StateError) -> Self {
        Self::State(value)
    }
}

impl<E> From<InvalidArgument> for Sht20Error<E> {
    fn from(value: InvalidArgument) -> Self {
        Self::InvalidArgument(value)
    }
}

impl<E> From<ProtocolError> for Sht20Error<E> {
    fn from(value: ProtocolError) -> Self {
        Self::Protocol(value)
    }
}

impl<E> From<TransportError<E>> for Sht20Error<E> {
    fn from(value: TransportError<E>) -> Self {
        Self::Transport(value)
    }
}

impl<E> Sht20Error<E> {
    /// Wrap a raw transport error.
    pub fn bus(error: E) -> Self {
        Self::Transport(TransportError::Bus(error))
    }

    /// Whether repeating the measurement may succeed.
    ///
    /// Corrupted frames and bus failures are transient; state and argument
    /// errors need the caller to change what it is doing.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Protocol(_) | Self::Transport(_))
    }
}
