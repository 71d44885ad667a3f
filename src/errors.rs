/// The [`keccak_sponge`](crate) package has a single error type, [`HashError`].
///
/// Two kinds of errors can happen:
///
/// - Invalid parameters ([`HashError::InvalidParameter`]):
///   the caller asked for an output size, a capacity or a padding suffix
///   that the sponge cannot provide. Raised at construction time only.
///
/// - Internal errors ([`HashError::InternalError`]):
///   an invariant of the sponge itself does not hold.
///   This is a programming defect, never a recoverable runtime condition.
///
/// Absorbing and squeezing are total: once a hasher exists, no operation on it can fail.
/// Finalisation consumes the hasher (or works on a copy of it),
/// so using a hasher after it has been finalised does not type-check.
///
/// A [`core::result::Result`] wrapper called [`HashResult`] (having error fixed to [`HashError`]) is also provided.
use std::{error::Error, fmt::Display};

/// An error happened when configuring or running the sponge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HashError {
    /// The requested parameters are not supported.
    InvalidParameter(String),
    /// An internal invariant of the sponge was violated.
    InternalError(String),
}

/// The result type for fallible sponge operations.
pub type HashResult<T> = Result<T, HashError>;

impl Display for HashError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidParameter(msg) => write!(f, "Invalid parameter: {msg}"),
            Self::InternalError(msg) => write!(f, "Internal error: {msg}"),
        }
    }
}

impl Error for HashError {}

impl HashError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }

    pub(crate) fn internal(msg: impl Into<String>) -> Self {
        let msg = msg.into();
        log::error!("sponge invariant violated: {msg}");
        Self::InternalError(msg)
    }
}
