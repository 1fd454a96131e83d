//! The error type shared by every operation in this crate.

use core::fmt;
use std::error::Error as StdError;
use std::result;

/// Enumerates every way an operation in this crate can fail.
///
/// There is deliberately no catch-all `Other` variant: the contract in
/// each module names exactly which of these kinds it can raise, and a
/// caller matching on this enum should be able to rely on that list being
/// exhaustive.
#[derive(Debug)]
pub enum Error {
    /// A caller-supplied value violated a documented precondition: a tile
    /// code out of range, an exhausted multiplicity slot, a malformed
    /// `Interval`, an oversized bit-width, a non-positive `sample_below`
    /// upper bound, and so on.
    InvalidArgument(String),
    /// BigInt division or remainder with a zero divisor.
    DivisionByZero,
    /// Narrowing a negative `BigInt` to `u64`.
    Underflow,
    /// Narrowing a `BigInt` greater than `u64::MAX` to `u64`.
    Overflow,
    /// An invariant this crate's algorithms require internally did not
    /// hold. This indicates a bug, not a bad caller input; it is not
    /// meant to be recovered from. The payload names the specific
    /// post-condition that failed and the operands involved.
    Logic(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument(msg) => write!(f, "invalid argument: {}", msg),
            Error::DivisionByZero => write!(f, "division by zero"),
            Error::Underflow => write!(f, "value is negative and cannot be narrowed to u64"),
            Error::Overflow => write!(f, "value exceeds u64::MAX and cannot be narrowed to u64"),
            Error::Logic(msg) => write!(f, "logic error: {}", msg),
        }
    }
}

impl StdError for Error {}

/// This crate's result alias. Every public operation returns one of these.
pub type Result<T> = result::Result<T, Error>;

/// Convenience constructor for [`Error::InvalidArgument`].
pub(crate) fn invalid_argument<T>(msg: impl Into<String>) -> Result<T> {
    Err(Error::InvalidArgument(msg.into()))
}

/// Builds an `Error::InvalidArgument` value directly, for call sites that
/// need to produce the error itself rather than an `Err(..)` (e.g. inside
/// `Result::map_err`).
pub(crate) fn invalid_argument_value(msg: impl Into<String>) -> Error {
    Error::InvalidArgument(msg.into())
}

/// Convenience constructor for [`Error::Logic`].
///
/// Also logs the failure at `error` level before returning it, so the
/// full-precision operands that produced the failure are not lost once
/// the caller only prints the error's `Display` form (they may be large
/// `BigInt`s that a caller truncates or omits when reporting the error
/// upward).
pub(crate) fn logic_error<T>(msg: impl Into<String>) -> Result<T> {
    let msg = msg.into();
    log::error!("paishan: internal invariant violated: {}", msg);
    Err(Error::Logic(msg))
}
