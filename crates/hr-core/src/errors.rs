//! Error types for hrleave.
//!
//! Every fallible operation in the workspace returns [`Result`].  Counting
//! operations never fail; errors come from date construction, parsing, and
//! configuration.

use thiserror::Error;

/// The top-level error type used throughout hrleave.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Date out of the representable range or not a real calendar date.
    #[error("date error: {0}")]
    Date(String),

    /// A date string could not be parsed.
    #[error("cannot parse {input:?} as a date: {reason}")]
    Parse {
        /// The offending input.
        input: String,
        /// What went wrong.
        reason: String,
    },

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Invalid calendar configuration.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// Build a [`Error::Parse`] for `input`.
    pub fn parse(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::Parse {
            input: input.into(),
            reason: reason.into(),
        }
    }
}

/// Shorthand `Result` type used throughout hrleave.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return early with `Err(Error::InvalidArgument(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use hr_core::{ensure, errors::Result};
/// fn month(m: u8) -> Result<u8> {
///     ensure!((1..=12).contains(&m), "month {m} out of range [1, 12]");
///     Ok(m)
/// }
/// assert!(month(12).is_ok());
/// assert!(month(13).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidArgument(
                format!($($msg)*)
            ));
        }
    };
}

/// Return `Err(Error::Config(...))` immediately.
///
/// # Example
/// ```
/// use hr_core::{fail, errors::Result};
/// fn always_err() -> Result<()> {
///     fail!("no holidays configured");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Config(format!($($msg)*)))
    };
}
