//! Error types for workdays.
//!
//! Every fallible operation in the workspace returns [`Result`], whose error
//! side is a single `thiserror`-derived enum.  Precondition checks go
//! through the [`ensure!`](crate::ensure) macro.
//!
//! Storage failures have their own type in `wd-time`; the holiday store logs
//! them and they never reach the caller.

use thiserror::Error;

/// The top-level error type used throughout workdays.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// User input that could not be parsed (date string, day offset).
    #[error("cannot parse {what} from {input:?}")]
    Parse {
        /// What was expected (e.g. `"date"`).
        what: &'static str,
        /// The offending input, verbatim.
        input: String,
    },

    /// Date-related error (invalid triple, arithmetic out of range).
    #[error("date error: {0}")]
    Date(String),
}

impl Error {
    /// Build a [`Error::Parse`] for the given kind of value.
    pub fn parse(what: &'static str, input: impl Into<String>) -> Self {
        Error::Parse {
            what,
            input: input.into(),
        }
    }

    /// Return `true` if this error stems from user input rather than
    /// from the calendar arithmetic itself.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Error::Parse { .. } | Error::Precondition(_))
    }
}

/// Shorthand `Result` type used throughout workdays.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if the condition is false.
///
/// # Example
/// ```
/// use wd_core::{ensure, errors::Error};
/// fn positive(x: i32) -> wd_core::errors::Result<i32> {
///     ensure!(x > 0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1).is_ok());
/// assert!(positive(-1).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}
