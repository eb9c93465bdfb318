//! Domain errors - violations of the option contract.

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (callers may re-report them through several channels)
/// - Self-describing (the Display string is shown to the user verbatim)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A recognized option was supplied with the wrong JSON type.
    #[error("'{option}' option must be a string if provided")]
    OptionNotString { option: &'static str },

    /// The option bag contained keys no template accepts.
    ///
    /// `keys` is the comma-joined list of every offending key, so one error
    /// surfaces all of them at once.
    #[error("unknown option(s): {keys}")]
    UnknownOptions { keys: String },
}
