//! Domain layer for vscreate.
//!
//! Pure data and validation logic: the scaffold request, the option bag and
//! its normalized form, and the domain error type. No I/O lives here.

pub mod error;
pub mod options;
pub mod request;

pub use error::DomainError;
pub use options::{PROJECT_NAME_KEY, ValidatedOptions, validate_common_options};
pub use request::{OptionBag, ScaffoldRequest};
