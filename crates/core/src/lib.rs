//! Core types for the oauth gate.
//!
//! Holds the access-token record returned by the token service, the
//! normalized [`RestError`] that flows through the authentication pipeline,
//! and the header/query names that make up the trust boundary.

pub mod error;
pub mod headers;
pub mod rest_error;
pub mod token;

pub use error::{Error, Result};
pub use rest_error::{ErrorKind, RestError};
pub use token::AccessToken;
