/// Error handling module for sftp-location.
///
/// This module defines the error types returned while parsing and
/// validating SFTP locations.
///
/// # Example
///
/// ```
/// use sftp_location::{Config, error::{Error, Result}};
///
/// fn describe(result: Result<Config>) {
///     match result {
///         Ok(cfg) => println!("Connecting to {}", cfg.host),
///         Err(Error::Format(msg)) => println!("Bad location: {}", msg),
///         Err(e) => println!("Other error: {}", e),
///     }
/// }
///
/// describe(sftp_location::parse("sftp://host:dir"));
/// ```
use thiserror::Error;

/// Errors that can occur in the sftp-location library.
///
/// Parsing is deterministic, so none of these errors is worth retrying.
/// Callers are expected to surface the message to the user and abort.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The location string is not a valid SFTP location.
    ///
    /// This error occurs when:
    /// - The input starts with neither `sftp://` nor `sftp:`
    /// - A port component is not numeric
    /// - The host is empty once delimiters are stripped
    /// - The path is missing, contains a query or fragment, or starts with `~`
    #[error("Invalid sftp location: {0}")]
    Format(String),

    /// A configuration record holds values no backend could connect with.
    ///
    /// This error occurs when:
    /// - The host is empty or contains user/path delimiters
    /// - The port is out of range
    /// - The connection count is zero
    #[error("Invalid configuration: {0}")]
    ConfigInvalid(String),

    /// Error in serializing or deserializing a configuration.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl Error {
    /// Returns true for errors raised while parsing a location string.
    pub fn is_format(&self) -> bool {
        matches!(self, Error::Format(_))
    }
}

/// Result type for sftp-location operations.
///
/// This is a convenience type alias for `std::result::Result` with the `Error` type
/// from this module.
pub type Result<T> = std::result::Result<T, Error>;
