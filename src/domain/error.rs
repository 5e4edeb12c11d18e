//! Error types for the zlibrarian plugin.
//!
//! This module defines the centralized error type [`LibrarianError`] and a type
//! alias [`Result`] for convenient error handling throughout the plugin. All
//! errors are implemented using the `thiserror` crate for automatic `Error`
//! trait implementation.

use thiserror::Error;

/// The main error type for zlibrarian operations.
///
/// This enum consolidates all error conditions that can occur during plugin
/// execution, from catalog API failures to theme and configuration issues.
/// The three request failure classes (transport, non-2xx status, body parse)
/// get dedicated variants because the `Display` output of each is surfaced
/// directly to the user through a toast notification.
///
/// # Examples
///
/// ```
/// use zlibrarian::domain::LibrarianError;
///
/// fn validate_config() -> Result<(), LibrarianError> {
///     Err(LibrarianError::Config("missing base_url".to_string()))
/// }
/// ```
#[derive(Debug, Error)]
pub enum LibrarianError {
    /// The request never produced an HTTP response.
    ///
    /// Occurs when the host reports that the request could not be executed
    /// at all (connection refused, DNS failure, etc.). The string contains
    /// the transport-level description when one is available.
    #[error("Cannot reach server: {0}")]
    Transport(String),

    /// The server answered with a non-success status.
    ///
    /// Carries the raw status code and the most specific error message that
    /// could be extracted from the response body, so the user sees what the
    /// backend actually reported.
    #[error("HTTP {status}: {message}")]
    Api {
        /// HTTP status code of the failed response.
        status: u16,
        /// Message extracted from the response body (may be empty).
        message: String,
    },

    /// A request payload could not be serialized to JSON.
    #[error("Request serialization failed: {0}")]
    Serialization(String),

    /// A response body could not be deserialized into the expected type.
    #[error("Response parse failed: {0}")]
    Deserialization(String),

    /// The price field does not contain a parseable number.
    ///
    /// Raised by the form controller before any request is built; submitting
    /// with a bad price is a failure with no state change.
    #[error("Price must be a number, got '{0}'")]
    InvalidPrice(String),

    /// Theme parsing or application failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for zlibrarian operations.
///
/// This is a type alias for `std::result::Result<T, LibrarianError>` that
/// simplifies function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, LibrarianError>;
