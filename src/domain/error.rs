//! Error types for the mediabridge crate.
//!
//! This module defines the centralized error type [`BridgeError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.

use thiserror::Error;

/// The main error type for mediabridge operations.
///
/// This enum consolidates all error conditions that can occur while operating the
/// bridge, from document engine failures to message codec and transport problems.
/// Variants wrapping underlying errors from external crates use `#[from]` for
/// automatic conversion.
///
/// Note that an *unrecognized* inbound bridge payload is not an error: the bridge
/// handler reports it as a "not handled" boolean per the bridge contract. Errors
/// here represent genuine failures of the machinery around dispatch.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// A document engine mutation or query failed.
    ///
    /// The bridge is a pass-through boundary: payloads are not validated before
    /// being handed to the engine, so this carries whatever description the
    /// engine produced for an invalid mutation.
    #[error("Engine error: {0}")]
    Engine(String),

    /// Serializing or deserializing a bridge payload failed.
    ///
    /// Wraps `serde_json` errors raised while encoding outbound messages or
    /// decoding projection payloads on the host side.
    #[error("Codec error: {0}")]
    Codec(#[from] serde_json::Error),

    /// Posting a payload over the bridge channel failed.
    ///
    /// Occurs when the far end of the message channel has been dropped, i.e.
    /// the editing context or host has gone away mid-session.
    #[error("Transport error: {0}")]
    Transport(String),

    /// Configuration is invalid or could not be loaded.
    ///
    /// Occurs when an extension configuration file cannot be parsed. The string
    /// describes the specific configuration problem.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations, e.g. while reading an
    /// extension configuration file. Automatically converts from
    /// `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for mediabridge operations.
///
/// This is a type alias for `std::result::Result<T, BridgeError>` that simplifies
/// function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, BridgeError>;
