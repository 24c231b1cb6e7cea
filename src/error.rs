//! Error types shared across the crate.
//!
//! Most query functions in this crate deliberately do *not* return errors:
//! missing fields, missing files, unsupported digest algorithms and malformed
//! date strings are routine rendering-time conditions, and they collapse to
//! `None` or [`Verification::Unknown`](crate::checksum::Verification) instead.
//! The [`Error`] enum covers the remaining hard failures: a structurally
//! present but invalid `crossorigin` value, and the I/O and decoding errors
//! surfaced by the CLI layer.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// A `crossorigin` value was present but outside the set accepted by
    /// browsers (`anonymous`, `use-credentials`). This is a caller-contract
    /// violation, not an environmental condition.
    #[error("\"{0}\" is not a valid crossorigin attribute")]
    InvalidCrossOrigin(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Hex decode error: {0}")]
    HexDecode(#[from] hex::FromHexError),

    #[error("Base64 decode error: {0}")]
    Base64Decode(#[from] base64::DecodeError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Initialization error: {0}")]
    InitializationError(String),
}
