//! # fileresource
//!
//! Models a web-page embedded resource (script, stylesheet, image) and
//! derives the HTML attribute values needed to reference it safely: a `src`
//! URL, a Subresource Integrity (`integrity`) attribute and a `crossorigin`
//! attribute. It also verifies that a local file's content matches a declared
//! cryptographic checksum, and normalizes free-form last-modified strings
//! into UNIX timestamps.
//!
//! ## Quick Start
//!
//! ```
//! use fileresource::resource::ResourceDescriptor;
//!
//! let descriptor = ResourceDescriptor {
//!     urlscheme: Some("https".to_string()),
//!     urlhost: Some("cdn.example.org".to_string()),
//!     urlpath: Some("/js/app.js".to_string()),
//!     checksum: Some(
//!         "sha256:708c26ff77c1fa15ac9409a5cbe946fe50ce203a73c9b300960f2adb79e48c04"
//!             .to_string(),
//!     ),
//!     crossorigin: Some("anonymous".to_string()),
//!     ..Default::default()
//! };
//!
//! assert_eq!(
//!     descriptor.src_attribute(None).unwrap(),
//!     "https://cdn.example.org/js/app.js"
//! );
//! assert_eq!(
//!     descriptor.integrity_attribute().unwrap(),
//!     "sha256-cIwm/3fB+hWslAmly+lG/lDOIDpzybMAlg8q23nkjAQ="
//! );
//! assert_eq!(descriptor.cross_origin().unwrap().as_deref(), Some("anonymous"));
//! ```
//!
//! The crate performs no network I/O and no HTML escaping: outputs are plain
//! attribute values, and serving the file itself (with cache-control and
//! last-modified headers built from [`ResourceDescriptor`] queries) is the
//! caller's concern.
//!
//! A small CLI binary exposes the same logic from the shell; see the
//! [`cli`] module.

pub mod attributes;
pub mod checksum;
pub mod cli;
pub mod error;
pub mod resource;
pub mod timestamp;

// Re-export error types
pub use error::{Error, Result};

// Re-export the core surface
pub use attributes::{Suppressed, validate_prefix};
pub use checksum::{DigestAlgorithm, Verification};
pub use resource::ResourceDescriptor;
pub use timestamp::string_to_timestamp;

/// Initialize logging for the CLI
///
/// # Examples
///
/// ```
/// use fileresource::init_logging;
///
/// // Initialize with default settings
/// let result = init_logging();
/// // Note: This might fail if already initialized
/// assert!(result.is_ok() || result.is_err());
/// ```
pub fn init_logging() -> Result<()> {
    env_logger::try_init().map_err(|e| Error::InitializationError(e.to_string()))
}
