//! # Attribute Derivation
//!
//! Pure queries that turn a [`ResourceDescriptor`] into the HTML attribute
//! values needed to reference the resource safely: `src`, `integrity` and
//! `crossorigin`, plus the normalized MIME type.
//!
//! ## Security policy for `src`
//!
//! [`src_attribute`](ResourceDescriptor::src_attribute) never produces a URL
//! for an insecure transport configuration:
//!
//! - a remote scheme other than `http`/`https` suppresses output;
//! - plain `http` is allowed only when the descriptor carries a checksum whose
//!   algorithm browsers accept for Subresource Integrity, and even then a
//!   deprecation warning is logged.
//!
//! Suppression is not an error. Rendering code can call these functions
//! without error handling; the result carries a [`Suppressed`] reason code so
//! tests and diagnostics can see *why* output was withheld, and
//! security-relevant suppressions additionally log at warn level.
//!
//! ## Examples
//!
//! ```
//! use fileresource::resource::ResourceDescriptor;
//!
//! let descriptor = ResourceDescriptor {
//!     urlscheme: Some("https".to_string()),
//!     urlhost: Some("www.example.org".to_string()),
//!     urlpath: Some("/path/to/file.php".to_string()),
//!     urlquery: Some("foo=bar&bar=foo".to_string()),
//!     ..Default::default()
//! };
//! assert_eq!(
//!     descriptor.src_attribute(None).unwrap(),
//!     "https://www.example.org/path/to/file.php?foo=bar&bar=foo"
//! );
//! ```

mod prefix;

pub use prefix::validate_prefix;

use crate::checksum::parse_checksum;
use crate::error::Error;
use crate::resource::ResourceDescriptor;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use log::warn;
use std::fmt;

/// Values browsers accept for the `crossorigin` attribute.
pub const VALID_CROSS_ORIGIN: [&str; 2] = ["anonymous", "use-credentials"];

/// Why a `src` attribute was withheld.
///
/// Routine outcomes, not errors: a caller rendering a page can ignore the
/// reason, while tests and operator diagnostics can assert on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suppressed {
    /// The supplied path prefix failed [`validate_prefix`].
    InvalidPrefix,
    /// The descriptor names a remote scheme that is not `http` or `https`.
    NonWebScheme,
    /// Plain `http` without a checksum usable for an integrity attribute.
    HttpWithoutIntegrity,
    /// No URL components were present at all.
    Empty,
}

impl fmt::Display for Suppressed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Suppressed::InvalidPrefix => "invalid path prefix",
            Suppressed::NonWebScheme => "non-web URL scheme",
            Suppressed::HttpWithoutIntegrity => "http without a usable integrity attribute",
            Suppressed::Empty => "no URL components present",
        };
        f.write_str(reason)
    }
}

impl ResourceDescriptor {
    /// The MIME type, trimmed and lowercased, or `None` if absent.
    pub fn mime_type(&self) -> Option<String> {
        self.mime.as_ref().map(|mime| mime.trim().to_lowercase())
    }

    /// The value for a `crossorigin` attribute, or `None` if absent.
    ///
    /// The stored value is trimmed and lowercased before checking it against
    /// [`VALID_CROSS_ORIGIN`]. A present but out-of-set value is a hard
    /// [`Error::InvalidCrossOrigin`]: that configuration is caller misuse,
    /// not a rendering-time condition.
    ///
    /// # Examples
    ///
    /// ```
    /// use fileresource::resource::ResourceDescriptor;
    ///
    /// let descriptor = ResourceDescriptor {
    ///     crossorigin: Some("  Use-Credentials  ".to_string()),
    ///     ..Default::default()
    /// };
    /// assert_eq!(
    ///     descriptor.cross_origin().unwrap().as_deref(),
    ///     Some("use-credentials")
    /// );
    /// ```
    pub fn cross_origin(&self) -> Result<Option<String>, Error> {
        let Some(raw) = &self.crossorigin else {
            return Ok(None);
        };
        let normalized = raw.trim().to_lowercase();
        if VALID_CROSS_ORIGIN.contains(&normalized.as_str()) {
            Ok(Some(normalized))
        } else {
            Err(Error::InvalidCrossOrigin(normalized))
        }
    }

    /// Build the `src` attribute value, or a [`Suppressed`] reason.
    ///
    /// `prefix` is an optional path fragment spliced in front of `urlpath`,
    /// validated with [`validate_prefix`] first. When both `urlscheme` and
    /// `urlhost` are present the result starts with `scheme://host`, subject
    /// to the transport policy described at the [module level](self); the
    /// path and query parts are appended independently, so a descriptor with
    /// only `urlpath` yields a local path reference.
    pub fn src_attribute(&self, prefix: Option<&str>) -> Result<String, Suppressed> {
        if !validate_prefix(prefix) {
            return Err(Suppressed::InvalidPrefix);
        }
        let prefix = prefix.unwrap_or("");

        let mut src = String::new();
        if let (Some(scheme), Some(host)) = (&self.urlscheme, &self.urlhost) {
            let scheme = scheme.to_lowercase();
            if scheme != "http" && scheme != "https" {
                warn!(
                    "remote resources should only be served with https or (deprecated) http \
                     with an integrity attribute, src attribute not generated"
                );
                return Err(Suppressed::NonWebScheme);
            }
            if scheme == "http" {
                if !self.has_integrity_eligible_checksum() {
                    warn!(
                        "remote resources are not safe over http without a usable integrity \
                         attribute, src attribute not generated"
                    );
                    return Err(Suppressed::HttpWithoutIntegrity);
                }
                warn!(
                    "use of http for remote resources is dangerous and deprecated and may not \
                     be supported in future versions"
                );
            }
            src.push_str(&scheme);
            src.push_str("://");
            src.push_str(host);
        }
        if let Some(path) = &self.urlpath {
            src.push_str(prefix);
            src.push_str(path);
        }
        if let Some(query) = &self.urlquery {
            src.push('?');
            src.push_str(query);
        }
        if src.is_empty() {
            return Err(Suppressed::Empty);
        }
        Ok(src)
    }

    /// Convenience wrapper around [`src_attribute`](Self::src_attribute) that
    /// collapses suppression to `None`, for rendering callers that do not
    /// care about the reason.
    pub fn src(&self, prefix: Option<&str>) -> Option<String> {
        self.src_attribute(prefix).ok()
    }

    /// The value for an `integrity` attribute, or `None`.
    ///
    /// Requires a checksum whose algorithm browsers accept for Subresource
    /// Integrity (SHA-256/384/512). Hex digests are re-encoded as base64;
    /// base64 digests are used as-is. The result is
    /// `"<algorithm>-<base64-digest>"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fileresource::resource::ResourceDescriptor;
    ///
    /// let descriptor = ResourceDescriptor {
    ///     checksum: Some(
    ///         "sha256:708c26ff77c1fa15ac9409a5cbe946fe50ce203a73c9b300960f2adb79e48c04"
    ///             .to_string(),
    ///     ),
    ///     ..Default::default()
    /// };
    /// assert_eq!(
    ///     descriptor.integrity_attribute().as_deref(),
    ///     Some("sha256-cIwm/3fB+hWslAmly+lG/lDOIDpzybMAlg8q23nkjAQ=")
    /// );
    /// ```
    pub fn integrity_attribute(&self) -> Option<String> {
        let checksum = self.checksum.as_deref()?;
        let (algorithm, digest) = parse_checksum(checksum)?;
        if !algorithm.is_integrity_eligible() {
            return None;
        }
        let encoded = if !digest.is_empty() && digest.bytes().all(|b| b.is_ascii_hexdigit()) {
            STANDARD.encode(hex::decode(digest).ok()?)
        } else {
            digest.to_string()
        };
        Some(format!("{}-{}", algorithm.as_str(), encoded))
    }

    fn has_integrity_eligible_checksum(&self) -> bool {
        self.checksum
            .as_deref()
            .and_then(parse_checksum)
            .is_some_and(|(algorithm, _)| algorithm.is_integrity_eligible())
    }
}
