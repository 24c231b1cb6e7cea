//! # Checksum Module
//!
//! Parses declared checksums of the form `"<algorithm>:<digest>"` and verifies
//! local files against them. The digest may be hex or base64 encoded; both
//! encodings of the same bytes verify identically.
//!
//! ## Algorithm registry
//!
//! File verification accepts any algorithm in the [`DigestAlgorithm`]
//! registry: SHA-256, SHA-384, SHA-512, SHA-1 and RIPEMD-160. Only the first
//! three are *integrity eligible* — usable for a browser Subresource
//! Integrity attribute (see [`crate::attributes`]). SHA-1 and RIPEMD-160 are
//! carried for general integrity checks of legacy checksum files, not for SRI.
//!
//! ## Verification is tri-state
//!
//! [`validate_file`](crate::resource::ResourceDescriptor::validate_file)
//! never fails with an error. Conditions that prevent a check from being
//! performed at all — missing field, missing file, unknown algorithm,
//! undecodable digest — collapse to [`Verification::Unknown`], so callers can
//! distinguish "could not check" from "checked and failed".
//!
//! ## Examples
//!
//! ```no_run
//! use fileresource::resource::ResourceDescriptor;
//! use fileresource::checksum::Verification;
//!
//! let descriptor = ResourceDescriptor {
//!     filepath: Some("/srv/www/js/app.js".to_string()),
//!     checksum: Some(
//!         "sha256:708c26ff77c1fa15ac9409a5cbe946fe50ce203a73c9b300960f2adb79e48c04"
//!             .to_string(),
//!     ),
//!     ..Default::default()
//! };
//! match descriptor.validate_file() {
//!     Verification::Verified => println!("content matches"),
//!     Verification::Mismatch => println!("content does NOT match"),
//!     Verification::Unknown => println!("could not check"),
//! }
//! ```

use crate::resource::ResourceDescriptor;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use sha2::{Digest, Sha256, Sha384, Sha512};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use subtle::ConstantTimeEq;

/// Digest algorithms recognized for file verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigestAlgorithm {
    Sha256,
    Sha384,
    Sha512,
    Sha1,
    Ripemd160,
}

impl DigestAlgorithm {
    /// Look up an algorithm by its checksum-string name.
    ///
    /// Names are matched case-sensitively: `"sha256"` parses, `"SHA256"` does
    /// not.
    ///
    /// # Examples
    ///
    /// ```
    /// use fileresource::checksum::DigestAlgorithm;
    ///
    /// assert_eq!(
    ///     DigestAlgorithm::from_name("ripemd160"),
    ///     Some(DigestAlgorithm::Ripemd160)
    /// );
    /// assert_eq!(DigestAlgorithm::from_name("SHA256"), None);
    /// assert_eq!(DigestAlgorithm::from_name("md2"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "sha256" => Some(Self::Sha256),
            "sha384" => Some(Self::Sha384),
            "sha512" => Some(Self::Sha512),
            "sha1" => Some(Self::Sha1),
            "ripemd160" => Some(Self::Ripemd160),
            _ => None,
        }
    }

    /// The algorithm name as used in checksum strings and SRI attributes.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sha256 => "sha256",
            Self::Sha384 => "sha384",
            Self::Sha512 => "sha512",
            Self::Sha1 => "sha1",
            Self::Ripemd160 => "ripemd160",
        }
    }

    /// Whether browsers accept this algorithm in an `integrity` attribute.
    ///
    /// Strictly narrower than the registry itself: SHA-1 and RIPEMD-160
    /// checksums verify files but never produce an integrity attribute.
    pub fn is_integrity_eligible(&self) -> bool {
        matches!(self, Self::Sha256 | Self::Sha384 | Self::Sha512)
    }
}

/// Split a `"<algorithm>:<digest>"` checksum string into a registry algorithm
/// and its encoded digest.
///
/// Returns `None` when the separator is missing or the algorithm is not in
/// the registry.
pub fn parse_checksum(checksum: &str) -> Option<(DigestAlgorithm, &str)> {
    let (name, digest) = checksum.split_once(':')?;
    Some((DigestAlgorithm::from_name(name)?, digest))
}

/// Decode an encoded digest into raw bytes.
///
/// A non-empty string made entirely of hex digits is hex-decoded; anything
/// else is treated as base64 (standard alphabet). Returns `None` when neither
/// decode succeeds, e.g. an odd-length hex string.
pub fn decode_digest(digest: &str) -> Option<Vec<u8>> {
    if !digest.is_empty() && digest.bytes().all(|b| b.is_ascii_hexdigit()) {
        hex::decode(digest).ok()
    } else {
        STANDARD.decode(digest).ok()
    }
}

/// Compute the digest of a file's full content with the given algorithm.
///
/// Reads in chunks so large files never sit in memory whole.
pub fn digest_file(path: impl AsRef<Path>, algorithm: DigestAlgorithm) -> io::Result<Vec<u8>> {
    let file = File::open(path.as_ref())?;
    match algorithm {
        DigestAlgorithm::Sha256 => hash_reader::<Sha256, _>(file),
        DigestAlgorithm::Sha384 => hash_reader::<Sha384, _>(file),
        DigestAlgorithm::Sha512 => hash_reader::<Sha512, _>(file),
        DigestAlgorithm::Sha1 => hash_reader::<sha1::Sha1, _>(file),
        DigestAlgorithm::Ripemd160 => hash_reader::<ripemd::Ripemd160, _>(file),
    }
}

/// Outcome of verifying a file against its declared checksum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verification {
    /// The file's digest matches the declared checksum.
    Verified,
    /// The file was hashed and its digest does not match.
    Mismatch,
    /// Verification could not be performed: a field was absent, the file was
    /// missing or unreadable, the algorithm was not recognized, or the digest
    /// could not be decoded.
    Unknown,
}

impl Verification {
    pub fn is_verified(&self) -> bool {
        matches!(self, Self::Verified)
    }
}

impl ResourceDescriptor {
    /// Verify that the file at `filepath` matches the declared `checksum`.
    ///
    /// Never returns an error: any condition that prevents the check from
    /// running yields [`Verification::Unknown`].
    ///
    /// # Examples
    ///
    /// ```
    /// use fileresource::resource::ResourceDescriptor;
    /// use fileresource::checksum::Verification;
    ///
    /// // No filepath and no checksum: nothing to check.
    /// let descriptor = ResourceDescriptor::default();
    /// assert_eq!(descriptor.validate_file(), Verification::Unknown);
    /// ```
    pub fn validate_file(&self) -> Verification {
        let (Some(filepath), Some(checksum)) = (&self.filepath, &self.checksum) else {
            return Verification::Unknown;
        };
        let Some((algorithm, digest)) = parse_checksum(checksum) else {
            return Verification::Unknown;
        };
        let path = Path::new(filepath);
        if !path.is_file() {
            return Verification::Unknown;
        }
        let Some(expected) = decode_digest(digest) else {
            return Verification::Unknown;
        };
        let actual = match digest_file(path, algorithm) {
            Ok(bytes) => bytes,
            Err(_) => return Verification::Unknown,
        };
        if expected.len() != actual.len() {
            return Verification::Mismatch;
        }
        if bool::from(expected.ct_eq(&actual)) {
            Verification::Verified
        } else {
            Verification::Mismatch
        }
    }
}

/// Hash data from a reader using streaming.
fn hash_reader<D: Digest, R: Read>(mut reader: R) -> io::Result<Vec<u8>> {
    let mut hasher = D::new();
    let mut buffer = [0; 8192];

    loop {
        let bytes_read = reader.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }

    Ok(hasher.finalize().to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    fn write_file(dir: &tempfile::TempDir, name: &str, content: &[u8]) -> String {
        let path = dir.path().join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(content).unwrap();
        path.to_str().unwrap().to_string()
    }

    fn descriptor_for(filepath: &str, checksum: &str) -> ResourceDescriptor {
        ResourceDescriptor {
            filepath: Some(filepath.to_string()),
            checksum: Some(checksum.to_string()),
            ..Default::default()
        }
    }

    // SHA-256 of b"hello\n".
    const HELLO_SHA256_HEX: &str =
        "5891b5b522d5df086d0ff0b110fbd9d21bb4fc7163af34d08286a2e846f6be03";

    #[test]
    fn parse_checksum_splits_on_first_colon() {
        let (algorithm, digest) = parse_checksum("sha256:ab:cd").unwrap();
        assert_eq!(algorithm, DigestAlgorithm::Sha256);
        assert_eq!(digest, "ab:cd");
    }

    #[test]
    fn parse_checksum_rejects_missing_separator_and_unknown_algorithm() {
        assert_eq!(parse_checksum("sha256"), None);
        assert_eq!(parse_checksum("md2:abcd"), None);
    }

    #[test]
    fn decode_digest_hex_and_base64_agree() {
        let hex_digest = "00ff10";
        let base64_digest = STANDARD.encode([0x00, 0xff, 0x10]);
        assert_eq!(
            decode_digest(hex_digest).unwrap(),
            decode_digest(&base64_digest).unwrap()
        );
    }

    #[test]
    fn decode_digest_rejects_odd_length_hex() {
        // All hex digits, but not decodable as bytes; must not silently fall
        // back to base64.
        assert_eq!(decode_digest("abc"), None);
    }

    #[test]
    fn validate_file_verifies_hex_checksum() {
        let dir = tempdir().unwrap();
        let filepath = write_file(&dir, "hello.txt", b"hello\n");
        let descriptor = descriptor_for(&filepath, &format!("sha256:{HELLO_SHA256_HEX}"));
        assert_eq!(descriptor.validate_file(), Verification::Verified);
    }

    #[test]
    fn validate_file_hex_and_base64_equivalent() {
        let dir = tempdir().unwrap();
        let filepath = write_file(&dir, "hello.txt", b"hello\n");
        let base64_digest = STANDARD.encode(hex::decode(HELLO_SHA256_HEX).unwrap());

        let hex_descriptor = descriptor_for(&filepath, &format!("sha256:{HELLO_SHA256_HEX}"));
        let base64_descriptor = descriptor_for(&filepath, &format!("sha256:{base64_digest}"));

        assert_eq!(hex_descriptor.validate_file(), Verification::Verified);
        assert_eq!(
            hex_descriptor.validate_file(),
            base64_descriptor.validate_file()
        );
    }

    #[test]
    fn validate_file_detects_mismatch() {
        let dir = tempdir().unwrap();
        let filepath = write_file(&dir, "hello.txt", b"tampered\n");
        let descriptor = descriptor_for(&filepath, &format!("sha256:{HELLO_SHA256_HEX}"));
        assert_eq!(descriptor.validate_file(), Verification::Mismatch);
    }

    #[test]
    fn validate_file_unknown_when_fields_absent() {
        let dir = tempdir().unwrap();
        let filepath = write_file(&dir, "hello.txt", b"hello\n");

        let no_checksum = ResourceDescriptor {
            filepath: Some(filepath.clone()),
            ..Default::default()
        };
        assert_eq!(no_checksum.validate_file(), Verification::Unknown);

        let no_filepath = ResourceDescriptor {
            checksum: Some(format!("sha256:{HELLO_SHA256_HEX}")),
            ..Default::default()
        };
        assert_eq!(no_filepath.validate_file(), Verification::Unknown);
    }

    #[test]
    fn validate_file_unknown_when_file_missing() {
        let descriptor = descriptor_for(
            "/no/such/file.bin",
            &format!("sha256:{HELLO_SHA256_HEX}"),
        );
        assert_eq!(descriptor.validate_file(), Verification::Unknown);
    }

    #[test]
    fn validate_file_unknown_for_unregistered_algorithm() {
        let dir = tempdir().unwrap();
        let filepath = write_file(&dir, "hello.txt", b"hello\n");
        let descriptor = descriptor_for(&filepath, &format!("whirlpool:{HELLO_SHA256_HEX}"));
        assert_eq!(descriptor.validate_file(), Verification::Unknown);
    }

    #[test]
    fn validate_file_unknown_for_malformed_checksum() {
        let dir = tempdir().unwrap();
        let filepath = write_file(&dir, "hello.txt", b"hello\n");
        let descriptor = descriptor_for(&filepath, "no-separator-here");
        assert_eq!(descriptor.validate_file(), Verification::Unknown);
    }

    #[test]
    fn validate_file_supports_every_registry_algorithm() {
        let dir = tempdir().unwrap();
        let filepath = write_file(&dir, "data.bin", b"registry coverage");

        for algorithm in [
            DigestAlgorithm::Sha256,
            DigestAlgorithm::Sha384,
            DigestAlgorithm::Sha512,
            DigestAlgorithm::Sha1,
            DigestAlgorithm::Ripemd160,
        ] {
            let digest = digest_file(&filepath, algorithm).unwrap();
            let descriptor = descriptor_for(
                &filepath,
                &format!("{}:{}", algorithm.as_str(), hex::encode(digest)),
            );
            assert_eq!(
                descriptor.validate_file(),
                Verification::Verified,
                "algorithm {} failed to verify",
                algorithm.as_str()
            );
        }
    }

    #[test]
    fn digest_file_known_sha256() {
        let dir = tempdir().unwrap();
        let filepath = write_file(&dir, "hello.txt", b"hello\n");
        let digest = digest_file(&filepath, DigestAlgorithm::Sha256).unwrap();
        assert_eq!(hex::encode(digest), HELLO_SHA256_HEX);
    }

    #[test]
    fn digest_file_large_input_streams() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("large.bin");
        let mut file = File::create(&path).unwrap();
        let chunk = vec![0x42u8; 1024 * 1024];
        for _ in 0..4 {
            file.write_all(&chunk).unwrap();
        }
        drop(file);

        let digest = digest_file(&path, DigestAlgorithm::Sha512).unwrap();
        assert_eq!(digest.len(), 64);
    }

    #[test]
    fn integrity_eligibility_is_narrower_than_registry() {
        assert!(DigestAlgorithm::Sha256.is_integrity_eligible());
        assert!(DigestAlgorithm::Sha384.is_integrity_eligible());
        assert!(DigestAlgorithm::Sha512.is_integrity_eligible());
        assert!(!DigestAlgorithm::Sha1.is_integrity_eligible());
        assert!(!DigestAlgorithm::Ripemd160.is_integrity_eligible());
    }
}
