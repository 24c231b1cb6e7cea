//! Path-prefix validation for src attribute generation.

use url::Url;

/// Check whether a path prefix is safe to splice into a URL.
///
/// An absent prefix is valid. A non-empty prefix must start with `/` and,
/// when inserted into a well-formed template URL, must still read back as the
/// same path. The URL parser percent-escapes questionable characters rather
/// than rejecting them, so requiring the path to round-trip unchanged is what
/// rejects embedded spaces and friends while still accepting any ordinary
/// URL-path character.
///
/// Never fails; callers use the boolean to silently suppress output.
///
/// # Examples
///
/// ```
/// use fileresource::attributes::validate_prefix;
///
/// assert!(validate_prefix(None));
/// assert!(validate_prefix(Some("/some/prefix")));
/// assert!(!validate_prefix(Some("some/prefix")));
/// assert!(!validate_prefix(Some("/some prefix")));
/// ```
pub fn validate_prefix(prefix: Option<&str>) -> bool {
    let Some(prefix) = prefix else {
        return true;
    };
    if !prefix.is_empty() && !prefix.starts_with('/') {
        return false;
    }
    let expected_path = format!("{prefix}/path/file.html");
    let probe = format!("http://example.org{expected_path}");
    match Url::parse(&probe) {
        Ok(parsed) => parsed.host_str() == Some("example.org") && parsed.path() == expected_path,
        Err(_) => false,
    }
}
