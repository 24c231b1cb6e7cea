//! # Resource Descriptor
//!
//! The declarative description of a web-page embedded resource (script,
//! stylesheet, image). A [`ResourceDescriptor`] is a plain value: every field
//! is optional, nothing is validated at construction time, and nothing is
//! mutated after construction. The derivation and verification logic lives in
//! the [`attributes`](crate::attributes), [`checksum`](crate::checksum) and
//! [`timestamp`](crate::timestamp) modules, which attach query methods to this
//! type.
//!
//! ## Examples
//!
//! Building a descriptor directly:
//! ```
//! use fileresource::resource::ResourceDescriptor;
//!
//! let descriptor = ResourceDescriptor {
//!     urlscheme: Some("https".to_string()),
//!     urlhost: Some("www.example.org".to_string()),
//!     urlpath: Some("/js/app.js".to_string()),
//!     ..Default::default()
//! };
//! assert_eq!(
//!     descriptor.src_attribute(None).as_deref(),
//!     Ok("https://www.example.org/js/app.js")
//! );
//! ```
//!
//! Building a descriptor from a key/value parameter map:
//! ```
//! use fileresource::resource::ResourceDescriptor;
//! use std::collections::HashMap;
//!
//! let mut params = HashMap::new();
//! params.insert("mime".to_string(), "Application/JavaScript".to_string());
//! params.insert("ignored-key".to_string(), "ignored".to_string());
//!
//! let descriptor = ResourceDescriptor::from_params(&params);
//! assert_eq!(descriptor.mime_type().as_deref(), Some("application/javascript"));
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Declarative fields describing an embedded resource.
///
/// All fields are optional and stored verbatim; normalization (trimming,
/// lowercasing) happens on read, in the query methods. The struct is a value
/// object: equality is field equality and there is no identity or lifecycle
/// beyond construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceDescriptor {
    /// MIME type of the resource, free-form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime: Option<String>,
    /// Declared checksum in `"<algorithm>:<hex-or-base64-digest>"` form, e.g.
    /// `sha256:708c26ff77c1fa15ac9409a5cbe946fe50ce203a73c9b300960f2adb79e48c04`.
    /// Base64 digests avoid a re-encode when generating the integrity
    /// attribute.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checksum: Option<String>,
    /// Local filesystem path, only meaningful for local resources. Existence
    /// is not checked here.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filepath: Option<String>,
    /// Raw `crossorigin` attribute value, validated on read.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crossorigin: Option<String>,
    /// Modification date of the resource as a string. Does not have to match
    /// the filesystem mtime. ISO 8601 is recommended.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lastmod: Option<String>,
    /// URL scheme; should be `http`, `https`, or absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub urlscheme: Option<String>,
    /// Host name. Internationalized names should be in punycode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub urlhost: Option<String>,
    /// URL path; should start with a forward slash.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub urlpath: Option<String>,
    /// Query string, without the leading `?`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub urlquery: Option<String>,
}

impl ResourceDescriptor {
    /// Build a descriptor from a key/value parameter map.
    ///
    /// Recognized keys are `mime`, `checksum`, `filepath`, `crossorigin`,
    /// `lastmod`, `urlscheme`, `urlhost`, `urlpath` and `urlquery`.
    /// Unrecognized keys are ignored; missing keys leave the field absent.
    pub fn from_params(params: &HashMap<String, String>) -> Self {
        let field = |key: &str| params.get(key).cloned();
        Self {
            mime: field("mime"),
            checksum: field("checksum"),
            filepath: field("filepath"),
            crossorigin: field("crossorigin"),
            lastmod: field("lastmod"),
            urlscheme: field("urlscheme"),
            urlhost: field("urlhost"),
            urlpath: field("urlpath"),
            urlquery: field("urlquery"),
        }
    }

    /// Load a descriptor from a JSON file.
    ///
    /// Unknown JSON keys are ignored, matching [`from_params`](Self::from_params).
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }
}
