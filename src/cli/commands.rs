use clap::Args;
use std::path::PathBuf;

/// Arguments for `fileresource attributes`.
#[derive(Args, Debug)]
pub struct AttributesArgs {
    /// Path to a JSON resource descriptor
    #[arg(long)]
    pub descriptor: PathBuf,

    /// Optional path prefix inserted before the URL path
    #[arg(long)]
    pub prefix: Option<String>,
}

/// Arguments for `fileresource verify`.
///
/// Either a full descriptor file, or an ad-hoc `--file`/`--checksum` pair.
#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Path to a JSON resource descriptor
    #[arg(long, conflicts_with_all = ["file", "checksum"])]
    pub descriptor: Option<PathBuf>,

    /// File to verify
    #[arg(long, requires = "checksum")]
    pub file: Option<PathBuf>,

    /// Declared checksum, "<algorithm>:<hex-or-base64-digest>"
    #[arg(long, requires = "file")]
    pub checksum: Option<String>,
}
