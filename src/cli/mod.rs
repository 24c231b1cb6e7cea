pub mod commands;
pub mod handlers;

use crate::error::Error;

// Re-export commonly used items
pub use commands::{AttributesArgs, VerifyArgs};
pub use handlers::{handle_attributes_command, handle_verify_command};

pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const CLI_NAME: &str = "fileresource";

pub fn format_error(error: &Error) -> String {
    match error {
        Error::InvalidCrossOrigin(value) => {
            format!("Invalid crossorigin value: \"{value}\"")
        }
        Error::Io(err) => format!("IO error: {err}"),
        Error::HexDecode(err) => format!("Hex decode error: {err}"),
        Error::Base64Decode(err) => format!("Base64 decode error: {err}"),
        Error::Json(err) => format!("JSON error: {err}"),
        Error::Validation(msg) => format!("Validation error: {msg}"),
        Error::InitializationError(msg) => format!("Initialization error: {msg}"),
    }
}
