use super::commands::{AttributesArgs, VerifyArgs};
use crate::checksum::Verification;
use crate::error::{Error, Result};
use crate::resource::ResourceDescriptor;

pub fn handle_attributes_command(args: AttributesArgs) -> Result<()> {
    let descriptor = ResourceDescriptor::from_json_file(&args.descriptor)?;

    match descriptor.src_attribute(args.prefix.as_deref()) {
        Ok(src) => println!("src: {src}"),
        Err(reason) => println!("src: (suppressed: {reason})"),
    }
    match descriptor.integrity_attribute() {
        Some(integrity) => println!("integrity: {integrity}"),
        None => println!("integrity: (none)"),
    }
    if let Some(crossorigin) = descriptor.cross_origin()? {
        println!("crossorigin: {crossorigin}");
    }
    if let Some(mime) = descriptor.mime_type() {
        println!("mime: {mime}");
    }
    if let Some(timestamp) = descriptor.timestamp() {
        println!("lastmod: {timestamp}");
    }
    Ok(())
}

pub fn handle_verify_command(args: VerifyArgs) -> Result<()> {
    let descriptor = match (args.descriptor, args.file, args.checksum) {
        (Some(path), _, _) => ResourceDescriptor::from_json_file(&path)?,
        (None, Some(file), Some(checksum)) => ResourceDescriptor {
            filepath: Some(file.to_string_lossy().into_owned()),
            checksum: Some(checksum),
            ..Default::default()
        },
        _ => {
            return Err(Error::Validation(
                "either --descriptor or --file with --checksum is required".to_string(),
            ));
        }
    };

    match descriptor.validate_file() {
        Verification::Verified => {
            println!("verified");
            Ok(())
        }
        Verification::Mismatch => {
            println!("mismatch");
            Err(Error::Validation(
                "file content does not match the declared checksum".to_string(),
            ))
        }
        Verification::Unknown => {
            println!("unknown: verification could not be performed");
            Ok(())
        }
    }
}
