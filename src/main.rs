use clap::{Parser, Subcommand};
use fileresource::cli::{
    self,
    commands::{AttributesArgs, VerifyArgs},
};
use fileresource::error::Result;

#[derive(Parser)]
#[command(author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Derive src, integrity and crossorigin attribute values for a descriptor
    Attributes(AttributesArgs),
    /// Verify a local file against its declared checksum
    Verify(VerifyArgs),
}

fn main() -> Result<()> {
    // Initialize logging
    fileresource::init_logging()?;

    // Parse command line arguments
    let cli = Cli::parse();

    // Handle commands
    let result = match cli.command {
        Commands::Attributes(args) => cli::handlers::handle_attributes_command(args),
        Commands::Verify(args) => cli::handlers::handle_verify_command(args),
    };

    // Format and display any errors
    if let Err(ref e) = result {
        eprintln!("{}", cli::format_error(e));
    }

    result
}
