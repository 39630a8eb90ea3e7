//! Address list writing functionality

use anyhow::Result;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Per-line amount suffix used when no override is given.
pub const DEFAULT_AMOUNT: &str = "0.0001458";

/// Write addresses to a file, one per line with the amount suffix
///
/// The destination is created if missing and truncated otherwise. Each
/// line is `<address> <amount>` in the order the addresses were given.
///
/// # Arguments
/// * `output_path` - Path to the output file
/// * `addresses` - Addresses to write
/// * `amount` - Amount string appended to every line
///
/// # Returns
/// Result indicating success or failure
pub fn write_address_list(output_path: &Path, addresses: &[String], amount: &str) -> Result<()> {
    let mut file = File::create(output_path)?;

    for address in addresses {
        writeln!(file, "{} {}", address, amount)?;
    }

    Ok(())
}

/// Write addresses, reporting failure instead of propagating it
///
/// # Returns
/// `true` if every address was written, `false` otherwise
pub fn save_addresses(output_path: &Path, addresses: &[String], amount: &str) -> bool {
    match write_address_list(output_path, addresses, amount) {
        Ok(()) => true,
        Err(e) => {
            eprintln!("Error saving to file: {}", e);
            false
        }
    }
}
