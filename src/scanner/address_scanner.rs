//! Address extraction from line-delimited text

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::core::validator::is_valid_address;

use super::dedupe::{dedupe_addresses, normalize_address};

/// Extract unique Ethereum addresses from a text file
///
/// Reads the file line by line; a line matches only if, after trimming
/// surrounding whitespace, the entire line is a valid address. Matches
/// are lowercased before deduplication.
///
/// # Arguments
/// * `path` - Path to the line-delimited input file
///
/// # Returns
/// Sorted, deduplicated, lowercase addresses
pub fn try_extract_addresses(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open input file {}", path.display()))?;
    let reader = BufReader::new(file);

    let mut matched = Vec::new();
    for line in reader.lines() {
        let line =
            line.with_context(|| format!("Failed to read from {}", path.display()))?;
        let token = line.trim();
        if is_valid_address(token) {
            matched.push(normalize_address(token));
        }
    }

    Ok(dedupe_addresses(matched))
}

/// Extract addresses, degrading any read failure to an empty result
///
/// The error is reported to stderr; callers see an empty list instead of
/// an error value.
pub fn extract_addresses(path: &Path) -> Vec<String> {
    match try_extract_addresses(path) {
        Ok(addresses) => addresses,
        Err(e) => {
            eprintln!("Error reading file: {}", e);
            Vec::new()
        }
    }
}
