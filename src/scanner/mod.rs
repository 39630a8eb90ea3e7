//! Input scanning and address collection functionality

pub mod address_scanner;
pub mod dedupe;

pub use address_scanner::{extract_addresses, try_extract_addresses};
pub use dedupe::{dedupe_addresses, normalize_address};
