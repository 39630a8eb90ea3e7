//! Ethereum Address Extractor Library
//!
//! Extracts Ethereum addresses from line-delimited text, deduplicates them
//! case-insensitively, and writes the sorted list out with a per-line amount.

pub mod core;
pub mod reporting;
pub mod scanner;

pub use crate::core::validator;
pub use crate::reporting::report_writer;
pub use crate::scanner::address_scanner;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::core::validator::is_valid_address;
    pub use crate::reporting::report_writer::{
        save_addresses, write_address_list, DEFAULT_AMOUNT,
    };
    pub use crate::scanner::address_scanner::{extract_addresses, try_extract_addresses};
    pub use crate::scanner::dedupe::{dedupe_addresses, normalize_address};
}
