//! Output reporting functionality

pub mod report_writer;

pub use report_writer::{save_addresses, write_address_list, DEFAULT_AMOUNT};
