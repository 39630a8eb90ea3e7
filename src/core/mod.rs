//! Core validation functionality

pub mod validator;

pub use validator::is_valid_address;
