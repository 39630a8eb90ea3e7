//! Ethereum address validation logic

/// Length of a hex-encoded Ethereum address including the `0x` prefix.
const ADDRESS_LEN: usize = 42;

/// Validate an Ethereum address token
///
/// # Arguments
/// * `token` - Candidate string, tested as a whole with no trimming
///
/// # Returns
/// `true` if the token is exactly `0x` followed by 40 hex digits
pub fn is_valid_address(token: &str) -> bool {
    if token.len() != ADDRESS_LEN {
        return false;
    }

    // Prefix match is case-sensitive: `0X` does not count
    if !token.starts_with("0x") {
        return false;
    }

    token[2..].chars().all(|c| c.is_ascii_hexdigit())
}
