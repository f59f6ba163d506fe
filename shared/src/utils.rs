//! # Shared Utility Functions
//!
//! ## Address Formatting
//!
//! Functions for formatting wallet addresses for display:
//! - [`format_address`] - Format address with ellipsis (first N and last M characters)
//! - [`truncate_address`] - `format_address` with a `0x` + 4 prefix and 4 suffix
//! - [`account_preview`] - Leading characters followed by `...`, as shown on the wallet button
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::format_address;
//!
//! let address = "0x52908400098527886E0F7030069857D2E4169EE7";
//! assert_eq!(format_address(address, 6, 4), "0x5290...9EE7");
//! ```

/// Format a wallet address by showing the first `prefix_len` and last `suffix_len` characters.
///
/// If the address is shorter than `prefix_len + suffix_len`, it is returned as-is.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "0x52908400098527886E0F7030069857D2E4169EE7";
/// assert_eq!(format_address(addr, 6, 4), "0x5290...9EE7");
/// assert_eq!(format_address("0xabc", 4, 4), "0xabc");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let chars: Vec<char> = address.chars().collect();
    let len = chars.len();

    if len <= prefix_len + suffix_len {
        return address.to_string();
    }

    let prefix: String = chars[..prefix_len].iter().collect();
    let suffix: String = chars[len - suffix_len..].iter().collect();

    format!("{}...{}", prefix, suffix)
}

/// Format a wallet address as `0x` plus four characters, ellipsis, and the last four.
///
/// ```rust
/// use shared::utils::truncate_address;
///
/// assert_eq!(truncate_address("0x52908400098527886E0F7030069857D2E4169EE7"), "0x5290...9EE7");
/// ```
pub fn truncate_address(address: &str) -> String {
    format_address(address, 6, 4)
}

/// Show the first `len` characters of an account followed by `...`.
///
/// Operates on characters, so a malformed non-ASCII account never panics.
pub fn account_preview(account: &str, len: usize) -> String {
    let prefix: String = account.chars().take(len).collect();
    format!("{}...", prefix)
}
