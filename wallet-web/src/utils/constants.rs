//! Application constants

/// Navigation destinations shown in the navbar, as `(label, path)`.
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("Home", "/"),
    ("Network", "/network"),
    ("About", "/about"),
];

/// Characters of the account shown on the wallet button.
pub const ACCOUNT_PREVIEW_LEN: usize = 6;

// UI colors
pub const CONNECTED_COLOR: &str = "#A5CC82";
pub const DISCONNECTED_COLOR: &str = "#00dbe3";
pub const ACTIVE_LINK_COLOR: &str = "#00dbe3";
pub const LINK_COLOR: &str = "#ffffff";

#[cfg(debug_assertions)]
pub const LOG_LEVEL: log::Level = log::Level::Debug;
#[cfg(not(debug_assertions))]
pub const LOG_LEVEL: log::Level = log::Level::Info;
