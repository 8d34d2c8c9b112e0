//! Vendor constants
//!
//! Centralized location for endpoint defaults and wire-level limits.

// Endpoints
/// Admin API root.
pub const DEFAULT_ADMIN_BASE_URL: &str = "https://spaces.nexudus.com/api";
/// Domain hosting tenant portals as subdomains.
pub const DEFAULT_PUBLIC_DOMAIN: &str = "spaces.nexudus.com";
/// Locale prefix of portal paths.
pub const PUBLIC_LOCALE_PATH: &str = "/en";

// Pagination
/// Largest page the admin API serves; every list request asks for it.
pub const MAX_PAGE_SIZE: u32 = 1000;
/// Pages are numbered from one.
pub const FIRST_PAGE: u32 = 1;

// Transport
/// Per-request timeout unless configured otherwise.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// User agent of every client.
pub const USER_AGENT: &str = concat!("cowork-client/", env!("CARGO_PKG_VERSION"));

/// Wire format of every date the vendor accepts in query filters.
pub const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Last year that fits the four-digit year of [`DATE_FORMAT`].
pub const MAX_WIRE_YEAR: i32 = 9999;
