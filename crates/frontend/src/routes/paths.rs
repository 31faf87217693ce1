//! Route paths used by navigation links.

pub const HOME: &str = "/";
pub const REPORTS: &str = "/reports";
pub const POOL_MANAGER: &str = "/pool-manager";
