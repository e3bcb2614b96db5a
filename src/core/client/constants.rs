//! Centralized constants for the default endpoint, UA and throttle.

use std::time::Duration;

/// Identifies this crate to the service.
pub(crate) const USER_AGENT: &str = concat!("jqdata-rs/", env!("CARGO_PKG_VERSION"));

/// The single endpoint every method is posted to.
pub(crate) const DEFAULT_BASE_URL: &str = "https://dataapi.joinquant.com/apis";

/// The service allows one request every two seconds per account.
pub(crate) const DEFAULT_MIN_INTERVAL: Duration = Duration::from_secs(2);

/// Applied to the whole request unless overridden.
pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
