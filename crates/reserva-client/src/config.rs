//! Client configuration.

/// Environment variable naming the remote base address.
pub const BASE_URL_ENV: &str = "RESERVA_SERVER_URL";

/// Base address used when the environment provides none.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Operator-supplied client configuration.
///
/// The base address may use plain (`http`) or encrypted (`https`)
/// transport and remains user-overridable at runtime through
/// [`ReservationClient::with_base_url`](crate::ReservationClient::with_base_url).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base address of the remote authority.
    pub base_url: String,
}

impl ClientConfig {
    /// Configuration for an explicit base address.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    /// Read `RESERVA_SERVER_URL`, falling back to the loopback default.
    #[must_use]
    pub fn from_env() -> Self {
        let base_url = std::env::var(BASE_URL_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        Self { base_url }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
