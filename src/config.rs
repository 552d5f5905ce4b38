// ============================================================================
// CONFIG - Compile-time configuration (populated by build.rs from .env)
// ============================================================================

/// Application configuration, resolved at compile time.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Prefix every backend call is issued under. Same-origin in dev because
    /// the dev server proxies /api to the backend.
    pub api_prefix: String,
    /// Abort in-flight requests after this many milliseconds.
    pub request_timeout_ms: u32,
    /// How long a toast stays on screen before it evicts itself.
    pub toast_ttl_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_prefix: "/api".to_string(),
            request_timeout_ms: 15_000,
            toast_ttl_ms: 3_200,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            api_prefix: option_env!("API_PREFIX").unwrap_or("/api").to_string(),
            request_timeout_ms: option_env!("REQUEST_TIMEOUT_MS")
                .unwrap_or("15000")
                .parse()
                .unwrap_or(15_000),
            toast_ttl_ms: option_env!("TOAST_TTL_MS")
                .unwrap_or("3200")
                .parse()
                .unwrap_or(3_200),
        }
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_backend_contract() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.api_prefix, "/api");
        assert_eq!(cfg.request_timeout_ms, 15_000);
        assert_eq!(cfg.toast_ttl_ms, 3_200);
    }
}
