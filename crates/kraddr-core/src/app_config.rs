/// Production address-search endpoint (Juso road-name address API).
pub const DEFAULT_JUSO_ENDPOINT: &str = "https://business.juso.go.kr/addrlink/addrLinkApi.do";

/// Production coordinate-lookup endpoint (`VWorld` address API).
pub const DEFAULT_VWORLD_ENDPOINT: &str = "https://api.vworld.kr/req/address";

pub const DEFAULT_USER_AGENT: &str = "kraddr/0.1 (address-lookup)";

/// Process-level settings resolved once at startup.
///
/// The Juso confirm key lives here so it can be injected into the client
/// explicitly; nothing downstream reads the environment on its own.
#[derive(Clone)]
pub struct AppConfig {
    pub juso_confirm_key: Option<String>,
    pub log_level: String,
    /// `None` leaves requests unbounded; cancellation is the caller's job.
    pub request_timeout_secs: Option<u64>,
    pub user_agent: String,
    pub juso_endpoint: String,
    pub vworld_endpoint: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            juso_confirm_key: None,
            log_level: "info".to_string(),
            request_timeout_secs: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            juso_endpoint: DEFAULT_JUSO_ENDPOINT.to_string(),
            vworld_endpoint: DEFAULT_VWORLD_ENDPOINT.to_string(),
        }
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field(
                "juso_confirm_key",
                &self.juso_confirm_key.as_ref().map(|_| "[redacted]"),
            )
            .field("log_level", &self.log_level)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("juso_endpoint", &self.juso_endpoint)
            .field("vworld_endpoint", &self.vworld_endpoint)
            .finish()
    }
}
