use std::env;
use std::time::Duration;

pub const ENV_BIOCAT_BASE_URL: &str = "BIOCAT_BASE_URL";
pub const ENV_BIOCAT_TIMEOUT_MS: &str = "BIOCAT_TIMEOUT_MS";

const DEFAULT_BASE_URL: &str = "https://vcell.cam.uchc.edu/api/v0";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub request_timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(5),
            user_agent: format!("biocat/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

fn env_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

impl ClientConfig {
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let base_url = env::var(ENV_BIOCAT_BASE_URL)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.base_url);
        let timeout_ms = env_u64(
            ENV_BIOCAT_TIMEOUT_MS,
            defaults.request_timeout.as_millis() as u64,
        );
        Self {
            base_url,
            request_timeout: Duration::from_millis(timeout_ms),
            user_agent: defaults.user_agent,
        }
    }

    #[must_use]
    pub fn with_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = request_timeout;
        self
    }
}
