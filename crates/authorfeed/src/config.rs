use crate::render::STYLE_BLOCK;
use std::time::Duration;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
pub const USER_AGENT: &str = "BlueskyEmbed/1.0";

/// Client and renderer settings. `Default` gives the production values.
#[derive(Debug, Clone)]
pub struct EmbedConfig {
    pub api_base: String,
    pub style_block: String,
    /// `None` waits indefinitely.
    pub timeout: Option<Duration>,
    pub user_agent: String,
}

impl Default for EmbedConfig {
    fn default() -> Self {
        Self {
            api_base: bsky_core::API_BASE.to_string(),
            style_block: STYLE_BLOCK.to_string(),
            timeout: Some(DEFAULT_TIMEOUT),
            user_agent: USER_AGENT.to_string(),
        }
    }
}

impl EmbedConfig {
    /// `BSKY_EMBED_TIMEOUT_SECS` overrides the timeout; `0` disables it.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(raw) = std::env::var("BSKY_EMBED_TIMEOUT_SECS") {
            config.timeout = parse_timeout(&raw);
        }

        config
    }

    /// Builds the HTTP client used by [`crate::api::BlueskyFetcher`].
    pub fn http_client(&self) -> reqwest::Result<reqwest::Client> {
        let mut builder = reqwest::Client::builder().user_agent(self.user_agent.clone());
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        builder.build()
    }
}

/// Seconds as text. `0` means no timeout; anything unparsable keeps the default.
fn parse_timeout(raw: &str) -> Option<Duration> {
    match raw.trim().parse::<u64>() {
        Ok(0) => None,
        Ok(secs) => Some(Duration::from_secs(secs)),
        Err(_) => {
            tracing::warn!(
                "Ignoring invalid BSKY_EMBED_TIMEOUT_SECS={:?}, using default",
                raw
            );
            Some(DEFAULT_TIMEOUT)
        }
    }
}
