//! Admin runtime configuration
//!
//! # Environment variables
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | DOKON_API_URL | http://localhost:8080 | Catalog backend base URL |
//! | DOKON_DEFAULT_CHAT_ID | 7882316826 | Fallback chat id when none in the deep link |
//! | DOKON_REQUEST_TIMEOUT | 30 | Request timeout (seconds) |
//! | DOKON_TRANSLATE_URL | (unset) | Translation assist endpoint; unset disables it |
//! | DOKON_WORK_DIR | ./.dokon | Directory for local preference storage |

use dokon_client::ClientConfig;
use url::Url;

/// Admin application configuration
#[derive(Debug, Clone)]
pub struct AdminConfig {
    /// Catalog backend base URL
    pub base_url: String,
    /// Chat id used when the deep link carries none
    pub default_chat_id: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Translation assist endpoint
    pub translate_url: Option<String>,
    /// Directory for local preference storage
    pub work_dir: String,
}

impl AdminConfig {
    /// Load configuration from environment variables, with defaults
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("DOKON_API_URL")
                .unwrap_or_else(|_| "http://localhost:8080".into()),
            default_chat_id: std::env::var("DOKON_DEFAULT_CHAT_ID")
                .unwrap_or_else(|_| "7882316826".into()),
            timeout_secs: std::env::var("DOKON_REQUEST_TIMEOUT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            translate_url: std::env::var("DOKON_TRANSLATE_URL").ok(),
            work_dir: std::env::var("DOKON_WORK_DIR").unwrap_or_else(|_| "./.dokon".into()),
        }
    }

    /// Derive the HTTP client configuration
    pub fn client_config(&self) -> ClientConfig {
        let mut config = ClientConfig::new(&self.base_url).with_timeout(self.timeout_secs);
        if let Some(url) = &self.translate_url {
            config = config.with_translate_url(url);
        }
        config
    }

    /// Resolve the access-gate chat id from a startup deep link.
    ///
    /// Precedence: trailing numeric URL path segment, then the `chat_id`
    /// query parameter, then the configured fallback. Resolved exactly
    /// once at startup.
    pub fn resolve_chat_id(&self, deep_link: Option<&str>) -> String {
        let Some(link) = deep_link else {
            return self.default_chat_id.clone();
        };
        let Ok(url) = Url::parse(link) else {
            tracing::warn!(%link, "unparsable deep link, using default chat id");
            return self.default_chat_id.clone();
        };

        if let Some(segments) = url.path_segments() {
            let last = segments.filter(|s| !s.is_empty()).next_back();
            if let Some(segment) = last
                && !segment.is_empty()
                && segment.chars().all(|c| c.is_ascii_digit())
            {
                return segment.to_string();
            }
        }

        if let Some((_, value)) = url.query_pairs().find(|(k, _)| k == "chat_id")
            && !value.is_empty()
        {
            return value.into_owned();
        }

        self.default_chat_id.clone()
    }
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
