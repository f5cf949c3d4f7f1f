//! Client configuration

/// Client configuration for connecting to the catalog backend
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL (e.g., "http://localhost:8080")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Translation assist endpoint; `None` disables the assist entirely
    pub translate_url: Option<String>,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: 30,
            translate_url: None,
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Set the translation assist endpoint
    pub fn with_translate_url(mut self, url: impl Into<String>) -> Self {
        self.translate_url = Some(url.into());
        self
    }

    /// Create a catalog client from this configuration
    pub fn build_client(&self) -> super::ClientResult<super::CatalogClient> {
        super::CatalogClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:8080")
    }
}
