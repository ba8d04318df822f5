//! HTTP client configuration.

use crate::BodyEncoding;
use std::time::Duration;

/// HTTP client configuration.
#[derive(Debug, Clone)]
pub struct HttpClientConfig {
    /// Base URL that relative form actions are resolved against.
    pub base_url: Option<String>,
    /// Overall request timeout. `None` waits for the server indefinitely.
    pub timeout: Option<Duration>,
    /// Connection timeout.
    pub connect_timeout: Duration,
    /// Default headers for all requests.
    pub default_headers: Vec<(String, String)>,
    /// User agent string.
    pub user_agent: String,
    /// Follow redirects.
    pub follow_redirects: bool,
    /// Maximum redirects to follow.
    pub max_redirects: usize,
    /// Body encoding used when a request does not pick one.
    pub encoding: BodyEncoding,
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout: None,
            connect_timeout: Duration::from_secs(10),
            default_headers: Vec::new(),
            user_agent: format!("keystone-http-client/{}", env!("CARGO_PKG_VERSION")),
            follow_redirects: true,
            max_redirects: 10,
            encoding: BodyEncoding::Multipart,
        }
    }
}

impl HttpClientConfig {
    /// Create a new configuration builder.
    pub fn builder() -> HttpClientConfigBuilder {
        HttpClientConfigBuilder::default()
    }
}

/// Builder for HTTP client configuration.
#[derive(Debug, Default)]
pub struct HttpClientConfigBuilder {
    config: HttpClientConfig,
}

impl HttpClientConfigBuilder {
    /// Set the base URL for relative form actions.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = Some(url.into());
        self
    }

    /// Set an overall request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = Some(timeout);
        self
    }

    /// Set the connection timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = timeout;
        self
    }

    /// Add a default header for all requests.
    pub fn default_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.config.default_headers.push((name.into(), value.into()));
        self
    }

    /// Set the user agent string.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Enable or disable following redirects.
    pub fn follow_redirects(mut self, enable: bool) -> Self {
        self.config.follow_redirects = enable;
        self
    }

    /// Set the maximum number of redirects to follow.
    pub fn max_redirects(mut self, max: usize) -> Self {
        self.config.max_redirects = max;
        self
    }

    /// Set the default body encoding.
    pub fn encoding(mut self, encoding: BodyEncoding) -> Self {
        self.config.encoding = encoding;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> HttpClientConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_timeout_by_default() {
        let config = HttpClientConfig::default();
        assert!(config.timeout.is_none());
        assert_eq!(config.encoding, BodyEncoding::Multipart);
    }

    #[test]
    fn test_builder() {
        let config = HttpClientConfig::builder()
            .base_url("https://forms.example.org")
            .user_agent("keystone-test")
            .default_header("X-Site", "keystone")
            .encoding(BodyEncoding::UrlEncoded)
            .follow_redirects(false)
            .build();

        assert_eq!(config.base_url.as_deref(), Some("https://forms.example.org"));
        assert_eq!(config.user_agent, "keystone-test");
        assert_eq!(config.default_headers.len(), 1);
        assert_eq!(config.encoding, BodyEncoding::UrlEncoded);
        assert!(!config.follow_redirects);
    }
}
