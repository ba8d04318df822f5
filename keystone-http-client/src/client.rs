//! HTTP client implementation.

use async_trait::async_trait;
use http::{HeaderValue, header};
use std::sync::Arc;
use tracing::debug;

use crate::{
    BodyEncoding, FormRequest, HttpClientConfig, HttpClientError, Response, Result, Transport,
};

/// reqwest-backed form transport.
///
/// Sends each submission exactly once. There is no retry: a failed
/// submission is retried by the user submitting again.
#[derive(Clone)]
pub struct HttpClient {
    inner: reqwest::Client,
    config: Arc<HttpClientConfig>,
}

impl HttpClient {
    /// Create a new HTTP client with the given configuration.
    pub fn new(config: HttpClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .user_agent(&config.user_agent);

        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if config.follow_redirects {
            builder = builder.redirect(reqwest::redirect::Policy::limited(config.max_redirects));
        } else {
            builder = builder.redirect(reqwest::redirect::Policy::none());
        }

        let inner = builder
            .build()
            .map_err(|e| HttpClientError::RequestBuild(e.to_string()))?;

        Ok(Self {
            inner,
            config: Arc::new(config),
        })
    }

    /// Create a new HTTP client with default configuration.
    pub fn default_client() -> Result<Self> {
        Self::new(HttpClientConfig::default())
    }

    /// Get the client configuration.
    pub fn config(&self) -> &HttpClientConfig {
        &self.config
    }

    /// Resolve the request URL against the configured base URL.
    fn build_url(&self, target: &str) -> Result<url::Url> {
        match &self.config.base_url {
            Some(base) => {
                let base = url::Url::parse(base)
                    .map_err(|e| HttpClientError::InvalidUrl(e.to_string()))?;
                base.join(target)
                    .map_err(|e| HttpClientError::InvalidUrl(e.to_string()))
            }
            None => url::Url::parse(target).map_err(|e| HttpClientError::InvalidUrl(e.to_string())),
        }
    }

    fn build_request(&self, request: FormRequest) -> Result<reqwest::RequestBuilder> {
        let mut url = self.build_url(request.url())?;
        let encoding = request.body_encoding().unwrap_or(self.config.encoding);

        if request.uses_query() && !request.field_pairs().is_empty() {
            let mut query = url.query_pairs_mut();
            for (key, value) in request.field_pairs() {
                query.append_pair(key, value);
            }
        }

        let mut builder = self
            .inner
            .request(request.method().clone(), url)
            .header(header::ACCEPT, HeaderValue::from_static("application/json"));

        for (name, value) in &self.config.default_headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        if request.uses_query() {
            return Ok(builder);
        }

        builder = match encoding {
            BodyEncoding::Multipart => {
                let form = request
                    .field_pairs()
                    .iter()
                    .fold(reqwest::multipart::Form::new(), |form, (k, v)| {
                        form.text(k.clone(), v.clone())
                    });
                builder.multipart(form)
            }
            BodyEncoding::UrlEncoded => {
                let body = serde_urlencoded::to_string(request.field_pairs())
                    .map_err(|e| HttpClientError::RequestBuild(e.to_string()))?;
                builder
                    .header(
                        header::CONTENT_TYPE,
                        HeaderValue::from_static("application/x-www-form-urlencoded"),
                    )
                    .body(body)
            }
        };

        Ok(builder)
    }
}

#[async_trait]
impl Transport for HttpClient {
    async fn send(&self, request: FormRequest) -> Result<Response> {
        debug!(
            method = %request.method(),
            url = %request.url(),
            fields = request.field_pairs().len(),
            "Sending form submission"
        );

        let response = self.build_request(request)?.send().await?;
        Ok(Response::from_reqwest(response).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_client_creation() {
        let client = HttpClient::default_client().unwrap();
        assert!(client.config().timeout.is_none());
    }

    #[test]
    fn test_client_with_config() {
        let config = HttpClientConfig::builder()
            .connect_timeout(Duration::from_secs(3))
            .base_url("https://forms.example.org")
            .build();

        let client = HttpClient::new(config).unwrap();
        assert_eq!(client.config().connect_timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_relative_action_needs_base() {
        let client = HttpClient::default_client().unwrap();
        assert!(matches!(
            client.build_url("/f/contact"),
            Err(HttpClientError::InvalidUrl(_))
        ));

        let client = HttpClient::new(
            HttpClientConfig::builder()
                .base_url("https://forms.example.org/")
                .build(),
        )
        .unwrap();
        assert_eq!(
            client.build_url("/f/contact").unwrap().as_str(),
            "https://forms.example.org/f/contact"
        );
    }
}
