//! HTTP implementation of the content-type probe.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;
use url::Url;

use crate::domain::probe::ContentProbe;

/// Error type for probe construction failures.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Probes remote resources with a `HEAD` request and reads the declared
/// `content-type` header.
///
/// Only the header is inspected: the response status is ignored, and any
/// transport failure (DNS, connect, TLS, timeout) yields `None`.
///
/// Requests go to user-supplied URLs, loopback and link-local included; deploy
/// only where outbound traffic is restricted.
pub struct HttpContentProbe {
    client: reqwest::Client,
}

impl HttpContentProbe {
    /// Creates a probe with the given request timeout and `User-Agent`.
    ///
    /// Without a timeout, a probe waits as long as the connection stays open.
    ///
    /// # Errors
    ///
    /// Returns [`ProbeError::Client`] if the TLS backend cannot be initialized.
    pub fn new(timeout: Option<Duration>, user_agent: &str) -> Result<Self, ProbeError> {
        let mut builder = reqwest::Client::builder().user_agent(user_agent);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
        })
    }

    /// Creates a probe reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ContentProbe for HttpContentProbe {
    async fn content_type(&self, url: &Url) -> Option<String> {
        let response = match self.client.head(url.as_str()).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(url = %url, error = %e, "Image probe request failed");
                return None;
            }
        };

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        tracing::debug!(
            url = %url,
            status = response.status().as_u16(),
            content_type = content_type.as_deref().unwrap_or("-"),
            "Image probe completed"
        );

        content_type
    }
}
