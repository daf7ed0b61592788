use crate::domain::ports::Transport;
use crate::error::{GatewayError, Result};
use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;
use tracing::debug;

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTPS transport backed by `reqwest` with rustls.
///
/// Cloning is cheap and shares the connection pool.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self { client })
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post(&self, url: &str, body: &str) -> Result<String> {
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(body.to_owned())
            .send()
            .await?;

        let status = response.status();
        debug!(%url, status = status.as_u16(), "gateway http response");

        if !status.is_success() {
            return Err(GatewayError::TransportError(format!(
                "Gateway returned HTTP {status}"
            )));
        }

        Ok(response.text().await?)
    }
}
