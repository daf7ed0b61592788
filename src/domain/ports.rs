use crate::error::Result;
use async_trait::async_trait;

/// Outbound HTTP port: posts a form body and hands back the raw reply.
///
/// Implementations surface network, TLS and non-2xx failures as
/// `GatewayError::TransportError`; nothing is retried.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post(&self, url: &str, body: &str) -> Result<String>;
}

pub type TransportBox = Box<dyn Transport>;
