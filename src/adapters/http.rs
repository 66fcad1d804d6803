use crate::domain::ports::DocumentSource;
use crate::utils::error::{PickupError, Result};
use async_trait::async_trait;
use reqwest::Client;
use url::Url;

/// GETs documents over HTTP. No timeout and no retry: a request resolves,
/// fails, or the caller goes away.
#[derive(Debug, Clone, Default)]
pub struct HttpDocumentSource {
    client: Client,
}

impl HttpDocumentSource {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

#[async_trait]
impl DocumentSource for HttpDocumentSource {
    async fn fetch_document(&self, url: &Url) -> Result<String> {
        tracing::debug!("Requesting document: {}", url);
        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        tracing::debug!("Document response status: {}", status);

        if !status.is_success() {
            return Err(PickupError::ListingStatusError {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}
