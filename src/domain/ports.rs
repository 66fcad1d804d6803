use crate::utils::error::Result;
use async_trait::async_trait;
use url::Url;

/// Retrieves a markup document by absolute URL.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    async fn fetch_document(&self, url: &Url) -> Result<String>;
}

pub trait ConfigProvider: Send + Sync {
    fn container_id(&self) -> &str;
    fn listing_path(&self) -> &str;
    fn card_selector(&self) -> &str;
    fn pickup_count(&self) -> usize;
}
