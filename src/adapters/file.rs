use crate::domain::ports::DocumentSource;
use crate::utils::error::{PickupError, Result};
use async_trait::async_trait;
use url::Url;

/// Reads `file://` documents from disk. Used to load a home page that is
/// being viewed locally; listing retrieval never goes through here.
#[derive(Debug, Clone, Default)]
pub struct FileDocumentSource;

#[async_trait]
impl DocumentSource for FileDocumentSource {
    async fn fetch_document(&self, url: &Url) -> Result<String> {
        let path = url.to_file_path().map_err(|_| PickupError::InvalidConfigValueError {
            field: "location".to_string(),
            value: url.to_string(),
            reason: "Not a local file URL".to_string(),
        })?;

        tracing::debug!("Reading document from disk: {}", path.display());
        Ok(tokio::fs::read_to_string(&path).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_reads_local_page() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("index.html");
        std::fs::write(&path, "<div id=\"pickup-container\"></div>").unwrap();

        let url = Url::from_file_path(&path).unwrap();
        let body = FileDocumentSource.fetch_document(&url).await.unwrap();
        assert!(body.contains("pickup-container"));
    }

    #[tokio::test]
    async fn test_rejects_http_url() {
        let url = Url::parse("http://localhost/index.html").unwrap();
        assert!(FileDocumentSource.fetch_document(&url).await.is_err());
    }
}
