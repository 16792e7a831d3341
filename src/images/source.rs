use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::config::ApiConfig;

use super::{ImageError, Thumbnail};

/// Fetches and decodes a picture by URL.
#[async_trait]
pub trait ImageSource: Send + Sync {
    async fn load(&self, url: &str) -> Result<Thumbnail, ImageError>;
}

pub struct HttpImageSource {
    client: Client,
}

impl HttpImageSource {
    pub fn new(config: &ApiConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds as u64))
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds as u64))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl ImageSource for HttpImageSource {
    async fn load(&self, url: &str) -> Result<Thumbnail, ImageError> {
        let transport = |source: reqwest::Error| ImageError::Transport {
            url: url.to_string(),
            source,
        };

        let response = self.client.get(url).send().await.map_err(transport)?;
        let status = response.status();
        if !status.is_success() {
            return Err(ImageError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        let bytes = response.bytes().await.map_err(transport)?;

        // Decoding is CPU-bound; keep it off the async workers.
        let thumbnail = tokio::task::spawn_blocking(move || Thumbnail::decode(&bytes))
            .await
            .map_err(|_| ImageError::Aborted)??;
        tracing::trace!(url, width = thumbnail.width(), height = thumbnail.height(), "Image decoded");
        Ok(thumbnail)
    }
}
