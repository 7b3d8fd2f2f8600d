// src/fetch.rs

//! Archive download layer.
//!
//! The pipeline only needs "put this archive on local disk", so the seam
//! is a single-method trait; tests swap in a fixture-writing fetcher.

use std::path::Path;

use async_trait::async_trait;
use reqwest::Client;
use tokio::io::AsyncWriteExt;

use crate::error::{AppError, Result};
use crate::models::FetchConfig;

/// Downloads one archive to a local destination.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetch the archive identified by `item` into `dest`, replacing any
    /// existing file.
    async fn fetch(&self, item: &str, dest: &Path) -> Result<()>;
}

/// HTTP fetcher resolving archive identifiers against a base URL.
pub struct HttpFetcher {
    client: Client,
    base_url: String,
}

impl HttpFetcher {
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, item: &str, dest: &Path) -> Result<()> {
        let url = format!("{}/{}", self.base_url, item.trim_start_matches('/'));
        log::debug!("Downloading {url}");

        let mut response = self
            .client
            .get(&url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| AppError::fetch(item, e))?;

        // Stream straight to disk; WET archives run to hundreds of MB.
        let mut file = tokio::fs::File::create(dest).await?;
        while let Some(chunk) = response
            .chunk()
            .await
            .map_err(|e| AppError::fetch(item, e))?
        {
            file.write_all(&chunk).await?;
        }
        file.flush().await?;

        Ok(())
    }
}
