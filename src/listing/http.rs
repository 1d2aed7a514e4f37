//! HTTP(S) listing source

use crate::listing::traits::ListingSource;
use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use reqwest::Client;

/// Fetches a listing with a single GET request
pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    pub fn new(url: String) -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { client, url })
    }
}

#[async_trait]
impl ListingSource for HttpSource {
    async fn fetch(&self) -> Result<String> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .with_context(|| format!("GET {} failed", self.url))?;

        let status = response.status();
        if !status.is_success() {
            bail!("GET {} returned {}", self.url, status);
        }

        response
            .text()
            .await
            .with_context(|| format!("Failed to read body from {}", self.url))
    }

    fn name(&self) -> &'static str {
        "HTTP"
    }
}
