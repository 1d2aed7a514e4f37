//! Listing source abstraction for pluggable fetch backends

use anyhow::Result;
use async_trait::async_trait;

/// Something that can produce the raw JSON body of a listing
#[async_trait]
pub trait ListingSource: Send + Sync {
    /// Fetch the full listing body
    async fn fetch(&self) -> Result<String>;

    /// Human-readable name for this backend
    fn name(&self) -> &'static str;
}
