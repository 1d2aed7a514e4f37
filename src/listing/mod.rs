//! Listing retrieval for the drone and package feeds
//!
//! This module handles:
//! - Choosing a backend from the location given on the command line
//! - Fetching the raw listing body with a time budget

pub mod file;
pub mod http;
pub mod traits;

pub use file::FileSource;
pub use http::HttpSource;
pub use traits::ListingSource;

use anyhow::{anyhow, Result};
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, info};

/// Where a listing comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingLocation {
    Url(String),
    File(PathBuf),
}

impl ListingLocation {
    /// `http://` and `https://` locations are fetched over the network, anything else is a path
    pub fn parse(raw: &str) -> Self {
        if raw.starts_with("http://") || raw.starts_with("https://") {
            ListingLocation::Url(raw.to_string())
        } else {
            ListingLocation::File(PathBuf::from(raw))
        }
    }

    /// Create the backend that reads this location
    pub fn source(&self) -> Result<Box<dyn ListingSource>> {
        Ok(match self {
            ListingLocation::Url(url) => Box::new(HttpSource::new(url.clone())?),
            ListingLocation::File(path) => Box::new(FileSource::new(path.clone())),
        })
    }
}

impl fmt::Display for ListingLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListingLocation::Url(url) => write!(f, "{}", url),
            ListingLocation::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Fetch one listing, failing if it takes longer than `budget`
pub async fn fetch_listing(
    name: &str,
    location: &ListingLocation,
    budget: Duration,
) -> Result<String> {
    let source = location.source()?;
    debug!(
        "Fetching {} listing via {} from {}",
        name,
        source.name(),
        location
    );
    fetch_from(name, source.as_ref(), budget).await
}

async fn fetch_from(name: &str, source: &dyn ListingSource, budget: Duration) -> Result<String> {
    let body = timeout(budget, source.fetch())
        .await
        .map_err(|_| anyhow!("Timed out after {:?} fetching {} listing", budget, name))?
        .map_err(|e| e.context(format!("Failed to fetch {} listing", name)))?;

    info!("Got listing: {}.", name);
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_location_parsing() {
        assert_eq!(
            ListingLocation::parse("https://example.com/drones"),
            ListingLocation::Url("https://example.com/drones".into())
        );
        assert_eq!(
            ListingLocation::parse("http://localhost:8080/packages"),
            ListingLocation::Url("http://localhost:8080/packages".into())
        );
        assert_eq!(
            ListingLocation::parse("data/drones.json"),
            ListingLocation::File(PathBuf::from("data/drones.json"))
        );
    }

    #[tokio::test]
    async fn test_source_names() {
        let file = ListingLocation::parse("drones.json")
            .source()
            .expect("source");
        assert_eq!(file.name(), "file");

        let http = ListingLocation::parse("http://127.0.0.1:9/x")
            .source()
            .expect("source");
        assert_eq!(http.name(), "HTTP");
    }

    #[tokio::test]
    async fn test_fetch_listing_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "[]").expect("write");

        let location = ListingLocation::File(file.path().to_path_buf());
        let body = fetch_listing("drones", &location, Duration::from_secs(5))
            .await
            .expect("fetch");
        assert_eq!(body, "[]");
    }

    /// A feed that accepts the request and never answers
    struct StalledSource;

    #[async_trait::async_trait]
    impl ListingSource for StalledSource {
        async fn fetch(&self) -> Result<String> {
            std::future::pending().await
        }

        fn name(&self) -> &'static str {
            "stalled"
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_fetch_times_out() {
        let err = fetch_from("packages", &StalledSource, Duration::from_secs(30))
            .await
            .expect_err("should time out");
        let message = err.to_string();
        assert!(message.contains("Timed out"), "got: {}", message);
        assert!(message.contains("packages listing"), "got: {}", message);
    }

    #[tokio::test]
    async fn test_fetch_error_names_listing() {
        let location = ListingLocation::parse("/nonexistent/drones.json");
        let err = fetch_listing("drones", &location, Duration::from_secs(5))
            .await
            .expect_err("should fail");
        assert!(format!("{:#}", err).contains("drones listing"));
    }
}
