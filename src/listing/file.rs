//! Local file listing source

use crate::listing::traits::ListingSource;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::PathBuf;

/// Reads a listing saved to disk
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl ListingSource for FileSource {
    async fn fetch(&self) -> Result<String> {
        tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read {}", self.path.display()))
    }

    fn name(&self) -> &'static str {
        "file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_reads_listing_from_disk() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, r#"[{{"packageId": 1}}]"#).expect("write");

        let source = FileSource::new(file.path().to_path_buf());
        assert_eq!(
            source.fetch().await.expect("fetch"),
            r#"[{"packageId": 1}]"#
        );
    }

    #[tokio::test]
    async fn test_missing_file_names_path() {
        let source = FileSource::new(PathBuf::from("/nonexistent/packages.json"));
        let err = source.fetch().await.expect_err("should fail");
        assert!(err.to_string().contains("/nonexistent/packages.json"));
    }
}
