pub mod http;

use async_trait::async_trait;
use std::path::Path;

use crate::error::FetchError;

/// Downloads one URL to a destination path, all or nothing.
///
/// On success the destination holds the complete body and the byte count is
/// returned. On failure the destination is left exactly as it was.
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str, dest: &Path) -> Result<u64, FetchError>;
}

pub use http::HttpFetcher;
