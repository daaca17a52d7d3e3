use async_trait::async_trait;
use futures_util::StreamExt;
use reqwest::Client;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

use super::Fetcher;
use crate::config::HttpConfig;
use crate::error::FetchError;

/// Plain HTTP GET fetcher writing through a same-directory temp file.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &HttpConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .connect_timeout(config.timeout())
            .read_timeout(config.timeout())
            .build()?;
        Ok(Self { client })
    }

    /// Temp file next to `dest` so the final rename never crosses filesystems.
    fn temp_file_for(dest: &Path) -> Result<NamedTempFile, FetchError> {
        let dir = match dest.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)
            .map_err(|e| FetchError::io("failed to create directory", dir, e))?;

        let name = dest
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        tempfile::Builder::new()
            .prefix(&format!(".{}.", name))
            .suffix(".part")
            .tempfile_in(dir)
            .map_err(|e| FetchError::io("failed to create temporary file in", dir, e))
    }

    async fn stream_to(&self, url: &str, file: &mut File, file_path: &Path) -> Result<u64, FetchError> {
        let transport = |source| FetchError::Transport {
            url: url.to_string(),
            source,
        };

        let response = self.client.get(url).send().await.map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        tracing::debug!(
            url,
            content_length = ?response.content_length(),
            "streaming response body"
        );

        let mut downloaded: u64 = 0;
        let mut stream = response.bytes_stream();

        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(transport)?;
            file.write_all(&chunk)
                .map_err(|e| FetchError::io("failed to write", file_path, e))?;
            downloaded += chunk.len() as u64;
        }

        file.flush()
            .map_err(|e| FetchError::io("failed to write", file_path, e))?;
        Ok(downloaded)
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str, dest: &Path) -> Result<u64, FetchError> {
        // Dropping `tmp` on any early return removes the partial file.
        let mut tmp = Self::temp_file_for(dest)?;
        let tmp_path = tmp.path().to_path_buf();

        let downloaded = self.stream_to(url, tmp.as_file_mut(), &tmp_path).await?;
        if downloaded == 0 {
            return Err(FetchError::Empty {
                url: url.to_string(),
            });
        }

        tmp.persist(dest)
            .map_err(|e| FetchError::io("failed to move download into", dest, e.error))?;

        tracing::debug!(
            from = %tmp_path.display(),
            to = %dest.display(),
            bytes = downloaded,
            "renamed download into place"
        );
        Ok(downloaded)
    }
}
