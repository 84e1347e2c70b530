/// Download strategies: direct HTTP for the asset host, yt-dlp for
/// video-sharing sites. Both write the raw video to the path they are given.
use async_trait::async_trait;
use futures_util::TryStreamExt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio_util::io::StreamReader;
use tracing::{info, warn};

use bootanim_shared::errors::{ItemError, ItemResult};
use bootanim_shared::models::{FormatPreference, SourceKind};
use bootanim_shared::source;

use crate::workers::Extractor;

/// Read size for streaming a response body to disk.
pub const CHUNK_SIZE: usize = 8192;

#[async_trait]
pub trait Downloader: Send + Sync {
    fn source(&self) -> SourceKind;

    /// Fetch `url` into `dest`; returns the path of the raw file.
    async fn download(&self, url: &str, dest: &Path) -> ItemResult<PathBuf>;
}

/// Direct download from the community asset host.
pub struct SteamDeckRepoDownloader {
    client: reqwest::Client,
    base_url: String,
}

impl SteamDeckRepoDownloader {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    async fn stream_to_file(&self, response: reqwest::Response, dest: &Path) -> ItemResult<u64> {
        let body = response.bytes_stream().map_err(std::io::Error::other);
        let reader = StreamReader::new(body);
        tokio::pin!(reader);

        let mut file = File::create(dest).await?;
        let mut buf = vec![0u8; CHUNK_SIZE];
        let mut written: u64 = 0;
        loop {
            let n = reader.read(&mut buf).await?;
            if n == 0 {
                break;
            }
            file.write_all(&buf[..n]).await?;
            written += n as u64;
        }
        file.flush().await?;
        Ok(written)
    }
}

#[async_trait]
impl Downloader for SteamDeckRepoDownloader {
    fn source(&self) -> SourceKind {
        SourceKind::SteamDeckRepo
    }

    async fn download(&self, url: &str, dest: &Path) -> ItemResult<PathBuf> {
        let id = source::post_id(url)?;
        let download_url = source::download_url(&self.base_url, &id);
        info!("Downloading from: {}", download_url);

        let response = self.client.get(&download_url).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!("Failed to download: {}", status);
            return Err(ItemError::HttpStatus(status.as_u16()));
        }

        match self.stream_to_file(response, dest).await {
            Ok(bytes) => {
                info!("Downloaded to {} ({} bytes)", dest.display(), bytes);
                Ok(dest.to_path_buf())
            }
            Err(e) => {
                // Never leave a truncated download behind.
                let _ = tokio::fs::remove_file(dest).await;
                Err(e)
            }
        }
    }
}

/// Video-sharing site download, delegated entirely to the extraction tool.
pub struct YoutubeDownloader {
    extractor: Arc<dyn Extractor>,
    format: FormatPreference,
}

impl YoutubeDownloader {
    pub fn new(extractor: Arc<dyn Extractor>) -> Self {
        Self {
            extractor,
            format: FormatPreference::default(),
        }
    }
}

#[async_trait]
impl Downloader for YoutubeDownloader {
    fn source(&self) -> SourceKind {
        SourceKind::YouTube
    }

    async fn download(&self, url: &str, dest: &Path) -> ItemResult<PathBuf> {
        self.extractor.extract(url, dest, &self.format).await?;
        Ok(dest.to_path_buf())
    }
}
