/// yt-dlp adapter for video-sharing site downloads.
use async_trait::async_trait;
use std::ffi::OsString;
use std::path::Path;
use tracing::info;

use bootanim_shared::errors::ItemResult;
use bootanim_shared::models::FormatPreference;

use super::process::{probe_version, run_tool};
use super::{ExternalTool, Extractor};

const INSTALL_HINTS: &[&str] = &[
    "pip install yt-dlp",
    "macOS: brew install yt-dlp",
];

pub struct YtDlp {
    bin: String,
}

impl YtDlp {
    pub fn new(bin: impl Into<String>) -> Self {
        Self { bin: bin.into() }
    }
}

/// Command-line arguments for one download.
pub fn extract_args(url: &str, out: &Path, format: &FormatPreference) -> Vec<OsString> {
    vec![
        "-f".into(),
        format.to_string().into(),
        "-o".into(),
        out.as_os_str().to_os_string(),
        url.into(),
    ]
}

#[async_trait]
impl ExternalTool for YtDlp {
    fn name(&self) -> &str {
        "yt-dlp"
    }

    fn install_hints(&self) -> &[&'static str] {
        INSTALL_HINTS
    }

    async fn probe_version(&self) -> Option<String> {
        probe_version(&self.bin, "--version").await
    }
}

#[async_trait]
impl Extractor for YtDlp {
    async fn extract(&self, url: &str, out: &Path, format: &FormatPreference) -> ItemResult<()> {
        info!("Downloading YouTube video: {}", url);
        run_tool(&self.bin, extract_args(url, out, format), self.name()).await?;
        info!("Downloaded to {}", out.display());
        Ok(())
    }
}
