/// External tool adapters.
///
/// The pipeline only sees these traits, so tests swap in fakes and the real
/// tools stay behind `YtDlp` and `Ffmpeg`.
pub mod ffmpeg;
pub mod process;
pub mod ytdlp;

use async_trait::async_trait;
use std::path::Path;

use bootanim_shared::errors::ItemResult;
use bootanim_shared::models::{FormatPreference, Resolution};

/// A command-line tool that must be installed for the run to start.
#[async_trait]
pub trait ExternalTool: Send + Sync {
    fn name(&self) -> &str;

    /// Per-platform install instructions shown when the probe fails.
    fn install_hints(&self) -> &[&'static str];

    /// `None` if the tool cannot be started.
    async fn probe_version(&self) -> Option<String>;
}

/// Fetches a video page URL to a local file.
#[async_trait]
pub trait Extractor: ExternalTool {
    async fn extract(&self, url: &str, out: &Path, format: &FormatPreference) -> ItemResult<()>;
}

/// Normalizes a video file into the target MP4.
#[async_trait]
pub trait Encoder: ExternalTool {
    async fn encode(&self, input: &Path, output: &Path, resolution: Resolution) -> ItemResult<()>;
}

pub use ffmpeg::Ffmpeg;
pub use ytdlp::YtDlp;
