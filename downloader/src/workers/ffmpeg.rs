/// FFmpeg adapter: normalizes any downloaded video to a web-friendly MP4.
use async_trait::async_trait;
use std::ffi::OsString;
use std::path::Path;
use tracing::info;

use bootanim_shared::errors::ItemResult;
use bootanim_shared::models::Resolution;

use super::process::{probe_version, run_tool};
use super::{Encoder, ExternalTool};

const INSTALL_HINTS: &[&str] = &[
    "Windows: Install with Chocolatey: choco install ffmpeg",
    "macOS: Install with Homebrew: brew install ffmpeg",
    "Linux: Use your package manager, e.g., apt install ffmpeg",
];

pub struct Ffmpeg {
    bin: String,
}

impl Ffmpeg {
    pub fn new(bin: impl Into<String>) -> Self {
        Self { bin: bin.into() }
    }
}

/// H.264/AAC, yuv420p for player compatibility, scaled to the target size,
/// moov atom up front for progressive download. Overwrites `output`.
pub fn encode_args(input: &Path, output: &Path, resolution: Resolution) -> Vec<OsString> {
    vec![
        "-i".into(),
        input.as_os_str().to_os_string(),
        "-c:v".into(),
        "h264".into(),
        "-c:a".into(),
        "aac".into(),
        "-vf".into(),
        resolution.scale_filter().into(),
        "-pix_fmt".into(),
        "yuv420p".into(),
        "-movflags".into(),
        "+faststart".into(),
        "-y".into(),
        output.as_os_str().to_os_string(),
    ]
}

#[async_trait]
impl ExternalTool for Ffmpeg {
    fn name(&self) -> &str {
        "ffmpeg"
    }

    fn install_hints(&self) -> &[&'static str] {
        INSTALL_HINTS
    }

    async fn probe_version(&self) -> Option<String> {
        probe_version(&self.bin, "-version").await
    }
}

#[async_trait]
impl Encoder for Ffmpeg {
    async fn encode(&self, input: &Path, output: &Path, resolution: Resolution) -> ItemResult<()> {
        info!("Converting {} at {}", input.display(), resolution);
        run_tool(&self.bin, encode_args(input, output, resolution), self.name()).await?;
        info!("Converted to {}", output.display());
        Ok(())
    }
}
