/// Domain models shared across all Bootanim crates.
use std::fmt;
use std::path::PathBuf;

/// One named video in the compiled-in catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub source_url: &'static str,
}

impl CatalogEntry {
    pub const fn new(name: &'static str, source_url: &'static str) -> Self {
        Self { name, source_url }
    }
}

/// Download strategy selected for a source URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    /// Video-sharing site, fetched through the extraction tool.
    YouTube,
    /// Community asset host, fetched over plain HTTP.
    SteamDeckRepo,
    Unsupported,
}

impl SourceKind {
    pub fn is_supported(&self) -> bool {
        !matches!(self, SourceKind::Unsupported)
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceKind::YouTube => write!(f, "youtube"),
            SourceKind::SteamDeckRepo => write!(f, "steamdeckrepo"),
            SourceKind::Unsupported => write!(f, "unsupported"),
        }
    }
}

/// Target frame size for the normalized MP4.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    pub const FULL_HD: Resolution = Resolution { width: 1920, height: 1080 };

    /// Video filter argument for the encoder.
    pub fn scale_filter(&self) -> String {
        format!("scale={}:{}", self.width, self.height)
    }
}

impl Default for Resolution {
    fn default() -> Self {
        Self::FULL_HD
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Format selector handed to the extraction tool.
///
/// Best combined video+audio in the container, then best single file in the
/// container, then best of anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatPreference {
    pub container: String,
}

impl Default for FormatPreference {
    fn default() -> Self {
        Self { container: "webm".to_string() }
    }
}

impl fmt::Display for FormatPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = &self.container;
        write!(f, "bestvideo[ext={c}]+bestaudio[ext={c}]/best[ext={c}]/best")
    }
}

/// Per-item pipeline state.
///
/// `Pending -> Skipped | Downloading -> DownloadFailed | Downloaded ->
/// Converting -> ConvertFailed | Converted -> CleanedUp | CleanupWarning`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemState {
    Pending,
    Skipped { existing: PathBuf },
    Downloading { source: SourceKind },
    DownloadFailed { reason: String },
    Downloaded { raw: PathBuf },
    Converting { raw: PathBuf },
    /// The raw download stays on disk in this state.
    ConvertFailed { raw: PathBuf, reason: String },
    Converted { raw: PathBuf, output: PathBuf },
    CleanedUp { output: PathBuf },
    CleanupWarning { output: PathBuf, reason: String },
}

/// Summary bucket a terminal state is counted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    Successful,
    Skipped,
    Failed,
}

impl ItemState {
    pub fn is_terminal(&self) -> bool {
        self.bucket().is_some()
    }

    pub fn bucket(&self) -> Option<Bucket> {
        match self {
            ItemState::Skipped { .. } => Some(Bucket::Skipped),
            ItemState::DownloadFailed { .. } | ItemState::ConvertFailed { .. } => Some(Bucket::Failed),
            ItemState::CleanedUp { .. } | ItemState::CleanupWarning { .. } => Some(Bucket::Successful),
            ItemState::Pending
            | ItemState::Downloading { .. }
            | ItemState::Downloaded { .. }
            | ItemState::Converting { .. }
            | ItemState::Converted { .. } => None,
        }
    }

    /// Short label for logs.
    pub fn label(&self) -> &'static str {
        match self {
            ItemState::Pending => "pending",
            ItemState::Skipped { .. } => "skipped",
            ItemState::Downloading { .. } => "downloading",
            ItemState::DownloadFailed { .. } => "download_failed",
            ItemState::Downloaded { .. } => "downloaded",
            ItemState::Converting { .. } => "converting",
            ItemState::ConvertFailed { .. } => "convert_failed",
            ItemState::Converted { .. } => "converted",
            ItemState::CleanedUp { .. } => "cleaned_up",
            ItemState::CleanupWarning { .. } => "cleanup_warning",
        }
    }
}

impl fmt::Display for ItemState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of one run over the catalog. Lives only for the process lifetime.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub successful: Vec<String>,
    pub skipped: Vec<String>,
    pub failed: Vec<String>,
    /// Successful items whose intermediate file could not be removed.
    pub warnings: Vec<(String, String)>,
}

impl RunSummary {
    /// Record a terminal state. Returns the bucket it landed in, or `None`
    /// (and records nothing) for a non-terminal state.
    pub fn record(&mut self, name: &str, state: &ItemState) -> Option<Bucket> {
        let bucket = state.bucket()?;
        match bucket {
            Bucket::Successful => self.successful.push(name.to_string()),
            Bucket::Skipped => self.skipped.push(name.to_string()),
            Bucket::Failed => self.failed.push(name.to_string()),
        }
        if let ItemState::CleanupWarning { reason, .. } = state {
            self.warnings.push((name.to_string(), reason.clone()));
        }
        Some(bucket)
    }

    pub fn total(&self) -> usize {
        self.successful.len() + self.skipped.len() + self.failed.len()
    }
}
