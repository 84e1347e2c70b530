/// Per-item orchestration.
///
/// Each catalog entry is driven from `Pending` to a terminal `ItemState`
/// one transition at a time; the terminal state decides which summary
/// bucket the item lands in. Items run strictly in catalog order.
use std::sync::Arc;
use tracing::{error, info, warn};

use bootanim_shared::errors::ItemError;
use bootanim_shared::models::{CatalogEntry, ItemState, Resolution, RunSummary, SourceKind};
use bootanim_shared::source;

use crate::fetch::Downloader;
use crate::output::OutputLayout;
use crate::workers::Encoder;

pub struct Pipeline {
    layout: OutputLayout,
    resolution: Resolution,
    youtube: Arc<dyn Downloader>,
    steamdeckrepo: Arc<dyn Downloader>,
    encoder: Arc<dyn Encoder>,
}

impl Pipeline {
    pub fn new(
        layout: OutputLayout,
        resolution: Resolution,
        youtube: Arc<dyn Downloader>,
        steamdeckrepo: Arc<dyn Downloader>,
        encoder: Arc<dyn Encoder>,
    ) -> Self {
        Self {
            layout,
            resolution,
            youtube,
            steamdeckrepo,
            encoder,
        }
    }

    pub fn layout(&self) -> &OutputLayout {
        &self.layout
    }

    /// Process the whole catalog in order.
    pub async fn run(&self, catalog: &[CatalogEntry]) -> RunSummary {
        let mut summary = RunSummary::default();
        for entry in catalog {
            info!("{}", "=".repeat(50));
            info!("Processing: {} from {}", entry.name, entry.source_url);
            let state = self.process(entry).await;
            summary.record(entry.name, &state);
        }
        summary
    }

    /// Drive one entry to a terminal state.
    pub async fn process(&self, entry: &CatalogEntry) -> ItemState {
        let mut state = ItemState::Pending;
        while !state.is_terminal() {
            let next = self.advance(entry, state).await;
            info!(item = entry.name, state = next.label(), "transition");
            state = next;
        }
        report_outcome(entry, &state);
        state
    }

    /// Perform exactly one transition.
    pub async fn advance(&self, entry: &CatalogEntry, state: ItemState) -> ItemState {
        match state {
            ItemState::Pending => {
                if let Some(existing) = self.layout.existing_final(entry.name) {
                    return ItemState::Skipped { existing };
                }
                match source::classify(entry.source_url) {
                    SourceKind::Unsupported => ItemState::DownloadFailed {
                        reason: ItemError::UnsupportedSource(entry.source_url.to_string()).to_string(),
                    },
                    source => ItemState::Downloading { source },
                }
            }

            ItemState::Downloading { source } => {
                let downloader = match self.downloader_for(source) {
                    Some(d) => d,
                    None => {
                        return ItemState::DownloadFailed {
                            reason: ItemError::UnsupportedSource(entry.source_url.to_string()).to_string(),
                        }
                    }
                };
                let dest = self.layout.intermediate_path(entry.name);
                info!("Fetching {} via {} source", entry.name, downloader.source());
                match downloader.download(entry.source_url, &dest).await {
                    Ok(raw) => ItemState::Downloaded { raw },
                    Err(e) => ItemState::DownloadFailed { reason: e.to_string() },
                }
            }

            ItemState::Downloaded { raw } => ItemState::Converting { raw },

            ItemState::Converting { raw } => {
                if !raw.is_file() {
                    let reason = ItemError::MissingInput(raw.clone()).to_string();
                    return ItemState::ConvertFailed { raw, reason };
                }
                let output = self.layout.final_path(entry.name);
                match self.encoder.encode(&raw, &output, self.resolution).await {
                    Ok(()) => ItemState::Converted { raw, output },
                    Err(e) => ItemState::ConvertFailed { raw, reason: e.to_string() },
                }
            }

            ItemState::Converted { raw, output } => match remove_intermediate(&raw).await {
                Ok(()) => ItemState::CleanedUp { output },
                Err(e) => ItemState::CleanupWarning { output, reason: e.to_string() },
            },

            terminal => terminal,
        }
    }

    fn downloader_for(&self, source: SourceKind) -> Option<&Arc<dyn Downloader>> {
        match source {
            SourceKind::YouTube => Some(&self.youtube),
            SourceKind::SteamDeckRepo => Some(&self.steamdeckrepo),
            SourceKind::Unsupported => None,
        }
    }
}

async fn remove_intermediate(raw: &std::path::Path) -> Result<(), ItemError> {
    let cleanup = |reason: String| ItemError::Cleanup {
        path: raw.to_path_buf(),
        reason,
    };
    if !raw.exists() {
        return Err(cleanup("file not found".to_string()));
    }
    tokio::fs::remove_file(raw)
        .await
        .map_err(|e| cleanup(e.to_string()))?;
    info!("Deleted intermediate file: {}", raw.display());
    Ok(())
}

fn report_outcome(entry: &CatalogEntry, state: &ItemState) {
    match state {
        ItemState::Skipped { existing } => {
            info!("Skipping {} - MP4 already exists: {}", entry.name, existing.display())
        }
        ItemState::DownloadFailed { reason } => {
            error!("Failed to download {}: {}", entry.name, reason)
        }
        ItemState::ConvertFailed { raw, reason } => error!(
            "Failed to convert {}: {} (raw file kept at {})",
            entry.name,
            reason,
            raw.display()
        ),
        ItemState::CleanedUp { output } => {
            info!("Successfully processed and cleaned up {} -> {}", entry.name, output.display())
        }
        ItemState::CleanupWarning { reason, .. } => {
            warn!("Converted {} but failed to delete the intermediate file: {}", entry.name, reason)
        }
        _ => {}
    }
}
