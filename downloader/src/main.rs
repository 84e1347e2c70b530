/// Bootanim Downloader - Main Entry Point
///
/// Fetches the catalog of boot animation videos, normalizes each one to an
/// MP4 with ffmpeg, and removes the raw downloads. Items whose MP4 already
/// exists are skipped, so re-running only fills the gaps.
mod config;
mod fetch;
mod output;
mod pipeline;
mod preflight;
mod report;
mod workers;

#[cfg(test)]
mod test_support;

use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, info};

use bootanim_shared::catalog::CATALOG;
use bootanim_shared::errors::BootAnimResult;
use bootanim_shared::models::{CatalogEntry, Resolution, RunSummary};

use config::Settings;
use fetch::{SteamDeckRepoDownloader, YoutubeDownloader};
use output::OutputLayout;
use pipeline::Pipeline;
use report::Report;
use workers::{ExternalTool, Ffmpeg, YtDlp};

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bootanim_downloader=info,bootanim_shared=info".into()),
        )
        .init();

    info!("=== Bootanim Downloader Starting ===");

    let outcome = run().await;
    match &outcome {
        Ok(summary) => println!("\n{}", Report::new(summary, CATALOG.len())),
        Err(e) => error!("{:#}", e),
    }
    ExitCode::from(exit_status(&outcome))
}

/// 1 for a fatal error, 0 whenever the catalog loop completed.
fn exit_status<E>(outcome: &Result<RunSummary, E>) -> u8 {
    match outcome {
        Ok(_) => 0,
        Err(_) => 1,
    }
}

async fn run() -> anyhow::Result<RunSummary> {
    let settings = Settings::from_env();

    let ffmpeg = Arc::new(Ffmpeg::new(&settings.ffmpeg_bin));
    let ytdlp = Arc::new(YtDlp::new(&settings.ytdlp_bin));

    let client = reqwest::Client::builder()
        .user_agent(concat!("bootanim/", env!("CARGO_PKG_VERSION")))
        .build()?;

    let tools: [&dyn ExternalTool; 2] = [ffmpeg.as_ref(), ytdlp.as_ref()];
    let pipeline = Pipeline::new(
        OutputLayout::new(&settings.output_dir),
        Resolution::FULL_HD,
        Arc::new(YoutubeDownloader::new(ytdlp.clone())),
        Arc::new(SteamDeckRepoDownloader::new(client, &settings.steamdeckrepo_url)),
        ffmpeg.clone(),
    );

    Ok(execute(&tools, &pipeline, CATALOG).await?)
}

/// Fatal errors (missing tools, unusable output directory) surface here;
/// per-item failures only show up in the summary. Nothing touches the
/// filesystem or network until every tool has answered.
async fn execute(
    tools: &[&dyn ExternalTool],
    pipeline: &Pipeline,
    catalog: &[CatalogEntry],
) -> BootAnimResult<RunSummary> {
    preflight::check_tools(tools).await?;

    let layout = pipeline.layout();
    layout.ensure()?;
    info!("Output directory: {}", layout.dir().display());

    Ok(pipeline.run(catalog).await)
}
