/// Source URL classification.
///
/// Pure string inspection: decides which download strategy a catalog URL
/// needs and derives the direct-download URL for the asset host.
use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

use crate::errors::{ItemError, ItemResult};
use crate::models::SourceKind;

// ====== DOMAIN PATTERNS ======

static YOUTUBE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"youtube\.com|youtu\.be").unwrap()
});

static STEAMDECKREPO_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"steamdeckrepo\.com").unwrap()
});

/// Pick the download strategy for a URL. YouTube wins if both match.
pub fn classify(url: &str) -> SourceKind {
    if YOUTUBE_RE.is_match(url) {
        SourceKind::YouTube
    } else if STEAMDECKREPO_RE.is_match(url) {
        SourceKind::SteamDeckRepo
    } else {
        SourceKind::Unsupported
    }
}

/// Extract the post identifier from an asset-host page URL.
///
/// `https://steamdeckrepo.com/post/QEzrE/playstation_1` -> `QEzrE`
/// (second-to-last path segment).
pub fn post_id(url: &str) -> ItemResult<String> {
    let malformed = || ItemError::MalformedSourceUrl(url.to_string());

    let parsed = Url::parse(url).map_err(|_| malformed())?;
    let segments: Vec<&str> = parsed
        .path_segments()
        .ok_or_else(malformed)?
        .filter(|s| !s.is_empty())
        .collect();

    if segments.len() < 2 {
        return Err(malformed());
    }
    Ok(segments[segments.len() - 2].to_string())
}

/// Build the direct-download URL for a post id.
pub fn download_url(base: &str, id: &str) -> String {
    format!("{}/post/download/{}", base.trim_end_matches('/'), id)
}
