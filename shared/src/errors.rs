/// Unified error types for the Bootanim system.
use std::path::PathBuf;
use thiserror::Error;

/// Run-level error. Any of these halts the run before the catalog loop.
#[derive(Debug, Error)]
pub enum BootAnimError {
    #[error("Required tool(s) not found on PATH: {}", .tools.join(", "))]
    MissingTool { tools: Vec<String> },

    #[error("Failed to create output directory {}: {source}", .path.display())]
    DirectoryCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors scoped to a single catalog item.
///
/// The orchestrator turns every one of these into summary membership;
/// none of them abort the run.
#[derive(Debug, Error)]
pub enum ItemError {
    #[error("Unsupported URL format: {0}")]
    UnsupportedSource(String),

    #[error("Cannot derive a post id from {0}")]
    MalformedSourceUrl(String),

    #[error("Download failed with HTTP status {0}")]
    HttpStatus(u16),

    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Failed to spawn {tool}: {source}")]
    Spawn {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{tool} exited with {}{}", exit_label(.code), detail_suffix(.detail))]
    ToolExited {
        tool: String,
        code: Option<i32>,
        detail: String,
    },

    #[error("File not found: {}", .0.display())]
    MissingInput(PathBuf),

    #[error("Could not delete intermediate file {}: {reason}", .path.display())]
    Cleanup { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

fn detail_suffix(detail: &str) -> String {
    if detail.is_empty() {
        String::new()
    } else {
        format!(": {}", detail)
    }
}

/// Result type alias for run-level operations.
pub type BootAnimResult<T> = Result<T, BootAnimError>;

/// Result type alias for per-item operations.
pub type ItemResult<T> = Result<T, ItemError>;
