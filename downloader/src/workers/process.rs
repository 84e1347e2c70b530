/// Blocking-until-exit subprocess helpers for the external media tools.
///
/// Stdout is discarded, stderr is forwarded to tracing logs line by line
/// and its tail is kept for the failure message.
use std::collections::VecDeque;
use std::ffi::OsStr;
use std::process::Stdio;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command;
use tracing::debug;

use bootanim_shared::errors::{ItemError, ItemResult};

/// Stderr lines kept for error reporting.
const STDERR_TAIL_LINES: usize = 5;

/// Run a tool to completion. Non-zero exit is an error.
pub async fn run_tool<I, S>(program: &str, args: I, tool: &str) -> ItemResult<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(|source| ItemError::Spawn {
            tool: tool.to_string(),
            source,
        })?;

    debug!("{} spawned (pid: {:?})", tool, child.id());

    let mut tail: VecDeque<String> = VecDeque::with_capacity(STDERR_TAIL_LINES);
    if let Some(stderr) = child.stderr.take() {
        let mut segments = BufReader::new(stderr).split(b'\n');
        while let Some(raw) = segments.next_segment().await? {
            let line = String::from_utf8_lossy(&raw);
            // ffmpeg redraws its stats line with '\r'; keep only the latest frame
            let line = line.rsplit('\r').next().unwrap_or_default().trim().to_string();
            if line.is_empty() {
                continue;
            }
            debug!(tool = tool, "{}", line);
            if tail.len() == STDERR_TAIL_LINES {
                tail.pop_front();
            }
            tail.push_back(line);
        }
    }

    let status = child.wait().await?;
    if status.success() {
        return Ok(());
    }

    Err(ItemError::ToolExited {
        tool: tool.to_string(),
        code: status.code(),
        detail: tail.into_iter().collect::<Vec<_>>().join(" | "),
    })
}

/// Query a tool's version. `None` means the program could not be started;
/// a tool that starts but exits non-zero still counts as present.
pub async fn probe_version(program: &str, version_arg: &str) -> Option<String> {
    let output = Command::new(program)
        .arg(version_arg)
        .stdin(Stdio::null())
        .output()
        .await
        .ok()?;

    let first_line = |bytes: &[u8]| {
        String::from_utf8_lossy(bytes)
            .lines()
            .map(str::trim)
            .find(|l| !l.is_empty())
            .map(String::from)
    };

    Some(
        first_line(&output.stdout)
            .or_else(|| first_line(&output.stderr))
            .unwrap_or_else(|| "unknown version".to_string()),
    )
}
