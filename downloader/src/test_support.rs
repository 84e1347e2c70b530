/// Shared test doubles: a one-shot local HTTP server standing in for the
/// asset host, plus fake tools and downloaders for driving the pipeline.
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use bootanim_shared::errors::{ItemError, ItemResult};
use bootanim_shared::models::{Resolution, SourceKind};

use crate::fetch::Downloader;
use crate::workers::{Encoder, ExternalTool};

pub struct TestServer {
    pub base_url: String,
    handle: JoinHandle<Option<String>>,
}

impl TestServer {
    /// The request line the server received, e.g. `GET /path HTTP/1.1`.
    pub async fn request_line(self) -> Option<String> {
        self.handle.await.ok().flatten()
    }
}

/// Serve exactly one response with the given status and body.
pub async fn serve_once(status: u16, body: Vec<u8>) -> TestServer {
    let advertised = body.len();
    serve(status, advertised, body).await
}

/// Advertise `advertised` bytes, send `body`, then hang up.
pub async fn serve_truncated(advertised: usize, body: Vec<u8>) -> TestServer {
    serve(200, advertised, body).await
}

async fn serve(status: u16, advertised: usize, body: Vec<u8>) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.ok()?;

        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = socket.read(&mut buf).await.ok()?;
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }

        let head = format!(
            "HTTP/1.1 {} Test\r\nContent-Type: application/octet-stream\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            status, advertised
        );
        socket.write_all(head.as_bytes()).await.ok()?;
        socket.write_all(&body).await.ok()?;
        let _ = socket.shutdown().await;

        String::from_utf8_lossy(&request).lines().next().map(String::from)
    });

    TestServer {
        base_url: format!("http://{}", addr),
        handle,
    }
}

/// HTTP client that ignores proxy settings from the environment.
pub fn test_client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

/// What the fake encoder does when called.
#[derive(Clone, Copy)]
pub enum EncodeBehavior {
    WriteOutput,
    Fail,
    /// Writes the output and removes the input, so cleanup finds nothing.
    ConsumeInput,
    /// Writes the output and puts a non-empty directory where the input
    /// was, so deleting it fails.
    ReplaceInputWithDir,
}

pub struct FakeEncoder {
    behavior: EncodeBehavior,
    pub calls: AtomicUsize,
    pub saw_raw: Mutex<Vec<bool>>,
}

impl FakeEncoder {
    pub fn new(behavior: EncodeBehavior) -> Arc<Self> {
        Arc::new(Self {
            behavior,
            calls: AtomicUsize::new(0),
            saw_raw: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl ExternalTool for FakeEncoder {
    fn name(&self) -> &str {
        "fake-ffmpeg"
    }
    fn install_hints(&self) -> &[&'static str] {
        &[]
    }
    async fn probe_version(&self) -> Option<String> {
        Some("fake".into())
    }
}

#[async_trait]
impl Encoder for FakeEncoder {
    async fn encode(&self, input: &Path, output: &Path, resolution: Resolution) -> ItemResult<()> {
        assert_eq!(resolution, Resolution::FULL_HD);
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.saw_raw.lock().unwrap().push(input.is_file());
        match self.behavior {
            EncodeBehavior::WriteOutput => {
                std::fs::write(output, b"mp4")?;
                Ok(())
            }
            EncodeBehavior::Fail => Err(ItemError::ToolExited {
                tool: "ffmpeg".into(),
                code: Some(1),
                detail: "Invalid data found when processing input".into(),
            }),
            EncodeBehavior::ConsumeInput => {
                std::fs::write(output, b"mp4")?;
                std::fs::remove_file(input)?;
                Ok(())
            }
            EncodeBehavior::ReplaceInputWithDir => {
                std::fs::write(output, b"mp4")?;
                std::fs::remove_file(input)?;
                std::fs::create_dir(input)?;
                std::fs::write(input.join("keep"), b"x")?;
                Ok(())
            }
        }
    }
}

/// Writes fixed bytes to the destination, or fails.
pub struct FakeDownloader {
    source: SourceKind,
    succeed: bool,
    pub calls: AtomicUsize,
}

impl FakeDownloader {
    pub fn new(source: SourceKind, succeed: bool) -> Arc<Self> {
        Arc::new(Self {
            source,
            succeed,
            calls: AtomicUsize::new(0),
        })
    }
}

#[async_trait]
impl Downloader for FakeDownloader {
    fn source(&self) -> SourceKind {
        self.source
    }

    async fn download(&self, _url: &str, dest: &Path) -> ItemResult<PathBuf> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.succeed {
            return Err(ItemError::ToolExited {
                tool: "yt-dlp".into(),
                code: Some(1),
                detail: "Video unavailable".into(),
            });
        }
        std::fs::write(dest, b"X")?;
        Ok(dest.to_path_buf())
    }
}

/// External tool that is never found on PATH.
pub struct AbsentTool(pub &'static str);

#[async_trait]
impl ExternalTool for AbsentTool {
    fn name(&self) -> &str {
        self.0
    }
    fn install_hints(&self) -> &[&'static str] {
        &["install it"]
    }
    async fn probe_version(&self) -> Option<String> {
        None
    }
}
