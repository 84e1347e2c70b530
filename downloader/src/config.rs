//! Runtime settings. Every value defaults to the built-in constant, so an
//! empty environment gives the stock behaviour. The target resolution is
//! not configurable; it is always `Resolution::FULL_HD`.

use std::path::PathBuf;

pub const DEFAULT_OUTPUT_DIR: &str = "../../boot-animations/videos";
pub const DEFAULT_STEAMDECKREPO_URL: &str = "https://steamdeckrepo.com";

#[derive(Clone, Debug)]
pub struct Settings {
    /// Destination for intermediate and final files
    pub output_dir: PathBuf,
    /// Encoder executable
    pub ffmpeg_bin: String,
    /// Extraction tool executable
    pub ytdlp_bin: String,
    /// Asset host base URL used to build direct-download links
    pub steamdeckrepo_url: String,
}

impl Settings {
    /// Load settings from the process environment (after `.env`).
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            output_dir: PathBuf::from(var("BOOTANIM_OUTPUT_DIR", DEFAULT_OUTPUT_DIR)),
            ffmpeg_bin: var("BOOTANIM_FFMPEG_BIN", "ffmpeg"),
            ytdlp_bin: var("BOOTANIM_YTDLP_BIN", "yt-dlp"),
            steamdeckrepo_url: var("BOOTANIM_STEAMDECKREPO_URL", DEFAULT_STEAMDECKREPO_URL),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::from_lookup(|_| None);
        assert_eq!(settings.output_dir, PathBuf::from("../../boot-animations/videos"));
        assert_eq!(settings.ffmpeg_bin, "ffmpeg");
        assert_eq!(settings.ytdlp_bin, "yt-dlp");
        assert_eq!(settings.steamdeckrepo_url, "https://steamdeckrepo.com");
    }

    #[test]
    fn test_overrides() {
        let settings = Settings::from_lookup(lookup_from(&[
            ("BOOTANIM_OUTPUT_DIR", "/tmp/videos"),
            ("BOOTANIM_FFMPEG_BIN", "/opt/ffmpeg/bin/ffmpeg"),
        ]));
        assert_eq!(settings.output_dir, PathBuf::from("/tmp/videos"));
        assert_eq!(settings.ffmpeg_bin, "/opt/ffmpeg/bin/ffmpeg");
        assert_eq!(settings.ytdlp_bin, "yt-dlp");
    }

    #[test]
    fn test_blank_values_fall_back() {
        let settings = Settings::from_lookup(lookup_from(&[
            ("BOOTANIM_OUTPUT_DIR", "  "),
            ("BOOTANIM_YTDLP_BIN", ""),
        ]));
        assert_eq!(settings.output_dir, PathBuf::from(DEFAULT_OUTPUT_DIR));
        assert_eq!(settings.ytdlp_bin, "yt-dlp");
    }

    #[test]
    fn test_resolution_variable_cannot_abort_the_run() {
        // Stray resolution values are ignored rather than rejected.
        let settings = Settings::from_lookup(lookup_from(&[("BOOTANIM_RESOLUTION", "4k")]));
        assert_eq!(settings.output_dir, PathBuf::from(DEFAULT_OUTPUT_DIR));
        assert_eq!(settings.ffmpeg_bin, "ffmpeg");
    }
}
