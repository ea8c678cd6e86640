use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// HTML pages whose marker regions get rewritten, processed in order.
    #[serde(default = "default_html_files")]
    pub html_files: Vec<PathBuf>,

    #[serde(default = "default_audio_root")]
    pub audio_root: PathBuf,
    #[serde(default = "default_subtitle_root")]
    pub subtitle_root: PathBuf,
    #[serde(default = "default_covers_root")]
    pub covers_root: PathBuf,

    #[serde(default = "default_log_dir")]
    pub log_dir: PathBuf,

    /// Whitelist of file extensions to treat as audio files.
    /// Examples: ["*.mp3", ".flac", "wav"]. Case-insensitive.
    #[serde(default = "default_audio_extensions")]
    pub audio_extensions: Vec<String>,

    /// Subtitle/lyric extensions probed per track stem, in priority order.
    #[serde(default = "default_subtitle_extensions")]
    pub subtitle_extensions: Vec<String>,

    /// Cover image extensions probed per post id, in priority order.
    #[serde(default = "default_cover_extensions")]
    pub cover_extensions: Vec<String>,
}

fn default_html_files() -> Vec<PathBuf> {
    vec!["index.html".into()]
}
fn default_audio_root() -> PathBuf { "audios".into() }
fn default_subtitle_root() -> PathBuf { "subtitulos".into() }
fn default_covers_root() -> PathBuf { "covers".into() }
fn default_log_dir() -> PathBuf { "/var/log/aplayer-sync".into() }

fn default_audio_extensions() -> Vec<String> {
    vec!["mp3", "opus", "ogg", "wav", "m4a", "flac"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_subtitle_extensions() -> Vec<String> {
    vec!["lrc", "srt", "txt"].into_iter().map(String::from).collect()
}

fn default_cover_extensions() -> Vec<String> {
    vec!["jpg", "jpeg", "png", "webp"]
        .into_iter()
        .map(String::from)
        .collect()
}

impl Config {
    pub fn from_path(path: &std::path::Path) -> anyhow::Result<Self> {
        let s = std::fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&s)?;
        Ok(cfg)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            html_files: default_html_files(),
            audio_root: default_audio_root(),
            subtitle_root: default_subtitle_root(),
            covers_root: default_covers_root(),
            log_dir: default_log_dir(),
            audio_extensions: default_audio_extensions(),
            subtitle_extensions: default_subtitle_extensions(),
            cover_extensions: default_cover_extensions(),
        }
    }
}
