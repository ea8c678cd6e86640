use crate::config::Config;
use std::path::Path;
use walkdir::WalkDir;

/// Return true if the given path's extension matches any of the configured
/// extension patterns ("*.mp3", "mp3", ".mp3"), case-insensitive.
fn path_matches_extensions(path: &Path, exts: &[String]) -> bool {
    let ext_os = match path.extension() {
        Some(e) => e,
        None => return false,
    };
    let ext = match ext_os.to_str() {
        Some(s) => s.to_ascii_lowercase(),
        None => return false,
    };
    for pat in exts {
        let mut p = pat.trim();
        if p.is_empty() {
            continue;
        }
        // strip common prefixes: "*." or "."
        if let Some(stripped) = p.strip_prefix("*.") {
            p = stripped;
        } else if let Some(stripped) = p.strip_prefix('.') {
            p = stripped;
        }
        if ext == p.to_ascii_lowercase() {
            return true;
        }
    }
    false
}

/// Render a path with forward slashes so generated URLs are portable.
pub(crate) fn slash_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Sorted filenames of the audio files directly inside `<audio_root>/<post_id>`.
/// A missing folder is an empty playlist, not an error.
pub fn find_audio_files(cfg: &Config, post_id: &str) -> Vec<String> {
    let folder = cfg.audio_root.join(post_id);
    if !folder.exists() {
        return Vec::new();
    }
    let mut files: Vec<String> = WalkDir::new(&folder)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| path_matches_extensions(e.path(), &cfg.audio_extensions))
        .filter_map(|e| e.file_name().to_str().map(String::from))
        .collect();
    files.sort();
    files
}

/// Probe `<subtitle_root>/<post_id>/<stem>.<ext>` for each configured subtitle
/// extension in priority order; first existing candidate wins.
pub fn find_subtitle(cfg: &Config, post_id: &str, stem: &str) -> Option<String> {
    let folder = cfg.subtitle_root.join(post_id);
    if !folder.exists() {
        return None;
    }
    for ext in &cfg.subtitle_extensions {
        let candidate = folder.join(format!("{}.{}", stem, ext));
        if candidate.exists() {
            return Some(slash_path(&candidate));
        }
    }
    None
}

/// Probe `<covers_root>/<post_id>.<ext>` for each configured cover extension,
/// then fall back to the first file (sorted) whose name starts with the id.
pub fn find_cover(cfg: &Config, post_id: &str) -> Option<String> {
    for ext in &cfg.cover_extensions {
        let candidate = cfg.covers_root.join(format!("{}.{}", post_id, ext));
        if candidate.exists() {
            return Some(slash_path(&candidate));
        }
    }
    let mut entries: Vec<std::path::PathBuf> = Vec::new();
    if let Ok(read) = std::fs::read_dir(&cfg.covers_root) {
        for e in read.filter_map(|r| r.ok()) {
            let p = e.path();
            if p.is_file() {
                entries.push(p);
            }
        }
    }
    entries.sort();
    entries
        .iter()
        .find(|p| {
            p.file_name()
                .and_then(|s| s.to_str())
                .map(|n| n.starts_with(post_id))
                .unwrap_or(false)
        })
        .map(|p| slash_path(p))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_patterns_normalize() {
        let exts = vec!["*.mp3".to_string(), ".OGG".to_string(), "flac".to_string()];
        assert!(path_matches_extensions(Path::new("a/b.MP3"), &exts));
        assert!(path_matches_extensions(Path::new("c.ogg"), &exts));
        assert!(path_matches_extensions(Path::new("d.flac"), &exts));
        assert!(!path_matches_extensions(Path::new("e.wav"), &exts));
        assert!(!path_matches_extensions(Path::new("noext"), &exts));
    }
}
