use crate::config::Config;
use crate::scan;
use std::path::Path;

/// Escape a value for embedding in single-quoted script-literal syntax.
/// Only backslash and single quote need escaping; the block is not HTML.
fn js_escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('\'', "\\'")
}

fn build_audio_item(
    cfg: &Config,
    idx: usize,
    fname: &str,
    post_id: &str,
    cover: Option<&str>,
) -> String {
    let stem = Path::new(fname)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(fname);
    let title = format!("{}. {}", idx, stem);
    let url = scan::slash_path(&cfg.audio_root.join(post_id).join(fname));
    let lrc = scan::find_subtitle(cfg, post_id, stem);

    let mut parts = vec![
        "{".to_string(),
        format!("    name: '{}',", js_escape(&title)),
        format!("    artist: '{}',", js_escape(post_id)),
        format!("    url: '{}',", js_escape(&url)),
    ];
    if let Some(lrc) = lrc {
        parts.push(format!("    lrc: '{}',", js_escape(&lrc)));
    }
    if let Some(cover) = cover {
        parts.push(format!("    cover: '{}',", js_escape(cover)));
    }
    parts.push("}".to_string());
    parts.join("\n")
}

/// Build the `audio: [...]` block for one post id. An empty or missing audio
/// folder yields the empty-list form. The cover is resolved once per post id
/// and applied to every entry; subtitles are resolved per track stem.
pub fn build_audio_block(cfg: &Config, post_id: &str) -> String {
    let files = scan::find_audio_files(cfg, post_id);
    if files.is_empty() {
        return "audio: []".to_string();
    }
    let cover = scan::find_cover(cfg, post_id);
    let items: Vec<String> = files
        .iter()
        .enumerate()
        .map(|(i, f)| build_audio_item(cfg, i + 1, f, post_id, cover.as_deref()))
        .collect();
    format!("audio: [\n{}\n]", items.join(",\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_quote_and_backslash_only() {
        assert_eq!(js_escape("Song's Theme"), "Song\\'s Theme");
        assert_eq!(js_escape(r"a\b"), r"a\\b");
        assert_eq!(js_escape("<b> &\n"), "<b> &\n");
    }
}
