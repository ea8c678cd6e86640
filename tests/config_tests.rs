use std::fs::File;
use std::io::Write;
use tempfile::tempdir;

use aplayer_folder_sync::config::Config;

#[test]
fn config_from_path_parses_toml() {
    let td = tempdir().unwrap();
    let cfg_path = td.path().join("cfg.toml");
    let mut f = File::create(&cfg_path).unwrap();
    let toml = r#"
html_files = ["site/a.html", "site/b.html"]
audio_root = "/srv/audios"
subtitle_extensions = ["lrc"]
"#;
    f.write_all(toml.as_bytes()).unwrap();
    let cfg = Config::from_path(&cfg_path).expect("parse config");
    assert_eq!(cfg.html_files.len(), 2);
    assert_eq!(cfg.audio_root.to_str().unwrap(), "/srv/audios");
    assert_eq!(cfg.subtitle_extensions, vec!["lrc".to_string()]);
    // untouched keys fall back to defaults
    assert_eq!(cfg.subtitle_root.to_str().unwrap(), "subtitulos");
    assert_eq!(cfg.covers_root.to_str().unwrap(), "covers");
}

#[test]
fn empty_config_uses_defaults() {
    let td = tempdir().unwrap();
    let cfg_path = td.path().join("cfg.toml");
    File::create(&cfg_path).unwrap();
    let cfg = Config::from_path(&cfg_path).expect("parse empty config");
    assert_eq!(cfg.html_files, vec![std::path::PathBuf::from("index.html")]);
    assert_eq!(cfg.audio_root.to_str().unwrap(), "audios");
    assert_eq!(cfg.audio_extensions.len(), 6);
    assert_eq!(cfg.subtitle_extensions, vec!["lrc", "srt", "txt"]);
    assert_eq!(cfg.cover_extensions, vec!["jpg", "jpeg", "png", "webp"]);
}
