use crate::block;
use crate::config::Config;
use crate::markers;
use anyhow::{Context, Result};
use std::path::Path;
use tracing::{debug, info, warn};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub files_updated: usize,
    pub files_skipped: usize,
    pub regions_rewritten: usize,
}

/// Rewrite every marker region of one HTML file and save it in place.
/// Returns the number of regions rewritten; zero means the file was left
/// untouched. With `dry_run` the new text is built but never written.
pub fn process_file(cfg: &Config, path: &Path, dry_run: bool) -> Result<usize> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;

    let regions = markers::find_regions(&text);
    if regions.is_empty() {
        info!("no markers found in {}", path.display());
        return Ok(0);
    }

    // Replace back to front so earlier regions keep their byte offsets.
    let mut new_text = text;
    for region in regions.iter().rev() {
        let new_block = format!(
            "{}\n{}\n{}",
            markers::start_marker(&region.post_id),
            block::build_audio_block(cfg, &region.post_id),
            markers::end_marker(&region.post_id),
        );
        debug!("rebuilt block for {}:\n{}", region.post_id, new_block);
        new_text.replace_range(region.start..region.end, &new_block);
        info!("block updated for: {}", region.post_id);
    }

    if dry_run {
        info!("dry run: {} not written", path.display());
    } else {
        std::fs::write(path, new_text)
            .with_context(|| format!("writing {}", path.display()))?;
        info!("{} saved", path.display());
    }
    Ok(regions.len())
}

/// Process every configured HTML file in order. Missing targets are reported
/// and skipped; a write failure aborts the run.
pub fn run(cfg: &Config, dry_run: bool) -> Result<RunSummary> {
    let mut summary = RunSummary::default();
    for path in &cfg.html_files {
        if !path.exists() {
            warn!("target file not found: {}", path.display());
            summary.files_skipped += 1;
            continue;
        }
        let rewritten = process_file(cfg, path, dry_run)?;
        if rewritten > 0 {
            summary.files_updated += 1;
            summary.regions_rewritten += rewritten;
        } else {
            summary.files_skipped += 1;
        }
    }
    info!(
        "run complete: {} file(s) updated, {} skipped, {} region(s) rewritten",
        summary.files_updated, summary.files_skipped, summary.regions_rewritten
    );
    Ok(summary)
}
