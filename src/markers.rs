use once_cell::sync::Lazy;
use regex::Regex;

static START_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)<!--\s*AUDIO_LIST_START:([A-Za-z0-9_\-]+)\s*-->").unwrap()
});

static END_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)<!--\s*AUDIO_LIST_END:([A-Za-z0-9_\-]+)\s*-->").unwrap()
});

/// A located start/end marker pair inside an HTML document.
/// `start..end` is the byte span of the full region, both markers included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerRegion {
    pub post_id: String,
    pub start: usize,
    pub end: usize,
}

/// Locate all marker regions in document order.
///
/// A region is a START marker followed by the nearest END marker carrying the
/// same post id; anything in between (including foreign markers) belongs to
/// the region and is discarded on rewrite. START markers that never see a
/// matching END are ignored, as are ENDs swallowed by an earlier region.
pub fn find_regions(text: &str) -> Vec<MarkerRegion> {
    let ends: Vec<(usize, usize, &str)> = END_RE
        .captures_iter(text)
        .map(|c| {
            let m = c.get(0).unwrap();
            (m.start(), m.end(), c.get(1).unwrap().as_str())
        })
        .collect();

    let mut regions = Vec::new();
    let mut cursor = 0usize;
    for caps in START_RE.captures_iter(text) {
        let m = caps.get(0).unwrap();
        if m.start() < cursor {
            continue;
        }
        let post_id = caps.get(1).unwrap().as_str();
        let closing = ends
            .iter()
            .find(|(es, _, eid)| *es >= m.end() && *eid == post_id);
        if let Some((_, end_of_end, _)) = closing {
            regions.push(MarkerRegion {
                post_id: post_id.to_string(),
                start: m.start(),
                end: *end_of_end,
            });
            cursor = *end_of_end;
        }
    }
    regions
}

pub fn start_marker(post_id: &str) -> String {
    format!("<!-- AUDIO_LIST_START:{} -->", post_id)
}

pub fn end_marker(post_id: &str) -> String {
    format!("<!-- AUDIO_LIST_END:{} -->", post_id)
}
