use crate::error::{Result, ScanError};
use regex::Regex;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;
use tracing::{debug, info};

/// Matches the path token of a GET request line when it names a puzzle image.
static PUZZLE_PATH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"GET (\S*puzzle\S*\.jpg) ").unwrap());

/// Matches the "scrambled" path shape: an extra dash-delimited segment before
/// the extension, e.g. `/~foo/puzzle-bar-aaab.jpg`.
static SCRAMBLED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"puzzle.*-.*-.*\.jpg").unwrap());

/// Returns the ordered, deduplicated list of puzzle image urls referenced in
/// the given log file. The image host is derived from the log filename itself
/// (everything after the first underscore of the base name).
pub fn read_urls(log_path: &Path) -> Result<Vec<String>> {
    let host = derive_hostname(log_path);
    debug!("Scanning {} (host: {:?})", log_path.display(), host);

    let content = fs::read_to_string(log_path).map_err(|source| ScanError::LogFile {
        path: log_path.to_path_buf(),
        source,
    })?;

    let mut seen = HashSet::new();
    let mut urls = Vec::new();

    for line in content.lines() {
        if let Some(caps) = PUZZLE_PATH_RE.captures(line) {
            let url = format!("http://{}{}", host, &caps[1]);
            if seen.insert(url.clone()) {
                urls.push(url);
            }
        }
    }

    sort_urls(&mut urls);
    info!("Found {} puzzle urls in {}", urls.len(), log_path.display());
    Ok(urls)
}

/// Derive the image hostname from the log filename: given a base name of the
/// shape `<prefix>_<hostname>`, returns `<hostname>` (including any extension,
/// so `access_host.log` yields `host.log`). Empty string otherwise.
pub fn derive_hostname(log_path: &Path) -> String {
    log_path
        .file_name()
        .and_then(|name| name.to_str())
        .and_then(|name| name.split_once('_'))
        .map(|(_, host)| host.to_string())
        .unwrap_or_default()
}

/// Orders the url list in place. The sort strategy is picked once, by
/// inspecting only the first url: scrambled-shaped lists sort by the text
/// after the last dash, everything else sorts lexicographically. Mixed lists
/// inherit whichever strategy the first element selects.
fn sort_urls(urls: &mut [String]) {
    let Some(first) = urls.first() else {
        return;
    };

    if SCRAMBLED_RE.is_match(first) {
        debug!("Scrambled url shape detected, sorting by trailing segment");
        urls.sort_by(|a, b| scramble_key(a).cmp(scramble_key(b)));
    } else {
        urls.sort();
    }
}

/// Sort key for scrambled urls: everything after the last dash (the whole url
/// when it contains no dash).
fn scramble_key(url: &str) -> &str {
    url.rsplit('-').next().unwrap_or(url)
}
