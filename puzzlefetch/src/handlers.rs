use puzzlefetch_scanner::error::Result;
use puzzlefetch_scanner::{Downloader, read_urls};
use std::path::Path;

/// Render the url list for print mode: one url per line, trailing newline,
/// empty string for an empty list.
pub fn render_url_list(urls: &[String]) -> String {
    urls.iter().map(|url| format!("{}\n", url)).collect()
}

/// Run the pipeline: scan the logfile for puzzle urls, then either print them
/// one per line (no destination) or download them all into `todir`.
pub fn handle_run(logfile: &Path, todir: Option<&Path>) -> Result<()> {
    let urls = read_urls(logfile)?;

    match todir {
        Some(dir) => Downloader::new().download_images(&urls, dir),
        None => {
            print!("{}", render_url_list(&urls));
            Ok(())
        }
    }
}
