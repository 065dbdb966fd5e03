use crate::error::Result;
use reqwest::blocking::Client;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use tracing::{debug, info, warn};

pub struct Downloader {
    client: Client,
}

impl Downloader {
    pub fn new() -> Self {
        Self::with_timeout(10)
    }

    pub fn with_timeout(timeout_secs: u64) -> Self {
        let client = Client::builder()
            .user_agent("Puzzlefetch/0.1 (https://github.com/trapdoorsec/puzzlefetch)")
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .connect_timeout(std::time::Duration::from_secs(timeout_secs / 2))
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }

    /// Downloads each url, in list order, into `dest_dir` as `img0`, `img1`,
    /// and so on, and writes an `index.html` with one `<img>` tag per image.
    ///
    /// WARNING: this is destructive. If `dest_dir` already exists it is
    /// deleted recursively first, unrelated contents included, and recreated
    /// from scratch. There is no undo.
    ///
    /// The index is written incrementally as images arrive. The first fetch or
    /// write error aborts the run; the directory and index are left partially
    /// populated and are not cleaned up.
    pub fn download_images(&self, urls: &[String], dest_dir: &Path) -> Result<()> {
        if dest_dir.exists() {
            warn!("Removing existing directory {}", dest_dir.display());
            fs::remove_dir_all(dest_dir)?;
        }
        fs::create_dir_all(dest_dir)?;

        info!(
            "Downloading {} images to {}",
            urls.len(),
            dest_dir.display()
        );

        let mut index = File::create(dest_dir.join("index.html"))?;
        writeln!(index, "<html>")?;
        writeln!(index, "<body>")?;

        for (i, url) in urls.iter().enumerate() {
            let filename = format!("img{}", i);
            debug!("Fetching {} -> {}", url, filename);

            let bytes = self.client.get(url).send()?.error_for_status()?.bytes()?;
            fs::write(dest_dir.join(&filename), &bytes)?;

            write!(index, "<img src=\"{}\">", filename)?;
        }

        writeln!(index, "</body>")?;
        writeln!(index, "</html>")?;

        info!("Download complete");
        Ok(())
    }
}

impl Default for Downloader {
    fn default() -> Self {
        Self::new()
    }
}
