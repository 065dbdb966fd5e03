pub mod download;
pub mod error;
pub mod extract;

pub use download::Downloader;
pub use error::ScanError;
pub use extract::read_urls;
