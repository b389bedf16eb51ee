//! Best-effort loading of the pre-rendered forecast plot.

use std::fs;
use std::io;
use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use tracing::{debug, warn};

/// File name written by the forecasting script.
pub const DEFAULT_IMAGE_PATH: &str = "electricity_consumption_forecast.png";

const PNG_MIME: &str = "image/png";

/// Why the forecast image could not be used.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MissingReason {
    pub kind: io::ErrorKind,
    pub message: String,
}

/// Result of looking up the forecast image.
///
/// Every I/O failure maps to `Missing`; the bytes of a successful read are
/// not checked for PNG structure, so an empty file counts as `Loaded`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ForecastImage {
    Loaded(Vec<u8>),
    Missing(MissingReason),
}

impl ForecastImage {
    pub fn is_loaded(&self) -> bool {
        matches!(self, ForecastImage::Loaded(_))
    }
}

/// Reads the whole file at `path`. The handle is closed before returning.
pub fn load_forecast_image(path: &Path) -> ForecastImage {
    match fs::read(path) {
        Ok(bytes) => {
            debug!(path = %path.display(), bytes = bytes.len(), "Loaded forecast image");
            ForecastImage::Loaded(bytes)
        }
        Err(e) => {
            warn!(path = %path.display(), kind = ?e.kind(), "Forecast image unavailable: {}", e);
            ForecastImage::Missing(MissingReason {
                kind: e.kind(),
                message: e.to_string(),
            })
        }
    }
}

/// Image bytes encoded for inline embedding in a page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmbeddedImage {
    mime: &'static str,
    base64: String,
}

impl EmbeddedImage {
    pub fn png(bytes: &[u8]) -> Self {
        EmbeddedImage {
            mime: PNG_MIME,
            base64: STANDARD.encode(bytes),
        }
    }

    /// `data:` URI usable directly as an `<img src>`.
    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime, self.base64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let image = load_forecast_image(&dir.path().join(DEFAULT_IMAGE_PATH));
        match image {
            ForecastImage::Missing(reason) => assert_eq!(reason.kind, io::ErrorKind::NotFound),
            ForecastImage::Loaded(_) => panic!("expected a missing image"),
        }
    }

    #[test]
    fn test_existing_file_is_read_fully() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"\x89PNG\r\n\x1a\nrest").unwrap();
        let image = load_forecast_image(file.path());
        assert_eq!(image, ForecastImage::Loaded(b"\x89PNG\r\n\x1a\nrest".to_vec()));
    }

    #[test]
    fn test_empty_file_counts_as_loaded() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let image = load_forecast_image(file.path());
        assert_eq!(image, ForecastImage::Loaded(Vec::new()));
        assert!(image.is_loaded());
    }

    #[test]
    fn test_directory_takes_the_missing_path() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!load_forecast_image(dir.path()).is_loaded());
    }

    #[test]
    fn test_data_uri() {
        let image = EmbeddedImage::png(b"Hello");
        assert_eq!(image.mime, "image/png");
        assert_eq!(image.base64, "SGVsbG8=");
        assert_eq!(image.data_uri(), "data:image/png;base64,SGVsbG8=");
    }
}
