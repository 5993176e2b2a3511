//! Image acquisition
//!
//! Mistakes can carry a photo of the original problem. The engine only
//! ever sees an opaque URL string; where the bytes live is the image
//! source's business.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Outcome of acquiring an image reference
///
/// Failures are carried as data so callers can create the mistake
/// without an image and show the problem to the user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapturedImage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CapturedImage {
    pub fn ok(image_url: String) -> Self {
        Self {
            image_url: Some(image_url),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            image_url: None,
            error: Some(error.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.image_url.is_some() && self.error.is_none()
    }
}

/// Source of image references for new mistakes
pub trait ImageSource {
    fn acquire(&self) -> CapturedImage;
}

/// Turns a local file into a `file://` reference
pub struct PathImageSource {
    path: PathBuf,
}

impl PathImageSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ImageSource for PathImageSource {
    fn acquire(&self) -> CapturedImage {
        match std::fs::canonicalize(&self.path) {
            Ok(absolute) => CapturedImage::ok(format!("file://{}", absolute.display())),
            Err(e) => CapturedImage::failed(format!(
                "cannot read image {}: {}",
                self.path.display(),
                e
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_existing_file_becomes_file_url() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("problem.png");
        std::fs::write(&path, b"not really a png").unwrap();

        let captured = PathImageSource::new(&path).acquire();

        assert!(captured.is_success());
        let url = captured.image_url.unwrap();
        assert!(url.starts_with("file://"));
        assert!(url.ends_with("problem.png"));
    }

    #[test]
    fn test_missing_file_fails_as_data() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nope.png");

        let captured = PathImageSource::new(&path).acquire();

        assert!(!captured.is_success());
        assert!(captured.image_url.is_none());
        assert!(captured.error.unwrap().contains("nope.png"));
    }
}
