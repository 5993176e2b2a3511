//! Text recognition for mistake images
//!
//! Transcribes a problem photo into question text the learner can edit
//! before saving. The shipped [`StubRecognizer`] stands in for a real
//! OCR backend and cycles through a fixed set of sample questions; a
//! real engine plugs in behind the same trait.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Outcome of a recognition request; failures are data, not errors
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecognizedText {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RecognizedText {
    pub fn ok(text: String) -> Self {
        Self {
            text: Some(text),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            text: None,
            error: Some(error.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.text.is_some() && self.error.is_none()
    }
}

/// Best-effort transcription of an image reference
pub trait TextRecognizer {
    fn recognize(&self, image_url: &str) -> RecognizedText;
}

/// Sample transcriptions served in rotation
const CANNED_TEXTS: [&str; 5] = [
    "Prove that if f is continuous on [a, b], differentiable on (a, b), \
     and f(a) = f(b), then f'(c) = 0 for some c in (a, b).",
    "Line l passes through A(1, 2) and is parallel to 2x - y + 3 = 0. \
     Find the equation of l.",
    "Evaluate the integral of sin^2(x) from 0 to pi/2.",
    "The complex number z satisfies |z - 2| = |z - 2i|. Find the minimum \
     value of |z|.",
    "f(x) = ln(x^2 + 1) - ax is decreasing on (0, +inf). Find the range \
     of the real number a.",
];

/// Stand-in recognizer that rotates through canned question texts
pub struct StubRecognizer {
    attempts: AtomicUsize,
}

impl StubRecognizer {
    pub fn new() -> Self {
        Self {
            attempts: AtomicUsize::new(0),
        }
    }
}

impl Default for StubRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextRecognizer for StubRecognizer {
    fn recognize(&self, image_url: &str) -> RecognizedText {
        let attempt = self.attempts.fetch_add(1, Ordering::Relaxed);
        log::debug!("Stub recognition #{} for {}", attempt + 1, image_url);
        RecognizedText::ok(CANNED_TEXTS[attempt % CANNED_TEXTS.len()].to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stub_rotates_through_samples_and_wraps() {
        let recognizer = StubRecognizer::new();

        let first_cycle: Vec<String> = (0..CANNED_TEXTS.len())
            .map(|_| recognizer.recognize("file:///img.png").text.unwrap())
            .collect();

        assert_eq!(first_cycle.len(), CANNED_TEXTS.len());
        assert_eq!(first_cycle[0], CANNED_TEXTS[0]);
        assert_ne!(first_cycle[0], first_cycle[1]);

        // Next request wraps back to the first sample
        let wrapped = recognizer.recognize("file:///img.png");
        assert!(wrapped.is_success());
        assert_eq!(wrapped.text.unwrap(), CANNED_TEXTS[0]);
    }

    #[test]
    fn test_failure_outcome_shape() {
        let outcome = RecognizedText::failed("backend unreachable");
        assert!(!outcome.is_success());
        assert!(outcome.text.is_none());
        assert_eq!(outcome.error.as_deref(), Some("backend unreachable"));
    }
}
