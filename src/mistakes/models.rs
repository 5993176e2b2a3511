//! Data models for the mistake notebook

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// School subject a mistake belongs to. Closed set; unknown labels are
/// rejected at the parsing boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Subject {
    Math,
    Language,
    English,
    Physics,
    Chemistry,
    Biology,
    History,
    Geography,
    Politics,
}

impl Subject {
    /// All subjects in canonical display order
    pub const ALL: [Subject; 9] = [
        Subject::Math,
        Subject::Language,
        Subject::English,
        Subject::Physics,
        Subject::Chemistry,
        Subject::Biology,
        Subject::History,
        Subject::Geography,
        Subject::Politics,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Subject::Math => "Math",
            Subject::Language => "Language",
            Subject::English => "English",
            Subject::Physics => "Physics",
            Subject::Chemistry => "Chemistry",
            Subject::Biology => "Biology",
            Subject::History => "History",
            Subject::Geography => "Geography",
            Subject::Politics => "Politics",
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a subject label is not one of the known set
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown subject: {0}")]
pub struct UnknownSubject(pub String);

impl FromStr for Subject {
    type Err = UnknownSubject;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Subject::ALL
            .into_iter()
            .find(|subject| subject.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownSubject(s.to_string()))
    }
}

/// A single recorded review outcome for a mistake
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttemptRecord {
    /// When the attempt was made
    pub date: DateTime<Utc>,
    /// Whether the learner answered correctly this time
    pub is_correct: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl AttemptRecord {
    pub fn new(is_correct: bool, notes: Option<String>) -> Self {
        Self {
            date: Utc::now(),
            is_correct,
            notes,
        }
    }
}

/// A recorded mistake with its mastery history
///
/// `correct_count`, `wrong_count`, `correction_history` and
/// `last_reviewed_at` are maintained exclusively by the attempt recorder;
/// everything else is editable through the repository.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mistake {
    pub id: Uuid,
    pub title: String,
    pub subject: Subject,
    /// The question text itself, typically transcribed from an image
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// What went wrong, in the learner's words
    pub notes: String,
    /// Opaque reference to an externally stored image
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Worked solution, stored as opaque plain text. Rendering is the
    /// caller's concern; the engine never interprets it as markup.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solution: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_reviewed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub correct_count: u32,
    #[serde(default)]
    pub wrong_count: u32,
    #[serde(default)]
    pub correction_history: Vec<AttemptRecord>,
}

impl Mistake {
    /// Build a fresh mistake from a creation request. Counters start at
    /// zero and the history empty; tags are deduplicated.
    pub fn new(draft: CreateMistakeRequest) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: draft.title,
            subject: draft.subject,
            content: draft.content,
            notes: draft.notes,
            image_url: draft.image_url,
            tags: dedup_tags(draft.tags),
            solution: draft.solution,
            created_at: Utc::now(),
            last_reviewed_at: None,
            correct_count: 0,
            wrong_count: 0,
            correction_history: Vec::new(),
        }
    }

    /// Total number of recorded attempts
    pub fn attempt_count(&self) -> u32 {
        self.correct_count + self.wrong_count
    }

    /// Fraction of attempts answered incorrectly, in `0.0..=1.0`.
    /// A mistake with no attempts yet rates `0.0`.
    pub fn error_rate(&self) -> f64 {
        let attempts = self.attempt_count();
        if attempts == 0 {
            0.0
        } else {
            f64::from(self.wrong_count) / f64::from(attempts)
        }
    }
}

/// Request to create a new mistake
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMistakeRequest {
    pub title: String,
    pub subject: Subject,
    pub notes: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solution: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Request to update an existing mistake. Mastery counters and the
/// correction history are deliberately not representable here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMistakeRequest {
    pub title: Option<String>,
    pub subject: Option<Subject>,
    pub content: Option<String>,
    pub notes: Option<String>,
    pub image_url: Option<String>,
    pub solution: Option<String>,
    pub tags: Option<Vec<String>>,
}

/// Number of mistakes recorded for one subject
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectCount {
    pub subject: Subject,
    pub count: usize,
}

/// Drop blank and repeated tags, keeping first-seen order
pub(crate) fn dedup_tags(tags: Vec<String>) -> Vec<String> {
    let mut kept: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        let tag = tag.trim();
        if tag.is_empty() || kept.iter().any(|t| t == tag) {
            continue;
        }
        kept.push(tag.to_string());
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str) -> CreateMistakeRequest {
        CreateMistakeRequest {
            title: title.to_string(),
            subject: Subject::Math,
            notes: "misread the problem".to_string(),
            content: None,
            image_url: None,
            solution: None,
            tags: Vec::new(),
        }
    }

    #[test]
    fn test_new_mistake_starts_unattempted() {
        let mistake = Mistake::new(draft("Quadratic roots"));
        assert_eq!(mistake.correct_count, 0);
        assert_eq!(mistake.wrong_count, 0);
        assert!(mistake.correction_history.is_empty());
        assert!(mistake.last_reviewed_at.is_none());
        assert_eq!(mistake.error_rate(), 0.0);
    }

    #[test]
    fn test_error_rate() {
        let mut mistake = Mistake::new(draft("Limits"));
        mistake.correct_count = 1;
        mistake.wrong_count = 3;
        assert_eq!(mistake.error_rate(), 0.75);

        mistake.correct_count = 2;
        mistake.wrong_count = 2;
        assert_eq!(mistake.error_rate(), 0.5);
    }

    #[test]
    fn test_dedup_tags_keeps_first_seen_order() {
        let tags = vec![
            "algebra".to_string(),
            "  geometry ".to_string(),
            "algebra".to_string(),
            "".to_string(),
            "   ".to_string(),
        ];
        assert_eq!(dedup_tags(tags), vec!["algebra", "geometry"]);
    }

    #[test]
    fn test_subject_parsing() {
        assert_eq!("math".parse::<Subject>().unwrap(), Subject::Math);
        assert_eq!("  Physics ".parse::<Subject>().unwrap(), Subject::Physics);
        assert!("astrology".parse::<Subject>().is_err());
    }
}
