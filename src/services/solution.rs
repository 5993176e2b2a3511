//! Solution generation for stored mistakes
//!
//! A solution provider answers a question text for a given subject.
//! Provider failures never fail the surrounding operation; the outcome
//! carries the error description and the mistake stays untouched.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::mistakes::{
    MistakeRepository, RepositoryError, Subject, UpdateMistakeRequest,
};

/// Outcome of a solution request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedSolution {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solution: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GeneratedSolution {
    pub fn ok(solution: String) -> Self {
        Self {
            solution: Some(solution),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            solution: None,
            error: Some(error.into()),
        }
    }

    pub fn is_success(&self) -> bool {
        self.solution.is_some() && self.error.is_none()
    }
}

/// Produces a worked solution for a question text
pub trait SolutionProvider {
    fn solve(&self, question: &str, subject: Subject) -> GeneratedSolution;
}

/// Generate a solution for a stored mistake and attach it on success
///
/// The provider is given the mistake's question content. A mistake
/// without content yields a failed outcome without calling the provider.
/// On provider failure the outcome is returned as data and nothing is
/// written; missing ids and storage failures are real errors.
pub fn attach_solution(
    repo: &mut MistakeRepository,
    id: Uuid,
    provider: &dyn SolutionProvider,
) -> Result<GeneratedSolution, RepositoryError> {
    let mistake = repo.get(id).ok_or(RepositoryError::NotFound(id))?;

    let Some(question) = mistake.content.as_deref() else {
        return Ok(GeneratedSolution::failed(
            "mistake has no question content to solve",
        ));
    };

    let outcome = provider.solve(question, mistake.subject);
    match (&outcome.solution, &outcome.error) {
        (Some(solution), None) => {
            repo.update(
                id,
                UpdateMistakeRequest {
                    solution: Some(solution.clone()),
                    ..Default::default()
                },
            )?;
            log::debug!("Attached generated solution to {}", id);
        }
        _ => {
            log::warn!(
                "Solution provider failed for {}: {}",
                id,
                outcome.error.as_deref().unwrap_or("empty response")
            );
        }
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mistakes::CreateMistakeRequest;
    use crate::storage::JsonFileStore;
    use std::cell::Cell;
    use tempfile::TempDir;

    struct CannedProvider;

    impl SolutionProvider for CannedProvider {
        fn solve(&self, question: &str, _subject: Subject) -> GeneratedSolution {
            GeneratedSolution::ok(format!("Step 1: restate the problem ({})", question))
        }
    }

    struct FailingProvider;

    impl SolutionProvider for FailingProvider {
        fn solve(&self, _question: &str, _subject: Subject) -> GeneratedSolution {
            GeneratedSolution::failed("provider quota exhausted")
        }
    }

    struct CountingProvider {
        calls: Cell<usize>,
    }

    impl SolutionProvider for CountingProvider {
        fn solve(&self, _question: &str, _subject: Subject) -> GeneratedSolution {
            self.calls.set(self.calls.get() + 1);
            GeneratedSolution::ok("unused".to_string())
        }
    }

    fn create_test_repository() -> (MistakeRepository, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(temp_dir.path().to_path_buf()).unwrap();
        let repo = MistakeRepository::open(Box::new(store)).unwrap();
        (repo, temp_dir)
    }

    fn seed(repo: &mut MistakeRepository, content: Option<&str>) -> Uuid {
        repo.create(CreateMistakeRequest {
            title: "Integration by parts".to_string(),
            subject: Subject::Math,
            notes: "chose u and dv badly".to_string(),
            content: content.map(str::to_string),
            image_url: None,
            solution: None,
            tags: Vec::new(),
        })
        .unwrap()
        .id
    }

    #[test]
    fn test_successful_solution_is_written_back() {
        let (mut repo, _temp) = create_test_repository();
        let id = seed(&mut repo, Some("Evaluate the integral of x e^x dx"));

        let outcome = attach_solution(&mut repo, id, &CannedProvider).unwrap();

        assert!(outcome.is_success());
        let stored = repo.get(id).unwrap();
        assert!(stored.solution.unwrap().contains("x e^x"));
    }

    #[test]
    fn test_provider_failure_is_data_and_writes_nothing() {
        let (mut repo, _temp) = create_test_repository();
        let id = seed(&mut repo, Some("Evaluate the integral of x e^x dx"));

        let outcome = attach_solution(&mut repo, id, &FailingProvider).unwrap();

        assert!(!outcome.is_success());
        assert_eq!(outcome.error.as_deref(), Some("provider quota exhausted"));
        assert!(repo.get(id).unwrap().solution.is_none());
    }

    #[test]
    fn test_missing_content_skips_the_provider() {
        let (mut repo, _temp) = create_test_repository();
        let id = seed(&mut repo, None);

        let provider = CountingProvider {
            calls: Cell::new(0),
        };
        let outcome = attach_solution(&mut repo, id, &provider).unwrap();

        assert!(!outcome.is_success());
        assert_eq!(provider.calls.get(), 0);
        assert!(repo.get(id).unwrap().solution.is_none());
    }

    #[test]
    fn test_unknown_id_is_a_real_error() {
        let (mut repo, _temp) = create_test_repository();

        let result = attach_solution(&mut repo, Uuid::new_v4(), &CannedProvider);
        assert!(matches!(result, Err(RepositoryError::NotFound(_))));
    }
}
