//! Attempt recorder: the single writer of mastery state
//!
//! Every reviewed attempt flows through [`record_attempt`], whether it
//! came from the CLI, a review session, or a test. The repository's
//! update path cannot express counters or history, so the invariant
//! `correct_count + wrong_count == correction_history.len()` holds as
//! long as this module is the only mutator.

use uuid::Uuid;

use super::models::{AttemptRecord, Mistake};
use super::repository::{MistakeRepository, RepositoryError, Result};

/// Record one review attempt against a mistake
///
/// Appends to the correction history, bumps the matching counter and
/// stamps `last_reviewed_at` with the attempt date, then persists.
/// Returns the updated mistake. Unknown ids signal
/// [`RepositoryError::NotFound`].
pub fn record_attempt(
    repo: &mut MistakeRepository,
    id: Uuid,
    is_correct: bool,
    notes: Option<String>,
) -> Result<Mistake> {
    let mistake = repo.entry_mut(id).ok_or(RepositoryError::NotFound(id))?;

    let attempt = AttemptRecord::new(is_correct, notes);
    mistake.last_reviewed_at = Some(attempt.date);
    if is_correct {
        mistake.correct_count += 1;
    } else {
        mistake.wrong_count += 1;
    }
    mistake.correction_history.push(attempt);

    log::debug!(
        "Recorded {} attempt for {} ({} correct / {} wrong)",
        if is_correct { "correct" } else { "wrong" },
        id,
        mistake.correct_count,
        mistake.wrong_count
    );

    let updated = mistake.clone();
    repo.persist()?;

    Ok(updated)
}
