//! Interactive review session
//!
//! A session walks a fixed queue of mistakes one at a time. The caller
//! shows the problem, optionally reveals the answer, then marks the
//! attempt correct or incorrect; each mark records the attempt against
//! the repository and advances to the next entry. Once the queue is
//! exhausted the session is complete and only `restart` leaves that
//! state.

use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::mistakes::{record_attempt, Mistake, MistakeRepository, RepositoryError};

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("review session is already complete")]
    SessionComplete,

    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Reviewing the queue entry at `index`
    Active { index: usize },
    /// Queue exhausted
    Complete,
}

/// One graded attempt within a session
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionAttempt {
    pub mistake_id: Uuid,
    pub is_correct: bool,
}

/// Totals for a finished (or in-flight) session
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    pub total: usize,
    pub correct: usize,
    pub wrong: usize,
    /// Fraction of graded attempts that were correct, 0.0 when none
    pub accuracy: f64,
}

pub struct ReviewSession {
    queue: Vec<Mistake>,
    state: SessionState,
    revealed: bool,
    history: Vec<SessionAttempt>,
}

impl ReviewSession {
    /// Start a session over the given queue; an empty queue is complete
    /// from the outset
    pub fn new(queue: Vec<Mistake>) -> Self {
        let state = if queue.is_empty() {
            SessionState::Complete
        } else {
            SessionState::Active { index: 0 }
        };

        Self {
            queue,
            state,
            revealed: false,
            history: Vec::new(),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_complete(&self) -> bool {
        self.state == SessionState::Complete
    }

    /// The entry under review, `None` once the session is complete
    pub fn current(&self) -> Option<&Mistake> {
        match self.state {
            SessionState::Active { index } => self.queue.get(index),
            SessionState::Complete => None,
        }
    }

    /// Zero-based position of the current entry
    pub fn position(&self) -> Option<usize> {
        match self.state {
            SessionState::Active { index } => Some(index),
            SessionState::Complete => None,
        }
    }

    /// Attempts graded so far against the queue length
    pub fn progress(&self) -> (usize, usize) {
        (self.history.len(), self.queue.len())
    }

    /// Graded attempts in the order they were made
    pub fn history(&self) -> &[SessionAttempt] {
        &self.history
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Show the answer for the current entry
    pub fn reveal(&mut self) -> Result<(), SessionError> {
        if self.is_complete() {
            return Err(SessionError::SessionComplete);
        }
        self.revealed = true;
        Ok(())
    }

    /// Hide the answer again
    pub fn hide(&mut self) -> Result<(), SessionError> {
        if self.is_complete() {
            return Err(SessionError::SessionComplete);
        }
        self.revealed = false;
        Ok(())
    }

    /// Grade the current entry as correct and advance
    pub fn mark_correct(&mut self, repo: &mut MistakeRepository) -> Result<(), SessionError> {
        self.mark(repo, true)
    }

    /// Grade the current entry as incorrect and advance
    pub fn mark_incorrect(&mut self, repo: &mut MistakeRepository) -> Result<(), SessionError> {
        self.mark(repo, false)
    }

    fn mark(&mut self, repo: &mut MistakeRepository, is_correct: bool) -> Result<(), SessionError> {
        let SessionState::Active { index } = self.state else {
            return Err(SessionError::SessionComplete);
        };
        let mistake_id = self.queue[index].id;

        match record_attempt(repo, mistake_id, is_correct, None) {
            Ok(_) => {}
            // The entry can be deleted while the session snapshot still
            // holds it; the session keeps its own tally and moves on.
            Err(RepositoryError::NotFound(id)) => {
                log::warn!("Mistake {} no longer exists, attempt not recorded", id);
            }
            Err(other) => return Err(other.into()),
        }

        self.history.push(SessionAttempt {
            mistake_id,
            is_correct,
        });

        self.revealed = false;
        let next = index + 1;
        self.state = if next < self.queue.len() {
            SessionState::Active { index: next }
        } else {
            SessionState::Complete
        };

        Ok(())
    }

    /// Return to the start of the queue with a clean tally
    pub fn restart(&mut self) {
        self.state = if self.queue.is_empty() {
            SessionState::Complete
        } else {
            SessionState::Active { index: 0 }
        };
        self.revealed = false;
        self.history.clear();
    }

    pub fn summary(&self) -> SessionSummary {
        let total = self.history.len();
        let correct = self.history.iter().filter(|a| a.is_correct).count();
        let wrong = total - correct;
        let accuracy = if total > 0 {
            correct as f64 / total as f64
        } else {
            0.0
        };

        SessionSummary {
            total,
            correct,
            wrong,
            accuracy,
        }
    }
}
