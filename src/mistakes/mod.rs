//! Mistake notebook core
//!
//! This module provides:
//! - The mistake data model and per-subject grouping
//! - Repository CRUD and queries over the collection
//! - Attempt recording, the only writer of mastery state

pub mod models;
pub mod recorder;
pub mod repository;

pub use models::*;
pub use recorder::record_attempt;
pub use repository::{
    MistakeRepository, RepositoryError, DEFAULT_RECENT_LIMIT, DEFAULT_RELATED_LIMIT,
};
