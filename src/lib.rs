//! Errata keeps a notebook of a learner's mistakes and schedules their
//! review. Mistakes carry per-attempt history; the review plan orders
//! them by observed error rate and spreads them over the coming days,
//! and a session controller walks through a queue recording outcomes.

pub mod mistakes;
pub mod review;
pub mod services;
pub mod storage;

pub use mistakes::{record_attempt, Mistake, MistakeRepository, Subject};
pub use review::{generate_plan, weekly_plan, ReviewSession};
pub use storage::JsonFileStore;
