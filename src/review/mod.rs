//! Review scheduling and session control
//!
//! This module provides:
//! - Plan generation (error-rate ordered, bucketed over a date horizon)
//! - Session state machine for working through a review queue

pub mod planner;
pub mod session;

pub use planner::{generate_plan, weekly_plan, PlanDay, PlanError, DEFAULT_HORIZON_DAYS};
pub use session::{ReviewSession, SessionAttempt, SessionError, SessionState, SessionSummary};
