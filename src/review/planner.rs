//! Review plan generation
//!
//! Turns the mistake collection into a day-by-day review schedule.
//! Priority is the observed error rate: the entries missed most often
//! are reviewed first. The sorted collection is split into contiguous
//! buckets of `ceil(n / horizon)` entries and the buckets are laid out
//! over consecutive calendar dates starting from the reference date.

use chrono::{Duration, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::mistakes::Mistake;

/// Horizon used by [`weekly_plan`]
pub const DEFAULT_HORIZON_DAYS: usize = 7;

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("review horizon must be at least one day (got {0})")]
    InvalidHorizon(usize),
}

/// One day of the schedule; `mistakes` is empty on rest days
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanDay {
    pub date: NaiveDate,
    pub mistakes: Vec<Mistake>,
}

/// Build a review plan over `horizon_days` consecutive dates
///
/// Every mistake in the input appears in exactly one day. Entries with
/// equal error rates keep their collection order, so the plan is stable
/// for a given collection. An empty collection yields `horizon_days`
/// empty days.
pub fn generate_plan(
    mistakes: &[Mistake],
    horizon_days: usize,
    start_date: NaiveDate,
) -> Result<Vec<PlanDay>, PlanError> {
    if horizon_days == 0 {
        return Err(PlanError::InvalidHorizon(horizon_days));
    }
    Ok(build_plan(mistakes, horizon_days, start_date))
}

/// Seven-day plan starting today (local calendar)
pub fn weekly_plan(mistakes: &[Mistake]) -> Vec<PlanDay> {
    build_plan(mistakes, DEFAULT_HORIZON_DAYS, Local::now().date_naive())
}

fn build_plan(mistakes: &[Mistake], horizon_days: usize, start_date: NaiveDate) -> Vec<PlanDay> {
    let mut sorted = mistakes.to_vec();
    sorted.sort_by(|a, b| b.error_rate().total_cmp(&a.error_rate()));

    let per_day = sorted.len().div_ceil(horizon_days);

    (0..horizon_days)
        .map(|day| {
            let from = (day * per_day).min(sorted.len());
            let to = ((day + 1) * per_day).min(sorted.len());
            PlanDay {
                date: start_date + Duration::days(day as i64),
                mistakes: sorted[from..to].to_vec(),
            }
        })
        .collect()
}
