//! Week scoring and ranking for the Tripweek planner.
//!
//! The crate provides three layers:
//! - [`CalendarScorer`] implements [`WeekScorer`](tripweek_core::WeekScorer),
//!   weighing hard and soft constraints, trips already on the calendar, and
//!   weeks claimed earlier in a batch.
//! - [`SuggestionRanker`] enumerates a quarter's business weeks, scores each
//!   one, drops blocked weeks, and orders the rest best first.
//! - [`SuggestionRanker::plan_batch`] places several flexible trips in
//!   sequence so that no two share a week.
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use tripweek_core::{BatchClaims, Constraint, ConstraintKind, PlanSnapshot, SuggestRequest};
//! use tripweek_scorer::suggest;
//!
//! # fn main() -> Result<(), tripweek_core::PlanningError> {
//! let leave = Constraint::new(
//!     "c1",
//!     "Annual leave",
//!     ConstraintKind::Vacation,
//!     NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
//!     NaiveDate::from_ymd_opt(2025, 1, 3).unwrap(),
//! )?;
//! let snapshot = PlanSnapshot::default().with_constraint(leave);
//! let request = SuggestRequest::new(2025, 1, "London")?;
//! let best = suggest(&request, &snapshot, &BatchClaims::new())?;
//! assert_eq!(best[0].week_start, NaiveDate::from_ymd_opt(2025, 1, 6).unwrap());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod batch;
mod calendar;
mod ranker;
mod weights;

pub use batch::{BatchAssignment, BatchPlan, BatchTrip, plan_batch};
pub use calendar::CalendarScorer;
pub use ranker::{RankerConfig, SuggestionRanker, suggest};
pub use weights::{ScoreWeights, WeightsError};

#[cfg(test)]
mod tests;
