//! Facade crate for the Tripweek planning engine.
//!
//! This crate re-exports the core calendar types and exposes the default
//! scorer and ranker behind the `scorer` feature flag.
//!
//! ```
//! use tripweek::{BatchClaims, PlanSnapshot, SuggestRequest, suggest};
//!
//! # fn main() -> Result<(), tripweek::PlanningError> {
//! let request = SuggestRequest::new(2025, 1, "London")?;
//! let best = suggest(&request, &PlanSnapshot::default(), &BatchClaims::new())?;
//! assert_eq!(best.len(), 3);
//! assert!(best.iter().all(|suggestion| suggestion.score == 100));
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

pub use tripweek_core::{
    BatchClaims, BusinessWeek, ConfigurationError, Constraint, ConstraintKind, DEFAULT_CUTOFF,
    DEFAULT_TOP_N, Event, EventKind, InvalidArgument, PlanSnapshot, PlanSource, PlanningError,
    Quarter, Reason, ScoringContext, Severity, SeverityTable, SuggestRequest, Suggestion,
    WeekScore, WeekScorer,
};

#[cfg(feature = "serde")]
pub use tripweek_core::{ConstraintRecord, EventRecord, PlanRecord};

#[cfg(feature = "scorer")]
pub use tripweek_scorer::{
    BatchAssignment, BatchPlan, BatchTrip, CalendarScorer, RankerConfig, ScoreWeights,
    SuggestionRanker, WeightsError, plan_batch, suggest,
};
