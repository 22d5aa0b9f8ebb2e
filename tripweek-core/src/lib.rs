//! Core domain types for the Tripweek planning engine.
//!
//! The crate models the calendar a planner works against: trips
//! ([`Event`]), blocking or discouraging periods ([`Constraint`]), the
//! business weeks flexible trips are assigned to ([`BusinessWeek`]), and the
//! claims an in-progress batch holds ([`BatchClaims`]). Scorers plug in
//! through the [`WeekScorer`] trait; calendars arrive through
//! [`PlanSource`].
//!
//! Everything here is pure and synchronous. Constructors return `Result`
//! to surface invalid input early, and nothing performs I/O.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod batch;
pub mod calendar;
mod error;
pub mod event;
pub mod overlap;
#[cfg(feature = "serde")]
pub mod records;
mod request;
pub mod scorer;
pub mod severity;
pub mod source;
mod suggestion;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use batch::BatchClaims;
pub use calendar::{
    BusinessWeek, Quarter, parse_iso_date, validate_year, week_start, weeks_in_quarter,
};
pub use error::{ConfigurationError, InvalidArgument, PlanningError};
pub use event::{Constraint, Event, EventKind, same_location};
pub use overlap::{DateRange, week_overlaps};
#[cfg(feature = "serde")]
pub use records::{ConstraintRecord, EventRecord, PlanRecord};
pub use request::{DEFAULT_TOP_N, SuggestRequest};
pub use scorer::{DEFAULT_CUTOFF, ScoringContext, WeekScorer};
pub use severity::{ConstraintKind, Severity, SeverityTable};
pub use source::{PlanSnapshot, PlanSource};
pub use suggestion::{Reason, Suggestion, WeekScore};
