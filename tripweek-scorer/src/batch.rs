//! Place several flexible trips in sequence without double-booking weeks.
//!
//! Each trip takes the best week still free, then claims it so later trips
//! in the batch see it as taken. The caller's claim set is never mutated;
//! the planner works on a copy and hands the final set back.

use serde::{Deserialize, Serialize};
use tripweek_core::{
    BatchClaims, PlanSource, PlanningError, SuggestRequest, Suggestion, WeekScorer,
};

use crate::SuggestionRanker;

/// A flexible trip awaiting a week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchTrip {
    /// Display title.
    pub title: String,
    /// Destination.
    pub location: String,
    /// Quarter index, `1..=4`.
    pub quarter: u8,
}

impl BatchTrip {
    /// Describe a trip to `location` in `quarter`.
    #[must_use]
    pub fn new(title: impl Into<String>, location: impl Into<String>, quarter: u8) -> Self {
        Self {
            title: title.into(),
            location: location.into(),
            quarter,
        }
    }
}

/// Outcome for one trip of a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchAssignment {
    /// Trip title.
    pub title: String,
    /// Trip destination.
    pub location: String,
    /// Chosen week, or `None` when no week in the quarter was viable.
    pub suggestion: Option<Suggestion>,
}

impl BatchAssignment {
    /// Report whether the trip received a week.
    #[must_use]
    pub const fn is_placed(&self) -> bool {
        self.suggestion.is_some()
    }
}

/// Assignments in input order plus the claims they produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchPlan {
    /// One entry per input trip.
    pub assignments: Vec<BatchAssignment>,
    /// Starting claims extended with every week assigned here.
    pub claims: BatchClaims,
}

impl BatchPlan {
    /// Trips that could not be placed.
    pub fn unplaced(&self) -> impl Iterator<Item = &BatchAssignment> {
        self.assignments.iter().filter(|assignment| !assignment.is_placed())
    }
}

impl<C> SuggestionRanker<C>
where
    C: WeekScorer,
{
    /// Assign each trip, in order, to its best unclaimed week of `year`.
    ///
    /// A trip with no viable week is recorded as unplaced and the batch
    /// carries on.
    ///
    /// # Errors
    /// Returns [`PlanningError::InvalidArgument`] when `year` or a trip's
    /// quarter or location is invalid. No partial plan is returned.
    pub fn plan_batch<P>(
        &self,
        year: i32,
        trips: &[BatchTrip],
        source: &P,
        claims: &BatchClaims,
    ) -> Result<BatchPlan, PlanningError>
    where
        P: PlanSource + ?Sized,
    {
        let mut claimed = claims.clone();
        let mut assignments = Vec::with_capacity(trips.len());
        for trip in trips {
            let request = SuggestRequest::new(year, trip.quarter, &trip.location)?.with_top_n(1)?;
            let best = self.suggest(&request, source, &claimed)?.into_iter().next();
            match &best {
                Some(chosen) => {
                    claimed.claim(chosen.week_start)?;
                    log::debug!("placed {} in week of {}", trip.title, chosen.week_start);
                }
                None => log::warn!(
                    "no viable week for {} in {} {}",
                    trip.title,
                    request.quarter(),
                    year
                ),
            }
            assignments.push(BatchAssignment {
                title: trip.title.clone(),
                location: request.location().to_owned(),
                suggestion: best,
            });
        }
        Ok(BatchPlan {
            assignments,
            claims: claimed,
        })
    }
}

/// Plan a batch with the default calendar ranker.
///
/// # Errors
/// Returns [`PlanningError::InvalidArgument`] when `year` or a trip is
/// invalid.
pub fn plan_batch<P>(
    year: i32,
    trips: &[BatchTrip],
    source: &P,
    claims: &BatchClaims,
) -> Result<BatchPlan, PlanningError>
where
    P: PlanSource + ?Sized,
{
    SuggestionRanker::default().plan_batch(year, trips, source, claims)
}
