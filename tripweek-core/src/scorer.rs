//! Score candidate weeks for a trip.
//!
//! The `WeekScorer` trait evaluates one [`BusinessWeek`] against a
//! read-only [`ScoringContext`]. Scorers keep no memory between calls; all
//! state, including the batch claims, arrives through the context.

use crate::{BatchClaims, BusinessWeek, Constraint, Event, SeverityTable, WeekScore};

/// Score at or below which a week is treated as blocked.
pub const DEFAULT_CUTOFF: i64 = -500;

/// Everything a scorer may consult when evaluating a week.
///
/// # Examples
/// ```
/// use tripweek_core::{BatchClaims, ScoringContext};
///
/// let claims = BatchClaims::new();
/// let context = ScoringContext::new("Paris", &[], &[], &claims).excluding("trip-1");
/// assert_eq!(context.location(), "Paris");
/// assert_eq!(context.exclude(), Some("trip-1"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ScoringContext<'a> {
    location: &'a str,
    events: &'a [Event],
    constraints: &'a [Constraint],
    claims: &'a BatchClaims,
    severities: SeverityTable,
    exclude: Option<&'a str>,
}

impl<'a> ScoringContext<'a> {
    /// Build a context with the default severity table.
    #[must_use]
    pub fn new(
        location: &'a str,
        events: &'a [Event],
        constraints: &'a [Constraint],
        claims: &'a BatchClaims,
    ) -> Self {
        Self {
            location,
            events,
            constraints,
            claims,
            severities: SeverityTable::default(),
            exclude: None,
        }
    }

    /// Replace the severity table.
    #[must_use]
    pub const fn with_severities(mut self, severities: SeverityTable) -> Self {
        self.severities = severities;
        self
    }

    /// Skip the event with `id`, typically the trip being scheduled.
    #[must_use]
    pub const fn excluding(mut self, id: &'a str) -> Self {
        self.exclude = Some(id);
        self
    }

    /// Candidate destination.
    #[must_use]
    pub const fn location(&self) -> &'a str {
        self.location
    }

    /// Events already on the calendar, excluding the trip being scored.
    pub fn events(&self) -> impl Iterator<Item = &'a Event> + '_ {
        let exclude = self.exclude;
        self.events
            .iter()
            .filter(move |event| exclude != Some(event.id()))
    }

    /// Calendar constraints.
    #[must_use]
    pub const fn constraints(&self) -> &'a [Constraint] {
        self.constraints
    }

    /// Weeks claimed earlier in the current batch.
    #[must_use]
    pub const fn claims(&self) -> &'a BatchClaims {
        self.claims
    }

    /// Severity table used to classify constraints.
    #[must_use]
    pub const fn severities(&self) -> &SeverityTable {
        &self.severities
    }

    /// Identifier of the excluded event, if any.
    #[must_use]
    pub const fn exclude(&self) -> Option<&'a str> {
        self.exclude
    }
}

/// Calculate the desirability of assigning a trip to one week.
///
/// Higher scores are better; scores may be negative. Implementations must be
/// deterministic and thread-safe (`Send` + `Sync`) so independent quarters
/// can be scored concurrently.
///
/// # Examples
///
/// ```rust
/// use chrono::NaiveDate;
/// use tripweek_core::{BatchClaims, BusinessWeek, ScoringContext, WeekScore, WeekScorer};
///
/// struct FlatScorer;
///
/// impl WeekScorer for FlatScorer {
///     fn score(&self, _week: &BusinessWeek, _context: &ScoringContext<'_>) -> WeekScore {
///         WeekScore::new(100)
///     }
/// }
///
/// let claims = BatchClaims::new();
/// let context = ScoringContext::new("Paris", &[], &[], &claims);
/// let week = BusinessWeek::containing(NaiveDate::from_ymd_opt(2025, 6, 9).unwrap()).unwrap();
/// assert_eq!(FlatScorer.score(&week, &context).score, 100);
/// ```
pub trait WeekScorer: Send + Sync {
    /// Score `week` for the trip described by `context`.
    fn score(&self, week: &BusinessWeek, context: &ScoringContext<'_>) -> WeekScore;

    /// Weeks scoring at or below this value are not worth suggesting.
    fn cutoff(&self) -> i64 {
        DEFAULT_CUTOFF
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EventKind;
    use chrono::NaiveDate;
    use rstest::rstest;

    #[rstest]
    fn excluded_event_is_hidden() {
        let monday = NaiveDate::from_ymd_opt(2025, 6, 9).expect("valid date");
        let events = vec![
            Event::flexible("keep", "Visit", EventKind::Other, "Oslo", monday).expect("valid"),
            Event::flexible("skip", "Moving", EventKind::Other, "Oslo", monday).expect("valid"),
        ];
        let claims = BatchClaims::new();
        let context = ScoringContext::new("Oslo", &events, &[], &claims).excluding("skip");
        let ids: Vec<_> = context.events().map(Event::id).collect();
        assert_eq!(ids, ["keep"]);
    }
}
