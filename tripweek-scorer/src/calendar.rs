//! Calendar-aware scoring of candidate weeks.
//!
//! The scorer applies its rules in a fixed order so the reasons read the
//! same way every time: hard constraints, soft constraints, overlapping
//! trips, then the batch claim.
#![forbid(unsafe_code)]

use tripweek_core::{
    BusinessWeek, Reason, ScoringContext, Severity, WeekScore, WeekScorer, same_location,
};

use crate::ScoreWeights;

/// Scorer weighing constraints, co-located trips, and batch claims.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use tripweek_core::{BatchClaims, BusinessWeek, ScoringContext, WeekScorer};
/// use tripweek_scorer::CalendarScorer;
///
/// let claims = BatchClaims::new();
/// let context = ScoringContext::new("London", &[], &[], &claims);
/// let week = BusinessWeek::containing(NaiveDate::from_ymd_opt(2025, 1, 6).unwrap()).unwrap();
/// let scored = CalendarScorer::default().score(&week, &context);
/// assert_eq!(scored.score, 100);
/// assert!(scored.reasons.is_empty());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CalendarScorer {
    weights: ScoreWeights,
}

impl CalendarScorer {
    /// Construct a scorer with explicit weights.
    #[must_use]
    pub const fn new(weights: ScoreWeights) -> Self {
        Self { weights }
    }

    fn apply_constraints(
        &self,
        week: &BusinessWeek,
        context: &ScoringContext<'_>,
        severity: Severity,
        scored: &mut WeekScore,
    ) {
        let overlapping = context.constraints().iter().filter(|constraint| {
            context.severities().severity_of(constraint.kind()) == severity
                && constraint.range().overlaps_week(week)
        });
        for constraint in overlapping {
            let title = constraint.title().to_owned();
            match severity {
                Severity::Hard => scored.apply(
                    -self.weights.hard_penalty,
                    Reason::HardConstraint { title },
                ),
                Severity::Soft => scored.apply(
                    -self.weights.soft_penalty,
                    Reason::SoftConstraint { title },
                ),
            }
        }
    }

    fn apply_events(&self, week: &BusinessWeek, context: &ScoringContext<'_>, scored: &mut WeekScore) {
        for event in context.events().filter(|event| event.span().overlaps_week(week)) {
            let title = event.title().to_owned();
            if same_location(event.location(), context.location()) {
                scored.apply(
                    self.weights.consolidation_bonus,
                    Reason::Consolidates { title },
                );
            } else {
                scored.apply(
                    -self.weights.conflict_penalty,
                    Reason::LocationConflict {
                        title,
                        location: event.location().to_owned(),
                    },
                );
            }
        }
    }
}

impl WeekScorer for CalendarScorer {
    fn score(&self, week: &BusinessWeek, context: &ScoringContext<'_>) -> WeekScore {
        let mut scored = WeekScore::new(self.weights.base);
        self.apply_constraints(week, context, Severity::Hard, &mut scored);
        self.apply_constraints(week, context, Severity::Soft, &mut scored);
        self.apply_events(week, context, &mut scored);
        if context.claims().contains(week) {
            scored.apply(-self.weights.batch_penalty, Reason::BatchClaimed);
        }
        log::trace!("week {week} scored {} ({} reasons)", scored.score, scored.reasons.len());
        scored
    }

    fn cutoff(&self) -> i64 {
        self.weights.cutoff
    }
}
