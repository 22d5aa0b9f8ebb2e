//! Scores and ranked suggestions produced for a candidate week.

use chrono::NaiveDate;

/// A single contribution to a week's score.
///
/// The `Display` form is the short justification shown next to a
/// suggestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reason {
    /// The week overlaps a hard constraint.
    HardConstraint {
        /// Constraint title.
        title: String,
    },
    /// The week overlaps a soft constraint.
    SoftConstraint {
        /// Constraint title.
        title: String,
    },
    /// Another trip to the same destination already occupies the week.
    Consolidates {
        /// Title of the existing trip.
        title: String,
    },
    /// Another trip to a different destination already occupies the week.
    LocationConflict {
        /// Title of the existing trip.
        title: String,
        /// Destination of the existing trip.
        location: String,
    },
    /// An earlier trip in the same batch claimed the week.
    BatchClaimed,
}

impl std::fmt::Display for Reason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HardConstraint { title } => write!(f, "hard constraint: {title}"),
            Self::SoftConstraint { title } => write!(f, "soft constraint: {title}"),
            Self::Consolidates { title } => write!(f, "consolidates with {title}"),
            Self::LocationConflict { title, location } => {
                write!(f, "conflicts with {title} in {location}")
            }
            Self::BatchClaimed => f.write_str("already assigned to another trip in this batch"),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Reason {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Numeric desirability of one week plus the reasons behind it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekScore {
    /// Accumulated score; may be negative.
    pub score: i64,
    /// Contributions in the order they were applied.
    pub reasons: Vec<Reason>,
}

impl WeekScore {
    /// Start from `base` with no reasons.
    #[must_use]
    pub const fn new(base: i64) -> Self {
        Self {
            score: base,
            reasons: Vec::new(),
        }
    }

    /// Add `delta` (negative for penalties) and record `reason`.
    pub fn apply(&mut self, delta: i64, reason: Reason) {
        self.score = self.score.saturating_add(delta);
        self.reasons.push(reason);
    }
}

/// A ranked candidate week for a trip.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Suggestion {
    /// Monday of the suggested week.
    pub week_start: NaiveDate,
    /// Desirability score.
    pub score: i64,
    /// Ordered justification for the score.
    pub reasons: Vec<Reason>,
}

impl Suggestion {
    /// Pair a week start with its computed score.
    #[must_use]
    pub fn new(week_start: NaiveDate, scored: WeekScore) -> Self {
        Self {
            week_start,
            score: scored.score,
            reasons: scored.reasons,
        }
    }

    /// Render the reasons as display strings.
    #[must_use]
    pub fn reason_texts(&self) -> Vec<String> {
        self.reasons.iter().map(ToString::to_string).collect()
    }
}
