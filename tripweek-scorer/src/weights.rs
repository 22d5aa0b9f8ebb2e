//! Tunable weights applied by the calendar scorer.
#![forbid(unsafe_code)]

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tripweek_core::DEFAULT_CUTOFF;

/// Score contributions and the viability cutoff.
///
/// Penalties and the bonus are magnitudes; the scorer applies their sign.
/// Weeks scoring at or below `cutoff` are considered blocked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct ScoreWeights {
    /// Starting score of every week.
    pub base: i64,
    /// Subtracted per overlapping hard constraint.
    pub hard_penalty: i64,
    /// Subtracted per overlapping soft constraint.
    pub soft_penalty: i64,
    /// Added per overlapping trip to the same destination.
    pub consolidation_bonus: i64,
    /// Subtracted per overlapping trip to another destination.
    pub conflict_penalty: i64,
    /// Subtracted when an earlier trip in the batch claimed the week.
    pub batch_penalty: i64,
    /// Weeks scoring at or below this value are discarded.
    pub cutoff: i64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            base: 100,
            hard_penalty: 1000,
            soft_penalty: 20,
            consolidation_bonus: 500,
            conflict_penalty: 1000,
            batch_penalty: 1000,
            cutoff: DEFAULT_CUTOFF,
        }
    }
}

/// Errors raised when validating [`ScoreWeights`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WeightsError {
    /// A magnitude was negative.
    #[error("{field} must not be negative, got {value}")]
    Negative {
        /// Offending field name.
        field: &'static str,
        /// Rejected value.
        value: i64,
    },
    /// The cutoff would discard an unconstrained week.
    #[error("cutoff {cutoff} must be below the base score {base}")]
    CutoffAboveBase {
        /// Configured cutoff.
        cutoff: i64,
        /// Configured base score.
        base: i64,
    },
}

impl ScoreWeights {
    /// Validate the weights and return a copy.
    ///
    /// # Errors
    /// Returns [`WeightsError::Negative`] for a negative magnitude and
    /// [`WeightsError::CutoffAboveBase`] when a clean week would be discarded.
    pub fn validate(self) -> Result<Self, WeightsError> {
        let magnitudes = [
            ("hard-penalty", self.hard_penalty),
            ("soft-penalty", self.soft_penalty),
            ("consolidation-bonus", self.consolidation_bonus),
            ("conflict-penalty", self.conflict_penalty),
            ("batch-penalty", self.batch_penalty),
        ];
        if let Some((field, value)) = magnitudes.into_iter().find(|(_, value)| *value < 0) {
            return Err(WeightsError::Negative { field, value });
        }
        if self.cutoff >= self.base {
            return Err(WeightsError::CutoffAboveBase {
                cutoff: self.cutoff,
                base: self.base,
            });
        }
        Ok(self)
    }
}
