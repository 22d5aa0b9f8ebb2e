//! Error taxonomy shared by the planning engine.
//!
//! Every variant carries the offending value rather than a user-facing
//! message; hosts decide how to present them.

use thiserror::Error;

use crate::ConstraintKind;

/// Malformed input detected at the engine boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidArgument {
    /// Quarter index outside `1..=4`.
    #[error("quarter index {value} is outside 1..=4")]
    Quarter {
        /// Rejected quarter index.
        value: u8,
    },
    /// Year outside the four-digit range.
    #[error("year {value} is not a four-digit year")]
    Year {
        /// Rejected year.
        value: i32,
    },
    /// Location was empty after trimming.
    #[error("location must not be empty")]
    EmptyLocation,
    /// Requested result count was zero.
    #[error("top_n must be positive, got {value}")]
    TopN {
        /// Rejected result count.
        value: usize,
    },
    /// A date string could not be parsed or overflowed the calendar.
    #[error("{field} '{value}' is not a valid YYYY-MM-DD date")]
    Date {
        /// Name of the offending field.
        field: &'static str,
        /// Raw value supplied by the caller.
        value: String,
    },
    /// A fixed event ends before it starts.
    #[error("event {id} ends before it starts")]
    EventRange {
        /// Identifier of the offending event.
        id: String,
    },
    /// A constraint ends before it starts.
    #[error("constraint {id} ends before it starts")]
    ConstraintRange {
        /// Identifier of the offending constraint.
        id: String,
    },
    /// An event or constraint identifier was blank.
    #[error("identifier must not be empty")]
    EmptyId,
}

/// Type tables that do not cover the values being scored.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// A constraint type name is not recognised.
    #[error("unknown constraint type '{value}'")]
    UnknownConstraintType {
        /// Raw type name.
        value: String,
    },
    /// An event type name is not recognised.
    #[error("unknown event type '{value}'")]
    UnknownEventType {
        /// Raw type name.
        value: String,
    },
    /// A severity table omits a known constraint type.
    #[error("severity table has no entry for '{kind}'")]
    UnmappedConstraintType {
        /// Constraint type missing from the table.
        kind: ConstraintKind,
    },
}

/// Errors returned by the suggestion entry points.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanningError {
    /// Input failed validation.
    #[error(transparent)]
    InvalidArgument(#[from] InvalidArgument),
    /// Configuration tables were incomplete or inconsistent.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}
