//! Wire-shaped records for events and constraints.
//!
//! State stores hand data over as loosely typed JSON. These records mirror
//! that shape and convert into the validated domain types, surfacing
//! malformed dates as [`InvalidArgument`](crate::InvalidArgument) and
//! unknown types as [`ConfigurationError`](crate::ConfigurationError).
#![cfg_attr(docsrs, doc(cfg(feature = "serde")))]

use serde::{Deserialize, Serialize};

use crate::{
    Constraint, ConstraintKind, Event, EventKind, PlanSnapshot, PlanningError, parse_iso_date,
};

/// A trip as stored by the planner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    /// Stable identifier.
    pub id: String,
    /// Human-readable title.
    pub title: String,
    /// Event type name, e.g. `conference`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Destination.
    #[serde(default)]
    pub location: String,
    /// `YYYY-MM-DD` start date.
    pub start_date: String,
    /// Optional `YYYY-MM-DD` end date.
    #[serde(default)]
    pub end_date: Option<String>,
    /// Whether the exact dates must be preserved.
    #[serde(default)]
    pub is_fixed: bool,
}

/// A constraint as stored by the planner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstraintRecord {
    /// Stable identifier.
    pub id: String,
    /// Human-readable title.
    pub title: String,
    /// Constraint type name, e.g. `vacation`.
    #[serde(rename = "type")]
    pub kind: String,
    /// `YYYY-MM-DD` first day.
    pub start_date: String,
    /// `YYYY-MM-DD` last day, inclusive.
    pub end_date: String,
}

/// A full calendar snapshot in wire form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanRecord {
    /// Committed trips.
    #[serde(default)]
    pub events: Vec<EventRecord>,
    /// Calendar constraints.
    #[serde(default)]
    pub constraints: Vec<ConstraintRecord>,
}

impl TryFrom<EventRecord> for Event {
    type Error = PlanningError;

    fn try_from(record: EventRecord) -> Result<Self, Self::Error> {
        let kind = record.kind.parse::<EventKind>()?;
        let start = parse_iso_date("startDate", &record.start_date)?;
        let end = record
            .end_date
            .as_deref()
            .filter(|raw| !raw.trim().is_empty())
            .map(|raw| parse_iso_date("endDate", raw))
            .transpose()?;
        let event = if record.is_fixed {
            Self::fixed(record.id, record.title, kind, record.location, start, end)?
        } else {
            Self::flexible(record.id, record.title, kind, record.location, start)?
        };
        Ok(event)
    }
}

impl TryFrom<ConstraintRecord> for Constraint {
    type Error = PlanningError;

    fn try_from(record: ConstraintRecord) -> Result<Self, Self::Error> {
        let kind = record.kind.parse::<ConstraintKind>()?;
        let start = parse_iso_date("startDate", &record.start_date)?;
        let end = parse_iso_date("endDate", &record.end_date)?;
        Ok(Self::new(record.id, record.title, kind, start, end)?)
    }
}

impl TryFrom<PlanRecord> for PlanSnapshot {
    type Error = PlanningError;

    fn try_from(record: PlanRecord) -> Result<Self, Self::Error> {
        let events = record
            .events
            .into_iter()
            .map(Event::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        let constraints = record
            .constraints
            .into_iter()
            .map(Constraint::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(events, constraints))
    }
}
