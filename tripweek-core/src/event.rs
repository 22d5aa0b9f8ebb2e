//! Trips and constraints as read from the planner's state store.

use chrono::NaiveDate;
use std::str::FromStr;

use crate::{
    BusinessWeek, ConfigurationError, ConstraintKind, DateRange, InvalidArgument,
};

/// Categories of business trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum EventKind {
    /// Visit to a company division.
    DivisionVisit,
    /// GTS all-hands meeting.
    GtsAllHands,
    /// PI planning session.
    PiPlanning,
    /// BP team meeting.
    BpTeamMeeting,
    /// External conference.
    Conference,
    /// Anything else.
    Other,
}

impl EventKind {
    /// Every event kind, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::DivisionVisit,
        Self::GtsAllHands,
        Self::PiPlanning,
        Self::BpTeamMeeting,
        Self::Conference,
        Self::Other,
    ];

    /// Return the canonical type name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DivisionVisit => "division-visit",
            Self::GtsAllHands => "gts-all-hands",
            Self::PiPlanning => "pi-planning",
            Self::BpTeamMeeting => "bp-team-meeting",
            Self::Conference => "conference",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventKind {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == name)
            .ok_or_else(|| ConfigurationError::UnknownEventType {
                value: s.to_owned(),
            })
    }
}

/// Compare two locations case-insensitively, ignoring surrounding whitespace.
///
/// # Examples
/// ```
/// use tripweek_core::same_location;
///
/// assert!(same_location(" Paris", "paris "));
/// assert!(!same_location("Paris", "Tokyo"));
/// ```
#[must_use]
pub fn same_location(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

fn require_id(id: String) -> Result<String, InvalidArgument> {
    if id.trim().is_empty() {
        return Err(InvalidArgument::EmptyId);
    }
    Ok(id)
}

/// A business trip already on the calendar.
///
/// Fixed trips keep their exact date range. Flexible trips are anchored to
/// the Monday of their week and occupy Monday to Friday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    id: String,
    title: String,
    kind: EventKind,
    location: String,
    start: NaiveDate,
    end: Option<NaiveDate>,
    fixed: bool,
    span: DateRange,
}

impl Event {
    /// Construct a fixed trip covering `start..=end` (or `start` alone).
    ///
    /// # Errors
    /// Returns [`InvalidArgument::EventRange`] when `end` precedes `start`,
    /// and [`InvalidArgument::EmptyId`] for a blank identifier.
    pub fn fixed(
        id: impl Into<String>,
        title: impl Into<String>,
        kind: EventKind,
        location: impl Into<String>,
        start: NaiveDate,
        end: Option<NaiveDate>,
    ) -> Result<Self, InvalidArgument> {
        let id = require_id(id.into())?;
        let span = DateRange::new(start, end.unwrap_or(start))
            .ok_or_else(|| InvalidArgument::EventRange { id: id.clone() })?;
        Ok(Self {
            id,
            title: title.into(),
            kind,
            location: location.into(),
            start,
            end,
            fixed: true,
            span,
        })
    }

    /// Construct a flexible trip in the business week containing `date`.
    ///
    /// # Errors
    /// Returns [`InvalidArgument::EmptyId`] for a blank identifier and
    /// [`InvalidArgument::Date`] when the week cannot be represented.
    ///
    /// # Examples
    /// ```
    /// use chrono::NaiveDate;
    /// use tripweek_core::{Event, EventKind};
    ///
    /// # fn main() -> Result<(), tripweek_core::InvalidArgument> {
    /// let thursday = NaiveDate::from_ymd_opt(2025, 6, 12).unwrap();
    /// let trip = Event::flexible("t1", "Site visit", EventKind::DivisionVisit, "Lyon", thursday)?;
    /// assert_eq!(trip.start(), NaiveDate::from_ymd_opt(2025, 6, 9).unwrap());
    /// # Ok(())
    /// # }
    /// ```
    pub fn flexible(
        id: impl Into<String>,
        title: impl Into<String>,
        kind: EventKind,
        location: impl Into<String>,
        date: NaiveDate,
    ) -> Result<Self, InvalidArgument> {
        let id = require_id(id.into())?;
        let week = BusinessWeek::containing(date)?;
        Ok(Self {
            id,
            title: title.into(),
            kind,
            location: location.into(),
            start: week.start(),
            end: None,
            fixed: false,
            span: DateRange::of_week(&week),
        })
    }

    /// Stable identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Human-readable title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Trip category.
    #[must_use]
    pub const fn kind(&self) -> EventKind {
        self.kind
    }

    /// Destination as entered by the planner.
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Stored start date; always a Monday for flexible trips.
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Stored end date, if one was recorded.
    #[must_use]
    pub const fn end(&self) -> Option<NaiveDate> {
        self.end
    }

    /// Whether the trip keeps its exact dates.
    #[must_use]
    pub const fn is_fixed(&self) -> bool {
        self.fixed
    }

    /// Dates the trip effectively occupies.
    #[must_use]
    pub const fn span(&self) -> DateRange {
        self.span
    }
}

/// A calendar constraint such as a vacation or blackout period.
///
/// Constraint ranges are exact and never normalised to week boundaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraint {
    id: String,
    title: String,
    kind: ConstraintKind,
    range: DateRange,
}

impl Constraint {
    /// Validate and construct a constraint covering `start..=end`.
    ///
    /// # Errors
    /// Returns [`InvalidArgument::ConstraintRange`] when `end` precedes
    /// `start`, and [`InvalidArgument::EmptyId`] for a blank identifier.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        kind: ConstraintKind,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Self, InvalidArgument> {
        let id = require_id(id.into())?;
        let range = DateRange::new(start, end)
            .ok_or_else(|| InvalidArgument::ConstraintRange { id: id.clone() })?;
        Ok(Self {
            id,
            title: title.into(),
            kind,
            range,
        })
    }

    /// Stable identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Human-readable title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Constraint category.
    #[must_use]
    pub const fn kind(&self) -> ConstraintKind {
        self.kind
    }

    /// Inclusive date range covered.
    #[must_use]
    pub const fn range(&self) -> DateRange {
        self.range
    }
}
