//! Read-only access to the planner's committed calendar.
//!
//! The state store that owns events and constraints lives outside the
//! engine. `PlanSource` is the seam it is injected through: callers pass a
//! snapshot explicitly into every suggestion request.

use crate::{Constraint, Event};

/// Provide immutable snapshots of committed events and constraints.
///
/// Implementations must not change the returned data while a scoring pass
/// borrows it; the borrow checker enforces this for in-process sources.
pub trait PlanSource {
    /// Trips already on the calendar.
    fn events(&self) -> &[Event];

    /// Calendar constraints in effect.
    fn constraints(&self) -> &[Constraint];
}

/// Owned, in-memory snapshot of a planner's calendar.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use tripweek_core::{Constraint, ConstraintKind, PlanSnapshot, PlanSource};
///
/// # fn main() -> Result<(), tripweek_core::InvalidArgument> {
/// let day = NaiveDate::from_ymd_opt(2025, 12, 25).unwrap();
/// let snapshot = PlanSnapshot::default()
///     .with_constraint(Constraint::new("c1", "Christmas", ConstraintKind::Holiday, day, day)?);
/// assert_eq!(snapshot.constraints().len(), 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanSnapshot {
    events: Vec<Event>,
    constraints: Vec<Constraint>,
}

impl PlanSnapshot {
    /// Build a snapshot from pre-validated parts.
    #[must_use]
    pub const fn new(events: Vec<Event>, constraints: Vec<Constraint>) -> Self {
        Self {
            events,
            constraints,
        }
    }

    /// Add an event while returning `self` for chaining.
    #[must_use]
    pub fn with_event(mut self, event: Event) -> Self {
        self.events.push(event);
        self
    }

    /// Add a constraint while returning `self` for chaining.
    #[must_use]
    pub fn with_constraint(mut self, constraint: Constraint) -> Self {
        self.constraints.push(constraint);
        self
    }
}

impl PlanSource for PlanSnapshot {
    fn events(&self) -> &[Event] {
        &self.events
    }

    fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }
}

impl<T: PlanSource + ?Sized> PlanSource for &T {
    fn events(&self) -> &[Event] {
        (**self).events()
    }

    fn constraints(&self) -> &[Constraint] {
        (**self).constraints()
    }
}
