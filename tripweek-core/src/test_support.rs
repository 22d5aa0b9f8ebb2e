//! Test-only builders for calendars used by unit and behaviour tests.
#![cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
#![expect(
    clippy::expect_used,
    reason = "fixtures should fail fast when handed invalid literals"
)]

use chrono::NaiveDate;

use crate::{BusinessWeek, Constraint, ConstraintKind, Event, EventKind};

/// Build a date from literal parts.
///
/// # Panics
/// Panics when the parts do not form a valid date.
#[must_use]
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("fixture date must be valid")
}

/// Build the business week containing the given date.
///
/// # Panics
/// Panics when the parts do not form a valid date.
#[must_use]
pub fn week_of(year: i32, month: u32, day: u32) -> BusinessWeek {
    BusinessWeek::containing(date(year, month, day)).expect("fixture week must be valid")
}

/// Build a constraint of `kind` spanning `start..=end`.
///
/// # Panics
/// Panics when the range is inverted.
#[must_use]
pub fn constraint(
    id: &str,
    title: &str,
    kind: ConstraintKind,
    start: NaiveDate,
    end: NaiveDate,
) -> Constraint {
    Constraint::new(id, title, kind, start, end).expect("fixture constraint must be valid")
}

/// Build a fixed trip to `location` spanning `start..=end`.
///
/// # Panics
/// Panics when the range is inverted.
#[must_use]
pub fn fixed_trip(
    id: &str,
    title: &str,
    location: &str,
    start: NaiveDate,
    end: NaiveDate,
) -> Event {
    Event::fixed(id, title, EventKind::Other, location, start, Some(end))
        .expect("fixture trip must be valid")
}

/// Build a flexible trip to `location` in the week containing `date`.
///
/// # Panics
/// Panics when the week cannot be represented.
#[must_use]
pub fn flexible_trip(id: &str, title: &str, location: &str, date: NaiveDate) -> Event {
    Event::flexible(id, title, EventKind::Other, location, date)
        .expect("fixture trip must be valid")
}
