//! Week-level overlap between exact date ranges and business weeks.
//!
//! Constraints and fixed trips are recorded as exact, inclusive date ranges
//! while flexible trips occupy whole weeks. A range touching any weekday of a
//! week affects the entire week: a one-day blackout on a Friday blocks the
//! Monday as well. Weekend-only ranges never overlap a business week.

use chrono::NaiveDate;

use crate::{BusinessWeek, InvalidArgument};

/// An inclusive calendar date range with `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Construct a range, returning `None` when `end` precedes `start`.
    #[must_use]
    pub fn new(start: NaiveDate, end: NaiveDate) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    /// A range covering a single day.
    #[must_use]
    pub const fn single(day: NaiveDate) -> Self {
        Self {
            start: day,
            end: day,
        }
    }

    /// A range spanning the weekdays of `week`.
    #[must_use]
    pub const fn of_week(week: &BusinessWeek) -> Self {
        Self {
            start: week.start(),
            end: week.end(),
        }
    }

    /// First day of the range.
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the range, inclusive.
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Report whether any weekday of `week` falls inside this range.
    #[must_use]
    pub fn overlaps_week(&self, week: &BusinessWeek) -> bool {
        week_overlaps(week, self.start, self.end)
    }

    /// Business weeks this range touches, in ascending order.
    ///
    /// # Errors
    /// Returns [`InvalidArgument::Date`] when a week at the edge of the
    /// calendar cannot be represented.
    pub fn weeks(&self) -> Result<Vec<BusinessWeek>, InvalidArgument> {
        let mut weeks = Vec::new();
        let mut cursor = BusinessWeek::containing(self.start)?;
        while cursor.start() <= self.end {
            if self.overlaps_week(&cursor) {
                weeks.push(cursor);
            }
            let Some(next) = cursor.start().checked_add_days(chrono::Days::new(7)) else {
                break;
            };
            cursor = BusinessWeek::containing(next)?;
        }
        Ok(weeks)
    }
}

/// Report whether any of `week`'s five weekdays lies in
/// `[range_start, range_end]`.
///
/// An inverted range (end before start) never overlaps.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use tripweek_core::{BusinessWeek, week_overlaps};
///
/// # fn main() -> Result<(), tripweek_core::InvalidArgument> {
/// let friday = NaiveDate::from_ymd_opt(2025, 6, 13).unwrap();
/// let week = BusinessWeek::containing(friday)?;
/// assert!(week_overlaps(&week, friday, friday));
/// # Ok(())
/// # }
/// ```
#[must_use]
pub fn week_overlaps(week: &BusinessWeek, range_start: NaiveDate, range_end: NaiveDate) -> bool {
    range_start <= range_end && range_start <= week.end() && range_end >= week.start()
}
