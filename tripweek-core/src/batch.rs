//! Weeks claimed during an in-progress multi-trip planning session.
//!
//! The caller owns a [`BatchClaims`] for the duration of one session and
//! inserts each confirmed week before asking for the next trip's
//! suggestions. Scorers only read the set, so claims made earlier in the
//! batch take effect on the very next call.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::{BusinessWeek, Event, InvalidArgument};

/// Set of week-start dates already assigned within the current batch.
///
/// Serialised as a list of week-start dates. Deserialised dates are
/// normalised to the Monday of their week.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use tripweek_core::{BatchClaims, BusinessWeek};
///
/// # fn main() -> Result<(), tripweek_core::InvalidArgument> {
/// let mut claims = BatchClaims::new();
/// let wednesday = NaiveDate::from_ymd_opt(2025, 6, 11).unwrap();
/// claims.claim(wednesday)?;
/// assert!(claims.contains(&BusinessWeek::containing(wednesday)?));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(into = "Vec<NaiveDate>", try_from = "Vec<NaiveDate>")
)]
pub struct BatchClaims {
    weeks: BTreeSet<NaiveDate>,
}

impl BatchClaims {
    /// Create an empty claim set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the week containing `date`, returning `true` if newly claimed.
    ///
    /// # Errors
    /// Returns [`InvalidArgument::Date`] when the week cannot be represented.
    pub fn claim(&mut self, date: NaiveDate) -> Result<bool, InvalidArgument> {
        let week = BusinessWeek::containing(date)?;
        Ok(self.claim_week(&week))
    }

    /// Claim `week`, returning `true` if it was not already claimed.
    pub fn claim_week(&mut self, week: &BusinessWeek) -> bool {
        self.weeks.insert(week.start())
    }

    /// Claim every business week `event` occupies.
    ///
    /// A fixed trip spanning several weeks claims each of them. Returns the
    /// number of weeks newly claimed.
    ///
    /// # Errors
    /// Returns [`InvalidArgument::Date`] when a week cannot be represented.
    pub fn claim_event(&mut self, event: &Event) -> Result<usize, InvalidArgument> {
        let weeks = event.span().weeks()?;
        let claimed = weeks.iter().filter(|week| self.claim_week(week)).count();
        log::trace!("event {} claimed {claimed} of {} weeks", event.id(), weeks.len());
        Ok(claimed)
    }

    /// Release a previously claimed week, returning `true` if it was held.
    pub fn release(&mut self, week: &BusinessWeek) -> bool {
        self.weeks.remove(&week.start())
    }

    /// Report whether `week` is already claimed.
    #[must_use]
    pub fn contains(&self, week: &BusinessWeek) -> bool {
        self.weeks.contains(&week.start())
    }

    /// Iterate over claimed week starts in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.weeks.iter().copied()
    }

    /// Number of claimed weeks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.weeks.len()
    }

    /// Report whether nothing has been claimed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }
}

impl FromIterator<BusinessWeek> for BatchClaims {
    fn from_iter<I: IntoIterator<Item = BusinessWeek>>(iter: I) -> Self {
        Self {
            weeks: iter.into_iter().map(|week| week.start()).collect(),
        }
    }
}

impl From<BatchClaims> for Vec<NaiveDate> {
    fn from(claims: BatchClaims) -> Self {
        claims.weeks.into_iter().collect()
    }
}

impl TryFrom<Vec<NaiveDate>> for BatchClaims {
    type Error = InvalidArgument;

    fn try_from(dates: Vec<NaiveDate>) -> Result<Self, Self::Error> {
        let mut claims = Self::new();
        for date in dates {
            claims.claim(date)?;
        }
        Ok(claims)
    }
}
