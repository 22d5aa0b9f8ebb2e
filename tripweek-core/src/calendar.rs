//! Business-week calendar arithmetic.
//!
//! Flexible trips are scheduled at week granularity: a [`BusinessWeek`] is
//! identified by its Monday and spans Monday to Friday inclusive. Quarters
//! follow calendar months, so months 1–3 form Q1 and months 10–12 form Q4.
//!
//! # Examples
//! ```
//! use chrono::NaiveDate;
//! use tripweek_core::{Quarter, weeks_in_quarter};
//!
//! # fn main() -> Result<(), tripweek_core::InvalidArgument> {
//! let weeks = weeks_in_quarter(2025, Quarter::new(2)?)?;
//! assert_eq!(weeks.first().map(|w| w.start()), NaiveDate::from_ymd_opt(2025, 3, 31));
//! # Ok(())
//! # }
//! ```

use chrono::{Datelike, Days, NaiveDate};

use crate::InvalidArgument;

const BUSINESS_DAYS: u64 = 5;
const FRIDAY_OFFSET: u64 = BUSINESS_DAYS - 1;
const DAYS_PER_WEEK: u64 = 7;
const ISO_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` calendar date.
///
/// # Errors
/// Returns [`InvalidArgument::Date`] naming `field` when `value` is not a
/// valid ISO calendar date.
pub fn parse_iso_date(field: &'static str, value: &str) -> Result<NaiveDate, InvalidArgument> {
    NaiveDate::parse_from_str(value.trim(), ISO_FORMAT).map_err(|_| InvalidArgument::Date {
        field,
        value: value.to_owned(),
    })
}

/// Return the Monday on or before `date`.
///
/// # Errors
/// Returns [`InvalidArgument::Date`] when the Monday precedes the earliest
/// representable date.
pub fn week_start(date: NaiveDate) -> Result<NaiveDate, InvalidArgument> {
    let offset = u64::from(date.weekday().num_days_from_monday());
    date.checked_sub_days(Days::new(offset))
        .ok_or_else(|| out_of_range("week_start", date))
}

fn out_of_range(field: &'static str, date: NaiveDate) -> InvalidArgument {
    InvalidArgument::Date {
        field,
        value: date.to_string(),
    }
}

/// A calendar quarter, validated to `1..=4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct Quarter(u8);

impl Quarter {
    /// Validate and construct a quarter from its index.
    ///
    /// # Errors
    /// Returns [`InvalidArgument::Quarter`] for indices outside `1..=4`.
    pub const fn new(index: u8) -> Result<Self, InvalidArgument> {
        match index {
            1..=4 => Ok(Self(index)),
            value => Err(InvalidArgument::Quarter { value }),
        }
    }

    /// Return the quarter containing `date`, derived from its month.
    #[must_use]
    pub fn of(date: NaiveDate) -> Self {
        match date.month() {
            1..=3 => Self(1),
            4..=6 => Self(2),
            7..=9 => Self(3),
            _ => Self(4),
        }
    }

    /// Return the one-based quarter index.
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Return the first and last month (one-based) covered by the quarter.
    #[must_use]
    pub fn months(self) -> (u32, u32) {
        let last = u32::from(self.0) * 3;
        (last - 2, last)
    }

    /// First calendar day of the quarter in `year`.
    fn first_day(self, year: i32) -> Option<NaiveDate> {
        let (first_month, _) = self.months();
        NaiveDate::from_ymd_opt(year, first_month, 1)
    }

    /// Last calendar day of the quarter in `year`.
    fn last_day(self, year: i32) -> Option<NaiveDate> {
        let (_, last_month) = self.months();
        if last_month == 12 {
            return NaiveDate::from_ymd_opt(year, 12, 31);
        }
        NaiveDate::from_ymd_opt(year, last_month + 1, 1)?.pred_opt()
    }
}

impl TryFrom<u8> for Quarter {
    type Error = InvalidArgument;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::new(index)
    }
}

impl From<Quarter> for u8 {
    fn from(quarter: Quarter) -> Self {
        quarter.0
    }
}

impl std::fmt::Display for Quarter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Q{}", self.0)
    }
}

/// A Monday–Friday span identified by its Monday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BusinessWeek {
    start: NaiveDate,
    end: NaiveDate,
}

impl BusinessWeek {
    /// Return the business week containing `date`.
    ///
    /// Weekend dates map to the week that started on the preceding Monday.
    ///
    /// # Errors
    /// Returns [`InvalidArgument::Date`] when the week cannot be represented.
    ///
    /// # Examples
    /// ```
    /// use chrono::NaiveDate;
    /// use tripweek_core::BusinessWeek;
    ///
    /// # fn main() -> Result<(), tripweek_core::InvalidArgument> {
    /// let saturday = NaiveDate::from_ymd_opt(2025, 6, 14).unwrap();
    /// let week = BusinessWeek::containing(saturday)?;
    /// assert_eq!(week.start(), NaiveDate::from_ymd_opt(2025, 6, 9).unwrap());
    /// assert_eq!(week.end(), NaiveDate::from_ymd_opt(2025, 6, 13).unwrap());
    /// # Ok(())
    /// # }
    /// ```
    pub fn containing(date: NaiveDate) -> Result<Self, InvalidArgument> {
        let start = week_start(date)?;
        let end = start
            .checked_add_days(Days::new(FRIDAY_OFFSET))
            .ok_or_else(|| out_of_range("week_end", start))?;
        Ok(Self { start, end })
    }

    /// The Monday anchoring this week.
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// The Friday closing this week.
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Iterate over the five weekdays, Monday first.
    pub fn weekdays(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |day| *day <= end)
    }

    /// Report whether `date` falls on one of this week's weekdays.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        (self.start..=self.end).contains(&date)
    }

    /// Quarter this week belongs to, derived from its Monday.
    #[must_use]
    pub fn quarter(&self) -> Quarter {
        Quarter::of(self.start)
    }

    fn next(&self) -> Option<Self> {
        let start = self.start.checked_add_days(Days::new(DAYS_PER_WEEK))?;
        let end = self.end.checked_add_days(Days::new(DAYS_PER_WEEK))?;
        Some(Self { start, end })
    }
}

impl std::fmt::Display for BusinessWeek {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.start.format(ISO_FORMAT))
    }
}

/// Validate a four-digit calendar year.
///
/// # Errors
/// Returns [`InvalidArgument::Year`] outside `1000..=9999`.
pub const fn validate_year(year: i32) -> Result<i32, InvalidArgument> {
    match year {
        1000..=9999 => Ok(year),
        value => Err(InvalidArgument::Year { value }),
    }
}

/// Enumerate the business weeks belonging to `quarter` of `year`.
///
/// A week belongs to the quarter when at least one of its weekdays falls
/// inside the quarter's months. Weeks are anchored in `year` only: a week
/// whose Monday lies in the previous year is left to that year's Q4.
///
/// # Errors
/// Returns [`InvalidArgument::Year`] for years outside `1000..=9999`.
pub fn weeks_in_quarter(year: i32, quarter: Quarter) -> Result<Vec<BusinessWeek>, InvalidArgument> {
    validate_year(year)?;
    let invalid_year = || InvalidArgument::Year { value: year };
    let first_day = quarter.first_day(year).ok_or_else(invalid_year)?;
    let last_day = quarter.last_day(year).ok_or_else(invalid_year)?;

    let mut cursor = Some(BusinessWeek::containing(first_day)?);
    let mut weeks = Vec::with_capacity(14);
    while let Some(week) = cursor {
        if week.start > last_day {
            break;
        }
        if week.end >= first_day && week.start.year() == year {
            weeks.push(week);
        }
        cursor = week.next();
    }
    Ok(weeks)
}
