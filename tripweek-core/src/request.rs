//! Validated input for a suggestion request.

use crate::{InvalidArgument, Quarter, calendar::validate_year};

/// Number of suggestions returned when the caller does not ask otherwise.
pub const DEFAULT_TOP_N: usize = 3;

/// Parameters for ranking the weeks of one quarter for one trip.
///
/// Construction validates every field, so a `SuggestRequest` in hand is
/// always well formed.
///
/// # Examples
/// ```
/// use tripweek_core::SuggestRequest;
///
/// # fn main() -> Result<(), tripweek_core::InvalidArgument> {
/// let request = SuggestRequest::new(2025, 2, " Paris ")?.with_top_n(5)?;
/// assert_eq!(request.location(), "Paris");
/// assert_eq!(request.top_n(), 5);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestRequest {
    year: i32,
    quarter: Quarter,
    location: String,
    top_n: usize,
    exclude: Option<String>,
}

impl SuggestRequest {
    /// Validate and construct a request returning [`DEFAULT_TOP_N`] results.
    ///
    /// # Errors
    /// Returns [`InvalidArgument`] for a malformed year, a quarter index
    /// outside `1..=4`, or a blank location.
    pub fn new(year: i32, quarter: u8, location: &str) -> Result<Self, InvalidArgument> {
        validate_year(year)?;
        let quarter = Quarter::new(quarter)?;
        let trimmed = location.trim();
        if trimmed.is_empty() {
            return Err(InvalidArgument::EmptyLocation);
        }
        Ok(Self {
            year,
            quarter,
            location: trimmed.to_owned(),
            top_n: DEFAULT_TOP_N,
            exclude: None,
        })
    }

    /// Limit the number of suggestions returned.
    ///
    /// # Errors
    /// Returns [`InvalidArgument::TopN`] when `top_n` is zero.
    pub fn with_top_n(mut self, top_n: usize) -> Result<Self, InvalidArgument> {
        if top_n == 0 {
            return Err(InvalidArgument::TopN { value: top_n });
        }
        self.top_n = top_n;
        Ok(self)
    }

    /// Ignore the event with `id` while scoring, e.g. the trip being moved.
    #[must_use]
    pub fn excluding(mut self, id: impl Into<String>) -> Self {
        self.exclude = Some(id.into());
        self
    }

    /// Calendar year to plan in.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Target quarter.
    #[must_use]
    pub const fn quarter(&self) -> Quarter {
        self.quarter
    }

    /// Trimmed destination of the trip.
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Maximum number of suggestions.
    #[must_use]
    pub const fn top_n(&self) -> usize {
        self.top_n
    }

    /// Identifier of the event excluded from scoring, if any.
    #[must_use]
    pub fn exclude(&self) -> Option<&str> {
        self.exclude.as_deref()
    }
}
