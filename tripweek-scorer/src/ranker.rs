//! Rank the weeks of a quarter for one trip.

use std::cmp::Ordering;

use tripweek_core::{
    BatchClaims, PlanSource, PlanningError, ScoringContext, SeverityTable, SuggestRequest,
    Suggestion, WeekScorer, weeks_in_quarter,
};

use crate::{CalendarScorer, ScoreWeights};

/// Configuration for [`SuggestionRanker`].
///
/// The viability cutoff comes from the scorer; see [`WeekScorer::cutoff`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RankerConfig {
    /// Maps constraint kinds to hard or soft.
    pub severities: SeverityTable,
}

/// Enumerates, scores, filters, and orders candidate weeks.
///
/// The ranker is generic over the [`WeekScorer`], so alternative scoring
/// rules plug in without touching enumeration or ordering.
///
/// # Examples
/// ```
/// use tripweek_core::{BatchClaims, PlanSnapshot, SuggestRequest};
/// use tripweek_scorer::SuggestionRanker;
///
/// # fn main() -> Result<(), tripweek_core::PlanningError> {
/// let ranker = SuggestionRanker::default();
/// let request = SuggestRequest::new(2025, 1, "London")?;
/// let suggestions = ranker.suggest(&request, &PlanSnapshot::default(), &BatchClaims::new())?;
/// assert_eq!(suggestions.len(), 3);
/// assert!(suggestions.iter().all(|s| s.score == 100));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct SuggestionRanker<C>
where
    C: WeekScorer,
{
    scorer: C,
    config: RankerConfig,
}

impl<C> SuggestionRanker<C>
where
    C: WeekScorer,
{
    /// Construct a ranker using default configuration.
    #[must_use]
    pub fn new(scorer: C) -> Self {
        Self::with_config(scorer, RankerConfig::default())
    }

    /// Construct a ranker with explicit configuration.
    #[must_use]
    pub const fn with_config(scorer: C, config: RankerConfig) -> Self {
        Self { scorer, config }
    }

    /// Return the best weeks of the requested quarter, best first.
    ///
    /// Weeks scoring at or below the scorer's cutoff are dropped. Weeks
    /// already in `claims` are never returned, whatever they score.
    /// Ties keep chronological order. Fewer than `top_n` results, including
    /// none, is a normal outcome.
    ///
    /// # Errors
    /// Returns [`PlanningError::InvalidArgument`] when the quarter cannot be
    /// enumerated.
    pub fn suggest<P>(
        &self,
        request: &SuggestRequest,
        source: &P,
        claims: &BatchClaims,
    ) -> Result<Vec<Suggestion>, PlanningError>
    where
        P: PlanSource + ?Sized,
    {
        let weeks = weeks_in_quarter(request.year(), request.quarter())?;
        let mut context = ScoringContext::new(
            request.location(),
            source.events(),
            source.constraints(),
            claims,
        )
        .with_severities(self.config.severities);
        if let Some(id) = request.exclude() {
            context = context.excluding(id);
        }

        let candidates = weeks.len();
        let cutoff = self.scorer.cutoff();
        let mut suggestions: Vec<Suggestion> = weeks
            .iter()
            .filter(|week| !claims.contains(week))
            .map(|week| Suggestion::new(week.start(), self.scorer.score(week, &context)))
            .filter(|suggestion| suggestion.score > cutoff)
            .collect();
        suggestions.sort_by(rank_order);
        suggestions.truncate(request.top_n());

        log::debug!(
            "{} {} for {}: {} of {candidates} weeks viable",
            request.year(),
            request.quarter(),
            request.location(),
            suggestions.len(),
        );
        Ok(suggestions)
    }
}

impl SuggestionRanker<CalendarScorer> {
    /// Construct a calendar ranker from `weights` and a severity table.
    #[must_use]
    pub const fn from_weights(weights: ScoreWeights, severities: SeverityTable) -> Self {
        Self::with_config(CalendarScorer::new(weights), RankerConfig { severities })
    }
}

impl Default for SuggestionRanker<CalendarScorer> {
    fn default() -> Self {
        Self::new(CalendarScorer::default())
    }
}

/// Higher score first, then earlier week.
fn rank_order(left: &Suggestion, right: &Suggestion) -> Ordering {
    right
        .score
        .cmp(&left.score)
        .then_with(|| left.week_start.cmp(&right.week_start))
}

/// Rank weeks with the default calendar scorer and severity table.
///
/// # Errors
/// Returns [`PlanningError::InvalidArgument`] when the quarter cannot be
/// enumerated.
pub fn suggest<P>(
    request: &SuggestRequest,
    source: &P,
    claims: &BatchClaims,
) -> Result<Vec<Suggestion>, PlanningError>
where
    P: PlanSource + ?Sized,
{
    SuggestionRanker::default().suggest(request, source, claims)
}
