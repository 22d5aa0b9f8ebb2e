//! Unit coverage for ranking and batch placement.
#![forbid(unsafe_code)]

use rstest::{fixture, rstest};
use tripweek_core::test_support::{constraint, date, fixed_trip, flexible_trip, week_of};
use tripweek_core::{
    BatchClaims, BusinessWeek, ConstraintKind, PlanSnapshot, Reason, ScoringContext, Severity,
    SeverityTable, SuggestRequest, WeekScore, WeekScorer,
};

use crate::{
    BatchTrip, CalendarScorer, RankerConfig, ScoreWeights, SuggestionRanker, plan_batch, suggest,
};

#[fixture]
fn ranker() -> SuggestionRanker<CalendarScorer> {
    SuggestionRanker::default()
}

fn request(quarter: u8, location: &str) -> SuggestRequest {
    SuggestRequest::new(2025, quarter, location).expect("valid request")
}

#[rstest]
fn empty_calendar_suggests_opening_weeks(ranker: SuggestionRanker<CalendarScorer>) {
    let suggestions = ranker
        .suggest(&request(1, "London"), &PlanSnapshot::default(), &BatchClaims::new())
        .expect("suggestions");
    let starts: Vec<_> = suggestions.iter().map(|s| s.week_start).collect();
    assert_eq!(starts, [date(2025, 1, 6), date(2025, 1, 13), date(2025, 1, 20)]);
    let first = suggestions.first().expect("top suggestion");
    assert_eq!(first.score, 100);
    assert!(first.reasons.is_empty());
}

#[rstest]
fn vacation_week_is_excluded(ranker: SuggestionRanker<CalendarScorer>) {
    let snapshot = PlanSnapshot::default().with_constraint(constraint(
        "c1",
        "Leave",
        ConstraintKind::Vacation,
        date(2025, 1, 6),
        date(2025, 1, 10),
    ));
    let all = request(1, "Paris").with_top_n(20).expect("valid top n");
    let suggestions = ranker
        .suggest(&all, &snapshot, &BatchClaims::new())
        .expect("suggestions");
    assert!(suggestions.iter().all(|s| s.week_start != date(2025, 1, 6)));
    assert_eq!(suggestions.len(), 12);
}

fn lenient_weights() -> ScoreWeights {
    ScoreWeights {
        cutoff: -2000,
        ..ScoreWeights::default()
    }
}

#[rstest]
#[case::new(SuggestionRanker::new(CalendarScorer::new(lenient_weights())))]
#[case::from_weights(SuggestionRanker::from_weights(lenient_weights(), SeverityTable::default()))]
fn cutoff_follows_scorer_weights(#[case] ranker: SuggestionRanker<CalendarScorer>) {
    let snapshot = PlanSnapshot::default().with_constraint(constraint(
        "c1",
        "Leave",
        ConstraintKind::Vacation,
        date(2025, 1, 6),
        date(2025, 1, 10),
    ));
    let all = request(1, "Paris").with_top_n(20).expect("valid top n");
    let suggestions = ranker
        .suggest(&all, &snapshot, &BatchClaims::new())
        .expect("suggestions");
    assert_eq!(suggestions.len(), 13);
    let blocked = suggestions
        .iter()
        .find(|s| s.week_start == date(2025, 1, 6))
        .expect("lenient cutoff keeps the vacation week");
    assert_eq!(blocked.score, -900);
}

#[rstest]
fn friday_blackout_blocks_whole_week() {
    let constraints = [constraint(
        "c1",
        "Release freeze",
        ConstraintKind::Blackout,
        date(2025, 6, 13),
        date(2025, 6, 13),
    )];
    let claims = BatchClaims::new();
    let context = ScoringContext::new("Paris", &[], &constraints, &claims);
    let scored = CalendarScorer::default().score(&week_of(2025, 6, 9), &context);
    assert_eq!(scored.score, -900);
    assert_eq!(
        scored.reasons,
        [Reason::HardConstraint {
            title: "Release freeze".into()
        }]
    );
}

#[rstest]
fn consolidating_week_ranks_first(ranker: SuggestionRanker<CalendarScorer>) {
    let snapshot = PlanSnapshot::default().with_event(fixed_trip(
        "e1",
        "Paris Conference",
        "Paris",
        date(2025, 5, 13),
        date(2025, 5, 15),
    ));
    let suggestions = ranker
        .suggest(&request(2, "paris"), &snapshot, &BatchClaims::new())
        .expect("suggestions");
    let top = suggestions.first().expect("top suggestion");
    assert_eq!(top.week_start, date(2025, 5, 12));
    assert_eq!(top.score, 600);
    assert_eq!(top.reason_texts(), ["consolidates with Paris Conference"]);
}

#[rstest]
fn conflicting_week_is_dropped(ranker: SuggestionRanker<CalendarScorer>) {
    let snapshot = PlanSnapshot::default().with_event(fixed_trip(
        "e1",
        "Paris Conference",
        "Paris",
        date(2025, 5, 13),
        date(2025, 5, 15),
    ));
    let all = request(2, "Tokyo").with_top_n(20).expect("valid top n");
    let suggestions = ranker
        .suggest(&all, &snapshot, &BatchClaims::new())
        .expect("suggestions");
    assert!(suggestions.iter().all(|s| s.week_start != date(2025, 5, 12)));
}

#[rstest]
fn claimed_week_scores_as_blocked_and_is_skipped(ranker: SuggestionRanker<CalendarScorer>) {
    let claimed = week_of(2025, 3, 31);
    let claims: BatchClaims = std::iter::once(claimed).collect();
    let context = ScoringContext::new("Berlin", &[], &[], &claims);
    assert_eq!(CalendarScorer::default().score(&claimed, &context).score, -900);

    let suggestions = ranker
        .suggest(&request(2, "Berlin"), &PlanSnapshot::default(), &claims)
        .expect("suggestions");
    assert_eq!(
        suggestions.first().map(|s| s.week_start),
        Some(date(2025, 4, 7))
    );
}

#[rstest]
fn claimed_week_is_skipped_even_when_it_would_consolidate(
    ranker: SuggestionRanker<CalendarScorer>,
) {
    let snapshot =
        PlanSnapshot::default().with_event(flexible_trip("e1", "Expo", "Oslo", date(2025, 4, 7)));
    let claims: BatchClaims = std::iter::once(week_of(2025, 4, 7)).collect();
    let suggestions = ranker
        .suggest(&request(2, "Oslo"), &snapshot, &claims)
        .expect("suggestions");
    assert!(suggestions.iter().all(|s| s.week_start != date(2025, 4, 7)));
}

#[rstest]
fn soft_penalties_demote_without_excluding(ranker: SuggestionRanker<CalendarScorer>) {
    let snapshot = PlanSnapshot::default().with_constraint(constraint(
        "c1",
        "Quiet period",
        ConstraintKind::Preference,
        date(2025, 7, 1),
        date(2025, 7, 1),
    ));
    let all = request(3, "Rome").with_top_n(20).expect("valid top n");
    let suggestions = ranker
        .suggest(&all, &snapshot, &BatchClaims::new())
        .expect("suggestions");
    let last = suggestions.last().expect("some suggestions");
    assert_eq!(last.week_start, date(2025, 6, 30));
    assert_eq!(last.score, 80);
    assert_eq!(suggestions.first().map(|s| s.week_start), Some(date(2025, 7, 7)));
}

#[rstest]
fn fully_blocked_quarter_is_empty_not_an_error(ranker: SuggestionRanker<CalendarScorer>) {
    let snapshot = PlanSnapshot::default().with_constraint(constraint(
        "c1",
        "Sabbatical",
        ConstraintKind::Vacation,
        date(2025, 9, 1),
        date(2026, 1, 9),
    ));
    let suggestions = ranker
        .suggest(&request(4, "Lima"), &snapshot, &BatchClaims::new())
        .expect("suggestions");
    assert!(suggestions.is_empty());
}

#[rstest]
fn excluded_trip_is_ignored_when_rescheduling(ranker: SuggestionRanker<CalendarScorer>) {
    let snapshot = PlanSnapshot::default()
        .with_event(flexible_trip("moving", "Visit", "Seoul", date(2025, 1, 6)));
    let rescheduling = request(1, "Lisbon").excluding("moving");
    let suggestions = ranker
        .suggest(&rescheduling, &snapshot, &BatchClaims::new())
        .expect("suggestions");
    assert_eq!(suggestions.first().map(|s| s.week_start), Some(date(2025, 1, 6)));
}

#[rstest]
fn custom_severities_reclassify_constraints() {
    let severities = SeverityTable::from_entries([
        ("vacation", Severity::Hard),
        ("holiday", Severity::Hard),
        ("blackout", Severity::Hard),
        ("business-soft", Severity::Soft),
        ("preference", Severity::Hard),
    ])
    .expect("valid table");
    let ranker = SuggestionRanker::from_weights(ScoreWeights::default(), severities);
    let snapshot = PlanSnapshot::default().with_constraint(constraint(
        "c1",
        "No travel",
        ConstraintKind::Preference,
        date(2025, 1, 6),
        date(2025, 1, 6),
    ));
    let all = request(1, "Paris").with_top_n(20).expect("valid top n");
    let suggestions = ranker
        .suggest(&all, &snapshot, &BatchClaims::new())
        .expect("suggestions");
    assert!(suggestions.iter().all(|s| s.week_start != date(2025, 1, 6)));
}

/// Scorer giving every week the same score, to exercise tie ordering.
struct FlatScorer;

impl WeekScorer for FlatScorer {
    fn score(&self, _week: &BusinessWeek, _context: &ScoringContext<'_>) -> WeekScore {
        WeekScore::new(7)
    }
}

#[rstest]
fn ties_keep_chronological_order() {
    let ranker = SuggestionRanker::with_config(FlatScorer, RankerConfig::default());
    let all = request(3, "Paris").with_top_n(20).expect("valid top n");
    let suggestions = ranker
        .suggest(&all, &PlanSnapshot::default(), &BatchClaims::new())
        .expect("suggestions");
    assert!(
        suggestions
            .windows(2)
            .all(|pair| matches!(pair, [left, right] if left.week_start < right.week_start))
    );
}

/// Flat scorer that only accepts weeks scoring above its own score.
struct StrictScorer;

impl WeekScorer for StrictScorer {
    fn score(&self, _week: &BusinessWeek, _context: &ScoringContext<'_>) -> WeekScore {
        WeekScore::new(7)
    }

    fn cutoff(&self) -> i64 {
        7
    }
}

#[rstest]
fn scorer_cutoff_overrides_default() {
    let claims = BatchClaims::new();
    let flat = SuggestionRanker::new(FlatScorer)
        .suggest(&request(3, "Paris"), &PlanSnapshot::default(), &claims)
        .expect("suggestions");
    assert_eq!(flat.len(), 3);
    let strict = SuggestionRanker::new(StrictScorer)
        .suggest(&request(3, "Paris"), &PlanSnapshot::default(), &claims)
        .expect("suggestions");
    assert!(strict.is_empty());
}

#[rstest]
fn batch_places_trips_on_distinct_weeks() {
    let trips = [
        BatchTrip::new("Paris visit", "Paris", 2),
        BatchTrip::new("Berlin visit", "Berlin", 2),
        BatchTrip::new("Rome visit", "Rome", 2),
    ];
    let claims = BatchClaims::new();
    let plan = plan_batch(2025, &trips, &PlanSnapshot::default(), &claims).expect("plan");
    let weeks: Vec<_> = plan
        .assignments
        .iter()
        .filter_map(|a| a.suggestion.as_ref().map(|s| s.week_start))
        .collect();
    assert_eq!(weeks, [date(2025, 3, 31), date(2025, 4, 7), date(2025, 4, 14)]);
    assert_eq!(plan.claims.len(), 3);
    assert!(claims.is_empty());
}

#[rstest]
fn batch_records_unplaced_trips_and_continues() {
    let snapshot = PlanSnapshot::default().with_constraint(constraint(
        "c1",
        "Parental leave",
        ConstraintKind::Vacation,
        date(2025, 1, 1),
        date(2025, 3, 31),
    ));
    let trips = [
        BatchTrip::new("Winter visit", "Oslo", 1),
        BatchTrip::new("Spring visit", "Oslo", 2),
    ];
    let plan = plan_batch(2025, &trips, &snapshot, &BatchClaims::new()).expect("plan");
    assert_eq!(plan.unplaced().count(), 1);
    assert_eq!(plan.unplaced().map(|a| a.title.as_str()).next(), Some("Winter visit"));
    assert_eq!(
        plan.assignments
            .get(1)
            .and_then(|a| a.suggestion.as_ref())
            .map(|s| s.week_start),
        Some(date(2025, 4, 7))
    );
}

#[rstest]
fn batch_rejects_invalid_quarter() {
    let trips = [BatchTrip::new("Visit", "Paris", 5)];
    let result = plan_batch(2025, &trips, &PlanSnapshot::default(), &BatchClaims::new());
    assert!(result.is_err());
}

#[rstest]
fn free_function_matches_default_ranker(ranker: SuggestionRanker<CalendarScorer>) {
    let snapshot = PlanSnapshot::default();
    let claims = BatchClaims::new();
    assert_eq!(
        suggest(&request(2, "Paris"), &snapshot, &claims).expect("suggestions"),
        ranker
            .suggest(&request(2, "Paris"), &snapshot, &claims)
            .expect("suggestions")
    );
}
