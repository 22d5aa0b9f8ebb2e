//! Loading planning snapshots from disk.

use std::collections::BTreeMap;
use std::io::BufReader;

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8};
use serde::Deserialize;
use tripweek_core::{
    BatchClaims, PlanRecord, PlanSnapshot, PlanSource, PlanningError, Severity, SeverityTable,
};
use tripweek_scorer::{BatchTrip, CalendarScorer, ScoreWeights, SuggestionRanker};

use crate::CliError;

/// On-disk shape of a planning snapshot.
///
/// Only `events` and `constraints` describe the committed calendar; the
/// remaining keys are optional session state and configuration.
/// `batchEvents` lists events already committed in the current batch; every
/// week they occupy is added to `claims`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(crate) struct SnapshotFile {
    #[serde(flatten)]
    pub(crate) plan: PlanRecord,
    pub(crate) claims: BatchClaims,
    #[serde(rename = "batchEvents")]
    pub(crate) batch_events: Vec<String>,
    pub(crate) trips: Vec<BatchTrip>,
    pub(crate) severities: Option<BTreeMap<String, Severity>>,
    pub(crate) weights: Option<ScoreWeights>,
}

/// A snapshot validated into engine types.
#[derive(Debug)]
pub(crate) struct LoadedSnapshot {
    pub(crate) plan: PlanSnapshot,
    pub(crate) claims: BatchClaims,
    pub(crate) trips: Vec<BatchTrip>,
    pub(crate) ranker: SuggestionRanker<CalendarScorer>,
}

/// Read and validate the snapshot at `path`.
pub(crate) fn load_snapshot(path: &Utf8Path) -> Result<LoadedSnapshot, CliError> {
    let file = fs_utf8::File::open_ambient(path, ambient_authority()).map_err(|source| {
        CliError::OpenSnapshot {
            path: path.to_path_buf(),
            source,
        }
    })?;
    let raw: SnapshotFile =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| CliError::ParseSnapshot {
            path: path.to_path_buf(),
            source,
        })?;
    resolve_snapshot(path, raw)
}

/// Validate a decoded snapshot, attributing failures to `path`.
pub(crate) fn resolve_snapshot(
    path: &Utf8Path,
    raw: SnapshotFile,
) -> Result<LoadedSnapshot, CliError> {
    let severities = match raw.severities {
        Some(entries) => SeverityTable::from_entries(entries).map_err(|source| {
            CliError::InvalidSeverities {
                path: path.to_path_buf(),
                source,
            }
        })?,
        None => SeverityTable::default(),
    };
    let weights = raw
        .weights
        .unwrap_or_default()
        .validate()
        .map_err(|source| CliError::InvalidWeights {
            path: path.to_path_buf(),
            source,
        })?;
    let plan = PlanSnapshot::try_from(raw.plan)?;
    let mut claims = raw.claims;
    for id in &raw.batch_events {
        let event = plan
            .events()
            .iter()
            .find(|event| event.id() == id)
            .ok_or_else(|| CliError::UnknownBatchEvent {
                path: path.to_path_buf(),
                id: id.clone(),
            })?;
        claims.claim_event(event).map_err(PlanningError::from)?;
    }
    log::debug!(
        "loaded {path}: {} trips queued, {} weeks claimed",
        raw.trips.len(),
        claims.len()
    );
    Ok(LoadedSnapshot {
        plan,
        claims,
        trips: raw.trips,
        ranker: SuggestionRanker::from_weights(weights, severities),
    })
}
