//! Error types emitted by the Tripweek CLI.
//!
//! Snapshot failures carry the offending path so messages point at the file
//! to fix; engine failures pass through unchanged.

use std::sync::Arc;

use camino::Utf8PathBuf;
use thiserror::Error;
use tripweek_core::{ConfigurationError, PlanningError};
use tripweek_scorer::WeightsError;

/// Errors emitted by the Tripweek CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A required option is missing after configuration merging.
    #[error("missing {field} (set --{field} or {env})")]
    MissingArgument {
        /// Flag name without the leading dashes.
        field: &'static str,
        /// Environment variable that may supply the value.
        env: &'static str,
    },
    /// Opening the snapshot file failed.
    #[error("failed to open snapshot at {path:?}: {source}")]
    OpenSnapshot {
        /// Snapshot path.
        path: Utf8PathBuf,
        /// Underlying IO failure.
        #[source]
        source: std::io::Error,
    },
    /// Snapshot JSON could not be decoded.
    #[error("failed to parse snapshot JSON at {path:?}: {source}")]
    ParseSnapshot {
        /// Snapshot path.
        path: Utf8PathBuf,
        /// Underlying decode failure.
        #[source]
        source: serde_json::Error,
    },
    /// The snapshot's severity table is incomplete or names unknown types.
    #[error("snapshot at {path:?} has an invalid severity table: {source}")]
    InvalidSeverities {
        /// Snapshot path.
        path: Utf8PathBuf,
        /// Underlying configuration failure.
        #[source]
        source: ConfigurationError,
    },
    /// The snapshot's score weights failed validation.
    #[error("snapshot at {path:?} has invalid score weights: {source}")]
    InvalidWeights {
        /// Snapshot path.
        path: Utf8PathBuf,
        /// Underlying validation failure.
        #[source]
        source: WeightsError,
    },
    /// `batchEvents` names an event the snapshot does not contain.
    #[error("snapshot at {path:?} lists unknown batch event {id}")]
    UnknownBatchEvent {
        /// Snapshot path.
        path: Utf8PathBuf,
        /// Identifier that matched no event.
        id: String,
    },
    /// The engine rejected the request or the snapshot contents.
    #[error(transparent)]
    Planning(#[from] PlanningError),
    /// Serialising the command output failed.
    #[error("failed to serialise output: {0}")]
    SerialiseOutput(#[source] serde_json::Error),
    /// Writing the command output failed.
    #[error("failed to write output: {0}")]
    WriteOutput(#[source] std::io::Error),
}
