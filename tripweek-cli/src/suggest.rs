//! Suggest command implementation for the Tripweek CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use tripweek_core::{DEFAULT_TOP_N, SuggestRequest, Suggestion};

use crate::snapshot::{LoadedSnapshot, load_snapshot};
use crate::{
    ARG_EXCLUDE, ARG_LOCATION, ARG_QUARTER, ARG_SNAPSHOT, ARG_TOP_N, ARG_YEAR, CliError,
    ENV_SUGGEST_LOCATION, ENV_SUGGEST_QUARTER, ENV_SUGGEST_SNAPSHOT, ENV_SUGGEST_YEAR, write_json,
};

/// CLI arguments for the `suggest` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Rank the business weeks of one quarter for a trip. The \
                 snapshot supplies committed events and constraints; its \
                 `claims` list holds weeks already taken earlier in the \
                 current batch.",
    about = "Suggest weeks for a single trip"
)]
#[ortho_config(prefix = "TRIPWEEK")]
pub(crate) struct SuggestArgs {
    /// Path to a JSON planning snapshot.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) snapshot_path: Option<Utf8PathBuf>,
    /// Four-digit calendar year.
    #[arg(long = ARG_YEAR, value_name = "year")]
    #[serde(default)]
    pub(crate) year: Option<i32>,
    /// Quarter index, 1 to 4.
    #[arg(long = ARG_QUARTER, value_name = "n")]
    #[serde(default)]
    pub(crate) quarter: Option<u8>,
    /// Trip destination.
    #[arg(long = ARG_LOCATION, value_name = "city")]
    #[serde(default)]
    pub(crate) location: Option<String>,
    /// Maximum number of suggestions (default 3).
    #[arg(long = ARG_TOP_N, value_name = "n")]
    #[serde(default)]
    pub(crate) top_n: Option<usize>,
    /// Identifier of an existing trip to ignore while rescheduling it.
    #[arg(long = ARG_EXCLUDE, value_name = "id")]
    #[serde(default)]
    pub(crate) exclude: Option<String>,
}

impl SuggestArgs {
    pub(crate) fn into_config(self) -> Result<SuggestConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        SuggestConfig::try_from(merged)
    }
}

/// Resolved `suggest` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SuggestConfig {
    pub(crate) snapshot_path: Utf8PathBuf,
    pub(crate) year: i32,
    pub(crate) quarter: u8,
    pub(crate) location: String,
    pub(crate) top_n: usize,
    pub(crate) exclude: Option<String>,
}

impl SuggestConfig {
    /// Build the validated engine request.
    pub(crate) fn request(&self) -> Result<SuggestRequest, CliError> {
        let mut request = SuggestRequest::new(self.year, self.quarter, &self.location)
            .and_then(|built| built.with_top_n(self.top_n))
            .map_err(tripweek_core::PlanningError::from)?;
        if let Some(id) = &self.exclude {
            request = request.excluding(id.clone());
        }
        Ok(request)
    }
}

impl TryFrom<SuggestArgs> for SuggestConfig {
    type Error = CliError;

    fn try_from(args: SuggestArgs) -> Result<Self, Self::Error> {
        let snapshot_path = args.snapshot_path.ok_or(CliError::MissingArgument {
            field: ARG_SNAPSHOT,
            env: ENV_SUGGEST_SNAPSHOT,
        })?;
        let year = args.year.ok_or(CliError::MissingArgument {
            field: ARG_YEAR,
            env: ENV_SUGGEST_YEAR,
        })?;
        let quarter = args.quarter.ok_or(CliError::MissingArgument {
            field: ARG_QUARTER,
            env: ENV_SUGGEST_QUARTER,
        })?;
        let location = args.location.ok_or(CliError::MissingArgument {
            field: ARG_LOCATION,
            env: ENV_SUGGEST_LOCATION,
        })?;
        Ok(Self {
            snapshot_path,
            year,
            quarter,
            location,
            top_n: args.top_n.unwrap_or(DEFAULT_TOP_N),
            exclude: args.exclude,
        })
    }
}

pub(crate) fn run_suggest(args: SuggestArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let suggestions = execute_suggest(args)?;
    write_json(writer, &suggestions)
}

fn execute_suggest(args: SuggestArgs) -> Result<Vec<Suggestion>, CliError> {
    let config = args.into_config()?;
    let request = config.request()?;
    let loaded = load_snapshot(&config.snapshot_path)?;
    suggest_from(&loaded, &request)
}

pub(crate) fn suggest_from(
    loaded: &LoadedSnapshot,
    request: &SuggestRequest,
) -> Result<Vec<Suggestion>, CliError> {
    Ok(loaded
        .ranker
        .suggest(request, &loaded.plan, &loaded.claims)?)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<SuggestConfig, CliError> {
    let merged = SuggestArgs::merge_from_layers(layers).map_err(CliError::from)?;
    SuggestConfig::try_from(merged)
}
