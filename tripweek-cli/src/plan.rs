//! Plan command implementation for the Tripweek CLI.

use std::io::Write;

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use tripweek_scorer::BatchPlan;

use crate::snapshot::{LoadedSnapshot, load_snapshot};
use crate::{ARG_SNAPSHOT, ARG_YEAR, CliError, ENV_PLAN_SNAPSHOT, ENV_PLAN_YEAR, write_json};

/// CLI arguments for the `plan` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Place each trip listed under the snapshot's `trips` key on \
                 its best free week, in order, so that no two trips share a \
                 week. Trips without a viable week are reported as unplaced.",
    about = "Plan a batch of flexible trips"
)]
#[ortho_config(prefix = "TRIPWEEK")]
pub(crate) struct PlanArgs {
    /// Path to a JSON planning snapshot.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) snapshot_path: Option<Utf8PathBuf>,
    /// Four-digit calendar year.
    #[arg(long = ARG_YEAR, value_name = "year")]
    #[serde(default)]
    pub(crate) year: Option<i32>,
}

impl PlanArgs {
    pub(crate) fn into_config(self) -> Result<PlanConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        PlanConfig::try_from(merged)
    }
}

/// Resolved `plan` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PlanConfig {
    pub(crate) snapshot_path: Utf8PathBuf,
    pub(crate) year: i32,
}

impl TryFrom<PlanArgs> for PlanConfig {
    type Error = CliError;

    fn try_from(args: PlanArgs) -> Result<Self, Self::Error> {
        let snapshot_path = args.snapshot_path.ok_or(CliError::MissingArgument {
            field: ARG_SNAPSHOT,
            env: ENV_PLAN_SNAPSHOT,
        })?;
        let year = args.year.ok_or(CliError::MissingArgument {
            field: ARG_YEAR,
            env: ENV_PLAN_YEAR,
        })?;
        Ok(Self {
            snapshot_path,
            year,
        })
    }
}

pub(crate) fn run_plan(args: PlanArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let loaded = load_snapshot(&config.snapshot_path)?;
    let plan = plan_from(&loaded, config.year)?;
    write_json(writer, &plan)
}

pub(crate) fn plan_from(loaded: &LoadedSnapshot, year: i32) -> Result<BatchPlan, CliError> {
    let plan = loaded
        .ranker
        .plan_batch(year, &loaded.trips, &loaded.plan, &loaded.claims)?;
    let unplaced = plan.unplaced().count();
    if unplaced > 0 {
        log::warn!("{unplaced} of {} trips could not be placed", plan.assignments.len());
    }
    Ok(plan)
}
