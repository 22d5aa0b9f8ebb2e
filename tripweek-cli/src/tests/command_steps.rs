//! Behaviour-driven step definitions driving the suggest and plan commands.

use super::helpers::{SAMPLE_SNAPSHOT, write_utf8};
use super::*;
use camino::Utf8PathBuf;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;
use tempfile::TempDir;

#[derive(Debug)]
struct CommandWorld {
    _tmp: TempDir,
    snapshot_path: Utf8PathBuf,
    stdout: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl CommandWorld {
    fn new() -> Self {
        let tmp = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
        let snapshot_path = root.join("snapshot.json");

        Self {
            _tmp: tmp,
            snapshot_path,
            stdout: RefCell::new(Vec::new()),
            result: RefCell::new(None),
        }
    }

    fn invoke(&self, argv: Vec<String>) {
        let parsed = Cli::try_parse_from(argv).map_err(CliError::from);
        let outcome = parsed.and_then(|cli| {
            let mut buffer = self.stdout.borrow_mut();
            match cli.command {
                Command::Suggest(args) => run_suggest(args, &mut *buffer),
                Command::Plan(args) => run_plan(args, &mut *buffer),
            }
        });
        self.result.replace(Some(outcome));
    }

    fn output(&self) -> serde_json::Value {
        let borrowed = self.result.borrow();
        let result = borrowed.as_ref().expect("result recorded");
        result.as_ref().expect("expected success");
        serde_json::from_slice(&self.stdout.borrow()).expect("output should be JSON")
    }

    fn error(&self) -> std::cell::Ref<'_, CliError> {
        std::cell::Ref::map(self.result.borrow(), |recorded| {
            recorded
                .as_ref()
                .expect("result recorded")
                .as_ref()
                .expect_err("expected error")
        })
    }
}

#[fixture]
fn world() -> CommandWorld {
    CommandWorld::new()
}

#[given("a sample planning snapshot exists on disk")]
fn sample_snapshot_exists(#[from(world)] world: &CommandWorld) {
    write_utf8(&world.snapshot_path, SAMPLE_SNAPSHOT.as_bytes());
}

#[given("the planning snapshot contains invalid JSON")]
fn snapshot_contains_invalid_json(#[from(world)] world: &CommandWorld) {
    write_utf8(&world.snapshot_path, b"{ not valid json");
}

#[when("I run the suggest command for {city} in Q{quarter} {year}")]
fn run_suggest_command(
    #[from(world)] world: &CommandWorld,
    city: String,
    quarter: u8,
    year: i32,
) {
    let argv = vec![
        "tripweek".to_owned(),
        "suggest".to_owned(),
        world.snapshot_path.as_str().to_owned(),
        format!("--{ARG_YEAR}"),
        year.to_string(),
        format!("--{ARG_QUARTER}"),
        quarter.to_string(),
        format!("--{ARG_LOCATION}"),
        city,
    ];
    world.invoke(argv);
}

#[when("I run the plan command for {year}")]
fn run_plan_command(#[from(world)] world: &CommandWorld, year: i32) {
    let argv = vec![
        "tripweek".to_owned(),
        "plan".to_owned(),
        world.snapshot_path.as_str().to_owned(),
        format!("--{ARG_YEAR}"),
        year.to_string(),
    ];
    world.invoke(argv);
}

#[when("I run the plan command without a year")]
fn run_plan_command_without_year(#[from(world)] world: &CommandWorld) {
    let argv = vec![
        "tripweek".to_owned(),
        "plan".to_owned(),
        world.snapshot_path.as_str().to_owned(),
    ];
    world.invoke(argv);
}

#[then("the command succeeds and the first suggested week is {week}")]
fn first_suggested_week_is(#[from(world)] world: &CommandWorld, week: String) {
    let output = world.output();
    assert_eq!(output[0]["weekStart"], week.as_str());
}

#[then("the command succeeds and the plan places {count} trips")]
fn plan_places_trips(#[from(world)] world: &CommandWorld, count: usize) {
    let output = world.output();
    let assignments = output["assignments"]
        .as_array()
        .expect("assignments array");
    let placed = assignments
        .iter()
        .filter(|assignment| !assignment["suggestion"].is_null())
        .count();
    assert_eq!(placed, count);
}

#[then("the command fails because the snapshot JSON is invalid")]
fn command_fails_invalid_json(#[from(world)] world: &CommandWorld) {
    match &*world.error() {
        CliError::ParseSnapshot { path, .. } => assert_eq!(*path, world.snapshot_path),
        other => panic!("expected ParseSnapshot, found {other:?}"),
    }
}

#[then("the command fails because the year is missing")]
fn command_fails_missing_year(#[from(world)] world: &CommandWorld) {
    match &*world.error() {
        CliError::MissingArgument { field, env } => {
            assert_eq!(*field, ARG_YEAR);
            assert_eq!(*env, ENV_PLAN_YEAR);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

macro_rules! register_command_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/tripweek_command.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: CommandWorld) {
            let _ = world;
        }
    };
}

register_command_scenario!(suggest_happy_path, "suggesting weeks from a snapshot");
register_command_scenario!(plan_happy_path, "planning a batch from a snapshot");
register_command_scenario!(suggest_invalid_json, "rejecting invalid snapshot JSON");
register_command_scenario!(plan_missing_year, "rejecting a missing year");
