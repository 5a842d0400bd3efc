//! Behaviour-driven step definitions driving the top CLI scenarios.

use super::helpers::{Workspace, sample_dataset, write_dataset};
use super::*;
use crate::top::run_top_with;
use camino::Utf8PathBuf;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::RefCell;

struct TopWorld {
    _workspace: Workspace,
    input: Utf8PathBuf,
    stdout: RefCell<Vec<u8>>,
    result: RefCell<Option<Result<(), CliError>>>,
}

impl TopWorld {
    fn new() -> Self {
        let workspace = Workspace::new();
        let input = workspace.path("current_status.json");
        Self {
            _workspace: workspace,
            input,
            stdout: RefCell::new(Vec::new()),
            result: RefCell::new(None),
        }
    }

    fn run(&self, extra: &[String]) {
        let mut argv = vec![
            "oasis".to_owned(),
            "top".to_owned(),
            format!("--{ARG_TOP_INPUT}"),
            self.input.as_str().to_owned(),
        ];
        argv.extend_from_slice(extra);
        let parsed = Cli::try_parse_from(argv).map_err(CliError::from);
        let outcome = parsed.and_then(|cli| match cli.command {
            Command::Top(args) => {
                let mut buffer = self.stdout.borrow_mut();
                run_top_with(args, &mut *buffer)
            }
            Command::Refresh(_) => panic!("expected top command"),
        });
        self.result.replace(Some(outcome));
    }

    fn ranked_lines(&self) -> Vec<String> {
        let borrowed = self.result.borrow();
        borrowed
            .as_ref()
            .expect("result recorded")
            .as_ref()
            .expect("expected success");
        let stdout = String::from_utf8(self.stdout.borrow().clone()).expect("stdout utf-8");
        stdout
            .lines()
            .skip_while(|line| !line.is_empty())
            .skip(1)
            .map(str::to_owned)
            .collect()
    }

    fn error_matches(&self, predicate: impl Fn(&CliError) -> bool) {
        let borrowed = self.result.borrow();
        let error = borrowed
            .as_ref()
            .expect("result recorded")
            .as_ref()
            .expect_err("expected error");
        assert!(predicate(error), "unexpected error: {error:?}");
    }
}

#[fixture]
fn world() -> TopWorld {
    TopWorld::new()
}

#[given("a published dataset")]
fn published_dataset(#[from(world)] world: &TopWorld) {
    write_dataset(&world.input, &sample_dataset());
}

#[given("no published dataset")]
fn no_published_dataset(#[from(world)] world: &TopWorld) {
    let _ = world;
}

#[when("I ask for the top {limit} spots")]
fn ask_top(#[from(world)] world: &TopWorld, limit: usize) {
    world.run(&[format!("--{ARG_TOP_LIMIT}"), limit.to_string()]);
}

#[when("I ask for the top {limit} spots in category {category}")]
fn ask_top_in_category(#[from(world)] world: &TopWorld, limit: usize, category: String) {
    world.run(&[
        format!("--{ARG_TOP_LIMIT}"),
        limit.to_string(),
        format!("--{ARG_TOP_CATEGORY}"),
        category,
    ]);
}

#[then("{count} spots are ranked")]
fn spots_are_ranked(#[from(world)] world: &TopWorld, count: usize) {
    assert_eq!(world.ranked_lines().len(), count);
}

#[then("the coolest ranked spot is {name}")]
fn coolest_spot(#[from(world)] world: &TopWorld, name: String) {
    let lines = world.ranked_lines();
    let first = lines.first().expect("at least one ranked spot");
    assert!(
        first.starts_with(&format!("1. {name} [")),
        "unexpected first line: {first}"
    );
}

#[then("the command fails because the category is unknown")]
fn command_fails_unknown_category(#[from(world)] world: &TopWorld) {
    world.error_matches(|err| matches!(err, CliError::InvalidCategory(_)));
}

#[then("the command fails because the dataset is missing")]
fn command_fails_missing_dataset(#[from(world)] world: &TopWorld) {
    world.error_matches(
        |err| matches!(err, CliError::MissingSourceFile { field, .. } if *field == ARG_TOP_INPUT),
    );
}

macro_rules! register_top_scenario {
    ($fn_name:ident, $scenario_title:literal) => {
        #[scenario(path = "tests/features/top_command.feature", name = $scenario_title)]
        fn $fn_name(#[from(world)] world: TopWorld) {
            let _ = world;
        }
    };
}

register_top_scenario!(top_coolest, "listing the coolest comfortable spots");
register_top_scenario!(top_by_category, "filtering by category");
register_top_scenario!(top_unknown_category, "rejecting an unknown category");
register_top_scenario!(top_missing_dataset, "rejecting a missing dataset");
