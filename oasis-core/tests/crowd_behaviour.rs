//! Behavioural tests for crowd estimation.

use chrono::NaiveDateTime;
use oasis_core::{Category, CrowdLevel, estimate_crowd};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::Cell;

#[derive(Debug, Default)]
struct CrowdWorld {
    category: Cell<Option<Category>>,
    ambient: Cell<f64>,
    moment: Cell<Option<NaiveDateTime>>,
    estimate: Cell<Option<CrowdLevel>>,
}

#[fixture]
fn world() -> CrowdWorld {
    CrowdWorld::default()
}

#[given("a {category} location")]
fn given_category(world: &CrowdWorld, category: Category) {
    world.category.set(Some(category));
}

#[given("an ambient temperature of {ambient} degrees")]
fn given_ambient(world: &CrowdWorld, ambient: f64) {
    world.ambient.set(ambient);
}

#[given("the local time {moment}")]
fn given_moment(world: &CrowdWorld, moment: NaiveDateTime) {
    world.moment.set(Some(moment));
}

#[when("the crowd level is estimated")]
fn when_estimated(world: &CrowdWorld) {
    let category = world.category.get().expect("category should be set");
    let moment = world.moment.get().expect("moment should be set");
    world
        .estimate
        .set(Some(estimate_crowd(moment, category, world.ambient.get())));
}

#[then("the estimate is {expected}")]
fn then_estimate(world: &CrowdWorld, expected: CrowdLevel) {
    assert_eq!(world.estimate.get(), Some(expected));
}

#[scenario(path = "tests/features/crowd.feature", index = 0)]
fn heatwave_cultural_site(world: CrowdWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/crowd.feature", index = 1)]
fn quiet_worship_morning(world: CrowdWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/crowd.feature", index = 2)]
fn weekend_park(world: CrowdWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/crowd.feature", index = 3)]
fn weekday_park(world: CrowdWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/crowd.feature", index = 4)]
fn heat_threshold_is_strict(world: CrowdWorld) {
    let _ = world;
}
