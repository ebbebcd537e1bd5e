mod common;

use common::WorldBuilder;
use dinosim_lib::app::{App, StopReason};
use dinosim_lib::model::config::SimConfig;
use dinosim_lib::model::history::SeriesKey;
use dinosim_lib::model::world::World;

fn seeded(seed: u64) -> SimConfig {
    let mut config = SimConfig::default();
    config.world.seed = Some(seed);
    config
}

#[test]
fn test_seeded_world_layout() {
    let world = World::new(seeded(5)).unwrap();
    let state = world.state();

    assert_population!(world, 4);
    assert_plant_count!(world, 20);
    assert_world_consistent!(world);

    let names: Vec<_> = state.dinos().map(|d| d.name.as_str()).collect();
    assert_eq!(names, ["Spot", "Rex", "Tiny", "Chomp"]);
    for dino in state.dinos() {
        assert!(dino.x.abs() <= 10.0 && dino.y.abs() <= 10.0);
        assert_eq!(dino.speed, 0.3);
        assert_eq!(dino.food, 5.0);
        assert_eq!(dino.score, 0);
    }
}

#[test]
fn test_history_samples_every_interval() {
    let mut world = World::new(seeded(8)).unwrap();
    for _ in 0..100 {
        world.update();
    }

    let history = world.history();
    assert_eq!(history.len(), 11);
    let dinos = history.series(SeriesKey::Dinos);
    let ticks: Vec<_> = dinos.iter().map(|&(tick, _)| tick).collect();
    assert_eq!(ticks, (0..=100).step_by(10).collect::<Vec<u64>>());
    assert_eq!(dinos[0].1, 4);

    let latest = history.latest().unwrap();
    assert_eq!(latest.tick, 100);
    assert_eq!(latest.dinos, world.population_count());
    assert_eq!(latest.plants, world.plant_count());
    assert_eq!(history.bounds().max_tick, 100);
    assert!(history.bounds().max_value >= 20);
}

#[test]
fn test_history_capacity_drops_oldest() {
    let mut world = WorldBuilder::new()
        .with_config(|c| {
            c.history_interval = 1;
            c.history_capacity = 5;
        })
        .build();
    for _ in 0..20 {
        world.update();
    }

    let ticks: Vec<_> = world.history().samples().map(|s| s.tick).collect();
    assert_eq!(ticks, [16, 17, 18, 19, 20]);
}

#[test]
fn test_metrics_track_every_tick() {
    let mut world = World::new(seeded(21)).unwrap();
    let mut births = 0;
    let mut deaths = 0;
    for _ in 0..200 {
        let report = world.update();
        births += report.births;
        deaths += report.deaths();
    }

    let metrics = world.metrics();
    assert_eq!(metrics.tick_count(), 200);
    assert_eq!(metrics.births(), births as u64);
    assert_eq!(metrics.deaths(), deaths as u64);
    assert_eq!(metrics.dino_count(), world.population_count() as u64);
    assert_eq!(metrics.plant_count(), world.plant_count() as u64);
}

#[test]
fn test_headless_run_ends_on_extinction() {
    let mut config = seeded(3);
    config.world.initial_plants = 0;
    config.ecosystem.plant_spawn_chance = 0.0;

    let mut app = App::new(config).unwrap().unthrottled();
    let summary = app.run();

    // Five units of food at one unit per ~111 ticks.
    assert_eq!(summary.reason, StopReason::Extinct);
    assert!(summary.ticks > 500 && summary.ticks < 600);
    assert!(app.world.is_extinct());
}
