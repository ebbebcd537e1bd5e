/// Asserts that the number of dinos matches the expected value.
#[macro_export]
macro_rules! assert_population {
    ($world:expr, $count:expr) => {
        assert_eq!(
            $world.population_count(),
            $count,
            "Population count mismatch"
        );
    };
}

/// Asserts that the number of plants matches the expected value.
#[macro_export]
macro_rules! assert_plant_count {
    ($world:expr, $count:expr) => {
        assert_eq!($world.plant_count(), $count, "Plant count mismatch");
    };
}

/// Asserts that every entity left in the world is alive and inside the bounds.
#[macro_export]
macro_rules! assert_world_consistent {
    ($world:expr) => {
        let state = $world.state();
        for entity in &state.entities {
            assert!(entity.is_alive(), "Dead entity left in world: {:?}", entity);
            let pos = entity.position();
            assert!(
                state.params.contains(pos.x, pos.y),
                "Entity outside world bounds: {:?}",
                entity
            );
        }
    };
}
