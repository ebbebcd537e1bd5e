//! Stochastic plant spawning.

use dinosim_data::{Plant, Position};
use rand::Rng;

/// Chance per tick that a plant appears.
pub const DEFAULT_PLANT_SPAWN_CHANCE: f64 = 0.1;

/// A uniformly random point in `[-world_size, world_size)` on both axes.
pub fn random_world_position(world_size: f64, rng: &mut impl Rng) -> Position {
    Position {
        x: (rng.gen::<f64>() - 0.5) * world_size * 2.0,
        y: (rng.gen::<f64>() - 0.5) * world_size * 2.0,
    }
}

/// Rolls once against `chance` and returns at most one new plant.
pub fn spawn_plant(world_size: f64, chance: f64, rng: &mut impl Rng) -> Option<Plant> {
    if rng.gen::<f64>() >= chance {
        return None;
    }
    let position = random_world_position(world_size, rng);
    Some(Plant::new(position.x, position.y))
}
