use crate::config::{DinoConfig, SimConfig};
use crate::hunger::hunger_rate;
use crate::spawn::random_world_position;
use dinosim_data::{Behavior, Dino, Entity, Plant, Position, WorldState};
use rand::Rng;

/// Largest change to an offspring's vision radius, either direction.
pub const VISION_JITTER: f64 = 2.5;
/// Largest change to an offspring's speed, either direction.
pub const SPEED_JITTER: f64 = 0.125;

pub fn create_plant(position: Position) -> Plant {
    Plant::new(position.x, position.y)
}

pub fn create_dino(name: &str, position: Position, config: &DinoConfig) -> Dino {
    Dino {
        x: position.x,
        y: position.y,
        alive: true,
        name: name.to_string(),
        score: 0,
        speed: config.base_speed,
        angle: 0.0,
        vision_radius: config.base_vision_radius,
        food: config.initial_food,
        hunger_tick: hunger_rate(config.base_speed),
        behavior: Behavior::Roaming,
        roam_target: None,
    }
}

/// Builds the starting world: dinos around the origin, plants scattered at
/// random.
pub fn seed_world(config: &SimConfig, rng: &mut impl Rng) -> WorldState {
    let params = config.world_params();
    let mut entities = Vec::with_capacity(config.world.initial_dinos + config.world.initial_plants);

    for _ in 0..config.world.initial_plants {
        let position = random_world_position(params.world_size, rng);
        entities.push(Entity::Plant(create_plant(position)));
    }

    // Keep the starting herd well inside the bounds.
    let spawn_radius = params.world_size * 0.1;
    for name in config.dino.names.iter().cycle().take(config.world.initial_dinos) {
        let position = random_world_position(spawn_radius, rng);
        entities.push(Entity::Dino(create_dino(name, position, &config.dino)));
    }

    WorldState::new(params, entities)
}

/// Splits a trailing generation number off a dino name.
///
/// Names without a numeric suffix are generation 1.
pub fn split_generation(name: &str) -> (&str, u32) {
    if let Some((base, suffix)) = name.rsplit_once(' ') {
        if let Ok(generation) = suffix.parse::<u32>() {
            return (base, generation);
        }
    }
    (name, 1)
}

pub fn generation_of(name: &str) -> u32 {
    split_generation(name).1
}

/// "Spot" becomes "Spot 2", "Spot 2" becomes "Spot 3".
pub fn offspring_name(parent: &str) -> String {
    let (base, generation) = split_generation(parent);
    format!("{base} {}", generation.saturating_add(1))
}

/// Clones `parent` into a fresh offspring with jittered traits.
pub fn create_offspring(parent: &Dino, food: f64, rng: &mut impl Rng) -> Dino {
    let vision_jitter = (rng.gen::<f64>() - 0.5) * VISION_JITTER * 2.0;
    let speed_jitter = (rng.gen::<f64>() - 0.5) * SPEED_JITTER * 2.0;
    Dino {
        vision_radius: parent.vision_radius + vision_jitter,
        speed: (parent.speed + speed_jitter).max(0.0),
        score: 0,
        food,
        name: offspring_name(&parent.name),
        ..parent.clone()
    }
}
