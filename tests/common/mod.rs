pub mod macros;

use dinosim_lib::model::config::{DinoConfig, SimConfig};
use dinosim_lib::model::lifecycle;
use dinosim_lib::model::state::{Behavior, Dino, Entity, Plant, Position, WorldState};
use dinosim_lib::model::world::World;

#[allow(dead_code)]
pub struct WorldBuilder {
    config: SimConfig,
    entities: Vec<Entity>,
}

#[allow(dead_code)]
impl WorldBuilder {
    /// An empty world with plant growth switched off.
    pub fn new() -> Self {
        let mut config = SimConfig::default();
        config.world.initial_dinos = 0;
        config.world.initial_plants = 0;
        config.world.seed = Some(0);
        config.ecosystem.plant_spawn_chance = 0.0;
        Self {
            config,
            entities: Vec::new(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.world.seed = Some(seed);
        self
    }

    pub fn with_config<F>(mut self, modifier: F) -> Self
    where
        F: FnOnce(&mut SimConfig),
    {
        modifier(&mut self.config);
        self
    }

    pub fn with_entity(mut self, entity: impl Into<Entity>) -> Self {
        self.entities.push(entity.into());
        self
    }

    pub fn with_plant(self, x: f64, y: f64) -> Self {
        self.with_entity(Plant::new(x, y))
    }

    pub fn build(self) -> World {
        let state = WorldState::new(self.config.world_params(), self.entities);
        World::from_state(self.config, state).expect("Failed to create world in test builder")
    }
}

#[allow(dead_code)]
pub struct DinoBuilder {
    dino: Dino,
}

#[allow(dead_code)]
impl DinoBuilder {
    /// A dino that moves one unit per tick and will not get hungry during a
    /// short test.
    pub fn new(name: &str) -> Self {
        let mut dino = lifecycle::create_dino(name, Position::default(), &DinoConfig::default());
        dino.speed = 1.0;
        dino.hunger_tick = 1000.0;
        Self { dino }
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.dino.x = x;
        self.dino.y = y;
        self
    }

    pub fn speed(mut self, speed: f64) -> Self {
        self.dino.speed = speed;
        self
    }

    pub fn vision(mut self, radius: f64) -> Self {
        self.dino.vision_radius = radius;
        self
    }

    pub fn food(mut self, food: f64) -> Self {
        self.dino.food = food;
        self
    }

    pub fn hunger_tick(mut self, ticks: f64) -> Self {
        self.dino.hunger_tick = ticks;
        self
    }

    pub fn behavior(mut self, behavior: Behavior) -> Self {
        self.dino.behavior = behavior;
        self
    }

    pub fn build(self) -> Dino {
        self.dino
    }
}

#[allow(dead_code)]
pub fn find_dino<'a>(world: &'a World, name: &str) -> Option<&'a Dino> {
    world.state().dinos().find(|d| d.name == name)
}
