use super::entity::{Dino, Entity, EntityKind, Plant};
use serde::{Deserialize, Serialize};

/// Rules that stay fixed for the duration of a tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorldParams {
    /// Half-extent of the square world centred on the origin.
    pub world_size: f64,
    /// Food a dino must hold before it reproduces.
    pub food_required_to_spawn: f64,
}

impl Default for WorldParams {
    fn default() -> Self {
        Self {
            world_size: 100.0,
            food_required_to_spawn: 10.0,
        }
    }
}

impl WorldParams {
    /// Whether `(x, y)` lies strictly inside the world bounds.
    #[must_use]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x.abs() < self.world_size && y.abs() < self.world_size
    }
}

/// The value a host hands to the simulation each tick.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WorldState {
    #[serde(flatten)]
    pub params: WorldParams,
    pub entities: Vec<Entity>,
}

impl WorldState {
    #[must_use]
    pub const fn new(params: WorldParams, entities: Vec<Entity>) -> Self {
        Self { params, entities }
    }

    pub fn dinos(&self) -> impl Iterator<Item = &Dino> {
        self.entities.iter().filter_map(Entity::as_dino)
    }

    pub fn plants(&self) -> impl Iterator<Item = &Plant> {
        self.entities.iter().filter_map(Entity::as_plant)
    }

    #[must_use]
    pub fn count(&self, kind: EntityKind) -> usize {
        self.entities.iter().filter(|e| e.kind() == kind).count()
    }

    #[must_use]
    pub fn dino_count(&self) -> usize {
        self.count(EntityKind::Dino)
    }

    #[must_use]
    pub fn plant_count(&self) -> usize {
        self.count(EntityKind::Plant)
    }
}
