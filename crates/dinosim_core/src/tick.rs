//! One simulation step.
//!
//! A tick runs in two phases. The first mutates entities in place: a plant
//! may sprout, then every dino burns hunger and runs its state machine, in
//! collection order. Plants eaten during this phase are marked dead at once
//! and are invisible to dinos processed later in the same tick. The second
//! phase is structural: dead entities are dropped and newborns that pass the
//! same bounds and food checks are appended.

use crate::{behavior, hunger, spawn, targeting};
use dinosim_data::{Dino, Entity, EntityKind, WorldParams, WorldState};
use rand::Rng;

/// What happened during a tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    pub plants_spawned: usize,
    pub plants_eaten: usize,
    pub births: usize,
    pub starved: usize,
    pub out_of_bounds: usize,
    /// Dinos whose update was aborted by an error.
    pub aborted: usize,
    /// Dinos skipped because their behavior had no handler. Sensing
    /// reclassifies every dino that is not spawning, so only a direct
    /// [`behavior::dispatch`] can produce one; a tick reports zero.
    pub unclassified: usize,
}

impl TickReport {
    #[must_use]
    pub const fn deaths(&self) -> usize {
        self.starved + self.out_of_bounds
    }
}

/// Advances `state` by one step.
pub fn tick(state: &mut WorldState, plant_spawn_chance: f64, rng: &mut impl Rng) -> TickReport {
    let params = state.params;
    let mut report = TickReport::default();

    if let Some(plant) = spawn::spawn_plant(params.world_size, plant_spawn_chance, rng) {
        state.entities.push(Entity::Plant(plant));
        report.plants_spawned += 1;
    }

    let (dino_indices, plant_indices) = partition(&state.entities);
    let mut newborns = Vec::new();

    for &idx in &dino_indices {
        let nearest = {
            let entities = &state.entities;
            let from = entities[idx].position();
            let live_plants = plant_indices.iter().filter_map(|&p| match &entities[p] {
                Entity::Plant(plant) if plant.alive => Some((p, plant.position())),
                _ => None,
            });
            targeting::closest(from, live_plants)
        };

        let Some(dino) = state.entities[idx].as_dino_mut() else {
            continue;
        };
        hunger::apply_hunger(dino);

        match behavior::update_dino(dino, nearest, &params, rng) {
            Ok(outcome) => {
                if let Some(child) = outcome.offspring {
                    newborns.push(Entity::Dino(child));
                }
                if outcome.unclassified {
                    report.unclassified += 1;
                }
                if let Some(plant_idx) = outcome.eaten {
                    state.entities[plant_idx].kill();
                    report.plants_eaten += 1;
                }
            }
            Err(err) => {
                tracing::error!(error = %err, "Dino update aborted");
                report.aborted += 1;
            }
        }
    }

    for &idx in &dino_indices {
        if let Some(dino) = state.entities[idx].as_dino_mut() {
            cull(dino, &params, &mut report);
        }
    }

    report.births = newborns.len();
    for child in &mut newborns {
        if let Entity::Dino(dino) = child {
            cull(dino, &params, &mut report);
        }
    }
    state.entities.retain(Entity::is_alive);
    state
        .entities
        .extend(newborns.into_iter().filter(Entity::is_alive));

    report
}

/// Marks a living dino dead when it has left the world or run out of food.
/// Leaving the world is checked first.
fn cull(dino: &mut Dino, params: &WorldParams, report: &mut TickReport) {
    if !dino.alive {
        return;
    }
    if !params.contains(dino.x, dino.y) {
        dino.alive = false;
        report.out_of_bounds += 1;
        tracing::debug!(name = %dino.name, x = dino.x, y = dino.y, "Dino left the world");
    } else if dino.food <= 0.0 {
        dino.alive = false;
        report.starved += 1;
        tracing::debug!(name = %dino.name, "Dino starved");
    }
}

/// Splits entity indices by kind, preserving collection order.
fn partition(entities: &[Entity]) -> (Vec<usize>, Vec<usize>) {
    let mut dinos = Vec::new();
    let mut plants = Vec::new();
    for (idx, entity) in entities.iter().enumerate() {
        match entity.kind() {
            EntityKind::Dino => dinos.push(idx),
            EntityKind::Plant => plants.push(idx),
        }
    }
    (dinos, plants)
}
