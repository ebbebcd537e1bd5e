//! Per-dino behavior state machine.
//!
//! Each tick a dino first re-reads its surroundings ([`sense`]) and then acts
//! on its current state ([`dispatch`]). A dino that is `Spawning` skips the
//! sensing step so the spawn always happens on the tick after the meal that
//! triggered it.

use crate::error::Result;
use crate::lifecycle::create_offspring;
use crate::math::distance_and_angle;
use crate::motion::move_toward;
use crate::spawn::random_world_position;
use crate::targeting::Target;
use dinosim_data::{Behavior, Dino, WorldParams};
use rand::Rng;

/// A dino this close to its target has reached it.
pub const ARRIVAL_DISTANCE: f64 = 1.0;
/// Fraction of the spawn threshold handed from parent to offspring.
pub const SPAWN_FOOD_SHARE: f64 = 0.5;

/// Side effects of one dino's update that the tick applies to the world.
#[derive(Debug, Clone, PartialEq)]
pub struct DinoOutcome<K> {
    /// Plant eaten this tick.
    pub eaten: Option<K>,
    /// Newborn waiting to join the world at the end of the tick.
    pub offspring: Option<Dino>,
    /// The dino's behavior had no handler and nothing was done.
    pub unclassified: bool,
}

impl<K> Default for DinoOutcome<K> {
    fn default() -> Self {
        Self {
            eaten: None,
            offspring: None,
            unclassified: false,
        }
    }
}

/// Picks the dino's state from what it can see.
///
/// Food inside the vision radius wins over roaming; a spawning dino keeps its
/// state.
pub fn sense<K>(dino: &mut Dino, nearest: Option<&Target<K>>) {
    if dino.behavior == Behavior::Spawning {
        return;
    }
    match nearest {
        Some(plant) if plant.heading.distance < dino.vision_radius => {
            dino.roam_target = None;
            dino.behavior = Behavior::FoodGetting;
        }
        _ => dino.behavior = Behavior::Roaming,
    }
}

/// Executes the action for the dino's current state.
pub fn dispatch<K: Copy>(
    dino: &mut Dino,
    nearest: Option<Target<K>>,
    params: &WorldParams,
    rng: &mut impl Rng,
) -> Result<DinoOutcome<K>> {
    let mut outcome = DinoOutcome::default();
    match dino.behavior {
        Behavior::Roaming => roam(dino, params.world_size, rng)?,
        Behavior::FoodGetting => {
            if let Some(plant) = nearest {
                outcome.eaten = forage(dino, &plant, params.food_required_to_spawn)?;
            }
        }
        Behavior::Spawning => outcome.offspring = Some(reproduce(dino, params, rng)),
        Behavior::Unclassified => {
            tracing::warn!(dino = ?dino, "Dino has no handler for its behavior, skipping");
            outcome.unclassified = true;
        }
    }
    Ok(outcome)
}

/// Runs [`sense`] then [`dispatch`] for one dino.
pub fn update_dino<K: Copy>(
    dino: &mut Dino,
    nearest: Option<Target<K>>,
    params: &WorldParams,
    rng: &mut impl Rng,
) -> Result<DinoOutcome<K>> {
    sense(dino, nearest.as_ref());
    dispatch(dino, nearest, params, rng)
}

fn roam(dino: &mut Dino, world_size: f64, rng: &mut impl Rng) -> Result<()> {
    let target = match dino.roam_target {
        Some(target) => target,
        None => {
            let target = random_world_position(world_size, rng);
            dino.roam_target = Some(target);
            target
        }
    };
    if distance_and_angle(dino.position(), target).distance <= ARRIVAL_DISTANCE {
        dino.roam_target = None;
        return Ok(());
    }
    move_toward(dino, target)
}

/// Eats the plant when in reach, otherwise closes in on it.
fn forage<K: Copy>(dino: &mut Dino, plant: &Target<K>, threshold: f64) -> Result<Option<K>> {
    if plant.heading.distance > ARRIVAL_DISTANCE {
        move_toward(dino, plant.position)?;
        return Ok(None);
    }
    dino.score += 1;
    dino.food += 1.0;
    if dino.food >= threshold {
        dino.behavior = Behavior::Spawning;
    }
    Ok(Some(plant.key))
}

fn reproduce(dino: &mut Dino, params: &WorldParams, rng: &mut impl Rng) -> Dino {
    let share = params.food_required_to_spawn * SPAWN_FOOD_SHARE;
    dino.food -= share;
    dino.behavior = Behavior::Roaming;
    let child = create_offspring(dino, share, rng);
    tracing::debug!(parent = %dino.name, child = %child.name, "Dino spawned offspring");
    child
}
