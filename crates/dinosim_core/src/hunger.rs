//! Hunger schedule.
//!
//! Every tick a dino's `hunger_tick` counts down by one. When it runs out the
//! dino burns one unit of food and the countdown restarts at
//! [`hunger_rate`], which shrinks as speed grows.

use dinosim_data::Dino;

/// Scales speed into the hunger countdown.
pub const HUNGER_SPEED_FACTOR: f64 = 0.03;

/// Weight of the remaining countdown in [`satiety`].
const SATIETY_TICK_WEIGHT: f64 = 0.1;

/// Ticks between food decrements for a dino moving at `speed`.
#[must_use]
pub fn hunger_rate(speed: f64) -> f64 {
    1.0 / (speed * HUNGER_SPEED_FACTOR)
}

/// Advances the hunger countdown by one tick.
///
/// Returns `true` when a unit of food was burned.
pub fn apply_hunger(dino: &mut Dino) -> bool {
    dino.hunger_tick -= 1.0;
    if dino.hunger_tick <= 0.0 {
        dino.hunger_tick = hunger_rate(dino.speed);
        dino.food -= 1.0;
        return true;
    }
    false
}

/// How full a dino is, in `[0, 1]`.
///
/// Food relative to the spawn threshold, nudged by how much of the current
/// hunger countdown is left.
#[must_use]
pub fn satiety(dino: &Dino, food_required_to_spawn: f64) -> f64 {
    let rate = hunger_rate(dino.speed);
    let countdown = if rate.is_finite() && rate > 0.0 {
        dino.hunger_tick / rate
    } else {
        1.0
    };
    let fullness = dino.food / food_required_to_spawn + countdown * SATIETY_TICK_WEIGHT;
    fullness.clamp(0.0, 1.0)
}
