use crate::error::{Result, SimError};
use crate::math::distance_and_angle;
use dinosim_data::{Dino, Position};

/// Moves `dino` toward `destination` by at most its speed.
///
/// Updates the heading before stepping, so a dino always faces where it last
/// moved. The step is capped at the remaining distance and never overshoots.
pub fn move_toward(dino: &mut Dino, destination: Position) -> Result<()> {
    if !(dino.speed > 0.0 && dino.speed.is_finite()) {
        return Err(SimError::missing_speed(dino.speed, &*dino));
    }
    let heading = distance_and_angle(dino.position(), destination);
    dino.angle = heading.angle;
    let step = heading.distance.min(dino.speed);
    dino.x += dino.angle.cos() * step;
    dino.y += dino.angle.sin() * step;
    Ok(())
}
