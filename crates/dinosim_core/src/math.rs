use dinosim_data::Position;

/// Distance from one point to another and the heading that points at it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Heading {
    pub distance: f64,
    /// Radians, measured from `from` toward `to`.
    pub angle: f64,
}

#[must_use]
pub fn length(x: f64, y: f64) -> f64 {
    (x * x + y * y).sqrt()
}

/// Distance and angle from `from` to `to`.
///
/// The difference is taken as `from - to` and negated inside `atan2`, which
/// matches a y axis that grows downward on screen. Coincident points yield
/// a zero angle.
#[must_use]
pub fn distance_and_angle(from: Position, to: Position) -> Heading {
    let diff_x = from.x - to.x;
    let diff_y = from.y - to.y;
    let distance = length(diff_x, diff_y);
    let angle = if distance == 0.0 {
        0.0
    } else {
        (-diff_y).atan2(-diff_x)
    };
    Heading { distance, angle }
}
