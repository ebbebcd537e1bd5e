use serde::{Deserialize, Serialize};

/// Population counts at one point in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PopulationSample {
    pub tick: u64,
    pub dinos: usize,
    pub plants: usize,
}

/// Aggregated statistics for the whole population.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PopulationStats {
    pub tick: u64,
    pub dinos: usize,
    pub plants: usize,
    /// Highest generation number among living dinos.
    pub max_generation: u32,
    pub avg_speed: f64,
    pub avg_vision_radius: f64,
    pub avg_food: f64,
    pub top_score: u32,
}
