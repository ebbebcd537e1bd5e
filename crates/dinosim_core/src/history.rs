//! Population history.
//!
//! Samples dino and plant counts at a fixed tick interval into a bounded
//! buffer. Hosts that chart the population read the series from here.

use crate::lifecycle::generation_of;
use dinosim_data::{PopulationSample, PopulationStats, WorldState};
use std::collections::VecDeque;

/// Which count a series tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeriesKey {
    Dinos,
    Plants,
}

impl SeriesKey {
    pub const ALL: [Self; 2] = [Self::Dinos, Self::Plants];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dinos => "dinos",
            Self::Plants => "plants",
        }
    }

    const fn value(self, sample: &PopulationSample) -> usize {
        match self {
            Self::Dinos => sample.dinos,
            Self::Plants => sample.plants,
        }
    }
}

/// Largest tick and largest value over every series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeriesBounds {
    pub max_tick: u64,
    pub max_value: usize,
}

#[derive(Debug, Clone)]
pub struct PopulationHistory {
    interval: u64,
    capacity: usize,
    samples: VecDeque<PopulationSample>,
}

impl PopulationHistory {
    #[must_use]
    pub fn new(interval: u64, capacity: usize) -> Self {
        Self {
            interval: interval.max(1),
            capacity: capacity.max(1),
            samples: VecDeque::with_capacity(capacity.min(4096)),
        }
    }

    /// Samples `state` if `tick` falls on the interval. Returns whether a
    /// sample was taken.
    pub fn record(&mut self, tick: u64, state: &WorldState) -> bool {
        if tick % self.interval != 0 {
            return false;
        }
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(PopulationSample {
            tick,
            dinos: state.dino_count(),
            plants: state.plant_count(),
        });
        true
    }

    pub fn samples(&self) -> impl Iterator<Item = &PopulationSample> {
        self.samples.iter()
    }

    #[must_use]
    pub fn latest(&self) -> Option<&PopulationSample> {
        self.samples.back()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// `(tick, value)` points for one series, oldest first.
    #[must_use]
    pub fn series(&self, key: SeriesKey) -> Vec<(u64, usize)> {
        self.samples
            .iter()
            .map(|s| (s.tick, key.value(s)))
            .collect()
    }

    #[must_use]
    pub fn bounds(&self) -> SeriesBounds {
        self.samples
            .iter()
            .fold(SeriesBounds::default(), |bounds, sample| SeriesBounds {
                max_tick: bounds.max_tick.max(sample.tick),
                max_value: SeriesKey::ALL
                    .iter()
                    .map(|key| key.value(sample))
                    .fold(bounds.max_value, usize::max),
            })
    }
}

/// Aggregates over the living dinos in `state`.
#[must_use]
pub fn population_stats(tick: u64, state: &WorldState) -> PopulationStats {
    let mut stats = PopulationStats {
        tick,
        plants: state.plant_count(),
        ..PopulationStats::default()
    };

    let mut speed = 0.0;
    let mut vision = 0.0;
    let mut food = 0.0;
    for dino in state.dinos() {
        stats.dinos += 1;
        stats.max_generation = stats.max_generation.max(generation_of(&dino.name));
        stats.top_score = stats.top_score.max(dino.score);
        speed += dino.speed;
        vision += dino.vision_radius;
        food += dino.food;
    }

    if stats.dinos > 0 {
        let n = stats.dinos as f64;
        stats.avg_speed = speed / n;
        stats.avg_vision_radius = vision / n;
        stats.avg_food = food / n;
    }
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DinoConfig;
    use crate::lifecycle::create_dino;
    use dinosim_data::{Entity, Plant, Position, WorldParams};

    fn state(dinos: usize, plants: usize) -> WorldState {
        let mut entities: Vec<Entity> = Vec::new();
        for i in 0..dinos {
            let name = if i == 0 { "Spot".to_string() } else { format!("Spot {}", i + 1) };
            let mut dino = create_dino(&name, Position::default(), &DinoConfig::default());
            dino.score = i as u32;
            entities.push(dino.into());
        }
        for _ in 0..plants {
            entities.push(Plant::new(1.0, 1.0).into());
        }
        WorldState::new(WorldParams::default(), entities)
    }

    #[test]
    fn test_records_on_interval_only() {
        let mut history = PopulationHistory::new(10, 100);
        let world = state(2, 3);
        assert!(history.record(0, &world));
        assert!(!history.record(5, &world));
        assert!(history.record(10, &world));
        assert_eq!(history.len(), 2);
        assert_eq!(
            history.latest(),
            Some(&PopulationSample {
                tick: 10,
                dinos: 2,
                plants: 3
            })
        );
    }

    #[test]
    fn test_capacity_drops_oldest() {
        let mut history = PopulationHistory::new(1, 3);
        for tick in 0..5 {
            history.record(tick, &state(tick as usize, 0));
        }
        let ticks: Vec<_> = history.samples().map(|s| s.tick).collect();
        assert_eq!(ticks, [2, 3, 4]);
    }

    #[test]
    fn test_series_and_bounds() {
        let mut history = PopulationHistory::new(1, 10);
        history.record(1, &state(1, 7));
        history.record(2, &state(4, 2));
        assert_eq!(history.series(SeriesKey::Dinos), [(1, 1), (2, 4)]);
        assert_eq!(history.series(SeriesKey::Plants), [(1, 7), (2, 2)]);
        assert_eq!(
            history.bounds(),
            SeriesBounds {
                max_tick: 2,
                max_value: 7
            }
        );
        assert_eq!(SeriesKey::Plants.as_str(), "plants");
    }

    #[test]
    fn test_population_stats() {
        let stats = population_stats(9, &state(3, 4));
        assert_eq!(stats.tick, 9);
        assert_eq!(stats.dinos, 3);
        assert_eq!(stats.plants, 4);
        assert_eq!(stats.max_generation, 3);
        assert_eq!(stats.top_score, 2);
        assert!((stats.avg_speed - 0.3).abs() < 1e-12);
    }

    #[test]
    fn test_population_stats_empty() {
        let stats = population_stats(0, &state(0, 0));
        assert_eq!(stats, PopulationStats::default());
    }
}
