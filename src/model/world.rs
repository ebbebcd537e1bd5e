use crate::model::config::{validate_params, SimConfig};
use crate::model::history::{population_stats, PopulationHistory};
use crate::model::lifecycle;
use crate::model::metrics::Metrics;
use crate::model::state::{PopulationStats, WorldState};
use crate::model::tick::{self, TickReport};
use anyhow::Context;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Instant;

/// Host-side driver around a [`WorldState`].
///
/// Owns the random source, the tick counter, the population history and the
/// metrics for one run.
pub struct World {
    pub tick: u64,
    pub config: SimConfig,
    state: WorldState,
    rng: ChaCha8Rng,
    history: PopulationHistory,
    metrics: Metrics,
}

impl World {
    /// Seeds a fresh world from `config`.
    pub fn new(config: SimConfig) -> anyhow::Result<Self> {
        config.validate()?;
        let mut rng = Self::initial_rng(&config);
        let state = lifecycle::seed_world(&config, &mut rng);
        tracing::info!(
            dinos = state.dino_count(),
            plants = state.plant_count(),
            seed = ?config.world.seed,
            "World seeded"
        );
        Ok(Self::assemble(config, state, rng))
    }

    /// Resumes from a state handed over by a host.
    ///
    /// The state's own parameters win over the ones in `config`.
    pub fn from_state(config: SimConfig, state: WorldState) -> anyhow::Result<Self> {
        config.validate()?;
        validate_params(&state.params).context("invalid world state")?;
        let rng = Self::initial_rng(&config);
        Ok(Self::assemble(config, state, rng))
    }

    fn initial_rng(config: &SimConfig) -> ChaCha8Rng {
        match config.world.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        }
    }

    fn assemble(config: SimConfig, state: WorldState, rng: ChaCha8Rng) -> Self {
        let mut history = PopulationHistory::new(config.history_interval, config.history_capacity);
        history.record(0, &state);
        Self {
            tick: 0,
            config,
            state,
            rng,
            history,
            metrics: Metrics::new(),
        }
    }

    /// Advances the world by one tick.
    pub fn update(&mut self) -> TickReport {
        self.tick += 1;
        if self.config.world.deterministic {
            let world_seed = self.config.world.seed.unwrap_or(0);
            let seed = world_seed.wrapping_add(self.tick).wrapping_add(0x5EED);
            self.rng = ChaCha8Rng::seed_from_u64(seed);
        }

        let start = Instant::now();
        let report = tick::tick(
            &mut self.state,
            self.config.ecosystem.plant_spawn_chance,
            &mut self.rng,
        );
        let elapsed = start.elapsed();

        let dinos = self.state.dino_count();
        let plants = self.state.plant_count();
        self.metrics.record_tick(elapsed, &report, dinos, plants);
        self.history.record(self.tick, &self.state);

        if dinos == 0 && report.deaths() > 0 {
            tracing::info!(tick = self.tick, "Last dino died");
        }
        report
    }

    #[must_use]
    pub const fn state(&self) -> &WorldState {
        &self.state
    }

    #[must_use]
    pub fn into_state(self) -> WorldState {
        self.state
    }

    #[must_use]
    pub fn population_count(&self) -> usize {
        self.state.dino_count()
    }

    #[must_use]
    pub fn plant_count(&self) -> usize {
        self.state.plant_count()
    }

    #[must_use]
    pub fn is_extinct(&self) -> bool {
        self.population_count() == 0
    }

    #[must_use]
    pub const fn history(&self) -> &PopulationHistory {
        &self.history
    }

    #[must_use]
    pub const fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Aggregate figures for the current tick.
    #[must_use]
    pub fn stats(&self) -> PopulationStats {
        population_stats(self.tick, &self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::config::WorldConfig;

    fn seeded(seed: u64) -> SimConfig {
        SimConfig {
            world: WorldConfig {
                seed: Some(seed),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_new_seeds_configured_population() {
        let world = World::new(seeded(1)).unwrap();
        assert_eq!(world.population_count(), 4);
        assert_eq!(world.plant_count(), 20);
        assert_eq!(world.history().len(), 1);
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let mut config = seeded(1);
        config.world.world_size = -5.0;
        assert!(World::new(config).is_err());
    }

    #[test]
    fn test_update_advances_tick_and_metrics() {
        let mut world = World::new(seeded(2)).unwrap();
        for _ in 0..10 {
            world.update();
        }
        assert_eq!(world.tick, 10);
        assert_eq!(world.metrics().tick_count(), 10);
        assert_eq!(world.history().len(), 2);
        assert_eq!(world.stats().tick, 10);
    }

    #[test]
    fn test_empty_state_is_extinct() {
        let state = WorldState::new(Default::default(), Vec::new());
        let world = World::from_state(seeded(3), state).unwrap();
        assert!(world.is_extinct());
    }
}
