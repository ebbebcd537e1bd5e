//! Configuration management for simulation parameters.
//!
//! Strongly-typed structures that map to `config.toml`.
//!
//! ## Configuration Hierarchy
//!
//! 1. Default values (hardcoded in `Default` impls)
//! 2. `config.toml` file (overrides defaults, missing sections fall back)
//! 3. Command line flags in the `dinosim` binary (seed, tick count)
//!
//! ## Example `config.toml`
//!
//! ```toml
//! [world]
//! world_size = 100.0
//! initial_dinos = 4
//! initial_plants = 20
//! seed = 42
//!
//! [ecosystem]
//! plant_spawn_chance = 0.1
//! food_required_to_spawn = 10.0
//!
//! [dino]
//! base_speed = 0.3
//! ```

use dinosim_data::WorldParams;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// World-level configuration: size, initial population and seeding.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct WorldConfig {
    /// Half-extent of the square world.
    pub world_size: f64,
    pub initial_dinos: usize,
    pub initial_plants: usize,
    pub seed: Option<u64>,
    /// Re-derive the RNG from `seed` and the tick number every tick.
    pub deterministic: bool,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            world_size: 100.0,
            initial_dinos: 4,
            initial_plants: 20,
            seed: None,
            deterministic: false,
        }
    }
}

/// Plant growth and the food economy.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct EcosystemConfig {
    /// Probability that one plant appears in a tick.
    pub plant_spawn_chance: f64,
    pub food_required_to_spawn: f64,
}

impl Default for EcosystemConfig {
    fn default() -> Self {
        Self {
            plant_spawn_chance: crate::spawn::DEFAULT_PLANT_SPAWN_CHANCE,
            food_required_to_spawn: 10.0,
        }
    }
}

/// Traits given to the initial dinos.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DinoConfig {
    pub base_speed: f64,
    pub base_vision_radius: f64,
    pub initial_food: f64,
    /// Names handed out round-robin when seeding.
    pub names: Vec<String>,
}

impl Default for DinoConfig {
    fn default() -> Self {
        Self {
            base_speed: 0.3,
            base_vision_radius: 20.0,
            initial_food: 5.0,
            names: ["Spot", "Rex", "Tiny", "Chomp"]
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SimConfig {
    /// Tick cadence for hosts that throttle; `0` runs unthrottled.
    pub target_fps: u64,
    /// Ticks between population history samples.
    pub history_interval: u64,
    /// Samples kept before the oldest are dropped.
    pub history_capacity: usize,
    pub world: WorldConfig,
    pub ecosystem: EcosystemConfig,
    pub dino: DinoConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            target_fps: 60,
            history_interval: 10,
            history_capacity: 1000,
            world: WorldConfig::default(),
            ecosystem: EcosystemConfig::default(),
            dino: DinoConfig::default(),
        }
    }
}

impl SimConfig {
    /// Validates all configuration parameters.
    ///
    /// Returns `Ok(())` if all parameters are valid, or `Err` with a description
    /// of the first validation failure.
    pub fn validate(&self) -> anyhow::Result<()> {
        validate_params(&self.world_params())?;
        anyhow::ensure!(
            !self.world.deterministic || self.world.seed.is_some(),
            "Deterministic mode requires a world seed"
        );
        anyhow::ensure!(
            self.world.initial_dinos <= 10000,
            "Initial dino count too large (max 10000)"
        );
        anyhow::ensure!(
            self.world.initial_plants <= 10000,
            "Initial plant count too large (max 10000)"
        );

        anyhow::ensure!(
            (0.0..=1.0).contains(&self.ecosystem.plant_spawn_chance),
            "Plant spawn chance must be in [0.0, 1.0]"
        );

        anyhow::ensure!(
            self.dino.base_speed.is_finite() && self.dino.base_speed > 0.0,
            "Dino base speed must be positive"
        );
        anyhow::ensure!(
            self.dino.base_vision_radius >= 0.0,
            "Dino vision radius must be non-negative"
        );
        anyhow::ensure!(
            self.dino.initial_food > 0.0,
            "Dino initial food must be positive"
        );
        anyhow::ensure!(
            !self.dino.names.is_empty(),
            "At least one dino name is required"
        );

        anyhow::ensure!(self.target_fps <= 240, "Target FPS too high (max 240)");
        anyhow::ensure!(
            self.history_interval > 0,
            "History interval must be positive"
        );
        anyhow::ensure!(
            self.history_capacity > 0,
            "History capacity must be positive"
        );

        Ok(())
    }

    /// Parses and validates a TOML document.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from `path`, falling back to defaults when the
    /// file does not exist.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::info!(path = %path.display(), "No config file found, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&content)
            .map_err(|e| e.context(format!("loading {}", path.display())))?;
        tracing::debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    pub fn to_toml(&self) -> anyhow::Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// The per-tick rules carried on the world state.
    #[must_use]
    pub const fn world_params(&self) -> WorldParams {
        WorldParams {
            world_size: self.world.world_size,
            food_required_to_spawn: self.ecosystem.food_required_to_spawn,
        }
    }
}

/// Checks the per-tick rules, whether they come from a config file or from
/// a state handed over by a host.
pub fn validate_params(params: &WorldParams) -> anyhow::Result<()> {
    anyhow::ensure!(
        params.world_size.is_finite() && params.world_size > 0.0,
        "World size must be positive and finite"
    );
    anyhow::ensure!(
        params.food_required_to_spawn.is_finite() && params.food_required_to_spawn > 0.0,
        "Food required to spawn must be positive and finite"
    );
    Ok(())
}
