//! # Dinosim Core
//!
//! The per-tick update system for the dino ecosystem simulation.
//!
//! This crate contains the deterministic-given-its-RNG simulation logic:
//! - Vector math and nearest-target search
//! - Movement toward a destination at capped speed
//! - The hunger/food economy
//! - Stochastic plant spawning
//! - The roam / seek-food / spawn behavior state machine
//! - The tick orchestrator that applies births and deaths
//!
//! ## Architecture
//!
//! The core is a pure step function over a [`WorldState`] value. World
//! parameters travel with the state and the random source is injected, so
//! hosts can replay a run by seeding the same RNG.
//!
//! ## Example
//!
//! ```
//! use dinosim_core::config::SimConfig;
//! use dinosim_core::{lifecycle, tick};
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let config = SimConfig::default();
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let mut state = lifecycle::seed_world(&config, &mut rng);
//!
//! let report = tick::tick(&mut state, config.ecosystem.plant_spawn_chance, &mut rng);
//! assert_eq!(report.births, 0);
//! ```
//!
//! [`WorldState`]: dinosim_data::WorldState

/// Roam / seek-food / spawn state machine
pub mod behavior;
/// Configuration management for simulation parameters
pub mod config;
/// Error types for the simulation core
pub mod error;
/// Population time series and aggregate statistics
pub mod history;
/// Hunger schedule tied to dino speed
pub mod hunger;
/// Entity creation, world seeding and offspring naming
pub mod lifecycle;
/// Distance and heading between points
pub mod math;
/// Tick metrics collection and logging setup
pub mod metrics;
/// Movement toward a destination
pub mod motion;
/// Stochastic plant spawning
pub mod spawn;
/// Nearest-target search
pub mod targeting;
/// One simulation step
pub mod tick;

pub use dinosim_data::{Behavior, Dino, Entity, Plant, Position, WorldParams, WorldState};
pub use error::SimError;
pub use metrics::{init_logging, Metrics};
pub use tick::{tick, TickReport};
