//! Plain data shared by the simulation core and its hosts.

pub mod data;

pub use data::entity::{Behavior, Dino, Entity, EntityKind, Plant, Position};
pub use data::stats::{PopulationSample, PopulationStats};
pub use data::world::{WorldParams, WorldState};
