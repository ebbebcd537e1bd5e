pub mod app;
pub mod model;

use crate::model::config::SimConfig;
use crate::model::world::World;

/// Parses a JSON world state and wraps it in a [`World`].
pub fn world_from_json(config: SimConfig, state_json: &str) -> anyhow::Result<World> {
    let state = serde_json::from_str(state_json)?;
    World::from_state(config, state)
}
