use serde::{Deserialize, Serialize};

/// World position of an entity.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Current behavior state of a dino.
///
/// Values that a host hands us but that we do not recognise land in
/// `Unclassified`; the state machine skips such dinos with a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Behavior {
    #[default]
    Roaming,
    FoodGetting,
    Spawning,
    #[serde(other)]
    Unclassified,
}

/// Stationary food resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plant {
    pub x: f64,
    pub y: f64,
    #[serde(default = "alive_default")]
    pub alive: bool,
}

impl Plant {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y, alive: true }
    }

    #[must_use]
    pub const fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }
}

/// Mobile consumer agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dino {
    pub x: f64,
    pub y: f64,
    #[serde(default = "alive_default")]
    pub alive: bool,
    pub name: String,
    /// Number of plants eaten.
    #[serde(default)]
    pub score: u32,
    /// Maximum distance moved per tick.
    pub speed: f64,
    /// Heading in radians, refreshed on every move.
    #[serde(default)]
    pub angle: f64,
    pub vision_radius: f64,
    pub food: f64,
    /// Countdown until the next unit of food is burned.
    pub hunger_tick: f64,
    #[serde(default)]
    pub behavior: Behavior,
    #[serde(default)]
    pub roam_target: Option<Position>,
}

impl Dino {
    #[must_use]
    pub const fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }
}

const fn alive_default() -> bool {
    true
}

/// Discriminator for [`Entity`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Plant,
    Dino,
}

/// Everything that lives in the world.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Entity {
    Plant(Plant),
    Dino(Dino),
}

impl Entity {
    #[must_use]
    pub const fn kind(&self) -> EntityKind {
        match self {
            Self::Plant(_) => EntityKind::Plant,
            Self::Dino(_) => EntityKind::Dino,
        }
    }

    #[must_use]
    pub const fn position(&self) -> Position {
        match self {
            Self::Plant(p) => p.position(),
            Self::Dino(d) => d.position(),
        }
    }

    #[must_use]
    pub const fn is_alive(&self) -> bool {
        match self {
            Self::Plant(p) => p.alive,
            Self::Dino(d) => d.alive,
        }
    }

    pub fn kill(&mut self) {
        match self {
            Self::Plant(p) => p.alive = false,
            Self::Dino(d) => d.alive = false,
        }
    }

    #[must_use]
    pub const fn as_dino(&self) -> Option<&Dino> {
        match self {
            Self::Dino(d) => Some(d),
            Self::Plant(_) => None,
        }
    }

    pub fn as_dino_mut(&mut self) -> Option<&mut Dino> {
        match self {
            Self::Dino(d) => Some(d),
            Self::Plant(_) => None,
        }
    }

    #[must_use]
    pub const fn as_plant(&self) -> Option<&Plant> {
        match self {
            Self::Plant(p) => Some(p),
            Self::Dino(_) => None,
        }
    }
}

impl From<Plant> for Entity {
    fn from(plant: Plant) -> Self {
        Self::Plant(plant)
    }
}

impl From<Dino> for Entity {
    fn from(dino: Dino) -> Self {
        Self::Dino(dino)
    }
}
