pub use dinosim_core::{SimError, TickReport};
pub mod behavior {
    pub use dinosim_core::behavior::*;
}
pub mod config {
    pub use dinosim_core::config::*;
}
pub mod history {
    pub use dinosim_core::history::*;
}
pub mod hunger {
    pub use dinosim_core::hunger::*;
}
pub mod lifecycle {
    pub use dinosim_core::lifecycle::*;
}
pub mod math {
    pub use dinosim_core::math::*;
}
pub mod metrics {
    pub use dinosim_core::metrics::*;
}
pub mod motion {
    pub use dinosim_core::motion::*;
}
pub mod spawn {
    pub use dinosim_core::spawn::*;
}
pub mod targeting {
    pub use dinosim_core::targeting::*;
}
pub mod tick {
    pub use dinosim_core::tick::*;
}

pub mod state {
    pub use dinosim_data::*;
}

pub mod world;
