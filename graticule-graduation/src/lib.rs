pub mod engine;
pub mod step;
pub mod tickmarks;
pub mod ticks;

pub use engine::{AutoScale, ScaleEngine, ScaleEngineConfig};
pub use tickmarks::{TickRole, Tickmarks};
