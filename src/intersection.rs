pub mod bounds;
pub mod lights;

pub use bounds::IntersectionBounds;
pub use lights::{LightState, PedestrianLightState, Phase, PhaseOutcome, SignalController};
