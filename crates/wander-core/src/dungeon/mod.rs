//! Navigation graph
//!
//! Locations, their exits, and the registry that owns them.

pub mod campus;
mod registry;
mod room;

pub use registry::{LocationId, LocationRegistry};
pub use room::{Exit, Location, LocationKind};

/// A built world: every location plus where the player starts
#[derive(Debug, Clone)]
pub struct WorldMap {
    pub registry: LocationRegistry,
    pub start: LocationId,
}
