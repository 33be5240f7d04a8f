//! Registry of every location in the world
//!
//! Locations are appended while the world is built and never removed, so a
//! [`LocationId`] handed out by the registry stays valid for the whole
//! session. Random gateways draw their destination from this list.

use std::ops::{Index, IndexMut};

use tracing::debug;

use super::Location;
use crate::rng::GameRng;

/// Handle to a registered location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocationId(pub usize);

/// Append-only list of locations
#[derive(Debug, Clone, Default)]
pub struct LocationRegistry {
    locations: Vec<Location>,
}

impl LocationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a location and return its handle
    pub fn add(&mut self, location: Location) -> LocationId {
        let id = LocationId(self.locations.len());
        debug!(?id, description = %location.description, kind = %location.kind, "registered location");
        self.locations.push(location);
        id
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn get(&self, id: LocationId) -> Option<&Location> {
        self.locations.get(id.0)
    }

    pub fn get_mut(&mut self, id: LocationId) -> Option<&mut Location> {
        self.locations.get_mut(id.0)
    }

    /// Iterate over all locations with their handles, in registration order
    pub fn iter(&self) -> impl Iterator<Item = (LocationId, &Location)> {
        self.locations
            .iter()
            .enumerate()
            .map(|(i, l)| (LocationId(i), l))
    }

    /// Link `from` to `to` in `direction`. Unknown `from` is ignored.
    pub fn set_exit(&mut self, from: LocationId, direction: &str, to: LocationId) {
        if let Some(location) = self.get_mut(from) {
            location.set_exit(direction, to);
        }
    }

    /// Uniformly random location, gateways included
    pub fn random_location(&self, rng: &mut GameRng) -> Option<LocationId> {
        rng.index(self.locations.len()).map(LocationId)
    }

    /// Where leaving `from` in `direction` leads.
    ///
    /// Ordinary locations look the direction up. A random gateway ignores it
    /// and draws a fresh destination on every call.
    pub fn resolve_exit(
        &self,
        from: LocationId,
        direction: &str,
        rng: &mut GameRng,
    ) -> Option<LocationId> {
        let location = self.get(from)?;
        if location.is_random_gateway() {
            let to = self.random_location(rng);
            debug!(?from, ?to, direction, "gateway exit drawn");
            to
        } else {
            location.exit(direction)
        }
    }
}

/// Panics on a handle that this registry did not mint.
impl Index<LocationId> for LocationRegistry {
    type Output = Location;

    fn index(&self, id: LocationId) -> &Location {
        &self.locations[id.0]
    }
}

impl IndexMut<LocationId> for LocationRegistry {
    fn index_mut(&mut self, id: LocationId) -> &mut Location {
        &mut self.locations[id.0]
    }
}
