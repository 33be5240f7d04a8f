//! The university campus
//!
//! Five ordinary rooms around the main entrance plus a transporter room
//! reachable from the lecture theatre.

use super::{Location, LocationId, LocationRegistry, WorldMap};
use crate::object::{Item, ItemId};

/// Hands out item ids in creation order
#[derive(Debug, Default)]
struct ItemMint {
    last: ItemId,
}

impl ItemMint {
    fn plain(&mut self, name: &str, description: &str, weight: f64) -> Option<Item> {
        self.last = self.last.next();
        Some(Item::new(self.last, name, description, weight))
    }

    fn device(&mut self, name: &str, description: &str, weight: f64) -> Option<Item> {
        self.last = self.last.next();
        Some(Item::device(self.last, name, description, weight))
    }

    fn chair(&mut self) -> Option<Item> {
        self.plain("Chair", "a wooden chair", 5.0)
    }

    fn cookie(&mut self) -> Option<Item> {
        self.plain("Cookie", "a cookie", 0.1)
    }

    fn tree(&mut self) -> Option<Item> {
        self.plain("Tree", "a fir tree", 500.5)
    }

    fn beamer(&mut self) -> Option<Item> {
        self.device("Beamer", "a beamer", 1.0)
    }
}

fn stock(registry: &mut LocationRegistry, id: LocationId, items: Vec<Option<Item>>) {
    if let Some(location) = registry.get_mut(id) {
        for item in items {
            location.add_item(item);
        }
    }
}

/// Build the campus and return it with the starting location (outside)
pub fn build_campus() -> WorldMap {
    let mut registry = LocationRegistry::new();
    let mut mint = ItemMint::default();

    let outside = registry.add(Location::new(
        "outside the main entrance of the university",
    ));
    let theatre = registry.add(Location::new("in a lecture theatre"));
    let pub_ = registry.add(Location::new("in the campus pub"));
    let lab = registry.add(Location::new("in a computing lab"));
    let office = registry.add(Location::new("in the computing admin office"));
    let transporter = registry.add(Location::random_gateway(
        "in a mysterious transporter room",
    ));

    let items = vec![mint.tree(), mint.tree(), mint.cookie()];
    stock(&mut registry, outside, items);
    let items = vec![mint.chair(), mint.cookie(), mint.beamer()];
    stock(&mut registry, theatre, items);
    let items = vec![
        mint.plain("Bar", "a long bar with stools", 95.67),
        mint.cookie(),
        mint.beamer(),
    ];
    stock(&mut registry, pub_, items);
    let items = vec![
        mint.chair(),
        mint.plain("Computer", "a PC", 10.0),
        mint.chair(),
        mint.plain("Computer", "a Mac", 5.0),
        mint.cookie(),
    ];
    stock(&mut registry, lab, items);
    let items = vec![
        mint.chair(),
        mint.plain("Computer", "a PC", 10.0),
        mint.cookie(),
    ];
    stock(&mut registry, office, items);

    registry.set_exit(outside, "east", theatre);
    registry.set_exit(outside, "south", lab);
    registry.set_exit(outside, "west", pub_);

    registry.set_exit(theatre, "west", outside);
    registry.set_exit(theatre, "east", transporter);

    registry.set_exit(pub_, "east", outside);

    registry.set_exit(lab, "north", outside);
    registry.set_exit(lab, "east", office);

    registry.set_exit(office, "west", lab);

    WorldMap {
        registry,
        start: outside,
    }
}
