//! Locations and their exits
//!
//! A location is a node of the navigation graph. It owns the items lying in
//! it and refers to its neighbors by [`LocationId`]; it never owns them.

use strum::{Display, EnumIter};

use super::LocationId;
use crate::consts::ITEM_INDENT;
use crate::object::{Item, ItemId};

/// How a location resolves its exits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter)]
pub enum LocationKind {
    /// Exits are looked up by direction
    #[default]
    Standard,
    /// Every exit leads to a random registered location
    RandomGateway,
}

/// A labelled exit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exit {
    pub direction: String,
    pub to: LocationId,
}

/// A node in the navigation graph
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    /// Short description, e.g. "in a lecture theatre"
    pub description: String,
    pub kind: LocationKind,
    /// Exits in insertion order; directions are unique
    exits: Vec<Exit>,
    /// Items lying here, in insertion order
    items: Vec<Item>,
}

impl Location {
    /// Create an ordinary location with no exits and no items
    pub fn new(description: impl Into<String>) -> Self {
        Self::with_kind(description, LocationKind::Standard)
    }

    /// Create a location whose exits are random
    pub fn random_gateway(description: impl Into<String>) -> Self {
        Self::with_kind(description, LocationKind::RandomGateway)
    }

    pub fn with_kind(description: impl Into<String>, kind: LocationKind) -> Self {
        Self {
            description: description.into(),
            kind,
            exits: Vec::new(),
            items: Vec::new(),
        }
    }

    pub fn is_random_gateway(&self) -> bool {
        self.kind == LocationKind::RandomGateway
    }

    /// Define an exit. An existing direction is overwritten in place.
    pub fn set_exit(&mut self, direction: impl Into<String>, neighbor: LocationId) {
        let direction = direction.into();
        match self.exits.iter_mut().find(|e| e.direction == direction) {
            Some(exit) => exit.to = neighbor,
            None => self.exits.push(Exit {
                direction,
                to: neighbor,
            }),
        }
    }

    /// Neighbor in `direction`, ignoring the location kind. Directions are
    /// matched exactly.
    pub fn exit(&self, direction: &str) -> Option<LocationId> {
        self.exits
            .iter()
            .find(|e| e.direction == direction)
            .map(|e| e.to)
    }

    pub fn exits(&self) -> &[Exit] {
        &self.exits
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Put an item here. `None` is ignored.
    pub fn add_item(&mut self, item: Option<Item>) {
        if let Some(item) = item {
            self.items.push(item);
        }
    }

    /// Remove the first item with this id
    pub fn remove_item(&mut self, id: ItemId) -> Option<Item> {
        let idx = self.items.iter().position(|i| i.id() == id)?;
        Some(self.items.remove(idx))
    }

    /// First item whose name matches, case-insensitively
    pub fn find_item(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|i| i.is_named(name))
    }

    /// Take the first item whose name matches out of this location
    pub fn take_item(&mut self, name: &str) -> Option<Item> {
        let id = self.find_item(name)?.id();
        self.remove_item(id)
    }

    pub fn short_description(&self) -> &str {
        &self.description
    }

    /// "Exits: east south west"
    pub fn exit_string(&self) -> String {
        let mut s = String::from("Exits:");
        for exit in &self.exits {
            s.push(' ');
            s.push_str(&exit.direction);
        }
        s
    }

    /// One indented line per item, each preceded by a newline
    pub fn item_string(&self) -> String {
        self.items
            .iter()
            .map(|i| format!("\n{}{}", ITEM_INDENT, i.long_description()))
            .collect()
    }

    /// Return a description of the location in the form:
    ///
    /// ```text
    /// You are in a lecture theatre.
    /// Exits: west east
    /// Items:
    ///     Chair: a wooden chair that weighs 5.0kg.
    /// ```
    pub fn long_description(&self) -> String {
        format!(
            "You are {}.\n{}\nItems:{}",
            self.description,
            self.exit_string(),
            self.item_string()
        )
    }
}
