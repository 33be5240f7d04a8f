//! Item instances

use strum::{Display, EnumIter};

use super::Device;
use crate::consts::is_reserved_name;

/// Unique identifier for item instances
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ItemId(pub u32);

impl ItemId {
    pub const NONE: ItemId = ItemId(0);

    pub fn next(self) -> Self {
        ItemId(self.0 + 1)
    }
}

/// Behavioral variant of an item
#[derive(Debug, Clone, PartialEq)]
pub enum ItemKind {
    /// Ordinary carryable object
    Plain,
    /// Charge/fire teleport device
    Device(Device),
}

/// Coarse classification, used for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum ItemClass {
    /// Reserved edible category
    Food,
    /// The teleport device
    Device,
    /// Anything else
    Object,
}

/// Item instance
///
/// Name, description and weight never change after construction. Only a
/// device's charge state is mutable, through [`Item::device_mut`].
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    id: ItemId,
    name: String,
    description: String,
    /// Weight in kilograms
    weight: f64,
    kind: ItemKind,
}

impl Item {
    /// Create a plain item
    pub fn new(
        id: ItemId,
        name: impl Into<String>,
        description: impl Into<String>,
        weight: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            weight: weight.max(0.0),
            kind: ItemKind::Plain,
        }
    }

    /// Create an uncharged device
    pub fn device(
        id: ItemId,
        name: impl Into<String>,
        description: impl Into<String>,
        weight: f64,
    ) -> Self {
        Self {
            kind: ItemKind::Device(Device::new()),
            ..Self::new(id, name, description, weight)
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn kind(&self) -> &ItemKind {
        &self.kind
    }

    /// Case-insensitive exact name match
    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    /// Whether this item belongs to the reserved edible category
    pub fn is_reserved(&self) -> bool {
        is_reserved_name(&self.name)
    }

    pub fn class(&self) -> ItemClass {
        match self.kind {
            ItemKind::Device(_) => ItemClass::Device,
            ItemKind::Plain if self.is_reserved() => ItemClass::Food,
            ItemKind::Plain => ItemClass::Object,
        }
    }

    pub fn as_device(&self) -> Option<&Device> {
        match &self.kind {
            ItemKind::Device(device) => Some(device),
            ItemKind::Plain => None,
        }
    }

    pub fn device_mut(&mut self) -> Option<&mut Device> {
        match &mut self.kind {
            ItemKind::Device(device) => Some(device),
            ItemKind::Plain => None,
        }
    }

    /// Full description, e.g. `Chair: a wooden chair that weighs 5.0kg.`
    pub fn long_description(&self) -> String {
        format!(
            "{}: {} that weighs {:?}kg.",
            self.name, self.description, self.weight
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_long_description_keeps_decimal() {
        let chair = Item::new(ItemId(1), "Chair", "a wooden chair", 5.0);
        assert_eq!(
            chair.long_description(),
            "Chair: a wooden chair that weighs 5.0kg."
        );
        let bar = Item::new(ItemId(2), "Bar", "a long bar with stools", 95.67);
        assert_eq!(
            bar.long_description(),
            "Bar: a long bar with stools that weighs 95.67kg."
        );
    }

    #[test]
    fn test_name_match_is_case_insensitive_and_exact() {
        let cookie = Item::new(ItemId(1), "Cookie", "a cookie", 0.1);
        assert!(cookie.is_named("cookie"));
        assert!(cookie.is_named("COOKIE"));
        assert!(!cookie.is_named("cook"));
        assert!(cookie.is_reserved());
        assert_eq!(cookie.class(), ItemClass::Food);
    }

    #[test]
    fn test_device_variant() {
        let mut beamer = Item::device(ItemId(3), "Beamer", "a beamer", 1.0);
        assert_eq!(beamer.class(), ItemClass::Device);
        assert!(!beamer.as_device().unwrap().is_charged());
        assert!(beamer.device_mut().unwrap().charge());
        assert!(beamer.as_device().unwrap().is_charged());

        let mut chair = Item::new(ItemId(4), "Chair", "a wooden chair", 5.0);
        assert!(chair.as_device().is_none());
        assert!(chair.device_mut().is_none());
    }

    #[test]
    fn test_negative_weight_clamped() {
        let ghost = Item::new(ItemId(5), "Ghost", "a faint shape", -2.0);
        assert_eq!(ghost.weight(), 0.0);
    }

    #[test]
    fn test_item_id_next() {
        assert_eq!(ItemId::NONE.next(), ItemId(1));
        assert_eq!(ItemId(41).next(), ItemId(42));
    }
}
