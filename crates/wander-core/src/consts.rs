//! Game constants

/// Name of the reserved item category: picked up without credits, edible.
pub const RESERVED_ITEM_NAME: &str = "cookie";

/// Pickup credits granted by eating a reserved item.
pub const CREDITS_PER_COOKIE: u32 = 5;

/// Default number of messages kept in the history log.
pub const DEFAULT_MSGHISTORY: usize = 200;

/// Indentation used when listing items under a location.
pub const ITEM_INDENT: &str = "    ";

/// Whether `name` belongs to the reserved item category.
pub fn is_reserved_name(name: &str) -> bool {
    name.eq_ignore_ascii_case(RESERVED_ITEM_NAME)
}
