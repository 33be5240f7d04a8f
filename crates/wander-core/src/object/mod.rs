//! Object system
//!
//! Carryable items and the teleport device.

mod device;
mod obj;

pub use device::{ChargeState, Device};
pub use obj::{Item, ItemClass, ItemId, ItemKind};
