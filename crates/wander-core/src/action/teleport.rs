//! Charging and firing the beamer
//!
//! Charging remembers the current location. Firing returns the player there
//! from anywhere, recording the departure like an ordinary move.

use tracing::{debug, info};

use super::{ActionResult, Effect};
use crate::gameloop::GameState;
use crate::object::Device;
use crate::world::ActionError;

fn carried_device(state: &mut GameState) -> Result<&mut Device, ActionError> {
    let item = state.carried.as_mut().ok_or(ActionError::NothingCarried)?;
    let name = item.name().to_string();
    item.device_mut().ok_or(ActionError::NotADevice { name })
}

/// Charge the carried device in the current location
pub fn charge_device(state: &mut GameState) -> ActionResult {
    let here = state.current;
    let device = carried_device(state)?;

    if !device.charge() {
        return Err(ActionError::InvalidDeviceState { charged: true });
    }

    state.teleport_target = Some(here);
    debug!(target = ?here, "device charged");
    state.message("Beamer is now charged.");

    Ok(Effect::Stayed)
}

/// Fire the carried device, returning to where it was charged
pub fn fire_device(state: &mut GameState) -> ActionResult {
    let target = state.teleport_target;
    let device = carried_device(state)?;

    // a charged device always has a target; treat a missing one as uncharged
    let Some(target) = target.filter(|_| device.is_charged()) else {
        return Err(ActionError::InvalidDeviceState { charged: false });
    };
    device.fire();

    info!(from = ?state.current, to = ?target, "device fired");
    state.relocate_with_history(target);

    Ok(Effect::Moved)
}
