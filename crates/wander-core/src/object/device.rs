//! The charge/fire teleport device
//!
//! A device starts uncharged. Charging arms it; firing discharges it and tells
//! the caller to perform the teleport. Where it was charged is not stored
//! here; the game state remembers the destination.

use strum::Display;

/// Charge state of a device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
#[strum(serialize_all = "lowercase")]
pub enum ChargeState {
    #[default]
    Uncharged,
    Charged,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Device {
    state: ChargeState,
}

impl Device {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ChargeState {
        self.state
    }

    pub fn is_charged(&self) -> bool {
        self.state == ChargeState::Charged
    }

    /// Arm the device. Returns false (and changes nothing) if already charged.
    pub fn charge(&mut self) -> bool {
        match self.state {
            ChargeState::Uncharged => {
                self.state = ChargeState::Charged;
                true
            }
            ChargeState::Charged => false,
        }
    }

    /// Discharge the device. Returns false (and changes nothing) if uncharged.
    pub fn fire(&mut self) -> bool {
        match self.state {
            ChargeState::Charged => {
                self.state = ChargeState::Uncharged;
                true
            }
            ChargeState::Uncharged => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_uncharged() {
        let device = Device::new();
        assert_eq!(device.state(), ChargeState::Uncharged);
        assert!(!device.is_charged());
    }

    #[test]
    fn test_charge_then_fire_once() {
        let mut device = Device::new();
        assert!(device.charge());
        assert!(device.fire());
        assert!(!device.fire());
        assert_eq!(device.state(), ChargeState::Uncharged);
    }

    #[test]
    fn test_double_charge_rejected() {
        let mut device = Device::new();
        assert!(device.charge());
        assert!(!device.charge());
        assert!(device.is_charged());
    }

    #[test]
    fn test_recharge_after_fire() {
        let mut device = Device::new();
        for _ in 0..3 {
            assert!(device.charge());
            assert!(device.fire());
        }
    }

    #[test]
    fn test_state_display() {
        assert_eq!(ChargeState::Charged.to_string(), "charged");
        assert_eq!(ChargeState::Uncharged.to_string(), "uncharged");
    }
}
