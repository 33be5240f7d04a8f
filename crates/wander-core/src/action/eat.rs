//! Eating (cookies are the only food)

use tracing::debug;

use super::{ActionResult, Effect};
use crate::consts::CREDITS_PER_COOKIE;
use crate::gameloop::GameState;
use crate::world::ActionError;

/// Eat the carried cookie, earning pickup credits
pub fn do_eat(state: &mut GameState) -> ActionResult {
    let item = state.carried.as_ref().ok_or(ActionError::NothingCarried)?;

    if !item.is_reserved() {
        return Err(ActionError::NotEdible {
            name: item.name().to_string(),
        });
    }

    state.carried = None;
    state.pickup_credits = state.pickup_credits.saturating_add(CREDITS_PER_COOKIE);
    debug!(credits = state.pickup_credits, "ate cookie");
    state.message("You have eaten the cookie and are no longer hungry.");

    Ok(Effect::Stayed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::{Location, LocationRegistry, WorldMap};
    use crate::object::{Item, ItemId};
    use crate::rng::GameRng;

    fn state_holding(item: Option<Item>) -> GameState {
        let mut registry = LocationRegistry::new();
        let start = registry.add(Location::new("in a pub"));
        let mut state = GameState::new(WorldMap { registry, start }, GameRng::new(3));
        state.carried = item;
        state
    }

    #[test]
    fn test_eat_cookie_adds_credits() {
        let mut state = state_holding(Some(Item::new(ItemId(1), "Cookie", "a cookie", 0.1)));
        assert_eq!(do_eat(&mut state), Ok(Effect::Stayed));
        assert!(state.carried.is_none());
        assert_eq!(state.pickup_credits, CREDITS_PER_COOKIE);

        state.carried = Some(Item::new(ItemId(2), "cookie", "a cookie", 0.1));
        do_eat(&mut state).unwrap();
        assert_eq!(state.pickup_credits, 2 * CREDITS_PER_COOKIE);
    }

    #[test]
    fn test_eat_nothing() {
        let mut state = state_holding(None);
        assert_eq!(do_eat(&mut state), Err(ActionError::NothingCarried));
        assert_eq!(state.pickup_credits, 0);
    }

    #[test]
    fn test_eat_inedible_keeps_item() {
        let mut state = state_holding(Some(Item::new(ItemId(1), "Chair", "a chair", 5.0)));
        assert_eq!(
            do_eat(&mut state),
            Err(ActionError::NotEdible {
                name: "Chair".into()
            })
        );
        assert!(state.carried.is_some());
        assert_eq!(state.pickup_credits, 0);
    }
}
