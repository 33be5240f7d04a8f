//! Picking up and dropping items
//!
//! The player has a single hand. Cookies may always be picked up; anything
//! else costs one pickup credit, earned by eating cookies.

use tracing::{debug, warn};

use super::{ActionResult, Effect};
use crate::consts::is_reserved_name;
use crate::gameloop::GameState;
use crate::world::ActionError;

/// Pick up the first item called `name` in the current location
pub fn do_take(state: &mut GameState, name: &str) -> ActionResult {
    let reserved = is_reserved_name(name);

    if !reserved && state.pickup_credits == 0 {
        return Err(ActionError::NotPermitted);
    }

    if state.options.strict_take {
        if let Some(held) = &state.carried {
            return Err(ActionError::HandsFull {
                name: held.name().to_string(),
            });
        }
    }

    let Some(item) = state.current_location_mut().take_item(name) else {
        return Err(ActionError::ItemNotFound {
            name: name.to_string(),
        });
    };

    if !reserved {
        state.pickup_credits -= 1;
    }

    if reserved {
        state.message("You picked up a cookie.");
    } else {
        state.message(format!("You picked up {}.", article_name(item.name())));
    }
    debug!(item = item.name(), credits = state.pickup_credits, "take");

    if let Some(lost) = state.carried.replace(item) {
        warn!(item = lost.name(), "carried item overwritten by take");
    }

    Ok(Effect::Stayed)
}

/// Put the carried item down in the current location
pub fn do_drop(state: &mut GameState) -> ActionResult {
    let item = state.carried.take().ok_or(ActionError::NothingCarried)?;

    state.message(format!("You have dropped {}.", item.name()));
    debug!(item = item.name(), location = ?state.current, "drop");
    state.current_location_mut().add_item(Some(item));

    Ok(Effect::Stayed)
}

/// "a Chair", "an Apple"
fn article_name(name: &str) -> String {
    let vowel = name
        .chars()
        .next()
        .is_some_and(|c| "aeiouAEIOU".contains(c));
    if vowel {
        format!("an {name}")
    } else {
        format!("a {name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::{Location, LocationRegistry, WorldMap};
    use crate::object::{Item, ItemId};
    use crate::rng::GameRng;

    fn stocked_room() -> GameState {
        let mut registry = LocationRegistry::new();
        let room = registry.add(Location::new("in a lab"));
        let location = &mut registry[room];
        location.add_item(Some(Item::new(ItemId(1), "Chair", "a wooden chair", 5.0)));
        location.add_item(Some(Item::new(ItemId(2), "Cookie", "a cookie", 0.1)));
        location.add_item(Some(Item::new(ItemId(3), "Cookie", "a cookie", 0.1)));
        GameState::new(WorldMap { registry, start: room }, GameRng::new(1))
    }

    #[test]
    fn test_cookie_needs_no_credits() {
        let mut state = stocked_room();
        assert_eq!(do_take(&mut state, "COOKIE"), Ok(Effect::Stayed));
        assert_eq!(state.carried.as_ref().map(|i| i.id()), Some(ItemId(2)));
        assert_eq!(state.pickup_credits, 0);
        assert_eq!(state.current_location().items().len(), 2);
        assert_eq!(state.messages, vec!["You picked up a cookie."]);
    }

    #[test]
    fn test_other_items_need_credits() {
        let mut state = stocked_room();
        assert_eq!(do_take(&mut state, "chair"), Err(ActionError::NotPermitted));
        assert!(state.carried.is_none());
        assert_eq!(state.current_location().items().len(), 3);
    }

    #[test]
    fn test_credits_checked_before_presence() {
        let mut state = stocked_room();
        assert_eq!(do_take(&mut state, "piano"), Err(ActionError::NotPermitted));
        state.pickup_credits = 1;
        assert_eq!(
            do_take(&mut state, "piano"),
            Err(ActionError::ItemNotFound {
                name: "piano".into()
            })
        );
        assert_eq!(state.pickup_credits, 1);
    }

    #[test]
    fn test_take_spends_credit() {
        let mut state = stocked_room();
        state.pickup_credits = 2;
        do_take(&mut state, "Chair").unwrap();
        assert_eq!(state.pickup_credits, 1);
        assert_eq!(state.carried.as_ref().map(|i| i.name()), Some("Chair"));
        assert_eq!(state.messages, vec!["You picked up a Chair."]);
    }

    #[test]
    fn test_missing_cookie() {
        let mut state = stocked_room();
        do_take(&mut state, "cookie").unwrap();
        do_take(&mut state, "cookie").unwrap();
        assert_eq!(
            do_take(&mut state, "cookie"),
            Err(ActionError::ItemNotFound {
                name: "cookie".into()
            })
        );
    }

    #[test]
    fn test_take_overwrites_carried_item() {
        let mut state = stocked_room();
        do_take(&mut state, "cookie").unwrap();
        do_take(&mut state, "cookie").unwrap();
        assert_eq!(state.carried.as_ref().map(|i| i.id()), Some(ItemId(3)));
        // the first cookie is gone from both the room and the hand
        assert_eq!(state.current_location().items().len(), 1);
    }

    #[test]
    fn test_strict_take_requires_drop() {
        let mut state = stocked_room();
        state.options.strict_take = true;
        do_take(&mut state, "cookie").unwrap();
        assert_eq!(
            do_take(&mut state, "cookie"),
            Err(ActionError::HandsFull {
                name: "Cookie".into()
            })
        );
        assert_eq!(state.current_location().items().len(), 2);

        do_drop(&mut state).unwrap();
        do_take(&mut state, "cookie").unwrap();
    }

    #[test]
    fn test_drop_returns_item_to_room() {
        let mut state = stocked_room();
        do_take(&mut state, "cookie").unwrap();
        assert_eq!(do_drop(&mut state), Ok(Effect::Stayed));
        assert!(state.carried.is_none());
        let items = state.current_location().items();
        assert_eq!(items.len(), 3);
        assert_eq!(items[2].id(), ItemId(2));
    }

    #[test]
    fn test_drop_with_empty_hand() {
        let mut state = stocked_room();
        assert_eq!(do_drop(&mut state), Err(ActionError::NothingCarried));
    }

    #[test]
    fn test_article_name() {
        assert_eq!(article_name("Chair"), "a Chair");
        assert_eq!(article_name("Apple"), "an Apple");
        assert_eq!(article_name(""), "a ");
    }
}
