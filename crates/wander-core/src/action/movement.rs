//! Walking between locations and retracing steps
//!
//! Three commands move the player:
//! - `go <direction>` follows an exit and records the departure in both the
//!   previous-location slot and the history stack. Leaving a random gateway
//!   records nothing: the player falls through rather than walks.
//! - `back` swaps the current and previous location, so two in a row return
//!   to the start. The departure is still pushed onto the history stack.
//! - `stackback` pops the history stack, consuming it.

use tracing::{debug, info};

use super::{ActionResult, Effect};
use crate::gameloop::GameState;
use crate::world::ActionError;

/// Follow the exit in `direction`
pub fn do_move(state: &mut GameState, direction: &str) -> ActionResult {
    let from = state.current;
    let Some(to) = state.registry.resolve_exit(from, direction, &mut state.rng) else {
        return Err(ActionError::NoExit {
            direction: direction.to_string(),
        });
    };

    if state.registry[from].is_random_gateway() {
        info!(?from, ?to, "fell through gateway");
        state.current = to;
    } else {
        state.relocate_with_history(to);
    }

    Ok(Effect::Moved)
}

/// Swap current and previous location
pub fn go_back(state: &mut GameState) -> ActionResult {
    let previous = state.previous.ok_or(ActionError::NoHistory)?;

    let left = state.current;
    state.current = previous;
    state.previous = Some(left);
    state.history.push(left);
    debug!(from = ?left, to = ?previous, "back");

    Ok(Effect::Moved)
}

/// Return to the most recent history entry, consuming it
pub fn go_back_stack(state: &mut GameState) -> ActionResult {
    let top = state.history.pop().ok_or(ActionError::NoHistory)?;

    state.previous = Some(state.current);
    debug!(from = ?state.current, to = ?top, depth = state.history.len(), "stackback");
    state.current = top;

    Ok(Effect::Moved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::{Location, LocationId, LocationRegistry, WorldMap};
    use crate::rng::GameRng;

    /// a -east-> b -east-> c, with west links back
    fn corridor() -> (GameState, [LocationId; 3]) {
        let mut registry = LocationRegistry::new();
        let a = registry.add(Location::new("in room a"));
        let b = registry.add(Location::new("in room b"));
        let c = registry.add(Location::new("in room c"));
        registry.set_exit(a, "east", b);
        registry.set_exit(b, "east", c);
        registry.set_exit(b, "west", a);
        registry.set_exit(c, "west", b);
        let state = GameState::new(WorldMap { registry, start: a }, GameRng::new(9));
        (state, [a, b, c])
    }

    #[test]
    fn test_move_records_history() {
        let (mut state, [a, b, _]) = corridor();
        assert_eq!(do_move(&mut state, "east"), Ok(Effect::Moved));
        assert_eq!(state.current, b);
        assert_eq!(state.previous, Some(a));
        assert_eq!(state.history, vec![a]);
    }

    #[test]
    fn test_move_without_exit_keeps_state() {
        let (mut state, [a, _, _]) = corridor();
        assert_eq!(
            do_move(&mut state, "north"),
            Err(ActionError::NoExit {
                direction: "north".into()
            })
        );
        assert_eq!(state.current, a);
        assert_eq!(state.previous, None);
        assert!(state.history.is_empty());
    }

    #[test]
    fn test_direction_match_is_exact() {
        let (mut state, [a, _, _]) = corridor();
        assert_eq!(
            do_move(&mut state, "EAST"),
            Err(ActionError::NoExit {
                direction: "EAST".into()
            })
        );
        assert_eq!(state.current, a);
        assert!(state.history.is_empty());
    }

    #[test]
    fn test_back_is_self_inverse() {
        let (mut state, [a, b, _]) = corridor();
        do_move(&mut state, "east").unwrap();

        go_back(&mut state).unwrap();
        assert_eq!(state.current, a);
        assert_eq!(state.previous, Some(b));

        go_back(&mut state).unwrap();
        assert_eq!(state.current, b);
        assert_eq!(state.previous, Some(a));

        assert_eq!(state.history, vec![a, b, a]);
    }

    #[test]
    fn test_back_without_previous() {
        let (mut state, [a, _, _]) = corridor();
        assert_eq!(go_back(&mut state), Err(ActionError::NoHistory));
        assert_eq!(state.current, a);
        assert!(state.history.is_empty());
    }

    #[test]
    fn test_stack_back_consumes_history() {
        let (mut state, [a, b, c]) = corridor();
        do_move(&mut state, "east").unwrap();
        do_move(&mut state, "east").unwrap();
        assert_eq!(state.history, vec![a, b]);

        go_back_stack(&mut state).unwrap();
        assert_eq!(state.current, b);
        assert_eq!(state.previous, Some(c));

        go_back_stack(&mut state).unwrap();
        assert_eq!(state.current, a);
        assert_eq!(state.previous, Some(b));

        assert_eq!(go_back_stack(&mut state), Err(ActionError::NoHistory));
        assert_eq!(state.current, a);
    }

    #[test]
    fn test_gateway_exit_skips_history() {
        let (mut state, [a, _, _]) = corridor();
        let gate = state.registry.add(Location::random_gateway("in a transporter"));
        state.registry.set_exit(a, "down", gate);

        do_move(&mut state, "down").unwrap();
        assert_eq!(state.current, gate);
        assert_eq!(state.history, vec![a]);

        do_move(&mut state, "anything").unwrap();
        assert_eq!(state.history, vec![a]);
        assert_eq!(state.previous, Some(a));
        assert!(state.current.0 < state.registry.len());
    }

    #[test]
    fn test_gateway_never_reports_no_exit() {
        let (mut state, _) = corridor();
        let gate = state.registry.add(Location::random_gateway("in a transporter"));
        for _ in 0..20 {
            state.current = gate;
            assert!(do_move(&mut state, "").is_ok());
        }
    }
}
