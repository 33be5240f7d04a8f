//! Game state and the command loop

use serde::Serialize;
use tracing::{debug, info};

use crate::action::{
    ActionResult, Command, Effect, Verb, eat, help, movement, parse_line, pickup, teleport,
};
use crate::dungeon::{Location, LocationId, LocationRegistry, WorldMap};
use crate::object::Item;
use crate::rng::GameRng;
use crate::world::{ActionError, GameOptions};

/// Main game state
///
/// `previous` and `history` are two independent records of where the player
/// has been. Each action updates both according to its own rule; they are
/// allowed to disagree.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Every location in the world
    pub registry: LocationRegistry,

    /// Where the player is
    pub current: LocationId,

    /// Single-slot memory used by `back`
    pub previous: Option<LocationId>,

    /// Visited locations, most recent last; used by `stackback`
    pub history: Vec<LocationId>,

    /// The one item the player holds
    pub carried: Option<Item>,

    /// Non-reserved pickups still allowed
    pub pickup_credits: u32,

    /// Where firing the device leads; set when it is charged
    pub teleport_target: Option<LocationId>,

    /// Random source for gateways
    pub rng: GameRng,

    pub options: GameOptions,

    /// Messages for the current command
    pub messages: Vec<String>,

    /// Bounded log of every message
    pub message_history: Vec<String>,
}

impl GameState {
    /// Start a game in `map.start` with the given RNG
    pub fn new(map: WorldMap, rng: GameRng) -> Self {
        Self::with_options(map, rng, GameOptions::default())
    }

    pub fn with_options(map: WorldMap, rng: GameRng, options: GameOptions) -> Self {
        info!(start = ?map.start, locations = map.registry.len(), seed = rng.seed(), "new game");
        Self {
            registry: map.registry,
            current: map.start,
            previous: None,
            history: Vec::new(),
            carried: None,
            pickup_credits: 0,
            teleport_target: None,
            rng,
            options,
            messages: Vec::new(),
            message_history: Vec::new(),
        }
    }

    /// Add a message to display
    pub fn message(&mut self, msg: impl Into<String>) {
        let msg = msg.into();
        self.messages.push(msg.clone());
        self.message_history.push(msg);
        let limit = self.options.msghistory;
        if self.message_history.len() > limit {
            let excess = self.message_history.len() - limit;
            self.message_history.drain(..excess);
        }
    }

    pub fn clear_messages(&mut self) {
        self.messages.clear();
    }

    pub fn current_location(&self) -> &Location {
        &self.registry[self.current]
    }

    pub fn current_location_mut(&mut self) -> &mut Location {
        &mut self.registry[self.current]
    }

    /// Make `to` current, remembering where the player came from in both
    /// `previous` and the history stack
    pub fn relocate_with_history(&mut self, to: LocationId) {
        self.previous = Some(self.current);
        self.history.push(self.current);
        debug!(from = ?self.current, ?to, depth = self.history.len(), "relocate");
        self.current = to;
    }

    /// "You are carrying: ..." line
    pub fn carrying_description(&self) -> String {
        match &self.carried {
            Some(item) => format!("You are carrying: {}", item.long_description()),
            None => "You are not carrying anything.".to_string(),
        }
    }

    /// Location description followed by the carried item
    pub fn room_description(&self) -> String {
        format!(
            "{}\n{}",
            self.current_location().long_description(),
            self.carrying_description()
        )
    }
}

/// What the front end gets back from one command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub success: bool,
    pub message: String,
    pub location_changed: bool,
    /// The player asked to leave
    pub quit: bool,
}

impl Outcome {
    fn failure(error: &ActionError) -> Self {
        Self {
            success: false,
            message: error.to_string(),
            location_changed: false,
            quit: false,
        }
    }
}

/// Game loop controller
#[derive(Debug, Clone)]
pub struct GameLoop {
    state: GameState,
}

impl GameLoop {
    pub fn new(state: GameState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn into_state(self) -> GameState {
        self.state
    }

    /// Opening text: greeting plus the first look around
    pub fn welcome(&mut self) -> String {
        let text = format!("{}\n\n{}", help::welcome_text(), self.state.room_description());
        self.state.message(text.clone());
        text
    }

    /// Parse and execute one raw input line
    pub fn execute_line(&mut self, line: &str) -> Outcome {
        match parse_line(line) {
            Ok(command) => self.execute(command),
            Err(error) => self.fail(error),
        }
    }

    /// Execute a verb with its optional argument
    pub fn execute_verb(&mut self, verb: &str, argument: Option<&str>) -> Outcome {
        match Command::from_words(verb, argument) {
            Ok(command) => self.execute(command),
            Err(error) => self.fail(error),
        }
    }

    /// Execute a parsed command
    pub fn execute(&mut self, command: Command) -> Outcome {
        self.state.clear_messages();
        debug!(?command, "execute");

        let verb = command.verb();
        let result = self.dispatch(command);

        match result {
            Ok(effect) => {
                let moved = effect == Effect::Moved;
                let verbose = self.state.options.verbose
                    && !matches!(verb, Verb::Look | Verb::Help | Verb::Quit);
                if moved || verbose {
                    let description = self.state.room_description();
                    self.state.message(description);
                }
                Outcome {
                    success: true,
                    message: self.state.messages.join("\n"),
                    location_changed: moved,
                    quit: verb == Verb::Quit,
                }
            }
            Err(error) => self.fail(error),
        }
    }

    fn dispatch(&mut self, command: Command) -> ActionResult {
        let state = &mut self.state;
        match command {
            Command::Go(direction) => movement::do_move(state, &direction),
            Command::Back => movement::go_back(state),
            Command::StackBack => movement::go_back_stack(state),
            Command::Take(name) => pickup::do_take(state, &name),
            Command::Drop => pickup::do_drop(state),
            Command::Eat => eat::do_eat(state),
            Command::Charge => teleport::charge_device(state),
            Command::Fire => teleport::fire_device(state),
            Command::Look => {
                let description = state.room_description();
                state.message(description);
                Ok(Effect::Stayed)
            }
            Command::Help => {
                state.message(help::help_text());
                Ok(Effect::Stayed)
            }
            Command::Quit => {
                state.message("Thank you for playing.  Good bye.");
                Ok(Effect::Stayed)
            }
        }
    }

    fn fail(&mut self, error: ActionError) -> Outcome {
        debug!(%error, "command failed");
        self.state.clear_messages();
        self.state.message(error.to_string());
        Outcome::failure(&error)
    }
}
