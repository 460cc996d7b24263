//! Exploration session management.

use dq_map::{Branch, Mansion, Room};
use log::{debug, info};

use crate::config::ExplorationConfig;
use crate::error::{FictionError, FictionResult};
use crate::narrator;
use crate::parser::{Command, parse_choice, resolve_room};

/// Where an exploration session stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// The player is in a room with at least one exit.
    Playing,
    /// The player reached a room with no exits. Terminal.
    AwaitingLeafEnd,
    /// The player quit, or input ran out. Terminal.
    UserQuit,
}

impl SessionState {
    /// True for the two terminal states.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Playing)
    }
}

/// A single walk through the mansion.
///
/// The session borrows the mansion, so the map cannot be released while a
/// session is alive. Its only mutable state is the cursor and the state
/// machine.
#[derive(Debug)]
pub struct ExplorationSession<'m> {
    cursor: &'m Room,
    state: SessionState,
}

impl<'m> ExplorationSession<'m> {
    /// Start a session at the mansion entrance.
    pub fn new(mansion: &'m Mansion) -> Self {
        Self::starting_at(mansion.root())
    }

    /// Start a session in the named room (exact or fuzzy match).
    pub fn at_room(mansion: &'m Mansion, name: &str) -> FictionResult<Self> {
        let room = resolve_room(mansion, name)
            .ok_or_else(|| FictionError::RoomNotFound(name.to_string()))?;
        Ok(Self::starting_at(room))
    }

    /// Start a session as described by `config`.
    pub fn with_config(mansion: &'m Mansion, config: &ExplorationConfig) -> FictionResult<Self> {
        match &config.start_room {
            Some(name) => Self::at_room(mansion, name),
            None => Ok(Self::new(mansion)),
        }
    }

    fn starting_at(room: &'m Room) -> Self {
        // A start room without exits ends the session before any input.
        let state = if room.is_leaf() {
            SessionState::AwaitingLeafEnd
        } else {
            SessionState::Playing
        };
        info!("exploration starts in '{}' ({state:?})", room.name());
        Self {
            cursor: room,
            state,
        }
    }

    /// The room the player is in.
    pub fn cursor(&self) -> &'m Room {
        self.cursor
    }

    /// The current state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// True once the session reached a terminal state.
    pub fn is_finished(&self) -> bool {
        self.state.is_terminal()
    }

    /// Describe the current room and its exits.
    pub fn describe(&self) -> String {
        narrator::room_options(self.cursor)
    }

    /// Process one line of input. `None` means the input could not be read.
    pub fn process(&mut self, input: Option<&str>) -> FictionResult<String> {
        let command = parse_choice(input);
        self.execute(command)
    }

    /// Execute a parsed command and return the text to show the player.
    ///
    /// A turn that does not quit and leaves the cursor in a room without
    /// exits also ends the session; the returned text then includes the
    /// closing message.
    pub fn execute(&mut self, command: Command) -> FictionResult<String> {
        if self.is_finished() {
            return Err(FictionError::SessionOver);
        }

        let mut output = match command {
            Command::Quit => {
                self.transition(SessionState::UserQuit);
                return Ok(narrator::farewell());
            }
            Command::Move { branch } => self.do_move(branch),
            Command::Invalid { input } => {
                debug!("invalid choice {input:?} in '{}'", self.cursor.name());
                narrator::invalid_option()
            }
        };

        if self.cursor.is_leaf() {
            self.transition(SessionState::AwaitingLeafEnd);
            output.push_str(&narrator::leaf_reached(self.cursor));
        }

        Ok(output)
    }

    fn do_move(&mut self, branch: Branch) -> String {
        match self.cursor.child(branch) {
            Some(next) => {
                debug!(
                    "moving {} from '{}' to '{}'",
                    branch.name(),
                    self.cursor.name(),
                    next.name()
                );
                self.cursor = next;
                narrator::moving(branch)
            }
            None => narrator::no_path(branch, self.cursor),
        }
    }

    fn transition(&mut self, next: SessionState) {
        debug!("session state {:?} -> {next:?}", self.state);
        self.state = next;
        if next.is_terminal() {
            info!("exploration ended in '{}' ({next:?})", self.cursor.name());
        }
    }
}
