//! Command parsing for player input.

use dq_map::Branch;

/// Key that ends the session.
const QUIT_KEY: char = 's';

/// A parsed player choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Take the left or right path.
    Move {
        /// The branch to follow.
        branch: Branch,
    },
    /// Leave the game.
    Quit,
    /// Anything that is not a recognized choice.
    Invalid {
        /// The original input, trimmed.
        input: String,
    },
}

/// Parse one line of player input into a command.
///
/// Only the first non-whitespace character matters and case is ignored, so
/// `"  E"`, `"e"` and `"esquerda"` all mean left. `None` stands for input that
/// could not be read at all and is treated as a request to quit.
pub fn parse_choice(input: Option<&str>) -> Command {
    let Some(line) = input else {
        return Command::Quit;
    };

    let Some(key) = line.chars().find(|c| !c.is_whitespace()) else {
        return Command::Invalid {
            input: String::new(),
        };
    };

    if key.to_ascii_lowercase() == QUIT_KEY {
        return Command::Quit;
    }

    match Branch::from_key(key) {
        Some(branch) => Command::Move { branch },
        None => Command::Invalid {
            input: line.trim().to_string(),
        },
    }
}
