//! Choice parsing and room name resolution.

mod command;
mod resolver;

pub use command::{Command, parse_choice};
pub use resolver::{fuzzy_match, resolve_room};
