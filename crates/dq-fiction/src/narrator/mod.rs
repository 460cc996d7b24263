//! Player-facing text for the exploration session.

mod templates;

pub use templates::{
    PROMPT, banner, farewell, invalid_option, leaf_reached, moving, no_path, room_options,
};
