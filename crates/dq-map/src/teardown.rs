use log::{debug, info};

use crate::mansion::Mansion;
use crate::room::Room;

/// Release every room of a finished mansion, children before parents.
///
/// `on_release` is called with each room's name just before that room's
/// storage is dropped: left subtree first, then right subtree, then the room
/// itself. Returns how many rooms were released. Passing `None` does nothing.
///
/// Taking the mansion by value guarantees nothing can observe a room after
/// it has been released.
pub fn release(mansion: Option<Mansion>, mut on_release: impl FnMut(&str)) -> usize {
    let Some(mansion) = mansion else {
        debug!("no mansion to release");
        return 0;
    };

    let released = release_room(mansion.root, &mut on_release);
    info!("released {released} rooms");
    released
}

fn release_room(room: Room, on_release: &mut impl FnMut(&str)) -> usize {
    let Room { name, left, right } = room;

    let mut released = 0;
    if let Some(left) = left {
        released += release_room(*left, on_release);
    }
    if let Some(right) = right {
        released += release_room(*right, on_release);
    }

    on_release(&name);
    debug!("released room '{name}'");
    released + 1
}
