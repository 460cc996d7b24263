use std::collections::HashSet;

use log::{debug, info};

use crate::error::{MapError, MapResult};
use crate::room::Room;

/// A complete mansion map. Owns the whole room tree through its root.
#[derive(Debug, PartialEq, Eq)]
pub struct Mansion {
    pub(crate) root: Room,
}

impl Mansion {
    /// Wrap a fully built room tree.
    ///
    /// Room names are compared case-insensitively and must be unique, since
    /// the name is how a room is looked up and shown to the player.
    pub fn new(root: Room) -> MapResult<Self> {
        let mut seen = HashSet::new();
        for room in preorder(&root) {
            if !seen.insert(room.name().to_lowercase()) {
                return Err(MapError::DuplicateRoom(room.name().to_string()));
            }
        }

        Ok(Self { root })
    }

    /// The entry room.
    pub fn root(&self) -> &Room {
        &self.root
    }

    /// Find a room by name (case-insensitive).
    pub fn find(&self, name: &str) -> Option<&Room> {
        let name_lower = name.to_lowercase();
        self.rooms()
            .into_iter()
            .find(|room| room.name().to_lowercase() == name_lower)
    }

    /// All rooms in pre-order: a room, then its left subtree, then its right.
    pub fn rooms(&self) -> Vec<&Room> {
        preorder(&self.root)
    }

    /// All rooms without exits, left to right.
    pub fn leaves(&self) -> Vec<&Room> {
        self.rooms().into_iter().filter(|r| r.is_leaf()).collect()
    }

    /// Total number of rooms.
    pub fn room_count(&self) -> usize {
        self.root.room_count()
    }

    /// Number of levels from the root to the deepest leaf.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }
}

fn preorder(root: &Room) -> Vec<&Room> {
    let mut out = Vec::new();
    let mut stack = vec![root];
    while let Some(room) = stack.pop() {
        out.push(room);
        // Right goes on the stack first so left is visited first.
        stack.extend(room.right());
        stack.extend(room.left());
    }
    out
}

/// Build the fixed mansion layout played by the game.
///
/// ```text
/// Hall de Entrada
/// ├── Sala de Estar
/// │   ├── Cozinha
/// │   └── Jardim
/// └── Biblioteca
///     ├── Escritório
///     └── Quarto Secreto
///         ├── Cofre Antigo
///         └── Laboratório
/// ```
pub fn build_mansion_map() -> MapResult<Mansion> {
    let living_room = Room::new("Sala de Estar")?
        .with_left(Room::new("Cozinha")?)
        .with_right(Room::new("Jardim")?);

    let secret_room = Room::new("Quarto Secreto")?
        .with_left(Room::new("Cofre Antigo")?)
        .with_right(Room::new("Laboratório")?);

    let library = Room::new("Biblioteca")?
        .with_left(Room::new("Escritório")?)
        .with_right(secret_room);

    let hall = Room::new("Hall de Entrada")?
        .with_left(living_room)
        .with_right(library);

    let mansion = Mansion::new(hall)?;
    info!(
        "mansion map built: {} rooms, depth {}",
        mansion.room_count(),
        mansion.depth()
    );
    debug!("entry room is '{}'", mansion.root().name());
    Ok(mansion)
}
