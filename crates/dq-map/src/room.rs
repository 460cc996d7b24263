use log::debug;

use crate::error::{MapError, MapResult};

/// One of the two links leaving a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Branch {
    /// The left-hand path (`e`, *esquerda*).
    Left,
    /// The right-hand path (`d`, *direita*).
    Right,
}

impl Branch {
    /// Both branches, left first.
    pub const ALL: [Branch; 2] = [Branch::Left, Branch::Right];

    /// Parse a branch from its command key (case-insensitive).
    pub fn from_key(key: char) -> Option<Self> {
        match key.to_ascii_lowercase() {
            'e' => Some(Self::Left),
            'd' => Some(Self::Right),
            _ => None,
        }
    }

    /// The lowercase command key for this branch.
    pub fn key(&self) -> char {
        match self {
            Self::Left => 'e',
            Self::Right => 'd',
        }
    }

    /// Display name used in player-facing text.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Left => "esquerda",
            Self::Right => "direita",
        }
    }
}

/// A named room in the mansion.
///
/// A room owns its children, so every room below the root has exactly one
/// parent and there is no way to form a cycle.
#[derive(Debug, PartialEq, Eq)]
pub struct Room {
    pub(crate) name: String,
    pub(crate) left: Option<Box<Room>>,
    pub(crate) right: Option<Box<Room>>,
}

impl Room {
    /// Create a room with no exits.
    ///
    /// The name is copied into storage reserved up front, so an allocation
    /// failure surfaces as [`MapError::Allocation`] instead of aborting.
    pub fn new(name: &str) -> MapResult<Self> {
        let name = duplicate_name(name)?;
        debug!("created room '{name}'");
        Ok(Self {
            name,
            left: None,
            right: None,
        })
    }

    /// Attach `room` as the left child, replacing any previous one.
    pub fn with_left(mut self, room: Room) -> Self {
        self.left = Some(Box::new(room));
        self
    }

    /// Attach `room` as the right child, replacing any previous one.
    pub fn with_right(mut self, room: Room) -> Self {
        self.right = Some(Box::new(room));
        self
    }

    /// Attach `room` on the given branch.
    pub fn with_child(self, branch: Branch, room: Room) -> Self {
        match branch {
            Branch::Left => self.with_left(room),
            Branch::Right => self.with_right(room),
        }
    }

    /// The room's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The room reached by going left, if any.
    pub fn left(&self) -> Option<&Room> {
        self.left.as_deref()
    }

    /// The room reached by going right, if any.
    pub fn right(&self) -> Option<&Room> {
        self.right.as_deref()
    }

    /// The room reached through `branch`, if any.
    pub fn child(&self, branch: Branch) -> Option<&Room> {
        match branch {
            Branch::Left => self.left(),
            Branch::Right => self.right(),
        }
    }

    /// Iterate over the existing children, left first.
    pub fn children(&self) -> impl Iterator<Item = &Room> {
        self.left().into_iter().chain(self.right())
    }

    /// True if the room has no exits.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Number of levels in the subtree rooted here. A leaf has depth 1.
    pub fn depth(&self) -> usize {
        1 + self.children().map(Room::depth).max().unwrap_or(0)
    }

    /// Number of rooms in the subtree rooted here, including this one.
    pub fn room_count(&self) -> usize {
        1 + self.children().map(Room::room_count).sum::<usize>()
    }
}

/// Copy a room name into freshly reserved storage.
fn duplicate_name(src: &str) -> MapResult<String> {
    if src.trim().is_empty() {
        return Err(MapError::EmptyRoomName);
    }

    let mut dst = String::new();
    dst.try_reserve_exact(src.len())?;
    dst.push_str(src);
    Ok(dst)
}
