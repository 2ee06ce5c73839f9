//! Entity implementation

use serde::{Deserialize, Serialize};

/// Entity identifier
///
/// A plain copyable handle. Collisions and ray hits refer to scene objects
/// through it instead of borrowing them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Entity {
    id: u32,
}

impl Entity {
    /// Create a new entity with the given ID
    pub const fn new(id: u32) -> Self {
        Self { id }
    }

    /// Get the entity ID
    pub fn id(&self) -> u32 {
        self.id
    }
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Entity({})", self.id)
    }
}
