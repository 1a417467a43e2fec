//! Rebindable key map.
//!
//! Maps the six logical actions to physical key identifiers. The map is a
//! plain value owned by the [`Translator`](crate::Translator) and replaced
//! wholesale through an explicit method call; there is no global registry.
//!
//! Rebinding performs no validation: empty strings and duplicate key
//! assignments are accepted silently, mirroring the original client. A key
//! bound to several actions resolves to the first match in a fixed order
//! (up, down, left, right, plant, fuse), which makes collisions a
//! user-visible footgun rather than a fault.

use sapper_proto::Direction;
use serde::{Deserialize, Serialize};

/// A logical input action, independent of the key bound to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move north.
    MoveUp,
    /// Move south.
    MoveDown,
    /// Move west.
    MoveLeft,
    /// Move east.
    MoveRight,
    /// Plant a bomb.
    Plant,
    /// Light the fuse.
    Fuse,
}

impl Action {
    /// Direction produced by a movement action. `None` for plant/fuse.
    pub fn direction(self) -> Option<Direction> {
        match self {
            Action::MoveUp => Some(Direction::North),
            Action::MoveDown => Some(Direction::South),
            Action::MoveLeft => Some(Direction::West),
            Action::MoveRight => Some(Direction::East),
            Action::Plant | Action::Fuse => None,
        }
    }
}

/// The six-field binding record.
///
/// Serializes with the rebinding form's field names (`upKey`, `downKey`,
/// ...). Defaults to the original client's non-QWERTY layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyBindings {
    /// Key for [`Action::MoveUp`].
    pub up_key: String,
    /// Key for [`Action::MoveDown`].
    pub down_key: String,
    /// Key for [`Action::MoveLeft`].
    pub left_key: String,
    /// Key for [`Action::MoveRight`].
    pub right_key: String,
    /// Key for [`Action::Plant`].
    pub plant_key: String,
    /// Key for [`Action::Fuse`].
    pub fuse_key: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            up_key: "z".to_string(),
            down_key: "s".to_string(),
            left_key: "q".to_string(),
            right_key: "d".to_string(),
            plant_key: "o".to_string(),
            fuse_key: "p".to_string(),
        }
    }
}

impl KeyBindings {
    /// Key currently bound to an action. Never fails.
    pub fn get(&self, action: Action) -> &str {
        match action {
            Action::MoveUp => &self.up_key,
            Action::MoveDown => &self.down_key,
            Action::MoveLeft => &self.left_key,
            Action::MoveRight => &self.right_key,
            Action::Plant => &self.plant_key,
            Action::Fuse => &self.fuse_key,
        }
    }

    /// Resolve a physical key to its bound action.
    ///
    /// First match wins in the fixed order up, down, left, right, plant,
    /// fuse. Returns `None` for unbound keys.
    pub fn resolve(&self, key: &str) -> Option<Action> {
        const ORDER: [Action; 6] = [
            Action::MoveUp,
            Action::MoveDown,
            Action::MoveLeft,
            Action::MoveRight,
            Action::Plant,
            Action::Fuse,
        ];

        ORDER.into_iter().find(|&action| self.get(action) == key)
    }
}
