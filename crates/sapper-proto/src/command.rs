//! Game commands
//!
//! The discrete commands the input layer produces. Commands are transient:
//! constructed, handed to the channel, never stored.

/// Compass direction for movement commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Up on screen.
    North,
    /// Down on screen.
    South,
    /// Right on screen.
    East,
    /// Left on screen.
    West,
}

impl Direction {
    /// Single-letter compass code used as the `move` event argument.
    pub fn compass_code(self) -> &'static str {
        match self {
            Direction::North => "N",
            Direction::South => "S",
            Direction::East => "E",
            Direction::West => "W",
        }
    }
}

/// A command emitted by the input translator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Start moving in a direction.
    Move(Direction),
    /// Stop moving.
    Stop,
    /// Plant a bomb.
    Plant,
    /// Light the fuse.
    Fuse,
}

impl Command {
    /// Event name the server dispatches on.
    pub fn event_name(self) -> &'static str {
        match self {
            Command::Move(_) => "move",
            Command::Stop => "stop",
            Command::Plant => "plant",
            Command::Fuse => "fuse",
        }
    }

    /// Positional event arguments. Only `move` carries one.
    pub fn args(self) -> Vec<String> {
        match self {
            Command::Move(direction) => vec![direction.compass_code().to_string()],
            Command::Stop | Command::Plant | Command::Fuse => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compass_codes() {
        assert_eq!(Direction::North.compass_code(), "N");
        assert_eq!(Direction::South.compass_code(), "S");
        assert_eq!(Direction::East.compass_code(), "E");
        assert_eq!(Direction::West.compass_code(), "W");
    }

    #[test]
    fn move_carries_direction_code() {
        let cmd = Command::Move(Direction::West);
        assert_eq!(cmd.event_name(), "move");
        assert_eq!(cmd.args(), vec!["W".to_string()]);
    }

    #[test]
    fn bare_commands_have_no_args() {
        for cmd in [Command::Stop, Command::Plant, Command::Fuse] {
            assert!(cmd.args().is_empty());
        }
    }
}
