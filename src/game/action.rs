/// Direction the snake can move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the delta (dx, dy) for moving in this direction
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn is_horizontal(&self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// Returns true if both directions move along the same axis.
    ///
    /// Turning onto the axis the snake already travels on is either a no-op
    /// or a 180-degree reversal, so steering rejects it.
    pub fn shares_axis(&self, other: Direction) -> bool {
        self.is_horizontal() == other.is_horizontal()
    }
}

/// Command a host can send to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    /// Toggles between running and paused
    Pause,
    Reset,
    Steer(Direction),
}

impl From<Direction> for Command {
    fn from(direction: Direction) -> Self {
        Command::Steer(direction)
    }
}
