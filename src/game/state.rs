use serde::{Deserialize, Serialize};

use super::action::Direction;

/// A cell on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move cell in a direction, without wrapping
    pub fn stepped(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Fold the cell back onto a `tile_count` x `tile_count` torus
    pub fn wrapped(&self, tile_count: i32) -> Self {
        Self {
            x: self.x.rem_euclid(tile_count),
            y: self.y.rem_euclid(tile_count),
        }
    }

    pub fn is_within(&self, tile_count: i32) -> bool {
        (0..tile_count).contains(&self.x) && (0..tile_count).contains(&self.y)
    }
}

/// The snake, head first
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    body: Vec<Cell>,
}

impl Snake {
    /// Create a single-cell snake
    pub fn new(head: Cell) -> Self {
        Self { body: vec![head] }
    }

    /// Build a snake from explicit cells, head first.
    ///
    /// Returns `None` for an empty body.
    pub fn from_cells(body: Vec<Cell>) -> Option<Self> {
        if body.is_empty() {
            None
        } else {
            Some(Self { body })
        }
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn cells(&self) -> &[Cell] {
        &self.body
    }

    /// Check if any segment, head and tail included, sits on `cell`
    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Push a new head; the tail stays in place when growing
    pub fn advance(&mut self, new_head: Cell, grow: bool) {
        self.body.insert(0, new_head);

        if !grow {
            self.body.pop();
        }
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Returns true if the body holds no cells
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Lifecycle of one game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RunState {
    Idle,
    Running,
    Paused,
    GameOver,
}

impl RunState {
    pub fn label(&self) -> &'static str {
        match self {
            RunState::Idle => "Ready",
            RunState::Running => "Running",
            RunState::Paused => "Paused",
            RunState::GameOver => "Game Over",
        }
    }
}

/// Complete simulation state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Cell,
    /// Direction applied on the next tick; `None` while idle
    pub heading: Option<Direction>,
    pub tile_count: i32,
    pub score: u32,
    pub run_state: RunState,
}

impl GameState {
    pub fn new(snake: Snake, food: Cell, tile_count: i32) -> Self {
        Self {
            snake,
            food,
            heading: None,
            tile_count,
            score: 0,
            run_state: RunState::Idle,
        }
    }

    pub fn is_running(&self) -> bool {
        self.run_state == RunState::Running
    }
}
