use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::state::Cell;

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side of the square drawing surface, in pixels
    pub canvas_size: u32,
    /// Side of one grid cell, in pixels
    pub cell_size: u32,
    /// Milliseconds between two ticks
    pub tick_interval_ms: u64,
    /// Score awarded per food eaten
    pub food_reward: u32,
    /// Where the snake spawns; the board centre when unset
    pub start_cell: Option<Cell>,
    /// Storage key of the persisted high score
    pub high_score_key: String,
    /// Fixed RNG seed for reproducible food placement
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            canvas_size: 400,
            cell_size: 20,
            tick_interval_ms: 200,
            food_reward: 10,
            start_cell: None,
            high_score_key: "snakeHighScore".to_string(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a configuration for a custom canvas and cell size
    pub fn new(canvas_size: u32, cell_size: u32) -> Self {
        Self {
            canvas_size,
            cell_size,
            ..Default::default()
        }
    }

    /// Number of cells along each side of the board
    pub fn tile_count(&self) -> i32 {
        if self.cell_size == 0 {
            0
        } else {
            (self.canvas_size / self.cell_size) as i32
        }
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn start(&self) -> Cell {
        self.start_cell.unwrap_or_else(|| {
            let centre = self.tile_count() / 2;
            Cell::new(centre, centre)
        })
    }

    /// Reject geometry the engine cannot run on
    pub fn validate(&self) -> Result<()> {
        ensure!(self.cell_size > 0, "cell size must be positive");
        ensure!(
            self.canvas_size % self.cell_size == 0,
            "canvas size {} is not divisible by cell size {}",
            self.canvas_size,
            self.cell_size
        );
        ensure!(
            self.tile_count() >= 2,
            "board must be at least 2 cells wide, got {}",
            self.tile_count()
        );
        ensure!(self.tick_interval_ms > 0, "tick interval must be positive");
        ensure!(
            self.start().is_within(self.tile_count()),
            "start cell {:?} lies outside the {}x{} board",
            self.start(),
            self.tile_count(),
            self.tile_count()
        );
        Ok(())
    }
}
