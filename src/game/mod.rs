//! Core game logic module for Snake
//!
//! The engine owns the simulation and talks to the outside world only
//! through injected capabilities: a scheduler for ticks, a surface to draw
//! on, a store for the high score and optional score displays.

pub mod action;
pub mod config;
pub mod engine;
pub mod events;
pub mod state;
pub mod timer;

// Re-export commonly used types
pub use action::{Command, Direction};
pub use config::GameConfig;
pub use engine::{place_food, GameBuilder, SnakeGame, FOOD_RETRY_CAP};
pub use events::GameEvent;
pub use state::{Cell, GameState, RunState, Snake};
pub use timer::{IntervalScheduler, ManualScheduler, Scheduler, TimerHandle};
