//! Arcade Snake - wrap-around Snake for the terminal
//!
//! This library provides:
//! - Core game logic with injectable timer, surface and storage (game module)
//! - High score persistence (storage module)
//! - TUI rendering (render module)
//! - Keyboard mapping (input module)
//! - The interactive terminal mode (modes module)

pub mod config;
pub mod game;
pub mod input;
pub mod modes;
pub mod render;
pub mod storage;
